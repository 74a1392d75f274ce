//! 坐标系分类模块
//!
//! 把解析后的 GeoKey 集合归类为有限的几种坐标系：
//!
//! - WGS84 地理坐标系
//! - WGS84 上的 UTM 分带
//! - NAD83（可能带 UTM 分带）
//! - Lambert-93
//! - 未定义 / 不支持
//!
//! 分类依据 EPSG 名称中的关键字，顺序固定为 NAD83、UTM、Lambert，先匹配者胜出。
//! 分类从不失败，任何不完整的输入都会得到一个描述符（可能是 `Undefined`）。
//!
//! # 示例
//!
//! ```
//! use geokey_crs::crs::{classify, CoordinateFamily, StaticEpsgNames};
//! use geokey_crs::geokeys::{ModelType, ProjectedCsType, ResolvedGeoKeys};
//!
//! let keys = ResolvedGeoKeys {
//!     model_type: ModelType::Projected,
//!     projected_cs_type: ProjectedCsType::from(32617u16),
//!     ..Default::default()
//! };
//! let crs = classify(&keys, &StaticEpsgNames);
//! assert_eq!(crs.family, CoordinateFamily::Utm);
//! assert_eq!(crs.utm_zone_number, Some(17));
//! ```

use std::fmt::Display;

use tracing::*;

use crate::geokeys::{GeographicType, LinearUnit, ModelType, ProjectedCsType, ResolvedGeoKeys};

mod epsg;
#[cfg(feature = "proj")]
mod projection;
mod zone;

pub use epsg::{EpsgNameLookup, StaticEpsgNames};
#[cfg(feature = "proj")]
pub use projection::{Projection, ProjectionError};
pub use zone::{citation_zone, parse_utm_zone, UtmZone};

/// 坐标系类别
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateFamily {
    /// 无法使用的坐标系元数据
    Undefined,
    /// WGS84 经纬度
    Geographic,
    /// WGS84 上的 UTM
    Utm,
    /// NAD83，`utm` 表示名称中同时包含 UTM
    Nad83 { utm: bool },
    /// Lambert-93（法国）
    Lambert93,
}

impl CoordinateFamily {
    /// 各类别对应的坐标系标签
    pub fn label(self) -> &'static str {
        match self {
            CoordinateFamily::Undefined => "Undefined",
            CoordinateFamily::Geographic => "GCS_WGS_1984",
            CoordinateFamily::Utm => "UTM",
            CoordinateFamily::Nad83 { .. } => "NAD83",
            CoordinateFamily::Lambert93 => "GCS_RESEAU_GEODESIQUE_FRANCAIS_1993",
        }
    }
}

/// 可识别的 Lambert 分区
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LambertZone {
    Lambert93,
}

/// 分类结果
///
/// 每次分类都新建一个描述符，之后不再修改。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateSystemDescriptor {
    pub family: CoordinateFamily,
    /// 仅 NAD83 类别记录
    pub epsg_code: Option<u16>,
    pub utm_zone_number: Option<u8>,
    pub utm_zone_letter: Option<char>,
    pub lambert_zone: Option<LambertZone>,
}

impl CoordinateSystemDescriptor {
    fn new(family: CoordinateFamily) -> Self {
        Self {
            family,
            epsg_code: None,
            utm_zone_number: None,
            utm_zone_letter: None,
            lambert_zone: None,
        }
    }

    /// 未定义的坐标系
    pub fn undefined() -> Self {
        Self::new(CoordinateFamily::Undefined)
    }

    /// WGS84 地理坐标系
    pub fn geographic() -> Self {
        Self::new(CoordinateFamily::Geographic)
    }

    fn with_utm_zone(self, zone: UtmZone) -> Self {
        Self {
            utm_zone_number: zone.number,
            utm_zone_letter: zone.letter,
            ..self
        }
    }

    /// 是否可用于地理参考
    pub fn is_defined(&self) -> bool {
        self.family != CoordinateFamily::Undefined
    }

    /// 坐标系标签，见 [`CoordinateFamily::label`]
    pub fn label(&self) -> &'static str {
        self.family.label()
    }

    /// 生成 proj4 定义字符串
    ///
    /// 缺少分带信息的 UTM / NAD83 以及未识别分区的 Lambert 返回 None。
    /// 按 EPSG 命名习惯，字母 `S` 表示南半球。
    pub fn proj_string(&self) -> Option<String> {
        let utm = |datum: &str| {
            self.utm_zone_number.map(|zone| {
                let south = match self.utm_zone_letter {
                    Some('S') => " +south",
                    _ => "",
                };
                format!("+proj=utm +zone={zone}{south} +datum={datum} +units=m +no_defs")
            })
        };
        match self.family {
            CoordinateFamily::Undefined => None,
            CoordinateFamily::Geographic => Some("+proj=longlat +datum=WGS84 +no_defs".into()),
            CoordinateFamily::Utm => utm("WGS84"),
            CoordinateFamily::Nad83 { utm: true } => utm("NAD83"),
            CoordinateFamily::Nad83 { utm: false } => None,
            CoordinateFamily::Lambert93 => self.lambert_zone.map(|zone| match zone {
                LambertZone::Lambert93 => "+proj=lcc +lat_0=46.5 +lon_0=3 +lat_1=49 +lat_2=44 \
                     +x_0=700000 +y_0=6600000 +ellps=GRS80 +units=m +no_defs"
                    .to_string(),
            }),
        }
    }
}

impl Display for CoordinateSystemDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self.family, self.label())?;
        if let Some(code) = self.epsg_code {
            write!(f, " EPSG:{code}")?;
        }
        if self.utm_zone_number.is_some() || self.utm_zone_letter.is_some() {
            write!(f, " zone ")?;
            if let Some(number) = self.utm_zone_number {
                write!(f, "{number}")?;
            }
            if let Some(letter) = self.utm_zone_letter {
                write!(f, "{letter}")?;
            }
        }
        if let Some(zone) = self.lambert_zone {
            write!(f, " {zone:?}")?;
        }
        Ok(())
    }
}

/// 确定用于查询名称的 EPSG 代码
///
/// 投影坐标系为 UserDefined 时退回地理坐标系代码（若已定义）。
fn effective_epsg(keys: &ResolvedGeoKeys) -> Option<u16> {
    let code = match keys.projected_cs_type {
        ProjectedCsType::UserDefined if keys.geographic_type != GeographicType::Undefined => {
            keys.geographic_type.code()
        }
        pcs => pcs.code(),
    };
    match code {
        0 | 32767 => None,
        code => Some(code),
    }
}

/// 对解析后的 GeoKey 集合分类
///
/// # 参数
///
/// * `keys` - 解析后的 GeoKey 集合
/// * `names` - EPSG 代码到坐标系名称的查询
///
/// # 返回值
///
/// 新建的坐标系描述。名称按 NAD83、UTM、Lambert 的顺序匹配，
/// 无法识别时为 `Undefined`。本函数不会失败，也不修改输入。
pub fn classify(keys: &ResolvedGeoKeys, names: &impl EpsgNameLookup) -> CoordinateSystemDescriptor {
    let descriptor = match keys.model_type {
        ModelType::Geographic => CoordinateSystemDescriptor::geographic(),
        ModelType::Projected => classify_projected(keys, names),
        other => {
            debug!("不支持的模型类型: {other}");
            CoordinateSystemDescriptor::undefined()
        }
    };
    debug!("坐标系分类结果: {descriptor}");
    descriptor
}

fn classify_projected(
    keys: &ResolvedGeoKeys,
    names: &impl EpsgNameLookup,
) -> CoordinateSystemDescriptor {
    if !matches!(keys.linear_unit, LinearUnit::Meter | LinearUnit::Undefined) {
        warn!("不支持的线性单位: {}", keys.linear_unit);
    }

    let Some(epsg) = effective_epsg(keys) else {
        debug!("投影坐标系没有可用的 EPSG 代码");
        return CoordinateSystemDescriptor::undefined();
    };
    let name = match names.epsg_name(epsg) {
        Some(name) if !name.is_empty() => name,
        _ => {
            debug!("未知的 EPSG 代码: {epsg}");
            return CoordinateSystemDescriptor::undefined();
        }
    };

    if name.contains("NAD83") {
        let utm = name.contains("UTM");
        let descriptor = CoordinateSystemDescriptor {
            epsg_code: Some(epsg),
            ..CoordinateSystemDescriptor::new(CoordinateFamily::Nad83 { utm })
        };
        if utm {
            descriptor.with_utm_zone(parse_utm_zone(&name))
        } else {
            descriptor
        }
    } else if name.contains("UTM") {
        CoordinateSystemDescriptor::new(CoordinateFamily::Utm).with_utm_zone(parse_utm_zone(&name))
    } else if name.contains("Lambert") {
        // 目前只识别 Lambert-93 一个分区
        let lambert_zone = match citation_zone(&keys.citation) {
            Some("Lambert-93") => Some(LambertZone::Lambert93),
            _ => None,
        };
        CoordinateSystemDescriptor {
            lambert_zone,
            ..CoordinateSystemDescriptor::new(CoordinateFamily::Lambert93)
        }
    } else {
        debug!("不支持的投影: {name}");
        CoordinateSystemDescriptor::undefined()
    }
}
