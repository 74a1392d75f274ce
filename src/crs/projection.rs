//! 投影转换
//!
//! 把分类结果转换为 proj4rs 投影，在 WGS84 经纬度和投影坐标之间转换。

use proj4rs::errors::Error as Proj4Error;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;

use super::{CoordinateFamily, CoordinateSystemDescriptor};

/// WGS84 经纬度（弧度）
const WGS84_LONGLAT: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// 投影错误类型
#[derive(Debug)]
pub enum ProjectionError {
    /// 描述符不足以构建投影
    NotGeoreferenced(CoordinateFamily),
    /// Proj4 库错误
    Proj4Error(Proj4Error),
}

impl From<Proj4Error> for ProjectionError {
    fn from(e: Proj4Error) -> Self {
        ProjectionError::Proj4Error(e)
    }
}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::NotGeoreferenced(family) => {
                write!(f, "坐标系无法用于地理参考: {family:?}")
            }
            ProjectionError::Proj4Error(e) => write!(f, "Proj4 错误: {e:?}"),
        }
    }
}

impl std::error::Error for ProjectionError {}

/// 由分类结果构建的投影
#[derive(Clone, Debug)]
pub struct Projection {
    pub descriptor: CoordinateSystemDescriptor,
    /// proj4rs 投影对象
    pub proj: Proj,
    wgs84: Proj,
}

impl Projection {
    /// 从分类结果创建投影
    ///
    /// # 参数
    ///
    /// * `descriptor` - 坐标系分类结果
    ///
    /// # 错误
    ///
    /// - 描述符没有 proj4 定义（`Undefined`、缺少分带等）时返回
    ///   [`ProjectionError::NotGeoreferenced`]
    /// - proj4rs 无法解析定义时返回 [`ProjectionError::Proj4Error`]
    pub fn from_descriptor(descriptor: &CoordinateSystemDescriptor) -> Result<Self, ProjectionError> {
        let definition = descriptor
            .proj_string()
            .ok_or(ProjectionError::NotGeoreferenced(descriptor.family))?;
        Ok(Self {
            descriptor: descriptor.clone(),
            proj: Proj::from_proj_string(&definition)?,
            wgs84: Proj::from_proj_string(WGS84_LONGLAT)?,
        })
    }

    fn is_geographic(&self) -> bool {
        self.descriptor.family == CoordinateFamily::Geographic
    }

    /// 从经纬度(度)转换到投影坐标
    ///
    /// 地理坐标系返回 (经度, 纬度) 度数。
    pub fn transform_from_lat_lon_deg(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<(f64, f64), ProjectionError> {
        let mut point = (lon.to_radians(), lat.to_radians(), 0.0);
        transform(&self.wgs84, &self.proj, &mut point)?;
        if self.is_geographic() {
            Ok((point.0.to_degrees(), point.1.to_degrees()))
        } else {
            Ok((point.0, point.1))
        }
    }

    /// 从投影坐标转换到经纬度(度)，返回 (纬度, 经度)
    pub fn transform_into_lat_lon_deg(
        &self,
        x: f64,
        y: f64,
    ) -> Result<(f64, f64), ProjectionError> {
        let mut point = if self.is_geographic() {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };
        transform(&self.proj, &self.wgs84, &mut point)?;
        Ok((point.1.to_degrees(), point.0.to_degrees()))
    }
}
