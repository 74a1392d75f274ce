//! EPSG 名称查询
//!
//! 分类器依靠 EPSG 注册表中的坐标系名称（例如 `"WGS 84 / UTM zone 17N"`）
//! 判断坐标系类别，名称格式必须与注册表逐字一致。
//!
//! 查询表通过 `EpsgNameLookup` 注入，调用方可以换成自己的完整表。

use std::borrow::Cow;
use std::collections::HashMap;

use crate::geokeys::{Hemisphere, ProjectedCsType};

/// EPSG 代码到坐标系名称的查询
pub trait EpsgNameLookup {
    /// 返回代码对应的名称，未知代码返回 None
    fn epsg_name(&self, code: u16) -> Option<Cow<'_, str>>;
}

impl<L: EpsgNameLookup + ?Sized> EpsgNameLookup for &L {
    fn epsg_name(&self, code: u16) -> Option<Cow<'_, str>> {
        (**self).epsg_name(code)
    }
}

impl EpsgNameLookup for HashMap<u16, String> {
    fn epsg_name(&self, code: u16) -> Option<Cow<'_, str>> {
        self.get(&code).map(|name| Cow::Borrowed(name.as_str()))
    }
}

/// 内置的 EPSG 名称表
///
/// 覆盖分类器能识别的坐标系，以及若干常见但不受支持的投影。
/// UTM 分带名称按代码区间生成。
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticEpsgNames;

/// 逐个列出的名称
const NAMED_CODES: &[(u16, &str)] = &[
    (2154, "RGF93 / Lambert-93"),
    (2193, "NZGD2000 / New Zealand Transverse Mercator 2000"),
    (2263, "NAD83 / New York Long Island (ftUS)"),
    (3035, "ETRS89 / LAEA Europe"),
    (3857, "WGS 84 / Pseudo-Mercator"),
    (4171, "RGF93"),
    (4258, "ETRS89"),
    (4269, "NAD83"),
    (4326, "WGS 84"),
    (27572, "NTF (Paris) / Lambert zone II"),
];

impl EpsgNameLookup for StaticEpsgNames {
    fn epsg_name(&self, code: u16) -> Option<Cow<'_, str>> {
        let utm = match ProjectedCsType::from(code).wgs84_utm_zone() {
            Some((zone, Hemisphere::North)) => Some(("WGS 84", zone, 'N')),
            Some((zone, Hemisphere::South)) => Some(("WGS 84", zone, 'S')),
            None if (26901..=26923).contains(&code) => Some(("NAD83", (code - 26900) as u8, 'N')),
            None => None,
        };
        if let Some((datum, zone, hemisphere)) = utm {
            return Some(Cow::Owned(format!("{datum} / UTM zone {zone}{hemisphere}")));
        }

        NAMED_CODES
            .binary_search_by_key(&code, |(code, _)| *code)
            .ok()
            .map(|index| Cow::Borrowed(NAMED_CODES[index].1))
    }
}
