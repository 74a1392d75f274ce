//! GeoKey 标识符
//!
//! GeoKey 目录中每条记录的第一个短整型就是键 ID。这里列出 OGC GeoTIFF 1.1
//! 定义的全部标准键；不在此列表中的键在解析时会被忽略。
//!
//! 参考: <https://docs.ogc.org/is/19-008r4/19-008r4.html#_summary_of_geokey_ids_and_names>

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// GeoTIFF 标准 GeoKey ID
///
/// 按用途分为四组：配置键 (1024-1026)、地理坐标系键 (2048-2061)、
/// 投影坐标系键 (3072-3095) 以及垂直坐标系键 (4096-4099)。
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum GeoKeyId {
    // 配置键
    /// 模型类型：投影、地理或地心
    GTModelTypeGeoKey = 1024,
    /// 像素代表面积还是点
    GTRasterTypeGeoKey = 1025,
    /// 整体引用说明
    GTCitationGeoKey = 1026,

    // 地理坐标系键
    /// 地理坐标系 EPSG 代码
    GeographicTypeGeoKey = 2048,
    GeogCitationGeoKey = 2049,
    /// 大地基准面代码
    GeogGeodeticDatumGeoKey = 2050,
    GeogPrimeMeridianGeoKey = 2051,
    GeogLinearUnitsGeoKey = 2052,
    GeogLinearUnitSizeGeoKey = 2053,
    GeogAngularUnitsGeoKey = 2054,
    GeogAngularUnitSizeGeoKey = 2055,
    /// 椭球体代码
    GeogEllipsoidGeoKey = 2056,
    GeogSemiMajorAxisGeoKey = 2057,
    GeogSemiMinorAxisGeoKey = 2058,
    GeogInvFlatteningGeoKey = 2059,
    GeogAzimuthUnitsGeoKey = 2060,
    GeogPrimeMeridianLongGeoKey = 2061,

    // 投影坐标系键
    /// 投影坐标系 EPSG 代码
    ProjectedCSTypeGeoKey = 3072,
    /// 投影坐标系引用说明，与 GTCitationGeoKey 共用同一个结果槽位
    PCSCitationGeoKey = 3073,
    ProjectionGeoKey = 3074,
    ProjCoordTransGeoKey = 3075,
    ProjLinearUnitsGeoKey = 3076,
    ProjLinearUnitSizeGeoKey = 3077,
    ProjStdParallel1GeoKey = 3078,
    ProjStdParallel2GeoKey = 3079,
    ProjNatOriginLongGeoKey = 3080,
    ProjNatOriginLatGeoKey = 3081,
    ProjFalseEastingGeoKey = 3082,
    ProjFalseNorthingGeoKey = 3083,
    ProjFalseOriginLongGeoKey = 3084,
    ProjFalseOriginLatGeoKey = 3085,
    ProjFalseOriginEastingGeoKey = 3086,
    ProjFalseOriginNorthingGeoKey = 3087,
    ProjCenterLongGeoKey = 3088,
    ProjCenterLatGeoKey = 3089,
    ProjCenterEastingGeoKey = 3090,
    ProjCenterNorthingGeoKey = 3091,
    ProjScaleAtNatOriginGeoKey = 3092,
    ProjScaleAtCenterGeoKey = 3093,
    ProjAzimuthAngleGeoKey = 3094,
    ProjStraightVertPoleLongGeoKey = 3095,

    // 垂直坐标系键
    VerticalCSTypeGeoKey = 4096,
    VerticalCitationGeoKey = 4097,
    VerticalDatumGeoKey = 4098,
    VerticalUnitsGeoKey = 4099,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        assert_eq!(GeoKeyId::try_from(1024).ok(), Some(GeoKeyId::GTModelTypeGeoKey));
        assert_eq!(u16::from(GeoKeyId::ProjectedCSTypeGeoKey), 3072);
        assert_eq!(GeoKeyId::try_from(3073).ok(), Some(GeoKeyId::PCSCitationGeoKey));
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(GeoKeyId::try_from(1027).is_err());
        assert!(GeoKeyId::try_from(0).is_err());
        assert!(GeoKeyId::try_from(5000).is_err());
    }
}
