//! GeoKey 枚举值代码
//!
//! 多数 GeoKey 的值是一个内联存储的短整型代码（EPSG 或 GeoTIFF 定义）。
//! 本模块把这些代码映射为枚举类型。每个枚举都带有一个兜底变体 `Other`，
//! 未列出的代码会原样保留，不会丢失。所有枚举的默认值都是代码 0 (`Undefined`)。

/// 定义一个带兜底变体的代码枚举
macro_rules! geo_code_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, ::num_enum::FromPrimitive)]
        #[repr(u16)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )*
            /// 未列出的代码
            #[num_enum(catch_all)]
            Other(u16),
        }

        impl $name {
            /// 返回原始代码
            pub fn code(self) -> u16 {
                match self {
                    $( Self::$variant => $value, )*
                    Self::Other(code) => code,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from(0u16)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    Self::Other(code) => write!(f, "Other({code})"),
                    _ => write!(f, "{self:?}"),
                }
            }
        }
    };
}

geo_code_enum! {
    /// 模型类型 (GTModelTypeGeoKey)
    pub enum ModelType {
        Undefined = 0,
        /// 投影坐标系
        Projected = 1,
        /// 经纬度地理坐标系
        Geographic = 2,
        /// 地心 (X,Y,Z) 坐标系
        Geocentric = 3,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 栅格类型 (GTRasterTypeGeoKey)
    pub enum RasterType {
        Undefined = 0,
        PixelIsArea = 1,
        PixelIsPoint = 2,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 地理坐标系 (GeographicTypeGeoKey)
    ///
    /// 只列出常用的 EPSG 代码，其余通过 `Other` 保留。
    pub enum GeographicType {
        Undefined = 0,
        /// RGF93，法国
        Rgf93 = 4171,
        /// ETRS89
        Etrs89 = 4258,
        Nad27 = 4267,
        Nad83 = 4269,
        Wgs72 = 4322,
        Wgs84 = 4326,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 大地基准面 (GeogGeodeticDatumGeoKey)
    pub enum GeodeticDatum {
        Undefined = 0,
        Rgf93 = 6171,
        Etrs89 = 6258,
        Nad27 = 6267,
        Nad83 = 6269,
        Wgs72 = 6322,
        Wgs84 = 6326,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 本初子午线 (GeogPrimeMeridianGeoKey)
    pub enum PrimeMeridian {
        Undefined = 0,
        Greenwich = 8901,
        Lisbon = 8902,
        Paris = 8903,
        Bogota = 8904,
        Madrid = 8905,
        Rome = 8906,
        Bern = 8907,
        Jakarta = 8908,
        Ferro = 8909,
        Brussels = 8910,
        Stockholm = 8911,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 线性单位 (GeogLinearUnitsGeoKey / ProjLinearUnitsGeoKey)
    pub enum LinearUnit {
        Undefined = 0,
        Meter = 9001,
        Foot = 9002,
        FootUsSurvey = 9003,
        FootModifiedAmerican = 9004,
        FootClarke = 9005,
        FootIndian = 9006,
        Link = 9007,
        LinkBenoit = 9008,
        LinkSears = 9009,
        ChainBenoit = 9010,
        ChainSears = 9011,
        YardSears = 9012,
        YardIndian = 9013,
        Fathom = 9014,
        MileInternationalNautical = 9015,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 角度单位 (GeogAngularUnitsGeoKey / GeogAzimuthUnitsGeoKey)
    pub enum AngularUnit {
        Undefined = 0,
        Radian = 9101,
        Degree = 9102,
        ArcMinute = 9103,
        ArcSecond = 9104,
        Grad = 9105,
        Gon = 9106,
        Dms = 9107,
        DmsHemisphere = 9108,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 椭球体 (GeogEllipsoidGeoKey)
    pub enum Ellipsoid {
        Undefined = 0,
        Airy1830 = 7001,
        AiryModified1849 = 7002,
        AustralianNationalSpheroid = 7003,
        Bessel1841 = 7004,
        BesselModified = 7005,
        BesselNamibia = 7006,
        Clarke1858 = 7007,
        Clarke1866 = 7008,
        Clarke1866Michigan = 7009,
        Clarke1880Benoit = 7010,
        Clarke1880Ign = 7011,
        Clarke1880Rgs = 7012,
        Clarke1880Arc = 7013,
        Clarke1880Sga1922 = 7014,
        Everest1830Adjustment1937 = 7015,
        Everest1830Definition1967 = 7016,
        Everest1830Definition1975 = 7017,
        Everest1830Modified = 7018,
        Grs1980 = 7019,
        Helmert1906 = 7020,
        IndonesianNationalSpheroid = 7021,
        International1924 = 7022,
        International1967 = 7023,
        Krassowsky1940 = 7024,
        Nwl9d = 7025,
        Nwl10d = 7026,
        Plessis1817 = 7027,
        Struve1860 = 7028,
        WarOffice = 7029,
        Wgs84 = 7030,
        Gem10c = 7031,
        Osu86f = 7032,
        Osu91a = 7033,
        Clarke1880 = 7034,
        Sphere = 7035,
        UserDefined = 32767,
    }
}

geo_code_enum! {
    /// 投影坐标系 (ProjectedCSTypeGeoKey)
    ///
    /// EPSG 投影坐标系代码数量庞大，具体代码都通过 `Other` 保留，
    /// 名称由 `EpsgNameLookup` 查询。
    pub enum ProjectedCsType {
        Undefined = 0,
        /// 分类时退回地理坐标系代码
        UserDefined = 32767,
    }
}

/// UTM 半球
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Hemisphere {
    North,
    South,
}

impl ProjectedCsType {
    /// WGS84 UTM 分带 (32601-32660 北半球, 32701-32760 南半球)
    pub fn wgs84_utm_zone(self) -> Option<(u8, Hemisphere)> {
        match self.code() {
            code @ 32601..=32660 => Some(((code - 32600) as u8, Hemisphere::North)),
            code @ 32701..=32760 => Some(((code - 32700) as u8, Hemisphere::South)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_codes() {
        assert_eq!(ModelType::from(1u16), ModelType::Projected);
        assert_eq!(ModelType::from(2u16), ModelType::Geographic);
        assert_eq!(LinearUnit::from(9001u16), LinearUnit::Meter);
        assert_eq!(AngularUnit::Degree.code(), 9102);
    }

    #[test]
    fn test_unlisted_code_is_preserved() {
        let pcs = ProjectedCsType::from(32617u16);
        assert_eq!(pcs, ProjectedCsType::Other(32617));
        assert_eq!(pcs.code(), 32617);
        assert_eq!(format!("{pcs}"), "Other(32617)");
    }

    #[test]
    fn test_defaults_are_undefined() {
        assert_eq!(ModelType::default(), ModelType::Undefined);
        assert_eq!(GeographicType::default(), GeographicType::Undefined);
        assert_eq!(ProjectedCsType::default().code(), 0);
    }

    #[test]
    fn test_wgs84_utm_zone_ranges() {
        assert_eq!(
            ProjectedCsType::from(32617u16).wgs84_utm_zone(),
            Some((17, Hemisphere::North))
        );
        assert_eq!(
            ProjectedCsType::from(32760u16).wgs84_utm_zone(),
            Some((60, Hemisphere::South))
        );
        assert_eq!(ProjectedCsType::from(26917u16).wgs84_utm_zone(), None);
        assert_eq!(ProjectedCsType::from(2154u16).wgs84_utm_zone(), None);
    }
}
