//! 解析后的 GeoKey 集合
//!
//! 把目录中的每条记录解析后按键 ID 写入对应的类型化字段。
//! 同一个键出现多次时以最后一次为准。

use std::fmt::Display;

use tracing::*;

use super::codes::{
    AngularUnit, Ellipsoid, GeodeticDatum, GeographicType, LinearUnit, ModelType, PrimeMeridian,
    ProjectedCsType, RasterType,
};
use super::{GeoKeyDirectory, GeoKeyId, GeoKeyValue, GeoParamTables};

/// 解析后的 GeoKey 值
///
/// 目录中没有出现的键保留默认值（代码 0、0.0 或空字符串），
/// 只有 `raster_type` 默认为 `PixelIsArea`，与 GeoTIFF 规范一致。
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGeoKeys {
    pub model_type: ModelType,
    pub raster_type: RasterType,
    /// GTCitationGeoKey 与 PCSCitationGeoKey 共用
    pub citation: String,

    pub geographic_type: GeographicType,
    pub geog_citation: String,
    pub geodetic_datum: GeodeticDatum,
    pub prime_meridian: PrimeMeridian,
    /// GeogLinearUnitsGeoKey 与 ProjLinearUnitsGeoKey 共用
    pub linear_unit: LinearUnit,
    pub geog_linear_unit_size: f64,
    pub angular_unit: AngularUnit,
    pub angular_unit_size: f64,
    pub ellipsoid: Ellipsoid,
    pub semi_major_axis: f64,
    pub semi_minor_axis: f64,
    pub inv_flattening: f64,
    pub azimuth_unit: AngularUnit,
    pub prime_meridian_longitude: f64,

    pub projected_cs_type: ProjectedCsType,
    pub proj_linear_unit_size: f64,

    /// 完整的 GeoAsciiParams 内容
    pub ascii_params: Option<String>,
}

impl Default for ResolvedGeoKeys {
    fn default() -> Self {
        Self {
            model_type: ModelType::default(),
            raster_type: RasterType::PixelIsArea,
            citation: String::new(),
            geographic_type: GeographicType::default(),
            geog_citation: String::new(),
            geodetic_datum: GeodeticDatum::default(),
            prime_meridian: PrimeMeridian::default(),
            linear_unit: LinearUnit::default(),
            geog_linear_unit_size: 0.0,
            angular_unit: AngularUnit::default(),
            angular_unit_size: 0.0,
            ellipsoid: Ellipsoid::default(),
            semi_major_axis: 0.0,
            semi_minor_axis: 0.0,
            inv_flattening: 0.0,
            azimuth_unit: AngularUnit::default(),
            prime_meridian_longitude: 0.0,
            projected_cs_type: ProjectedCsType::default(),
            proj_linear_unit_size: 0.0,
            ascii_params: None,
        }
    }
}

impl ResolvedGeoKeys {
    /// 解析目录中的所有键
    ///
    /// # 参数
    ///
    /// * `directory` - 解析后的目录，`None` 表示文件中没有 GeoKey
    /// * `tables` - 辅助参数表
    ///
    /// # 返回值
    ///
    /// 按目录顺序写入的键值集合，重复的键以最后一次为准。
    /// 目录缺失时返回全部为默认值的集合。
    pub fn resolve(directory: Option<&GeoKeyDirectory>, tables: &GeoParamTables) -> Self {
        let mut keys = Self {
            ascii_params: tables
                .ascii
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
            ..Self::default()
        };
        if let Some(directory) = directory {
            for entry in directory.entries.iter() {
                let Some(id) = entry.id() else {
                    trace!("忽略未知 GeoKey: 0x{:04X}", entry.key_id);
                    continue;
                };
                keys.apply(id, &entry.resolve(tables));
            }
        }
        keys
    }

    /// 写入单个键的值，已有值会被覆盖
    pub fn apply(&mut self, id: GeoKeyId, value: &GeoKeyValue) {
        use GeoKeyId::*;
        match id {
            GTModelTypeGeoKey => self.model_type = value.as_code().into(),
            GTRasterTypeGeoKey => self.raster_type = value.as_code().into(),
            GTCitationGeoKey | PCSCitationGeoKey => self.citation = value.as_text().to_string(),

            GeographicTypeGeoKey => self.geographic_type = value.as_code().into(),
            GeogCitationGeoKey => self.geog_citation = value.as_text().to_string(),
            GeogGeodeticDatumGeoKey => self.geodetic_datum = value.as_code().into(),
            GeogPrimeMeridianGeoKey => self.prime_meridian = value.as_code().into(),
            GeogLinearUnitsGeoKey | ProjLinearUnitsGeoKey => {
                self.linear_unit = value.as_code().into()
            }
            GeogLinearUnitSizeGeoKey => self.geog_linear_unit_size = value.as_double(),
            GeogAngularUnitsGeoKey => self.angular_unit = value.as_code().into(),
            GeogAngularUnitSizeGeoKey => self.angular_unit_size = value.as_double(),
            GeogEllipsoidGeoKey => self.ellipsoid = value.as_code().into(),
            GeogSemiMajorAxisGeoKey => self.semi_major_axis = value.as_double(),
            GeogSemiMinorAxisGeoKey => self.semi_minor_axis = value.as_double(),
            GeogInvFlatteningGeoKey => self.inv_flattening = value.as_double(),
            GeogAzimuthUnitsGeoKey => self.azimuth_unit = value.as_code().into(),
            GeogPrimeMeridianLongGeoKey => self.prime_meridian_longitude = value.as_double(),

            ProjectedCSTypeGeoKey => self.projected_cs_type = value.as_code().into(),
            ProjLinearUnitSizeGeoKey => self.proj_linear_unit_size = value.as_double(),

            // 投影参数和垂直坐标系键不参与分类
            _ => trace!("跳过 GeoKey {id:?}: {value}"),
        }
    }
}

impl Display for ResolvedGeoKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Resolved GeoKeys:")?;
        writeln!(f, "  Model: {}, Raster: {}", self.model_type, self.raster_type)?;
        writeln!(f, "  Citation: {:?}", self.citation)?;
        writeln!(
            f,
            "  Geographic: {}, Datum: {}, Ellipsoid: {}",
            self.geographic_type, self.geodetic_datum, self.ellipsoid
        )?;
        writeln!(
            f,
            "  Units: linear {}, angular {}",
            self.linear_unit, self.angular_unit
        )?;
        write!(f, "  Projected: {}", self.projected_cs_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &[u16], tables: &GeoParamTables) -> ResolvedGeoKeys {
        ResolvedGeoKeys::resolve(GeoKeyDirectory::parse(raw).as_ref(), tables)
    }

    #[test]
    fn test_missing_directory_keeps_defaults() {
        let keys = ResolvedGeoKeys::resolve(None, &GeoParamTables::empty());
        assert_eq!(keys, ResolvedGeoKeys::default());
        assert_eq!(keys.model_type, ModelType::Undefined);
        assert_eq!(keys.raster_type, RasterType::PixelIsArea);
    }

    #[test]
    fn test_typed_fields_are_filled() {
        let doubles = [6378137.0, 298.257223563];
        let ascii = "WGS 84|";
        let tables = GeoParamTables::new(Some(&doubles), Some(ascii.as_bytes()));
        let raw = [
            1, 1, 0, 6, //
            1024, 0, 1, 2, //
            2048, 0, 1, 4326, //
            2049, 34737, 7, 0, //
            2054, 0, 1, 9102, //
            2057, 34736, 1, 0, //
            2059, 34736, 1, 1,
        ];
        let keys = resolve(&raw, &tables);
        assert_eq!(keys.model_type, ModelType::Geographic);
        assert_eq!(keys.geographic_type, GeographicType::Wgs84);
        assert_eq!(keys.geog_citation, "WGS 84");
        assert_eq!(keys.angular_unit, AngularUnit::Degree);
        assert_eq!(keys.semi_major_axis, 6378137.0);
        assert_eq!(keys.inv_flattening, 298.257223563);
        assert_eq!(keys.ascii_params.as_deref(), Some("WGS 84|"));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let tables = GeoParamTables::empty();
        let both = resolve(&[1, 1, 0, 2, 3072, 0, 1, 32617, 3072, 0, 1, 26917], &tables);
        let last_only = resolve(&[1, 1, 0, 1, 3072, 0, 1, 26917], &tables);
        assert_eq!(both, last_only);
        assert_eq!(both.projected_cs_type.code(), 26917);
    }

    #[test]
    fn test_citation_keys_share_one_slot() {
        let ascii = "GT citation|RGF93 / Lambert-93|";
        let tables = GeoParamTables::new(None, Some(ascii.as_bytes()));
        let raw = [1, 1, 0, 2, 1026, 34737, 12, 0, 3073, 34737, 19, 12];
        assert_eq!(resolve(&raw, &tables).citation, "RGF93 / Lambert-93");
    }

    #[test]
    fn test_linear_unit_keys_share_one_slot() {
        let raw = [1, 1, 0, 2, 2052, 0, 1, 9002, 3076, 0, 1, 9001];
        let keys = resolve(&raw, &GeoParamTables::empty());
        assert_eq!(keys.linear_unit, LinearUnit::Meter);
    }

    #[test]
    fn test_wrong_encoding_falls_back_to_zero() {
        let doubles = [1.0];
        let tables = GeoParamTables::new(Some(&doubles), None);
        // 模型类型指向双精度表，代码字段只接受内联值
        let raw = [1, 1, 0, 2, 1024, 34736, 1, 0, 2057, 0, 1, 5];
        let keys = resolve(&raw, &tables);
        assert_eq!(keys.model_type, ModelType::Undefined);
        assert_eq!(keys.semi_major_axis, 0.0);
    }

    #[test]
    fn test_unknown_and_unmodelled_keys_are_ignored() {
        let raw = [1, 1, 0, 3, 0x7FFF, 0, 1, 9, 3078, 0, 1, 44, 1024, 0, 1, 1];
        let keys = resolve(&raw, &GeoParamTables::empty());
        assert_eq!(
            keys,
            ResolvedGeoKeys {
                model_type: ModelType::Projected,
                ..ResolvedGeoKeys::default()
            }
        );
    }
}
