//! GeoTIFF GeoKey 模块
//!
//! 本模块负责把 GeoTIFF 私有标签中的 GeoKey 元数据解码为类型化的键值集合。
//! 基于 OGC GeoTIFF 1.1 标准实现。
//!
//! # 处理流程
//!
//! 1. `GeoKeyDirectory::parse` - 把 GeoKeyDirectory 标签的 u16 数组解析为原始键记录
//! 2. `RawKeyEntry::resolve` - 按存放位置（内联、双精度表、字符串表）解析每条记录的值
//! 3. `ResolvedGeoKeys::resolve` - 把所有值按键 ID 写入类型化字段
//!
//! 所有步骤都不会返回错误：缺失或格式错误的数据退化为默认值。
//!
//! # 示例
//!
//! ```
//! use geokey_crs::geokeys::{GeoKeyDirectory, GeoParamTables, ModelType, ResolvedGeoKeys};
//!
//! let raw = [1, 1, 0, 1, 1024, 0, 1, 2];
//! let directory = GeoKeyDirectory::parse(&raw);
//! let keys = ResolvedGeoKeys::resolve(directory.as_ref(), &GeoParamTables::empty());
//! assert_eq!(keys.model_type, ModelType::Geographic);
//! ```

mod codes;
mod directory;
mod id;
mod resolved;
mod value;

pub use codes::{
    AngularUnit, Ellipsoid, GeodeticDatum, GeographicType, Hemisphere, LinearUnit, ModelType,
    PrimeMeridian, ProjectedCsType, RasterType,
};
pub use directory::{GeoKeyDirectory, RawKeyEntry};
pub use id::GeoKeyId;
pub use resolved::ResolvedGeoKeys;
pub use value::{GeoKeyValue, GeoParamTables, GEO_ASCII_PARAMS_TAG, GEO_DOUBLE_PARAMS_TAG};
