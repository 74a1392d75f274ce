//! GeoTIFF GeoKey 解码库
//!
//! 从 GeoTIFF 的三个私有标签中解码坐标参考系：
//! - GeoKeyDirectory (34735) - 键目录，u16 数组
//! - GeoDoubleParams (34736) - 双精度参数表
//! - GeoAsciiParams (34737) - 字符串参数表，`|` 分隔
//!
//! 解码结果是一个 [`CoordinateSystemDescriptor`]，只区分少数几种坐标系：
//! WGS84 地理坐标、UTM 分带、NAD83、Lambert-93，其余均为 `Undefined`。
//!
//! # 主要功能
//! - 解析键目录和键值（缺失或损坏的数据退化为默认值，不返回错误）
//! - 根据 EPSG 名称分类坐标系并提取分带信息
//! - 直接从 TIFF / BigTIFF 文件读取标签
//! - 构建 proj4rs 投影（`proj` 特性）
//!
//! # 示例
//! ```no_run
//! use geokey_crs::GeoKeyDecoder;
//! use std::fs::File;
//!
//! let mut file = File::open("example.tif").unwrap();
//! let crs = GeoKeyDecoder::new().decode_tiff(&mut file).unwrap();
//! println!("坐标系: {crs}");
//! println!("proj: {:?}", crs.proj_string());
//! ```

pub mod crs; // 坐标系分类
pub mod decoder; // 解码入口
pub mod geokeys; // GeoKey 解析
pub mod tiff; // TIFF 标签读取

// 重新导出常用类型
pub use crs::{classify, CoordinateFamily, CoordinateSystemDescriptor, EpsgNameLookup, StaticEpsgNames};
#[cfg(feature = "proj")]
pub use crs::{Projection, ProjectionError};
pub use decoder::{DecoderConfig, GeoKeyDecoder};
pub use tiff::{Tiff, TiffError};
