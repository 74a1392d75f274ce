//! 标签 ID
//!
//! 只列出读取 GeoTIFF 元数据时关心的标签，其余标签按代码保留。
//! 参考: <https://docs.ogc.org/is/19-008r4/19-008r4.html#_geotiff_tags_for_coordinate_transformations>

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// TIFF / GeoTIFF 标签 ID
#[derive(Debug, PartialEq, Clone, Copy, IntoPrimitive, TryFromPrimitive, Eq, Hash)]
#[repr(u16)]
pub enum TagId {
    ImageWidth = 0x0100,
    ImageHeight = 0x0101,
    BitsPerSample = 0x0102,
    SampleFormat = 0x0153,

    // GeoTIFF
    ModelPixelScale = 0x830E,
    ModelTiepoint = 0x8482,
    ModelTransformation = 0x85D8,
    /// GeoKey 目录 (34735)
    GeoKeyDirectory = 0x87AF,
    /// GeoKey 双精度参数 (34736)
    GeoDoubleParams = 0x87B0,
    /// GeoKey 字符串参数 (34737)
    GeoAsciiParams = 0x87B1,

    // GDAL
    GDALMetadata = 0xA480,
    GDALNoData = 0xA481,
}
