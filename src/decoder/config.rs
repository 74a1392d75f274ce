use crate::geokeys::{GEO_ASCII_PARAMS_TAG, GEO_DOUBLE_PARAMS_TAG};

/// 解码器配置
///
/// 两个标签 ID 既用于识别目录记录中的 `tiff_tag_location`，
/// 也用于在 TIFF 文件中查找对应的参数表。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// 双精度参数表的标签 ID
    pub double_params_tag: u16,
    /// 字符串参数表的标签 ID
    pub ascii_params_tag: u16,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            double_params_tag: GEO_DOUBLE_PARAMS_TAG,
            ascii_params_tag: GEO_ASCII_PARAMS_TAG,
        }
    }
}
