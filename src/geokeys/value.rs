//! GeoKey 键值与参数表
//!
//! 一个 GeoKey 的值有三种存放方式：
//! - 内联在目录记录中的短整型 (`tiff_tag_location == 0`)
//! - GeoDoubleParams 标签中的双精度数
//! - GeoAsciiParams 标签中的一段字符串
//!
//! `GeoParamTables` 把后两个辅助表连同它们的标签 ID 打包在一起，供解析器交叉引用。

use std::fmt::Display;

/// GeoDoubleParams 标签 ID
pub const GEO_DOUBLE_PARAMS_TAG: u16 = 34736;
/// GeoAsciiParams 标签 ID
pub const GEO_ASCII_PARAMS_TAG: u16 = 34737;

/// 解析后的单个 GeoKey 值
#[derive(Clone, Debug, PartialEq)]
pub enum GeoKeyValue {
    /// 内联短整型代码
    Short(u16),
    /// 双精度参数
    Double(f64),
    /// ASCII 字符串（不含结尾的终止符）
    Ascii(String),
    /// 位置无法识别
    Undefined,
}

impl GeoKeyValue {
    /// 作为代码读取，非内联值时为 0
    pub fn as_code(&self) -> u16 {
        match self {
            GeoKeyValue::Short(v) => *v,
            _ => 0,
        }
    }

    /// 作为双精度数读取，非双精度值时为 0.0
    pub fn as_double(&self) -> f64 {
        match self {
            GeoKeyValue::Double(v) => *v,
            _ => 0.0,
        }
    }

    /// 作为字符串读取，非字符串值时为空
    pub fn as_text(&self) -> &str {
        match self {
            GeoKeyValue::Ascii(s) => s,
            _ => "",
        }
    }
}

impl Display for GeoKeyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoKeyValue::Short(v) => write!(f, "{v}"),
            GeoKeyValue::Double(v) => write!(f, "{v}"),
            GeoKeyValue::Ascii(s) => write!(f, "{:?}", s),
            GeoKeyValue::Undefined => write!(f, "Undefined"),
        }
    }
}

/// GeoKey 辅助参数表
///
/// 两个表都可能缺失，缺失时对应的键解析为零值。
#[derive(Clone, Copy, Debug)]
pub struct GeoParamTables<'a> {
    /// GeoDoubleParams 内容
    pub doubles: Option<&'a [f64]>,
    /// GeoAsciiParams 原始字节
    ///
    /// 偏移量按字节计算，因此保持未解码的形式。
    pub ascii: Option<&'a [u8]>,
    /// 指向双精度表的 `tiff_tag_location`
    pub double_tag: u16,
    /// 指向字符串表的 `tiff_tag_location`
    pub ascii_tag: u16,
}

impl<'a> GeoParamTables<'a> {
    /// 使用标准标签 ID 创建参数表
    pub fn new(doubles: Option<&'a [f64]>, ascii: Option<&'a [u8]>) -> Self {
        Self {
            doubles,
            ascii,
            double_tag: GEO_DOUBLE_PARAMS_TAG,
            ascii_tag: GEO_ASCII_PARAMS_TAG,
        }
    }

    /// 没有任何辅助表
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    /// 替换交叉引用用的标签 ID
    pub fn with_tags(self, double_tag: u16, ascii_tag: u16) -> Self {
        Self {
            double_tag,
            ascii_tag,
            ..self
        }
    }

    /// 读取 `doubles[offset]`，越界或缺表时为 0.0
    pub fn double_at(&self, offset: u16) -> f64 {
        self.doubles
            .and_then(|doubles| doubles.get(offset as usize).copied())
            .unwrap_or(0.0)
    }

    /// 读取 `[offset, offset + count - 1)` 区间的字符串
    ///
    /// `count` 包含终止符，因此截取 `count - 1` 个字节。只对截取的片段做
    /// 有损 UTF-8 解码，表中其他位置的非 UTF-8 字节不影响偏移量。
    /// 区间越界、`count` 为 0 或缺表时返回空字符串。
    pub fn ascii_at(&self, offset: u16, count: u16) -> String {
        let Some(text) = self.ascii else {
            return String::new();
        };
        if count == 0 {
            return String::new();
        }
        let start = offset as usize;
        let end = start + count as usize - 1;
        text.get(start..end)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Default for GeoParamTables<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors_fall_back_to_zero() {
        assert_eq!(GeoKeyValue::Short(9001).as_code(), 9001);
        assert_eq!(GeoKeyValue::Double(1.5).as_code(), 0);
        assert_eq!(GeoKeyValue::Ascii("x".into()).as_double(), 0.0);
        assert_eq!(GeoKeyValue::Undefined.as_text(), "");
    }

    #[test]
    fn test_double_at_out_of_range() {
        let doubles = [6378137.0, 298.257223563];
        let tables = GeoParamTables::new(Some(&doubles), None);
        assert_eq!(tables.double_at(1), 298.257223563);
        assert_eq!(tables.double_at(2), 0.0);
        assert_eq!(GeoParamTables::empty().double_at(0), 0.0);
    }

    #[test]
    fn test_ascii_at_excludes_terminator() {
        let tables = GeoParamTables::new(None, Some(b"WGS 84 / UTM zone 17N|NAD83|".as_slice()));
        assert_eq!(tables.ascii_at(0, 22), "WGS 84 / UTM zone 17N");
        assert_eq!(tables.ascii_at(22, 6), "NAD83");
        assert_eq!(tables.ascii_at(22, 40), "");
        assert_eq!(tables.ascii_at(0, 0), "");
        assert_eq!(GeoParamTables::empty().ascii_at(0, 5), "");
    }

    #[test]
    fn test_ascii_at_never_panics_inside_multibyte_char() {
        let tables = GeoParamTables::new(None, Some("é|".as_bytes()));
        assert_eq!(tables.ascii_at(1, 2), "\u{FFFD}");
    }

    #[test]
    fn test_ascii_offsets_are_bytes_of_raw_table() {
        // Latin-1 的 é (0xE9) 不是合法 UTF-8，不能影响后面的偏移量
        let table = b"\xE9|RGF93 / Lambert-93|\0";
        let tables = GeoParamTables::new(None, Some(table.as_slice()));
        assert_eq!(tables.ascii_at(2, 19), "RGF93 / Lambert-93");
        assert_eq!(tables.ascii_at(0, 2), "\u{FFFD}");
    }
}
