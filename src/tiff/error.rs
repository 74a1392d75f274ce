//! TIFF 读取错误

use std::fmt;
use std::io;

use super::TagId;

/// 读取 TIFF 标签时可能出现的错误
#[derive(Debug)]
pub enum TiffError {
    /// 文件头不是 TIFF / BigTIFF
    BadMagicBytes,

    /// 文件中没有任何 IFD
    NoIfd0,

    /// 底层 IO 错误
    ReadError(io::Error),

    /// 标签不存在
    MissingTag(TagId),

    /// 标签类型或内容无法解析
    BadTag(TagId),

    /// 标签声明的数据超出文件范围
    TagOutOfBounds { code: u16, size: u64 },
}

impl From<io::Error> for TiffError {
    fn from(e: io::Error) -> Self {
        TiffError::ReadError(e)
    }
}

impl fmt::Display for TiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiffError::BadMagicBytes => write!(f, "无效的TIFF文件魔数"),
            TiffError::NoIfd0 => write!(f, "未找到IFD0"),
            TiffError::ReadError(e) => write!(f, "IO读取错误: {}", e),
            TiffError::MissingTag(tag) => write!(f, "缺少标签: {:?}", tag),
            TiffError::BadTag(tag) => write!(f, "标签数据错误: {:?}", tag),
            TiffError::TagOutOfBounds { code, size } => {
                write!(f, "标签 {} 的数据 ({} 字节) 超出文件范围", code, size)
            }
        }
    }
}

impl std::error::Error for TiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TiffError::ReadError(e) => Some(e),
            _ => None,
        }
    }
}
