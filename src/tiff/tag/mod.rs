//! TIFF 标签
//!
//! 保存标签的原始字节，按需解码为数值或字符串。

use super::Endian;
use num_enum::{FromPrimitive, IntoPrimitive};
use num_traits::cast::NumCast;
use std::fmt::Display;

mod id;

pub use id::TagId;

/// IFD 中的一个标签
#[derive(Clone, Debug)]
pub struct Tag {
    pub code: u16,
    pub datatype: TagType,
    /// 数据项个数（不是字节数）
    pub count: u64,
    /// 原始数据字节
    pub data: Vec<u8>,
    pub endian: Endian,
}

impl Tag {
    /// 标准标签 ID
    pub fn id(&self) -> Option<TagId> {
        TagId::try_from(self.code).ok()
    }

    /// 解码为数值数组
    ///
    /// 有理数、字符串等非整数/浮点类型返回 None。
    pub fn values<T: NumCast>(&self) -> Option<Vec<T>> {
        let endian = self.endian;
        let data = &self.data;
        match self.datatype {
            TagType::Byte | TagType::Undefined => endian.decode_all::<1, u8, T>(data),
            TagType::SByte => endian.decode_all::<1, i8, T>(data),
            TagType::Short => endian.decode_all::<2, u16, T>(data),
            TagType::SShort => endian.decode_all::<2, i16, T>(data),
            TagType::Long | TagType::Ifd => endian.decode_all::<4, u32, T>(data),
            TagType::SLong => endian.decode_all::<4, i32, T>(data),
            TagType::Float => endian.decode_all::<4, f32, T>(data),
            TagType::Double => endian.decode_all::<8, f64, T>(data),
            TagType::Long8 | TagType::Ifd8 => endian.decode_all::<8, u64, T>(data),
            TagType::SLong8 => endian.decode_all::<8, i64, T>(data),
            TagType::Ascii | TagType::Rational | TagType::SRational | TagType::Unknown => None,
        }
    }

    /// 字符串类标签（ASCII、BYTE、UNDEFINED）的原始字节
    ///
    /// 保留结尾的 NUL，GeoKey 的字符串偏移量以这些字节为基准。
    pub fn ascii_bytes(&self) -> Option<&[u8]> {
        match self.datatype {
            TagType::Ascii | TagType::Byte | TagType::Undefined => Some(&self.data),
            _ => None,
        }
    }

    /// 解码为字符串，非法 UTF-8 按有损方式替换
    pub fn try_to_string(&self) -> Option<String> {
        self.ascii_bytes()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id_string = match self.id() {
            Some(id) => format!("{id:?}"),
            None => format!("Unknown({})", self.code),
        };
        let value_string = match self.datatype {
            TagType::Ascii => self.try_to_string().unwrap_or_default().replace('\0', "\\0"),
            _ => match self.values::<f64>() {
                Some(v) if v.len() == 1 => format!("{}", v[0]),
                Some(v) if v.len() <= 16 => format!("{v:?}"),
                Some(v) => format!("[{} values]", v.len()),
                None => "Undefined".to_string(),
            },
        };
        write!(
            f,
            "{} {:?}[{}]: {}",
            id_string, self.datatype, self.count, value_string
        )
    }
}

/// TIFF 数据类型
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoPrimitive, FromPrimitive)]
#[repr(u16)]
pub enum TagType {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    SByte = 6,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
    Float = 11,
    Double = 12,
    Ifd = 13,
    Long8 = 16,
    SLong8 = 17,
    Ifd8 = 18,

    #[num_enum(default)]
    Unknown = 0xFFFF,
}

impl TagType {
    /// 单个数据项的字节数
    pub const fn size_in_bytes(&self) -> u64 {
        match self {
            TagType::Byte | TagType::Ascii | TagType::SByte | TagType::Undefined => 1,
            TagType::Short | TagType::SShort => 2,
            TagType::Long | TagType::SLong | TagType::Float | TagType::Ifd => 4,
            TagType::Rational | TagType::SRational | TagType::Double => 8,
            TagType::Long8 | TagType::SLong8 | TagType::Ifd8 => 8,
            TagType::Unknown => 1,
        }
    }
}
