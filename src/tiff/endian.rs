//! 字节序处理
//!
//! TIFF 文件的字节序由头部 `II` / `MM` 决定，之后所有数值都按此字节序读取。

use eio::{FromBytes, ReadExt};
use num_traits::{cast::NumCast, ToPrimitive};
use std::io::{Read, Result};

/// 字节序
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Endian {
    /// 大端 (`MM`)
    Big,
    /// 小端 (`II`)
    Little,
}

impl Endian {
    /// 根据头部两个字节判断字节序
    pub fn from_marker(marker: &[u8]) -> Option<Self> {
        match marker {
            b"II" => Some(Endian::Little),
            b"MM" => Some(Endian::Big),
            _ => None,
        }
    }

    /// 从流中读取一个数值
    pub fn read<const N: usize, T: FromBytes<N>>(&self, stream: &mut impl Read) -> Result<T> {
        let mut buf = [0u8; N];
        stream.read_exact(&mut buf)?;
        match self {
            Endian::Big => buf.as_slice().read_be(),
            Endian::Little => buf.as_slice().read_le(),
        }
    }

    /// 把字节切片解码为数值并转换为目标类型
    ///
    /// 长度不是 `N` 的整数倍或任一数值无法转换时返回 None。
    pub fn decode_all<const N: usize, A: FromBytes<N> + ToPrimitive, T: NumCast>(
        &self,
        bytes: &[u8],
    ) -> Option<Vec<T>> {
        if bytes.len() % N != 0 {
            return None;
        }
        bytes
            .chunks_exact(N)
            .map(|mut chunk| self.read::<N, A>(&mut chunk).ok().and_then(|v| T::from(v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker() {
        assert_eq!(Endian::from_marker(b"II"), Some(Endian::Little));
        assert_eq!(Endian::from_marker(b"MM"), Some(Endian::Big));
        assert_eq!(Endian::from_marker(b"IM"), None);
    }

    #[test]
    fn test_read_respects_byte_order() {
        let bytes = [0x87u8, 0xAF];
        assert_eq!(Endian::Big.read::<2, u16>(&mut bytes.as_slice()).unwrap(), 0x87AF);
        assert_eq!(Endian::Little.read::<2, u16>(&mut bytes.as_slice()).unwrap(), 0xAF87);
    }

    #[test]
    fn test_decode_all() {
        let bytes = [1u8, 0, 2, 0, 3, 0];
        let values: Vec<u32> = Endian::Little.decode_all::<2, u16, u32>(&bytes).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(Endian::Little.decode_all::<2, u16, u32>(&bytes[..5]), None);

        let doubles = 6378137.0f64.to_be_bytes();
        let values: Vec<f64> = Endian::Big.decode_all::<8, f64, f64>(&doubles).unwrap();
        assert_eq!(values, vec![6378137.0]);
    }
}
