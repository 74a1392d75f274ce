//! TIFF 标签读取模块
//!
//! 读取标准 TIFF 和 BigTIFF 的文件头与 IFD 链，为 GeoKey 解码提供
//! GeoKeyDirectory / GeoDoubleParams / GeoAsciiParams 三个私有标签。
//! 只读取标签，不解码像素数据。

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{self, Read, Seek, SeekFrom};

use tracing::*;

mod endian;
mod error;
mod ifd;
mod tag;

pub use endian::Endian;
pub use error::TiffError;
pub use ifd::Ifd;
pub use tag::{Tag, TagId, TagType};

/// 最多跟随的 IFD 数量
const MAX_IFDS: usize = 4096;

/// TIFF 变体
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TiffVariant {
    /// 标准 TIFF，32 位偏移量
    Normal,
    /// BigTIFF，64 位偏移量
    Big,
}

impl TiffVariant {
    /// 读取一个偏移量或计数
    fn read_offset<R: Read>(&self, endian: Endian, stream: &mut R) -> io::Result<u64> {
        match self {
            TiffVariant::Normal => endian.read::<4, u32>(stream).map(u64::from),
            TiffVariant::Big => endian.read::<8, u64>(stream),
        }
    }

    /// 偏移量字段的字节数
    const fn offset_bytesize(&self) -> u64 {
        match self {
            TiffVariant::Normal => 4,
            TiffVariant::Big => 8,
        }
    }

    /// 每个 IFD 条目的字节数
    const fn entry_size(&self) -> u64 {
        match self {
            TiffVariant::Normal => 12,
            TiffVariant::Big => 20,
        }
    }
}

/// 已读取的 TIFF 文件结构
#[derive(Clone, Debug)]
pub struct Tiff {
    pub endian: Endian,
    pub variant: TiffVariant,
    pub ifds: Vec<Ifd>,
}

impl Tiff {
    /// 从流中读取文件头和全部 IFD
    ///
    /// IFD0 之后的 IFD 无法读取时记录警告并保留已读取的部分。
    ///
    /// # 错误
    ///
    /// - 文件头不是 TIFF / BigTIFF 时返回 [`TiffError::BadMagicBytes`]
    /// - IFD0 无法读取或标签数据越界时返回相应错误
    pub fn open<R: Read + Seek>(stream: &mut R) -> Result<Self, TiffError> {
        let stream_len = stream.seek(SeekFrom::End(0))?;
        stream.seek(SeekFrom::Start(0))?;

        let mut buf = [0; 4];
        stream.read_exact(&mut buf)?;
        let endian = Endian::from_marker(&buf[..2]).ok_or(TiffError::BadMagicBytes)?;
        let variant = match &buf[2..4] {
            b"\0*" | b"*\0" => TiffVariant::Normal,
            b"\0+" | b"+\0" => TiffVariant::Big,
            _ => return Err(TiffError::BadMagicBytes),
        };

        if TiffVariant::Big == variant {
            let offset_bytesize: u16 = endian.read(stream)?;
            let _reserved: u16 = endian.read(stream)?;
            if offset_bytesize != 8 {
                return Err(TiffError::BadMagicBytes);
            }
        }

        let mut ifds = vec![];
        let mut visited = HashSet::new();
        let mut ifd_offset = variant.read_offset(endian, stream)?;
        while ifd_offset != 0 && ifds.len() < MAX_IFDS {
            if !visited.insert(ifd_offset) {
                warn!("IFD 链出现循环, 偏移量 {ifd_offset}");
                break;
            }
            match Ifd::parse(stream, ifd_offset, endian, variant, stream_len) {
                Ok((ifd, next_offset)) => {
                    ifds.push(ifd);
                    ifd_offset = next_offset;
                }
                // IFD0 之后的损坏只截断 IFD 链
                Err(e) if !ifds.is_empty() => {
                    warn!("跳过偏移量 {ifd_offset} 处及之后的 IFD: {e}");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        debug!("读取 TIFF: {:?} {:?}, {} 个 IFD", endian, variant, ifds.len());
        Ok(Self {
            endian,
            variant,
            ifds,
        })
    }

    /// 第一个 IFD
    pub fn ifd0(&self) -> Result<&Ifd, TiffError> {
        self.ifds.first().ok_or(TiffError::NoIfd0)
    }
}

impl Display for Tiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Tiff: {{{:?} Endian, {:?} Variant}}",
            self.endian, self.variant
        )?;
        for (i, ifd) in self.ifds.iter().enumerate() {
            write!(f, "\n  IFD {i}:")?;
            for tag in ifd.0.iter() {
                write!(f, "\n    {}", tag)?;
            }
        }
        Ok(())
    }
}
