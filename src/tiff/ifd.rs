//! 图像文件目录 (IFD)
//!
//! 只读取标签头和标签数据，不读取像素。

use num_traits::NumCast;

use super::{Endian, Tag, TagId, TagType, TiffError, TiffVariant};
use std::io::{Read, Seek, SeekFrom};

use tracing::*;

/// 一个 IFD 中的全部标签
#[derive(Clone, Debug, Default)]
pub struct Ifd(pub Vec<Tag>);

impl Ifd {
    /// 从 `offset` 处解析 IFD
    ///
    /// `stream_len` 用于拒绝声明了超出文件长度数据的标签。
    /// 返回 IFD 和下一个 IFD 的偏移量（0 表示没有）。
    pub fn parse<R: Read + Seek>(
        stream: &mut R,
        offset: u64,
        endian: Endian,
        variant: TiffVariant,
        stream_len: u64,
    ) -> Result<(Ifd, u64), TiffError> {
        stream.seek(SeekFrom::Start(offset))?;

        let tag_count = match variant {
            TiffVariant::Normal => endian.read::<2, u16>(stream)? as u64,
            TiffVariant::Big => endian.read::<8, u64>(stream)?,
        };
        if tag_count.saturating_mul(variant.entry_size()) > stream_len {
            return Err(TiffError::TagOutOfBounds {
                code: 0,
                size: tag_count,
            });
        }

        let offset_size = variant.offset_bytesize();
        let mut tags = Vec::with_capacity(tag_count as usize);
        for _ in 0..tag_count {
            let code: u16 = endian.read(stream)?;
            let datatype: TagType = endian.read::<2, u16>(stream)?.into();
            let count = variant.read_offset(endian, stream)?;

            let data_size = count.saturating_mul(datatype.size_in_bytes());
            let data = if data_size > offset_size {
                // 数据存放在别处，字段中是偏移量
                let data_offset = variant.read_offset(endian, stream)?;
                if data_offset.saturating_add(data_size) > stream_len {
                    return Err(TiffError::TagOutOfBounds {
                        code,
                        size: data_size,
                    });
                }
                let resume = stream.stream_position()?;
                let mut data = vec![0; data_size as usize];
                stream.seek(SeekFrom::Start(data_offset))?;
                stream.read_exact(&mut data)?;
                stream.seek(SeekFrom::Start(resume))?;
                data
            } else {
                // 数据内联在字段中，左对齐
                let mut data = vec![0; offset_size as usize];
                stream.read_exact(&mut data)?;
                data.truncate(data_size as usize);
                data
            };

            tags.push(Tag {
                code,
                datatype,
                count,
                data,
                endian,
            });
        }

        let next_ifd_offset = match variant.read_offset(endian, stream) {
            Ok(offset) => offset,
            Err(e) => {
                warn!("无法读取下一个 IFD 偏移量: {e}");
                0
            }
        };
        Ok((Ifd(tags), next_ifd_offset))
    }

    /// 按代码查找标签
    pub fn get_tag_by_code(&self, code: u16) -> Option<&Tag> {
        self.0.iter().find(|tag| tag.code == code)
    }

    /// 按标签 ID 查找标签
    pub fn get_tag(&self, id: TagId) -> Result<&Tag, TiffError> {
        self.get_tag_by_code(id.into())
            .ok_or(TiffError::MissingTag(id))
    }

    /// 读取标签的数值数组
    pub fn get_tag_values<T: NumCast>(&self, id: TagId) -> Result<Vec<T>, TiffError> {
        self.get_tag(id)?.values().ok_or(TiffError::BadTag(id))
    }

    /// 读取字符串类标签的原始字节
    pub fn get_tag_bytes(&self, id: TagId) -> Result<&[u8], TiffError> {
        self.get_tag(id)?.ascii_bytes().ok_or(TiffError::BadTag(id))
    }

    /// 读取标签的字符串内容
    pub fn get_tag_string(&self, id: TagId) -> Result<String, TiffError> {
        self.get_tag(id)?
            .try_to_string()
            .ok_or(TiffError::BadTag(id))
    }
}
