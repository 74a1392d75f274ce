//! GeoKey 解码入口
//!
//! [`GeoKeyDecoder`] 把三个 GeoTIFF 私有标签的内容一次性解码为
//! [`CoordinateSystemDescriptor`]：
//!
//! - [`GeoKeyDecoder::resolve_keys`] - 目录解析 + 键值解析
//! - [`GeoKeyDecoder::decode`] - 在此基础上分类
//! - [`GeoKeyDecoder::decode_tiff`] - 直接从 TIFF 流读取标签后解码
//!
//! # 示例
//!
//! ```
//! use geokey_crs::{CoordinateFamily, GeoKeyDecoder};
//!
//! // GTModelType = Projected, ProjectedCSType = 32617
//! let raw = [1, 1, 0, 2, 1024, 0, 1, 1, 3072, 0, 1, 32617];
//! let crs = GeoKeyDecoder::new().decode(&raw, None, None);
//! assert_eq!(crs.family, CoordinateFamily::Utm);
//! assert_eq!(crs.utm_zone_number, Some(17));
//! assert_eq!(crs.utm_zone_letter, Some('N'));
//! ```

use std::io::{BufReader, Read, Seek};

use tracing::*;

use crate::crs::{classify, CoordinateSystemDescriptor, EpsgNameLookup, StaticEpsgNames};
use crate::geokeys::{GeoKeyDirectory, GeoParamTables, ResolvedGeoKeys};
use crate::tiff::{Ifd, TagId, Tiff, TiffError};

mod config;

pub use config::DecoderConfig;

/// GeoKey 解码器
///
/// 不保存任何解码状态，可以在多个线程间共享。
#[derive(Clone, Debug, Default)]
pub struct GeoKeyDecoder<L = StaticEpsgNames> {
    names: L,
    config: DecoderConfig,
}

impl GeoKeyDecoder {
    /// 使用内置 EPSG 名称表和默认配置
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: EpsgNameLookup> GeoKeyDecoder<L> {
    /// 使用自定义 EPSG 名称查询
    pub fn with_lookup(names: L) -> Self {
        Self {
            names,
            config: DecoderConfig::default(),
        }
    }

    /// 替换配置
    pub fn with_config(self, config: DecoderConfig) -> Self {
        Self { config, ..self }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// 解析目录并解析所有键值
    ///
    /// `ascii` 是 GeoAsciiParams 的原始字节（含终止符），键的偏移量按字节计算。
    pub fn resolve_keys(
        &self,
        raw_directory: &[u16],
        doubles: Option<&[f64]>,
        ascii: Option<&[u8]>,
    ) -> ResolvedGeoKeys {
        let tables = GeoParamTables::new(doubles, ascii)
            .with_tags(self.config.double_params_tag, self.config.ascii_params_tag);
        let directory = GeoKeyDirectory::parse(raw_directory);
        if let Some(directory) = &directory {
            debug!(
                "GeoKey 目录: 版本 {}.{}.{}, {} 个键",
                directory.version,
                directory.key_revision,
                directory.minor_revision,
                directory.entries.len()
            );
        }
        ResolvedGeoKeys::resolve(directory.as_ref(), &tables)
    }

    /// 解码为坐标系描述
    pub fn decode(
        &self,
        raw_directory: &[u16],
        doubles: Option<&[f64]>,
        ascii: Option<&[u8]>,
    ) -> CoordinateSystemDescriptor {
        let keys = self.resolve_keys(raw_directory, doubles, ascii);
        classify(&keys, &self.names)
    }

    /// 从 TIFF 流的第一个 IFD 读取 GeoKey 标签并解码
    ///
    /// # 参数
    ///
    /// * `source` - 实现了 Read + Seek trait 的数据源
    ///
    /// # 返回值
    ///
    /// 坐标系描述。缺少或无法解析地理标签时为 `Undefined`，不是错误。
    ///
    /// # 错误
    ///
    /// 只有以下情况返回错误:
    /// - 流无法读取
    /// - 文件头不是 TIFF / BigTIFF
    /// - IFD0 缺失或损坏
    pub fn decode_tiff<R: Read + Seek>(
        &self,
        source: &mut R,
    ) -> Result<CoordinateSystemDescriptor, TiffError> {
        let stream = &mut BufReader::new(source);
        let tiff = Tiff::open(stream)?;
        let tags = GeoTagValues::read(tiff.ifd0()?, &self.config);
        Ok(self.decode(
            tags.directory.as_deref().unwrap_or_default(),
            tags.doubles.as_deref(),
            tags.ascii.as_deref(),
        ))
    }
}

/// 从 IFD 中取出的三个地理标签
#[derive(Clone, Debug, Default, PartialEq)]
struct GeoTagValues {
    directory: Option<Vec<u16>>,
    doubles: Option<Vec<f64>>,
    ascii: Option<Vec<u8>>,
}

impl GeoTagValues {
    /// 缺失或类型错误的标签视为不存在
    fn read(ifd: &Ifd, config: &DecoderConfig) -> Self {
        let directory = match ifd.get_tag_values::<u16>(TagId::GeoKeyDirectory) {
            Ok(values) => Some(values),
            Err(TiffError::MissingTag(_)) => None,
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        let doubles = ifd
            .get_tag_by_code(config.double_params_tag)
            .and_then(|tag| tag.values::<f64>());
        let ascii = ifd
            .get_tag_by_code(config.ascii_params_tag)
            .and_then(|tag| tag.ascii_bytes())
            .map(<[u8]>::to_vec);
        Self {
            directory,
            doubles,
            ascii,
        }
    }
}
