//! GeoKey 目录解析
//!
//! GeoKeyDirectory 标签是一个扁平的 u16 数组：
//!
//! ```text
//! [version, key_revision, minor_revision, number_of_keys,
//!  key_id, tiff_tag_location, count, value_offset,   // 第 1 个键
//!  key_id, tiff_tag_location, count, value_offset,   // 第 2 个键
//!  ...]
//! ```
//!
//! 目录缺失或格式错误只代表"没有坐标系元数据"，因此解析失败时返回 `None`
//! 而不是错误。
//!
//! 参考: <https://docs.ogc.org/is/19-008r4/19-008r4.html#_requirements_class_geokeydirectorytag>

use std::fmt::Display;

use tracing::*;

use super::{GeoKeyId, GeoKeyValue, GeoParamTables};

/// 目录头部长度（短整型个数）
const HEADER_LEN: usize = 4;
/// 每条键记录的长度（短整型个数）
const ENTRY_LEN: usize = 4;

/// 目录中的一条原始键记录
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKeyEntry {
    /// 键 ID
    pub key_id: u16,
    /// 0 表示值内联在 `value_offset` 中，否则为存放值的标签 ID
    pub tiff_tag_location: u16,
    /// 值的个数；字符串包含结尾终止符
    pub count: u16,
    /// 内联值，或在辅助表中的偏移量
    pub value_offset: u16,
}

impl RawKeyEntry {
    /// 标准键 ID，未知键返回 None
    pub fn id(&self) -> Option<GeoKeyId> {
        GeoKeyId::try_from(self.key_id).ok()
    }

    /// 根据 `tiff_tag_location` 解析键值
    ///
    /// # 参数
    ///
    /// * `tables` - 双精度表、字符串表以及它们的标签 ID
    ///
    /// # 解析规则
    ///
    /// 1. 位置为 0：值就是 `value_offset`
    /// 2. 位置为双精度表且 `count == 1`：`doubles[value_offset]`，其他个数一律为 0.0
    /// 3. 位置为字符串表：`[value_offset, value_offset + count - 1)` 子串
    /// 4. 其他位置：`Undefined`
    ///
    /// 任何缺表或越界都退化为零值，不会出错。
    pub fn resolve(&self, tables: &GeoParamTables) -> GeoKeyValue {
        match self.tiff_tag_location {
            0 => GeoKeyValue::Short(self.value_offset),
            location if location == tables.double_tag => {
                if self.count == 1 {
                    GeoKeyValue::Double(tables.double_at(self.value_offset))
                } else {
                    GeoKeyValue::Double(0.0)
                }
            }
            location if location == tables.ascii_tag => {
                GeoKeyValue::Ascii(tables.ascii_at(self.value_offset, self.count))
            }
            _ => GeoKeyValue::Undefined,
        }
    }
}

/// 解析后的 GeoKey 目录
///
/// 不变量：`number_of_keys as usize == entries.len()`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeoKeyDirectory {
    pub version: u16,
    pub key_revision: u16,
    pub minor_revision: u16,
    pub number_of_keys: u16,
    /// 按目录顺序排列的键记录
    pub entries: Vec<RawKeyEntry>,
}

impl GeoKeyDirectory {
    /// 从原始短整型数组解析目录
    ///
    /// # 参数
    ///
    /// * `raw` - GeoKeyDirectory 标签的全部 u16 值
    ///
    /// # 返回值
    ///
    /// 少于 4 个短整型、键数量为 0 或没有一条完整记录时返回 `None`。
    /// 数组不足以容纳声明的键数量时只读取完整的记录，
    /// `number_of_keys` 等于实际读取的记录数。
    pub fn parse(raw: &[u16]) -> Option<Self> {
        if raw.len() < HEADER_LEN {
            debug!("GeoKey 目录过短: {} 个短整型", raw.len());
            return None;
        }

        let version = raw[0];
        let key_revision = raw[1];
        let minor_revision = raw[2];
        let declared_keys = raw[3];
        if declared_keys == 0 {
            debug!("GeoKey 目录不包含任何键");
            return None;
        }

        let entries: Vec<RawKeyEntry> = raw[HEADER_LEN..]
            .chunks_exact(ENTRY_LEN)
            .take(declared_keys as usize)
            .map(|record| RawKeyEntry {
                key_id: record[0],
                tiff_tag_location: record[1],
                count: record[2],
                value_offset: record[3],
            })
            .collect();

        if entries.len() < declared_keys as usize {
            warn!(
                "GeoKey 目录被截断: 声明 {} 个键, 实际读取 {} 个",
                declared_keys,
                entries.len()
            );
            if entries.is_empty() {
                return None;
            }
        }

        Some(Self {
            version,
            key_revision,
            minor_revision,
            number_of_keys: entries.len() as u16,
            entries,
        })
    }
}

impl Display for RawKeyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id_string = match self.id() {
            Some(id) => format!("{id:?}"),
            None => format!("0x{:04X}", self.key_id),
        };
        write!(
            f,
            "{}: {{location: {}, count: {}, offset: {}}}",
            id_string, self.tiff_tag_location, self.count, self.value_offset
        )
    }
}

impl Display for GeoKeyDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GeoKey Directory: {{version: {}, revision: {}.{}, keys: {}}}",
            self.version, self.key_revision, self.minor_revision, self.number_of_keys
        )?;
        for entry in self.entries.iter() {
            write!(f, "\n  {entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_short_or_empty_directories() {
        assert_eq!(GeoKeyDirectory::parse(&[]), None);
        assert_eq!(GeoKeyDirectory::parse(&[1, 1, 0]), None);
        assert_eq!(GeoKeyDirectory::parse(&[1, 1, 0, 0]), None);
        assert_eq!(GeoKeyDirectory::parse(&[1, 1, 0, 0, 1024, 0, 1, 2]), None);
    }

    #[test]
    fn test_parse_reads_entries_in_order() {
        let raw = [1, 1, 0, 2, 1024, 0, 1, 1, 3072, 0, 1, 32617];
        let dir = GeoKeyDirectory::parse(&raw).unwrap();
        assert_eq!(dir.version, 1);
        assert_eq!(dir.key_revision, 1);
        assert_eq!(dir.minor_revision, 0);
        assert_eq!(dir.number_of_keys, 2);
        assert_eq!(dir.entries.len(), 2);
        assert_eq!(dir.entries[0].id(), Some(GeoKeyId::GTModelTypeGeoKey));
        assert_eq!(dir.entries[1].value_offset, 32617);
    }

    #[test]
    fn test_parse_truncated_directory_keeps_complete_records() {
        let raw = [1, 1, 0, 3, 1024, 0, 1, 2, 2048, 0];
        let dir = GeoKeyDirectory::parse(&raw).unwrap();
        assert_eq!(dir.number_of_keys, 1);
        assert_eq!(dir.entries.len(), 1);

        assert_eq!(GeoKeyDirectory::parse(&[1, 1, 0, 2, 1024, 0]), None);
    }

    #[test]
    fn test_parse_ignores_trailing_values() {
        let raw = [1, 1, 0, 1, 1024, 0, 1, 2, 9, 9, 9, 9];
        let dir = GeoKeyDirectory::parse(&raw).unwrap();
        assert_eq!(dir.entries.len(), 1);
    }

    #[test]
    fn test_resolve_inline_passes_value_through() {
        let tables = GeoParamTables::empty();
        for value in [0u16, 1, 9001, 32767, u16::MAX] {
            let entry = RawKeyEntry {
                key_id: 1024,
                tiff_tag_location: 0,
                count: 1,
                value_offset: value,
            };
            assert_eq!(entry.resolve(&tables), GeoKeyValue::Short(value));
        }
    }

    #[test]
    fn test_resolve_double_requires_single_count() {
        let doubles = [6378137.0];
        let tables = GeoParamTables::new(Some(&doubles), None);
        let mut entry = RawKeyEntry {
            key_id: 2057,
            tiff_tag_location: 34736,
            count: 1,
            value_offset: 0,
        };
        assert_eq!(entry.resolve(&tables), GeoKeyValue::Double(6378137.0));

        entry.count = 2;
        assert_eq!(entry.resolve(&tables), GeoKeyValue::Double(0.0));

        entry.count = 1;
        entry.value_offset = 500;
        assert_eq!(entry.resolve(&tables), GeoKeyValue::Double(0.0));
    }

    #[test]
    fn test_resolve_ascii_has_count_minus_one_length() {
        let tables = GeoParamTables::new(None, Some(b"RGF93 / Lambert-93|".as_slice()));
        let entry = RawKeyEntry {
            key_id: 1026,
            tiff_tag_location: 34737,
            count: 19,
            value_offset: 0,
        };
        let value = entry.resolve(&tables);
        assert_eq!(value.as_text(), "RGF93 / Lambert-93");
        assert_eq!(value.as_text().len(), 18);
    }

    #[test]
    fn test_resolve_unknown_location_is_undefined() {
        let entry = RawKeyEntry {
            key_id: 1024,
            tiff_tag_location: 34735,
            count: 1,
            value_offset: 4,
        };
        assert_eq!(entry.resolve(&GeoParamTables::empty()), GeoKeyValue::Undefined);
    }

    #[test]
    fn test_resolve_honours_custom_tag_ids() {
        let doubles = [0.9996];
        let tables = GeoParamTables::new(Some(&doubles), None).with_tags(100, 101);
        let entry = RawKeyEntry {
            key_id: 3092,
            tiff_tag_location: 100,
            count: 1,
            value_offset: 0,
        };
        assert_eq!(entry.resolve(&tables), GeoKeyValue::Double(0.9996));
    }

    #[test]
    fn test_display_names_known_and_unknown_keys() {
        let raw = [1, 1, 0, 2, 1024, 0, 1, 1, 0x1234, 0, 1, 7];
        let text = GeoKeyDirectory::parse(&raw).unwrap().to_string();
        assert!(text.contains("GTModelTypeGeoKey"));
        assert!(text.contains("0x1234"));
    }
}
