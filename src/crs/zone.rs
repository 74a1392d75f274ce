//! 从坐标系名称中提取分带信息
//!
//! 依赖 EPSG 名称的固定格式 `"<基准面> / UTM zone <分带号><字母>"` 和
//! `"<基准面> / Lambert-93"`。格式不符时只返回部分结果，不做其他猜测。

use tracing::*;

/// UTM 分带号与纬度带字母
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UtmZone {
    /// 分带号 1..=60
    pub number: Option<u8>,
    /// 大写字母
    pub letter: Option<char>,
}

/// 取名称中 `/` 之后的第二段
fn second_segment(name: &str) -> Option<&str> {
    name.split('/').nth(1)
}

/// 提取 UTM 分带
///
/// 取第二段中第三个以空白分隔的词作为分带词，例如 `"17N"`：
/// - 字母：分带词中的字母字符（转为大写），必须恰好一个
/// - 分带号：分带词开头的数字，必须在 1..=60 内
pub fn parse_utm_zone(name: &str) -> UtmZone {
    let Some(token) = second_segment(name).and_then(|segment| segment.split_whitespace().nth(2))
    else {
        debug!("坐标系名称中没有分带信息: {name:?}");
        return UtmZone::default();
    };

    let letters: Vec<char> = token
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect();
    let letter = match letters.as_slice() {
        [letter] => Some(*letter),
        _ => None,
    };

    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    let number = digits
        .parse::<u8>()
        .ok()
        .filter(|number| (1..=60).contains(number));

    if number.is_none() || letter.is_none() {
        warn!("无法完整解析 UTM 分带: {token:?}");
    }

    UtmZone { number, letter }
}

/// 引用说明的第二段（去除首尾空白）
pub fn citation_zone(citation: &str) -> Option<&str> {
    second_segment(citation).map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_names() {
        assert_eq!(
            parse_utm_zone("WGS 84 / UTM zone 17N"),
            UtmZone {
                number: Some(17),
                letter: Some('N')
            }
        );
        assert_eq!(
            parse_utm_zone("NAD83 / UTM zone 5N"),
            UtmZone {
                number: Some(5),
                letter: Some('N')
            }
        );
        assert_eq!(
            parse_utm_zone("WGS 84 / UTM zone 60S"),
            UtmZone {
                number: Some(60),
                letter: Some('S')
            }
        );
    }

    #[test]
    fn test_missing_segment_or_token() {
        assert_eq!(parse_utm_zone("UTM zone 17N"), UtmZone::default());
        assert_eq!(parse_utm_zone("WGS 84 / UTM"), UtmZone::default());
    }

    #[test]
    fn test_lowercase_letter_is_uppercased() {
        assert_eq!(parse_utm_zone("WGS 84 / UTM zone 33n").letter, Some('N'));
    }

    #[test]
    fn test_out_of_range_or_unparseable_number() {
        let zone = parse_utm_zone("Custom / UTM zone 61N");
        assert_eq!(zone.number, None);
        assert_eq!(zone.letter, Some('N'));

        let zone = parse_utm_zone("Custom / UTM zone N");
        assert_eq!(zone.number, None);
        assert_eq!(zone.letter, Some('N'));

        assert_eq!(parse_utm_zone("Custom / UTM zone 12AB").letter, None);
    }

    #[test]
    fn test_citation_zone() {
        assert_eq!(citation_zone("RGF93 / Lambert-93"), Some("Lambert-93"));
        assert_eq!(citation_zone("RGF93 /  Lambert-93  "), Some("Lambert-93"));
        assert_eq!(citation_zone("Lambert-93"), None);
        assert_eq!(citation_zone(""), None);
    }
}
