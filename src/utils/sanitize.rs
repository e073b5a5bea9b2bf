//! 输入清洗
//!
//! 只做字符串变换，不会失败。

/// 清洗标题类字段（课程 ID、评估名称、团队名称）
///
/// 去掉首尾空白，将连续空白压缩为一个空格，并移除控制字符。
/// `|`、`<` 等不允许出现在标题中的可见字符不做替换，原样保留，
/// 由字段校验报告为错误。
pub fn sanitize_title(value: &str) -> String {
    collapse_whitespace(value, true)
}

/// 清洗姓名 / 邮箱类字段：去掉首尾空白并压缩内部空白
pub fn sanitize_name(value: &str) -> String {
    collapse_whitespace(value, false)
}

/// 清洗长文本
///
/// `None` 原样返回；统一换行符为 `\n` 并去掉首尾空白。
pub fn sanitize_long_text(value: Option<&str>) -> Option<String> {
    value.map(|text| text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string())
}

fn collapse_whitespace(value: &str, strip_control: bool) -> String {
    value
        .split_whitespace()
        .map(|word| {
            if strip_control {
                word.chars().filter(|c| !c.is_control()).collect::<String>()
            } else {
                word.to_string()
            }
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_title_trims_and_collapses() {
        assert_eq!(sanitize_title("  Team   Alpha \t"), "Team Alpha");
        assert_eq!(sanitize_title("CS101"), "CS101");
    }

    #[test]
    fn test_sanitize_title_strips_control_chars() {
        assert_eq!(sanitize_title("Mid\u{0007}term"), "Midterm");
        assert_eq!(sanitize_title("\u{0000}"), "");
    }

    #[test]
    fn test_sanitize_title_keeps_disallowed_chars_for_validation() {
        use crate::utils::validate::{FieldType, check_field};

        let team = sanitize_title("  Team | <A> ");
        assert_eq!(team, "Team | <A>");
        let err = check_field(FieldType::TeamName, &team).unwrap_err();
        assert!(err.contains("contains invalid characters"));
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  alice@example.com "), "alice@example.com");
        assert_eq!(sanitize_name("Alice \n Smith"), "Alice Smith");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_sanitize_long_text() {
        assert_eq!(sanitize_long_text(None), None);
        assert_eq!(
            sanitize_long_text(Some("  good work\r\nkeep going  ")),
            Some("good work\nkeep going".to_string())
        );
        assert_eq!(sanitize_long_text(Some("")), Some(String::new()));
    }
}
