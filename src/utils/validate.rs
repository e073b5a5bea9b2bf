//! 字段规则校验
//!
//! 每条规则返回 `Err(message)` 表示字段不合法，消息可直接展示给用户。
//! 检查顺序固定：为空 → 超长 → 格式。

use once_cell::sync::Lazy;
use regex::Regex;

static COURSE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.$-]+$").expect("Invalid course id regex"));

// 首字符必须是字母或数字；不允许出现标识串分隔符和不安全的显示字符
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][^|%/\\<>\p{Cc}]*$").expect("Invalid title regex"));

// 本地部分与域名都按点分段：不允许连续的点或首尾的点，域名段不能以连字符开头或结尾
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_+-]+(\.[A-Za-z0-9_+-]+)*@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("Invalid email regex")
});

pub const COURSE_ID_MAX_LENGTH: usize = 40;
pub const EVALUATION_NAME_MAX_LENGTH: usize = 38;
pub const TEAM_NAME_MAX_LENGTH: usize = 60;
pub const EMAIL_MAX_LENGTH: usize = 45;

const REASON_EMPTY: &str = "is empty";
const REASON_TOO_LONG: &str = "is too long";
const REASON_INVALID_CHARS: &str = "contains invalid characters";
const REASON_INCORRECT_FORMAT: &str = "is not in the correct format";

/// 可校验的字段种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    CourseId,
    EvaluationName,
    TeamName,
    Email,
}

impl FieldType {
    pub fn max_length(self) -> usize {
        match self {
            FieldType::CourseId => COURSE_ID_MAX_LENGTH,
            FieldType::EvaluationName => EVALUATION_NAME_MAX_LENGTH,
            FieldType::TeamName => TEAM_NAME_MAX_LENGTH,
            FieldType::Email => EMAIL_MAX_LENGTH,
        }
    }

    /// 未指定标签时在错误消息中使用的字段描述
    pub fn default_label(self) -> &'static str {
        match self {
            FieldType::CourseId => "Course ID",
            FieldType::EvaluationName => "evaluation name",
            FieldType::TeamName => "team name",
            FieldType::Email => "email address",
        }
    }

    fn hint(self) -> String {
        let max = self.max_length();
        match self {
            FieldType::CourseId => format!(
                "A Course ID can contain letters, numbers, fullstops, hyphens, underscores, and dollar signs. \
                 It cannot be longer than {max} characters. It cannot be empty or contain spaces."
            ),
            FieldType::EvaluationName | FieldType::TeamName => format!(
                "The value must start with a letter or a digit and cannot contain |, %, /, \\, < or >. \
                 It cannot be longer than {max} characters. It cannot be empty."
            ),
            FieldType::Email => format!(
                "An email address contains some text followed by one '@' sign followed by some more text. \
                 It cannot be longer than {max} characters. It cannot be empty and it cannot have spaces."
            ),
        }
    }

    fn matches(self, value: &str) -> bool {
        match self {
            FieldType::CourseId => COURSE_ID_RE.is_match(value),
            FieldType::EvaluationName | FieldType::TeamName => TITLE_RE.is_match(value),
            FieldType::Email => EMAIL_RE.is_match(value),
        }
    }

    fn format_reason(self) -> &'static str {
        match self {
            FieldType::Email => REASON_INCORRECT_FORMAT,
            _ => REASON_INVALID_CHARS,
        }
    }
}

/// 使用字段默认描述进行校验
pub fn check_field(field: FieldType, value: &str) -> Result<(), String> {
    check_field_with_label(field, field.default_label(), value)
}

/// 使用自定义描述进行校验
///
/// 同一种字段在一条记录里出现多次时（例如评价人 / 被评价人的邮箱），
/// 通过 `label` 区分是哪一个字段出错。
pub fn check_field_with_label(field: FieldType, label: &str, value: &str) -> Result<(), String> {
    let reason = if value.is_empty() {
        REASON_EMPTY
    } else if value.chars().count() > field.max_length() {
        REASON_TOO_LONG
    } else if !field.matches(value) {
        field.format_reason()
    } else {
        return Ok(());
    };

    Err(format!(
        "\"{value}\" is not acceptable as the {label} because it {reason}. {}",
        field.hint()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_course_ids() {
        assert!(check_field(FieldType::CourseId, "CS101").is_ok());
        assert!(check_field(FieldType::CourseId, "cs2103-AY2024.s1_$x").is_ok());
    }

    #[test]
    fn test_course_id_with_space() {
        let err = check_field(FieldType::CourseId, "CS 101").unwrap_err();
        assert!(err.contains("contains invalid characters"));
        assert!(err.contains("Course ID"));
    }

    #[test]
    fn test_empty_course_id() {
        let err = check_field(FieldType::CourseId, "").unwrap_err();
        assert!(err.starts_with("\"\" is not acceptable as the Course ID because it is empty."));
    }

    #[test]
    fn test_course_id_too_long() {
        let id = "A".repeat(COURSE_ID_MAX_LENGTH + 1);
        let err = check_field(FieldType::CourseId, &id).unwrap_err();
        assert!(err.contains("is too long"));
        assert!(check_field(FieldType::CourseId, &"A".repeat(COURSE_ID_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_titles() {
        assert!(check_field(FieldType::EvaluationName, "Midterm").is_ok());
        assert!(check_field(FieldType::TeamName, "Team 1 (Alpha)").is_ok());
        assert!(check_field(FieldType::TeamName, "Équipe Été").is_ok());

        for bad in ["Team|A", "50%", "a/b", "a\\b", "<b>", " leading", "-dash"] {
            assert!(
                check_field(FieldType::TeamName, bad).is_err(),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_title_length_counts_chars() {
        let name = "é".repeat(EVALUATION_NAME_MAX_LENGTH);
        assert!(check_field(FieldType::EvaluationName, &name).is_ok());
        let name = "é".repeat(EVALUATION_NAME_MAX_LENGTH + 1);
        assert!(check_field(FieldType::EvaluationName, &name).is_err());
        assert!(check_field(FieldType::TeamName, &"t".repeat(TEAM_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_emails() {
        assert!(check_field(FieldType::Email, "a@x.com").is_ok());
        assert!(check_field(FieldType::Email, "first.last+tag@mail.example.org").is_ok());

        let err = check_field(FieldType::Email, "not-an-email").unwrap_err();
        assert!(err.contains("is not in the correct format"));
        assert!(check_field(FieldType::Email, "a b@x.com").is_err());
        assert!(check_field(FieldType::Email, "a@x").is_err());
    }

    #[test]
    fn test_email_dot_and_hyphen_placement() {
        assert!(check_field(FieldType::Email, "a.b-c_d@sub-1.x.com").is_ok());

        for bad in [
            "a@x..com",
            ".a@x.com",
            "a.@x.com",
            "a..b@x.com",
            "a@-x.com",
            "a@x-.com",
            "a@.x.com",
        ] {
            let err = check_field(FieldType::Email, bad).unwrap_err();
            assert!(
                err.contains("is not in the correct format"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@x.com", "a".repeat(EMAIL_MAX_LENGTH));
        let err = check_field(FieldType::Email, &email).unwrap_err();
        assert!(err.contains("is too long"));
    }

    #[test]
    fn test_custom_label() {
        let err = check_field_with_label(FieldType::Email, "email address for the tutor", "x")
            .unwrap_err();
        assert!(err.contains("as the email address for the tutor because"));
    }
}
