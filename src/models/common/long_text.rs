use serde::{Deserialize, Serialize};
use std::fmt;

/// 长文本容器（评语、互评反馈）
///
/// 记录中以 `Option<LongText>` 出现：`None` 表示该值不存在，
/// 与空字符串是两种不同的状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LongText(String);

impl LongText {
    /// 互评反馈缺失时的占位值
    pub const NOT_AVAILABLE: &'static str = "N/A";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn not_available() -> Self {
        Self(Self::NOT_AVAILABLE.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for LongText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LongText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for LongText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
