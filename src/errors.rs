//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//!
//! 注意：字段校验失败不走这里，`SubmissionRecord::invalidity_info` 以数据形式返回；
//! 只有调用方明确要求 `validate()` 时才会转换为 `Validation` 错误。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_peer_eval_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum PeerEvalError {
            $($variant(String),)*
        }

        impl PeerEvalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PeerEvalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PeerEvalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PeerEvalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PeerEvalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PeerEvalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_peer_eval_errors! {
    Configuration("E001", "Configuration Error"),
    FileOperation("E002", "File Operation Error"),
    Serialization("E003", "Serialization Error"),
    Validation("E004", "Validation Error"),
}

impl PeerEvalError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PeerEvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PeerEvalError {}

impl From<std::io::Error> for PeerEvalError {
    fn from(err: std::io::Error) -> Self {
        PeerEvalError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PeerEvalError {
    fn from(err: serde_json::Error) -> Self {
        PeerEvalError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for PeerEvalError {
    fn from(err: config::ConfigError) -> Self {
        PeerEvalError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PeerEvalError>;
