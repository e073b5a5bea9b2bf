//! 提交记录诊断服务
//!
//! 读取存储导出的提交记录，逐条校验并记录日志。

pub mod audit;
pub mod load;

pub use audit::audit_submissions;
pub use load::load_submissions;
