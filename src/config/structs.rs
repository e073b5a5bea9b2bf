use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub audit: AuditConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 提交记录检查配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    pub input_path: String, // 默认读取的提交记录 JSON 文件
    pub indent: usize,      // 诊断输出的缩进层级
}
