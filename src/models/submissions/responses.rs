use serde::Serialize;

/// 未通过校验的提交记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidSubmission {
    pub identification: String,
    pub errors: Vec<String>,
}

/// 一批提交记录的检查结果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuditReport {
    pub checked: usize,
    pub self_evaluations: usize,
    pub invalid: Vec<InvalidSubmission>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}
