use serde::Deserialize;

/// 由调用方直接提供的提交原始字段
///
/// 各字段在构造 `SubmissionRecord` 时会经过清洗。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSubmission {
    pub course_id: String,
    pub evaluation_name: String,
    pub team_name: String,
    pub reviewee_email: String,
    pub reviewer_email: String,
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub peer_feedback: Option<String>,
}
