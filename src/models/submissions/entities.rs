use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entity::submissions;
use crate::errors::{PeerEvalError, Result};
use crate::models::common::{EntityAttributes, LongText};
use crate::models::submissions::NewSubmission;
use crate::utils::validate::{FieldType, check_field, check_field_with_label};
use crate::utils::{indent, sanitize_long_text, sanitize_name, sanitize_title};

pub const REVIEWEE_EMAIL_LABEL: &str = "email address for the student receiving the evaluation";
pub const REVIEWER_EMAIL_LABEL: &str = "email address for the student giving the evaluation";

const ABSENT_TEXT: &str = "<none>";

/// 展示用的派生字段，不参与校验
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionDetails {
    pub reviewer_name: String,
    pub reviewee_name: String,
    /// 相对被评价人所在团队平均得分归一化后的分数
    pub normalized_to_reviewee: i32,
    /// 面向教师视图归一化后的分数
    pub normalized_to_instructor: i32,
}

/// 一条互评提交记录：某次评估中评价人对被评价人的打分
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionRecord {
    pub course_id: String,
    pub evaluation_name: String,
    pub team_name: String,
    pub reviewer_email: String,
    pub reviewee_email: String,
    pub points: i32,
    pub justification: Option<LongText>,
    // 未开启互评反馈时可以为 None
    pub peer_feedback: Option<LongText>,
    pub details: SubmissionDetails,
}

impl SubmissionRecord {
    /// 从调用方提供的原始字段构造，所有字段都会经过清洗
    ///
    /// 未提供评语时使用空文本；未提供互评反馈时保持为 `None`。
    pub fn new(req: NewSubmission) -> Self {
        let justification = sanitize_long_text(req.justification.as_deref())
            .map(LongText::from)
            .unwrap_or_else(LongText::empty);

        Self {
            course_id: sanitize_title(&req.course_id),
            evaluation_name: sanitize_title(&req.evaluation_name),
            team_name: sanitize_title(&req.team_name),
            reviewer_email: sanitize_name(&req.reviewer_email),
            reviewee_email: sanitize_name(&req.reviewee_email),
            points: req.points,
            justification: Some(justification),
            peer_feedback: sanitize_long_text(req.peer_feedback.as_deref()).map(LongText::from),
            details: SubmissionDetails::default(),
        }
    }

    /// 仅提供标识字段的简化构造
    pub fn from_raw(
        course_id: &str,
        evaluation_name: &str,
        team_name: &str,
        reviewee_email: &str,
        reviewer_email: &str,
    ) -> Self {
        Self::new(NewSubmission {
            course_id: course_id.to_string(),
            evaluation_name: evaluation_name.to_string(),
            team_name: team_name.to_string(),
            reviewee_email: reviewee_email.to_string(),
            reviewer_email: reviewer_email.to_string(),
            ..Default::default()
        })
    }

    /// 深拷贝
    ///
    /// 与从存储记录构造不同，缺失的长文本保持为 `None`，不会被替换为默认值。
    pub fn deep_copy(&self) -> Self {
        Self {
            course_id: self.course_id.clone(),
            evaluation_name: self.evaluation_name.clone(),
            team_name: self.team_name.clone(),
            reviewer_email: self.reviewer_email.clone(),
            reviewee_email: self.reviewee_email.clone(),
            points: self.points,
            justification: self.justification.as_ref().map(|t| LongText::new(t.value())),
            peer_feedback: self.peer_feedback.as_ref().map(|t| LongText::new(t.value())),
            details: self.details.clone(),
        }
    }

    /// 评价人与被评价人是否为同一学生（严格字符串比较，不忽略大小写）
    pub fn is_self_evaluation(&self) -> bool {
        self.reviewer_email == self.reviewee_email
    }

    /// 校验并在不合法时返回 `Validation` 错误，错误消息以 `"; "` 连接
    pub fn validate(&self) -> Result<()> {
        let errors = self.invalidity_info();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(PeerEvalError::validation(errors.join("; ")))
        }
    }

    /// 多行诊断输出，每行以 `level` 个缩进单位开头
    pub fn to_indented_string(&self, level: usize) -> String {
        let prefix = indent(level);
        let text = |value: &Option<LongText>| {
            value
                .as_ref()
                .map(|t| t.value().to_string())
                .unwrap_or_else(|| ABSENT_TEXT.to_string())
        };

        [
            format!(
                "{prefix}[eval:{}] {}->{}",
                self.evaluation_name, self.reviewer_email, self.reviewee_email
            ),
            format!(
                "{prefix} points:{} [normalized-to-reviewee:{}] [normalized-to-instructor:{}]",
                self.points, self.details.normalized_to_reviewee, self.details.normalized_to_instructor
            ),
            format!("{prefix} justification:{}", text(&self.justification)),
            format!("{prefix} peer-feedback:{}", text(&self.peer_feedback)),
        ]
        .join("\n")
    }

    /// 转换为用于写回存储的 ActiveModel
    ///
    /// 只设置五个标识字段；分数、评语、反馈保持 `NotSet`，按部分更新处理，
    /// 需要时由调用方单独设置。
    pub fn to_active_model(&self) -> submissions::ActiveModel {
        submissions::ActiveModel {
            id: NotSet,
            course_id: Set(self.course_id.clone()),
            evaluation_name: Set(self.evaluation_name.clone()),
            team_name: Set(self.team_name.clone()),
            reviewer_email: Set(self.reviewer_email.clone()),
            reviewee_email: Set(self.reviewee_email.clone()),
            points: NotSet,
            justification: NotSet,
            peer_feedback: NotSet,
        }
    }

    /// 转换为包含全部内容字段的 ActiveModel
    pub fn to_active_model_with_content(&self) -> submissions::ActiveModel {
        let mut model = self.to_active_model();
        model.points = Set(self.points);
        model.justification = Set(self.justification.as_ref().map(|t| t.value().to_string()));
        model.peer_feedback = Set(self.peer_feedback.as_ref().map(|t| t.value().to_string()));
        model
    }
}

/// 从存储记录构造：字段原样复制，不再清洗
impl From<&submissions::Model> for SubmissionRecord {
    fn from(model: &submissions::Model) -> Self {
        Self {
            course_id: model.course_id.clone(),
            evaluation_name: model.evaluation_name.clone(),
            team_name: model.team_name.clone(),
            reviewer_email: model.reviewer_email.clone(),
            reviewee_email: model.reviewee_email.clone(),
            points: model.points,
            justification: Some(
                model
                    .justification
                    .as_deref()
                    .map(LongText::from)
                    .unwrap_or_else(LongText::empty),
            ),
            peer_feedback: Some(
                model
                    .peer_feedback
                    .as_deref()
                    .map(LongText::from)
                    .unwrap_or_else(LongText::not_available),
            ),
            details: SubmissionDetails::default(),
        }
    }
}

impl From<submissions::Model> for SubmissionRecord {
    fn from(model: submissions::Model) -> Self {
        Self::from(&model)
    }
}

impl EntityAttributes for SubmissionRecord {
    /// 按固定顺序校验：课程 → 评估 → 团队 → 被评价人邮箱 → 评价人邮箱
    ///
    /// # Panics
    ///
    /// 评语为 `None` 时直接 panic：这说明构造流程有 bug，而不是用户输入错误。
    fn invalidity_info(&self) -> Vec<String> {
        assert!(
            self.justification.is_some(),
            "submission justification must be present before validation: {}",
            self.identification_string()
        );

        [
            check_field(FieldType::CourseId, &self.course_id),
            check_field(FieldType::EvaluationName, &self.evaluation_name),
            check_field(FieldType::TeamName, &self.team_name),
            check_field_with_label(FieldType::Email, REVIEWEE_EMAIL_LABEL, &self.reviewee_email),
            check_field_with_label(FieldType::Email, REVIEWER_EMAIL_LABEL, &self.reviewer_email),
        ]
        .into_iter()
        .filter_map(|result| result.err())
        .collect()
    }

    fn identification_string(&self) -> String {
        format!(
            "{}/{} | to: {} | from: {}",
            self.course_id, self.evaluation_name, self.reviewee_email, self.reviewer_email
        )
    }

    fn entity_type_label(&self) -> &'static str {
        "Submission"
    }
}

impl fmt::Display for SubmissionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_indented_string(0))
    }
}
