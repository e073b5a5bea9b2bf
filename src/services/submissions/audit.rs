//! 提交记录检查

use tracing::{debug, info, warn};

use crate::entity::submissions;
use crate::models::EntityAttributes;
use crate::models::submissions::{AuditReport, InvalidSubmission, SubmissionRecord};

/// 将存储记录转换为 `SubmissionRecord` 并逐条校验
pub fn audit_submissions(rows: &[submissions::Model], indent: usize) -> AuditReport {
    let mut report = AuditReport::default();

    for row in rows {
        let record = SubmissionRecord::from(row);
        report.checked += 1;

        debug!(
            "Checking {}:\n{}",
            record.entity_type_label(),
            record.to_indented_string(indent)
        );

        if record.is_self_evaluation() {
            report.self_evaluations += 1;
            debug!("Self evaluation: {}", record.identification_string());
        }

        let errors = record.invalidity_info();
        if !errors.is_empty() {
            warn!(
                "Invalid {} [{}]: {}",
                record.entity_type_label(),
                record.identification_string(),
                errors.join("; ")
            );
            report.invalid.push(InvalidSubmission {
                identification: record.identification_string(),
                errors,
            });
        }
    }

    info!(
        "Checked {} submissions: {} invalid, {} self evaluations",
        report.checked,
        report.invalid.len(),
        report.self_evaluations
    );
    report
}
