pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{SubmissionDetails, SubmissionRecord};
pub use requests::NewSubmission;
pub use responses::{AuditReport, InvalidSubmission};
