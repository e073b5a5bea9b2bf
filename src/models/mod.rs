pub mod common;
pub mod submissions;

pub use common::{EntityAttributes, LongText};
pub use submissions::{NewSubmission, SubmissionDetails, SubmissionRecord};
