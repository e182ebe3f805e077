mod notification;
mod required_field;
mod submission;

pub use notification::Notification;
pub use required_field::RequiredField;
pub use submission::{Submission, SubmissionForm};
