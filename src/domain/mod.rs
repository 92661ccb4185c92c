mod email;
mod submission;
mod submitter_name;

pub use email::Email;
pub use submission::{FormData, FormField, SubmissionInput, SubmissionRequest, ValidationError};
pub use submitter_name::SubmitterName;
