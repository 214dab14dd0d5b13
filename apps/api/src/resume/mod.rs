// Resume upload: stored in object storage, text extracted where possible,
// and analyzed against a job's required skills.

pub mod extract;
pub mod handlers;
pub mod store;

pub use store::{ResumeStore, S3ResumeStore};
