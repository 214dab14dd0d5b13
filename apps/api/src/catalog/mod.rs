// Built-in catalog: seed job listings and learning resources that exist
// without any recruiter action.

pub mod jobs;
pub mod resources;

pub use jobs::{find_seed_job, seed_jobs};
pub use resources::{
    filter_resources, learning_resources, recommended_resources_for_job, LearningResource,
    ResourceKind,
};
