// Skill matching: partitions a job's required skills against a user's declared skills.
// Pure and synchronous; every handler that shows a match score goes through here.

pub mod handlers;
pub mod skill_match;

pub use skill_match::{calculate_skill_match, match_skills, skill_match_scores, SkillMatch};
