//! Skill Match: partitions a job's required skills by presence in a user's skill set.
//!
//! Matching is exact-string and case-sensitive. "React" and "react" are different
//! skills; no trimming, folding, or fuzzy comparison happens here. Callers that
//! want normalization do it before calling in (see `profile::skills`).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::job::Job;

/// Result of matching one job against one user's skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub match_percentage: u32, // 0 – 100
    /// Job skills the user has, in job order.
    pub matched: Vec<String>,
    /// Job skills the user lacks, in job order.
    pub missing: Vec<String>,
}

/// Matches a job's required skills against `user_skills`.
///
/// - `matched` and `missing` partition `job.skills`, each keeping listing order.
/// - `match_percentage = round(matched / total * 100)`, or 0 when the job lists no skills.
///
/// An empty `user_skills` yields 0% with every job skill missing.
pub fn calculate_skill_match(job: &Job, user_skills: &[String]) -> SkillMatch {
    match_skills(&job.skills, user_skills)
}

/// Same contract as [`calculate_skill_match`] over a bare skill list.
pub fn match_skills(job_skills: &[String], user_skills: &[String]) -> SkillMatch {
    let user_set: HashSet<&str> = user_skills.iter().map(String::as_str).collect();

    let (matched, missing): (Vec<String>, Vec<String>) = job_skills
        .iter()
        .cloned()
        .partition(|skill| user_set.contains(skill.as_str()));

    SkillMatch {
        match_percentage: percentage(matched.len(), job_skills.len()),
        matched,
        missing,
    }
}

/// Batch variant: job id → match percentage for every job in `jobs`.
pub fn skill_match_scores(jobs: &[Job], user_skills: &[String]) -> HashMap<String, u32> {
    jobs.iter()
        .map(|job| {
            let score = calculate_skill_match(job, user_skills).match_percentage;
            (job.id.clone(), score)
        })
        .collect()
}

fn percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
