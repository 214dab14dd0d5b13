use crate::models::job::Job;

/// Case-insensitive substring search over title, company, and skills.
/// A blank term returns every job.
pub fn filter_jobs(jobs: Vec<Job>, term: &str) -> Vec<Job> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return jobs;
    }
    jobs.into_iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&term)
                || job.company.to_lowercase().contains(&term)
                || job.skills.iter().any(|s| s.to_lowercase().contains(&term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_jobs;

    fn titles(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn test_blank_term_keeps_all() {
        assert_eq!(filter_jobs(seed_jobs().to_vec(), "  ").len(), 6);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let found = filter_jobs(seed_jobs().to_vec(), "devops");
        assert_eq!(titles(&found), vec!["DevOps Engineer"]);
    }

    #[test]
    fn test_matches_company() {
        let found = filter_jobs(seed_jobs().to_vec(), "analyticspro");
        assert_eq!(titles(&found), vec!["Data Scientist"]);
    }

    #[test]
    fn test_matches_skill_substring() {
        // "Docker" appears in the Backend and DevOps listings.
        let found = filter_jobs(seed_jobs().to_vec(), "dock");
        assert_eq!(titles(&found), vec!["Backend Developer", "DevOps Engineer"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_jobs(seed_jobs().to_vec(), "haskell").is_empty());
    }
}
