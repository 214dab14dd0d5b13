use std::sync::OnceLock;

use crate::models::job::Job;

struct SeedJob {
    id: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    salary: &'static str,
    description: &'static str,
    posted_days: i64,
    skills: &'static [&'static str],
}

const SEED_JOBS: &[SeedJob] = &[
    SeedJob {
        id: "1",
        title: "Frontend Developer",
        company: "TechCorp",
        location: "San Francisco, CA",
        salary: "$90,000 - $120,000",
        description: "We are looking for a skilled Frontend Developer to join our team. You will be responsible for building responsive web applications using modern JavaScript frameworks and libraries.",
        posted_days: 2,
        skills: &["React", "JavaScript", "TypeScript", "CSS", "HTML", "Tailwind CSS", "Git"],
    },
    SeedJob {
        id: "2",
        title: "Backend Developer",
        company: "DataSystems",
        location: "Remote",
        salary: "$95,000 - $130,000",
        description: "Join our backend team to build scalable APIs and services. You'll work with cloud technologies and modern frameworks to deliver robust solutions.",
        posted_days: 5,
        skills: &["Node.js", "Express", "Python", "Django", "PostgreSQL", "AWS", "Docker"],
    },
    SeedJob {
        id: "3",
        title: "UX/UI Designer",
        company: "CreativeLabs",
        location: "New York, NY",
        salary: "$85,000 - $110,000",
        description: "We're seeking a talented UX/UI Designer to create beautiful, intuitive interfaces for our products. You'll work closely with product managers and developers to deliver exceptional user experiences.",
        posted_days: 1,
        skills: &["Figma", "Sketch", "Adobe XD", "Wireframing", "Prototyping", "User Research", "UI Design"],
    },
    SeedJob {
        id: "4",
        title: "Full Stack Developer",
        company: "GrowthStartup",
        location: "Austin, TX",
        salary: "$100,000 - $140,000",
        description: "Looking for a Full Stack Developer to help build our SaaS platform from the ground up. You should be comfortable with frontend and backend technologies.",
        posted_days: 3,
        skills: &["React", "Node.js", "MongoDB", "Express", "JavaScript", "AWS", "Git"],
    },
    SeedJob {
        id: "5",
        title: "DevOps Engineer",
        company: "CloudSolutions",
        location: "Remote",
        salary: "$110,000 - $150,000",
        description: "Join our DevOps team to build and maintain our cloud infrastructure. You'll work with modern CI/CD pipelines and ensure scalability and reliability of our systems.",
        posted_days: 7,
        skills: &["AWS", "Docker", "Kubernetes", "Terraform", "CI/CD", "Linux", "Python"],
    },
    SeedJob {
        id: "6",
        title: "Data Scientist",
        company: "AnalyticsPro",
        location: "Boston, MA",
        salary: "$120,000 - $160,000",
        description: "We are looking for a Data Scientist to help us extract insights from our data. You'll build machine learning models and work with large datasets to drive business decisions.",
        posted_days: 4,
        skills: &["Python", "Machine Learning", "SQL", "Data Visualization", "Statistics", "Pandas", "TensorFlow"],
    },
];

/// The built-in job listings, in catalog order.
pub fn seed_jobs() -> &'static [Job] {
    static JOBS: OnceLock<Vec<Job>> = OnceLock::new();
    JOBS.get_or_init(|| {
        SEED_JOBS
            .iter()
            .map(|seed| Job {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                company: seed.company.to_string(),
                location: seed.location.to_string(),
                salary: seed.salary.to_string(),
                job_type: "Full-time".to_string(),
                description: seed.description.to_string(),
                posted_days: seed.posted_days,
                skills: seed.skills.iter().map(|s| s.to_string()).collect(),
                posted_by: None,
                posted_at: None,
            })
            .collect()
    })
}

pub fn find_seed_job(id: &str) -> Option<&'static Job> {
    seed_jobs().iter().find(|job| job.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_seed_jobs_with_unique_ids() {
        let jobs = seed_jobs();
        assert_eq!(jobs.len(), 6);
        let ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len());
        assert_eq!(ids, HashSet::from(["1", "2", "3", "4", "5", "6"]));
    }

    #[test]
    fn test_every_seed_job_lists_seven_skills() {
        assert!(seed_jobs().iter().all(|j| j.skills.len() == 7));
    }

    #[test]
    fn test_find_seed_job() {
        let job = find_seed_job("5").unwrap();
        assert_eq!(job.title, "DevOps Engineer");
        assert!(job.skills.contains(&"Kubernetes".to_string()));
        assert!(find_seed_job("42").is_none());
    }
}
