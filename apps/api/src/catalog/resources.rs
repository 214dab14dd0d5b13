use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::matching::calculate_skill_match;
use crate::models::job::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Course,
    Article,
    Video,
    Tool,
}

impl ResourceKind {
    /// Case-insensitive parse of a filter value. `None` for anything unknown.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "course" => Some(ResourceKind::Course),
            "article" => Some(ResourceKind::Article),
            "video" => Some(ResourceKind::Video),
            "tool" => Some(ResourceKind::Tool),
            _ => None,
        }
    }
}

/// A course, article, video, or tool that teaches one or more skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub provider: String,
    pub resource_type: ResourceKind,
    pub image: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub url: String,
}

#[allow(clippy::too_many_arguments)]
fn resource(
    id: &str,
    title: &str,
    description: &str,
    provider: &str,
    resource_type: ResourceKind,
    image: &str,
    duration: &str,
    skills: &[&str],
    url: &str,
) -> LearningResource {
    LearningResource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        provider: provider.to_string(),
        resource_type,
        image: image.to_string(),
        duration: duration.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        url: url.to_string(),
    }
}

/// The built-in learning resources, in catalog order.
pub fn learning_resources() -> &'static [LearningResource] {
    static RESOURCES: OnceLock<Vec<LearningResource>> = OnceLock::new();
    RESOURCES.get_or_init(|| {
        vec![
            resource(
                "1",
                "Modern React with Hooks",
                "Learn how to build modern React applications using hooks, context, and the latest best practices in React development.",
                "Udemy",
                ResourceKind::Course,
                "https://images.unsplash.com/photo-1633356122544-f134324a6cee?auto=format&fit=crop&q=80",
                "15 hours",
                &["React", "JavaScript", "Hooks", "Context API"],
                "https://example.com/course",
            ),
            resource(
                "2",
                "Complete Python Developer in 2024",
                "Learn Python from scratch. This course covers everything from basics to advanced topics including web development, data science, and automation.",
                "Coursera",
                ResourceKind::Course,
                "https://images.unsplash.com/photo-1526379095098-d400fd0bf935?auto=format&fit=crop&q=80",
                "30 hours",
                &["Python", "Django", "Flask", "Data Analysis"],
                "https://example.com/course",
            ),
            resource(
                "3",
                "The Complete Node.js Developer",
                "Build, test, and launch Node applications. Learn Node.js by building real-world applications with MongoDB, Express, and more.",
                "Pluralsight",
                ResourceKind::Course,
                "https://images.unsplash.com/photo-1598425237654-4fc758e50a93?auto=format&fit=crop&q=80",
                "20 hours",
                &["Node.js", "Express", "MongoDB", "REST API"],
                "https://example.com/course",
            ),
            resource(
                "4",
                "Docker and Kubernetes: The Complete Guide",
                "Master Docker and Kubernetes to deploy and scale your applications. Learn container technology and orchestration from the ground up.",
                "LinkedIn Learning",
                ResourceKind::Course,
                "https://images.unsplash.com/photo-1605745341112-85968b19335b?auto=format&fit=crop&q=80",
                "18 hours",
                &["Docker", "Kubernetes", "CI/CD", "DevOps"],
                "https://example.com/course",
            ),
            resource(
                "5",
                "UI/UX Design Principles",
                "Learn the fundamental principles of UI/UX design. This course covers user research, wireframing, prototyping, and user testing.",
                "Design+Code",
                ResourceKind::Course,
                "https://images.unsplash.com/photo-1581291518633-83b4ebd1d83e?auto=format&fit=crop&q=80",
                "12 hours",
                &["UI Design", "UX Design", "Wireframing", "Prototyping"],
                "https://example.com/course",
            ),
            resource(
                "6",
                "How to Write a Great Resume for Software Engineers",
                "Learn how to create a resume that stands out to recruiters and hiring managers in the tech industry. Includes templates and examples.",
                "CareerFoundry",
                ResourceKind::Article,
                "https://images.unsplash.com/photo-1586281380117-5a60ae2050cc?auto=format&fit=crop&q=80",
                "15 min read",
                &["Career Development", "Resume Building", "Job Hunting"],
                "https://example.com/article",
            ),
            resource(
                "7",
                "Mastering SQL for Data Analysis",
                "Learn advanced SQL techniques for data analysis. This course covers complex queries, optimization, and working with large datasets.",
                "DataCamp",
                ResourceKind::Course,
                "https://images.unsplash.com/photo-1489875347897-49f64b51c1f8?auto=format&fit=crop&q=80",
                "10 hours",
                &["SQL", "Database Design", "Data Analysis"],
                "https://example.com/course",
            ),
            resource(
                "8",
                "Acing the Technical Interview",
                "Prepare for technical interviews with this comprehensive guide. Covers algorithms, data structures, system design, and behavioral questions.",
                "Pramp",
                ResourceKind::Video,
                "https://images.unsplash.com/photo-1551836022-deb4988cc6c0?auto=format&fit=crop&q=80",
                "2 hours",
                &["Algorithms", "Data Structures", "Interview Prep"],
                "https://example.com/video",
            ),
        ]
    })
}

/// Filters the catalog by a search term and an optional kind.
///
/// The term matches case-insensitively as a substring of the title, description,
/// provider, or any skill. An empty term matches everything.
pub fn filter_resources(search: Option<&str>, kind: Option<ResourceKind>) -> Vec<LearningResource> {
    let term = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();

    learning_resources()
        .iter()
        .filter(|r| kind.map_or(true, |k| r.resource_type == k))
        .filter(|r| {
            term.is_empty()
                || r.title.to_lowercase().contains(&term)
                || r.description.to_lowercase().contains(&term)
                || r.provider.to_lowercase().contains(&term)
                || r.skills.iter().any(|s| s.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Resources teaching at least one of `skills` (exact match).
pub fn resources_for_skills(skills: &[String]) -> Vec<LearningResource> {
    learning_resources()
        .iter()
        .filter(|r| r.skills.iter().any(|s| skills.contains(s)))
        .cloned()
        .collect()
}

/// Resources covering the skills this user is missing for `job`.
pub fn recommended_resources_for_job(job: &Job, user_skills: &[String]) -> Vec<LearningResource> {
    let missing = calculate_skill_match(job, user_skills).missing;
    resources_for_skills(&missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_seed_job;

    fn ids(resources: &[LearningResource]) -> Vec<&str> {
        resources.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_catalog() {
        assert_eq!(filter_resources(None, None).len(), 8);
        assert_eq!(filter_resources(Some("  "), None).len(), 8);
    }

    #[test]
    fn test_kind_filter() {
        let videos = filter_resources(None, Some(ResourceKind::Video));
        assert_eq!(ids(&videos), vec!["8"]);
        assert!(filter_resources(None, Some(ResourceKind::Tool)).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        // skill
        assert_eq!(ids(&filter_resources(Some("kubernetes"), None)), vec!["4"]);
        // provider
        assert_eq!(ids(&filter_resources(Some("DATACAMP"), None)), vec!["7"]);
        // description + skills
        assert_eq!(
            ids(&filter_resources(Some("data analysis"), None)),
            vec!["2", "7"]
        );
    }

    #[test]
    fn test_search_and_kind_combine() {
        let found = filter_resources(Some("resume"), Some(ResourceKind::Course));
        assert!(found.is_empty());
        let found = filter_resources(Some("resume"), Some(ResourceKind::Article));
        assert_eq!(ids(&found), vec!["6"]);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(ResourceKind::parse("Course"), Some(ResourceKind::Course));
        assert_eq!(ResourceKind::parse("video"), Some(ResourceKind::Video));
        assert_eq!(ResourceKind::parse("podcast"), None);
    }

    #[test]
    fn test_resources_for_skills_exact_match() {
        let found = resources_for_skills(&["Docker".to_string()]);
        assert_eq!(ids(&found), vec!["4"]);
        assert!(resources_for_skills(&["docker".to_string()]).is_empty());
        assert!(resources_for_skills(&[]).is_empty());
    }

    #[test]
    fn test_recommendations_target_missing_skills() {
        // DevOps: AWS, Docker, Kubernetes, Terraform, CI/CD, Linux, Python
        let job = find_seed_job("5").unwrap();
        let user = vec!["Docker".to_string(), "Kubernetes".to_string(), "CI/CD".to_string()];
        // Docker course no longer needed; Python course covers a missing skill.
        assert_eq!(ids(&recommended_resources_for_job(job, &user)), vec!["2"]);
    }

    #[test]
    fn test_full_match_needs_no_resources() {
        let job = find_seed_job("3").unwrap();
        assert!(recommended_resources_for_job(job, &job.skills).is_empty());
    }
}
