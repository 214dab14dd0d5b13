//! Job posting validation. Mirrors the recruiter form's rules so API clients
//! get the same errors the form would show.

use serde::Deserialize;

use crate::errors::AppError;

const MIN_TITLE: usize = 5;
const MIN_COMPANY: usize = 2;
const MIN_LOCATION: usize = 2;
const MIN_DESCRIPTION: usize = 20;
const MIN_SKILLS_TEXT: usize = 3;
const DEFAULT_SALARY: &str = "Competitive";

/// Skills may arrive as a comma-separated string (form input) or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub description: String,
    pub skills: SkillsInput,
}

/// A posting that passed validation, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub skills: Vec<String>,
}

impl JobPosting {
    pub fn validate(self) -> Result<ValidatedPosting, AppError> {
        let title = require_min("title", &self.title, MIN_TITLE, "Job title")?;
        let company = require_min("company", &self.company, MIN_COMPANY, "Company name")?;
        let location = require_min("location", &self.location, MIN_LOCATION, "Location")?;
        let job_type = self.job_type.trim().to_string();
        if job_type.is_empty() {
            return Err(AppError::Validation("type: Job type is required".to_string()));
        }
        let description =
            require_min("description", &self.description, MIN_DESCRIPTION, "Description")?;

        let skills = match &self.skills {
            SkillsInput::Text(text) => {
                if text.trim().chars().count() < MIN_SKILLS_TEXT {
                    return Err(skills_error());
                }
                parse_skill_list(text)
            }
            SkillsInput::List(items) => clean_skills(items.iter().map(String::as_str)),
        };
        if skills.is_empty() {
            return Err(skills_error());
        }

        let salary = self
            .salary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SALARY)
            .to_string();

        Ok(ValidatedPosting {
            title,
            company,
            location,
            job_type,
            salary,
            description,
            skills,
        })
    }
}

/// Splits a comma-separated skill string, trimming each piece and dropping empties.
pub fn parse_skill_list(text: &str) -> Vec<String> {
    clean_skills(text.split(','))
}

fn clean_skills<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn require_min(field: &str, value: &str, min: usize, label: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        return Err(AppError::Validation(format!(
            "{field}: {label} must be at least {min} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn skills_error() -> AppError {
    AppError::Validation("skills: Please add at least one skill".to_string())
}
