use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    JobSeeker,
    Recruiter,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::JobSeeker => "job-seeker",
            UserRole::Recruiter => "recruiter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "job-seeker" => Some(UserRole::JobSeeker),
            "recruiter" => Some(UserRole::Recruiter),
            _ => None,
        }
    }
}

/// The identity carried by a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl User {
    pub fn is_recruiter(&self) -> bool {
        self.role == UserRole::Recruiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [UserRole::JobSeeker, UserRole::Recruiter] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("admin"), None);
    }

    #[test]
    fn test_role_serde_uses_kebab_case() {
        let json = serde_json::to_string(&UserRole::JobSeeker).unwrap();
        assert_eq!(json, "\"job-seeker\"");
    }
}
