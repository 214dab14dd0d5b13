use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SeekerProfile {
    pub full_name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
}

impl SeekerProfile {
    /// An empty profile carrying the account's name and email.
    pub fn for_account(user: &User) -> Self {
        Self {
            full_name: user.name.clone(),
            title: String::new(),
            location: String::new(),
            email: user.email.clone(),
            phone: String::new(),
        }
    }

    /// Stored rows may predate any contact details (a skill added first creates
    /// the row), so blank name and email fall back to the account.
    pub fn with_account_defaults(mut self, user: &User) -> Self {
        if self.full_name.trim().is_empty() {
            self.full_name = user.name.clone();
        }
        if self.email.trim().is_empty() {
            self.email = user.email.clone();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub website: String,
    pub description: String,
    pub location: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Tech Innovations Inc.".to_string(),
            industry: "Technology".to_string(),
            size: "51-200 employees".to_string(),
            website: "https://techinnovations.example.com".to_string(),
            description: "Tech Innovations Inc. is a forward-thinking technology company focused on creating cutting-edge solutions for businesses. We specialize in AI-powered tools, cloud infrastructure, and enterprise software.".to_string(),
            location: "San Francisco, CA".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    fn account() -> User {
        User {
            id: "seeker0000001".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::JobSeeker,
            company_name: None,
        }
    }

    #[test]
    fn test_blank_row_takes_account_name_and_email() {
        let stored = SeekerProfile {
            full_name: String::new(),
            title: String::new(),
            location: String::new(),
            email: "  ".to_string(),
            phone: String::new(),
        };
        assert_eq!(
            stored.with_account_defaults(&account()),
            SeekerProfile::for_account(&account())
        );
    }

    #[test]
    fn test_saved_details_win_over_account() {
        let stored = SeekerProfile {
            full_name: "Augusta Ada King".to_string(),
            title: "Analyst".to_string(),
            location: "London".to_string(),
            email: "countess@example.com".to_string(),
            phone: "555-0100".to_string(),
        };
        assert_eq!(stored.clone().with_account_defaults(&account()), stored);
    }

    #[test]
    fn test_company_defaults() {
        let company = CompanyProfile::default();
        assert_eq!(company.name, "Tech Innovations Inc.");
        assert_eq!(company.size, "51-200 employees");
    }
}
