use rand::Rng;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::user::{User, UserRole};

const MIN_NAME: usize = 2;
const MIN_PASSWORD: usize = 8;
const USER_ID_LEN: usize = 13;
const USER_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DEFAULT_COMPANY_NAME: &str = "My Company";

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl SignupRequest {
    /// Validates the form and builds the new user. Passwords are checked for
    /// shape only; nothing is stored.
    pub fn into_user(self) -> Result<User, AppError> {
        let name = self.name.trim();
        if name.chars().count() < MIN_NAME {
            return Err(AppError::Validation(format!(
                "name: Name must be at least {MIN_NAME} characters"
            )));
        }
        let email = validate_email(&self.email)?;
        validate_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(AppError::Validation(
                "confirm_password: Passwords do not match".to_string(),
            ));
        }
        let role = parse_role(&self.role)?;
        Ok(new_user(name.to_string(), email, role))
    }
}

impl LoginRequest {
    /// Mock login: any well-formed credentials pass. Builds the identity to
    /// register when the email is new, named after the email's local part.
    pub fn into_user(self) -> Result<User, AppError> {
        let email = validate_email(&self.email)?;
        validate_password(&self.password)?;
        let role = parse_role(&self.role)?;
        let name = email.split('@').next().unwrap_or_default().to_string();
        Ok(new_user(name, email, role))
    }
}

fn new_user(name: String, email: String, role: UserRole) -> User {
    User {
        id: generate_user_id(),
        name,
        email,
        company_name: (role == UserRole::Recruiter).then(|| DEFAULT_COMPANY_NAME.to_string()),
        role,
    }
}

/// 13 random lowercase base-36 characters.
pub fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    (0..USER_ID_LEN)
        .map(|_| USER_ID_ALPHABET[rng.gen_range(0..USER_ID_ALPHABET.len())] as char)
        .collect()
}

fn validate_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    let invalid = || AppError::Validation("email: Please enter a valid email address".to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(invalid());
    }
    Ok(email.to_string())
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD {
        return Err(AppError::Validation(format!(
            "password: Password must be at least {MIN_PASSWORD} characters"
        )));
    }
    Ok(())
}

fn parse_role(raw: &str) -> Result<UserRole, AppError> {
    UserRole::parse(raw).ok_or_else(|| AppError::Validation("role: Please select a role".to_string()))
}
