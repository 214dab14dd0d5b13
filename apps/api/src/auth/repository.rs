use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{User, UserRole};

#[derive(Debug, FromRow)]
struct UserRecord {
    id: String,
    name: String,
    email: String,
    role: String,
    company_name: Option<String>,
}

impl UserRecord {
    fn into_user(self) -> Result<User, AppError> {
        let role = UserRole::parse(&self.role).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("User {} has unknown role '{}'", self.id, self.role))
        })?;
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
            company_name: self.company_name,
        })
    }
}

/// Registers a new account. An existing account with the same email and role is a conflict.
pub async fn insert_user(pool: &PgPool, user: &User) -> Result<(), AppError> {
    let result = sqlx::query(
        "INSERT INTO users (id, name, email, role, company_name) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(user.role.as_str())
    .bind(&user.company_name)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {
            info!("Registered user {} as {}", user.id, user.role.as_str());
            Ok(())
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict(
            "An account with this email already exists".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// The stored account for the candidate's email and role, registering the
/// candidate when there is none. One statement, so concurrent first logins
/// agree on a single id.
pub async fn find_or_insert_user(pool: &PgPool, candidate: &User) -> Result<User, AppError> {
    let record = sqlx::query_as::<_, UserRecord>(
        r#"
        INSERT INTO users (id, name, email, role, company_name)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT ((lower(email)), role) DO UPDATE SET email = users.email
        RETURNING id, name, email, role, company_name
        "#,
    )
    .bind(&candidate.id)
    .bind(&candidate.name)
    .bind(&candidate.email)
    .bind(candidate.role.as_str())
    .bind(&candidate.company_name)
    .fetch_one(pool)
    .await?;

    if record.id == candidate.id {
        info!("Registered user {} as {} on first login", record.id, record.role);
    }
    record.into_user()
}

pub async fn update_company_name(
    pool: &PgPool,
    user_id: &str,
    company_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET company_name = $1 WHERE id = $2")
        .bind(company_name)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::validation::generate_user_id;
    use crate::db::test_support::test_pool;

    fn candidate(email: &str, role: UserRole) -> User {
        User {
            id: generate_user_id(),
            name: "grace".to_string(),
            email: email.to_string(),
            role,
            company_name: (role == UserRole::Recruiter).then(|| "My Company".to_string()),
        }
    }

    #[test]
    fn test_record_with_unknown_role_is_rejected() {
        let record = UserRecord {
            id: "u1".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            role: "admin".to_string(),
            company_name: None,
        };
        assert!(matches!(record.into_user(), Err(AppError::Internal(_))));
    }

    #[tokio::test]
    #[ignore] // Requires Postgres
    async fn test_login_reuses_stored_account() {
        let pool = test_pool().await;
        let email = format!("{}@example.com", generate_user_id());

        let first = find_or_insert_user(&pool, &candidate(&email, UserRole::Recruiter))
            .await
            .unwrap();
        update_company_name(&pool, &first.id, "Ferrous Labs").await.unwrap();

        let again = find_or_insert_user(&pool, &candidate(&email.to_uppercase(), UserRole::Recruiter))
            .await
            .unwrap();
        assert_eq!(again.id, first.id);
        assert_eq!(again.company_name.as_deref(), Some("Ferrous Labs"));

        let seeker = find_or_insert_user(&pool, &candidate(&email, UserRole::JobSeeker))
            .await
            .unwrap();
        assert_ne!(seeker.id, first.id);
    }

    #[tokio::test]
    #[ignore] // Requires Postgres
    async fn test_duplicate_signup_conflicts() {
        let pool = test_pool().await;
        let email = format!("{}@example.com", generate_user_id());

        insert_user(&pool, &candidate(&email, UserRole::JobSeeker)).await.unwrap();
        let result = insert_user(&pool, &candidate(&email, UserRole::JobSeeker)).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
