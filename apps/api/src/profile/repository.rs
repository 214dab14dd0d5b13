use sqlx::PgPool;
use tracing::info;

use crate::models::profile::{CompanyProfile, SeekerProfile};

/// The declared skills of a job seeker. Empty when never set.
pub async fn get_skills(pool: &PgPool, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
    let skills: Option<Vec<String>> =
        sqlx::query_scalar("SELECT skills FROM seeker_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(skills.unwrap_or_default())
}

pub async fn save_skills(pool: &PgPool, user_id: &str, skills: &[String]) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO seeker_profiles (user_id, skills)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET skills = EXCLUDED.skills
        "#,
    )
    .bind(user_id)
    .bind(skills)
    .execute(pool)
    .await?;

    info!("Saved {} skills for user {user_id}", skills.len());
    Ok(())
}

/// Appends `skill` in a single statement so concurrent adds cannot overwrite
/// each other. Returns the new list, or `None` when the skill was already present.
pub async fn append_skill(
    pool: &PgPool,
    user_id: &str,
    skill: &str,
) -> Result<Option<Vec<String>>, sqlx::Error> {
    let skills: Option<Vec<String>> = sqlx::query_scalar(
        r#"
        INSERT INTO seeker_profiles (user_id, skills)
        VALUES ($1, ARRAY[$2::TEXT])
        ON CONFLICT (user_id) DO UPDATE
            SET skills = array_append(seeker_profiles.skills, $2::TEXT)
            WHERE NOT ($2::TEXT = ANY(seeker_profiles.skills))
        RETURNING skills
        "#,
    )
    .bind(user_id)
    .bind(skill)
    .fetch_optional(pool)
    .await?;

    if skills.is_some() {
        info!("Added skill '{skill}' for user {user_id}");
    }
    Ok(skills)
}

/// Removes every occurrence of `skill`. `None` when the user does not have it.
pub async fn delete_skill(
    pool: &PgPool,
    user_id: &str,
    skill: &str,
) -> Result<Option<Vec<String>>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        UPDATE seeker_profiles
        SET skills = array_remove(skills, $2::TEXT)
        WHERE user_id = $1 AND $2::TEXT = ANY(skills)
        RETURNING skills
        "#,
    )
    .bind(user_id)
    .bind(skill)
    .fetch_optional(pool)
    .await
}

pub async fn get_seeker_profile(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<SeekerProfile>, sqlx::Error> {
    sqlx::query_as::<_, SeekerProfile>(
        "SELECT full_name, title, location, email, phone FROM seeker_profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Upserts contact details without touching the skill list.
pub async fn save_seeker_profile(
    pool: &PgPool,
    user_id: &str,
    profile: &SeekerProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO seeker_profiles (user_id, full_name, title, location, email, phone)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (user_id) DO UPDATE SET
            full_name = EXCLUDED.full_name,
            title = EXCLUDED.title,
            location = EXCLUDED.location,
            email = EXCLUDED.email,
            phone = EXCLUDED.phone
        "#,
    )
    .bind(user_id)
    .bind(&profile.full_name)
    .bind(&profile.title)
    .bind(&profile.location)
    .bind(&profile.email)
    .bind(&profile.phone)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_company_profile(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<CompanyProfile>, sqlx::Error> {
    sqlx::query_as::<_, CompanyProfile>(
        r#"
        SELECT name, industry, size, website, description, location
        FROM company_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn save_company_profile(
    pool: &PgPool,
    user_id: &str,
    profile: &CompanyProfile,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO company_profiles (user_id, name, industry, size, website, description, location)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            industry = EXCLUDED.industry,
            size = EXCLUDED.size,
            website = EXCLUDED.website,
            description = EXCLUDED.description,
            location = EXCLUDED.location
        "#,
    )
    .bind(user_id)
    .bind(&profile.name)
    .bind(&profile.industry)
    .bind(&profile.size)
    .bind(&profile.website)
    .bind(&profile.description)
    .bind(&profile.location)
    .execute(pool)
    .await?;

    info!("Saved company profile '{}' for recruiter {user_id}", profile.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{seed_user, test_pool};
    use crate::models::user::UserRole;

    #[tokio::test]
    #[ignore] // Requires Postgres
    async fn test_skill_row_keeps_account_defaults() {
        let pool = test_pool().await;
        let user = seed_user(&pool, UserRole::JobSeeker).await;

        append_skill(&pool, &user.id, "React").await.unwrap();
        let stored = get_seeker_profile(&pool, &user.id).await.unwrap().unwrap();
        let profile = stored.with_account_defaults(&user);

        assert_eq!(profile.full_name, user.name);
        assert_eq!(profile.email, user.email);
        assert_eq!(get_skills(&pool, &user.id).await.unwrap(), vec!["React"]);
    }

    #[tokio::test]
    #[ignore] // Requires Postgres
    async fn test_concurrent_appends_all_land() {
        let pool = test_pool().await;
        let user = seed_user(&pool, UserRole::JobSeeker).await;

        let tasks: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                let user_id = user.id.clone();
                tokio::spawn(async move { append_skill(&pool, &user_id, &format!("Skill{i}")).await })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().unwrap().is_some());
        }

        let mut skills = get_skills(&pool, &user.id).await.unwrap();
        skills.sort();
        let expected: Vec<String> = (0..10).map(|i| format!("Skill{i}")).collect();
        assert_eq!(skills, expected);
    }

    #[tokio::test]
    #[ignore] // Requires Postgres
    async fn test_append_and_delete_report_no_change() {
        let pool = test_pool().await;
        let user = seed_user(&pool, UserRole::JobSeeker).await;

        assert_eq!(
            append_skill(&pool, &user.id, "Go").await.unwrap(),
            Some(vec!["Go".to_string()])
        );
        assert_eq!(append_skill(&pool, &user.id, "Go").await.unwrap(), None);
        assert_eq!(delete_skill(&pool, &user.id, "Rust").await.unwrap(), None);
        assert_eq!(delete_skill(&pool, &user.id, "Go").await.unwrap(), Some(vec![]));
    }
}
