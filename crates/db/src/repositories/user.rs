use crate::models::DbUser;
use chrono::Utc;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a user. Returns `Ok(None)` when the email is already taken;
/// the unique index on `email` does the duplicate check.
pub async fn create_user(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
    city: &str,
) -> Result<Option<DbUser>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating user: id={}, email={}, role={}", id, email, role);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, city, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (email) DO NOTHING
        RETURNING id, name, email, password_hash, role, city, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(city)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, role, city, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, password_hash, role, city, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Field-wise update; unset fields keep their stored values.
pub async fn update_user(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    email: Option<&str>,
    password_hash: Option<&str>,
    city: Option<&str>,
) -> Result<DbUser> {
    let user = get_user_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("User not found"))?;

    let name = name.unwrap_or(&user.name);
    let email = email.unwrap_or(&user.email);
    let password_hash = password_hash.unwrap_or(&user.password_hash);
    let city = city.unwrap_or(&user.city);

    let updated = sqlx::query_as::<_, DbUser>(
        r#"
        UPDATE users
        SET name = $2, email = $3, password_hash = $4, city = $5
        WHERE id = $1
        RETURNING id, name, email, password_hash, role, city, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(city)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}
