use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Pool, Sqlite};

pub type Db = Pool<Sqlite>;

// User model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub verified: bool,
    pub password_hash: String,
    pub created_at: String,
    pub failed_attempts: i32,
    pub locked_until: Option<String>,
}

// Create connection pool, creating the database file on first run
pub async fn create_pool(url: &str) -> Result<Db, sqlx::Error> {
    let options: sqlx::sqlite::SqliteConnectOptions = url.parse()?;
    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options.create_if_missing(true))
        .await
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            phone TEXT UNIQUE,
            verified INTEGER DEFAULT 0,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL,
            failed_attempts INTEGER DEFAULT 0,
            locked_until TEXT
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tokens (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            kind TEXT NOT NULL,
            hash TEXT NOT NULL,
            expires_at TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}

// User queries
pub async fn get_user_by_email(db: &Db, email: &str) -> Option<User> {
    sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(email.to_lowercase())
        .fetch_optional(db)
        .await
        .ok()
        .flatten()
}

pub async fn get_user_by_phone(db: &Db, phone: &str) -> Option<User> {
    sqlx::query_as("SELECT * FROM users WHERE phone = ?")
        .bind(phone)
        .fetch_optional(db)
        .await
        .ok()
        .flatten()
}

pub async fn get_user_by_id(db: &Db, id: &str) -> Option<User> {
    sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
        .ok()
        .flatten()
}

pub async fn create_user(
    db: &Db,
    id: &str,
    email: &str,
    phone: Option<&str>,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, email, phone, password_hash, created_at) VALUES (?, ?, ?, ?, datetime('now'))",
    )
    .bind(id)
    .bind(email.to_lowercase())
    .bind(phone)
    .bind(password_hash)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn mark_user_verified(db: &Db, user_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET verified = 1 WHERE id = ?")
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn update_password(db: &Db, user_id: &str, hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
        .bind(hash)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn update_failed_attempts(
    db: &Db,
    user_id: &str,
    count: i32,
    locked_until: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET failed_attempts = ?, locked_until = ? WHERE id = ?")
        .bind(count)
        .bind(locked_until)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

// Token queries
pub async fn create_token(
    db: &Db,
    id: &str,
    user_id: &str,
    kind: &str,
    hash: &str,
    expires_at: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO tokens (id, user_id, kind, hash, expires_at) VALUES (?, ?, ?, ?, ?)")
        .bind(id)
        .bind(user_id)
        .bind(kind)
        .bind(hash)
        .bind(expires_at)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn get_token(db: &Db, hash: &str, kind: &str) -> Option<(String, String, String)> {
    sqlx::query_as("SELECT id, user_id, expires_at FROM tokens WHERE hash = ? AND kind = ?")
        .bind(hash)
        .bind(kind)
        .fetch_optional(db)
        .await
        .ok()
        .flatten()
}

pub async fn delete_token(db: &Db, id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM tokens WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(())
}
