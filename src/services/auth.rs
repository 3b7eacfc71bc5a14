use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use chrono::{Duration, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::db::{self, Db, User};
use crate::models::IdentifierMode;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already registered")]
    EmailExists,
    #[error("Phone number already registered")]
    PhoneExists,
    #[error("Account locked, try again later")]
    AccountLocked,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Account not verified")]
    NotVerified,
    #[error("{0}")]
    Other(String),
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Other(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|h| Argon2::default().verify_password(password.as_bytes(), &h).is_ok())
        .unwrap_or(false)
}

fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

pub async fn register(
    db: &Db,
    email: &str,
    phone: Option<&str>,
    password: &str,
) -> Result<String, AuthError> {
    if db::get_user_by_email(db, email).await.is_some() {
        return Err(AuthError::EmailExists);
    }
    if let Some(phone) = phone {
        if db::get_user_by_phone(db, phone).await.is_some() {
            return Err(AuthError::PhoneExists);
        }
    }
    let id = Uuid::new_v4().to_string();
    let hash = hash_password(password)?;
    db::create_user(db, &id, email, phone, &hash)
        .await
        .map_err(|e| AuthError::Other(e.to_string()))?;
    Ok(id)
}

/// Authenticate by whichever identifier the login form submitted.
pub async fn login(
    db: &Db,
    mode: IdentifierMode,
    identifier: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = match mode {
        IdentifierMode::Email => db::get_user_by_email(db, identifier).await,
        IdentifierMode::Phone => db::get_user_by_phone(db, identifier).await,
    }
    .ok_or(AuthError::InvalidCredentials)?;

    // Check lockout
    if let Some(ref locked) = user.locked_until {
        if chrono::DateTime::parse_from_rfc3339(locked)
            .map(|t| t > Utc::now())
            .unwrap_or(false)
        {
            return Err(AuthError::AccountLocked);
        }
    }

    if !verify_password(password, &user.password_hash) {
        let attempts = user.failed_attempts + 1;
        let locked = if attempts >= 5 {
            Some((Utc::now() + Duration::minutes(15)).to_rfc3339())
        } else {
            None
        };
        let _ = db::update_failed_attempts(db, &user.id, attempts, locked.as_deref()).await;
        return Err(AuthError::InvalidCredentials);
    }

    let _ = db::update_failed_attempts(db, &user.id, 0, None).await;
    Ok(user)
}

pub async fn create_verification_token(db: &Db, user_id: &str) -> Result<String, AuthError> {
    create_token(db, user_id, "verify", 24).await
}

pub async fn create_recovery_token(db: &Db, user_id: &str) -> Result<String, AuthError> {
    create_token(db, user_id, "recovery", 1).await
}

async fn create_token(db: &Db, user_id: &str, kind: &str, hours: i64) -> Result<String, AuthError> {
    let token = Uuid::new_v4().to_string();
    let expires = (Utc::now() + Duration::hours(hours)).to_rfc3339();
    db::create_token(
        db,
        &Uuid::new_v4().to_string(),
        user_id,
        kind,
        &hash_token(&token),
        &expires,
    )
    .await
    .map_err(|e| AuthError::Other(e.to_string()))?;
    Ok(token)
}

pub async fn consume_token(db: &Db, token: &str, kind: &str) -> Result<String, AuthError> {
    let (id, user_id, expires) = db::get_token(db, &hash_token(token), kind)
        .await
        .ok_or(AuthError::InvalidToken)?;
    if chrono::DateTime::parse_from_rfc3339(&expires)
        .map(|t| t < Utc::now())
        .unwrap_or(true)
    {
        return Err(AuthError::InvalidToken);
    }
    let _ = db::delete_token(db, &id).await;
    Ok(user_id)
}

pub async fn verify_account(db: &Db, token: &str) -> Result<(), AuthError> {
    let user_id = consume_token(db, token, "verify").await?;
    db::mark_user_verified(db, &user_id)
        .await
        .map_err(|e| AuthError::Other(e.to_string()))
}

pub async fn reset_password(db: &Db, token: &str, new_password: &str) -> Result<(), AuthError> {
    let user_id = consume_token(db, token, "recovery").await?;
    let hash = hash_password(new_password)?;
    db::update_password(db, &user_id, &hash)
        .await
        .map_err(|e| AuthError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies_and_rejects() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn verify_password_tolerates_garbage_hash() {
        assert!(!verify_password("hunter2", "not-a-phc-string"));
    }

    #[test]
    fn token_hash_is_stable_and_distinct() {
        assert_eq!(hash_token("abc"), hash_token("abc"));
        assert_ne!(hash_token("abc"), hash_token("abd"));
        // hex-encoded SHA-256
        assert_eq!(hash_token("abc").len(), 64);
    }
}
