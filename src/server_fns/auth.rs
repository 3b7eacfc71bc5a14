use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::LoginOutcome;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(session.get("user").await.ok().flatten())
}

/// Authenticate the submitted identifier. Application-level rejection comes
/// back in-band as a [`LoginOutcome`] with status code 40; an `Err` here
/// means the call itself failed.
#[server]
pub async fn login(
    email: String,
    phone: String,
    password: String,
) -> Result<LoginOutcome, ServerFnError> {
    use axum::Extension;
    use crate::models::{IdentifierMode, STATUS_ACCEPTED};
    use crate::services::auth::{self, AuthError};
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // The form clears the unused identifier, so the non-empty one decides
    let (mode, identifier) = if phone.is_empty() {
        (IdentifierMode::Email, email)
    } else {
        (IdentifierMode::Phone, phone)
    };

    let user = match auth::login(&state.db, mode, &identifier, &password).await {
        Ok(user) => user,
        Err(e @ (AuthError::InvalidCredentials | AuthError::AccountLocked)) => {
            return Ok(LoginOutcome::rejected(e.to_string()));
        }
        Err(e) => return Err(ServerFnError::new(e.to_string())),
    };

    if !user.verified {
        let token = auth::create_verification_token(&state.db, &user.id)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        return Ok(LoginOutcome {
            status_code: STATUS_ACCEPTED,
            message: "Account not verified yet".into(),
            verified: false,
            token: Some(token),
            email: Some(user.email),
        });
    }

    Ok(LoginOutcome {
        status_code: STATUS_ACCEPTED,
        message: "Login successful".into(),
        verified: true,
        token: None,
        email: Some(user.email),
    })
}

/// Second step of the login flow: re-check the password and store the user
/// in the server-side session.
#[server]
pub async fn establish_session(
    email: String,
    password: String,
) -> Result<SessionUser, ServerFnError> {
    use axum::Extension;
    use crate::models::IdentifierMode;
    use crate::services::auth;
    use crate::state::AppState;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = auth::login(&state.db, IdentifierMode::Email, &email, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !user.verified {
        return Err(ServerFnError::new("Account not verified yet"));
    }

    let session_user = SessionUser {
        id: user.id,
        email: user.email,
    };
    session.insert("user", &session_user).await?;
    Ok(session_user)
}

#[server]
pub async fn register(
    email: String,
    phone: String,
    password: String,
) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::services::auth;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let phone = Some(phone.trim()).filter(|p| !p.is_empty());
    let user_id = auth::register(&state.db, &email, phone, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let token = auth::create_verification_token(&state.db, &user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    state
        .email
        .send_verification(&email, &token)
        .await
        .map_err(ServerFnError::new)?;

    Ok(())
}

#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session.delete().await?;
    Ok(())
}

#[server]
pub async fn verify_account(token: String) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::services::auth;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    auth::verify_account(&state.db, &token)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[server]
pub async fn request_password_recovery(email: String) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::{db, services::auth, state::AppState};
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    // Always succeed to prevent email enumeration
    if let Some(user) = db::get_user_by_email(&state.db, &email).await {
        if let Ok(token) = auth::create_recovery_token(&state.db, &user.id).await {
            let _ = state.email.send_password_recovery(&email, &token).await;
        }
    }

    Ok(())
}

#[server]
pub async fn reset_password(token: String, password: String) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::services::auth;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    auth::reset_password(&state.db, &token, &password)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
