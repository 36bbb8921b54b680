//! Authentication handlers.

use actix_web::{HttpResponse, web};

use hilite_core::DomainError;
use hilite_core::domain::User;
use hilite_core::ports::AuthError;
use hilite_core::validation::{LoginForm, RegistrationForm, validate_login, validate_registration};
use hilite_shared::dto::{AuthResponse, LoginRequest, RegisterUserRequest, UserResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        bio: user.bio.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}

fn issue_token(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = state
        .tokens
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expiration_seconds().max(0) as u64,
    })
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let input = validate_registration(&RegistrationForm {
        name: &req.name,
        email: &req.email,
        password: &req.password,
        confirm_password: &req.confirm_password,
        accepted_terms: req.accepted_terms.as_ref(),
    })?;

    if state.users.find_by_email(input.email()).await?.is_some() {
        return Err(DomainError::Duplicate("Email already registered".to_string()).into());
    }

    let password_hash = state.passwords.hash(input.password())?;
    let user = state
        .users
        .save(User::new(
            input.name().to_string(),
            input.email().to_string(),
            password_hash,
        ))
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(HttpResponse::Created().json(issue_token(&state, &user)?))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password get the same 401.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let input = validate_login(&LoginForm {
        email: &req.email,
        password: &req.password,
    })?;

    let user = state
        .users
        .find_by_email(input.email())
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !state.passwords.verify(input.password(), &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(HttpResponse::Ok().json(issue_token(&state, &user)?))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "User",
            id: identity.user_id,
        })?;

    Ok(HttpResponse::Ok().json(user_response(&user)))
}
