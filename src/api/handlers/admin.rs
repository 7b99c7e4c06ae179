use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use rand::rngs::OsRng;
use tracing::info;

use crate::api::dtos::requests::{LoginRequest, RegisterRequest, SetupRequest};
use crate::api::dtos::responses::LoginHistoryResponse;
use crate::api::extractors::{auth::AuthAdmin, client_ip::ClientIp};
use crate::domain::models::admin::{Admin, ROLE_ADMIN, ROLE_SUPERADMIN};
use crate::domain::models::auth::AuthResponse;
use crate::error::AppError;
use crate::state::AppState;

pub async fn login(
    State(state): State<Arc<AppState>>,
    ClientIp(ip): ClientIp,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Unknown email and wrong password produce the same response so the
    // endpoint cannot be used to enumerate accounts.
    let mut admin = state.admin_repo.find_by_email(&payload.email).await?
        .ok_or(AppError::InvalidCredentials)?;

    let parsed_hash = PasswordHash::new(&admin.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::InvalidCredentials)?;

    admin.record_login(&ip, Utc::now());
    let admin = state.admin_repo.update(&admin).await?;

    let token = state.token_service.issue(&admin.id)?;

    info!("Admin logged in: {} from {}", admin.id, ip);

    Ok(Json(AuthResponse {
        id: admin.id,
        name: admin.name,
        email: admin.email,
        role: admin.role,
        token,
    }))
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    AuthAdmin(actor): AuthAdmin,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.admin_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::AlreadyExists);
    }

    let role = payload.role.unwrap_or_else(|| ROLE_ADMIN.to_string());
    match role.as_str() {
        ROLE_ADMIN | ROLE_SUPERADMIN => {}
        _ => return Err(AppError::Validation("Invalid role".into())),
    }

    let admin = Admin::new(
        payload.name,
        payload.email,
        hash_password(&payload.password)?,
        role,
    );
    let created = state.admin_repo.create(&admin).await?;

    let token = state.token_service.issue(&created.id)?;

    info!("Admin {} registered by {}", created.id, actor.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: created.id,
            name: created.name,
            email: created.email,
            role: created.role,
            token,
        }),
    ))
}

/// Public bootstrap route. Works exactly once: any existing admin disables it.
pub async fn setup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SetupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if state.admin_repo.count().await? > 0 {
        return Err(AppError::SetupAlreadyComplete);
    }

    let admin = Admin::new(
        payload.name,
        payload.email,
        hash_password(&payload.password)?,
        ROLE_SUPERADMIN.to_string(),
    );
    let created = state.admin_repo.create(&admin).await?;

    let token = state.token_service.issue(&created.id)?;

    info!("First admin created via setup: {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: created.id,
            name: created.name,
            email: created.email,
            role: created.role,
            token,
        }),
    ))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthAdmin(actor): AuthAdmin,
) -> Result<impl IntoResponse, AppError> {
    // Re-resolve the id: the record may have vanished between token issuance
    // and use. The password hash is skipped during serialization.
    let admin = state.admin_repo.find_by_id(&actor.id).await?
        .ok_or(AppError::NotFound("Admin not found".into()))?;

    Ok(Json(admin))
}

pub async fn get_login_history(
    State(state): State<Arc<AppState>>,
    AuthAdmin(actor): AuthAdmin,
) -> Result<impl IntoResponse, AppError> {
    // Only ever the caller's own history.
    let admin = state.admin_repo.find_by_id(&actor.id).await?
        .ok_or(AppError::NotFound("Admin not found".into()))?;

    Ok(Json(LoginHistoryResponse {
        last_login: admin.last_login,
        last_login_ip: admin.last_login_ip,
        login_history: admin.login_history.0,
    }))
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}
