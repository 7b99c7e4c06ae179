use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
};
use std::sync::Arc;
use tracing::Span;

use crate::domain::models::admin::{Admin, ROLE_ADMIN, ROLE_SUPERADMIN};
use crate::state::AppState;

/// Admission gate for protected routes: the bearer token must verify and
/// still resolve to a stored admin with an admin-capable role.
pub struct AuthAdmin(pub Admin);

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(header::AUTHORIZATION)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_str()
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let token = header_value.strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let claims = app_state.token_service.verify(token)
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let admin = app_state.admin_repo.find_by_id(&claims.sub).await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if admin.role != ROLE_ADMIN && admin.role != ROLE_SUPERADMIN {
            return Err(StatusCode::FORBIDDEN);
        }

        Span::current().record("admin_id", admin.id.as_str());

        Ok(AuthAdmin(admin))
    }
}
