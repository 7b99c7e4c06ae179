use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use chrono::Utc;
use sqlx::types::Json as SqlJson;
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::api::dtos::responses::DeleteConfirmation;
use crate::api::extractors::auth::AuthAdmin;
use crate::domain::models::event::{Event, EVENT_TYPES};
use crate::domain::services::url_policy::validate_qr_url;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list_active().await?;
    info!("Retrieved {} events", events.len());
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthAdmin(actor): AuthAdmin,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !EVENT_TYPES.contains(&payload.event_type.as_str()) {
        return Err(AppError::Validation("Invalid eventType".into()));
    }

    if !payload.qr_code.trim().is_empty() {
        validate_qr_url(&payload.qr_code)?;
    }

    let now = Utc::now();
    let event = Event {
        id: Uuid::new_v4().to_string(),
        title: payload.title,
        description: payload.description,
        image: payload.image,
        event_type: payload.event_type,
        capacity: payload.capacity,
        registration_fees: SqlJson(payload.registration_fees),
        qr_code: payload.qr_code,
        upi_id: payload.upi_id,
        date: payload.date,
        location: payload.location,
        about_content: payload.about_content,
        details_content: payload.details_content,
        rules: SqlJson(payload.rules),
        requirements: SqlJson(payload.requirements),
        prizes: SqlJson(payload.prizes),
        coordinators: SqlJson(payload.coordinators),
        start_time: payload.start_time,
        end_time: payload.end_time,
        is_team_event: payload.is_team_event,
        team_size: SqlJson(payload.team_size),
        is_active: payload.is_active,
        created_at: now,
        updated_at: now,
    };

    let created = state.event_repo.create(&event).await?;

    info!("Event {} created by admin: {} ({})", created.id, actor.id, actor.name);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthAdmin(actor): AuthAdmin,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(new_qr) = &payload.qr_code {
        // Once a QR code is set it can only be repeated verbatim, never
        // replaced, whatever the new value is.
        if !event.qr_code.trim().is_empty() && new_qr != &event.qr_code {
            return Err(AppError::QrCodeImmutable);
        }

        // First-time set goes through the trust check.
        if event.qr_code.trim().is_empty() && !new_qr.trim().is_empty() {
            validate_qr_url(new_qr)?;
            info!(
                "QR code set for the first time on event {} by admin {} ({})",
                event.id, actor.id, actor.name
            );
        }
    }

    if let Some(val) = &payload.event_type {
        if !EVENT_TYPES.contains(&val.as_str()) {
            return Err(AppError::Validation("Invalid eventType".into()));
        }
    }

    if let Some(val) = payload.title { event.title = val; }
    if let Some(val) = payload.description { event.description = val; }
    if let Some(val) = payload.image { event.image = val; }
    if let Some(val) = payload.event_type { event.event_type = val; }
    if let Some(val) = payload.capacity { event.capacity = val; }
    if let Some(val) = payload.registration_fees { event.registration_fees = SqlJson(val); }
    if let Some(val) = payload.qr_code { event.qr_code = val; }
    if let Some(val) = payload.upi_id { event.upi_id = val; }
    if let Some(val) = payload.date { event.date = Some(val); }
    if let Some(val) = payload.location { event.location = val; }
    if let Some(val) = payload.about_content { event.about_content = val; }
    if let Some(val) = payload.details_content { event.details_content = val; }
    if let Some(val) = payload.rules { event.rules = SqlJson(val); }
    if let Some(val) = payload.requirements { event.requirements = SqlJson(val); }
    if let Some(val) = payload.prizes { event.prizes = SqlJson(val); }
    if let Some(val) = payload.coordinators { event.coordinators = SqlJson(val); }
    if let Some(val) = payload.start_time { event.start_time = val; }
    if let Some(val) = payload.end_time { event.end_time = val; }
    if let Some(val) = payload.is_team_event { event.is_team_event = val; }
    if let Some(val) = payload.team_size { event.team_size = SqlJson(val); }
    if let Some(val) = payload.is_active { event.is_active = val; }
    event.updated_at = Utc::now();

    let updated = state.event_repo.update(&event).await?;
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthAdmin(actor): AuthAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(&id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    state.event_repo.delete(&event.id).await?;

    info!("Event {} deleted by admin {} ({})", event.id, actor.id, actor.name);

    Ok(Json(DeleteConfirmation {
        message: "Event removed".to_string(),
    }))
}
