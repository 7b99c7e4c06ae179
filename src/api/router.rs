use axum::{
    body::Body,
    extract::Request,
    routing::get,
    routing::post,
    Router,
};
use std::sync::Arc;
use std::time::Duration;

use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{admin, event, health};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Admin auth & audit
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/register", post(admin::register))
        .route("/api/admin/setup", post(admin::setup))
        .route("/api/admin/profile", get(admin::get_profile))
        .route("/api/admin/login-history", get(admin::get_login_history))

        // Events: public reads, admin-gated writes
        .route("/api/events", get(event::list_events).post(event::create_event))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        admin_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
