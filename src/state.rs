use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{AdminRepository, EventRepository};
use crate::domain::services::token_service::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub admin_repo: Arc<dyn AdminRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub token_service: Arc<TokenService>,
}
