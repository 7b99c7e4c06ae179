use crate::domain::models::admin::LoginRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginHistoryResponse {
    pub last_login: Option<DateTime<Utc>>,
    pub last_login_ip: Option<String>,
    pub login_history: Vec<LoginRecord>,
}

#[derive(Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}
