use crate::domain::models::event::{Coordinator, Prizes, RegistrationFees, TeamSize};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct SetupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub image: String,
    pub event_type: String,
    pub capacity: i32,
    #[serde(default)]
    pub registration_fees: RegistrationFees,
    #[serde(default)]
    pub qr_code: String,
    #[serde(default)]
    pub upi_id: String,
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub about_content: String,
    #[serde(default)]
    pub details_content: String,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub prizes: Prizes,
    #[serde(default)]
    pub coordinators: Vec<Coordinator>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub is_team_event: bool,
    #[serde(default)]
    pub team_size: TeamSize,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Partial update: only supplied keys are applied, everything else is left
/// untouched.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub event_type: Option<String>,
    pub capacity: Option<i32>,
    pub registration_fees: Option<RegistrationFees>,
    pub qr_code: Option<String>,
    pub upi_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub about_content: Option<String>,
    pub details_content: Option<String>,
    pub rules: Option<Vec<String>>,
    pub requirements: Option<Vec<String>>,
    pub prizes: Option<Prizes>,
    pub coordinators: Option<Vec<Coordinator>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_team_event: Option<bool>,
    pub team_size: Option<TeamSize>,
    pub is_active: Option<bool>,
}
