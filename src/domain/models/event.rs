use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

pub const EVENT_TYPES: &[&str] = &[
    "workshop",
    "competition",
    "hackathon",
    "talk",
    "panel",
    "technical",
    "nontechnical",
];

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RegistrationFees {
    pub solo: f64,
    pub team: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Prizes {
    pub first: String,
    pub second: String,
    pub third: String,
    pub other: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Coordinator {
    pub name: String,
    pub contact: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TeamSize {
    pub min: i32,
    pub max: i32,
}

impl Default for TeamSize {
    fn default() -> Self {
        Self { min: 1, max: 1 }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub event_type: String,
    pub capacity: i32,
    pub registration_fees: Json<RegistrationFees>,
    pub qr_code: String,
    pub upi_id: String,
    pub date: Option<DateTime<Utc>>,
    pub location: String,
    pub about_content: String,
    pub details_content: String,
    pub rules: Json<Vec<String>>,
    pub requirements: Json<Vec<String>>,
    pub prizes: Json<Prizes>,
    pub coordinators: Json<Vec<Coordinator>>,
    pub start_time: String,
    pub end_time: String,
    pub is_team_event: bool,
    pub team_size: Json<TeamSize>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
