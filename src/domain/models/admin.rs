use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPERADMIN: &str = "superadmin";

/// Audit trail is capped at the most recent entries; the oldest are dropped
/// after each append.
pub const LOGIN_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginRecord {
    pub ip: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub last_login_ip: Option<String>,
    pub login_history: Json<Vec<LoginRecord>>,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    pub fn new(name: String, email: String, password_hash: String, role: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            role,
            last_login: None,
            last_login_ip: None,
            login_history: Json(Vec::new()),
            created_at: Utc::now(),
        }
    }

    /// Updates the audit fields for a successful login and trims the history
    /// to the most recent [`LOGIN_HISTORY_LIMIT`] entries.
    pub fn record_login(&mut self, ip: &str, at: DateTime<Utc>) {
        self.last_login = Some(at);
        self.last_login_ip = Some(ip.to_string());
        self.login_history.0.push(LoginRecord {
            ip: ip.to_string(),
            timestamp: at,
        });

        if self.login_history.0.len() > LOGIN_HISTORY_LIMIT {
            let excess = self.login_history.0.len() - LOGIN_HISTORY_LIMIT;
            self.login_history.0.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_admin() -> Admin {
        Admin::new(
            "Tester".to_string(),
            "tester@example.com".to_string(),
            "hash".to_string(),
            ROLE_ADMIN.to_string(),
        )
    }

    #[test]
    fn record_login_updates_audit_fields() {
        let mut admin = test_admin();
        let at = Utc::now();
        admin.record_login("10.0.0.1", at);

        assert_eq!(admin.last_login, Some(at));
        assert_eq!(admin.last_login_ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(admin.login_history.0.len(), 1);
        assert_eq!(admin.login_history.0[0].ip, "10.0.0.1");
    }

    #[test]
    fn login_history_keeps_most_recent_fifty() {
        let mut admin = test_admin();
        for i in 0..55 {
            admin.record_login(&format!("10.0.0.{}", i), Utc::now());
        }

        assert_eq!(admin.login_history.0.len(), LOGIN_HISTORY_LIMIT);
        // Oldest entries dropped first: 0..5 are gone, 54 is the newest.
        assert_eq!(admin.login_history.0[0].ip, "10.0.0.5");
        assert_eq!(admin.login_history.0[49].ip, "10.0.0.54");
        assert_eq!(admin.last_login_ip.as_deref(), Some("10.0.0.54"));
    }

    #[test]
    fn login_history_shorter_than_limit_is_untouched() {
        let mut admin = test_admin();
        for _ in 0..7 {
            admin.record_login("10.0.0.1", Utc::now());
        }
        assert_eq!(admin.login_history.0.len(), 7);
    }
}
