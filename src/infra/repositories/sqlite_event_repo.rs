use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, title, description, image, event_type, capacity,
                registration_fees, qr_code, upi_id, date, location,
                about_content, details_content, rules, requirements, prizes,
                coordinators, start_time, end_time, is_team_event, team_size,
                is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.image)
            .bind(&event.event_type)
            .bind(event.capacity)
            .bind(&event.registration_fees)
            .bind(&event.qr_code)
            .bind(&event.upi_id)
            .bind(event.date)
            .bind(&event.location)
            .bind(&event.about_content)
            .bind(&event.details_content)
            .bind(&event.rules)
            .bind(&event.requirements)
            .bind(&event.prizes)
            .bind(&event.coordinators)
            .bind(&event.start_time)
            .bind(&event.end_time)
            .bind(event.is_team_event)
            .bind(&event.team_size)
            .bind(event.is_active)
            .bind(event.created_at)
            .bind(event.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE is_active = TRUE ORDER BY created_at ASC",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET
                title = ?, description = ?, image = ?, event_type = ?, capacity = ?,
                registration_fees = ?, qr_code = ?, upi_id = ?, date = ?, location = ?,
                about_content = ?, details_content = ?, rules = ?, requirements = ?,
                prizes = ?, coordinators = ?, start_time = ?, end_time = ?,
                is_team_event = ?, team_size = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            RETURNING *"#,
        )
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.image)
            .bind(&event.event_type)
            .bind(event.capacity)
            .bind(&event.registration_fees)
            .bind(&event.qr_code)
            .bind(&event.upi_id)
            .bind(event.date)
            .bind(&event.location)
            .bind(&event.about_content)
            .bind(&event.details_content)
            .bind(&event.rules)
            .bind(&event.requirements)
            .bind(&event.prizes)
            .bind(&event.coordinators)
            .bind(&event.start_time)
            .bind(&event.end_time)
            .bind(event.is_team_event)
            .bind(&event.team_size)
            .bind(event.is_active)
            .bind(event.updated_at)
            .bind(&event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("SQLite event deletion failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}
