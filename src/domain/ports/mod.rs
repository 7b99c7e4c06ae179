use crate::domain::models::{admin::Admin, event::Event};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Admin>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError>;
    async fn update(&self, admin: &Admin) -> Result<Admin, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list_active(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
