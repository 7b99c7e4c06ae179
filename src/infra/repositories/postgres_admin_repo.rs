use crate::domain::{models::admin::Admin, ports::AdminRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresAdminRepo {
    pool: PgPool,
}

impl PostgresAdminRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepo {
    async fn create(&self, admin: &Admin) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            r#"INSERT INTO admins (
                id, name, email, password_hash, role,
                last_login, last_login_ip, login_history, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *"#,
        )
            .bind(&admin.id)
            .bind(&admin.name)
            .bind(&admin.email)
            .bind(&admin.password_hash)
            .bind(&admin.role)
            .bind(admin.last_login)
            .bind(&admin.last_login_ip)
            .bind(&admin.login_history)
            .bind(admin.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Admin>, AppError> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, admin: &Admin) -> Result<Admin, AppError> {
        sqlx::query_as::<_, Admin>(
            r#"UPDATE admins SET
                name = $1, email = $2, password_hash = $3, role = $4,
                last_login = $5, last_login_ip = $6, login_history = $7
            WHERE id = $8
            RETURNING *"#,
        )
            .bind(&admin.name)
            .bind(&admin.email)
            .bind(&admin.password_hash)
            .bind(&admin.role)
            .bind(admin.last_login)
            .bind(&admin.last_login_ip)
            .bind(&admin.login_history)
            .bind(&admin.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
