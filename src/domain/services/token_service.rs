use crate::config::Config;
use crate::domain::models::auth::Claims;
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Issues and verifies the HS256 bearer tokens that back admin sessions.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    pub fn issue(&self, admin_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: admin_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }

    /// Malformed, expired and badly signed tokens all surface as the same
    /// `Unauthorized` so callers learn nothing about the failure cause.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}
