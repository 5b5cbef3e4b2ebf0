use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::application::{error::ApplicationError, services::TokenValidator};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: u64,
}

/// Validates HS256 bearer tokens whose subject is the principal's UUID.
pub struct JwtTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenValidator {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenValidator for JwtTokenValidator {
    fn validate(&self, token: &str) -> Result<Uuid, ApplicationError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            warn!("JWT validation failed: {}", e);
            ApplicationError::Unauthorized
        })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| {
            warn!("JWT subject is not a valid UUID");
            ApplicationError::Unauthorized
        })
    }
}
