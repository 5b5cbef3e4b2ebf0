use uuid::Uuid;

use crate::application::error::ApplicationError;

/// Validates a bearer credential and resolves it to the principal it was
/// issued to.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<Uuid, ApplicationError>;
}
