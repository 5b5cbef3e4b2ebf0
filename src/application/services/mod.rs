mod media_processing;
mod object_storage;
mod token_validator;

pub use media_processing::{MediaProbe, Transcoder};
pub use object_storage::ObjectStorage;
pub use token_validator::TokenValidator;
