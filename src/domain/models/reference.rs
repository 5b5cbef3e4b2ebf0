use thiserror::Error;

/// Location of an uploaded object in the remote store. Persisted on the
/// video record as a single `"<bucket>,<key>"` string and expanded into a
/// fresh presigned URL on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReference {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Error)]
#[error("invalid stored video reference, expected \"<bucket>,<key>\"")]
pub struct ReferenceFormatError;

impl StoredReference {
    pub fn new(bucket: String, key: String) -> Self {
        Self { bucket, key }
    }

    pub fn encode(&self) -> String {
        format!("{},{}", self.bucket, self.key)
    }

    pub fn decode(raw: &str) -> Result<Self, ReferenceFormatError> {
        let (bucket, key) = raw.split_once(',').ok_or(ReferenceFormatError)?;
        if bucket.is_empty() || key.is_empty() {
            return Err(ReferenceFormatError);
        }
        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}
