use thiserror::Error;

/// A controller attribute or query value cannot survive flat query-string
/// encoding. Raised for composite (array/object) and null values; never for
/// scalars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unserializable value under key '{key}': controller attributes and query parameters must be scalar")]
pub struct UnserializableAttributeError {
    pub key: String,
}

impl UnserializableAttributeError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
