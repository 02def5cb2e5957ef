//! Request DTOs for the dedupe server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::MAX_KEY_LENGTH;

/// Request body for the CHECK operation (POST /check)
///
/// # Fields
/// - `key`: The identifier to dedupe, null or missing is accepted
/// - `now`: Optional timestamp in milliseconds (server clock if omitted)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckRequest {
    /// The dedupe key
    #[serde(default)]
    pub key: Option<String>,
    /// Caller-supplied timestamp in milliseconds
    #[serde(default)]
    pub now: Option<i64>,
}

impl CheckRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid. Missing
    /// and empty keys are valid here; the cache treats them as a miss.
    pub fn validate(&self) -> Option<String> {
        match &self.key {
            Some(key) if key.len() > MAX_KEY_LENGTH => Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )),
            _ => None,
        }
    }
}
