//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Rolodex
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum RolodexError {
    #[error("Contact store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Rolodex operations
pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RolodexError::StoreUnavailable("access denied".to_string());
        assert_eq!(err.to_string(), "Contact store unavailable: access denied");

        let err = RolodexError::NotSupported("group listing".to_string());
        assert_eq!(err.to_string(), "Not supported: group listing");
    }

    #[test]
    fn test_error_serialization_tagged() {
        let err = RolodexError::Platform("no contact store on this platform".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "Platform");
        assert_eq!(json["message"], "no contact store on this platform");
    }
}
