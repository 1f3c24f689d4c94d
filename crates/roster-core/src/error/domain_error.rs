//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown roster bucket: {0}")]
    UnknownBucket(String),

    #[error("Unknown score key: {0}")]
    UnknownScoreKey(String),

    #[error("Invalid member name: {0}")]
    InvalidMemberName(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Snapshot provider error: {0}")]
    ProviderError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UnknownClass(_) => "UNKNOWN_CLASS",
            Self::UnknownBucket(_) => "UNKNOWN_BUCKET",
            Self::UnknownScoreKey(_) => "UNKNOWN_SCORE_KEY",
            Self::InvalidMemberName(_) => "INVALID_MEMBER_NAME",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::ProviderError(_) => "PROVIDER_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UnknownClass(_)
                | Self::UnknownBucket(_)
                | Self::UnknownScoreKey(_)
                | Self::InvalidMemberName(_)
        )
    }

    /// Check if this error originates outside the engine (storage or provider)
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::StorageError(_) | Self::ProviderError(_))
    }
}
