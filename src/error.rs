//! Error types for the GPCORE provider.

use thiserror::Error;
use tonic::Code;

use crate::schema::Diagnostic;

/// Errors that can occur while serving a lifecycle operation.
///
/// None of these are process-fatal. The host receives them as error
/// diagnostics, see [`ProviderError::to_diagnostic`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A validation error occurred.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A configuration error occurred.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A lifecycle operation ran before the provider handed out a client.
    #[error("Provider not configured: {0}")]
    Unconfigured(String),

    /// The requested resource type is unknown.
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The remote API rejected or failed a call.
    #[error("Client error: {0}")]
    Client(String),

    /// Resource already exists (create conflict).
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Permission denied (authentication/authorization failure).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Quota or rate limit exceeded.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Service temporarily unavailable.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Operation timed out.
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// Operation failed due to current state (precondition not met).
    #[error("Failed precondition: {0}")]
    FailedPrecondition(String),

    /// Operation not implemented.
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    /// Invalid request from client.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The import identifier does not have the expected shape.
    #[error("Invalid import ID: {0}")]
    InvalidImportId(String),

    /// Stored state lacks the identity needed for the operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ProviderError {
    /// Classify a failed remote call.
    ///
    /// `action` completes the sentence "Unable to ..." and becomes part of
    /// the message, e.g. `ProviderError::remote("create node", status)`.
    pub fn remote(action: &str, status: tonic::Status) -> Self {
        let message = format!("Unable to {}, got error: {}", action, status.message());
        match status.code() {
            Code::NotFound => Self::NotFound(message),
            Code::AlreadyExists => Self::AlreadyExists(message),
            Code::PermissionDenied | Code::Unauthenticated => Self::PermissionDenied(message),
            Code::ResourceExhausted => Self::ResourceExhausted(message),
            Code::Unavailable => Self::Unavailable(message),
            Code::DeadlineExceeded => Self::DeadlineExceeded(message),
            Code::FailedPrecondition => Self::FailedPrecondition(message),
            Code::Unimplemented => Self::Unimplemented(message),
            Code::InvalidArgument => Self::InvalidRequest(message),
            _ => Self::Client(message),
        }
    }

    /// Whether this error reports a missing remote object.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Get the error message as a string.
    ///
    /// Returns a reference to the error message for any variant.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg) => msg,
            Self::Validation(msg) => msg,
            Self::Configuration(msg) => msg,
            Self::Unconfigured(msg) => msg,
            Self::UnknownResource(msg) => msg,
            Self::Serialization(_err) => "serialization error (see Debug output)",
            Self::Client(msg) => msg,
            Self::AlreadyExists(msg) => msg,
            Self::PermissionDenied(msg) => msg,
            Self::ResourceExhausted(msg) => msg,
            Self::Unavailable(msg) => msg,
            Self::DeadlineExceeded(msg) => msg,
            Self::FailedPrecondition(msg) => msg,
            Self::Unimplemented(msg) => msg,
            Self::InvalidRequest(msg) => msg,
            Self::InvalidImportId(msg) => msg,
            Self::InvalidState(msg) => msg,
        }
    }

    /// The short diagnostic summary the host renders for this error.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::NotFound(_)
            | Self::Client(_)
            | Self::AlreadyExists(_)
            | Self::PermissionDenied(_)
            | Self::ResourceExhausted(_)
            | Self::Unavailable(_)
            | Self::FailedPrecondition(_)
            | Self::Unimplemented(_) => "Client Error",
            Self::DeadlineExceeded(_) => "Timeout Error",
            Self::Validation(_) => "Invalid Configuration",
            Self::Configuration(_) => "Provider Configuration Error",
            Self::Unconfigured(_) => "Unconfigured Provider",
            Self::UnknownResource(_) => "Unknown Resource Type",
            Self::Serialization(_) => "State Decoding Error",
            Self::InvalidRequest(_) => "Invalid Request",
            Self::InvalidImportId(_) => "Invalid Import ID",
            Self::InvalidState(_) => "Invalid State",
        }
    }

    /// Convert this error into an error diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let detail = match self {
            Self::Serialization(err) => err.to_string(),
            other => other.message().to_string(),
        };
        Diagnostic::error(self.summary()).with_detail(detail)
    }
}

impl From<ProviderError> for Diagnostic {
    fn from(err: ProviderError) -> Self {
        err.to_diagnostic()
    }
}
