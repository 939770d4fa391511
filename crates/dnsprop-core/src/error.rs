use std::fmt;
use thiserror::Error;

/// Result type alias for propagation checks
pub type Result<T> = std::result::Result<T, CheckError>;

/// Fallback message for errors that arrive without one
const UNKNOWN_MESSAGE: &str = "An unknown error occurred while checking DNS";

/// Category of a [`CheckError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Record type outside the supported set (single check)
    InvalidType,

    /// Domain missing or empty
    InvalidDomain,

    /// Expected value missing or empty
    InvalidValue,

    /// Group input is not a non-empty mapping
    InvalidParam,

    /// Group key is not a supported record type
    InvalidRecordType,

    /// Group entry is not an object
    InvalidEntryStructure,

    /// Resolver answered with a non-success HTTP status
    HttpStatus,

    /// Resolver reported a non-zero DNS status
    ResponseErr,

    /// Anything without a more specific category
    Unknown,
}

impl ErrorKind {
    /// Wire code for this kind, e.g. `INVALID_TYPE`
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidType => "INVALID_TYPE",
            Self::InvalidDomain => "INVALID_DOMAIN",
            Self::InvalidValue => "INVALID_VALUE",
            Self::InvalidParam => "INVALID_PARAM",
            Self::InvalidRecordType => "INVALID_RECORD_TYPE",
            Self::InvalidEntryStructure => "INVALID_ENTRY_STRUCTURE",
            Self::HttpStatus => "HTTP_STATUS",
            Self::ResponseErr => "RESPONSE_ERR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Returns true for input validation failures
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidType
                | Self::InvalidDomain
                | Self::InvalidValue
                | Self::InvalidParam
                | Self::InvalidRecordType
                | Self::InvalidEntryStructure
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned by propagation checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct CheckError {
    kind: ErrorKind,
    message: String,
    status: Option<u16>,
}

impl CheckError {
    /// Create an error of the given kind
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            UNKNOWN_MESSAGE.to_string()
        } else {
            message
        };

        Self {
            kind,
            message,
            status: None,
        }
    }

    /// Non-success HTTP status from the resolver endpoint
    #[must_use]
    pub fn http_status(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::new(ErrorKind::HttpStatus, format!("HTTP error {status}"))
        }
    }

    /// Resolver answered with a non-zero `Status`
    #[must_use]
    pub fn response_err() -> Self {
        Self::new(ErrorKind::ResponseErr, "Invalid response from DNS server")
    }

    /// Failure that carries no recognizable code
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    /// Error category
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Wire code, e.g. `HTTP_STATUS`
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if the error came from input validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        self.kind.is_validation()
    }

    /// Returns true if the failed query may be attempted again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !self.kind.is_validation()
    }

    /// Returns the HTTP status code if this is an `HTTP_STATUS` error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::unknown(err.to_string())
    }
}
