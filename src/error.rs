use std::fmt;

/// Result type for Hestia operations
pub type Result<T> = std::result::Result<T, HestiaError>;

/// Main error type for the Hestia library
#[derive(Debug, Clone, PartialEq)]
pub enum HestiaError {
    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Probability masses that do not form a distribution
    InvalidDistribution(String),

    /// State missing from the action-value table
    UnknownState(String),

    /// Text that does not parse as a state or action
    ParseError(String),

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for HestiaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HestiaError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            HestiaError::InvalidDistribution(msg) => write!(f, "Invalid distribution: {}", msg),
            HestiaError::UnknownState(state) => {
                write!(f, "State not present in action-value table: {}", state)
            }
            HestiaError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            HestiaError::IoError(msg) => write!(f, "IO error: {}", msg),
            HestiaError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for HestiaError {}

// Conversion from std::io::Error
impl From<std::io::Error> for HestiaError {
    fn from(err: std::io::Error) -> Self {
        HestiaError::IoError(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HestiaError {
    fn from(err: serde_json::Error) -> Self {
        HestiaError::SerializationError(err.to_string())
    }
}

// Conversion from bincode::Error
impl From<bincode::Error> for HestiaError {
    fn from(err: bincode::Error) -> Self {
        HestiaError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl HestiaError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        HestiaError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_state<T: fmt::Display>(state: &T) -> Self {
        HestiaError::UnknownState(state.to_string())
    }
}
