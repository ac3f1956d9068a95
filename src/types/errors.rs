use std::fmt;

// === TabStateError ===

/// Errors raised by the tab and window state model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabStateError {
    /// A checked accessor was used on the arm of a tab or window that is not present.
    PreconditionViolation(String),
    /// The caller supplied input the model refuses to build from.
    InputRejection(String),
}

impl fmt::Display for TabStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabStateError::PreconditionViolation(msg) => {
                write!(f, "Precondition violation: {}", msg)
            }
            TabStateError::InputRejection(msg) => write!(f, "Input rejected: {}", msg),
        }
    }
}

impl std::error::Error for TabStateError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
