use std::fmt;

#[derive(Debug)]
pub enum VeoPromptError {
    ValidationError(String),
    CredentialError(String),
    SchemaError(String),
    TransientError(String),
    ConfigError(String),
    SerializationError(String),
    IoError(String),
}

impl fmt::Display for VeoPromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VeoPromptError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            VeoPromptError::CredentialError(msg) => write!(f, "Credential error: {}", msg),
            VeoPromptError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            VeoPromptError::TransientError(msg) => write!(f, "Transient error: {}", msg),
            VeoPromptError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            VeoPromptError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            VeoPromptError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for VeoPromptError {}

pub type Result<T> = std::result::Result<T, VeoPromptError>;
