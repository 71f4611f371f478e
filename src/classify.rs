use crate::error::VeoPromptError;

/// Substring Gemini returns when a call is rejected because the selected API
/// key does not resolve to a valid, billed project.
pub const MISSING_CREDENTIAL_MARKER: &str = "Requested entity was not found";

/// Coarse error category surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Credential,
    Schema,
    Transient,
}

impl VeoPromptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VeoPromptError::ValidationError(_) => ErrorKind::Validation,
            VeoPromptError::CredentialError(_) => ErrorKind::Credential,
            VeoPromptError::SchemaError(_) => ErrorKind::Schema,
            VeoPromptError::TransientError(_)
            | VeoPromptError::ConfigError(_)
            | VeoPromptError::SerializationError(_)
            | VeoPromptError::IoError(_) => ErrorKind::Transient,
        }
    }
}

/// Classifies an opaque invocation failure message. The only structurally
/// recognized signal is the missing-credential marker; everything else is
/// treated as transient (network, quota, server-side).
pub fn classify_invocation(message: impl Into<String>) -> VeoPromptError {
    let message = message.into();
    if message.contains(MISSING_CREDENTIAL_MARKER) {
        VeoPromptError::CredentialError(message)
    } else {
        VeoPromptError::TransientError(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_maps_to_credential() {
        let err = classify_invocation("Requested entity was not found.");
        assert_eq!(err.kind(), ErrorKind::Credential);
    }

    #[test]
    fn anything_else_maps_to_transient() {
        let err = classify_invocation("503 service unavailable");
        assert_eq!(err.kind(), ErrorKind::Transient);

        let err = classify_invocation("quota exceeded for quota metric");
        assert_eq!(err.kind(), ErrorKind::Transient);
    }

    #[test]
    fn kind_covers_every_variant() {
        assert_eq!(
            VeoPromptError::ValidationError("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            VeoPromptError::SchemaError("x".into()).kind(),
            ErrorKind::Schema
        );
        assert_eq!(
            VeoPromptError::IoError("x".into()).kind(),
            ErrorKind::Transient
        );
        assert_eq!(
            VeoPromptError::ConfigError("x".into()).kind(),
            ErrorKind::Transient
        );
    }
}
