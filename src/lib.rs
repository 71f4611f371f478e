pub mod classify;
pub mod compose;
pub mod config;
pub mod error;
pub mod gemini;
pub mod images;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod session;
pub mod validate;

pub use classify::{classify_invocation, ErrorKind, MISSING_CREDENTIAL_MARKER};
pub use compose::compose;
pub use config::GeminiConfig;
pub use error::{Result, VeoPromptError};
pub use gemini::{GeminiClient, PromptClient, PromptModel};
pub use images::encode_reference_images;
pub use models::{
    GenerationRequest, ModelInstruction, NarrativeAnalysis, PromptSet, ReferenceImage, Style,
    StyleKind, MAX_REFERENCE_IMAGES, SUPPORTED_COUNTS,
};
pub use normalize::normalize;
pub use session::{CredentialBroker, EnvCredentialBroker, PromptSession};
pub use validate::validate;
