use crate::{
    classify::ErrorKind,
    compose::compose,
    error::Result,
    gemini::PromptModel,
    models::{PromptSet, ReferenceImage, Style},
    normalize::normalize,
    validate::validate,
};
use async_trait::async_trait;
use std::env;

/// External capability exposing credential-selection status and a selection
/// flow. The core only queries and triggers; the actual picker is elsewhere.
#[async_trait]
pub trait CredentialBroker: Send + Sync {
    async fn has_selected_api_key(&self) -> Result<bool>;
    async fn open_select_key(&self) -> Result<()>;
}

/// Broker backed by the process environment: a key counts as selected when
/// `GEMINI_API_KEY` is set and non-empty.
pub struct EnvCredentialBroker;

#[async_trait]
impl CredentialBroker for EnvCredentialBroker {
    async fn has_selected_api_key(&self) -> Result<bool> {
        Ok(env::var("GEMINI_API_KEY")
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false))
    }

    async fn open_select_key(&self) -> Result<()> {
        log::info!("Set GEMINI_API_KEY in the environment to select a key");
        Ok(())
    }
}

/// One user session of prompt generation. Holds the credential-known flag as
/// explicit state: seeded from the broker, set true optimistically after a
/// selection attempt, cleared when the model rejects the key.
pub struct PromptSession<B> {
    broker: B,
    credential_known: bool,
}

impl<B: CredentialBroker> PromptSession<B> {
    pub async fn start(broker: B) -> Self {
        let credential_known = match broker.has_selected_api_key().await {
            Ok(selected) => selected,
            Err(e) => {
                log::error!("Could not check key selection status: {}", e);
                true
            }
        };
        Self {
            broker,
            credential_known,
        }
    }

    pub fn credential_known(&self) -> bool {
        self.credential_known
    }

    /// Triggers the external selection flow and assumes success once it
    /// returns; there is no confirmation round trip.
    pub async fn select_key(&mut self) -> Result<()> {
        self.broker.open_select_key().await?;
        self.credential_known = true;
        Ok(())
    }

    /// Runs one generation: normalize, compose, a single model round trip,
    /// validate. Nothing is retried; every failure surfaces as one typed
    /// error, and a credential rejection also clears the credential flag.
    pub async fn generate(
        &mut self,
        model: &dyn PromptModel,
        title: &str,
        count: u8,
        style: Style,
        images: Vec<ReferenceImage>,
    ) -> Result<PromptSet> {
        let request = normalize(title, count, style, images)?;
        let instruction = compose(&request);

        let result = model
            .invoke(&instruction, &request.reference_images)
            .await
            .and_then(|payload| validate(payload, request.count));

        match &result {
            Ok(set) => log::info!(
                "Generated {} image prompt(s) and {} video prompt(s) for \"{}\"",
                set.image_prompts.len(),
                set.video_prompts.len(),
                set.analysis.subject
            ),
            Err(e) if e.kind() == ErrorKind::Credential => {
                log::warn!("Model rejected the selected key, re-selection required");
                self.credential_known = false;
            }
            Err(e) => log::error!("Generation failed: {}", e),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VeoPromptError;
    use crate::models::ModelInstruction;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedBroker(bool);

    #[async_trait]
    impl CredentialBroker for FixedBroker {
        async fn has_selected_api_key(&self) -> Result<bool> {
            Ok(self.0)
        }

        async fn open_select_key(&self) -> Result<()> {
            Ok(())
        }
    }

    struct CountingModel {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PromptModel for CountingModel {
        async fn invoke(
            &self,
            _instruction: &ModelInstruction,
            _images: &[ReferenceImage],
        ) -> Result<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(VeoPromptError::TransientError("unreachable in test".into()))
        }
    }

    #[tokio::test]
    async fn flag_is_seeded_from_the_broker() {
        assert!(PromptSession::start(FixedBroker(true)).await.credential_known());
        assert!(!PromptSession::start(FixedBroker(false)).await.credential_known());
    }

    #[tokio::test]
    async fn select_key_is_optimistic() {
        let mut session = PromptSession::start(FixedBroker(false)).await;
        session.select_key().await.unwrap();
        assert!(session.credential_known());
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_model() {
        let model = CountingModel {
            calls: AtomicUsize::new(0),
        };
        let mut session = PromptSession::start(FixedBroker(true)).await;
        let err = session
            .generate(&model, "  ", 3, Style::Auto, vec![])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }
}
