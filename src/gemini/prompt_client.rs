use crate::{
    classify::classify_invocation,
    config::{GeminiConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL},
    error::{Result, VeoPromptError},
    models::{ModelInstruction, ReferenceImage},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The single opaque request/response boundary to the generative model. One
/// call per generation request; retries, rate limiting and deadlines are the
/// collaborator's business, not the orchestrator's.
#[async_trait]
pub trait PromptModel: Send + Sync {
    async fn invoke(
        &self,
        instruction: &ModelInstruction,
        images: &[ReferenceImage],
    ) -> Result<serde_json::Value>;
}

#[derive(Clone)]
pub struct PromptClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    temperature: f32,
}

// Gemini generateContent wire structures

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction")]
    system_instruction: GeminiSystemInstruction,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Debug, Serialize)]
struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

impl PromptClient {
    pub fn new(http: reqwest::Client, api_key: String, config: GeminiConfig) -> Self {
        Self {
            http,
            api_key,
            model: config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: config
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            temperature: config.temperature.unwrap_or(0.8),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    fn build_request(
        &self,
        instruction: &ModelInstruction,
        images: &[ReferenceImage],
    ) -> GeminiRequest {
        let mut parts = vec![GeminiPart::Text {
            text: instruction.user_text.clone(),
        }];
        // Reference images ride along as grounding context, after the text.
        for image in images {
            parts.push(GeminiPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            });
        }

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts,
            }],
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiPart::Text {
                    text: instruction.system_text.clone(),
                }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: instruction.response_schema.clone(),
            },
        }
    }
}

#[async_trait]
impl PromptModel for PromptClient {
    async fn invoke(
        &self,
        instruction: &ModelInstruction,
        images: &[ReferenceImage],
    ) -> Result<serde_json::Value> {
        let body = self.build_request(instruction, images);

        log::info!(
            "Invoking {} for a {}-shot prompt package ({} reference image(s))",
            self.model,
            instruction.count,
            images.len()
        );
        log::debug!("System instruction: {}", instruction.system_text);

        let response = self
            .http
            .post(self.build_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_invocation(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| classify_invocation(e.to_string()))?;

        if !status.is_success() {
            // Surface the API's own message when the body carries one.
            let message = serde_json::from_str::<GeminiErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, text));
            log::error!("Gemini call failed: {}", message);
            return Err(classify_invocation(message));
        }

        let parsed: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| VeoPromptError::SchemaError(format!("unreadable response: {}", e)))?;

        if let Some(error) = parsed.error {
            log::error!("Gemini call failed: {}", error.message);
            return Err(classify_invocation(error.message));
        }

        let payload_text = parsed
            .candidates
            .and_then(|mut c| if c.is_empty() { None } else { Some(c.remove(0)) })
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                VeoPromptError::TransientError("model returned no candidates".into())
            })?;

        log::debug!("Structured payload: {}", payload_text);

        serde_json::from_str(&payload_text).map_err(|e| {
            VeoPromptError::SchemaError(format!("candidate text is not valid JSON: {}", e))
        })
    }
}
