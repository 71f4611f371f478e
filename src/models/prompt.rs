use serde::{Deserialize, Serialize};

/// Narrative summary the model returns alongside the prompts. Every field is
/// required to be non-empty by the validator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrativeAnalysis {
    pub subject: String,
    #[serde(rename = "actionType")]
    pub action_type: String,
    pub progression: String,
}

/// The structured result of one generation: `count` image prompts, `count - 1`
/// video prompts bridging adjacent images, and the narrative analysis.
/// Ordering is significant; sequence position encodes narrative time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSet {
    #[serde(rename = "imagePrompts")]
    pub image_prompts: Vec<String>,
    #[serde(rename = "videoPrompts")]
    pub video_prompts: Vec<String>,
    pub analysis: NarrativeAnalysis,
}

/// The composed model request: instruction text plus the structured-output
/// schema constraining the reply to the `PromptSet` shape.
#[derive(Debug, Clone)]
pub struct ModelInstruction {
    pub system_text: String,
    pub user_text: String,
    pub response_schema: serde_json::Value,
    pub count: u8,
}
