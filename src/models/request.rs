use crate::error::{Result, VeoPromptError};
use serde::{Deserialize, Serialize};

/// Shot counts the generator accepts. Values outside this set are rejected,
/// never clamped.
pub const SUPPORTED_COUNTS: std::ops::RangeInclusive<u8> = 1..=6;

/// At most this many reference images are forwarded to the model; extras are
/// dropped in selection order without an error.
pub const MAX_REFERENCE_IMAGES: usize = 3;

/// The fixed set of visual styles the composer knows a lexicon for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleKind {
    Documentary,
    FactoryProcess,
    LuxuryEpoxy,
    Construction,
    Cinematic,
    CleanupTransformation,
}

impl StyleKind {
    pub fn label(&self) -> &'static str {
        match self {
            StyleKind::Documentary => "Documentary",
            StyleKind::FactoryProcess => "Industrial / Factory Process",
            StyleKind::LuxuryEpoxy => "Luxury Interior Art / Epoxy",
            StyleKind::Construction => "Real-life / Construction",
            StyleKind::Cinematic => "Cinematic",
            StyleKind::CleanupTransformation => "Dọn rác & Cải tạo (Bẩn → Ấm cúng)",
        }
    }
}

/// Style selector. `Auto` asks the model to infer the style from the title
/// and/or attached images instead of fixing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Auto,
    Explicit(StyleKind),
}

impl Style {
    pub fn label(&self) -> &'static str {
        match self {
            Style::Auto => "Auto",
            Style::Explicit(kind) => kind.label(),
        }
    }
}

/// A reference image as the Gemini API wants it: a MIME type plus the raw
/// base64 payload, without the data-URL prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub mime_type: String,
    pub data: String,
}

impl ReferenceImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parses a `data:<mime>;base64,<payload>` string, the format browsers and
    /// upload widgets hand around.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url.strip_prefix("data:").ok_or_else(|| {
            VeoPromptError::ValidationError("reference image is not a data URL".into())
        })?;
        let (mime_type, data) = rest.split_once(";base64,").ok_or_else(|| {
            VeoPromptError::ValidationError("reference image is not base64-encoded".into())
        })?;
        if mime_type.is_empty() || data.is_empty() {
            return Err(VeoPromptError::ValidationError(
                "reference image data URL is empty".into(),
            ));
        }
        Ok(Self::new(mime_type, data))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A validated generation request, produced once per user action by the
/// normalizer and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub title: String,
    pub count: u8,
    pub style: Style,
    pub reference_images: Vec<ReferenceImage>,
}
