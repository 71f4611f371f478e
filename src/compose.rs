use crate::models::{GenerationRequest, ModelInstruction, Style, StyleKind};
use serde_json::json;

/// Visual lexicon injected into the instruction for an explicit style.
fn style_lexicon(kind: StyleKind) -> &'static str {
    match kind {
        StyleKind::Documentary => {
            "Documentary realism: natural available light, handheld framing, honest textures, \
             observational distance, muted color grading"
        }
        StyleKind::FactoryProcess => {
            "Industrial process footage: machinery close-ups, conveyor rhythm, sparks and steam, \
             hard practical lighting, steel and concrete surfaces"
        }
        StyleKind::LuxuryEpoxy => {
            "Luxury interior artistry: glossy epoxy resin pours, marbled pigment swirls, warm \
             showroom lighting, macro detail shots, premium material finish"
        }
        StyleKind::Construction => {
            "Real-world construction: job-site grit, raw materials, workers in motion, dust in \
             sunlight, wide progress shots alternating with tool close-ups"
        }
        StyleKind::Cinematic => {
            "Cinematic: anamorphic framing, shallow depth of field, motivated key lighting, \
             graded film look, deliberate camera blocking"
        }
        StyleKind::CleanupTransformation => {
            "Cleanup and renovation transformation: the arc opens on clutter, grime and disorder \
             and resolves into a warm, tidy, inviting space; lighting shifts from dim and cold \
             to bright and cozy as order is restored"
        }
    }
}

fn style_directive(style: Style) -> String {
    match style {
        Style::Auto => "Infer the most fitting visual style from the title and any attached \
                        reference images, then apply it consistently to every prompt."
            .to_string(),
        Style::Explicit(kind) => format!(
            "Render every prompt in this visual style: {}.",
            style_lexicon(kind)
        ),
    }
}

/// Gemini structured-output schema pinning the reply to the `PromptSet` shape
/// with exactly `count` image prompts and `count - 1` video prompts.
fn response_schema(count: u8) -> serde_json::Value {
    let images = count as u64;
    let videos = images - 1;
    json!({
        "type": "OBJECT",
        "properties": {
            "imagePrompts": {
                "type": "ARRAY",
                "minItems": images,
                "maxItems": images,
                "items": { "type": "STRING" }
            },
            "videoPrompts": {
                "type": "ARRAY",
                "minItems": videos,
                "maxItems": videos,
                "items": { "type": "STRING" }
            },
            "analysis": {
                "type": "OBJECT",
                "properties": {
                    "subject": { "type": "STRING" },
                    "actionType": { "type": "STRING" },
                    "progression": { "type": "STRING" }
                },
                "required": ["subject", "actionType", "progression"]
            }
        },
        "required": ["imagePrompts", "videoPrompts", "analysis"]
    })
}

/// Builds the model instruction for a normalized request.
pub fn compose(request: &GenerationRequest) -> ModelInstruction {
    let count = request.count;
    let system_text = format!(
        "You are a prompt director for a text/image-to-video pipeline. Design a package of \
         {count} still-image prompts and {videos} video transition prompts that together tell \
         one continuous story.\n\
         Continuity: every image prompt depicts the SAME subject and scene, advancing \
         monotonically along a single narrative arc from the first frame to the last. Never \
         produce independent, unrelated shots.\n\
         Transitions: video prompt i describes only the motion bridging image i and image i+1 \
         (camera movement, lighting change or time-lapse action). It must not restate either \
         image prompt's content verbatim.\n\
         {style}\n\
         If reference images are attached, treat them as grounding context for subject, \
         materials and mood; do not require them to appear literally.\n\
         Also return an analysis of the inferred narrative: the subject, the type of action, \
         and how it progresses across the sequence. Write all prompts in English.",
        count = count,
        videos = count - 1,
        style = style_directive(request.style),
    );

    let user_text = if request.title.is_empty() {
        format!(
            "Build the {}-shot prompt package from the attached reference images.",
            count
        )
    } else {
        format!(
            "Build the {}-shot prompt package for this project title: \"{}\"",
            count, request.title
        )
    };

    ModelInstruction {
        system_text,
        user_text,
        response_schema: response_schema(count),
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceImage;

    fn request(title: &str, count: u8, style: Style) -> GenerationRequest {
        GenerationRequest {
            title: title.to_string(),
            count,
            style,
            reference_images: vec![],
        }
    }

    #[test]
    fn schema_pins_cardinality() {
        let instruction = compose(&request("old bedroom makeover", 4, Style::Auto));
        let schema = &instruction.response_schema;
        assert_eq!(schema["properties"]["imagePrompts"]["minItems"], 4);
        assert_eq!(schema["properties"]["imagePrompts"]["maxItems"], 4);
        assert_eq!(schema["properties"]["videoPrompts"]["minItems"], 3);
        assert_eq!(schema["properties"]["videoPrompts"]["maxItems"], 3);
        assert_eq!(instruction.count, 4);
    }

    #[test]
    fn auto_style_asks_for_inference() {
        let instruction = compose(&request("workshop tour", 3, Style::Auto));
        assert!(instruction.system_text.contains("Infer the most fitting visual style"));
    }

    #[test]
    fn explicit_style_carries_its_lexicon() {
        let instruction = compose(&request(
            "resin table build",
            3,
            Style::Explicit(StyleKind::LuxuryEpoxy),
        ));
        assert!(instruction.system_text.contains("epoxy resin"));
        assert!(!instruction.system_text.contains("Infer the most fitting"));
    }

    #[test]
    fn transformation_style_describes_the_arc() {
        let instruction = compose(&request(
            "garage cleanup",
            5,
            Style::Explicit(StyleKind::CleanupTransformation),
        ));
        assert!(instruction.system_text.contains("clutter"));
        assert!(instruction.system_text.contains("order is restored"));
    }

    #[test]
    fn untitled_request_leans_on_the_images() {
        let mut req = request("", 2, Style::Auto);
        req.reference_images = vec![ReferenceImage::new("image/png", "aGk=")];
        let instruction = compose(&req);
        assert!(instruction.user_text.contains("attached reference images"));
    }
}
