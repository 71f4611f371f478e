use crate::{
    error::{Result, VeoPromptError},
    models::PromptSet,
};

/// Checks a raw model payload against the `PromptSet` schema and the requested
/// cardinality. Mismatched payloads are a hard failure; nothing is repaired,
/// padded or truncated.
pub fn validate(payload: serde_json::Value, count: u8) -> Result<PromptSet> {
    let set: PromptSet = serde_json::from_value(payload)
        .map_err(|e| VeoPromptError::SchemaError(format!("payload does not match schema: {}", e)))?;

    let expected_images = count as usize;
    let expected_videos = expected_images - 1;

    if set.image_prompts.len() != expected_images {
        return Err(VeoPromptError::SchemaError(format!(
            "expected {} image prompts, got {}",
            expected_images,
            set.image_prompts.len()
        )));
    }
    if set.video_prompts.len() != expected_videos {
        return Err(VeoPromptError::SchemaError(format!(
            "expected {} video prompts, got {}",
            expected_videos,
            set.video_prompts.len()
        )));
    }
    if set.image_prompts.iter().any(|p| p.trim().is_empty()) {
        return Err(VeoPromptError::SchemaError("empty image prompt".into()));
    }
    if set.video_prompts.iter().any(|p| p.trim().is_empty()) {
        return Err(VeoPromptError::SchemaError("empty video prompt".into()));
    }
    if set.analysis.subject.trim().is_empty()
        || set.analysis.action_type.trim().is_empty()
        || set.analysis.progression.trim().is_empty()
    {
        return Err(VeoPromptError::SchemaError(
            "analysis fields must be non-empty".into(),
        ));
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(images: usize, videos: usize) -> serde_json::Value {
        json!({
            "imagePrompts": (0..images).map(|i| format!("frame {}", i)).collect::<Vec<_>>(),
            "videoPrompts": (0..videos).map(|i| format!("cut {}", i)).collect::<Vec<_>>(),
            "analysis": {
                "subject": "an old bedroom",
                "actionType": "renovation",
                "progression": "from cluttered to cozy"
            }
        })
    }

    #[test]
    fn well_formed_payload_passes() {
        let set = validate(payload(3, 2), 3).unwrap();
        assert_eq!(set.image_prompts.len(), 3);
        assert_eq!(set.video_prompts.len(), 2);
        assert_eq!(set.analysis.subject, "an old bedroom");
    }

    #[test]
    fn short_image_list_is_a_schema_error() {
        let err = validate(payload(2, 2), 3).unwrap_err();
        assert!(matches!(err, VeoPromptError::SchemaError(_)));
    }

    #[test]
    fn wrong_video_count_is_a_schema_error() {
        let err = validate(payload(3, 3), 3).unwrap_err();
        assert!(matches!(err, VeoPromptError::SchemaError(_)));
    }

    #[test]
    fn missing_analysis_field_is_a_schema_error() {
        let mut bad = payload(3, 2);
        bad["analysis"]["progression"] = json!("");
        assert!(matches!(
            validate(bad, 3),
            Err(VeoPromptError::SchemaError(_))
        ));

        let mut missing = payload(3, 2);
        missing["analysis"].as_object_mut().unwrap().remove("subject");
        assert!(matches!(
            validate(missing, 3),
            Err(VeoPromptError::SchemaError(_))
        ));
    }

    #[test]
    fn non_object_payload_is_a_schema_error() {
        let err = validate(json!(["not", "an", "object"]), 3).unwrap_err();
        assert!(matches!(err, VeoPromptError::SchemaError(_)));
    }
}
