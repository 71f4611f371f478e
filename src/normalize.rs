use crate::{
    error::{Result, VeoPromptError},
    models::{GenerationRequest, ReferenceImage, Style, MAX_REFERENCE_IMAGES, SUPPORTED_COUNTS},
};

/// Shapes raw user input into a well-formed [`GenerationRequest`]. Pure
/// validation; no model or network access happens here.
pub fn normalize(
    title: &str,
    count: u8,
    style: Style,
    images: Vec<ReferenceImage>,
) -> Result<GenerationRequest> {
    let title = title.trim();
    if title.is_empty() && images.is_empty() {
        return Err(VeoPromptError::ValidationError(
            "provide a title or at least one reference image".into(),
        ));
    }

    if !SUPPORTED_COUNTS.contains(&count) {
        return Err(VeoPromptError::ValidationError(format!(
            "unsupported shot count {}, expected {} to {}",
            count,
            SUPPORTED_COUNTS.start(),
            SUPPORTED_COUNTS.end()
        )));
    }

    let mut reference_images = images;
    if reference_images.len() > MAX_REFERENCE_IMAGES {
        log::debug!(
            "Dropping {} extra reference image(s), keeping the first {}",
            reference_images.len() - MAX_REFERENCE_IMAGES,
            MAX_REFERENCE_IMAGES
        );
        reference_images.truncate(MAX_REFERENCE_IMAGES);
    }

    Ok(GenerationRequest {
        title: title.to_string(),
        count,
        style,
        reference_images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleKind;

    fn image(tag: &str) -> ReferenceImage {
        ReferenceImage::new("image/jpeg", tag)
    }

    #[test]
    fn empty_title_and_no_images_is_rejected() {
        let err = normalize("   ", 3, Style::Auto, vec![]).unwrap_err();
        assert!(matches!(err, VeoPromptError::ValidationError(_)));
    }

    #[test]
    fn images_alone_are_enough() {
        let request = normalize("", 2, Style::Auto, vec![image("a")]).unwrap();
        assert_eq!(request.title, "");
        assert_eq!(request.reference_images.len(), 1);
    }

    #[test]
    fn title_is_trimmed() {
        let request = normalize("  Cải tạo phòng ngủ cũ  ", 3, Style::Auto, vec![]).unwrap();
        assert_eq!(request.title, "Cải tạo phòng ngủ cũ");
    }

    #[test]
    fn out_of_range_count_is_rejected_not_clamped() {
        for count in [0, 7, 12] {
            let err = normalize("title", count, Style::Auto, vec![]).unwrap_err();
            assert!(matches!(err, VeoPromptError::ValidationError(_)));
        }
    }

    #[test]
    fn extra_images_are_dropped_keeping_selection_order() {
        let images = vec![image("a"), image("b"), image("c"), image("d"), image("e")];
        let request = normalize("title", 4, Style::Explicit(StyleKind::Cinematic), images).unwrap();
        let kept: Vec<&str> = request
            .reference_images
            .iter()
            .map(|i| i.data.as_str())
            .collect();
        assert_eq!(kept, vec!["a", "b", "c"]);
    }
}
