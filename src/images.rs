use crate::{
    error::{Result, VeoPromptError},
    models::{ReferenceImage, MAX_REFERENCE_IMAGES},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        // Default matches what camera rolls overwhelmingly produce.
        _ => "image/jpeg",
    }
}

async fn encode_one(path: PathBuf) -> Result<ReferenceImage> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| VeoPromptError::IoError(format!("{}: {}", path.display(), e)))?;
    Ok(ReferenceImage::new(mime_for(&path), STANDARD.encode(bytes)))
}

/// Reads and base64-encodes the selected image files as a fan-out of
/// independent reads joined before request assembly. The join waits for every
/// read and the result preserves original selection order, not completion
/// order. Only the first [`MAX_REFERENCE_IMAGES`] paths are read.
pub async fn encode_reference_images(paths: &[PathBuf]) -> Result<Vec<ReferenceImage>> {
    let reads = paths
        .iter()
        .take(MAX_REFERENCE_IMAGES)
        .cloned()
        .map(encode_one);
    futures::future::try_join_all(reads).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("veoprompt-test-{}", name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn join_preserves_selection_order() {
        let a = temp_file("a.png", b"first");
        let b = temp_file("b.jpg", b"second");
        let c = temp_file("c.webp", b"third");

        let images = encode_reference_images(&[a, b, c]).await.unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].mime_type, "image/png");
        assert_eq!(images[0].data, STANDARD.encode(b"first"));
        assert_eq!(images[1].mime_type, "image/jpeg");
        assert_eq!(images[2].mime_type, "image/webp");
        assert_eq!(images[2].data, STANDARD.encode(b"third"));
    }

    #[tokio::test]
    async fn only_the_first_three_paths_are_read() {
        let paths: Vec<PathBuf> = (0..5)
            .map(|i| temp_file(&format!("cap-{}.png", i), b"x"))
            .collect();
        let images = encode_reference_images(&paths).await.unwrap();
        assert_eq!(images.len(), MAX_REFERENCE_IMAGES);
    }

    #[tokio::test]
    async fn missing_file_fails_the_whole_join() {
        let ok = temp_file("ok.png", b"x");
        let missing = std::env::temp_dir().join("veoprompt-test-does-not-exist.png");
        let err = encode_reference_images(&[ok, missing]).await.unwrap_err();
        assert!(matches!(err, VeoPromptError::IoError(_)));
    }
}
