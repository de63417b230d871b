use std::path::Path;

use crate::common::ValidationError;

/// Largest image the API accepts.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Rejects files the upload endpoint would refuse, before sending them.
pub fn validate_image_upload(filename: &str, size: u64) -> Result<(), ValidationError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(ValidationError::UnsupportedImageType),
    }

    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

/// MIME type for an accepted image name, for browsers that report none.
pub fn image_mime(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_known_image_types() {
        assert!(validate_image_upload("cover.PNG", 1024).is_ok());
        assert!(validate_image_upload("photo.jpeg", MAX_IMAGE_BYTES).is_ok());
    }

    #[test]
    fn test_rejects_other_types() {
        assert_eq!(
            validate_image_upload("notes.pdf", 10),
            Err(ValidationError::UnsupportedImageType)
        );
        assert_eq!(
            validate_image_upload("noextension", 10),
            Err(ValidationError::UnsupportedImageType)
        );
    }

    #[test]
    fn test_rejects_large_files() {
        assert_eq!(
            validate_image_upload("big.webp", MAX_IMAGE_BYTES + 1),
            Err(ValidationError::ImageTooLarge)
        );
    }

    #[test]
    fn test_image_mime_from_extension() {
        assert_eq!(image_mime("Cover.JPG"), Some("image/jpeg"));
        assert_eq!(image_mime("anim.gif"), Some("image/gif"));
        assert_eq!(image_mime("photo.webp"), Some("image/webp"));
        assert_eq!(image_mime("notes.txt"), None);
        assert_eq!(image_mime("noextension"), None);
    }
}
