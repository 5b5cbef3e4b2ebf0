use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

/// Generate a collision-resistant asset name: 32 bytes from a CSPRNG,
/// URL-safe base64 without padding, plus the media-type extension.
pub fn asset_name(media_type: &str) -> String {
    let mut id_bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut id_bytes);
    let id = URL_SAFE_NO_PAD.encode(id_bytes);
    format!("{}{}", id, media_type_ext(media_type))
}

/// Derive the storage key for an uploaded object: `<prefix>/<name><ext>`.
pub fn asset_key(prefix: &str, media_type: &str) -> String {
    format!("{}/{}", prefix, asset_name(media_type))
}

/// Map a `type/subtype` media type to a file extension. Anything that is
/// not exactly two slash-separated parts maps to `.bin`.
pub fn media_type_ext(media_type: &str) -> String {
    let parts: Vec<&str> = media_type.split('/').collect();
    if parts.len() != 2 {
        return ".bin".to_string();
    }
    format!(".{}", parts[1])
}

pub fn is_image(media_type: &str) -> bool {
    matches!(media_type, "image/jpeg" | "image/png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ext_follows_subtype() {
        assert_eq!(media_type_ext("image/jpeg"), ".jpeg");
        assert_eq!(media_type_ext("image/png"), ".png");
        assert_eq!(media_type_ext("video/mp4"), ".mp4");
    }

    #[test]
    fn ext_falls_back_to_bin_without_exactly_one_slash() {
        assert_eq!(media_type_ext("invalid"), ".bin");
        assert_eq!(media_type_ext(""), ".bin");
        assert_eq!(media_type_ext("a/b/c"), ".bin");
    }

    #[test]
    fn asset_name_carries_extension() {
        let name = asset_name("video/mp4");
        assert!(name.ends_with(".mp4"));
        assert!(name.len() > 4);
        // No padding and URL-safe characters only.
        assert!(!name.contains('='));
        assert!(!name.contains('+'));
        assert!(!name.contains('/'));
    }

    #[test]
    fn asset_key_prefixes_the_name() {
        let key = asset_key("landscape", "video/mp4");
        assert!(key.starts_with("landscape/"));
        assert!(key.ends_with(".mp4"));
    }

    #[test]
    fn asset_names_do_not_repeat() {
        let names: HashSet<String> = (0..100).map(|_| asset_name("video/mp4")).collect();
        assert_eq!(names.len(), 100);
    }

    #[test]
    fn image_media_types() {
        assert!(is_image("image/jpeg"));
        assert!(is_image("image/png"));
        assert!(!is_image("video/mp4"));
        assert!(!is_image("application/pdf"));
    }
}
