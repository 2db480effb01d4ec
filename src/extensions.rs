use std::ffi::OsStr;
use std::path::Path;

/// Extensions the batch driver considers transcribable.
///
/// These cover the common audio/video containers the external tool's decoder accepts;
/// the list is not exhaustive. Matching is case-insensitive.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "mp3", "wav", "flac", "aac", "m4a", "ogg", "opus", "mp4", "mkv", "webm", "mov", "avi", "3gp",
    "wmv",
];

/// Whether `path` carries an extension the batch driver will transcribe.
pub fn is_supported_media(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ALLOWED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        assert!(is_supported_media(Path::new("clip.mp4")));
        assert!(is_supported_media(Path::new("CLIP.MP4")));
        assert!(is_supported_media(Path::new("/tmp/audio.Flac")));
        assert!(is_supported_media(Path::new("talk.3gp")));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_supported_media(Path::new("notes.txt")));
        assert!(!is_supported_media(Path::new("archive.mp4.bak")));
        assert!(!is_supported_media(Path::new("no_extension")));
        // A leading dot alone is a hidden file name, not an extension.
        assert!(!is_supported_media(Path::new(".mp3")));
    }
}
