//! Upload policy: MIME allow-list, size ceiling, stored-name generation.
//!
//! Uploaded files are stored under a generated name so the
//! caller-supplied filename never reaches the filesystem. Only the
//! extension of the original name survives, and only after
//! sanitization; when the original carries no usable extension the
//! canonical extension for the declared MIME type is used instead.

use rand::Rng;

/// Default upload size ceiling: 50 MB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Declared MIME types accepted for upload, with their canonical extension.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("application/pdf", "pdf"),
];

/// Whether the declared MIME type is on the allow-list.
pub fn is_allowed_mime(mime: &str) -> bool {
    ALLOWED_TYPES.iter().any(|(m, _)| *m == mime)
}

/// Canonical extension for an allow-listed MIME type.
pub fn extension_for_mime(mime: &str) -> Option<&'static str> {
    ALLOWED_TYPES
        .iter()
        .find(|(m, _)| *m == mime)
        .map(|(_, ext)| *ext)
}

/// Extension taken from the original filename, lowercased.
///
/// Returns `None` when there is no extension or it contains anything
/// other than ASCII alphanumerics (the only part of the client name we
/// are willing to reuse).
pub fn sanitized_extension(original_name: &str) -> Option<String> {
    let (stem, ext) = original_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Generate a collision-resistant stored filename:
/// `<unix-millis>-<random><.ext>`.
pub fn stored_name(original_name: &str, mime: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    build_stored_name(original_name, mime, millis, suffix)
}

fn build_stored_name(original_name: &str, mime: &str, millis: i64, suffix: u32) -> String {
    let ext = sanitized_extension(original_name)
        .or_else(|| extension_for_mime(mime).map(str::to_string))
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    format!("{millis}-{suffix}{ext}")
}
