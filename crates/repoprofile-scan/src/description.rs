//! Project description extraction from README-style files.

use repoprofile_core::MAX_DESCRIPTION_CHARS;
use std::path::Path;

/// Canonical description filenames, in priority order.
const DESCRIPTION_FILENAMES: &[&str] = &["README.md", "README.txt", "README", "readme.md"];

/// Read the first description file at the working-copy root, truncated to
/// [`MAX_DESCRIPTION_CHARS`] characters.
///
/// Returns an empty string when no file exists or the read fails; a failed
/// read is non-fatal and only logged.
pub fn extract_description(root: &Path) -> String {
    for filename in DESCRIPTION_FILENAMES {
        let path = root.join(filename);
        if !path.is_file() {
            continue;
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => return truncate_chars(&content, MAX_DESCRIPTION_CHARS),
            Err(e) => {
                tracing::debug!(file = *filename, "description file unreadable: {e}");
                return String::new();
            }
        }
    }

    String::new()
}

/// Truncate to at most `max` characters on a char boundary.
fn truncate_chars(content: &str, max: usize) -> String {
    match content.char_indices().nth(max) {
        Some((idx, _)) => content[..idx].to_string(),
        None => content.to_string(),
    }
}
