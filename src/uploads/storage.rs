/**
 * Upload Storage
 *
 * Writes uploaded files to the local uploads directory. Filenames are the
 * client's original name prefixed with a millisecond timestamp; two uploads
 * of the same name in the same millisecond can collide, which is an
 * accepted low-probability gap rather than a guarantee to engineer around.
 */

use std::path::Path;

use chrono::Utc;

use crate::error::ApiError;

/// Fallback used when the client filename is empty after sanitizing.
const DEFAULT_NAME: &str = "upload";

/// Strip any path components from a client-supplied filename
///
/// Clients only get to choose a basename; anything before the last path
/// separator is discarded so the write can never escape the uploads dir.
fn sanitize_filename(original: &str) -> &str {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(DEFAULT_NAME)
        .trim();
    if base.is_empty() || base == "." || base == ".." {
        DEFAULT_NAME
    } else {
        base
    }
}

/// Store an uploaded file and return its public path
///
/// The file is written as `<millis>-<original_name>` under `dir`, which is
/// created if missing. The returned string is the `/uploads/...` path that
/// gets persisted on the owning record.
pub async fn save_upload(
    dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> Result<String, ApiError> {
    tokio::fs::create_dir_all(dir).await?;

    let filename = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_filename(original_name)
    );

    tokio::fs::write(dir.join(&filename), bytes).await?;

    tracing::debug!("Stored upload {}", filename);
    Ok(format!("/uploads/{filename}"))
}
