//! JSON output, used for episode summaries.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::IoError;

/// Serializes any serde value as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, IoError> {
    serde_json::to_string_pretty(value).map_err(|e| IoError::Serialization {
        reason: e.to_string(),
    })
}

/// Writes `value` to `path` as pretty-printed JSON.
///
/// Non-finite floats (such as the `NaN` peak of an all-missing episode) are
/// written as `null`.
///
/// # Errors
///
/// Returns [`IoError::Serialization`] or [`IoError::Io`].
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<(), IoError> {
    let json = to_json(value)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "JSON written");
    Ok(())
}
