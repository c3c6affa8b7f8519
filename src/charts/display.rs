//! Opens written charts in the system's default image viewer.

use std::path::Path;

/// Best-effort: a viewer failure is logged, never returned.
pub fn show(path: &Path) {
    match open::that(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "opened chart"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not open chart viewer"),
    }
}
