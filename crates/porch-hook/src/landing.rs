//! Landing page materialization.

use std::fs;
use std::path::Path;

use crate::hook::HookError;

/// What happened to the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandingOutcome {
    /// Copied from the readme
    Created { bytes: u64 },

    /// Already present, left untouched
    Kept,
}

/// Copy `source` to `target` unless `target` already exists.
///
/// An existing landing page is never overwritten, so manual edits survive
/// later builds. The destination directory must already exist.
pub fn materialize(source: &Path, target: &Path) -> Result<LandingOutcome, HookError> {
    if target.exists() {
        tracing::debug!("Landing page {} already exists", target.display());
        return Ok(LandingOutcome::Kept);
    }

    let bytes = fs::copy(source, target).map_err(|e| HookError::Landing {
        from: source.display().to_string(),
        to: target.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(
        "Created landing page {} from {}",
        target.display(),
        source.display()
    );

    Ok(LandingOutcome::Created { bytes })
}
