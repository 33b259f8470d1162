//! Write a default porch.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'porch' before building the docs.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# Porch Configuration

[landing]
# Copied to the landing page when it does not exist yet
source = "README.md"

# Landing page inside the docs source tree (never overwritten)
target = "docs/docs/index.md"

[coverage]
# Script that regenerates coverage artifacts, run on every build
script = "docs/scripts/generate-coverage.sh"

# Extra arguments for the script
args = []

# Run the script through the shell
shell = false

# Fail the build when the script fails
strict = false
"#;
