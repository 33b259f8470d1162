//! Pre-build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use porch_hook::{
    BuildHook, CoverageScript, HookConfig, HostContext, LandingOutcome, PreBuildHook,
};
use serde::Deserialize;

/// Configuration file structure (porch.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    landing: LandingConfig,
    #[serde(default)]
    coverage: CoverageConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LandingConfig {
    #[serde(default = "default_source")]
    source: String,
    #[serde(default = "default_target")]
    target: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoverageConfig {
    #[serde(default = "default_script")]
    script: String,
    #[serde(default)]
    args: Vec<String>,
    #[serde(default)]
    shell: bool,
    /// Fail the run when the script fails
    #[serde(default)]
    strict: bool,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            args: Vec::new(),
            shell: false,
            strict: false,
        }
    }
}

fn default_source() -> String {
    "README.md".to_string()
}
fn default_target() -> String {
    "docs/docs/index.md".to_string()
}
fn default_script() -> String {
    "docs/scripts/generate-coverage.sh".to_string()
}

impl ConfigFile {
    fn into_hook_config(self, root: PathBuf) -> HookConfig {
        HookConfig {
            root,
            readme: PathBuf::from(self.landing.source),
            landing_page: PathBuf::from(self.landing.target),
            coverage: CoverageScript {
                path: PathBuf::from(self.coverage.script),
                args: self.coverage.args,
                shell: self.coverage.shell,
            },
            strict_coverage: self.coverage.strict,
        }
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the pre-build hook from the current directory.
pub fn run(config_path: &Path, host_args: Vec<String>) -> Result<()> {
    run_in(Path::new("."), config_path, host_args)
}

fn run_in(root: &Path, config_path: &Path, host_args: Vec<String>) -> Result<()> {
    let config = load_config(config_path)?.into_hook_config(root.to_path_buf());
    let hook = PreBuildHook::new(config);

    let report = hook.pre_build(&HostContext::with_args(host_args))?;

    match report.landing {
        LandingOutcome::Created { bytes } => tracing::info!(
            "Landing page {} created ({} bytes)",
            hook.config().landing_page.display(),
            bytes
        ),
        LandingOutcome::Kept => tracing::info!(
            "Landing page {} kept",
            hook.config().landing_page.display()
        ),
    }
    tracing::info!("Coverage refresh {}", report.coverage);

    Ok(())
}
