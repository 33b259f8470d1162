//! The pre-build hook.

use std::collections::HashMap;

use crate::config::HookConfig;
use crate::coverage::{CoverageOutcome, CoverageRunner, ProcessRunner};
use crate::landing::{self, LandingOutcome};

/// Arguments supplied by the host when it invokes a hook.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    /// Positional arguments
    pub args: Vec<String>,

    /// Keyword options
    pub options: HashMap<String, String>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context carrying positional arguments only.
    pub fn with_args(args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            options: HashMap::new(),
        }
    }
}

/// Outcome of a pre-build run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookReport {
    /// Landing page step
    pub landing: LandingOutcome,

    /// Coverage refresh step
    pub coverage: CoverageOutcome,
}

/// Errors that abort a pre-build run.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Failed to copy {from} to {to}: {message}")]
    Landing {
        from: String,
        to: String,
        message: String,
    },

    #[error("Coverage refresh failed: {0}")]
    Coverage(String),
}

/// Contract for hooks called by a documentation generator before it builds.
pub trait BuildHook: Send + Sync {
    /// Hook identifier (e.g., "pre-build")
    fn name(&self) -> &'static str;

    /// Called once per build, before any output is generated.
    fn pre_build(&self, ctx: &HostContext) -> Result<HookReport, HookError>;
}

/// Prepares the docs tree: landing page first, then coverage.
pub struct PreBuildHook {
    config: HookConfig,
    runner: Box<dyn CoverageRunner>,
}

impl PreBuildHook {
    /// Create a hook that runs the coverage script as a child process.
    pub fn new(config: HookConfig) -> Self {
        Self::with_runner(config, Box::new(ProcessRunner::new()))
    }

    /// Create a hook with a custom coverage runner.
    pub fn with_runner(config: HookConfig, runner: Box<dyn CoverageRunner>) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Run both preparation steps.
    ///
    /// A landing page failure is returned immediately and the coverage script
    /// is not run. A coverage failure is only logged, unless
    /// `strict_coverage` is set.
    pub fn run(&self) -> Result<HookReport, HookError> {
        let landing = landing::materialize(
            &self.config.readme_path(),
            &self.config.landing_page_path(),
        )?;

        let coverage = self
            .runner
            .refresh(&self.config.root, &self.config.coverage);

        if self.config.strict_coverage && !coverage.is_success() {
            return Err(HookError::Coverage(format!(
                "{} {}",
                self.config.coverage.path.display(),
                coverage
            )));
        }

        Ok(HookReport { landing, coverage })
    }
}

impl BuildHook for PreBuildHook {
    fn name(&self) -> &'static str {
        "pre-build"
    }

    fn pre_build(&self, ctx: &HostContext) -> Result<HookReport, HookError> {
        if !ctx.args.is_empty() || !ctx.options.is_empty() {
            tracing::debug!(
                "Ignoring {} host arguments and {} options",
                ctx.args.len(),
                ctx.options.len()
            );
        }
        self.run()
    }
}
