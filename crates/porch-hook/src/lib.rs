//! Pre-build hook for documentation sites.
//!
//! Runs before the documentation generator renders anything: materializes the
//! landing page from the repository readme when it is missing, then refreshes
//! coverage artifacts by running an external script.

pub mod config;
pub mod coverage;
pub mod hook;
pub mod landing;

pub use config::HookConfig;
pub use coverage::{CoverageOutcome, CoverageRunner, CoverageScript, ProcessRunner};
pub use hook::{BuildHook, HookError, HookReport, HostContext, PreBuildHook};
pub use landing::LandingOutcome;
