//! Hook configuration.

use std::path::PathBuf;

use crate::coverage::CoverageScript;

/// Configuration for a pre-build run.
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Directory every relative path is resolved against
    pub root: PathBuf,

    /// Readme copied into place when the landing page is missing
    pub readme: PathBuf,

    /// Landing page inside the docs source tree
    pub landing_page: PathBuf,

    /// Script that regenerates coverage artifacts
    pub coverage: CoverageScript,

    /// Treat a failed coverage refresh as a hook error
    pub strict_coverage: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            readme: PathBuf::from("README.md"),
            landing_page: PathBuf::from("docs/docs/index.md"),
            coverage: CoverageScript::default(),
            strict_coverage: false,
        }
    }
}

impl HookConfig {
    /// Config rooted at `root`, with default paths.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Readme path resolved against the root.
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.readme)
    }

    /// Landing page path resolved against the root.
    pub fn landing_page_path(&self) -> PathBuf {
        self.root.join(&self.landing_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_match_docs_layout() {
        let config = HookConfig::default();

        assert_eq!(config.readme_path(), Path::new("./README.md"));
        assert_eq!(config.landing_page_path(), Path::new("./docs/docs/index.md"));
        assert_eq!(
            config.coverage.path,
            PathBuf::from("docs/scripts/generate-coverage.sh")
        );
        assert!(!config.strict_coverage);
    }

    #[test]
    fn resolves_against_root() {
        let config = HookConfig::rooted("/srv/site");

        assert_eq!(config.readme_path(), Path::new("/srv/site/README.md"));
        assert_eq!(
            config.landing_page_path(),
            Path::new("/srv/site/docs/docs/index.md")
        );
    }
}
