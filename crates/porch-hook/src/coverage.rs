//! Coverage refresh.
//!
//! The coverage script is an external collaborator: it is run to completion
//! with the caller's stdout/stderr, and its result is reported, never raised.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// How to invoke the coverage script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageScript {
    /// Script path, relative to the hook root unless absolute
    pub path: PathBuf,

    /// Extra arguments passed to the script
    pub args: Vec<String>,

    /// Run the command line through the platform shell
    pub shell: bool,
}

impl Default for CoverageScript {
    fn default() -> Self {
        Self {
            path: PathBuf::from("docs/scripts/generate-coverage.sh"),
            args: Vec::new(),
            shell: false,
        }
    }
}

/// Result of a coverage refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverageOutcome {
    /// Script exited with status 0
    Succeeded,

    /// Script exited with a non-zero status
    Failed { code: i32 },

    /// Script ended without an exit code (killed by a signal)
    Terminated,

    /// Script could not be started
    Unavailable { reason: String },
}

impl CoverageOutcome {
    /// Whether the script ran and exited cleanly.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            return Self::Succeeded;
        }
        match status.code() {
            Some(code) => Self::Failed { code },
            None => Self::Terminated,
        }
    }
}

impl std::fmt::Display for CoverageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed { code } => write!(f, "exited with status {}", code),
            Self::Terminated => write!(f, "terminated by signal"),
            Self::Unavailable { reason } => write!(f, "could not be started: {}", reason),
        }
    }
}

/// Runs the coverage script.
pub trait CoverageRunner: Send + Sync {
    /// Run `script` from `root` and block until it finishes.
    fn refresh(&self, root: &Path, script: &CoverageScript) -> CoverageOutcome;
}

/// Runs the script as a child process with inherited output streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

/// `exec` error for a file with no interpreter line.
#[cfg(unix)]
const ENOEXEC: i32 = 8;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run the script from `root` and wait for it.
    ///
    /// The root is made absolute first, so the program path and the child's
    /// working directory agree whether `root` is relative or not.
    fn status(root: &Path, script: &CoverageScript) -> io::Result<ExitStatus> {
        let root = root.canonicalize()?;
        let program = root.join(&script.path);

        if script.shell {
            return Self::shell_command(&program, &script.args)
                .current_dir(&root)
                .status();
        }

        let direct = Command::new(&program)
            .args(&script.args)
            .current_dir(&root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match direct {
            #[cfg(unix)]
            Err(e) if e.raw_os_error() == Some(ENOEXEC) => {
                tracing::debug!(
                    "{} has no interpreter line, running it with sh",
                    program.display()
                );
                Command::new("sh")
                    .arg(&program)
                    .args(&script.args)
                    .current_dir(&root)
                    .stdin(Stdio::null())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
            }
            other => other,
        }
    }

    fn shell_command(program: &Path, args: &[String]) -> Command {
        let line = shell_line(program, args);

        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        };

        cmd.stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl CoverageRunner for ProcessRunner {
    fn refresh(&self, root: &Path, script: &CoverageScript) -> CoverageOutcome {
        tracing::info!("Refreshing coverage with {}", script.path.display());

        let outcome = match Self::status(root, script) {
            Ok(status) => CoverageOutcome::from_status(status),
            Err(e) => CoverageOutcome::Unavailable {
                reason: e.to_string(),
            },
        };

        if outcome.is_success() {
            tracing::debug!("Coverage script {}", outcome);
        } else {
            tracing::warn!("Coverage script {} {}", script.path.display(), outcome);
        }

        outcome
    }
}

/// Build a shell command line: the quoted program followed by the arguments.
///
/// Arguments are passed through unquoted so they keep their shell meaning.
fn shell_line(program: &Path, args: &[String]) -> String {
    std::iter::once(quote(program))
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(not(windows))]
fn quote(path: &Path) -> String {
    format!("'{}'", path.display().to_string().replace('\'', r"'\''"))
}

#[cfg(windows)]
fn quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}
