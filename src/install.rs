//! Package manager invocation.
//!
//! The install step is fully delegated: cairn passes the manifest to the
//! package manager and inspects nothing but the exit status. Execution is
//! synchronous and blocking with no imposed timeout — the step's duration
//! is bounded only by the package manager's own behavior.

use crate::error::Result;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

/// Result of a package-manager invocation.
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the invocation succeeded (exit code 0).
    pub success: bool,
}

impl InstallResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Run the package manager against the manifest, capturing output.
///
/// `args` is the full argument list, manifest path included (see
/// [`crate::config::BootstrapConfig::install_command_args`]).
pub fn run_install(manager: &Path, args: &[String]) -> Result<InstallResult> {
    let start = Instant::now();

    tracing::debug!("running {} {}", manager.display(), args.join(" "));

    let output = Command::new(manager).args(args).output()?;
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(InstallResult::success(stdout, stderr, duration))
    } else {
        tracing::debug!("install exited with {:?}", output.status.code());
        Ok(InstallResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Last `max_lines` non-empty lines of a command's combined output, for
/// showing a failure's tail without dumping the whole log.
pub fn output_tail(result: &InstallResult, max_lines: usize) -> Vec<String> {
    let lines: Vec<String> = result
        .stdout
        .lines()
        .chain(result.stderr.lines())
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let skip = lines.len().saturating_sub(max_lines);
    lines.into_iter().skip(skip).collect()
}
