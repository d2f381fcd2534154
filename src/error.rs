//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type, and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Every checkpoint failure is terminal for the invocation: no retry, no
//! rollback. The variants stay distinct internally so tests and callers
//! can tell them apart, but `main` maps all of them to the same generic
//! non-zero exit code.

use thiserror::Error;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// The runtime executable is not on the search path.
    #[error("{runtime} not found on PATH. {hint}")]
    MissingRuntime { runtime: String, hint: String },

    /// The package-manager executable is not on the search path.
    #[error("{manager} not found on PATH. {hint}")]
    MissingPackageManager { manager: String, hint: String },

    /// The package manager ran but did not exit cleanly. All underlying
    /// causes (network, version conflict, permissions) collapse here;
    /// the package manager's own output is the place to look.
    #[error("{manager} install failed ({})", code_label(.code))]
    InstallFailed { manager: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

// A process killed by a signal has no exit code.
fn code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}
