//! Executable presence checks on the command search path.
//!
//! Resolution walks PATH entries directly instead of shelling out to
//! `which` — `which` behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// File names a bare tool name can resolve to in a PATH directory.
///
/// On Windows `python` on disk is `python.exe`, so the bare name is
/// expanded with the extensions from PATHEXT.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) {
        let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.CMD;.BAT".to_string());
        expand_tool_names(tool, Some(&pathext))
    } else {
        expand_tool_names(tool, None)
    }
}

/// Expand a tool name with executable extensions, bare name first.
fn expand_tool_names(tool: &str, pathext: Option<&str>) -> Vec<String> {
    let mut names = vec![tool.to_string()];
    if let Some(exts) = pathext {
        for ext in exts.split(';').filter(|e| !e.is_empty()) {
            names.push(format!("{}{}", tool, ext.to_lowercase()));
        }
    }
    names
}

/// Resolve a tool against the current process's PATH.
pub fn resolve_on_path(tool: &str) -> Option<PathBuf> {
    let resolved = resolve_tool_path(tool, &parse_search_path());
    match &resolved {
        Some(path) => tracing::debug!("{} resolved to {}", tool, path.display()),
        None => tracing::debug!("{} not found on PATH", tool),
    }
    resolved
}

/// Ask a resolved binary for its version, for display only.
///
/// Runs `<binary> --version` and extracts the first dotted version from
/// the combined output. Python 2 printed its version banner to stderr,
/// so both streams are searched.
pub fn tool_version(binary: &Path) -> Option<String> {
    let output = Command::new(binary).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    extract_version(&stdout).or_else(|| extract_version(&stderr))
}

/// Extract a version number from command output.
fn extract_version(output: &str) -> Option<String> {
    let patterns = [r"(\d+\.\d+\.\d+)", r"version\s+(\d+\.\d+)", r"v(\d+\.\d+)"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
