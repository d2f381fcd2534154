//! Bootstrap configuration.
//!
//! The ambient environment (search path, installed executables, manifest
//! contents) is the only real input, so configuration is a plain struct
//! of tool names and message text rather than anything loaded from disk.

use std::path::{Path, PathBuf};

/// Configuration for a bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Runtime executable to probe for (e.g. `python3`).
    pub runtime: String,

    /// Diagnostic hint shown when the runtime is missing. Names the
    /// minimum acceptable version.
    pub runtime_hint: String,

    /// Package-manager executable to probe for (e.g. `pip3`).
    pub package_manager: String,

    /// Diagnostic hint shown when the package manager is missing.
    pub manager_hint: String,

    /// Manifest file listing requirement specifiers, one per line.
    /// Relative paths resolve against the working directory. The file is
    /// owned by the package-manager ecosystem, not by cairn.
    pub manifest: PathBuf,

    /// Arguments passed to the package manager ahead of the manifest path.
    pub install_args: Vec<String>,

    /// Hint printed after a successful install, telling the user how to
    /// start the main application.
    pub run_hint: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            runtime: runtime_binary().to_string(),
            runtime_hint: "Install Python 3.6 or newer and run cairn again.".to_string(),
            package_manager: manager_binary().to_string(),
            manager_hint: "pip ships with Python; reinstall Python or install pip separately."
                .to_string(),
            manifest: PathBuf::from("requirements.txt"),
            install_args: vec!["install".to_string(), "-r".to_string()],
            run_hint: format!("Run '{} main.py' to start the application.", runtime_binary()),
        }
    }
}

impl BootstrapConfig {
    /// Override the manifest path.
    pub fn with_manifest(mut self, path: &Path) -> Self {
        self.manifest = path.to_path_buf();
        self
    }

    /// Full argument list for the install invocation, manifest included.
    pub fn install_command_args(&self) -> Vec<String> {
        let mut args = self.install_args.clone();
        args.push(self.manifest.to_string_lossy().to_string());
        args
    }
}

fn runtime_binary() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

fn manager_binary() -> &'static str {
    if cfg!(target_os = "windows") {
        "pip"
    } else {
        "pip3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_probes_python_and_pip() {
        let config = BootstrapConfig::default();
        assert!(config.runtime.starts_with("python"));
        assert!(config.package_manager.starts_with("pip"));
        assert_eq!(config.manifest, PathBuf::from("requirements.txt"));
    }

    #[test]
    fn default_runtime_hint_names_minimum_version() {
        let config = BootstrapConfig::default();
        assert!(config.runtime_hint.contains("3.6"));
    }

    #[test]
    fn default_run_hint_names_entry_point() {
        let config = BootstrapConfig::default();
        assert!(config.run_hint.contains("main.py"));
    }

    #[test]
    fn with_manifest_overrides_path() {
        let config = BootstrapConfig::default().with_manifest(Path::new("/tmp/reqs.txt"));
        assert_eq!(config.manifest, PathBuf::from("/tmp/reqs.txt"));
    }

    #[test]
    fn install_command_args_end_with_manifest() {
        let config = BootstrapConfig::default();
        let args = config.install_command_args();
        assert_eq!(args[0], "install");
        assert_eq!(args[1], "-r");
        assert_eq!(args.last().unwrap(), "requirements.txt");
    }
}
