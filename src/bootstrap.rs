//! The bootstrap checkpoint sequence.
//!
//! Four ordered, short-circuiting checkpoints: probe the runtime, probe
//! the package manager, delegate the install, inspect its exit status.
//! Each checkpoint either passes (continue) or fails (terminate); there is
//! no retry, no partial-success state, no rollback.

use crate::config::BootstrapConfig;
use crate::error::{CairnError, Result};
use crate::install::{self, InstallResult};
use crate::manifest::Manifest;
use crate::probe;
use crate::ui::Ui;
use std::path::{Path, PathBuf};

/// Lines of package-manager output echoed after a failed install.
const FAILURE_TAIL_LINES: usize = 10;

/// Mockable collaborators for the bootstrapper.
///
/// The ambient environment (search path, installed executables, the
/// package manager itself) enters only through these functions, so tests
/// can simulate present/absent and success/failure without touching a
/// real environment.
pub struct BootstrapContext<'a> {
    /// Resolve an executable on the search path.
    pub resolve_tool: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Ask a resolved binary for a displayable version.
    pub tool_version: &'a dyn Fn(&Path) -> Option<String>,
    /// Invoke the package manager with the given argument list.
    pub run_install: &'a dyn Fn(&Path, &[String]) -> Result<InstallResult>,
}

/// Build the default `BootstrapContext` for production use.
pub fn default_context() -> BootstrapContext<'static> {
    BootstrapContext {
        resolve_tool: &|tool| probe::resolve_on_path(tool),
        tool_version: &|binary| probe::tool_version(binary),
        run_install: &|manager, args| install::run_install(manager, args),
    }
}

/// What a successful bootstrap found and did.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// Where the runtime was resolved.
    pub runtime_path: PathBuf,
    /// Runtime version, when the binary reported one.
    pub runtime_version: Option<String>,
    /// Where the package manager was resolved.
    pub manager_path: PathBuf,
    /// Manifest entry count, when the manifest was readable.
    pub requirement_count: Option<usize>,
    /// The install invocation's result.
    pub install: InstallResult,
}

/// Runs the checkpoint sequence.
pub struct Bootstrapper<'a> {
    config: &'a BootstrapConfig,
    ctx: BootstrapContext<'a>,
}

impl<'a> Bootstrapper<'a> {
    /// Create a new bootstrapper.
    pub fn new(config: &'a BootstrapConfig, ctx: BootstrapContext<'a>) -> Self {
        Self { config, ctx }
    }

    /// Run all four checkpoints.
    ///
    /// Returns the report on success; any checkpoint failure returns the
    /// matching [`CairnError`] variant and nothing further runs.
    pub fn run(&self, ui: &Ui) -> Result<BootstrapReport> {
        let config = self.config;

        // Checkpoint 1: runtime present
        let runtime_path = (self.ctx.resolve_tool)(&config.runtime).ok_or_else(|| {
            CairnError::MissingRuntime {
                runtime: config.runtime.clone(),
                hint: config.runtime_hint.clone(),
            }
        })?;
        let runtime_version = (self.ctx.tool_version)(&runtime_path);
        ui.success(&found_line(&config.runtime, &runtime_version, &runtime_path));

        // Checkpoint 2: package manager present
        let manager_path = (self.ctx.resolve_tool)(&config.package_manager).ok_or_else(|| {
            CairnError::MissingPackageManager {
                manager: config.package_manager.clone(),
                hint: config.manager_hint.clone(),
            }
        })?;
        let manager_version = (self.ctx.tool_version)(&manager_path);
        ui.success(&found_line(
            &config.package_manager,
            &manager_version,
            &manager_path,
        ));

        // Checkpoint 3: delegate the install. The manifest is read only to
        // report a count; if it's unreadable the package manager still gets
        // invoked and reports the problem itself.
        let requirement_count = match Manifest::load(&config.manifest) {
            Ok(manifest) => Some(manifest.len()),
            Err(e) => {
                tracing::debug!("manifest {} not readable: {}", config.manifest.display(), e);
                None
            }
        };
        let mut spinner = ui.spinner(&install_line(requirement_count, &config.manifest));

        let args = config.install_command_args();
        let result = match (self.ctx.run_install)(&manager_path, &args) {
            Ok(result) => result,
            Err(e) => {
                spinner.finish_error("Dependency install failed");
                tracing::debug!("install invocation error: {}", e);
                return Err(CairnError::InstallFailed {
                    manager: config.package_manager.clone(),
                    code: None,
                });
            }
        };

        // Checkpoint 4: inspect the install's exit status
        if result.success {
            spinner.finish_success("Dependencies installed");
            ui.command_output(&result.stdout);
            ui.hint(&config.run_hint);
            Ok(BootstrapReport {
                runtime_path,
                runtime_version,
                manager_path,
                requirement_count,
                install: result,
            })
        } else {
            spinner.finish_error("Dependency install failed");
            for line in install::output_tail(&result, FAILURE_TAIL_LINES) {
                ui.status(&format!("  {}", line));
            }
            Err(CairnError::InstallFailed {
                manager: config.package_manager.clone(),
                code: result.exit_code,
            })
        }
    }
}

fn found_line(tool: &str, version: &Option<String>, path: &Path) -> String {
    match version {
        Some(v) => format!("{} {} ({})", tool, v, path.display()),
        None => format!("{} ({})", tool, path.display()),
    }
}

fn install_line(count: Option<usize>, manifest: &Path) -> String {
    match count {
        Some(1) => format!("Installing 1 dependency from {}...", manifest.display()),
        Some(n) => format!("Installing {} dependencies from {}...", n, manifest.display()),
        None => format!("Installing dependencies from {}...", manifest.display()),
    }
}
