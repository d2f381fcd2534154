//! Cairn - dependency bootstrapper.
//!
//! Cairn prepares the environment for an application before its first
//! launch: it verifies that a runtime and its package manager are
//! reachable on the command search path, then delegates installation of
//! the dependencies declared in a manifest file to the package manager.
//!
//! # Modules
//!
//! - [`bootstrap`] - The checkpoint sequence and its injectable collaborators
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Bootstrap configuration (tool names, manifest, hints)
//! - [`error`] - Error types and result alias
//! - [`install`] - Package manager invocation
//! - [`manifest`] - Requirement manifest reading
//! - [`probe`] - Executable presence checks on the search path
//! - [`ui`] - Terminal output, theme, and spinners
//!
//! # Example
//!
//! ```no_run
//! use cairn::bootstrap::{default_context, Bootstrapper};
//! use cairn::config::BootstrapConfig;
//! use cairn::ui::{OutputMode, Ui};
//!
//! let config = BootstrapConfig::default();
//! let ui = Ui::new(false, OutputMode::Normal);
//! let bootstrapper = Bootstrapper::new(&config, default_context());
//! let report = bootstrapper.run(&ui)?;
//! println!("installed from {}", report.manager_path.display());
//! # Ok::<(), cairn::CairnError>(())
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod manifest;
pub mod probe;
pub mod ui;

pub use error::{CairnError, Result};
