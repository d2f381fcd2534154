//! Library-level tests for the bootstrap API with injected collaborators.

use cairn::bootstrap::{BootstrapContext, Bootstrapper};
use cairn::config::BootstrapConfig;
use cairn::install::InstallResult;
use cairn::ui::{OutputMode, Ui};
use cairn::{CairnError, Result};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

fn silent_ui() -> Ui {
    Ui::new(false, OutputMode::Silent)
}

fn ok_install() -> InstallResult {
    InstallResult::success(String::new(), String::new(), Duration::from_millis(1))
}

/// Literal scenario from the original tool: runtime present, package
/// manager present, manifest lists two entries, install exits 0.
#[test]
fn two_entry_manifest_with_clean_install_succeeds() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("requirements.txt");
    fs::write(&manifest, "PyQt5\nrequests\n").unwrap();

    let config = BootstrapConfig::default().with_manifest(&manifest);

    let resolve = |tool: &str| -> Option<PathBuf> { Some(PathBuf::from(format!("/opt/{}", tool))) };
    let version = |_: &Path| -> Option<String> { Some("3.9.7".to_string()) };
    let run = |_: &Path, _: &[String]| -> Result<InstallResult> { Ok(ok_install()) };

    let bootstrapper = Bootstrapper::new(
        &config,
        BootstrapContext {
            resolve_tool: &resolve,
            tool_version: &version,
            run_install: &run,
        },
    );

    let report = bootstrapper.run(&silent_ui()).unwrap();
    assert_eq!(report.requirement_count, Some(2));
    assert_eq!(report.runtime_version, Some("3.9.7".to_string()));
    assert!(report.install.success);
}

/// Literal scenario: runtime absent. The package manager is never probed.
#[test]
fn absent_runtime_is_reported_before_anything_else() {
    let manager_probed = Cell::new(false);

    let config = BootstrapConfig::default();
    let runtime = config.runtime.clone();

    let resolve = |tool: &str| -> Option<PathBuf> {
        if tool != runtime {
            manager_probed.set(true);
        }
        None
    };
    let version = |_: &Path| -> Option<String> { None };
    let run = |_: &Path, _: &[String]| -> Result<InstallResult> { Ok(ok_install()) };

    let bootstrapper = Bootstrapper::new(
        &config,
        BootstrapContext {
            resolve_tool: &resolve,
            tool_version: &version,
            run_install: &run,
        },
    );

    let err = bootstrapper.run(&silent_ui()).unwrap_err();
    match &err {
        CairnError::MissingRuntime { runtime: name, .. } => assert_eq!(name, &config.runtime),
        other => panic!("expected MissingRuntime, got {:?}", other),
    }
    assert!(!manager_probed.get());
    // The diagnostic names what's missing.
    assert!(err.to_string().contains("not found"));
}

/// The install step is safely re-runnable: a second run through the same
/// context succeeds just like the first.
#[test]
fn bootstrap_run_is_repeatable() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("requirements.txt");
    fs::write(&manifest, "requests\n").unwrap();

    let config = BootstrapConfig::default().with_manifest(&manifest);
    let installs = Cell::new(0u32);

    let resolve = |tool: &str| -> Option<PathBuf> { Some(PathBuf::from(format!("/opt/{}", tool))) };
    let version = |_: &Path| -> Option<String> { None };
    let run = |_: &Path, _: &[String]| -> Result<InstallResult> {
        installs.set(installs.get() + 1);
        Ok(ok_install())
    };

    let ctx = BootstrapContext {
        resolve_tool: &resolve,
        tool_version: &version,
        run_install: &run,
    };
    let bootstrapper = Bootstrapper::new(&config, ctx);

    assert!(bootstrapper.run(&silent_ui()).is_ok());
    assert!(bootstrapper.run(&silent_ui()).is_ok());
    assert_eq!(installs.get(), 2);
}

/// Every failure kind is terminal and distinct internally, even though
/// the process boundary collapses them to one exit code.
#[test]
fn failure_kinds_stay_distinct_in_the_api() {
    let config = BootstrapConfig::default();
    let runtime = config.runtime.clone();

    // Runtime present, manager absent.
    let resolve = |tool: &str| -> Option<PathBuf> {
        if tool == runtime {
            Some(PathBuf::from("/opt/python3"))
        } else {
            None
        }
    };
    let version = |_: &Path| -> Option<String> { None };
    let run = |_: &Path, _: &[String]| -> Result<InstallResult> { Ok(ok_install()) };

    let bootstrapper = Bootstrapper::new(
        &config,
        BootstrapContext {
            resolve_tool: &resolve,
            tool_version: &version,
            run_install: &run,
        },
    );

    let err = bootstrapper.run(&silent_ui()).unwrap_err();
    assert!(matches!(err, CairnError::MissingPackageManager { .. }));

    // Both present, install exits 2.
    let resolve_all =
        |tool: &str| -> Option<PathBuf> { Some(PathBuf::from(format!("/opt/{}", tool))) };
    let run_fail = |_: &Path, _: &[String]| -> Result<InstallResult> {
        Ok(InstallResult::failure(
            Some(2),
            String::new(),
            String::new(),
            Duration::from_millis(1),
        ))
    };

    let bootstrapper = Bootstrapper::new(
        &config,
        BootstrapContext {
            resolve_tool: &resolve_all,
            tool_version: &version,
            run_install: &run_fail,
        },
    );

    let err = bootstrapper.run(&silent_ui()).unwrap_err();
    assert!(matches!(
        err,
        CairnError::InstallFailed { code: Some(2), .. }
    ));
}
