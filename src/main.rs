//! Cairn CLI entry point.

use std::process::ExitCode;

use cairn::bootstrap::{default_context, Bootstrapper};
use cairn::cli::Cli;
use cairn::config::BootstrapConfig;
use cairn::ui::{is_ci, OutputMode, Ui};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("cairn=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cairn=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Cairn starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut config = BootstrapConfig::default();
    if let Some(manifest) = &cli.manifest {
        config = config.with_manifest(manifest);
    }

    let ui = Ui::new(!is_ci(), output_mode);
    let bootstrapper = Bootstrapper::new(&config, default_context());

    match bootstrapper.run(&ui) {
        Ok(report) => {
            tracing::debug!("install finished in {:?}", report.install.duration);
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Every failure kind maps to the same generic non-zero code;
            // existing callers only distinguish zero from non-zero.
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
