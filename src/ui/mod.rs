//! Terminal output components.
//!
//! All human-readable text, diagnostics included, goes to standard
//! output: that is the original bootstrap script's only text channel and
//! existing callers read it there.

pub mod output;
pub mod spinner;
pub mod theme;

pub use output::{Output, OutputMode};
pub use spinner::ProgressSpinner;
pub use theme::{should_use_colors, CairnTheme};

/// Facade over theme, output writer, and spinner creation.
#[derive(Debug, Clone)]
pub struct Ui {
    theme: CairnTheme,
    output: Output,
    interactive: bool,
}

impl Ui {
    /// Create a UI for the given interactivity and verbosity.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CairnTheme::new()
        } else {
            CairnTheme::plain()
        };
        Self {
            theme,
            output: Output::new(mode),
            interactive,
        }
    }

    /// The active theme.
    pub fn theme(&self) -> &CairnTheme {
        &self.theme
    }

    /// Write a plain status line.
    pub fn status(&self, msg: &str) {
        self.output.println(msg);
    }

    /// Write a success line.
    pub fn success(&self, msg: &str) {
        self.output.println(&self.theme.format_success(msg));
    }

    /// Write an error line. Shown even in silent mode.
    pub fn error(&self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    /// Write a contextual hint line.
    pub fn hint(&self, msg: &str) {
        self.output.println(&self.theme.format_hint(msg));
    }

    /// Pass through captured package-manager output (verbose mode only).
    pub fn command_output(&self, out: &str) {
        self.output.command_output(out);
    }

    /// Create a spinner for a long-running step.
    ///
    /// Animates only in interactive runs; otherwise the message is
    /// printed once as a status line and the finish message becomes a
    /// plain line.
    pub fn spinner(&self, msg: &str) -> ProgressSpinner {
        // indicatif draws to stderr; without a terminal there its finish
        // message would vanish, so fall back to plain lines.
        let tty = console::Term::stderr().is_term();
        if self.interactive && tty && self.output.mode().shows_spinners() {
            ProgressSpinner::new(msg, self.theme.clone())
        } else {
            self.status(msg);
            ProgressSpinner::hidden(self.theme.clone(), self.output.mode().shows_status())
        }
    }
}

/// Check if running under a CI system.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
