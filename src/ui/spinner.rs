//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::CairnTheme;

/// A progress spinner for the long-running install step.
///
/// In non-interactive contexts the spinner is created hidden and its
/// finish messages fall back to plain printed lines, so CI logs still
/// show the outcome.
pub struct ProgressSpinner {
    bar: ProgressBar,
    live: bool,
    announce: bool,
    theme: CairnTheme,
}

impl ProgressSpinner {
    /// Create a new live spinner with a message.
    pub fn new(message: &str, theme: CairnTheme) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            live: true,
            announce: true,
            theme,
        }
    }

    /// Create a spinner that doesn't animate (non-interactive or silent).
    ///
    /// `announce` controls whether finish messages are printed as plain
    /// lines; silent mode passes `false`.
    pub fn hidden(theme: CairnTheme, announce: bool) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            live: false,
            announce,
            theme,
        }
    }

    /// Stop the spinner with a success line.
    pub fn finish_success(&mut self, msg: &str) {
        let line = self.theme.format_success(msg);
        self.finish_with(line);
    }

    /// Stop the spinner with an error line.
    pub fn finish_error(&mut self, msg: &str) {
        let line = self.theme.format_error(msg);
        self.finish_with(line);
    }

    fn finish_with(&mut self, line: String) {
        if self.live {
            self.bar
                .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
            self.bar.finish_with_message(line);
        } else {
            self.bar.finish_and_clear();
            if self.announce {
                println!("{}", line);
            }
        }
    }
}
