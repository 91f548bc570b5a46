//! Terminal presentation: record display and bulk job progress
//!
//! The engine reports a 0-100 percentage after every manifest entry. This
//! module renders it:
//! - Interactive progress bar using indicatif (default)
//! - Silent no-op reporter for `--quiet`
//!
//! Commands pick an implementation once and feed it through the
//! [`ProgressReporter`] trait.

pub mod display;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for long-running operations
pub trait ProgressReporter: Send + Sync {
    /// Move to `percent` complete (0-100)
    fn set_percent(&mut self, percent: f64);

    /// Finish successfully
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress bar over 0..100
pub struct InteractiveProgressReporter {
    bar: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        // The template is static; fall back to the default bar if it ever
        // fails to parse
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos:>3}% {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar.set_message("installing packages");
        Self { bar }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn set_percent(&mut self, percent: f64) {
        self.bar.set_position(percent_to_position(percent));
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.bar.abandon();
    }
}

/// No-op reporter used with `--quiet`
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn set_percent(&mut self, _percent: f64) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Pick a reporter for the given verbosity
pub fn reporter(quiet: bool) -> Box<dyn ProgressReporter> {
    if quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_to_position(percent: f64) -> u64 {
    percent.clamp(0.0, 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_reporter_no_ops() {
        let mut reporter = SilentProgressReporter;

        reporter.set_percent(50.0);
        reporter.finish();
        reporter.abandon();
    }

    #[test]
    fn test_interactive_progress_reporter_position() {
        let mut reporter = InteractiveProgressReporter::new();
        reporter.set_percent(100.0 / 3.0);
        assert_eq!(reporter.bar.position(), 33);
        reporter.set_percent(100.0);
        assert_eq!(reporter.bar.position(), 100);
    }

    #[test]
    fn test_reporter_selection() {
        let mut quiet = reporter(true);
        quiet.set_percent(100.0);
        quiet.finish();

        let mut interactive = reporter(false);
        interactive.set_percent(50.0);
        interactive.abandon();
    }

    #[test]
    fn test_percent_to_position_clamps() {
        assert_eq!(percent_to_position(-5.0), 0);
        assert_eq!(percent_to_position(66.6), 67);
        assert_eq!(percent_to_position(140.0), 100);
    }
}
