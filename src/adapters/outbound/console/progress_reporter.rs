use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on
/// stdout. Warnings and completion messages are colored when stderr is a
/// terminal. A quiet reporter keeps only the warnings.
pub struct StderrProgressReporter {
    colored: bool,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
            quiet: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::new()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_error(&self, message: &str) {
        if self.colored {
            eprintln!("{}", message.yellow());
        } else {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.colored {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }
}
