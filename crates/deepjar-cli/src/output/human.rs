//! Human-readable diagnostics on stderr.

use console::Term;
use console::style;

/// Writes warnings and errors to stderr, separate from the tree on stdout.
pub struct HumanReporter {
    use_colors: bool,
    term: Term,
}

impl HumanReporter {
    pub fn new() -> Self {
        Self {
            use_colors: console::colors_enabled_stderr(),
            term: Term::stderr(),
        }
    }

    pub fn warning(&self, message: &str) {
        let _ = self.term.write_line(&self.warning_line(message));
    }

    pub fn error(&self, error: &anyhow::Error) {
        let _ = self.term.write_line(&self.error_line(error));
    }

    fn warning_line(&self, message: &str) -> String {
        if self.use_colors {
            format!("{} {message}", style("WARNING:").yellow().bold())
        } else {
            format!("WARNING: {message}")
        }
    }

    fn error_line(&self, error: &anyhow::Error) -> String {
        if self.use_colors {
            format!("{} {error:?}", style("ERROR:").red().bold())
        } else {
            format!("ERROR: {error:?}")
        }
    }
}

impl Default for HumanReporter {
    fn default() -> Self {
        Self::new()
    }
}
