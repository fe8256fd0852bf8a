//! Output styling and diagnostics.

mod decorator;
mod human;

pub use decorator::ConsoleDecorator;
pub use human::HumanReporter;

use crate::cli::ColorWhen;

/// Applies the `--color` choice to both output streams.
pub fn configure_colors(when: ColorWhen) {
    match when {
        ColorWhen::Auto => {}
        ColorWhen::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorWhen::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
    }
}
