//! Terminal colors for the tree.

use console::style;
use deepjar_core::Decorator;

/// Colors tree segments with `console`.
///
/// Styling is dropped automatically when colors are disabled for stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDecorator;

impl Decorator for ConsoleDecorator {
    fn archive_name(&self, name: &str) -> String {
        style(name).blue().bright().to_string()
    }

    fn content_name(&self, name: &str) -> String {
        style(name).green().to_string()
    }

    fn closing_name(&self, name: &str) -> String {
        style(name).black().bright().to_string()
    }

    fn notice(&self, text: &str) -> String {
        style(text).yellow().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_colors_disabled() {
        console::set_colors_enabled(false);
        let decorator = ConsoleDecorator;
        assert_eq!(decorator.archive_name("a.jar"), "a.jar");
        assert_eq!(decorator.content_name("b.txt"), "b.txt");
        assert_eq!(decorator.closing_name("a.jar"), "a.jar");
        assert_eq!(decorator.notice("[ skipped ]"), "[ skipped ]");
    }
}
