//! Terminal rendering for markdown output
//!
//! Recipe cards and lists are markdown; termimad styles them when color is
//! enabled and they are printed as is otherwise.

use anyhow::Result;
use recipebox_core::{Alert, AlertSeverity};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::DarkYellow);
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[33m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render a submission or command alert on its own line
    pub fn render_alert(&self, alert: &Alert) -> Result<()> {
        if self.rich_enabled {
            let color = match alert.severity {
                AlertSeverity::Success => "32",
                AlertSeverity::Error => "31",
            };
            print!("\x1b[{color}m{alert}\x1b[0m");
        } else {
            print!("{alert}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Title\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
        assert!(renderer
            .render_alert(&Alert::success("Recipe created successfully!"))
            .is_ok());
    }
}
