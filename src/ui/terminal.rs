//! Terminal UI implementation.

use super::theme::GateTheme;
use super::{OutputMode, UserInterface};

/// Writes styled output to stdout, and errors to stderr.
pub struct TerminalUI {
    mode: OutputMode,
    theme: GateTheme,
}

impl TerminalUI {
    /// Create a terminal UI.
    pub fn new(mode: OutputMode, theme: GateTheme) -> Self {
        Self { mode, theme }
    }
}

impl UserInterface for TerminalUI {
    fn field(&mut self, key: &str, value: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_field(key, value));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", self.theme.format_hint(msg));
        }
    }

    fn data(&mut self, payload: &str) {
        println!("{}", payload);
    }
}

/// Create the UI for this process.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, GateTheme::detect(no_color)))
}
