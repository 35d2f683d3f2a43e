//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use gitgate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("git 2.43 is installed");
//! assert!(ui.successes().contains(&"git 2.43 is installed".to_string()));
//! ```

use super::UserInterface;

/// Captures UI output instead of printing it.
#[derive(Debug, Default)]
pub struct MockUI {
    fields: Vec<(String, String)>,
    successes: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    data: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn data(&self) -> &[String] {
        &self.data
    }
}

impl UserInterface for MockUI {
    fn field(&mut self, key: &str, value: &str) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }

    fn data(&mut self, payload: &str) {
        self.data.push(payload.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.field("k", "v");
        ui.success("s");
        ui.error("e");
        ui.hint("h");
        UserInterface::data(&mut ui, "{}");

        assert_eq!(ui.fields(), [("k".to_string(), "v".to_string())]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.hints(), ["h"]);
        assert_eq!(ui.data(), ["{}"]);
    }
}
