//! Show command implementation.
//!
//! `gitgate show` reports what was detected without judging it: the exit
//! code is zero whether or not git passes the gate.

use crate::error::Result;
use crate::requirements::VersionGate;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    gate: VersionGate,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(gate: VersionGate) -> Self {
        Self { gate }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let assessment = self.gate.check();

        let detected = match &assessment.outcome {
            Ok(version) => version.to_string(),
            Err(_) => "unknown".to_string(),
        };

        ui.field("Program", &self.gate.program().display().to_string());
        ui.field("Detected", &detected);
        ui.field("Minimum", &self.gate.minimum().to_string());
        ui.field("Status", assessment.status().as_str());

        Ok(CommandResult::success())
    }
}
