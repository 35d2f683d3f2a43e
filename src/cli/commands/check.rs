//! Check command implementation.
//!
//! `gitgate check` runs the version gate and exits non-zero when git is
//! missing or too old.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::requirements::{emit, logs_at, Assessment, EventLevel, GateStatus, VersionGate};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code when the gate rejects git.
const GATE_FAILED: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    gate: VersionGate,
    args: CheckArgs,
}

/// JSON report printed by `check --json`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub program: String,
    pub minimum: String,
    pub status: GateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl CheckReport {
    fn new(gate: &VersionGate, assessment: &Assessment) -> Self {
        Self {
            program: gate.program().display().to_string(),
            minimum: gate.minimum().to_string(),
            status: assessment.status(),
            version: assessment.outcome.as_ref().ok().map(|v| v.to_string()),
        }
    }
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(gate: VersionGate, args: CheckArgs) -> Self {
        Self { gate, args }
    }

    fn report_text(&self, assessment: &Assessment, ui: &mut dyn UserInterface) {
        match &assessment.outcome {
            Ok(version) => ui.success(&format!(
                "git {} meets the minimum of {}",
                version,
                self.gate.minimum()
            )),
            Err(err) => {
                ui.error(&err.to_string());
                // The hint is only skipped when the log already showed it.
                let hint_logged =
                    assessment.install_hint().is_some() && logs_at(EventLevel::Info);
                if !hint_logged {
                    ui.hint(&self.gate.install_hint());
                }
            }
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let assessment = self.gate.check();
        emit(&assessment.events);

        if self.args.json {
            let report = CheckReport::new(&self.gate, &assessment);
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&json);
        } else {
            self.report_text(&assessment, ui);
        }

        if assessment.is_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(GATE_FAILED))
        }
    }
}
