//! The git version gate.
//!
//! [`VersionGate`] runs `git --version`, reads the banner and compares it
//! against a minimum. It holds only immutable settings, so repeated calls
//! against an unchanged system always give the same answer.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::GitSettings;
use crate::error::{GitGateError, Result};

use super::hints::{self, Platform};
use super::probe::read_version_banner;
use super::status::{emit, Assessment, GateEvent};
use super::version::{parse_banner, MinimumVersion, GIT_MARKER};
use super::GateError;

/// Checks that git is installed and at least a minimum version.
#[derive(Debug, Clone)]
pub struct VersionGate {
    program: PathBuf,
    marker: String,
    minimum: MinimumVersion,
    /// Guidance set by the caller. Otherwise derived from `minimum`.
    install_hint: Option<String>,
}

impl Default for VersionGate {
    fn default() -> Self {
        Self::git()
    }
}

impl VersionGate {
    /// Gate for `git` on PATH with the default minimum.
    pub fn git() -> Self {
        Self::new("git")
    }

    /// Gate for the git binary at `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            marker: GIT_MARKER.to_string(),
            minimum: MinimumVersion::GIT_DEFAULT,
            install_hint: None,
        }
    }

    /// Build a gate from config settings.
    ///
    /// `program_override` (from the command line or environment) takes
    /// precedence over the configured program.
    pub fn from_settings(settings: &GitSettings, program_override: Option<&Path>) -> Result<Self> {
        let program = program_override
            .map(Path::to_path_buf)
            .or_else(|| settings.program.clone())
            .unwrap_or_else(|| PathBuf::from("git"));

        let mut gate = Self::new(program);
        if let Some(minimum) = &settings.minimum {
            let minimum = minimum
                .parse::<MinimumVersion>()
                .map_err(|message| GitGateError::ConfigValidationError {
                    message: format!("git.minimum: {}", message),
                })?;
            gate = gate.with_minimum(minimum);
        }
        if let Some(hint) = &settings.install_hint {
            gate = gate.with_install_hint(hint.clone());
        }
        Ok(gate)
    }

    /// Require `minimum` instead of the default.
    pub fn with_minimum(mut self, minimum: MinimumVersion) -> Self {
        self.minimum = minimum;
        self
    }

    /// Replace the install/upgrade guidance text.
    pub fn with_install_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// The program that is invoked.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The oldest accepted version.
    pub fn minimum(&self) -> MinimumVersion {
        self.minimum
    }

    /// The install/upgrade guidance text.
    pub fn install_hint(&self) -> String {
        match &self.install_hint {
            Some(hint) => hint.clone(),
            None => hints::install_git(Platform::current(), self.minimum),
        }
    }

    /// Validate the installed tool, logging any problems.
    pub fn validate(&self) -> std::result::Result<(), GateError> {
        self.validate_with(read_version_banner)
    }

    /// Like [`validate`](Self::validate) but with a custom banner reader.
    pub fn validate_with<F>(&self, read_banner: F) -> std::result::Result<(), GateError>
    where
        F: Fn(&Path) -> io::Result<String>,
    {
        let assessment = self.check_with(read_banner);
        emit(&assessment.events);
        assessment.outcome.map(|_| ())
    }

    /// Run the tool and assess it without logging.
    pub fn check(&self) -> Assessment {
        self.check_with(read_version_banner)
    }

    /// Like [`check`](Self::check) but with a custom banner reader.
    pub fn check_with<F>(&self, read_banner: F) -> Assessment
    where
        F: Fn(&Path) -> io::Result<String>,
    {
        match read_banner(&self.program) {
            Ok(output) => self.assess(&output),
            Err(err) => Assessment::failed(
                GateError::NotInstalled,
                vec![GateEvent::ExecutionFailed {
                    program: self.program.clone(),
                    reason: err.to_string(),
                }],
            ),
        }
    }

    /// Decide whether a captured banner passes the gate.
    ///
    /// A banner without the marker fails quietly. A banner that has the
    /// marker but can't be parsed, or that reports an old version, also
    /// carries the install hint.
    pub fn assess(&self, output: &str) -> Assessment {
        if !output.to_lowercase().contains(&self.marker.to_lowercase()) {
            return Assessment::failed(GateError::NotInstalled, Vec::new());
        }

        let Some(version) = parse_banner(output, &self.marker) else {
            return Assessment::failed(GateError::NotInstalled, vec![self.hint_event()]);
        };
        tracing::debug!("Found git {}", version);

        if self.minimum.is_met_by(version) {
            return Assessment::passed(version);
        }

        Assessment::failed(
            GateError::VersionTooLow {
                minimum: self.minimum,
            },
            vec![
                GateEvent::MinimumNotMet {
                    found: version,
                    minimum: self.minimum,
                },
                self.hint_event(),
            ],
        )
    }

    fn hint_event(&self) -> GateEvent {
        GateEvent::InstallHint {
            text: self.install_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::VersionInfo;
    use std::cell::Cell;

    fn banner(text: &'static str) -> impl Fn(&Path) -> io::Result<String> {
        move |_| Ok(text.to_string())
    }

    fn not_found(_: &Path) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }

    #[test]
    fn output_without_marker_is_not_installed() {
        let gate = VersionGate::git();
        let result = gate.validate_with(banner("zsh: command not found: git"));
        assert_eq!(result, Err(GateError::NotInstalled));
    }

    #[test]
    fn exact_minimum_passes() {
        let gate = VersionGate::git();
        let assessment = gate.check_with(banner("git version 2.01.0 (Apple Git-1)"));
        assert_eq!(assessment.outcome, Ok(VersionInfo::new(2, 1)));
        assert!(gate.validate_with(banner("git version 2.01.0 (Apple Git-1)")).is_ok());
    }

    #[test]
    fn older_major_is_too_low() {
        let gate = VersionGate::git();
        let result = gate.validate_with(banner("git version 1.99.0"));
        assert_eq!(
            result,
            Err(GateError::VersionTooLow {
                minimum: MinimumVersion::new(2, 1)
            })
        );
    }

    #[test]
    fn older_minor_is_too_low() {
        let gate = VersionGate::git();
        let result = gate.validate_with(banner("git version 2.00.0"));
        assert!(matches!(result, Err(GateError::VersionTooLow { .. })));
    }

    #[test]
    fn newer_major_passes() {
        let gate = VersionGate::git();
        assert!(gate.validate_with(banner("git version 3.5.0")).is_ok());
    }

    #[test]
    fn execution_error_skips_parsing() {
        let gate = VersionGate::git();
        let assessment = gate.check_with(not_found);
        assert_eq!(assessment.outcome, Err(GateError::NotInstalled));
        assert_eq!(assessment.events.len(), 1);
        assert!(matches!(
            assessment.events[0],
            GateEvent::ExecutionFailed { .. }
        ));
        assert!(assessment.install_hint().is_none());
    }

    #[test]
    fn too_low_reports_error_then_hint() {
        let gate = VersionGate::git().with_install_hint("upgrade please");
        let assessment = gate.assess("git version 1.99.0");
        assert_eq!(
            assessment.events,
            vec![
                GateEvent::MinimumNotMet {
                    found: VersionInfo::new(1, 99),
                    minimum: MinimumVersion::new(2, 1),
                },
                GateEvent::InstallHint {
                    text: "upgrade please".to_string()
                },
            ]
        );
    }

    #[test]
    fn unparseable_banner_carries_hint() {
        let gate = VersionGate::git();
        let assessment = gate.assess("git version 2.1.0");
        assert_eq!(assessment.outcome, Err(GateError::NotInstalled));
        assert!(assessment.install_hint().is_some());
    }

    #[test]
    fn missing_marker_reports_nothing() {
        let gate = VersionGate::git();
        let assessment = gate.assess("hg version 6.5");
        assert!(assessment.events.is_empty());
    }

    #[test]
    fn passing_banner_reports_nothing() {
        let gate = VersionGate::git();
        let assessment = gate.assess("git version 2.43.0\n");
        assert!(assessment.is_satisfied());
        assert!(assessment.events.is_empty());
    }

    #[test]
    fn repeated_validation_is_stable() {
        let gate = VersionGate::git();
        let calls = Cell::new(0);
        let reader = |_: &Path| {
            calls.set(calls.get() + 1);
            Ok::<_, io::Error>("git version 2.00.0".to_string())
        };
        let first = gate.validate_with(reader);
        let second = gate.validate_with(reader);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn reader_receives_program() {
        let gate = VersionGate::new("/opt/git/bin/git");
        let assessment = gate.check_with(|program: &Path| {
            assert_eq!(program, Path::new("/opt/git/bin/git"));
            Ok("git version 2.43.0".to_string())
        });
        assert!(assessment.is_satisfied());
    }

    #[test]
    fn custom_minimum_is_used() {
        let gate = VersionGate::git().with_minimum(MinimumVersion::new(2, 40));
        assert!(!gate.assess("git version 2.39.2").is_satisfied());
        assert!(gate.assess("git version 2.40.0").is_satisfied());
    }

    #[test]
    fn explicit_hint_survives_minimum_change() {
        let hinted_first = VersionGate::git()
            .with_install_hint("ask IT")
            .with_minimum(MinimumVersion::new(2, 40));
        let hinted_last = VersionGate::git()
            .with_minimum(MinimumVersion::new(2, 40))
            .with_install_hint("ask IT");
        assert_eq!(hinted_first.install_hint(), "ask IT");
        assert_eq!(hinted_last.install_hint(), "ask IT");
    }

    #[test]
    fn default_hint_names_current_minimum() {
        let gate = VersionGate::git().with_minimum(MinimumVersion::new(2, 40));
        assert!(gate.install_hint().contains("2.40"));
    }

    #[test]
    fn from_settings_prefers_override() {
        let settings = GitSettings {
            program: Some(PathBuf::from("/usr/local/bin/git")),
            ..Default::default()
        };
        let gate = VersionGate::from_settings(&settings, Some(Path::new("/custom/git"))).unwrap();
        assert_eq!(gate.program(), Path::new("/custom/git"));

        let gate = VersionGate::from_settings(&settings, None).unwrap();
        assert_eq!(gate.program(), Path::new("/usr/local/bin/git"));
    }

    #[test]
    fn from_settings_defaults() {
        let gate = VersionGate::from_settings(&GitSettings::default(), None).unwrap();
        assert_eq!(gate.program(), Path::new("git"));
        assert_eq!(gate.minimum(), MinimumVersion::GIT_DEFAULT);
    }

    #[test]
    fn from_settings_parses_minimum() {
        let settings = GitSettings {
            minimum: Some("2.30".to_string()),
            install_hint: Some("ask IT".to_string()),
            ..Default::default()
        };
        let gate = VersionGate::from_settings(&settings, None).unwrap();
        assert_eq!(gate.minimum(), MinimumVersion::new(2, 30));
        assert_eq!(gate.assess("git version 2.29.0").install_hint(), Some("ask IT"));
    }

    #[test]
    fn from_settings_rejects_bad_minimum() {
        let settings = GitSettings {
            minimum: Some("two".to_string()),
            ..Default::default()
        };
        let err = VersionGate::from_settings(&settings, None).unwrap_err();
        assert!(matches!(err, GitGateError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("git.minimum"));
    }
}
