//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the result and any guidance.
    #[default]
    Normal,
    /// Show the result line only.
    Quiet,
    /// Print nothing to stdout except machine-readable data. Errors and
    /// log records still go to stderr.
    Silent,
}

impl From<crate::config::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::OutputMode) -> Self {
        match config_mode {
            crate::config::OutputMode::Normal => Self::Normal,
            crate::config::OutputMode::Quiet => Self::Quiet,
            crate::config::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows hints and other secondary text.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
