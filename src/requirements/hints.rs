//! Install and upgrade guidance for git.

use super::version::MinimumVersion;

/// Platform used to pick install instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Guidance text for installing or upgrading git on `platform`.
pub fn install_git(platform: Platform, minimum: MinimumVersion) -> String {
    let how = match platform {
        Platform::MacOS => "run `xcode-select --install` or `brew install git`",
        Platform::Linux => "use your package manager, e.g. `apt install git` or `dnf install git`",
        Platform::Windows => "run `winget install --id Git.Git -e` or use the installer",
    };
    format!(
        "git {} or newer is required. To install or upgrade, {}. See https://git-scm.com/downloads",
        minimum, how
    )
}
