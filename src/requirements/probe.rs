//! Reading a tool's version banner.
//!
//! The tool is spawned directly (no shell) with a single `--version`
//! argument. Stdout and stderr are fully buffered and joined, stdout
//! first, so a banner printed to either stream is found.

use std::io;
use std::path::Path;
use std::process::Command;

/// The only argument ever passed to the probed tool.
pub const VERSION_FLAG: &str = "--version";

/// Run `<program> --version` and return its combined output.
///
/// A spawn failure or a non-zero exit status is reported as an error; the
/// output of a failed run is discarded.
pub fn read_version_banner(program: &Path) -> io::Result<String> {
    tracing::debug!("Running {} {}", program.display(), VERSION_FLAG);

    let output = Command::new(program).arg(VERSION_FLAG).output()?;

    if !output.status.success() {
        return Err(io::Error::other(format!(
            "{} {} exited with {}",
            program.display(),
            VERSION_FLAG,
            output.status
        )));
    }

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);
    Ok(String::from_utf8_lossy(&combined).into_owned())
}
