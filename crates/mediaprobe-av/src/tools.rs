//! External tool detection.

use crate::command::{CommandRunner, ToolCommand, ToolOutput};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Exit status `mediainfo` reports when started without any file argument.
const EMPTY_INVOCATION_EXIT_CODE: i32 = 255;

/// Outcome of launching a tool with no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// The executable does not exist at the configured location or on `PATH`.
    Missing,
    /// The tool ran and rejected the empty invocation with exit status 255.
    RejectedEmptyInvocation,
    /// Anything else: the tool ran, or failed to launch for a reason other
    /// than being absent.
    Ran,
}

impl Availability {
    /// Classify the result of a bare launch.
    ///
    /// Only a spawn error of kind [`io::ErrorKind::NotFound`] counts as
    /// missing.
    pub fn classify(result: &io::Result<ToolOutput>) -> Self {
        match result {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Availability::Missing,
            Err(_) => Availability::Ran,
            Ok(out) if out.exit_code == Some(EMPTY_INVOCATION_EXIT_CODE) => {
                Availability::RejectedEmptyInvocation
            }
            Ok(_) => Availability::Ran,
        }
    }

    /// Whether the tool counts as installed.
    pub fn is_installed(self) -> bool {
        !matches!(self, Availability::Missing)
    }
}

/// Launch `binary` with no arguments and classify the outcome.
///
/// Spawns a subprocess on every call.
pub fn check_availability<R: CommandRunner + ?Sized>(binary: &Path, runner: &R) -> Availability {
    let result = runner.run(&ToolCommand::new(binary));
    let availability = Availability::classify(&result);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        binary = %binary.display(),
        ?availability,
        "checked tool availability"
    );

    availability
}

/// Information about an external tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check a tool and collect a report about it.
///
/// `version_arg` is passed on its own to read the version; the last non-empty
/// line of its stdout is kept since `mediainfo` prints a banner line first.
pub fn check_tool<R: CommandRunner + ?Sized>(
    binary: &Path,
    version_arg: &str,
    runner: &R,
) -> ToolInfo {
    let name = ToolCommand::new(binary).display_name();

    if !check_availability(binary, runner).is_installed() {
        return ToolInfo {
            name,
            available: false,
            version: None,
            path: None,
        };
    }

    let mut cmd = ToolCommand::new(binary);
    cmd.arg(version_arg);
    let version = match runner.run(&cmd) {
        Ok(output) if output.success() => String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .rev()
            .find(|l| !l.is_empty())
            .map(|s| s.to_string()),
        _ => None,
    };

    ToolInfo {
        name,
        available: true,
        version,
        path: resolve_path(binary),
    }
}

/// Resolve a configured binary to an executable path, searching `PATH` for
/// bare names.
pub fn resolve_path(binary: &Path) -> Option<PathBuf> {
    which::which(binary).ok()
}
