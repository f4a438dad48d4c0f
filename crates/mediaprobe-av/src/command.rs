//! Builder for external tool invocations and the runner seam that executes them.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output captured from a finished tool execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: Vec<u8>,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

impl ToolOutput {
    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// A program path plus its arguments.
///
/// # Example
///
/// ```no_run
/// use mediaprobe_av::{CommandRunner, SystemRunner, ToolCommand};
///
/// let mut cmd = ToolCommand::new("mediainfo");
/// cmd.arg("--Output=JSON").arg("-f").arg("/path/to/video.mkv");
/// let output = SystemRunner.run(&cmd)?;
/// println!("{}", String::from_utf8_lossy(&output.stdout));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path or name.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl AsRef<OsStr>>) -> &mut Self {
        self.args
            .extend(iter.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// The program that will be executed.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// The arguments passed to the program.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Short name used in error messages: the file name of the program.
    pub fn display_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }
}

/// Executes a [`ToolCommand`] and waits for it to finish.
///
/// Spawn failures are reported as `Err` with the OS error kind intact, so
/// callers can tell "not found" apart from other launch problems. A process
/// that ran, whatever its exit status, is reported as `Ok`.
pub trait CommandRunner: Send + Sync {
    /// Run the command to completion, capturing stdout and stderr.
    fn run(&self, command: &ToolCommand) -> std::io::Result<ToolOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &ToolCommand) -> std::io::Result<ToolOutput> {
        (**self).run(command)
    }
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> std::io::Result<ToolOutput> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            program = %command.program().display(),
            args = ?command.get_args(),
            "running external tool"
        );

        let output = Command::new(command.program())
            .args(command.get_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ToolOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_args() {
        let mut cmd = ToolCommand::new("mediainfo");
        cmd.arg("--Output=JSON").args(["-f", "a.mkv"]);
        assert_eq!(cmd.program(), Path::new("mediainfo"));
        assert_eq!(cmd.get_args(), ["--Output=JSON", "-f", "a.mkv"]);
    }

    #[test]
    fn display_name_uses_file_name() {
        let cmd = ToolCommand::new("/opt/mediainfo/bin/mediainfo");
        assert_eq!(cmd.display_name(), "mediainfo");
    }

    #[test]
    fn success_requires_zero_exit() {
        let mut out = ToolOutput::default();
        assert!(!out.success());
        out.exit_code = Some(0);
        assert!(out.success());
        out.exit_code = Some(255);
        assert!(!out.success());
    }

    #[test]
    fn execute_nonexistent_tool() {
        let err = SystemRunner
            .run(&ToolCommand::new("nonexistent_tool_xyz_12345"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn execute_echo() {
        let mut cmd = ToolCommand::new("echo");
        cmd.arg("hello");
        match SystemRunner.run(&cmd) {
            Ok(out) => {
                assert!(out.success());
                assert!(String::from_utf8_lossy(&out.stdout).contains("hello"));
            }
            Err(_) => {
                // On some minimal environments echo may not exist; skip.
            }
        }
    }
}
