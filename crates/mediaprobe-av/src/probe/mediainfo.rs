//! MediaInfo-based media probing.
//!
//! Runs `mediainfo --Output=JSON -f <file>...` and normalizes whichever JSON
//! shape the installed version emits into [`MediaDescription`] records.

use super::legacy::{CategoryInfo, LegacyOutput};
use super::track::TrackListOutput;
use super::types::MediaDescription;
use crate::command::{CommandRunner, SystemRunner, ToolCommand};
use crate::config::ProbeConfig;
use crate::error::ProcessError;
use crate::tools::{self, Availability, ToolInfo};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Arguments placed before the file list on every probe.
const PROBE_ARGS: [&str; 2] = ["--Output=JSON", "-f"];

/// Argument that makes mediainfo print its version.
const VERSION_ARG: &str = "--Version";

/// A prober backed by the `mediainfo` CLI.
///
/// Each call is independent and blocking: one subprocess for the
/// availability check, one for the probe itself. No timeouts are applied.
#[derive(Debug, Clone)]
pub struct MediaInfoProber<R = SystemRunner> {
    config: ProbeConfig,
    runner: R,
}

impl MediaInfoProber<SystemRunner> {
    /// Create a new prober using the given configuration.
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }

    /// Create a prober that finds mediainfo on `PATH`.
    pub fn from_path() -> Self {
        Self::new(ProbeConfig::default())
    }
}

impl<R: CommandRunner> MediaInfoProber<R> {
    /// Create a prober that executes commands through `runner`.
    pub fn with_runner(config: ProbeConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// The configuration this prober was built with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Launch the binary without arguments and classify the outcome.
    pub fn availability(&self) -> Availability {
        tools::check_availability(&self.config.binary, &self.runner)
    }

    /// Whether the configured binary is reachable and runnable.
    ///
    /// Spawns a subprocess on every call; cache the answer if you need it
    /// often.
    pub fn is_installed(&self) -> bool {
        self.availability().is_installed()
    }

    /// Availability, version and resolved path of the configured binary.
    pub fn tool_info(&self) -> ToolInfo {
        tools::check_tool(&self.config.binary, VERSION_ARG, &self.runner)
    }

    /// Probe one file.
    ///
    /// Always returns a sequence; a single report is wrapped in a
    /// one-element vector.
    ///
    /// # Errors
    ///
    /// - [`Error::DependencyMissing`] if the binary is not installed. The
    ///   probe itself is not run.
    /// - [`Error::ToolFailed`] if mediainfo cannot be spawned or exits
    ///   unsuccessfully.
    /// - [`Error::Parse`] if its output is not a recognized JSON report.
    pub fn probe(&self, path: &Path) -> Result<Vec<MediaDescription>> {
        self.probe_many(&[path])
    }

    /// Probe several files with one mediainfo invocation.
    ///
    /// Reports come back in the order mediainfo emits them. An empty slice
    /// yields an empty vector without running anything.
    pub fn probe_many<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<MediaDescription>> {
        if paths.is_empty() {
            return Ok(Vec::new());
        }

        let cmd = self.command_for(paths);
        let tool = cmd.display_name();

        if !self.is_installed() {
            return Err(Error::dependency_missing(tool));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(tool = %tool, files = paths.len(), "probing with mediainfo");

        let output = self
            .runner
            .run(&cmd)
            .map_err(|e| Error::tool_failed(&tool, e))?;

        if !output.success() {
            return Err(Error::tool_failed(
                &tool,
                ProcessError::Exit {
                    code: output.exit_code,
                    stderr: output.stderr,
                },
            ));
        }

        decode_output(&output.stdout).map_err(|e| Error::parse_error(tool, e))
    }

    /// Build the probe command line for `paths`.
    pub fn command_for<P: AsRef<Path>>(&self, paths: &[P]) -> ToolCommand {
        let mut cmd = ToolCommand::new(&self.config.binary);
        cmd.args(PROBE_ARGS);
        cmd.args(paths.iter().map(|p| p.as_ref().as_os_str()));
        cmd
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Legacy reports wrap their tracks in `File` rather than `media`.
fn is_legacy(map: &Map<String, Value>) -> bool {
    !map.contains_key("media") && (map.contains_key("File") || map.contains_key("file"))
}

/// Normalize raw `mediainfo --Output=JSON` stdout.
///
/// A top-level array yields one track-list record per element in input
/// order; a single object yields a one-element vector. Objects that are
/// neither shape fail as a track list would.
pub fn decode_output(stdout: &[u8]) -> serde_json::Result<Vec<MediaDescription>> {
    match serde_json::from_slice::<Value>(stdout)? {
        Value::Array(items) => items.into_iter().map(decode_track_list).collect(),
        Value::Object(map) if is_legacy(&map) => {
            let legacy: LegacyOutput = serde_json::from_value(Value::Object(map))?;
            Ok(vec![CategoryInfo::from(legacy).into()])
        }
        other => Ok(vec![decode_track_list(other)?]),
    }
}

fn decode_track_list(value: Value) -> serde_json::Result<MediaDescription> {
    let output: TrackListOutput = serde_json::from_value(value)?;
    Ok(output.media.into())
}
