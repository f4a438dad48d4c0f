//! Probe configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Executable name looked up on `PATH` when no binary is configured.
pub const DEFAULT_MEDIAINFO_BINARY: &str = "mediainfo";

/// Settings for locating the `mediainfo` binary.
///
/// Passed to [`crate::MediaInfoProber`] at construction; nothing reads it from
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Path to the binary, or a bare name resolved through `PATH`.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
}

fn default_binary() -> PathBuf {
    PathBuf::from(DEFAULT_MEDIAINFO_BINARY)
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

impl ProbeConfig {
    /// Configuration pointing at a specific binary.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}
