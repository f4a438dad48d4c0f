//! # mediaprobe-av
//!
//! Locate the `mediainfo` CLI, run it against media files, and normalize its
//! JSON output into typed records.
//!
//! This crate provides:
//! - An availability check for the configured binary ([`MediaInfoProber::is_installed`])
//! - Probing with output normalization ([`MediaInfoProber::probe`])
//! - A command-execution seam ([`CommandRunner`]) so callers and tests can
//!   substitute how processes are run
//!
//! ## Features
//!
//! - `tracing` - Emit `tracing` events for tool checks and probes
//!
//! ## Example
//!
//! ```no_run
//! use mediaprobe_av::{MediaInfoProber, ProbeConfig};
//! use std::path::Path;
//!
//! let prober = MediaInfoProber::new(ProbeConfig::default());
//! for record in prober.probe(Path::new("/path/to/video.mkv"))? {
//!     println!("playable: {}", record.is_media());
//! }
//! # Ok::<(), mediaprobe_av::Error>(())
//! ```

pub mod command;
pub mod config;
mod error;
pub mod probe;
pub mod tools;

// Re-exports
pub use command::{CommandRunner, SystemRunner, ToolCommand, ToolOutput};
pub use config::ProbeConfig;
pub use error::{Error, ProcessError, Result};
pub use probe::{
    AudioTrack, CategoryInfo, GeneralTrack, MediaDescription, MediaInfoProber, MenuTrack,
    OtherTrack, Track, TrackList, VideoTrack,
};
pub use tools::{Availability, ToolInfo};

/// Probe a media file with `mediainfo` from `PATH`.
///
/// # Example
///
/// ```no_run
/// let records = mediaprobe_av::probe("/path/to/video.mkv")?;
/// println!("{} report(s)", records.len());
/// # Ok::<(), mediaprobe_av::Error>(())
/// ```
pub fn probe<P: AsRef<std::path::Path>>(path: P) -> Result<Vec<MediaDescription>> {
    MediaInfoProber::from_path().probe(path.as_ref())
}

/// Whether `mediainfo` can be run from `PATH`.
pub fn is_installed() -> bool {
    MediaInfoProber::from_path().is_installed()
}
