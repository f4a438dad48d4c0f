//! Flat category records for legacy mediainfo JSON.
//!
//! Older mediainfo builds report `{"File": {"track": [...]}}` where each track
//! carries `type` and, in full (`-f`) mode, most values are arrays listing
//! the same field in several renderings: raw first, then human-readable
//! variants. [`CategoryInfo`] keeps one text value per field.

use super::text::text_values;
use serde::{Deserialize, Deserializer, Serialize};

/// Container-level fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneralSection {
    pub format: String,
    pub duration: String,
    pub file_size: String,
    pub overall_bit_rate_mode: String,
    pub overall_bit_rate: String,
    /// Full path of the probed file.
    pub complete_name: String,
    pub file_name: String,
    pub file_extension: String,
    pub frame_rate: String,
    pub stream_size: String,
    pub writing_application: String,
}

/// Fields of the (last reported) video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoSection {
    pub width: String,
    pub height: String,
    pub format: String,
    pub bit_rate: String,
    pub duration: String,
    pub format_info: String,
    pub format_profile: String,
    pub format_settings_cabac: String,
    pub format_settings_ref_frames: String,
    pub frame_rate: String,
    pub bit_depth: String,
    pub scan_type: String,
    /// Human-readable interlacement, e.g. `Progressive`.
    pub interlacement: String,
    pub writing_library: String,
}

/// Fields of the (last reported) audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioSection {
    pub format: String,
    pub duration: String,
    pub bit_rate: String,
    pub channels: String,
    pub frame_rate: String,
    pub format_info: String,
    pub sampling_rate: String,
    pub format_profile: String,
}

/// Fields of the menu section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub format: String,
    pub duration: String,
}

/// A legacy report flattened into fixed sections.
///
/// Sections the file does not have stay at their defaults (empty strings).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub general: GeneralSection,
    pub video: VideoSection,
    pub audio: AudioSection,
    pub menu: MenuSection,
}

impl CategoryInfo {
    /// Whether the report describes playable media: both the video and the
    /// audio section carry a duration.
    pub fn is_media(&self) -> bool {
        !self.video.duration.is_empty() && !self.audio.duration.is_empty()
    }
}

// ---------------------------------------------------------------------------
// JSON structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyOutput {
    #[serde(rename = "File", alias = "file")]
    file: LegacyFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyFile {
    #[serde(alias = "tracks", deserialize_with = "one_or_many")]
    track: Vec<LegacyTrack>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LegacyTrack {
    #[serde(rename = "type", alias = "@type", alias = "_type")]
    kind: String,

    #[serde(rename = "Format", deserialize_with = "text_values")]
    format: Vec<String>,
    #[serde(rename = "Format_Info", deserialize_with = "text_values")]
    format_info: Vec<String>,
    #[serde(rename = "Format_profile", deserialize_with = "text_values")]
    format_profile: Vec<String>,
    #[serde(rename = "Format_settings__CABAC", deserialize_with = "text_values")]
    format_settings_cabac: Vec<String>,
    #[serde(rename = "Format_settings__ReFrames", deserialize_with = "text_values")]
    format_settings_ref_frames: Vec<String>,
    #[serde(rename = "Duration", deserialize_with = "text_values")]
    duration: Vec<String>,
    #[serde(rename = "File_size", deserialize_with = "text_values")]
    file_size: Vec<String>,
    #[serde(rename = "Stream_size", deserialize_with = "text_values")]
    stream_size: Vec<String>,
    #[serde(rename = "Overall_bit_rate_mode", deserialize_with = "text_values")]
    overall_bit_rate_mode: Vec<String>,
    #[serde(rename = "Overall_bit_rate", deserialize_with = "text_values")]
    overall_bit_rate: Vec<String>,
    #[serde(rename = "Bit_rate", deserialize_with = "text_values")]
    bit_rate: Vec<String>,
    #[serde(rename = "Complete_name", deserialize_with = "text_values")]
    complete_name: Vec<String>,
    #[serde(rename = "File_name", deserialize_with = "text_values")]
    file_name: Vec<String>,
    #[serde(rename = "File_extension", deserialize_with = "text_values")]
    file_extension: Vec<String>,
    #[serde(rename = "Frame_rate", deserialize_with = "text_values")]
    frame_rate: Vec<String>,
    #[serde(rename = "Writing_application", deserialize_with = "text_values")]
    writing_application: Vec<String>,
    #[serde(rename = "Writing_library", deserialize_with = "text_values")]
    writing_library: Vec<String>,
    #[serde(rename = "Width", deserialize_with = "text_values")]
    width: Vec<String>,
    #[serde(rename = "Height", deserialize_with = "text_values")]
    height: Vec<String>,
    #[serde(rename = "Bit_depth", deserialize_with = "text_values")]
    bit_depth: Vec<String>,
    #[serde(rename = "Scan_type", deserialize_with = "text_values")]
    scan_type: Vec<String>,
    #[serde(rename = "Interlacement", deserialize_with = "text_values")]
    interlacement: Vec<String>,
    #[serde(rename = "Channel_s_", deserialize_with = "text_values")]
    channels: Vec<String>,
    #[serde(rename = "Sampling_rate", deserialize_with = "text_values")]
    sampling_rate: Vec<String>,
}

/// Accept a single track object where a list is expected.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    })
}

// ---------------------------------------------------------------------------
// Fan-out
// ---------------------------------------------------------------------------

fn first(values: &[String]) -> String {
    values.first().cloned().unwrap_or_default()
}

/// Interlacement lists its code first (`PPF`) and the readable form second
/// (`Progressive`); a lone value is used as-is.
fn interlacement(values: &[String]) -> String {
    values
        .get(1)
        .or_else(|| values.first())
        .cloned()
        .unwrap_or_default()
}

impl From<LegacyOutput> for CategoryInfo {
    /// When a category occurs more than once, the last track wins.
    fn from(output: LegacyOutput) -> Self {
        let mut info = CategoryInfo::default();

        for track in output.file.track {
            match track.kind.as_str() {
                "General" => {
                    info.general = GeneralSection {
                        format: first(&track.format),
                        duration: first(&track.duration),
                        file_size: first(&track.file_size),
                        overall_bit_rate_mode: first(&track.overall_bit_rate_mode),
                        overall_bit_rate: first(&track.overall_bit_rate),
                        complete_name: first(&track.complete_name),
                        file_name: first(&track.file_name),
                        file_extension: first(&track.file_extension),
                        frame_rate: first(&track.frame_rate),
                        stream_size: first(&track.stream_size),
                        writing_application: first(&track.writing_application),
                    }
                }
                "Video" => {
                    info.video = VideoSection {
                        width: first(&track.width),
                        height: first(&track.height),
                        format: first(&track.format),
                        bit_rate: first(&track.bit_rate),
                        duration: first(&track.duration),
                        format_info: first(&track.format_info),
                        format_profile: first(&track.format_profile),
                        format_settings_cabac: first(&track.format_settings_cabac),
                        format_settings_ref_frames: first(&track.format_settings_ref_frames),
                        frame_rate: first(&track.frame_rate),
                        bit_depth: first(&track.bit_depth),
                        scan_type: first(&track.scan_type),
                        interlacement: interlacement(&track.interlacement),
                        writing_library: first(&track.writing_library),
                    }
                }
                "Audio" => {
                    info.audio = AudioSection {
                        format: first(&track.format),
                        duration: first(&track.duration),
                        bit_rate: first(&track.bit_rate),
                        channels: first(&track.channels),
                        frame_rate: first(&track.frame_rate),
                        format_info: first(&track.format_info),
                        sampling_rate: first(&track.sampling_rate),
                        format_profile: first(&track.format_profile),
                    }
                }
                "Menu" => {
                    info.menu = MenuSection {
                        format: first(&track.format),
                        duration: first(&track.duration),
                    }
                }
                _ => {}
            }
        }

        info
    }
}
