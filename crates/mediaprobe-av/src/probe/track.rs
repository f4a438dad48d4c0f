//! Track-list records emitted by current mediainfo versions.
//!
//! The wire format is `{"media": {"@ref": "...", "track": [{"@type": "General", ...}, ...]}}`.
//! Each track is decoded into the variant matching its `@type`; types this
//! crate does not model are kept as [`OtherTrack`] with their scalar
//! attributes.

use super::text::{opt_text, scalar_text};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The media section of one mediainfo track-list report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackList {
    /// Source file as reported by the tool.
    #[serde(
        rename = "@ref",
        default,
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<String>,
    /// Tracks in the order the tool reported them.
    #[serde(rename = "track", default)]
    pub tracks: Vec<Track>,
}

impl TrackList {
    /// Whether the report describes playable media.
    ///
    /// True when the first track is a video or audio track.
    pub fn is_media(&self) -> bool {
        matches!(self.tracks.first(), Some(Track::Video(_) | Track::Audio(_)))
    }

    /// The first general (container) track, if any.
    pub fn general(&self) -> Option<&GeneralTrack> {
        self.tracks.iter().find_map(|t| match t {
            Track::General(g) => Some(g),
            _ => None,
        })
    }

    /// All video tracks in order.
    pub fn video_tracks(&self) -> impl Iterator<Item = &VideoTrack> {
        self.tracks.iter().filter_map(|t| match t {
            Track::Video(v) => Some(v),
            _ => None,
        })
    }

    /// All audio tracks in order.
    pub fn audio_tracks(&self) -> impl Iterator<Item = &AudioTrack> {
        self.tracks.iter().filter_map(|t| match t {
            Track::Audio(a) => Some(a),
            _ => None,
        })
    }

    /// All menu tracks in order.
    pub fn menu_tracks(&self) -> impl Iterator<Item = &MenuTrack> {
        self.tracks.iter().filter_map(|t| match t {
            Track::Menu(m) => Some(m),
            _ => None,
        })
    }
}

/// Top-level object of a single track-list report.
#[derive(Debug, Deserialize)]
pub(crate) struct TrackListOutput {
    pub(crate) media: TrackList,
}

/// One track of a report, discriminated by its `@type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "@type")]
pub enum Track {
    General(GeneralTrack),
    Video(VideoTrack),
    Audio(AudioTrack),
    Menu(MenuTrack),
    #[serde(untagged)]
    Other(OtherTrack),
}

impl Track {
    /// The `@type` name of this track.
    pub fn kind(&self) -> &str {
        match self {
            Track::General(_) => "General",
            Track::Video(_) => "Video",
            Track::Audio(_) => "Audio",
            Track::Menu(_) => "Menu",
            Track::Other(other) => &other.kind,
        }
    }
}

impl<'de> Deserialize<'de> for Track {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match fields.remove("@type") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "track @type must be a string, got {other}"
                )))
            }
            None => return Err(de::Error::missing_field("@type")),
        };

        let track = match kind.as_str() {
            "General" => Track::General(typed(fields)?),
            "Video" => Track::Video(typed(fields)?),
            "Audio" => Track::Audio(typed(fields)?),
            "Menu" => Track::Menu(typed(fields)?),
            _ => Track::Other(OtherTrack {
                attributes: fields
                    .iter()
                    .filter_map(|(k, v)| scalar_text(v).map(|text| (k.clone(), text)))
                    .collect(),
                kind,
            }),
        };
        Ok(track)
    }
}

fn typed<T, E>(fields: Map<String, Value>) -> Result<T, E>
where
    T: serde::de::DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value(Value::Object(fields)).map_err(E::custom)
}

/// A track of a type without a dedicated variant (e.g. `Text`, `Image`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OtherTrack {
    /// The `@type` reported by the tool.
    #[serde(rename = "@type")]
    pub kind: String,
    /// Scalar attributes as text, keyed by their wire names.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl OtherTrack {
    /// Look up an attribute by its wire name, e.g. `Width`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Container-level information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralTrack {
    /// Number of image streams.
    #[serde(
        rename = "ImageCount",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_count: Option<String>,
    #[serde(
        rename = "VideoCount",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub video_count: Option<String>,
    #[serde(
        rename = "AudioCount",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_count: Option<String>,
    #[serde(
        rename = "MenuCount",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub menu_count: Option<String>,
    /// Full path as reported by the tool.
    #[serde(
        rename = "CompleteName",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub complete_name: Option<String>,
    #[serde(
        rename = "FileName",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_name: Option<String>,
    #[serde(
        rename = "FileExtension",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_extension: Option<String>,
    /// Container format, e.g. `Matroska`.
    #[serde(
        rename = "Format",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<String>,
    #[serde(
        rename = "Format_Profile",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_profile: Option<String>,
    #[serde(
        rename = "FileSize",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_size: Option<String>,
    #[serde(
        rename = "StreamSize",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_size: Option<String>,
    #[serde(
        rename = "Duration",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(
        rename = "OverallBitRate_Mode",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_bit_rate_mode: Option<String>,
    #[serde(
        rename = "OverallBitRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_bit_rate: Option<String>,
    #[serde(
        rename = "FrameRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_rate: Option<String>,
    #[serde(
        rename = "Encoded_Application",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub writing_application: Option<String>,
    #[serde(
        rename = "Encoded_Library",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub writing_library: Option<String>,
    /// Modification time in UTC.
    #[serde(
        rename = "File_Modified_Date",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date: Option<String>,
    /// Modification time in local time.
    #[serde(
        rename = "File_Modified_Date_Local",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified_date_local: Option<String>,
}

/// A video stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoTrack {
    /// Codec family, e.g. `AVC` or `HEVC`.
    #[serde(
        rename = "Format",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<String>,
    #[serde(
        rename = "Format_Info",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_info: Option<String>,
    #[serde(
        rename = "Format_Profile",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_profile: Option<String>,
    #[serde(
        rename = "Format_Settings_CABAC",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_settings_cabac: Option<String>,
    #[serde(
        rename = "Format_Settings_RefFrames",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_settings_ref_frames: Option<String>,
    #[serde(
        rename = "Width",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<String>,
    #[serde(
        rename = "Height",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<String>,
    #[serde(
        rename = "Duration",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(
        rename = "BitRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bit_rate: Option<String>,
    #[serde(
        rename = "BitRate_Mode",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bit_rate_mode: Option<String>,
    #[serde(
        rename = "FrameRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_rate: Option<String>,
    #[serde(
        rename = "ColorSpace",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub color_space: Option<String>,
    #[serde(
        rename = "ChromaSubsampling",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub chroma_subsampling: Option<String>,
    #[serde(
        rename = "BitDepth",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bit_depth: Option<String>,
    #[serde(
        rename = "ScanType",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub scan_type: Option<String>,
    #[serde(
        rename = "Interlacement",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub interlacement: Option<String>,
    #[serde(
        rename = "Compression_Mode",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub compression_mode: Option<String>,
    #[serde(
        rename = "StreamSize",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_size: Option<String>,
    #[serde(
        rename = "Encoded_Library",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub writing_library: Option<String>,
}

/// An audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTrack {
    #[serde(
        rename = "Format",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<String>,
    #[serde(
        rename = "Format_Info",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_info: Option<String>,
    #[serde(
        rename = "Format_Profile",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_profile: Option<String>,
    #[serde(
        rename = "Duration",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(
        rename = "BitRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bit_rate: Option<String>,
    #[serde(
        rename = "BitRate_Mode",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub bit_rate_mode: Option<String>,
    /// Channel count as text, e.g. `6`.
    #[serde(
        rename = "Channels",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub channels: Option<String>,
    #[serde(
        rename = "SamplingRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sampling_rate: Option<String>,
    #[serde(
        rename = "FrameRate",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_rate: Option<String>,
    #[serde(
        rename = "Compression_Mode",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub compression_mode: Option<String>,
    #[serde(
        rename = "StreamSize",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub stream_size: Option<String>,
    #[serde(
        rename = "Encoded_Library",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub writing_library: Option<String>,
}

/// A menu or chapter section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuTrack {
    #[serde(
        rename = "Format",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub format: Option<String>,
    #[serde(
        rename = "Duration",
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
}
