// Re-export all probe functionality from mediaprobe-av
pub use mediaprobe_av::probe::*;
pub use mediaprobe_av::{Availability, ProbeConfig, ToolInfo};

use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

/// Probe files with the given configuration in a single mediainfo run
pub fn probe_files<P: AsRef<Path>>(
    config: &ProbeConfig,
    files: &[P],
) -> Result<Vec<MediaDescription>> {
    let prober = MediaInfoProber::new(config.clone());
    prober
        .probe_many(files)
        .with_context(|| format!("Failed to probe {} file(s)", files.len()))
}

/// Human-readable summary of one record
pub fn render_text(record: &MediaDescription) -> String {
    let mut out = String::new();
    match record {
        MediaDescription::TrackList(list) => render_track_list(&mut out, list),
        MediaDescription::Categories(info) => render_categories(&mut out, info),
    }
    let playable = if record.is_media() { "yes" } else { "no" };
    let _ = writeln!(out, "Playable media: {playable}");
    out
}

fn field(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        let _ = writeln!(out, "  {label}: {value}");
    }
}

fn render_track_list(out: &mut String, list: &TrackList) {
    if let Some(ref reference) = list.reference {
        let _ = writeln!(out, "File: {reference}");
    }

    for (i, track) in list.tracks.iter().enumerate() {
        let _ = writeln!(out, "[{}] {}", i, track.kind());
        match track {
            Track::General(g) => {
                field(out, "Format", g.format.as_deref());
                field(out, "Duration", g.duration.as_deref());
                field(out, "File size", g.file_size.as_deref());
                field(out, "Overall bit rate", g.overall_bit_rate.as_deref());
                field(out, "Writing application", g.writing_application.as_deref());
            }
            Track::Video(v) => {
                field(out, "Format", v.format.as_deref());
                if let (Some(w), Some(h)) = (v.width.as_deref(), v.height.as_deref()) {
                    let _ = writeln!(out, "  Size: {w}x{h}");
                }
                field(out, "Frame rate", v.frame_rate.as_deref());
                field(out, "Bit depth", v.bit_depth.as_deref());
                field(out, "Scan type", v.scan_type.as_deref());
                field(out, "Duration", v.duration.as_deref());
            }
            Track::Audio(a) => {
                field(out, "Format", a.format.as_deref());
                field(out, "Channels", a.channels.as_deref());
                field(out, "Sampling rate", a.sampling_rate.as_deref());
                field(out, "Duration", a.duration.as_deref());
            }
            Track::Menu(m) => {
                field(out, "Format", m.format.as_deref());
                field(out, "Duration", m.duration.as_deref());
            }
            Track::Other(other) => {
                field(out, "Format", other.get("Format"));
            }
        }
    }
}

fn render_categories(out: &mut String, info: &CategoryInfo) {
    let general = &info.general;
    if !general.complete_name.is_empty() {
        let _ = writeln!(out, "File: {}", general.complete_name);
    }
    let _ = writeln!(out, "General");
    field(out, "Format", Some(general.format.as_str()));
    field(out, "Duration", Some(general.duration.as_str()));
    field(out, "File size", Some(general.file_size.as_str()));

    let video = &info.video;
    if !video.format.is_empty() {
        let _ = writeln!(out, "Video");
        field(out, "Format", Some(video.format.as_str()));
        if !video.width.is_empty() && !video.height.is_empty() {
            let _ = writeln!(out, "  Size: {}x{}", video.width, video.height);
        }
        field(out, "Frame rate", Some(video.frame_rate.as_str()));
        field(out, "Interlacement", Some(video.interlacement.as_str()));
        field(out, "Duration", Some(video.duration.as_str()));
    }

    let audio = &info.audio;
    if !audio.format.is_empty() {
        let _ = writeln!(out, "Audio");
        field(out, "Format", Some(audio.format.as_str()));
        field(out, "Channels", Some(audio.channels.as_str()));
        field(out, "Sampling rate", Some(audio.sampling_rate.as_str()));
        field(out, "Duration", Some(audio.duration.as_str()));
    }

    if !info.menu.format.is_empty() {
        let _ = writeln!(out, "Menu");
        field(out, "Format", Some(info.menu.format.as_str()));
        field(out, "Duration", Some(info.menu.duration.as_str()));
    }
}
