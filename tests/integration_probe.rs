//! Probe integration tests
//!
//! Drives the public library API with a scripted command runner and
//! recorded mediainfo output, plus a real stand-in executable on Unix.

use mediaprobe_av::probe::{AudioSection, GeneralSection, MenuSection, VideoSection};
use mediaprobe_av::{
    CategoryInfo, CommandRunner, Error, MediaDescription, MediaInfoProber, ProbeConfig,
    ToolCommand, ToolOutput, Track,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

// ===== Fixtures =====

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/mediainfo")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path:?}: {e}"))
}

const GENERAL_ONLY_TRACK_LIST: &str = r#"{
    "media": {
        "@ref": "/media/cover.png",
        "track": [
            {"@type": "General", "Format": "PNG", "FileSize": "4096"},
            {"@type": "Image", "Format": "PNG", "Width": "640", "Height": "480"}
        ]
    }
}"#;

const GENERAL_ONLY_LEGACY: &str = r#"{
    "File": {
        "track": {"type": "General", "Format": ["PNG"], "File_size": ["4096", "4.00 KiB"]}
    }
}"#;

/// Mediainfo stand-in that answers the bare availability launch and returns
/// canned probe output, counting how often each is run.
struct CountingRunner {
    installed: bool,
    stdout: String,
    launches: AtomicUsize,
    probes: AtomicUsize,
}

impl CountingRunner {
    fn installed(stdout: impl Into<String>) -> Self {
        Self {
            installed: true,
            stdout: stdout.into(),
            launches: AtomicUsize::new(0),
            probes: AtomicUsize::new(0),
        }
    }

    fn missing() -> Self {
        Self {
            installed: false,
            ..Self::installed("")
        }
    }
}

impl CommandRunner for CountingRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        if !self.installed {
            self.launches.fetch_add(1, Ordering::SeqCst);
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        }

        if command.get_args().is_empty() {
            self.launches.fetch_add(1, Ordering::SeqCst);
            return Ok(ToolOutput {
                exit_code: Some(255),
                stdout: Vec::new(),
                stderr: String::new(),
            });
        }

        self.probes.fetch_add(1, Ordering::SeqCst);
        Ok(ToolOutput {
            exit_code: Some(0),
            stdout: self.stdout.clone().into_bytes(),
            stderr: String::new(),
        })
    }
}

fn prober(runner: &CountingRunner) -> MediaInfoProber<&CountingRunner> {
    MediaInfoProber::with_runner(ProbeConfig::default(), runner)
}

// ===== Availability =====

#[test]
fn test_nonexistent_binary_is_not_installed() {
    let prober = MediaInfoProber::new(ProbeConfig::with_binary(
        "/nonexistent/dir/mediainfo-does-not-exist",
    ));
    assert!(!prober.is_installed());
}

#[test]
fn test_empty_invocation_exit_counts_as_installed() {
    let runner = CountingRunner::installed("");
    assert!(prober(&runner).is_installed());
    assert_eq!(runner.launches.load(Ordering::SeqCst), 1);
    assert_eq!(runner.probes.load(Ordering::SeqCst), 0);
}

#[cfg(unix)]
mod real_executable {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("mediainfo");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_script_exiting_255_is_installed() {
        let dir = tempfile::tempdir().unwrap();
        let binary = write_script(dir.path(), "exit 255");
        assert!(MediaInfoProber::new(ProbeConfig::with_binary(binary)).is_installed());
    }

    #[test]
    fn test_script_exiting_zero_is_installed() {
        let dir = tempfile::tempdir().unwrap();
        let binary = write_script(dir.path(), "exit 0");
        assert!(MediaInfoProber::new(ProbeConfig::with_binary(binary)).is_installed());
    }

    #[test]
    fn test_script_probe_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("out.json");
        std::fs::write(&json, fixture("legacy_full.json")).unwrap();
        let binary = write_script(
            dir.path(),
            &format!("[ $# -eq 0 ] && exit 255\ncat '{}'", json.display()),
        );

        let prober = MediaInfoProber::new(ProbeConfig::with_binary(&binary));
        let records = prober.probe(Path::new("/media/clips/sample.mp4")).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_media());

        let info = prober.tool_info();
        assert!(info.available);
        assert!(info.path.is_some_and(|p| p.ends_with("mediainfo")));
    }
}

// ===== Probe errors =====

#[test]
fn test_probe_with_missing_binary_never_runs_probe() {
    let runner = CountingRunner::missing();
    let err = prober(&runner)
        .probe(Path::new("/media/movie.mkv"))
        .unwrap_err();

    assert!(matches!(err, Error::DependencyMissing { .. }));
    assert!(err.to_string().contains("mediainfo"));
    assert_eq!(runner.probes.load(Ordering::SeqCst), 0);
}

#[test]
fn test_non_json_output_is_parse_error() {
    let runner = CountingRunner::installed("General\nComplete name : /media/movie.mkv\n");
    let err = prober(&runner)
        .probe(Path::new("/media/movie.mkv"))
        .unwrap_err();

    assert!(matches!(err, Error::Parse { .. }));
    assert_eq!(runner.probes.load(Ordering::SeqCst), 1);
}

// ===== Legacy categories =====

#[test]
fn test_legacy_fixture_is_single_media_record() {
    let runner = CountingRunner::installed(fixture("legacy_full.json"));
    let records = prober(&runner)
        .probe(Path::new("/media/clips/sample.mp4"))
        .unwrap();

    assert_eq!(records.len(), 1);
    assert!(records[0].is_media());
    assert!(records[0].as_categories().is_some());
}

#[test]
fn test_legacy_fixture_fields() {
    let runner = CountingRunner::installed(fixture("legacy_full.json"));
    let records = prober(&runner)
        .probe(Path::new("/media/clips/sample.mp4"))
        .unwrap();

    let expected = CategoryInfo {
        general: GeneralSection {
            format: "MPEG-4".into(),
            duration: "10000".into(),
            file_size: "1048576".into(),
            overall_bit_rate_mode: "VBR".into(),
            overall_bit_rate: "838861".into(),
            complete_name: "/media/clips/sample.mp4".into(),
            file_name: "sample".into(),
            file_extension: "mp4".into(),
            frame_rate: "25.000".into(),
            stream_size: "2048".into(),
            writing_application: "Lavf58.29.100".into(),
        },
        video: VideoSection {
            width: "1920".into(),
            height: "1080".into(),
            format: "AVC".into(),
            bit_rate: "700000".into(),
            duration: "10000".into(),
            format_info: "Advanced Video Codec".into(),
            format_profile: "High@L4".into(),
            format_settings_cabac: "Yes".into(),
            format_settings_ref_frames: "4".into(),
            frame_rate: "25.000".into(),
            bit_depth: "8".into(),
            scan_type: "Progressive".into(),
            interlacement: "Progressive".into(),
            writing_library: "x264 core 155".into(),
        },
        audio: AudioSection {
            format: "AAC".into(),
            duration: "9984".into(),
            bit_rate: "128000".into(),
            channels: "2".into(),
            frame_rate: "46.875".into(),
            format_info: "Advanced Audio Codec".into(),
            sampling_rate: "48000".into(),
            format_profile: "LC".into(),
        },
        menu: MenuSection::default(),
    };

    assert_eq!(records[0].as_categories(), Some(&expected));
}

// ===== Track lists =====

#[test]
fn test_array_output_keeps_order() {
    let runner = CountingRunner::installed(fixture("two_files.json"));
    let records = prober(&runner)
        .probe_many(&["/media/first.mkv", "/media/second.mp4"])
        .unwrap();

    assert_eq!(runner.probes.load(Ordering::SeqCst), 1);
    assert_eq!(records.len(), 2);

    let refs: Vec<_> = records
        .iter()
        .map(|r| r.as_track_list().and_then(|l| l.reference.as_deref()))
        .collect();
    assert_eq!(refs, [Some("/media/first.mkv"), Some("/media/second.mp4")]);
}

#[test]
fn test_track_list_media_rule_uses_first_track() {
    let runner = CountingRunner::installed(fixture("two_files.json"));
    let records = prober(&runner)
        .probe_many(&["/media/first.mkv", "/media/second.mp4"])
        .unwrap();

    // First file leads with General, second with Video.
    assert!(!records[0].is_media());
    assert!(records[1].is_media());

    let first = records[0].as_track_list().unwrap();
    let video = first.video_tracks().next().unwrap();
    assert_eq!(video.format.as_deref(), Some("HEVC"));
    assert_eq!(video.width.as_deref(), Some("3840"));
    let audio = first.audio_tracks().next().unwrap();
    assert_eq!(audio.channels.as_deref(), Some("6"));
}

#[test]
fn test_general_only_is_not_media() {
    for output in [GENERAL_ONLY_TRACK_LIST, GENERAL_ONLY_LEGACY] {
        let runner = CountingRunner::installed(output);
        let records = prober(&runner)
            .probe(Path::new("/media/cover.png"))
            .unwrap();
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_media(), "{output}");
    }
}

#[test]
fn test_unknown_track_type_is_kept() {
    let runner = CountingRunner::installed(GENERAL_ONLY_TRACK_LIST);
    let records = prober(&runner)
        .probe(Path::new("/media/cover.png"))
        .unwrap();

    let list = records[0].as_track_list().unwrap();
    match &list.tracks[1] {
        Track::Other(other) => {
            assert_eq!(other.kind, "Image");
            assert_eq!(other.get("Width"), Some("640"));
        }
        track => panic!("expected an Image track, got {track:?}"),
    }
}

#[test]
fn test_json_output_is_tagged_by_shape() {
    let runner = CountingRunner::installed(GENERAL_ONLY_LEGACY);
    let records: Vec<MediaDescription> = prober(&runner)
        .probe(Path::new("/media/cover.png"))
        .unwrap();

    let value = serde_json::to_value(&records).unwrap();
    assert_eq!(value[0]["shape"], "categories");
    assert_eq!(value[0]["general"]["format"], "PNG");
}
