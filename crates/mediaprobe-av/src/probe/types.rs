//! Media description types.

use serde::Serialize;

pub use super::legacy::{AudioSection, CategoryInfo, GeneralSection, MenuSection, VideoSection};
pub use super::track::{
    AudioTrack, GeneralTrack, MenuTrack, OtherTrack, Track, TrackList, VideoTrack,
};

/// One normalized mediainfo report.
///
/// Current mediainfo versions produce [`TrackList`]; legacy versions produce
/// the flat [`CategoryInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MediaDescription {
    /// Ordered, typed tracks.
    TrackList(TrackList),
    /// Fixed general/video/audio/menu sections.
    Categories(CategoryInfo),
}

impl MediaDescription {
    /// Whether the report describes playable media, using the rule of the
    /// underlying shape.
    pub fn is_media(&self) -> bool {
        match self {
            MediaDescription::TrackList(list) => list.is_media(),
            MediaDescription::Categories(info) => info.is_media(),
        }
    }

    /// The track list, if this report has that shape.
    pub fn as_track_list(&self) -> Option<&TrackList> {
        match self {
            MediaDescription::TrackList(list) => Some(list),
            MediaDescription::Categories(_) => None,
        }
    }

    /// The flat categories, if this report has that shape.
    pub fn as_categories(&self) -> Option<&CategoryInfo> {
        match self {
            MediaDescription::Categories(info) => Some(info),
            MediaDescription::TrackList(_) => None,
        }
    }
}

impl From<TrackList> for MediaDescription {
    fn from(list: TrackList) -> Self {
        MediaDescription::TrackList(list)
    }
}

impl From<CategoryInfo> for MediaDescription {
    fn from(info: CategoryInfo) -> Self {
        MediaDescription::Categories(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_media_delegates_to_shape() {
        let mut info = CategoryInfo::default();
        info.video.duration = "1000".into();
        info.audio.duration = "1000".into();
        assert!(MediaDescription::from(info).is_media());

        let list = TrackList {
            reference: None,
            tracks: vec![Track::General(GeneralTrack::default())],
        };
        assert!(!MediaDescription::from(list).is_media());
    }

    #[test]
    fn accessors_match_variant() {
        let desc = MediaDescription::from(TrackList::default());
        assert!(desc.as_track_list().is_some());
        assert!(desc.as_categories().is_none());
    }

    #[test]
    fn serializes_with_shape_tag() {
        let desc = MediaDescription::from(TrackList::default());
        let value = serde_json::to_value(&desc).unwrap();
        assert_eq!(value["shape"], "track_list");
        assert_eq!(value["track"], serde_json::json!([]));
    }
}
