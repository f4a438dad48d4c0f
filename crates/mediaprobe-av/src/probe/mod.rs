//! Media file probing module.
//!
//! [`MediaInfoProber`] runs the `mediainfo` CLI; the submodules turn its
//! version-dependent JSON into [`MediaDescription`] records:
//!
//! - **Track list** (current mediainfo): ordered, typed [`Track`]s
//! - **Categories** (legacy mediainfo): fixed general/video/audio/menu
//!   sections

mod legacy;
mod mediainfo;
mod text;
mod track;
mod types;

pub use mediainfo::{decode_output, MediaInfoProber};
pub use types::*;
