//! Mediaprobe - media file inspection through mediainfo
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod probe;
