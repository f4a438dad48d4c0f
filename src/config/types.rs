use mediaprobe_av::ProbeConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Where to find the mediainfo binary
    #[serde(default)]
    pub mediainfo: ProbeConfig,
}

impl Config {
    /// Probe settings with an optional command-line override of the binary.
    pub fn probe_config(&self, binary_override: Option<&Path>) -> ProbeConfig {
        match binary_override {
            Some(binary) => ProbeConfig::with_binary(binary),
            None => self.mediainfo.clone(),
        }
    }
}
