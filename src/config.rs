use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::read_json;
use crate::reveal::DEFAULT_THRESHOLD;
use crate::typewriter::TypewriterTiming;

pub const SITE_CONFIG_FILE: &str = "site.json";

/// Behavioural knobs for the page. Every field has a default, so `site.json`
/// only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub roles: Vec<String>,
    /// Fraction of an element that must be on screen before it is revealed.
    pub reveal_threshold: f64,
    /// Height of the fixed header, subtracted when scrolling to an anchor.
    pub header_offset: f64,
    pub project_load_delay_ms: u64,
    pub send_delay_ms: u64,
    pub acknowledgment_ms: u64,
    pub typing_ms: u64,
    pub deleting_ms: u64,
    pub hold_ms: u64,
    pub advance_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Martin Morondo".to_string(),
            roles: vec![
                "Web Developer".to_string(),
                "Frontend Specialist".to_string(),
                "UI/UX Enthusiast".to_string(),
            ],
            reveal_threshold: DEFAULT_THRESHOLD,
            header_offset: 80.0,
            project_load_delay_ms: 800,
            send_delay_ms: 1500,
            acknowledgment_ms: 5000,
            typing_ms: 100,
            deleting_ms: 50,
            hold_ms: 2000,
            advance_ms: 500,
        }
    }
}

impl SiteConfig {
    /// Loads the embedded `site.json`, falling back to defaults if it is
    /// missing or malformed.
    pub fn load() -> Self {
        match read_json::<SiteConfig>(SITE_CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using default site config: {e}");
                Self::default()
            }
        }
    }

    pub fn project_load_delay(&self) -> Duration {
        Duration::from_millis(self.project_load_delay_ms)
    }

    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn acknowledgment_delay(&self) -> Duration {
        Duration::from_millis(self.acknowledgment_ms)
    }

    pub fn typewriter_timing(&self) -> TypewriterTiming {
        TypewriterTiming {
            typing: Duration::from_millis(self.typing_ms),
            deleting: Duration::from_millis(self.deleting_ms),
            hold: Duration::from_millis(self.hold_ms),
            advance: Duration::from_millis(self.advance_ms),
        }
    }
}
