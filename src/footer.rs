use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// The two time-dependent bits of the footer. The server and the wasm bundle
/// are built (and run) at different moments, so the page computes this once
/// on the server and hands the same value to hydration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterStamp {
    pub year: i32,
    /// Tooltip text, e.g. `Built 2024-05-01 12:00 UTC`.
    pub built: String,
}

impl FooterStamp {
    pub fn new(now: DateTime<Utc>, build_time: &str) -> Self {
        Self {
            year: now.year(),
            built: format!("Built {build_time}"),
        }
    }

    pub fn current() -> Self {
        Self::new(Utc::now(), env!("BUILD_TIME"))
    }
}
