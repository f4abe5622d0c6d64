//! Mocked Stellarium bridge.
//!
//! The page only ever showed a status line for this integration; the
//! backing service was never wired up. The probe reproduces that: a canned
//! report, always offline, surfaced as text.

use crate::status::FeedStatus;

/// Status report for the planetarium bridge panel.
#[derive(Debug, Clone)]
pub struct SkyStatus {
    pub service: &'static str,
    pub status: FeedStatus,
    /// Free-form note shown under the status line.
    pub note: &'static str,
}

/// Probe the (mocked) planetarium bridge.
pub fn probe() -> SkyStatus {
    SkyStatus {
        service: "Stellarium bridge",
        status: FeedStatus::Offline,
        note: "telescope view simulated locally",
    }
}
