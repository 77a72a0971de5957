//! Generator settings
//!
//! Every package-level default of the scheme (salt, epoch) is an explicit,
//! documented constant applied at construction time; nothing is ambient
//! state.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::machine::MachineId;

/// Salt applied to the alphanumeric encoding when the caller supplies none.
pub const DEFAULT_SALT: &str = "z@mmik_orvyl";

/// Default generator epoch, as seconds since the Unix epoch:
/// 2017-01-02T08:30:00Z.
pub const DEFAULT_EPOCH_UNIX: i64 = 1_483_345_800;

/// The instant IDs count time from when [`Settings::epoch`] is `None`.
pub fn default_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(DEFAULT_EPOCH_UNIX)
}

/// Generator configuration (loadable from TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reference instant IDs count elapsed time from
    /// (default: [`default_epoch`]). Must not lie in the future.
    pub epoch: Option<DateTime<Utc>>,
    /// Where the machine-identifier bit field comes from (default: the
    /// allocator's own private-IPv4 derivation).
    pub machine_id: MachineId,
    /// Encode IDs through the reversible alphanumeric transform instead of
    /// returning raw integers.
    pub alphanumeric: bool,
    /// Salt for the alphanumeric transform (default: [`DEFAULT_SALT`]).
    /// Ignored in numeric mode.
    pub salt: Option<String>,
}

impl Settings {
    /// The salt in effect: configured or default.
    pub fn salt(&self) -> &str {
        self.salt.as_deref().unwrap_or(DEFAULT_SALT)
    }

    /// The epoch in effect: configured or default.
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch.unwrap_or_else(default_epoch)
    }
}
