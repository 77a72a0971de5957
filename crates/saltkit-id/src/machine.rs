//! Machine-identifier derivation
//!
//! The machine ID occupies a 16-bit field of every generated value and is
//! what keeps two hosts from ever minting the same ID in the same tick.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{IdError, IdResult};

/// Where the 16-bit machine identifier comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MachineId {
    /// Delegate to the allocator's default: the low 16 bits of the host's
    /// private IPv4 address.
    #[default]
    Auto,
    /// An explicit, caller-assigned identifier.
    Fixed(u16),
    /// Hash of the `HOSTNAME` environment value. Containers and cloud
    /// instances expose their per-instance identity there, giving a stable
    /// ID without a metadata-service round trip.
    HostnameHash,
}

impl MachineId {
    /// Resolve to a concrete identifier, or `None` to let the allocator use
    /// its own default.
    pub(crate) fn resolve(&self) -> IdResult<Option<u16>> {
        match self {
            MachineId::Auto => Ok(None),
            MachineId::Fixed(id) => Ok(Some(*id)),
            MachineId::HostnameHash => {
                let name = std::env::var("HOSTNAME").unwrap_or_default();
                if name.is_empty() {
                    return Err(IdError::Config(
                        "HOSTNAME is not set; cannot derive a machine id from it".into(),
                    ));
                }
                Ok(Some(hash_hostname(&name)))
            }
        }
    }
}

/// Low 16 bits of SHA-256 over the hostname.
fn hash_hostname(name: &str) -> u16 {
    let digest = Sha256::digest(name.as_bytes());
    u16::from_be_bytes([digest[0], digest[1]])
}
