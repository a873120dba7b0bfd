// libnci/src/tag/mod.rs

pub mod registry;

pub use registry::{TagRegistry, TagsPresentStatus};

use std::fmt;

use heapless::Vec as BoundedVec;

use crate::constants::MAX_ID_LEN;
use crate::types::{RfProtocol, TechnologyMode};
use crate::utils::hex_join;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of one detected tag (NFCID1/NFCID2/PUPI depending on the
/// technology) with the time the engine decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagSnapshot {
    id: BoundedVec<u8, MAX_ID_LEN>,
    detected_at_ms: u64,
    protocol: RfProtocol,
    mode: TechnologyMode,
}

impl TagSnapshot {
    /// Identifiers longer than MAX_ID_LEN are truncated.
    pub fn new(id: &[u8], detected_at_ms: u64) -> Self {
        let len = id.len().min(MAX_ID_LEN);
        let mut bounded = BoundedVec::new();
        // cannot fail: len <= capacity
        let _ = bounded.extend_from_slice(&id[..len]);
        Self {
            id: bounded,
            detected_at_ms,
            protocol: RfProtocol::Undetermined,
            mode: TechnologyMode::PassivePollA,
        }
    }

    pub fn with_protocol(mut self, protocol: RfProtocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_mode(mut self, mode: TechnologyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn id(&self) -> &[u8] {
        &self.id
    }

    pub fn id_len(&self) -> usize {
        self.id.len()
    }

    pub fn detected_at_ms(&self) -> u64 {
        self.detected_at_ms
    }

    pub fn protocol(&self) -> RfProtocol {
        self.protocol
    }

    pub fn mode(&self) -> TechnologyMode {
        self.mode
    }

    /// Compact lowercase hex of the identifier, e.g. `04a1b2c3`
    pub fn to_hex(&self) -> String {
        hex_join(&self.id, "")
    }
}

impl fmt::Display for TagSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueID = {}", hex_join(&self.id, " "))
    }
}
