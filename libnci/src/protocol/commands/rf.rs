// libnci/src/protocol/commands/rf.rs

use crate::types::{DeactivationMode, TechnologyMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One RF_DISCOVER_CMD configuration entry: technology/mode and how often
/// it is polled per discovery period (1 = every period).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscoveryConfig {
    pub mode: TechnologyMode,
    pub frequency: u8,
}

impl DiscoveryConfig {
    pub fn new(mode: TechnologyMode) -> Self {
        Self { mode, frequency: 1 }
    }

    pub fn with_frequency(mut self, frequency: u8) -> Self {
        self.frequency = frequency;
        self
    }
}

/// RF_DISCOVER_CMD payload: [count] then [mode, frequency] per entry.
/// Entries past 255 are not representable; `NciConfig::validate` keeps the
/// list well below that.
pub fn encode_rf_discover(configurations: &[DiscoveryConfig]) -> Vec<u8> {
    let mut v = Vec::with_capacity(1 + configurations.len() * 2);
    v.push(configurations.len() as u8);
    for c in configurations {
        v.push(c.mode.as_u8());
        v.push(c.frequency);
    }
    v
}

/// RF_DEACTIVATE_CMD payload: [deactivation type]
pub fn encode_rf_deactivate(mode: DeactivationMode) -> Vec<u8> {
    vec![mode as u8]
}
