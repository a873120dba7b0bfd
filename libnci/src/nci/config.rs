// libnci/src/nci/config.rs

use crate::constants::{
    DISCOVERY_TIMEOUT_MS, ENUMERATION_TIMEOUT_MS, INIT_TIMEOUT_MS, MAX_PAYLOAD_SIZE,
    RESET_TIMEOUT_MS, RESPONSE_TIMEOUT_MS, VENDOR_TIMEOUT_MS,
};
use crate::protocol::commands::DiscoveryConfig;
use crate::types::{ResetType, TechnologyMode};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine settings. `Default` matches the PN7150 timings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NciConfig {
    pub reset_type: ResetType,
    /// Technologies RF_DISCOVER_CMD asks the controller to poll for
    pub poll_modes: Vec<TechnologyMode>,
    /// Discovery frequency (1 = every period)
    pub discovery_frequency: u8,
    pub reset_timeout_ms: u64,
    pub init_timeout_ms: u64,
    pub vendor_timeout_ms: u64,
    /// RF_DISCOVER and RF_DEACTIVATE responses, RF_DEACTIVATE notification
    pub response_timeout_ms: u64,
    /// Window for a tag to show up after discovery starts
    pub discovery_timeout_ms: u64,
    /// Gap allowed between RF_DISCOVER notifications of one cycle
    pub enumeration_timeout_ms: u64,
}

impl Default for NciConfig {
    fn default() -> Self {
        Self {
            reset_type: ResetType::KeepConfig,
            poll_modes: vec![
                TechnologyMode::PassivePollA,
                TechnologyMode::PassivePollB,
                TechnologyMode::PassivePollF,
                TechnologyMode::PassivePoll15693,
            ],
            discovery_frequency: 1,
            reset_timeout_ms: RESET_TIMEOUT_MS,
            init_timeout_ms: INIT_TIMEOUT_MS,
            vendor_timeout_ms: VENDOR_TIMEOUT_MS,
            response_timeout_ms: RESPONSE_TIMEOUT_MS,
            discovery_timeout_ms: DISCOVERY_TIMEOUT_MS,
            enumeration_timeout_ms: ENUMERATION_TIMEOUT_MS,
        }
    }
}

impl NciConfig {
    pub fn with_poll_modes(mut self, modes: &[TechnologyMode]) -> Self {
        self.poll_modes = modes.to_vec();
        self
    }

    pub fn with_reset_type(mut self, reset_type: ResetType) -> Self {
        self.reset_type = reset_type;
        self
    }

    /// Discovery configurations sent with RF_DISCOVER_CMD
    pub fn discovery_configs(&self) -> Vec<DiscoveryConfig> {
        self.poll_modes
            .iter()
            .map(|m| DiscoveryConfig::new(*m).with_frequency(self.discovery_frequency))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.poll_modes.is_empty() {
            return Err(Error::InvalidConfig("no poll modes configured".into()));
        }
        // [count][mode, frequency]*
        let payload_len = 1 + 2 * self.poll_modes.len();
        if payload_len > MAX_PAYLOAD_SIZE {
            return Err(Error::InvalidConfig(format!(
                "{} poll modes do not fit one RF_DISCOVER_CMD",
                self.poll_modes.len()
            )));
        }
        if self.discovery_frequency == 0 {
            return Err(Error::InvalidConfig("discovery frequency must be >= 1".into()));
        }
        Ok(())
    }
}
