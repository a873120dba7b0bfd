// libnci/src/protocol/commands/mod.rs

pub mod core;
pub mod proprietary;
pub mod rf;

pub use self::core::{encode_core_init, encode_core_reset};
pub use proprietary::encode_proprietary_act;
pub use rf::{DiscoveryConfig, encode_rf_deactivate, encode_rf_discover};

use crate::constants::oid;
use crate::types::{DeactivationMode, GroupId, ResetType};

/// Commands the engine sends. New commands should be added here and
/// their per-group encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CoreReset { reset_type: ResetType },
    CoreInit,
    /// PN7150 NCI_PROPRIETARY_ACT_CMD, enables the vendor extensions
    ProprietaryAct,
    RfDiscover { configurations: Vec<DiscoveryConfig> },
    RfDeactivate { mode: DeactivationMode },
}

impl Command {
    pub fn group(&self) -> GroupId {
        match self {
            Self::CoreReset { .. } | Self::CoreInit => GroupId::Core,
            Self::ProprietaryAct => GroupId::Proprietary,
            Self::RfDiscover { .. } | Self::RfDeactivate { .. } => GroupId::RfManagement,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            Self::CoreReset { .. } => oid::core::RESET,
            Self::CoreInit => oid::core::INIT,
            Self::ProprietaryAct => oid::proprietary::ACT,
            Self::RfDiscover { .. } => oid::rf::DISCOVER,
            Self::RfDeactivate { .. } => oid::rf::DEACTIVATE,
        }
    }

    /// Raw command payload (without the 3-byte header).
    pub fn payload(&self) -> Vec<u8> {
        match self {
            Self::CoreReset { reset_type } => encode_core_reset(*reset_type),
            Self::CoreInit => encode_core_init(),
            Self::ProprietaryAct => encode_proprietary_act(),
            Self::RfDiscover { configurations } => encode_rf_discover(&configurations[..]),
            Self::RfDeactivate { mode } => encode_rf_deactivate(*mode),
        }
    }

    /// Encode the command into a complete control packet.
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        super::codec::encode_command(self)
    }
}
