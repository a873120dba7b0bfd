// libnci/src/types.rs

use derive_more::Display;

use crate::Error;
use crate::constants::status;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message type (MT) bits of header byte 0
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MessageType {
    #[display(fmt = "DATA")]
    Data = 0x00,
    #[display(fmt = "CMD")]
    Command = 0x20,
    #[display(fmt = "RSP")]
    Response = 0x40,
    #[display(fmt = "NTF")]
    Notification = 0x60,
}

impl MessageType {
    /// Decode the MT bits of header byte 0
    pub fn from_header_byte(byte: u8) -> Option<Self> {
        match byte & crate::constants::MT_MASK {
            0x00 => Some(Self::Data),
            0x20 => Some(Self::Command),
            0x40 => Some(Self::Response),
            0x60 => Some(Self::Notification),
            _ => None,
        }
    }
}

/// Group identifier (GID, NCI Table 102)
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupId {
    #[display(fmt = "CORE")]
    Core = 0x00,
    #[display(fmt = "RF")]
    RfManagement = 0x01,
    #[display(fmt = "NFCEE")]
    NfceeManagement = 0x02,
    #[display(fmt = "PROP")]
    Proprietary = 0x0F,
}

impl GroupId {
    pub fn from_header_byte(byte: u8) -> Option<Self> {
        match byte & crate::constants::GID_MASK {
            0x00 => Some(Self::Core),
            0x01 => Some(Self::RfManagement),
            0x02 => Some(Self::NfceeManagement),
            0x0F => Some(Self::Proprietary),
            _ => None,
        }
    }
}

/// CORE_RESET_CMD reset type
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResetType {
    #[default]
    KeepConfig = 0x00,
    ResetConfig = 0x01,
}

/// RF technology and mode (NCI Table 96)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TechnologyMode {
    PassivePollA,
    PassivePollB,
    PassivePollF,
    ActivePollA,
    ActivePollF,
    PassivePoll15693,
    PassiveListenA,
    PassiveListenB,
    PassiveListenF,
    ActiveListenA,
    ActiveListenF,
    PassiveListen15693,
    Other(u8),
}

impl TechnologyMode {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::PassivePollA => 0x00,
            Self::PassivePollB => 0x01,
            Self::PassivePollF => 0x02,
            Self::ActivePollA => 0x03,
            Self::ActivePollF => 0x05,
            Self::PassivePoll15693 => 0x06,
            Self::PassiveListenA => 0x80,
            Self::PassiveListenB => 0x81,
            Self::PassiveListenF => 0x82,
            Self::ActiveListenA => 0x83,
            Self::ActiveListenF => 0x85,
            Self::PassiveListen15693 => 0x86,
            Self::Other(v) => *v,
        }
    }

    pub fn is_poll(&self) -> bool {
        self.as_u8() & 0x80 == 0
    }
}

impl From<u8> for TechnologyMode {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::PassivePollA,
            0x01 => Self::PassivePollB,
            0x02 => Self::PassivePollF,
            0x03 => Self::ActivePollA,
            0x05 => Self::ActivePollF,
            0x06 => Self::PassivePoll15693,
            0x80 => Self::PassiveListenA,
            0x81 => Self::PassiveListenB,
            0x82 => Self::PassiveListenF,
            0x83 => Self::ActiveListenA,
            0x85 => Self::ActiveListenF,
            0x86 => Self::PassiveListen15693,
            other => Self::Other(other),
        }
    }
}

/// RF protocol (NCI Table 98)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RfProtocol {
    #[default]
    Undetermined,
    T1t,
    T2t,
    T3t,
    IsoDep,
    NfcDep,
    Other(u8),
}

impl From<u8> for RfProtocol {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::Undetermined,
            0x01 => Self::T1t,
            0x02 => Self::T2t,
            0x03 => Self::T3t,
            0x04 => Self::IsoDep,
            0x05 => Self::NfcDep,
            other => Self::Other(other),
        }
    }
}

/// RF interface (NCI Table 99)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RfInterface {
    NfceeDirect,
    Frame,
    IsoDep,
    NfcDep,
    Other(u8),
}

impl From<u8> for RfInterface {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::NfceeDirect,
            0x01 => Self::Frame,
            0x02 => Self::IsoDep,
            0x03 => Self::NfcDep,
            other => Self::Other(other),
        }
    }
}

/// RF_DEACTIVATE_CMD deactivation type (NCI Table 63)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeactivationMode {
    #[default]
    IdleMode = 0x00,
    SleepMode = 0x01,
    SleepAfMode = 0x02,
    Discovery = 0x03,
}

/// Continuation marker closing every RF_DISCOVER_NTF
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotificationType {
    LastNotification = 0x00,
    LastNotificationNfccLimit = 0x01,
    MoreNotification = 0x02,
}

impl NotificationType {
    pub fn is_last(&self) -> bool {
        !matches!(self, Self::MoreNotification)
    }
}

impl TryFrom<u8> for NotificationType {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0x00 => Ok(Self::LastNotification),
            0x01 => Ok(Self::LastNotificationNfccLimit),
            0x02 => Ok(Self::MoreNotification),
            value => Err(Error::Reserved {
                field: "notification type",
                value,
            }),
        }
    }
}

/// Status byte carried by responses (NCI Table 94)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    pub const OK: Self = Self(status::OK);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_ok(&self) -> bool {
        self.0 == status::OK
    }

    /// Symbolic name for logging; `None` for RFU/proprietary codes
    pub fn name(&self) -> Option<&'static str> {
        Some(match self.0 {
            status::OK => "STATUS_OK",
            status::REJECTED => "STATUS_REJECTED",
            status::RF_FRAME_CORRUPTED => "STATUS_RF_FRAME_CORRUPTED",
            status::FAILED => "STATUS_FAILED",
            status::NOT_INITIALIZED => "STATUS_NOT_INITIALIZED",
            status::SYNTAX_ERROR => "STATUS_SYNTAX_ERROR",
            status::SEMANTIC_ERROR => "STATUS_SEMANTIC_ERROR",
            status::INVALID_PARAM => "STATUS_INVALID_PARAM",
            status::MESSAGE_SIZE_EXCEEDED => "STATUS_MESSAGE_SIZE_EXCEEDED",
            status::DISCOVERY_ALREADY_STARTED => "DISCOVERY_ALREADY_STARTED",
            status::DISCOVERY_TARGET_ACTIVATION_FAILED => "DISCOVERY_TARGET_ACTIVATION_FAILED",
            status::DISCOVERY_TEAR_DOWN => "DISCOVERY_TEAR_DOWN",
            _ => return None,
        })
    }
}
