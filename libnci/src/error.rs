// libnci/src/error.rs

use thiserror::Error;

use crate::nci::NciState;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no transport configured")]
    TransportNotConfigured,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid message length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("payload too large: {len} bytes (max 255)")]
    PayloadTooLarge { len: usize },

    #[error("unexpected message: expected {expected:02x?}, got {actual:02x?}")]
    UnexpectedMessage { expected: [u8; 2], actual: [u8; 2] },

    #[error("controller status: {status:#04x}")]
    Status { status: u8 },

    #[error("reserved value {value:#04x} in {field}")]
    Reserved { field: &'static str, value: u8 },

    #[error("timed out in {state} after {after_ms} ms")]
    Timeout { state: NciState, after_ms: u64 },

    #[error("{operation} is not valid in state {state}")]
    InvalidState {
        operation: &'static str,
        state: NciState,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
