// libnci/src/protocol/notifications/mod.rs
//! Decoders for the RF notifications the engine acts on. Layouts differ
//! per notification, so each decoder reads fields at fixed offsets of the
//! received frame (header included).

pub mod activation;
pub mod deactivation;
pub mod discovery;

pub use activation::{activated_interface, decode_intf_activated};
pub use deactivation::{DeactivationInfo, decode_deactivate};
pub use discovery::{Discovered, decode_discover};

use crate::constants::MAX_ID_LEN;
use crate::protocol::parser::{byte_at, slice_at};
use crate::Result;

/// Read `[len][id...]` at `offset`, clamping the length to MAX_ID_LEN.
pub(crate) fn nfcid_at(frame: &[u8], offset: usize) -> Result<&[u8]> {
    let announced = byte_at(frame, offset)? as usize;
    let len = announced.min(MAX_ID_LEN);
    if announced > len {
        log::debug!("NFCID of {} bytes truncated to {}", announced, len);
    }
    slice_at(frame, offset + 1, len)
}
