// libnci/src/protocol/responses/mod.rs

pub mod core;
pub mod proprietary;

pub use self::core::{CoreResetInfo, decode_core_reset};
pub use proprietary::{FirmwareVersion, decode_proprietary_act};

use crate::types::{GroupId, MessageType};
use crate::{Error, Result};

use super::codec::{classify, header_byte0};
use super::parser;

/// Check that `frame` is the response to `gid`/`oid`, optionally of an
/// exact frame length, carrying STATUS_OK.
pub fn expect_ok(frame: &[u8], gid: GroupId, oid: u8, exact_len: Option<usize>) -> Result<()> {
    expect_response(frame, gid, oid)?;
    if let Some(len) = exact_len {
        parser::ensure_exact_len(frame, len)?;
    }
    parser::expect_status_ok(frame)
}

/// Check only the message type of a response frame.
pub fn expect_response(frame: &[u8], gid: GroupId, oid: u8) -> Result<()> {
    if classify(frame, MessageType::Response, gid, oid) {
        return Ok(());
    }
    Err(Error::UnexpectedMessage {
        expected: [header_byte0(MessageType::Response, gid), oid],
        actual: [
            frame.first().copied().unwrap_or(0),
            frame.get(1).copied().unwrap_or(0),
        ],
    })
}
