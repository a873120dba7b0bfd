// libnci/src/protocol/header.rs

use crate::constants::{GID_MASK, MSG_HEADER_SIZE, OID_MASK, PBF_BIT};
use crate::types::{GroupId, MessageType};
use crate::{Error, Result};

/// NCI control packet header. Format:
/// byte0 = [MT(3) | PBF(1) | GID(4)], byte1 = [RFU(2) | OID(6)], byte2 = payload length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Raw MT bits; `message_type()` maps them to the enum
    pub mt: u8,
    pub pbf: bool,
    /// Raw GID nibble; `group()` maps it to the enum
    pub gid: u8,
    pub oid: u8,
    pub payload_len: u8,
}

impl Header {
    /// Parse the three header bytes at the start of `frame`.
    pub fn parse(frame: &[u8]) -> Result<Self> {
        if frame.len() < MSG_HEADER_SIZE {
            return Err(Error::InvalidLength {
                expected: MSG_HEADER_SIZE,
                actual: frame.len(),
            });
        }
        Ok(Self {
            mt: frame[0] & crate::constants::MT_MASK,
            pbf: frame[0] & PBF_BIT != 0,
            gid: frame[0] & GID_MASK,
            oid: frame[1] & OID_MASK,
            payload_len: frame[2],
        })
    }

    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_header_byte(self.mt)
    }

    pub fn group(&self) -> Option<GroupId> {
        GroupId::from_header_byte(self.gid)
    }

    /// Length of the whole frame this header announces
    pub fn frame_len(&self) -> usize {
        MSG_HEADER_SIZE + self.payload_len as usize
    }
}
