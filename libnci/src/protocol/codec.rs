// libnci/src/protocol/codec.rs

use crate::constants::{MAX_PAYLOAD_SIZE, MSG_HEADER_SIZE, OID_MASK, PBF_CLEAR_MASK};
use crate::types::{GroupId, MessageType};
use crate::{Error, Result};

use super::commands::Command;
use super::header::Header;

/// First header byte for a message type and group, PBF cleared.
pub fn header_byte0(mt: MessageType, gid: GroupId) -> u8 {
    ((mt as u8) | (gid as u8)) & PBF_CLEAR_MASK
}

/// Encode a control packet: 3-byte header followed by the payload.
/// An empty payload yields a bare header with length 0.
pub fn encode(mt: MessageType, gid: GroupId, oid: u8, payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(Error::PayloadTooLarge { len: payload.len() });
    }

    let mut out = Vec::with_capacity(MSG_HEADER_SIZE + payload.len());
    out.push(header_byte0(mt, gid));
    out.push(oid & OID_MASK);
    out.push(payload.len() as u8);
    out.extend_from_slice(payload);
    Ok(out)
}

/// Encode a Command into a full control packet.
pub fn encode_command(cmd: &Command) -> Result<Vec<u8>> {
    encode(MessageType::Command, cmd.group(), cmd.opcode(), &cmd.payload())
}

/// True iff the first two bytes of `frame` carry this MT/GID/OID.
/// Length and payload are not inspected.
pub fn classify(frame: &[u8], mt: MessageType, gid: GroupId, oid: u8) -> bool {
    match frame {
        [b0, b1, ..] => *b0 == header_byte0(mt, gid) && *b1 == oid & OID_MASK,
        _ => false,
    }
}

/// Human readable one-line summary of a frame, e.g. `RSP CORE 0x00 len=3 [00 10 01]`.
pub fn describe(frame: &[u8]) -> String {
    let header = match Header::parse(frame) {
        Ok(h) => h,
        Err(_) => return format!("<short frame [{}]>", crate::utils::hex_join(frame, " ")),
    };

    let mt = header
        .message_type()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("MT?{:#04x}", header.mt));
    let gid = header
        .group()
        .map(|g| g.to_string())
        .unwrap_or_else(|| format!("GID?{:#04x}", header.gid));
    let payload = frame.get(MSG_HEADER_SIZE..).unwrap_or(&[]);

    format!(
        "{} {} {:#04x} len={} [{}]",
        mt,
        gid,
        header.oid,
        header.payload_len,
        crate::utils::hex_join(payload, " ")
    )
}
