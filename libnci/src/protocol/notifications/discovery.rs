// libnci/src/protocol/notifications/discovery.rs

use crate::constants::{DISCOVER_ID_OFFSET, DISCOVER_PARAMS_LEN_OFFSET};
use crate::protocol::parser::byte_at;
use crate::tag::TagSnapshot;
use crate::types::{NotificationType, RfProtocol, TechnologyMode};
use crate::Result;

// RF_DISCOVER_NTF: [hdr 3][disc id][protocol][mode][params len]
// [SENS_RES 2][NFCID1 len][NFCID1...][...][notification type]
const PROTOCOL_OFFSET: usize = 4;
const MODE_OFFSET: usize = 5;

/// One candidate reported during multi-tag discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    pub tag: TagSnapshot,
    pub marker: NotificationType,
}

/// Decode an RF_DISCOVER_NTF. The continuation marker follows the
/// technology-specific parameters, at `7 + params_len`.
pub fn decode_discover(frame: &[u8], detected_at_ms: u64) -> Result<Discovered> {
    let params_len = byte_at(frame, DISCOVER_PARAMS_LEN_OFFSET)? as usize;
    let marker = NotificationType::try_from(byte_at(frame, DISCOVER_PARAMS_LEN_OFFSET + 1 + params_len)?)?;

    let protocol = RfProtocol::from(byte_at(frame, PROTOCOL_OFFSET)?);
    let mode = TechnologyMode::from(byte_at(frame, MODE_OFFSET)?);
    let id = super::nfcid_at(frame, DISCOVER_ID_OFFSET)?;

    Ok(Discovered {
        tag: TagSnapshot::new(id, detected_at_ms)
            .with_protocol(protocol)
            .with_mode(mode),
        marker,
    })
}
