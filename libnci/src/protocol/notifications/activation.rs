// libnci/src/protocol/notifications/activation.rs

use crate::constants::INTF_ACTIVATED_ID_OFFSET;
use crate::protocol::parser::byte_at;
use crate::tag::TagSnapshot;
use crate::types::{RfInterface, RfProtocol, TechnologyMode};
use crate::Result;

// RF_INTF_ACTIVATED_NTF: [hdr 3][disc id][interface][protocol][mode]
// [max payload][credits][params len][SENS_RES 2][NFCID1 len][NFCID1...]
const INTERFACE_OFFSET: usize = 4;
const PROTOCOL_OFFSET: usize = 5;
const MODE_OFFSET: usize = 6;

/// Snapshot of the single tag the controller activated.
pub fn decode_intf_activated(frame: &[u8], detected_at_ms: u64) -> Result<TagSnapshot> {
    let protocol = RfProtocol::from(byte_at(frame, PROTOCOL_OFFSET)?);
    let mode = TechnologyMode::from(byte_at(frame, MODE_OFFSET)?);
    let id = super::nfcid_at(frame, INTF_ACTIVATED_ID_OFFSET)?;
    Ok(TagSnapshot::new(id, detected_at_ms)
        .with_protocol(protocol)
        .with_mode(mode))
}

/// RF interface the controller activated the tag on
pub fn activated_interface(frame: &[u8]) -> Result<RfInterface> {
    byte_at(frame, INTERFACE_OFFSET).map(RfInterface::from)
}
