// libnci/src/protocol/responses/proprietary.rs

use crate::constants::oid;
use crate::protocol::parser::slice_at;
use crate::types::GroupId;
use crate::Result;

/// Firmware build reported by NCI_PROPRIETARY_ACT_RSP (PN7150 datasheet,
/// Table 24). Older firmware answers with the status byte only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion(pub [u8; 4]);

/// Validate an NCI_PROPRIETARY_ACT_RSP and return the firmware bytes if present.
pub fn decode_proprietary_act(frame: &[u8]) -> Result<Option<FirmwareVersion>> {
    super::expect_ok(frame, GroupId::Proprietary, oid::proprietary::ACT, None)?;
    match slice_at(frame, 4, 4) {
        Ok(fw) => {
            let mut arr = [0u8; 4];
            arr.copy_from_slice(fw);
            Ok(Some(FirmwareVersion(arr)))
        }
        Err(_) => Ok(None),
    }
}
