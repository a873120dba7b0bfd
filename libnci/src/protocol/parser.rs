// libnci/src/protocol/parser.rs
//! Bounds-checked access into received frames. NCI payloads have no generic
//! schema, so decoders read fields at opcode-specific offsets through these.

use crate::constants::STATUS_OFFSET;
use crate::types::Status;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Status byte of a response frame (always right after the header).
pub fn status_of(frame: &[u8]) -> Result<Status> {
    byte_at(frame, STATUS_OFFSET).map(Status::new)
}

/// Fail with `Error::Status` unless the response carries STATUS_OK.
pub fn expect_status_ok(frame: &[u8]) -> Result<()> {
    let status = status_of(frame)?;
    if !status.is_ok() {
        return Err(Error::Status {
            status: status.as_u8(),
        });
    }
    Ok(())
}
