// libnci/src/utils/hex.rs
//! Lowercase hex rendering for tag identifiers and frame traces.

use std::fmt::Write;

/// Render `bytes` as lowercase hex with `sep` between bytes:
/// `hex_join(&[0x04, 0xa1], " ")` is `"04 a1"`.
pub fn hex_join(bytes: &[u8], sep: &str) -> String {
    let mut out = String::with_capacity(bytes.len() * (2 + sep.len()));
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        // infallible on String
        let _ = write!(out, "{:02x}", b);
    }
    out
}
