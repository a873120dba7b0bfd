// libnci/src/lib.rs

//! libnci
//!
//! Nonblocking NFC Controller Interface (NCI) driver for PN7150-class
//! controllers: boots the controller, runs RF discovery and enumerates the
//! tags in the field. Transport and clock are injected, so the engine runs
//! the same against real hardware and in tests.

pub mod constants;
pub mod error;
pub mod nci;
pub mod prelude;
pub mod protocol;
pub mod reader;
#[cfg(feature = "async")]
pub mod runtime;
pub mod tag;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the protocol value types are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
