// libnci/src/utils/mod.rs
//! Utilities for libnci: the clock capability, the timeout tracker every
//! waiting state arms, and hex helpers used for logging and tag display.

pub mod clock;
pub mod hex;
pub mod timeout;

pub use clock::*;
pub use hex::*;
pub use timeout::*;
