// libnci/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod header;
pub mod notifications;
pub mod parser;
pub mod responses;

pub use codec::{classify, describe, encode};
pub use commands::{Command, DiscoveryConfig};
pub use header::Header;
pub use notifications::{DeactivationInfo, Discovered, decode_deactivate, decode_discover, decode_intf_activated};
pub use responses::{
    CoreResetInfo, FirmwareVersion, decode_core_reset, decode_proprietary_act, expect_ok,
    expect_response,
};
