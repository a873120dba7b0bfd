// libnci/src/constants.rs
//! NCI wire constants (NCI Specification V1.0) and driver defaults

/// Size of the control packet header: [MT|PBF|GID] [OID] [L]
pub const MSG_HEADER_SIZE: usize = 3;

/// Maximum control packet payload length
pub const MAX_PAYLOAD_SIZE: usize = 255;

/// Byte 0 mask clearing the Packet Boundary Flag (never segmented)
pub const PBF_CLEAR_MASK: u8 = 0xEF;

/// Packet Boundary Flag bit in byte 0
pub const PBF_BIT: u8 = 0x10;

/// Byte 1 mask clearing the RFU bits above the 6-bit opcode
pub const OID_MASK: u8 = 0x3F;

/// Byte 0 mask of the message type bits
pub const MT_MASK: u8 = 0xE0;

/// Byte 0 mask of the group identifier bits
pub const GID_MASK: u8 = 0x0F;

/// Offset of the status byte in every response that carries one
pub const STATUS_OFFSET: usize = 3;

/// Opcode identifiers, grouped by GID.
pub mod oid {
    /// Core group
    pub mod core {
        pub const RESET: u8 = 0x00;
        pub const INIT: u8 = 0x01;
        pub const GENERIC_ERROR: u8 = 0x07;
    }

    /// RF management group
    pub mod rf {
        pub const DISCOVER: u8 = 0x03;
        pub const INTF_ACTIVATED: u8 = 0x05;
        pub const DEACTIVATE: u8 = 0x06;
    }

    /// Proprietary group (PN7150 datasheet, section 5.4)
    pub mod proprietary {
        pub const ACT: u8 = 0x02;
    }
}

/// Generic status codes (NCI Table 94)
pub mod status {
    pub const OK: u8 = 0x00;
    pub const REJECTED: u8 = 0x01;
    pub const RF_FRAME_CORRUPTED: u8 = 0x02;
    pub const FAILED: u8 = 0x03;
    pub const NOT_INITIALIZED: u8 = 0x04;
    pub const SYNTAX_ERROR: u8 = 0x05;
    pub const SEMANTIC_ERROR: u8 = 0x06;
    pub const INVALID_PARAM: u8 = 0x09;
    pub const MESSAGE_SIZE_EXCEEDED: u8 = 0x0A;
    pub const DISCOVERY_ALREADY_STARTED: u8 = 0xA0;
    pub const DISCOVERY_TARGET_ACTIVATION_FAILED: u8 = 0xA1;
    pub const DISCOVERY_TEAR_DOWN: u8 = 0xA2;
}

/// Exact length of a CORE_RESET_RSP frame (header + status, version, config status)
pub const CORE_RESET_RSP_LEN: usize = 6;

/// Exact length of an RF_DISCOVER_RSP frame (header + status)
pub const RF_DISCOVER_RSP_LEN: usize = 4;

/// Offset of the NFCID length byte in RF_INTF_ACTIVATED_NTF
pub const INTF_ACTIVATED_ID_OFFSET: usize = 12;

/// Offset of the NFCID length byte in RF_DISCOVER_NTF
pub const DISCOVER_ID_OFFSET: usize = 9;

/// Offset of the technology-specific parameter length in RF_DISCOVER_NTF.
/// The continuation marker sits right after those parameters.
pub const DISCOVER_PARAMS_LEN_OFFSET: usize = 6;

/// Longest NFCID the registry keeps (NFCID1 triple size)
pub const MAX_ID_LEN: usize = 10;

/// Tags the PN7150 reports in one discovery cycle
pub const MAX_TAGS: usize = 3;

/// Default timeouts (milliseconds)
pub const RESET_TIMEOUT_MS: u64 = 20;
pub const INIT_TIMEOUT_MS: u64 = 20;
pub const VENDOR_TIMEOUT_MS: u64 = 10;
pub const RESPONSE_TIMEOUT_MS: u64 = 10;
pub const DISCOVERY_TIMEOUT_MS: u64 = 500;
pub const ENUMERATION_TIMEOUT_MS: u64 = 25;

/// Default PN7150 I2C address
pub const PN7150_I2C_ADDRESS: u8 = 0x28;
