// libnci/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! Canned controller messages (as a PN7150 sends them) and helpers that
//! drive an engine over a MockTransport through the boot handshake.
#![allow(dead_code)]

use crate::nci::{Nci, NciBuilder, NciConfig, NciState};
use crate::transport::MockTransport;
use crate::types::NotificationType;
use crate::utils::ManualClock;
use crate::Result;

#[doc(hidden)]
pub const CORE_RESET_CMD: [u8; 4] = [0x20, 0x00, 0x01, 0x00];
/// STATUS_OK, NCI 1.0, configuration reset
#[doc(hidden)]
pub const CORE_RESET_RSP: [u8; 6] = [0x40, 0x00, 0x03, 0x00, 0x10, 0x01];
#[doc(hidden)]
pub const CORE_INIT_CMD: [u8; 3] = [0x20, 0x01, 0x00];
/// Features, five RF interfaces, one logical connection, 255-byte packets
#[doc(hidden)]
pub const CORE_INIT_RSP: [u8; 25] = [
    0x40, 0x01, 0x16, 0x00, 0x03, 0x1E, 0x03, 0x00, 0x05, 0x01, 0x02, 0x03, 0x80, 0x82, 0x01,
    0x00, 0x00, 0xFF, 0x00, 0x01, 0x04, 0x00, 0x00, 0x00, 0x00,
];
#[doc(hidden)]
pub const PROP_ACT_CMD: [u8; 3] = [0x2F, 0x02, 0x00];
#[doc(hidden)]
pub const PROP_ACT_RSP: [u8; 8] = [0x4F, 0x02, 0x05, 0x00, 0x10, 0x08, 0x01, 0x01];
/// Passive poll A, B, F and 15693, each every period
#[doc(hidden)]
pub const RF_DISCOVER_CMD: [u8; 12] = [
    0x21, 0x03, 0x09, 0x04, 0x00, 0x01, 0x01, 0x01, 0x02, 0x01, 0x06, 0x01,
];
#[doc(hidden)]
pub const RF_DISCOVER_RSP: [u8; 4] = [0x41, 0x03, 0x01, 0x00];
#[doc(hidden)]
pub const RF_DEACTIVATE_RSP: [u8; 4] = [0x41, 0x06, 0x01, 0x00];
/// IdleMode, DH request
#[doc(hidden)]
pub const RF_DEACTIVATE_NTF: [u8; 5] = [0x61, 0x06, 0x02, 0x00, 0x00];
/// DISCOVERY_TARGET_ACTIVATION_FAILED
#[doc(hidden)]
pub const CORE_GENERIC_ERROR_NTF: [u8; 4] = [0x60, 0x07, 0x01, 0xA1];

/// RF_INTF_ACTIVATED_NTF for a T2T tag in passive poll A, Frame interface.
#[doc(hidden)]
pub fn rf_intf_activated_ntf(id: &[u8]) -> Vec<u8> {
    let mut payload = vec![
        0x01,                  // RF discovery id
        0x01,                  // interface: Frame
        0x02,                  // protocol: T2T
        0x00,                  // mode: passive poll A
        0xFF,                  // max data packet payload
        0x01,                  // initial credits
        (id.len() + 5) as u8,  // technology parameter length
        0x44,
        0x00,                  // SENS_RES
        id.len() as u8,
    ];
    payload.extend_from_slice(id);
    // SEL_RES, data exchange mode, bit rates, activation parameters
    payload.extend_from_slice(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x00]);
    frame(0x61, 0x05, payload)
}

/// RF_DISCOVER_NTF for a T2T candidate closed by `marker`.
#[doc(hidden)]
pub fn rf_discover_ntf(discovery_id: u8, id: &[u8], marker: NotificationType) -> Vec<u8> {
    let mut payload = vec![
        discovery_id,
        0x02, // protocol: T2T
        0x00, // mode: passive poll A
        (id.len() + 5) as u8,
        0x44,
        0x00,
        id.len() as u8,
    ];
    payload.extend_from_slice(id);
    payload.extend_from_slice(&[0x01, 0x00, marker as u8]);
    frame(0x61, 0x03, payload)
}

fn frame(b0: u8, b1: u8, payload: Vec<u8>) -> Vec<u8> {
    let mut f = vec![b0, b1, payload.len() as u8];
    f.extend(payload);
    f
}

/// Engine over a fresh MockTransport and ManualClock; the returned handles
/// share state with the ones the engine owns.
#[doc(hidden)]
pub fn mock_engine(config: NciConfig) -> Result<(Nci, MockTransport, ManualClock)> {
    let mock = MockTransport::new();
    let clock = ManualClock::new();
    let nci = NciBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_clock(Box::new(clock.clone()))
        .with_config(config)
        .build()?;
    Ok((nci, mock, clock))
}

/// Drive a freshly initialized engine through reset, init and vendor
/// activation with OK responses. Returns the state reached (`RfIdleCmd`).
#[doc(hidden)]
pub fn boot(nci: &mut Nci, mock: &MockTransport) -> NciState {
    for rsp in boot_responses() {
        nci.run();
        mock.push_message(rsp);
        nci.run();
    }
    nci.state()
}

/// Responses to the three boot commands, in order
#[doc(hidden)]
pub fn boot_responses() -> Vec<Vec<u8>> {
    vec![
        CORE_RESET_RSP.to_vec(),
        CORE_INIT_RSP.to_vec(),
        PROP_ACT_RSP.to_vec(),
    ]
}

/// initialize + boot + activate + RF_DISCOVER_RSP: the engine ends in
/// `RfDiscovery` with a fresh discovery window.
#[doc(hidden)]
pub fn booted_and_discovering(nci: &mut Nci, mock: &MockTransport) -> Result<()> {
    nci.initialize()?;
    boot(nci, mock);
    nci.activate()?;
    mock.push_message(RF_DISCOVER_RSP.to_vec());
    nci.run();
    Ok(())
}

/// Tick until `target` is reached, at most `max_ticks` times.
#[doc(hidden)]
pub fn run_until(nci: &mut Nci, target: NciState, max_ticks: usize) -> bool {
    (0..max_ticks).any(|_| nci.run() == target)
}
