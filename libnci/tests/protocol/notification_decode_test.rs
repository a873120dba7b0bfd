#[path = "../common/mod.rs"]
mod common;

use libnci::constants::MAX_ID_LEN;
use libnci::protocol::{decode_deactivate, decode_discover, decode_intf_activated};
use libnci::test_support::{RF_DEACTIVATE_NTF, rf_intf_activated_ntf};
use libnci::types::{NotificationType, RfProtocol, TechnologyMode};

#[test]
fn ultralight_activation_capture() {
    let frame = common::fixtures::ultralight_activated_ntf();
    let tag = decode_intf_activated(&frame, 1234).unwrap();
    assert_eq!(tag.id(), &common::fixtures::ultralight_id()[..]);
    assert_eq!(tag.protocol(), RfProtocol::T2t);
    assert_eq!(tag.mode(), TechnologyMode::PassivePollA);
    assert_eq!(tag.detected_at_ms(), 1234);
    assert_eq!(tag.to_string(), "UniqueID = 04 a2 2d 1a 3e 4d 80");
}

#[test]
fn discover_capture_with_more_marker() {
    let d = decode_discover(&common::fixtures::discover_ntf_more(), 0).unwrap();
    assert_eq!(d.tag.id(), &[0x11, 0x22, 0x33, 0x44]);
    assert_eq!(d.marker, NotificationType::MoreNotification);
    assert!(!d.marker.is_last());
}

#[test]
fn oversized_id_is_clamped() {
    let id: Vec<u8> = (0x10..0x1C).collect();
    let tag = decode_intf_activated(&rf_intf_activated_ntf(&id), 0).unwrap();
    assert_eq!(tag.id_len(), MAX_ID_LEN);
    assert_eq!(tag.id(), &id[..MAX_ID_LEN]);
}

#[test]
fn deactivation_notification() {
    let info = decode_deactivate(&RF_DEACTIVATE_NTF).unwrap();
    assert_eq!(info.mode, 0x00);
    assert_eq!(info.reason, 0x00);
}
