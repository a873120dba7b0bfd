// Decoders see raw controller bytes; malformed input must be an Err,
// never a panic.

use libnci::protocol::{
    Header, classify, decode_core_reset, decode_deactivate, decode_discover,
    decode_intf_activated, decode_proprietary_act, describe,
};
use libnci::types::{GroupId, MessageType};
use proptest::prelude::*;

proptest! {
    #[test]
    fn notification_decoders_never_panic(v in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode_intf_activated(&v, 0);
        let _ = decode_discover(&v, 0);
        let _ = decode_deactivate(&v);
    }

    #[test]
    fn response_decoders_never_panic(v in prop::collection::vec(any::<u8>(), 0..16)) {
        let _ = decode_core_reset(&v);
        let _ = decode_proprietary_act(&v);
        let _ = Header::parse(&v);
        let _ = describe(&v);
    }

    #[test]
    fn classify_matches_only_its_own_header(
        b0 in any::<u8>(),
        b1 in any::<u8>(),
        tail in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let mut frame = vec![b0, b1];
        frame.extend(tail);
        let expected = b0 == 0x61 && (b1 & 0x3F) == 0x05;
        prop_assert_eq!(
            classify(&frame, MessageType::Notification, GroupId::RfManagement, 0x05),
            expected
        );
    }

    #[test]
    fn discovered_id_never_exceeds_ten_bytes(
        id in prop::collection::vec(any::<u8>(), 0..=20),
    ) {
        let frame = libnci::test_support::rf_discover_ntf(
            1,
            &id,
            libnci::types::NotificationType::LastNotification,
        );
        // ids above ten bytes shift the marker; decoding may fail, but
        // whatever is decoded is clamped
        if let Ok(d) = decode_discover(&frame, 0) {
            prop_assert!(d.tag.id_len() <= 10);
            prop_assert_eq!(d.tag.id(), &id[..id.len().min(10)]);
        }
    }
}
