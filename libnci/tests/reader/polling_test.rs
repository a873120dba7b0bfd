#[path = "../common/mod.rs"]
mod common;

use libnci::nci::NciState;
use libnci::reader::{Reader, ReaderEvent, ReaderState};
use libnci::test_support::*;
use libnci::transport::MockTransport;
use libnci::types::NotificationType;
use libnci::utils::ManualClock;

/// Reader whose engine has booted and started discovery.
fn polling_reader() -> (Reader, MockTransport, ManualClock) {
    let (nci, mock, clock) = common::engine();
    let mut reader = Reader::new(nci);
    let mut events = Vec::new();
    for rsp in boot_responses() {
        events.extend(reader.run());
        mock.push_message(rsp);
        events.extend(reader.run());
    }
    assert_eq!(events, vec![ReaderEvent::PollingStarted]);
    mock.push_message(RF_DISCOVER_RSP.to_vec());
    assert_eq!(reader.run(), None);
    assert_eq!(reader.nci().state(), NciState::RfDiscovery);
    (reader, mock, clock)
}

/// Let the reader deactivate a single tag and restart discovery.
fn recycle_single(reader: &mut Reader, mock: &MockTransport) {
    assert_eq!(reader.run(), None);
    assert_eq!(reader.nci().state(), NciState::RfDeActivate2Wfr);
    mock.push_message(RF_DEACTIVATE_RSP.to_vec());
    reader.run();
    mock.push_message(RF_DEACTIVATE_NTF.to_vec());
    reader.run();
    assert_eq!(reader.nci().state(), NciState::RfIdleWfr);
    mock.push_message(RF_DISCOVER_RSP.to_vec());
    assert_eq!(reader.run(), None);
}

#[test]
fn tag_reported_once_then_removed() {
    let (mut reader, mock, clock) = polling_reader();

    mock.push_message(rf_intf_activated_ntf(&[0x04, 0xA1, 0xB2, 0xC3]));
    match reader.run() {
        Some(ReaderEvent::TagsDetected(tags)) => {
            assert_eq!(tags.len(), 1);
            assert_eq!(tags[0].to_hex(), "04a1b2c3");
        }
        other => panic!("expected TagsDetected, got {:?}", other),
    }
    assert_eq!(reader.state(), ReaderState::SingleTagPresent);
    assert!(!reader.nci().has_new_tag());

    // the tag stays in the field for another discovery cycle
    recycle_single(&mut reader, &mock);
    mock.push_message(rf_intf_activated_ntf(&[0x04, 0xA1, 0xB2, 0xC3]));
    assert_eq!(reader.run(), None);
    assert_eq!(reader.state(), ReaderState::SingleTagPresent);

    // then leaves
    recycle_single(&mut reader, &mock);
    clock.advance(500);
    assert_eq!(reader.run(), Some(ReaderEvent::TagsRemoved));
    assert_eq!(reader.state(), ReaderState::NoTagPresent);

    // and comes back
    mock.push_message(rf_intf_activated_ntf(&[0x04, 0xA1, 0xB2, 0xC3]));
    assert!(matches!(reader.run(), Some(ReaderEvent::TagsDetected(_))));
}

#[test]
fn multiple_tags_reported_together() {
    let (mut reader, mock, _) = polling_reader();
    mock.push_message(rf_discover_ntf(1, &[1; 4], NotificationType::MoreNotification));
    mock.push_message(rf_discover_ntf(2, &[2; 7], NotificationType::LastNotification));

    assert_eq!(reader.run(), None);
    match reader.run() {
        Some(ReaderEvent::TagsDetected(tags)) => {
            assert_eq!(tags.len(), 2);
            assert_eq!(tags[1].id_len(), 7);
        }
        other => panic!("expected TagsDetected, got {:?}", other),
    }
    assert_eq!(reader.state(), ReaderState::MultipleTagsPresent);

    assert_eq!(reader.run(), None);
    assert_eq!(reader.nci().state(), NciState::RfDeActivate1Wfr);
    mock.push_message(RF_DEACTIVATE_RSP.to_vec());
    reader.run();
    assert_eq!(reader.nci().state(), NciState::RfIdleWfr);
}

#[test]
fn engine_failure_restarts_polling() {
    let (mut reader, mock, clock) = polling_reader();
    mock.push_message(rf_discover_ntf(1, &[1; 4], NotificationType::MoreNotification));
    reader.run();
    clock.advance(25);
    assert_eq!(reader.run(), Some(ReaderEvent::Recovering));
    assert_eq!(reader.state(), ReaderState::Initializing);

    let mut events = Vec::new();
    reader.run(); // Error -> HwResetRfc
    for rsp in boot_responses() {
        events.extend(reader.run());
        mock.push_message(rsp);
        events.extend(reader.run());
    }
    assert_eq!(events, vec![ReaderEvent::PollingStarted]);
}
