#[path = "../common/mod.rs"]
mod common;

use libnci::nci::NciState;
use libnci::tag::TagsPresentStatus;
use libnci::test_support::*;
use libnci::types::{DeactivationMode, NotificationType};
use libnci::Error;

#[test]
fn deactivate_single_tag_sequence() {
    let (mut nci, mock, _) = common::discovering_engine();
    mock.push_message(rf_intf_activated_ntf(&[1, 2, 3, 4]));
    assert_eq!(nci.run(), NciState::RfPollActive);
    mock.take_sent();

    nci.deactivate(DeactivationMode::IdleMode).unwrap();
    assert_eq!(mock.sent(), vec![vec![0x21, 0x06, 0x01, 0x00]]);
    assert_eq!(nci.state(), NciState::RfDeActivate2Wfr);
    // cleared on request, not on confirmation
    assert_eq!(nci.tag_count(), 0);
    assert_eq!(nci.tags_present_status(), TagsPresentStatus::Unknown);

    mock.push_message(RF_DEACTIVATE_RSP.to_vec());
    assert_eq!(nci.run(), NciState::RfDeActivate2Wfn);
    mock.push_message(RF_DEACTIVATE_NTF.to_vec());
    assert_eq!(nci.run(), NciState::RfIdleCmd);
}

#[test]
fn deactivate_passes_mode_from_poll_active() {
    let (mut nci, mock, _) = common::discovering_engine();
    mock.push_message(rf_intf_activated_ntf(&[1, 2, 3, 4]));
    nci.run();
    nci.deactivate(DeactivationMode::SleepAfMode).unwrap();
    assert_eq!(mock.last_sent(), Some(vec![0x21, 0x06, 0x01, 0x02]));
}

#[test]
fn deactivate_multiple_tags_needs_only_response() {
    let (mut nci, mock, _) = common::discovering_engine();
    mock.push_message(rf_discover_ntf(1, &[1; 4], NotificationType::MoreNotification));
    mock.push_message(rf_discover_ntf(2, &[2; 4], NotificationType::LastNotification));
    assert!(run_until(&mut nci, NciState::RfWaitForHostSelect, 2));

    nci.deactivate(DeactivationMode::SleepMode).unwrap();
    assert_eq!(mock.last_sent(), Some(vec![0x21, 0x06, 0x01, 0x00]));
    assert_eq!(nci.state(), NciState::RfDeActivate1Wfr);
    assert_eq!(nci.tag_count(), 0);

    mock.push_message(RF_DEACTIVATE_RSP.to_vec());
    assert_eq!(nci.run(), NciState::RfIdleCmd);
}

#[test]
fn deactivate_elsewhere_is_refused() {
    let (mut nci, mock, _) = common::discovering_engine();
    let sent = mock.sent().len();
    assert!(matches!(
        nci.deactivate(DeactivationMode::IdleMode),
        Err(Error::InvalidState {
            operation: "deactivate",
            state: NciState::RfDiscovery
        })
    ));
    assert_eq!(nci.state(), NciState::RfDiscovery);
    assert_eq!(mock.sent().len(), sent);
}

#[test]
fn deactivate_response_timeout() {
    let (mut nci, mock, clock) = common::discovering_engine();
    mock.push_message(rf_intf_activated_ntf(&[1, 2, 3, 4]));
    nci.run();
    nci.deactivate(DeactivationMode::IdleMode).unwrap();
    clock.advance(9);
    assert_eq!(nci.run(), NciState::RfDeActivate2Wfr);
    clock.advance(1);
    assert_eq!(nci.run(), NciState::Error);
}

#[test]
fn rejected_deactivation_is_error() {
    let (mut nci, mock, _) = common::discovering_engine();
    mock.push_message(rf_intf_activated_ntf(&[1, 2, 3, 4]));
    nci.run();
    nci.deactivate(DeactivationMode::IdleMode).unwrap();
    mock.push_message(vec![0x41, 0x06, 0x01, 0x06]);
    assert_eq!(nci.run(), NciState::Error);
    assert_eq!(nci.last_error(), Some(&Error::Status { status: 0x06 }));
}

#[test]
fn unrelated_notification_before_deactivate_ntf_is_ignored() {
    let (mut nci, mock, _) = common::discovering_engine();
    mock.push_message(rf_intf_activated_ntf(&[1, 2, 3, 4]));
    nci.run();
    nci.deactivate(DeactivationMode::IdleMode).unwrap();
    mock.push_message(RF_DEACTIVATE_RSP.to_vec());
    nci.run();
    mock.push_message(CORE_GENERIC_ERROR_NTF.to_vec());
    mock.push_message(RF_DEACTIVATE_NTF.to_vec());
    assert_eq!(nci.run(), NciState::RfDeActivate2Wfn);
    assert_eq!(nci.run(), NciState::RfIdleCmd);
}
