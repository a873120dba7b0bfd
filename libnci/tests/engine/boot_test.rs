#[path = "../common/mod.rs"]
mod common;

use libnci::nci::{NciConfig, NciState};
use libnci::test_support::*;
use libnci::types::ResetType;
use libnci::utils::Clock;
use libnci::Error;
use proptest::prelude::*;

#[test]
fn first_tick_is_deterministic() {
    let (mut nci, mock, _) = common::engine();
    assert_eq!(nci.state(), NciState::HwResetRfc);
    assert_eq!(nci.run(), NciState::HwResetWfr);
    assert_eq!(mock.sent(), vec![vec![0x20, 0x00, 0x01, 0x00]]);
}

#[test]
fn reset_config_variant() {
    let config = NciConfig::default().with_reset_type(ResetType::ResetConfig);
    let (mut nci, mock, _) = mock_engine(config).unwrap();
    nci.initialize().unwrap();
    nci.run();
    assert_eq!(mock.last_sent(), Some(vec![0x20, 0x00, 0x01, 0x01]));
}

#[test]
fn end_to_end_single_tag() {
    let (mut nci, mock, clock) = common::engine();

    assert_eq!(boot(&mut nci, &mock), NciState::RfIdleCmd);
    nci.activate().unwrap();
    assert_eq!(mock.last_sent(), Some(RF_DISCOVER_CMD.to_vec()));
    mock.push_message(RF_DISCOVER_RSP.to_vec());
    assert_eq!(nci.run(), NciState::RfDiscovery);

    clock.advance(120);
    mock.push_message(rf_intf_activated_ntf(&[0x04, 0xA1, 0xB2, 0xC3]));
    assert_eq!(nci.run(), NciState::RfPollActive);
    assert_eq!(nci.tag_count(), 1);

    let tag = nci.get_tag(0).unwrap();
    assert_eq!(tag.id(), &[0x04, 0xA1, 0xB2, 0xC3]);
    assert_eq!(tag.detected_at_ms(), clock.now_ms());
}

#[test]
fn boot_reports_controller_details() {
    let (mut nci, mock, _) = common::engine();
    nci.run();
    mock.push_message(common::fixtures::core_reset_rsp_nci_11());
    nci.run();
    assert_eq!(nci.nci_version(), Some(0x11));
}

#[test]
fn vendor_activation_failure_is_error() {
    let (mut nci, mock, _) = common::engine();
    assert!(!run_until(&mut nci, NciState::EnableCustomCommandsWfr, 1));
    mock.push_message(CORE_RESET_RSP.to_vec());
    mock.push_message(CORE_INIT_RSP.to_vec());
    assert!(run_until(&mut nci, NciState::EnableCustomCommandsWfr, 10));
    mock.push_message(vec![0x4F, 0x02, 0x01, 0x03]);
    assert_eq!(nci.run(), NciState::Error);
    assert_eq!(nci.last_error(), Some(&Error::Status { status: 0x03 }));
}

#[test]
fn idle_engine_stays_idle() {
    let (mut nci, mock, clock) = common::engine();
    boot(&mut nci, &mock);
    let sent = mock.sent().len();
    for _ in 0..10 {
        clock.advance(1000);
        assert_eq!(nci.run(), NciState::RfIdleCmd);
    }
    assert_eq!(mock.sent().len(), sent);
}

proptest! {
    // Quiet ticks before the deadline never fail; the first tick at or
    // past it always does.
    #[test]
    fn reset_timeout_is_monotonic(steps in prop::collection::vec(0u64..4, 0..40)) {
        let (mut nci, _mock, clock) = common::engine();
        nci.run();
        let mut elapsed = 0;
        for step in steps {
            if elapsed + step >= 20 {
                break;
            }
            clock.advance(step);
            elapsed += step;
            prop_assert_eq!(nci.run(), NciState::HwResetWfr);
        }
        clock.advance(20 - elapsed);
        prop_assert_eq!(nci.run(), NciState::Error);
        let is_timeout = matches!(
            nci.last_error(),
            Some(Error::Timeout { state: NciState::HwResetWfr, after_ms: 20 })
        );
        prop_assert!(is_timeout);
    }
}
