use libnci::nci::NciState;
use libnci::test_support::{CORE_RESET_RSP, mock_engine};
use libnci::transport::{MockTransport, Transport};
use libnci::nci::NciConfig;

#[test]
fn boxed_mock_shares_state_with_handle() {
    let handle = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(handle.clone());
    boxed.initialize().unwrap();
    boxed.write(&[0x20, 0x01, 0x00]).unwrap();
    handle.push_message(CORE_RESET_RSP.to_vec());

    assert_eq!(handle.init_count(), 1);
    assert_eq!(handle.take_sent(), vec![vec![0x20, 0x01, 0x00]]);
    assert!(boxed.has_message());
    assert_eq!(boxed.read().unwrap(), CORE_RESET_RSP.to_vec());
    assert_eq!(handle.pending(), 0);
}

#[test]
fn empty_read_is_treated_as_no_message() {
    // a transport claiming a message but returning nothing must not
    // count as a response
    struct Flaky;
    impl Transport for Flaky {
        fn initialize(&mut self) -> libnci::Result<()> {
            Ok(())
        }
        fn has_message(&mut self) -> bool {
            true
        }
        fn write(&mut self, _frame: &[u8]) -> libnci::Result<()> {
            Ok(())
        }
        fn read(&mut self) -> libnci::Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    let mut nci = libnci::nci::NciBuilder::new()
        .with_transport(Box::new(Flaky))
        .with_clock(Box::new(libnci::utils::ManualClock::new()))
        .build()
        .unwrap();
    nci.initialize().unwrap();
    assert_eq!(nci.run(), NciState::HwResetWfr);
    assert_eq!(nci.run(), NciState::HwResetWfr);
}

#[test]
fn init_failure_keeps_engine_in_error() {
    let (mut nci, mock, _) = mock_engine(NciConfig::default()).unwrap();
    mock.set_init_failures(2);
    assert!(nci.initialize().is_err());
    assert_eq!(nci.run(), NciState::Error);
    assert_eq!(nci.run(), NciState::HwResetRfc);
    assert_eq!(mock.init_count(), 3);
}
