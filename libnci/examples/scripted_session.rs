// Scripted reader session against the mock transport
//
// Plays the part of a PN7150: answers the boot handshake, presents one tag,
// empties the field, then presents a pair of tags and empties it again.
// Run with RUST_LOG=debug to see the engine's state transitions.

use anyhow::Context;
use libnci::prelude::*;
use libnci::test_support::*;

/// What the simulated controller does next
enum Step {
    Frame(Vec<u8>),
    /// Nothing in the field for this long
    Silence(u64),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mock = MockTransport::new();
    let clock = ManualClock::new();
    let nci = NciBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_clock(Box::new(clock.clone()))
        .build()
        .context("building engine")?;
    let mut reader = Reader::new(nci);
    reader.nci_mut().initialize()?;

    let mut script: Vec<Step> = boot_responses().into_iter().map(Step::Frame).collect();
    script.extend([
        Step::Frame(RF_DISCOVER_RSP.to_vec()),
        Step::Frame(rf_intf_activated_ntf(&[0x04, 0xA1, 0xB2, 0xC3])),
        Step::Frame(RF_DEACTIVATE_RSP.to_vec()),
        Step::Frame(RF_DEACTIVATE_NTF.to_vec()),
        Step::Frame(RF_DISCOVER_RSP.to_vec()),
        Step::Silence(500),
        Step::Frame(rf_discover_ntf(
            1,
            &[0x11, 0x22, 0x33, 0x44],
            NotificationType::MoreNotification,
        )),
        Step::Frame(rf_discover_ntf(
            2,
            &[0x04, 0x55, 0x66, 0x77, 0x88, 0x99, 0xAA],
            NotificationType::LastNotification,
        )),
        Step::Frame(RF_DEACTIVATE_RSP.to_vec()),
        Step::Frame(RF_DISCOVER_RSP.to_vec()),
        Step::Silence(500),
    ]);
    let mut script = script.into_iter();

    for tick in 0..48 {
        // answer whenever the engine waits for the controller
        if mock.pending() == 0 && reader.nci().state().is_waiting() {
            match script.next() {
                Some(Step::Frame(frame)) => mock.push_message(frame),
                Some(Step::Silence(ms)) => clock.advance(ms),
                None => {}
            }
        }

        if let Some(event) = reader.run() {
            match event {
                ReaderEvent::TagsDetected(tags) => {
                    println!("[{:>2}] {} tag(s):", tick, tags.len());
                    for tag in tags {
                        println!("      {} ({:?})", tag, tag.protocol());
                    }
                }
                other => println!("[{:>2}] {:?}", tick, other),
            }
        }
        clock.advance(1);
    }

    println!("final reader state: {}", reader.state());
    Ok(())
}
