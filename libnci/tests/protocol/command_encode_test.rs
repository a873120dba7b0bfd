use libnci::nci::NciConfig;
use libnci::protocol::{Command, DiscoveryConfig, Header, classify, describe, encode};
use libnci::test_support::*;
use libnci::types::{DeactivationMode, GroupId, MessageType, ResetType, TechnologyMode};

#[test]
fn boot_commands_match_controller_fixtures() {
    let reset = Command::CoreReset {
        reset_type: ResetType::KeepConfig,
    };
    assert_eq!(reset.encode().unwrap(), CORE_RESET_CMD);
    assert_eq!(Command::CoreInit.encode().unwrap(), CORE_INIT_CMD);
    assert_eq!(Command::ProprietaryAct.encode().unwrap(), PROP_ACT_CMD);
}

#[test]
fn default_discover_command() {
    let cmd = Command::RfDiscover {
        configurations: NciConfig::default().discovery_configs(),
    };
    assert_eq!(cmd.encode().unwrap(), RF_DISCOVER_CMD);
}

#[test]
fn discover_with_listen_mode_and_frequency() {
    let cmd = Command::RfDiscover {
        configurations: vec![
            DiscoveryConfig::new(TechnologyMode::PassivePollA),
            DiscoveryConfig::new(TechnologyMode::PassiveListenA).with_frequency(2),
        ],
    };
    assert_eq!(
        cmd.encode().unwrap(),
        vec![0x21, 0x03, 0x05, 0x02, 0x00, 0x01, 0x80, 0x02]
    );
}

#[test]
fn deactivate_commands() {
    for (mode, byte) in [
        (DeactivationMode::IdleMode, 0x00),
        (DeactivationMode::SleepMode, 0x01),
        (DeactivationMode::SleepAfMode, 0x02),
        (DeactivationMode::Discovery, 0x03),
    ] {
        let frame = Command::RfDeactivate { mode }.encode().unwrap();
        assert_eq!(frame, vec![0x21, 0x06, 0x01, byte]);
    }
}

#[test]
fn every_fixture_header_announces_its_length() {
    let frames: Vec<Vec<u8>> = vec![
        CORE_RESET_RSP.to_vec(),
        CORE_INIT_RSP.to_vec(),
        PROP_ACT_RSP.to_vec(),
        RF_DISCOVER_RSP.to_vec(),
        RF_DEACTIVATE_RSP.to_vec(),
        RF_DEACTIVATE_NTF.to_vec(),
        rf_intf_activated_ntf(&[1, 2, 3, 4, 5, 6, 7]),
    ];
    for f in frames {
        let h = Header::parse(&f).unwrap();
        assert_eq!(h.frame_len(), f.len(), "frame {:02x?}", f);
        assert!(!h.pbf);
    }
}

#[test]
fn encoded_frames_classify_and_describe() {
    let frame = encode(MessageType::Notification, GroupId::RfManagement, 0x05, &[0x01]).unwrap();
    assert_eq!(frame, vec![0x61, 0x05, 0x01, 0x01]);
    assert!(classify(&frame, MessageType::Notification, GroupId::RfManagement, 0x05));
    assert!(!classify(&frame, MessageType::Response, GroupId::RfManagement, 0x05));
    assert_eq!(describe(&frame), "NTF RF 0x05 len=1 [01]");
}
