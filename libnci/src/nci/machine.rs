// libnci/src/nci/machine.rs
//! One handler per state. Every handler runs to completion within a tick.

use log::{debug, info, warn};

use super::{Nci, NciState, trace_frame};
use crate::constants::{RF_DISCOVER_RSP_LEN, oid};
use crate::protocol::commands::Command;
use crate::protocol::notifications::{
    activated_interface, decode_deactivate, decode_discover, decode_intf_activated,
};
use crate::protocol::responses::{decode_core_reset, decode_proprietary_act, expect_ok, expect_response};
use crate::protocol::parser::status_of;
use crate::protocol::{classify, describe};
use crate::tag::TagsPresentStatus;
use crate::types::{GroupId, MessageType};
use crate::{Error, Result};

impl Nci {
    /// Advance the engine by at most one step and return the state it is
    /// in afterwards. Failures are not returned: they move the engine to
    /// `Error` (see [`Nci::last_error`]) and it recovers on the next call.
    pub fn run(&mut self) -> NciState {
        let now = self.clock.now_ms();
        match self.state {
            NciState::HwResetRfc => {
                let cmd = Command::CoreReset {
                    reset_type: self.config.reset_type,
                };
                let timeout_ms = self.config.reset_timeout_ms;
                let _ = self.send_then_wait(&cmd, NciState::HwResetWfr, timeout_ms);
            }
            NciState::HwResetWfr => self.on_core_reset_rsp(now),
            NciState::SwResetRfc => {
                let timeout_ms = self.config.init_timeout_ms;
                let _ = self.send_then_wait(&Command::CoreInit, NciState::SwResetWfr, timeout_ms);
            }
            NciState::SwResetWfr => self.on_core_init_rsp(now),
            NciState::EnableCustomCommandsRfc => {
                let timeout_ms = self.config.vendor_timeout_ms;
                let _ = self.send_then_wait(
                    &Command::ProprietaryAct,
                    NciState::EnableCustomCommandsWfr,
                    timeout_ms,
                );
            }
            NciState::EnableCustomCommandsWfr => self.on_proprietary_act_rsp(now),
            NciState::RfIdleWfr => self.on_discover_rsp(now),
            NciState::RfDiscovery => self.on_discovery(now),
            NciState::RfWaitForAllDiscoveries => self.on_enumeration(now),
            NciState::RfIdleCmd | NciState::RfWaitForHostSelect | NciState::RfPollActive => {
                self.drain()
            }
            NciState::RfDeActivate1Wfr => self.on_deactivate_rsp(now, NciState::RfIdleCmd),
            NciState::RfDeActivate2Wfr => self.on_deactivate_rsp(now, NciState::RfDeActivate2Wfn),
            NciState::RfDeActivate2Wfn => self.on_deactivate_ntf(now),
            NciState::Error => {
                // failure already recorded; stays in Error and retries next tick
                let _ = self.initialize();
            }
        }
        self.state
    }

    /// Take one pending frame. An empty read counts as nothing pending.
    fn receive(&mut self) -> Result<Option<Vec<u8>>> {
        if !self.transport.has_message() {
            return Ok(None);
        }
        let frame = self.transport.read()?;
        if frame.is_empty() {
            return Ok(None);
        }
        trace_frame("rx", &frame);
        Ok(Some(frame))
    }

    /// Pending frame for a waiting state. Nothing pending past the
    /// deadline, or a transport failure, moves the engine to `Error`.
    fn wait_for(&mut self, now: u64) -> Option<Vec<u8>> {
        match self.receive() {
            Ok(Some(frame)) => Some(frame),
            Ok(None) => {
                if self.timeout.is_expired(now) {
                    self.fail(Error::Timeout {
                        state: self.state,
                        after_ms: self.timeout.duration_ms(),
                    });
                }
                None
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    /// Transition on success, `Error` otherwise.
    fn advance(&mut self, checked: Result<()>, next: NciState) {
        match checked {
            Ok(()) => self.transition(next),
            Err(e) => self.fail(e),
        }
    }

    fn on_core_reset_rsp(&mut self, now: u64) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        let checked = decode_core_reset(&frame).map(|info| {
            info!(
                "NCI version {}.{}, configuration {}",
                info.version_major(),
                info.version_minor(),
                if info.config_status == 0 { "kept" } else { "reset" }
            );
            self.nci_version = Some(info.nci_version);
        });
        self.advance(checked, NciState::SwResetRfc);
    }

    fn on_core_init_rsp(&mut self, now: u64) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        // any CORE_INIT_RSP will do; its status is not inspected
        let checked = expect_response(&frame, GroupId::Core, oid::core::INIT);
        self.advance(checked, NciState::EnableCustomCommandsRfc);
    }

    fn on_proprietary_act_rsp(&mut self, now: u64) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        let checked = decode_proprietary_act(&frame).map(|fw| {
            if let Some(fw) = fw {
                info!("firmware {:02x?}", fw.0);
            }
            self.firmware = fw;
        });
        self.advance(checked, NciState::RfIdleCmd);
    }

    fn on_discover_rsp(&mut self, now: u64) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        let checked = expect_ok(
            &frame,
            GroupId::RfManagement,
            oid::rf::DISCOVER,
            Some(RF_DISCOVER_RSP_LEN),
        );
        self.advance(checked, NciState::RfDiscovery);
        if self.state == NciState::RfDiscovery {
            let window = self.config.discovery_timeout_ms;
            self.arm(window);
        }
    }

    fn on_discovery(&mut self, now: u64) {
        let frame = match self.receive() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                if self.timeout.is_expired(now) {
                    // nothing in range; keep polling with a fresh window
                    if self.registry.status() != TagsPresentStatus::NoneDetected {
                        debug!("no tag within {} ms", self.timeout.duration_ms());
                    }
                    self.registry.set_status(TagsPresentStatus::NoneDetected);
                    let window = self.config.discovery_timeout_ms;
                    self.arm(window);
                }
                return;
            }
            Err(e) => return self.fail(e),
        };

        if is_rf_ntf(&frame, oid::rf::INTF_ACTIVATED) {
            match decode_intf_activated(&frame, now) {
                Ok(tag) => {
                    info!(
                        "tag activated: {} ({:?} over {:?})",
                        tag,
                        tag.protocol(),
                        activated_interface(&frame).ok()
                    );
                    self.registry.reset();
                    self.registry.push(tag);
                    self.registry.set_status(TagsPresentStatus::NewSingle);
                    self.transition(NciState::RfPollActive);
                }
                Err(e) => self.fail(e),
            }
        } else if is_rf_ntf(&frame, oid::rf::DISCOVER) {
            self.registry.reset();
            self.registry.set_status(TagsPresentStatus::Multiple);
            self.on_discover_ntf(&frame, now);
        } else {
            debug!("ignored in {}: {}", self.state, describe(&frame));
        }
    }

    fn on_enumeration(&mut self, now: u64) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        if is_rf_ntf(&frame, oid::rf::DISCOVER) {
            self.on_discover_ntf(&frame, now);
        } else {
            debug!("ignored in {}: {}", self.state, describe(&frame));
        }
    }

    /// Store one enumerated tag; a terminal marker ends enumeration,
    /// otherwise the next notification is due within the enumeration window.
    fn on_discover_ntf(&mut self, frame: &[u8], now: u64) {
        let discovered = match decode_discover(frame, now) {
            Ok(d) => d,
            Err(e) => return self.fail(e),
        };
        info!("tag discovered: {} ({:?})", discovered.tag, discovered.marker);
        self.registry.push(discovered.tag);

        if discovered.marker.is_last() {
            info!("{} tag(s) enumerated", self.registry.len());
            self.transition(NciState::RfWaitForHostSelect);
        } else {
            if self.state != NciState::RfWaitForAllDiscoveries {
                self.transition(NciState::RfWaitForAllDiscoveries);
            }
            let window = self.config.enumeration_timeout_ms;
            self.arm(window);
        }
    }

    /// States waiting on the host: pending messages are read and dropped.
    fn drain(&mut self) {
        match self.receive() {
            Ok(Some(frame))
                if classify(&frame, MessageType::Notification, GroupId::Core, oid::core::GENERIC_ERROR) =>
            {
                let name = status_of(&frame)
                    .ok()
                    .and_then(|s| s.name())
                    .unwrap_or("unknown status");
                warn!("controller reported {} in {}", name, self.state);
            }
            Ok(Some(frame)) => debug!("ignored in {}: {}", self.state, describe(&frame)),
            Ok(None) => {}
            Err(e) => self.fail(e),
        }
    }

    fn on_deactivate_rsp(&mut self, now: u64, next: NciState) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        let checked = expect_ok(&frame, GroupId::RfManagement, oid::rf::DEACTIVATE, None);
        self.advance(checked, next);
        if self.state == NciState::RfDeActivate2Wfn {
            let timeout_ms = self.config.response_timeout_ms;
            self.arm(timeout_ms);
        }
    }

    fn on_deactivate_ntf(&mut self, now: u64) {
        let Some(frame) = self.wait_for(now) else {
            return;
        };
        if !is_rf_ntf(&frame, oid::rf::DEACTIVATE) {
            debug!("ignored in {}: {}", self.state, describe(&frame));
            return;
        }
        match decode_deactivate(&frame) {
            Ok(info) => {
                debug!("deactivated: type {:#04x}, reason {:#04x}", info.mode, info.reason);
                self.transition(NciState::RfIdleCmd);
            }
            Err(e) => self.fail(e),
        }
    }
}

fn is_rf_ntf(frame: &[u8], opcode: u8) -> bool {
    classify(frame, MessageType::Notification, GroupId::RfManagement, opcode)
}
