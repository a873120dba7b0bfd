// libnci/src/nci/mod.rs
//! Protocol engine: a polled, nonblocking state machine that boots the
//! controller, runs RF discovery and enumerates the tags it reports.
//!
//! The host calls [`Nci::run`] from its own loop. Each call does at most
//! one state's worth of work and never blocks.

pub mod builder;
pub mod config;
mod machine;
pub mod state;

pub use builder::NciBuilder;
pub use config::NciConfig;
pub use state::NciState;

use log::{debug, trace, warn};

use crate::protocol::commands::Command;
use crate::protocol::responses::FirmwareVersion;
use crate::tag::{TagRegistry, TagSnapshot, TagsPresentStatus};
use crate::transport::Transport;
use crate::types::{DeactivationMode, Status};
use crate::utils::{Clock, Timeout};
use crate::{Error, Result};

/// NCI protocol engine bound to one transport.
pub struct Nci {
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
    config: NciConfig,
    state: NciState,
    timeout: Timeout,
    registry: TagRegistry,
    last_error: Option<Error>,
    nci_version: Option<u8>,
    firmware: Option<FirmwareVersion>,
}

impl Nci {
    /// Prefer [`NciBuilder`]; this does not validate `config`.
    pub fn new(transport: Box<dyn Transport>, clock: Box<dyn Clock>, config: NciConfig) -> Self {
        Self {
            transport,
            clock,
            config,
            state: NciState::HwResetRfc,
            timeout: Timeout::disarmed(),
            registry: TagRegistry::new(),
            last_error: None,
            nci_version: None,
            firmware: None,
        }
    }

    /// Restart from `HwResetRfc`: clears discovery state and brings the
    /// transport up again. A transport failure leaves the engine in
    /// `Error`, so the next tick retries.
    pub fn initialize(&mut self) -> Result<()> {
        self.registry.reset();
        self.timeout.disarm();
        if let Err(e) = self.transport.initialize() {
            self.fail(e.clone());
            return Err(e);
        }
        self.transition(NciState::HwResetRfc);
        Ok(())
    }

    /// Start RF discovery. Only valid in `RfIdleCmd`; starts a new
    /// discovery cycle, so previously found tags are forgotten.
    pub fn activate(&mut self) -> Result<()> {
        if self.state != NciState::RfIdleCmd {
            return Err(Error::InvalidState {
                operation: "activate",
                state: self.state,
            });
        }
        self.registry.reset();
        let cmd = Command::RfDiscover {
            configurations: self.config.discovery_configs(),
        };
        let timeout_ms = self.config.response_timeout_ms;
        self.send_then_wait(&cmd, NciState::RfIdleWfr, timeout_ms)
    }

    /// Stop discovery and release the tag(s). The tag registry is cleared
    /// right away, before the controller confirms.
    ///
    /// With several tags enumerated (`RfWaitForHostSelect`) the controller
    /// only accepts IdleMode, so `mode` is ignored there.
    pub fn deactivate(&mut self, mode: DeactivationMode) -> Result<()> {
        let (mode, next) = match self.state {
            NciState::RfWaitForHostSelect => {
                (DeactivationMode::IdleMode, NciState::RfDeActivate1Wfr)
            }
            NciState::RfPollActive => (mode, NciState::RfDeActivate2Wfr),
            state => {
                return Err(Error::InvalidState {
                    operation: "deactivate",
                    state,
                });
            }
        };
        self.registry.reset();
        let timeout_ms = self.config.response_timeout_ms;
        self.send_then_wait(&Command::RfDeactivate { mode }, next, timeout_ms)
    }

    pub fn state(&self) -> NciState {
        self.state
    }

    pub fn config(&self) -> &NciConfig {
        &self.config
    }

    pub fn tags_present_status(&self) -> TagsPresentStatus {
        self.registry.status()
    }

    pub fn tag_count(&self) -> usize {
        self.registry.len()
    }

    /// All tags of the current cycle, without consuming the "new" flag
    pub fn tags(&self) -> &[TagSnapshot] {
        self.registry.as_slice()
    }

    /// Read one tag. A successful read marks a newly arrived single tag as
    /// reported.
    pub fn get_tag(&mut self, index: usize) -> Option<&TagSnapshot> {
        if index >= self.registry.len() {
            return None;
        }
        self.registry.mark_consumed();
        self.registry.get(index)
    }

    pub fn has_new_tag(&self) -> bool {
        self.registry.has_new()
    }

    /// Snapshots that did not fit the registry in the current cycle
    pub fn dropped_tags(&self) -> usize {
        self.registry.dropped()
    }

    /// Cause of the most recent transition to `Error`
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// NCI version byte from the last CORE_RESET_RSP
    pub fn nci_version(&self) -> Option<u8> {
        self.nci_version
    }

    pub fn firmware_version(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Milliseconds left before the pending deadline, if any
    pub fn deadline_remaining_ms(&self) -> Option<u64> {
        self.timeout.remaining(self.clock.now_ms())
    }

    fn transition(&mut self, next: NciState) {
        if self.state != next {
            debug!("{} -> {}", self.state, next);
        }
        self.timeout.disarm();
        self.state = next;
    }

    fn arm(&mut self, duration_ms: u64) {
        let now = self.clock.now_ms();
        self.timeout.arm(now, duration_ms);
    }

    fn fail(&mut self, err: Error) {
        match &err {
            Error::Status { status } => {
                let name = Status::new(*status).name().unwrap_or("RFU");
                warn!("{} -> Error: {} ({})", self.state, err, name);
            }
            _ => warn!("{} -> Error: {}", self.state, err),
        }
        self.last_error = Some(err);
        self.transition(NciState::Error);
    }

    fn send(&mut self, cmd: &Command) -> Result<()> {
        let frame = cmd.encode()?;
        trace_frame("tx", &frame);
        self.transport.write(&frame)
    }

    /// Send `cmd`, then wait in `next` for at most `timeout_ms`.
    /// A failed write sends the engine to `Error`.
    fn send_then_wait(&mut self, cmd: &Command, next: NciState, timeout_ms: u64) -> Result<()> {
        match self.send(cmd) {
            Ok(()) => {
                self.transition(next);
                self.arm(timeout_ms);
                Ok(())
            }
            Err(e) => {
                self.fail(e.clone());
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for Nci {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nci")
            .field("state", &self.state)
            .field("timeout", &self.timeout)
            .field("registry", &self.registry)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "diagnostics")]
fn trace_frame(direction: &str, frame: &[u8]) {
    trace!("{} {}", direction, crate::protocol::describe(frame));
}

#[cfg(not(feature = "diagnostics"))]
fn trace_frame(direction: &str, frame: &[u8]) {
    trace!("{} [{}]", direction, crate::utils::hex_join(frame, " "));
}
