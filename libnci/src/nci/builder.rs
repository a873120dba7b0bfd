// libnci/src/nci/builder.rs

use super::{Nci, NciConfig};
use crate::transport::Transport;
use crate::utils::Clock;
use crate::{Error, Result};

/// Helper to construct an [`Nci`] engine with optional configuration.
#[derive(Default)]
pub struct NciBuilder {
    transport: Option<Box<dyn Transport>>,
    clock: Option<Box<dyn Clock>>,
    config: NciConfig,
}

impl NciBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Time source for timeouts; `SystemClock` when not given
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_config(mut self, config: NciConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an engine in `HwResetRfc`. Call
    /// [`Nci::initialize`] before the first tick to bring the transport up.
    ///
    /// Requires a transport; otherwise returns `TransportNotConfigured`.
    pub fn build(self) -> Result<Nci> {
        self.config.validate()?;
        let transport = self.transport.ok_or(Error::TransportNotConfigured)?;
        let clock = match self.clock {
            Some(c) => c,
            None => default_clock()?,
        };
        Ok(Nci::new(transport, clock, self.config))
    }
}

#[cfg(feature = "std")]
fn default_clock() -> Result<Box<dyn Clock>> {
    Ok(Box::new(crate::utils::SystemClock::new()))
}

#[cfg(not(feature = "std"))]
fn default_clock() -> Result<Box<dyn Clock>> {
    Err(Error::InvalidConfig("no clock configured".into()))
}
