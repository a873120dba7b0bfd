// libnci/src/nci/state.rs

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// States of the protocol engine. `Rfc` states send a command, `Wfr`
/// states wait for a response, `Wfn` states wait for a notification.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NciState {
    #[default]
    HwResetRfc,
    HwResetWfr,
    SwResetRfc,
    SwResetWfr,
    EnableCustomCommandsRfc,
    EnableCustomCommandsWfr,
    /// Booted, discovery stopped; waiting for `activate()`
    RfIdleCmd,
    RfIdleWfr,
    /// Discovery running, no tag yet
    RfDiscovery,
    RfWaitForAllDiscoveries,
    /// Several tags enumerated; waiting for `deactivate()`
    RfWaitForHostSelect,
    /// One tag activated; waiting for `deactivate()`
    RfPollActive,
    RfDeActivate1Wfr,
    RfDeActivate2Wfr,
    RfDeActivate2Wfn,
    Error,
}

impl NciState {
    /// States that wait on the controller and therefore carry a deadline
    pub fn is_waiting(&self) -> bool {
        matches!(
            self,
            Self::HwResetWfr
                | Self::SwResetWfr
                | Self::EnableCustomCommandsWfr
                | Self::RfIdleWfr
                | Self::RfDiscovery
                | Self::RfWaitForAllDiscoveries
                | Self::RfDeActivate1Wfr
                | Self::RfDeActivate2Wfr
                | Self::RfDeActivate2Wfn
        )
    }

    /// States in which one or more tags are held by the controller
    pub fn has_tags(&self) -> bool {
        matches!(self, Self::RfPollActive | Self::RfWaitForHostSelect)
    }
}
