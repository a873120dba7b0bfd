// libnci/src/reader/mod.rs
//! Polling reader on top of the protocol engine: keeps discovery running,
//! reports tags when they arrive and again when they leave the field.

use derive_more::Display;
use log::{info, warn};

use crate::nci::{Nci, NciState};
use crate::tag::{TagSnapshot, TagsPresentStatus};
use crate::types::DeactivationMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the reader currently believes about the RF field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReaderState {
    #[default]
    Initializing,
    NoTagPresent,
    SingleTagPresent,
    MultipleTagsPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReaderEvent {
    /// Controller booted and discovery started
    PollingStarted,
    /// Tag(s) entered the field; reported once per arrival
    TagsDetected(Vec<TagSnapshot>),
    /// The field is empty again
    TagsRemoved,
    /// The engine failed and is re-initializing
    Recovering,
}

pub struct Reader {
    nci: Nci,
    state: ReaderState,
}

impl Reader {
    pub fn new(nci: Nci) -> Self {
        Self {
            nci,
            state: ReaderState::Initializing,
        }
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn nci(&self) -> &Nci {
        &self.nci
    }

    pub fn nci_mut(&mut self) -> &mut Nci {
        &mut self.nci
    }

    pub fn into_inner(self) -> Nci {
        self.nci
    }

    /// Tick the engine once and react to where it ended up.
    pub fn run(&mut self) -> Option<ReaderEvent> {
        let engine = self.nci.run();

        if engine == NciState::Error {
            warn!("engine failed in reader state {}, recovering", self.state);
            self.state = ReaderState::Initializing;
            return Some(ReaderEvent::Recovering);
        }

        match (self.state, engine) {
            (ReaderState::Initializing, NciState::RfIdleCmd) => {
                self.start_discovery();
                self.state = ReaderState::NoTagPresent;
                Some(ReaderEvent::PollingStarted)
            }
            (ReaderState::NoTagPresent, NciState::RfIdleCmd) => {
                self.start_discovery();
                None
            }
            (ReaderState::NoTagPresent, NciState::RfPollActive) => {
                let tags: Vec<TagSnapshot> = self.nci.get_tag(0).cloned().into_iter().collect();
                for tag in &tags {
                    info!("tag arrived: {}", tag);
                }
                self.state = ReaderState::SingleTagPresent;
                Some(ReaderEvent::TagsDetected(tags))
            }
            (ReaderState::NoTagPresent, NciState::RfWaitForHostSelect) => {
                let tags = self.nci.tags().to_vec();
                info!("{} tags arrived", tags.len());
                self.state = ReaderState::MultipleTagsPresent;
                Some(ReaderEvent::TagsDetected(tags))
            }
            (ReaderState::SingleTagPresent | ReaderState::MultipleTagsPresent, engine)
                if engine.has_tags() =>
            {
                // still in the field: restart discovery to watch for removal
                if let Err(e) = self.nci.deactivate(DeactivationMode::IdleMode) {
                    warn!("deactivate refused: {}", e);
                }
                None
            }
            (ReaderState::SingleTagPresent | ReaderState::MultipleTagsPresent, NciState::RfIdleCmd) => {
                self.start_discovery();
                None
            }
            (ReaderState::SingleTagPresent | ReaderState::MultipleTagsPresent, NciState::RfDiscovery)
                if self.nci.tags_present_status() == TagsPresentStatus::NoneDetected =>
            {
                info!("tag(s) removed");
                self.state = ReaderState::NoTagPresent;
                Some(ReaderEvent::TagsRemoved)
            }
            _ => None,
        }
    }

    fn start_discovery(&mut self) {
        if let Err(e) = self.nci.activate() {
            warn!("activate refused: {}", e);
        }
    }
}

impl std::fmt::Debug for Reader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("state", &self.state)
            .field("nci", &self.nci)
            .finish()
    }
}
