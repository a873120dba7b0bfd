// libnci/src/tag/registry.rs

use derive_more::Display;
use heapless::Vec as BoundedVec;
use log::warn;

use super::TagSnapshot;
use crate::constants::MAX_TAGS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate tag presence as seen by the host.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TagsPresentStatus {
    #[default]
    #[display(fmt = "unknown")]
    Unknown,
    #[display(fmt = "none detected")]
    NoneDetected,
    /// One tag activated and not yet read by the host
    #[display(fmt = "new single tag")]
    NewSingle,
    #[display(fmt = "single tag (reported)")]
    AlreadyReportedSingle,
    #[display(fmt = "multiple tags")]
    Multiple,
}

/// Bounded store of the tags found in the current discovery cycle.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    tags: BoundedVec<TagSnapshot, MAX_TAGS>,
    status: TagsPresentStatus,
    dropped: usize,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot. When full the snapshot is dropped and counted,
    /// and `false` is returned.
    pub fn push(&mut self, tag: TagSnapshot) -> bool {
        match self.tags.push(tag) {
            Ok(()) => true,
            Err(tag) => {
                self.dropped += 1;
                warn!(
                    "tag registry full ({} entries), dropping {}",
                    MAX_TAGS, tag
                );
                false
            }
        }
    }

    /// Forget all snapshots; status back to Unknown.
    pub fn reset(&mut self) {
        self.tags.clear();
        self.status = TagsPresentStatus::Unknown;
        self.dropped = 0;
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TagSnapshot> {
        self.tags.get(index)
    }

    pub fn as_slice(&self) -> &[TagSnapshot] {
        &self.tags
    }

    pub fn status(&self) -> TagsPresentStatus {
        self.status
    }

    pub fn set_status(&mut self, status: TagsPresentStatus) {
        self.status = status;
    }

    /// Snapshots discarded since the last reset
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// The host has seen the tag: a new single tag becomes reported.
    pub fn mark_consumed(&mut self) {
        if self.status == TagsPresentStatus::NewSingle {
            self.status = TagsPresentStatus::AlreadyReportedSingle;
        }
    }

    pub fn has_new(&self) -> bool {
        self.status == TagsPresentStatus::NewSingle
    }
}
