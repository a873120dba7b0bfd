// libnci/src/prelude.rs

pub use crate::nci::{Nci, NciBuilder, NciConfig, NciState};
pub use crate::reader::{Reader, ReaderEvent, ReaderState};
pub use crate::tag::{TagSnapshot, TagsPresentStatus};
pub use crate::transport::{MockTransport, Transport};
pub use crate::utils::{Clock, ManualClock};
#[cfg(feature = "std")]
pub use crate::utils::SystemClock;
pub use crate::{
    DeactivationMode, Error, GroupId, MessageType, NotificationType, ResetType, Result,
    RfProtocol, TechnologyMode,
};

// Re-export small utilities for convenience
pub use crate::utils::hex_join;
