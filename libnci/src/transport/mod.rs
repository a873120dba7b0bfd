// libnci/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "i2c")]
pub mod pn7150;
pub mod traits;

pub use mock::MockTransport;
#[cfg(feature = "i2c")]
pub use pn7150::Pn7150I2c;
pub use traits::Transport;
