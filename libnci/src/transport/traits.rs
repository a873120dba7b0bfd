// libnci/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the physical link (I2C, SPI, UART, mock)
/// away from the protocol engine. Every method must return immediately.
pub trait Transport: Send {
    /// One-time bring-up of the link (power-cycle the controller, start the
    /// bus). Called again on every engine re-initialization.
    fn initialize(&mut self) -> Result<()>;

    /// True iff a complete message can be read right now
    fn has_message(&mut self) -> bool;

    /// Send exactly one framed message
    fn write(&mut self, frame: &[u8]) -> Result<()>;

    /// Read exactly one framed message, header included. Returns an empty
    /// vector when nothing is pending.
    fn read(&mut self) -> Result<Vec<u8>>;
}
