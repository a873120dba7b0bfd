// libnci/src/transport/pn7150.rs
//! PN7150 over I2C, built on embedded-hal 1.0 traits.
//!
//! The controller raises IRQ while it holds a message for the host. A read
//! is split in two bus transactions: the 3-byte header first, then exactly
//! the payload length the header announces.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use log::{trace, warn};

use crate::constants::{MSG_HEADER_SIZE, PN7150_I2C_ADDRESS};
use crate::protocol::Header;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// VEN held low during a power cycle
const VEN_LOW_MS: u32 = 1;
/// Boot time after VEN goes high
const VEN_BOOT_MS: u32 = 3;

pub struct Pn7150I2c<I2C, IRQ, VEN, D> {
    i2c: I2C,
    irq: IRQ,
    ven: VEN,
    delay: D,
    address: u8,
}

impl<I2C, IRQ, VEN, D> Pn7150I2c<I2C, IRQ, VEN, D>
where
    I2C: I2c,
    IRQ: InputPin,
    VEN: OutputPin,
    D: DelayNs,
{
    pub fn new(i2c: I2C, irq: IRQ, ven: VEN, delay: D) -> Self {
        Self {
            i2c,
            irq,
            ven,
            delay,
            address: PN7150_I2C_ADDRESS,
        }
    }

    /// Use a non-default 7-bit address (ADR0/ADR1 strapping)
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus and pins back
    pub fn release(self) -> (I2C, IRQ, VEN, D) {
        (self.i2c, self.irq, self.ven, self.delay)
    }

    fn irq_high(&mut self) -> bool {
        match self.irq.is_high() {
            Ok(level) => level,
            Err(e) => {
                warn!("IRQ pin read failed: {:?}", e);
                false
            }
        }
    }
}

impl<I2C, IRQ, VEN, D> Transport for Pn7150I2c<I2C, IRQ, VEN, D>
where
    I2C: I2c + Send,
    IRQ: InputPin + Send,
    VEN: OutputPin + Send,
    D: DelayNs + Send,
{
    fn initialize(&mut self) -> Result<()> {
        self.ven
            .set_low()
            .map_err(|e| Error::Transport(format!("VEN low: {:?}", e)))?;
        self.delay.delay_ms(VEN_LOW_MS);
        self.ven
            .set_high()
            .map_err(|e| Error::Transport(format!("VEN high: {:?}", e)))?;
        self.delay.delay_ms(VEN_BOOT_MS);
        Ok(())
    }

    fn has_message(&mut self) -> bool {
        self.irq_high()
    }

    fn write(&mut self, frame: &[u8]) -> Result<()> {
        trace!("i2c write {} bytes to {:#04x}", frame.len(), self.address);
        self.i2c
            .write(self.address, frame)
            .map_err(|e| Error::Transport(format!("i2c write: {:?}", e)))
    }

    fn read(&mut self) -> Result<Vec<u8>> {
        if !self.irq_high() {
            return Ok(Vec::new());
        }

        let mut header = [0u8; MSG_HEADER_SIZE];
        self.i2c
            .read(self.address, &mut header)
            .map_err(|e| Error::Transport(format!("i2c read header: {:?}", e)))?;

        let frame_len = Header::parse(&header)?.frame_len();
        let mut frame = Vec::with_capacity(frame_len);
        frame.extend_from_slice(&header);
        if frame_len > MSG_HEADER_SIZE {
            frame.resize(frame_len, 0);
            self.i2c
                .read(self.address, &mut frame[MSG_HEADER_SIZE..])
                .map_err(|e| Error::Transport(format!("i2c read payload: {:?}", e)))?;
        }
        Ok(frame)
    }
}
