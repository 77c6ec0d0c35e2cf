//! SPI interface adapter for the AK8963.
//!
//! 4-wire mode only. The first byte carries R/W in bit 7 and the register
//! address in bits [6:0]; the chip auto-increments on burst reads.

use embedded_hal_async::spi::{Operation, SpiDevice};

use super::Interface;
use crate::error::Error;

const READ: u8 = 0x80;
const ADDRESS_MASK: u8 = 0x7F;

/// Command byte that opens a transfer on `reg`.
const fn command(reg: u8, read: bool) -> u8 {
    let reg = reg & ADDRESS_MASK;
    if read { reg | READ } else { reg }
}

/// SPI register interface.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Wraps a device with chip-select already managed by the HAL.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Gives the device back.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut frame = [command(reg, true), 0];
        self.spi
            .transfer_in_place(&mut frame)
            .await
            .map_err(|_| Error::Bus)?;
        Ok(frame[1])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        let cmd = [command(reg, true)];
        let mut ops = [Operation::Write(&cmd), Operation::Read(buffer)];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.spi
            .write(&[command(reg, false), value])
            .await
            .map_err(|_| Error::Bus)
    }

    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        let cmd = [command(reg, false)];
        let mut ops = [Operation::Write(&cmd), Operation::Write(data)];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)
    }
}
