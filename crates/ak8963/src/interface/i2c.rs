//! I2C interface adapter for the AK8963.
//!
//! The AK8963 auto-increments the register pointer on bursts, so block
//! reads and writes are a single addressed transfer.

use embedded_hal_async::i2c::{I2c, Operation};

use super::Ak8963Address;
use super::Interface;
use crate::error::Error;

/// I2C interface configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    pub(crate) address: u8,
}

impl I2cConfig {
    /// Creates a configuration for a raw 7-bit address.
    pub const fn new(address: u8) -> Self {
        Self { address }
    }

    /// Creates a configuration from the CAD1/CAD0 strapping.
    pub const fn for_pins(pins: Ak8963Address) -> Self {
        Self::new(pins.addr())
    }

    /// Sets the I2C address.
    #[must_use]
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Returns the configured 7-bit address.
    pub const fn address(self) -> u8 {
        self.address
    }
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::for_pins(Ak8963Address::default())
    }
}

impl From<Ak8963Address> for I2cConfig {
    fn from(pins: Ak8963Address) -> Self {
        Self::for_pins(pins)
    }
}

/// I2C register interface.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wraps a bus, talking to the device at `address`.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Current 7-bit device address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Points the interface at another 7-bit address.
    pub fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut value)
            .await
            .map_err(|_| Error::Bus)?;
        Ok(value[0])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        match buffer.len() {
            0 => Ok(()),
            1 => {
                buffer[0] = self.read_reg(reg).await?;
                Ok(())
            }
            _ => self
                .i2c
                .write_read(self.address, &[reg], buffer)
                .await
                .map_err(|_| Error::Bus),
        }
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[reg, value])
            .await
            .map_err(|_| Error::Bus)
    }

    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        let start = [reg];
        let mut ops = [Operation::Write(&start), Operation::Write(data)];
        self.i2c
            .transaction(self.address, &mut ops)
            .await
            .map_err(|_| Error::Bus)
    }
}
