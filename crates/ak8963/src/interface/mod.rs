//! Interface abstraction for register I/O.

pub(crate) mod address;
pub(crate) mod i2c;
pub(crate) mod spi;

pub use address::Ak8963Address;
pub use i2c::{I2cConfig, I2cInterface};
pub use spi::SpiInterface;

use crate::error::Error;
use crate::register::BitField;

/// Minimal async register I/O for the device core.
///
/// Implement the four primitives for a custom transport (or a test double);
/// the bit-field helpers are provided on top of them.
#[allow(async_fn_in_trait)]
pub trait Interface {
    /// Reads a single register.
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error>;
    /// Reads a contiguous block of registers into `buffer`.
    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error>;
    /// Writes a single register.
    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;
    /// Writes a contiguous block of registers from `data`.
    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error>;

    /// Reads a bit field, right-aligned.
    async fn read_field(&mut self, reg: u8, field: BitField) -> Result<u8, Error> {
        let value = self.read_reg(reg).await?;
        Ok(field.extract(value))
    }

    /// Read-modify-writes a bit field.
    async fn write_field(&mut self, reg: u8, field: BitField, value: u8) -> Result<(), Error> {
        let current = self.read_reg(reg).await?;
        self.write_reg(reg, field.insert(current, value)).await
    }

    /// Reads a single-bit field.
    async fn read_flag(&mut self, reg: u8, field: BitField) -> Result<bool, Error> {
        Ok(self.read_field(reg, field).await? != 0)
    }

    /// Sets or clears a single-bit field.
    async fn write_flag(&mut self, reg: u8, field: BitField, set: bool) -> Result<(), Error> {
        self.write_field(reg, field, u8::from(set)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::{Register, cntl1};
    use crate::testing::MockInterface;
    use futures::executor::block_on;

    #[test]
    fn write_field_preserves_other_bits() {
        let mut interface = MockInterface::default().with_reg(Register::Cntl1.addr(), 0b0001_0110);

        block_on(interface.write_field(Register::Cntl1.addr(), cntl1::MODE, 0b0001))
            .expect("write mode");

        assert_eq!(interface.writes(), [(Register::Cntl1.addr(), 0b0001_0001)]);
        let bit = block_on(interface.read_flag(Register::Cntl1.addr(), cntl1::BIT)).expect("bit");
        assert!(bit);
    }

    #[test]
    fn write_field_skips_write_when_read_fails() {
        let mut interface = MockInterface::default().with_failing_read(Register::Cntl1.addr());

        let result = block_on(interface.write_field(Register::Cntl1.addr(), cntl1::MODE, 0));

        assert_eq!(result, Err(Error::Bus));
        assert!(interface.writes().is_empty());
    }
}
