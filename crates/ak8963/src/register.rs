//! AK8963 register definitions.
//!
//! Register addresses plus the bit fields the driver manipulates. Fields are
//! described as [`BitField`] values so every read-modify-write goes through
//! the same helpers on [`Interface`](crate::Interface).

#![allow(dead_code)] // TS1/TS2 are factory test registers.

/// AK8963 register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Device ID (WIA).
    Wia = 0x00,
    /// Device information.
    Info = 0x01,
    /// Status 1 (data ready / data overrun).
    St1 = 0x02,
    /// X-axis measurement low byte.
    Hxl = 0x03,
    /// X-axis measurement high byte.
    Hxh = 0x04,
    /// Y-axis measurement low byte.
    Hyl = 0x05,
    /// Y-axis measurement high byte.
    Hyh = 0x06,
    /// Z-axis measurement low byte.
    Hzl = 0x07,
    /// Z-axis measurement high byte.
    Hzh = 0x08,
    /// Status 2 (overflow / output bit mirror).
    St2 = 0x09,
    /// Control 1 (output bit setting + operation mode).
    Cntl1 = 0x0A,
    /// Control 2 (soft reset).
    Cntl2 = 0x0B,
    /// Self-test control.
    Astc = 0x0C,
    /// Test register 1 (do not write).
    Ts1 = 0x0D,
    /// Test register 2 (do not write).
    Ts2 = 0x0E,
    /// I2C disable.
    I2cDis = 0x0F,
    /// X-axis sensitivity adjustment (fuse ROM).
    Asax = 0x10,
    /// Y-axis sensitivity adjustment (fuse ROM).
    Asay = 0x11,
    /// Z-axis sensitivity adjustment (fuse ROM).
    Asaz = 0x12,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// A contiguous group of bits inside an 8-bit register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    shift: u8,
    width: u8,
}

impl BitField {
    /// Creates a field starting at bit `shift` spanning `width` bits.
    pub const fn new(shift: u8, width: u8) -> Self {
        assert!(width >= 1 && shift + width <= 8);
        Self { shift, width }
    }

    /// Creates a single-bit field.
    pub const fn bit(position: u8) -> Self {
        Self::new(position, 1)
    }

    /// Position of the least significant bit of the field.
    pub const fn shift(self) -> u8 {
        self.shift
    }

    /// Number of bits in the field.
    pub const fn width(self) -> u8 {
        self.width
    }

    /// Register mask covering the field.
    pub const fn mask(self) -> u8 {
        (((1u16 << self.width) - 1) << self.shift) as u8
    }

    /// Extracts the field value (right-aligned) from a register value.
    pub const fn extract(self, register: u8) -> u8 {
        (register & self.mask()) >> self.shift
    }

    /// Returns `register` with the field replaced by `value`.
    ///
    /// Bits of `value` that do not fit the field are dropped.
    pub const fn insert(self, register: u8, value: u8) -> u8 {
        (register & !self.mask()) | ((value << self.shift) & self.mask())
    }
}

/// Expected values for WIA.
pub mod wia {
    /// Device ID of the AK8963.
    pub const EXPECTED: u8 = 0x48;
}

/// ST1 register fields.
pub mod st1 {
    use super::BitField;

    /// Data ready.
    pub const DRDY: BitField = BitField::bit(0);
    /// Data overrun (a sample was skipped).
    pub const DOR: BitField = BitField::bit(1);
}

/// ST2 register fields.
pub mod st2 {
    use super::BitField;

    /// Magnetic sensor overflow.
    pub const HOFL: BitField = BitField::bit(3);
    /// Output bit setting mirror (0 = 14-bit, 1 = 16-bit).
    pub const BITM: BitField = BitField::bit(4);
}

/// CNTL1 register fields.
pub mod cntl1 {
    use super::BitField;

    /// Operation mode, bits [3:0].
    pub const MODE: BitField = BitField::new(0, 4);
    /// Output bit setting (0 = 14-bit, 1 = 16-bit).
    pub const BIT: BitField = BitField::bit(4);
}

/// CNTL2 register fields.
pub mod cntl2 {
    use super::BitField;

    /// Soft reset trigger; self-clearing.
    pub const SRST: BitField = BitField::bit(0);
}

/// ASTC register fields.
pub mod astc {
    use super::BitField;

    /// Generate the self-test magnetic field.
    pub const SELF: BitField = BitField::bit(6);
}

/// I2CDIS register values.
pub mod i2cdis {
    /// Pattern that disables the I2C interface until the next reset.
    pub const DISABLE: u8 = 0b0001_1011;
}
