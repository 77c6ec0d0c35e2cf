//! Sensor data readout helpers.

#[cfg(feature = "fixed")]
pub(crate) mod fixed;
pub(crate) mod scale;

pub use scale::{
    MICROTESLA_PER_LSB_14BIT,
    MICROTESLA_PER_LSB_16BIT,
    ScaleFactor,
    microtesla_per_lsb,
    microtesla_ratio,
};

use crate::register::{Register, st1, st2};

/// First register of the HXL..ST2 burst.
pub(crate) const MEASUREMENT_BLOCK_START: Register = Register::Hxl;
/// HXL, HXH, HYL, HYH, HZL, HZH, ST2.
pub(crate) const MEASUREMENT_BLOCK_LEN: usize = 7;
pub(crate) const MEASUREMENT_ST2_OFFSET: usize = 6;

/// Raw magnetometer counts (X, Y, Z) before sensitivity adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagRaw {
    /// X-axis counts.
    pub x: i16,
    /// Y-axis counts.
    pub y: i16,
    /// Z-axis counts.
    pub z: i16,
}

impl MagRaw {
    /// Creates a new raw sample.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Decodes HXL..HZH; the AK8963 always outputs little-endian.
    pub const fn from_le_bytes(bytes: [u8; 6]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
        }
    }
}

/// Magnetic field vector.
///
/// Units depend on where it comes from: `read_raw` yields
/// sensitivity-adjusted counts, `read` yields microtesla.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagneticField {
    /// X-axis component.
    pub x: f32,
    /// Y-axis component.
    pub y: f32,
    /// Z-axis component.
    pub z: f32,
}

impl MagneticField {
    /// Creates a new field vector.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Multiplies every axis by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

/// Decoded ST1 register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataStatus {
    /// A measurement is waiting to be read.
    pub data_ready: bool,
    /// At least one measurement was overwritten before it was read.
    pub data_overrun: bool,
}

impl DataStatus {
    pub(crate) const fn from_st1(value: u8) -> Self {
        Self {
            data_ready: st1::DRDY.extract(value) != 0,
            data_overrun: st1::DOR.extract(value) != 0,
        }
    }
}

/// One HXL..ST2 burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MeasurementBlock {
    pub raw: MagRaw,
    pub status2: u8,
}

impl MeasurementBlock {
    pub(crate) const fn from_bytes(bytes: [u8; MEASUREMENT_BLOCK_LEN]) -> Self {
        Self {
            raw: MagRaw::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]]),
            status2: bytes[MEASUREMENT_ST2_OFFSET],
        }
    }

    /// ST2.HOFL: the reading is invalid.
    pub(crate) const fn overflow(self) -> bool {
        st2::HOFL.extract(self.status2) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_counts_are_little_endian_signed() {
        let raw = MagRaw::from_le_bytes([0x64, 0x00, 0xCE, 0xFF, 0x18, 0xFC]);
        assert_eq!(raw, MagRaw::new(100, -50, -1000));
    }

    #[test]
    fn block_reports_overflow_from_st2_bit3() {
        let block = MeasurementBlock::from_bytes([0, 0, 0, 0, 0, 0, 0b0001_1000]);
        assert!(block.overflow());

        let block = MeasurementBlock::from_bytes([1, 0, 2, 0, 3, 0, 0b0001_0000]);
        assert!(!block.overflow());
        assert_eq!(block.raw, MagRaw::new(1, 2, 3));
    }

    #[test]
    fn data_status_decodes_st1() {
        assert_eq!(
            DataStatus::from_st1(0b11),
            DataStatus {
                data_ready: true,
                data_overrun: true,
            }
        );
        assert_eq!(DataStatus::from_st1(0), DataStatus::default());
    }
}
