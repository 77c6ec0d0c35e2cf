//! Factory sensitivity adjustment (fuse ROM ASAX/ASAY/ASAZ).
//!
//! The fuse bytes are only readable in fuse ROM access mode and must be
//! fetched again after every power cycle or soft reset.

use crate::data::{MagRaw, MagneticField};
use crate::register::Register;

pub(crate) const FUSE_ROM_START: Register = Register::Asax;
pub(crate) const FUSE_ROM_LEN: usize = 3;

/// Returns the multiplier for one fuse byte: `(asa - 128) / 256 + 1`.
pub fn sensitivity_coefficient(asa: u8) -> f32 {
    (f32::from(asa) - 128.0) / 256.0 + 1.0
}

/// Per-axis sensitivity multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensitivityAdjustment {
    /// X-axis multiplier.
    pub x: f32,
    /// Y-axis multiplier.
    pub y: f32,
    /// Z-axis multiplier.
    pub z: f32,
}

impl SensitivityAdjustment {
    /// No correction.
    pub const UNITY: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    /// Builds the multipliers from ASAX, ASAY, ASAZ.
    pub fn from_fuse_bytes(asa: [u8; FUSE_ROM_LEN]) -> Self {
        Self {
            x: sensitivity_coefficient(asa[0]),
            y: sensitivity_coefficient(asa[1]),
            z: sensitivity_coefficient(asa[2]),
        }
    }

    /// Applies the multipliers to raw counts.
    pub fn apply(self, raw: MagRaw) -> MagneticField {
        MagneticField {
            x: f32::from(raw.x) * self.x,
            y: f32::from(raw.y) * self.y,
            z: f32::from(raw.z) * self.z,
        }
    }
}
