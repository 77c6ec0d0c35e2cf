//! Fixed-point conversion helpers.

use super::MagRaw;
use super::scale::microtesla_ratio;
use crate::calibration::SensitivityAdjustment;
use crate::config::Resolution;

/// Fixed-point number type used for sensor conversions (I32F32).
pub type Fixed = crate::fixed_crate::types::I32F32;

/// Fixed-point magnetic field in microtesla.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MagneticFieldFixed {
    /// X-axis field in uT.
    pub x: Fixed,
    /// Y-axis field in uT.
    pub y: Fixed,
    /// Z-axis field in uT.
    pub z: Fixed,
}

/// Converts raw counts to microtesla without sensitivity adjustment.
pub fn counts_to_microtesla(raw: MagRaw, resolution: Resolution) -> MagneticFieldFixed {
    let ratio = microtesla_ratio(resolution);
    let numerator = Fixed::from_num(ratio.numerator);
    let denominator = Fixed::from_num(ratio.denominator);
    MagneticFieldFixed {
        x: Fixed::from_num(raw.x) * numerator / denominator,
        y: Fixed::from_num(raw.y) * numerator / denominator,
        z: Fixed::from_num(raw.z) * numerator / denominator,
    }
}

/// Converts raw counts to microtesla, applying the fuse ROM sensitivity.
pub fn adjusted_counts_to_microtesla(
    raw: MagRaw,
    adjustment: SensitivityAdjustment,
    resolution: Resolution,
) -> MagneticFieldFixed {
    let field = counts_to_microtesla(raw, resolution);
    MagneticFieldFixed {
        x: field.x * Fixed::from_num(adjustment.x),
        y: field.y * Fixed::from_num(adjustment.y),
        z: field.z * Fixed::from_num(adjustment.z),
    }
}
