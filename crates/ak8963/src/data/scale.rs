//! Scaling from counts to microtesla.
//!
//! Full scale is 4912 uT, reported as +/-32760 counts at 16 bits and
//! +/-8190 counts at 14 bits.

use crate::config::Resolution;

/// Full-scale field in microtesla.
pub(crate) const FULL_SCALE_MICROTESLA: i32 = 4_912;

/// Microtesla per LSB at 16-bit resolution (4912 / 32760).
pub const MICROTESLA_PER_LSB_16BIT: f32 = 0.149_938_95;

/// Microtesla per LSB at 14-bit resolution, exactly four times the 16-bit step.
pub const MICROTESLA_PER_LSB_14BIT: f32 = MICROTESLA_PER_LSB_16BIT * 4.0;

/// Ratio representing a scale factor without floating-point math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScaleFactor {
    /// Scale numerator.
    pub numerator: i32,
    /// Scale denominator.
    pub denominator: i32,
}

impl ScaleFactor {
    /// Creates a new scale ratio.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

/// Returns the microtesla-per-LSB step for a resolution.
pub const fn microtesla_per_lsb(resolution: Resolution) -> f32 {
    match resolution {
        Resolution::Bits14 => MICROTESLA_PER_LSB_14BIT,
        Resolution::Bits16 => MICROTESLA_PER_LSB_16BIT,
    }
}

/// Returns the microtesla-per-LSB step as an integer ratio.
pub const fn microtesla_ratio(resolution: Resolution) -> ScaleFactor {
    ScaleFactor::new(
        FULL_SCALE_MICROTESLA,
        resolution.full_scale_counts() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        a - b < eps && b - a < eps
    }

    #[test]
    fn step_matches_full_scale_ratio() {
        let ratio = microtesla_ratio(Resolution::Bits16);
        let step = ratio.numerator as f32 / ratio.denominator as f32;
        assert!(close(step, MICROTESLA_PER_LSB_16BIT, 1e-7));

        let ratio = microtesla_ratio(Resolution::Bits14);
        assert_eq!(ratio, ScaleFactor::new(4_912, 8_190));
        let step = ratio.numerator as f32 / ratio.denominator as f32;
        assert!(close(step, MICROTESLA_PER_LSB_14BIT, 1e-6));
    }

    #[test]
    fn fourteen_bit_step_is_four_times_sixteen_bit() {
        assert_eq!(
            microtesla_per_lsb(Resolution::Bits14),
            microtesla_per_lsb(Resolution::Bits16) * 4.0
        );
    }
}
