//! Self-test acceptance for the magnetometer.
//!
//! In self-test mode the chip applies an internal field; the adjusted
//! readings must land inside a window that depends on the output resolution.
//! Window edges are rejected.

use crate::config::Resolution;
use crate::data::MagneticField;

/// Maximum `read_raw` attempts while waiting for the self-test sample.
pub(crate) const SELF_TEST_POLL_RETRIES: u16 = 100;
/// Delay between self-test sample polls.
pub(crate) const SELF_TEST_POLL_DELAY_NS: u32 = 1_000_000;

/// Acceptance window for self-test readings (sensitivity-adjusted counts).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTestLimits {
    /// X and Y must satisfy `-horizontal < v < horizontal`.
    pub horizontal: f32,
    /// Lower bound for Z (exclusive).
    pub z_min: f32,
    /// Upper bound for Z (exclusive).
    pub z_max: f32,
}

impl SelfTestLimits {
    /// Returns the datasheet window for a resolution.
    pub const fn for_resolution(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Bits14 => Self {
                horizontal: 50.0,
                z_min: -800.0,
                z_max: -200.0,
            },
            Resolution::Bits16 => Self {
                horizontal: 200.0,
                z_min: -3200.0,
                z_max: -800.0,
            },
        }
    }

    /// Returns whether every axis lies strictly inside the window.
    pub fn accepts(self, field: MagneticField) -> bool {
        let horizontal = |value: f32| value > -self.horizontal && value < self.horizontal;
        horizontal(field.x) && horizontal(field.y) && field.z > self.z_min && field.z < self.z_max
    }
}

/// Self-test report with the measured field and pass/fail evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTestReport {
    /// Sensitivity-adjusted self-test reading.
    pub field: MagneticField,
    /// Resolution the reading was judged against; `None` if never set.
    pub resolution: Option<Resolution>,
    /// Whether the reading is inside the acceptance window.
    pub passed: bool,
}

impl SelfTestReport {
    pub(crate) fn evaluate(field: MagneticField, resolution: Option<Resolution>) -> Self {
        let passed = match resolution {
            Some(resolution) => SelfTestLimits::for_resolution(resolution).accepts(field),
            None => false,
        };
        Self {
            field,
            resolution,
            passed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(resolution: Resolution, x: f32, y: f32, z: f32) -> bool {
        SelfTestReport::evaluate(MagneticField::new(x, y, z), Some(resolution)).passed
    }

    #[test]
    fn sixteen_bit_z_window_is_exclusive() {
        assert!(!passes(Resolution::Bits16, 0.0, 0.0, -800.0));
        assert!(passes(Resolution::Bits16, 0.0, 0.0, -801.0));
        assert!(passes(Resolution::Bits16, 0.0, 0.0, -3199.0));
        assert!(!passes(Resolution::Bits16, 0.0, 0.0, -3200.0));
        assert!(!passes(Resolution::Bits16, 0.0, 0.0, -3201.0));
    }

    #[test]
    fn sixteen_bit_horizontal_window_is_exclusive() {
        assert!(!passes(Resolution::Bits16, 200.0, 0.0, -1000.0));
        assert!(passes(Resolution::Bits16, 199.0, 0.0, -1000.0));
        assert!(!passes(Resolution::Bits16, 0.0, -200.0, -1000.0));
        assert!(passes(Resolution::Bits16, -199.0, 199.0, -1000.0));
    }

    #[test]
    fn fourteen_bit_window() {
        assert!(passes(Resolution::Bits14, 49.0, -49.0, -201.0));
        assert!(!passes(Resolution::Bits14, 50.0, 0.0, -400.0));
        assert!(!passes(Resolution::Bits14, 0.0, 0.0, -200.0));
        assert!(!passes(Resolution::Bits14, 0.0, 0.0, -800.0));
        assert!(!passes(Resolution::Bits14, 0.0, 0.0, -1000.0));
    }

    #[test]
    fn unknown_resolution_always_fails() {
        let report = SelfTestReport::evaluate(MagneticField::new(0.0, 0.0, -1000.0), None);
        assert!(!report.passed);
        assert_eq!(report.resolution, None);
    }
}
