//! Configuration helpers for the AK8963.

pub(crate) mod common;
pub(crate) mod mode;

pub use common::Resolution;
pub use mode::Mode;
pub(crate) use mode::MODE_SETTLE_DELAY_NS;

use crate::error::Error;

/// Settings applied by `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output resolution set before and after the self-test.
    pub resolution: Resolution,
    /// Mode entered once initialization has run.
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates the default configuration: 16-bit output, 100 Hz continuous.
    pub const fn new() -> Self {
        Self {
            resolution: Resolution::Bits16,
            mode: Mode::Continuous100Hz,
        }
    }

    /// Sets the output resolution.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the run mode entered at the end of `init`.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Checks that the run mode is one `set_mode` accepts.
    pub const fn validate(self) -> Result<(), Error> {
        if self.mode.is_selectable() {
            Ok(())
        } else {
            Err(Error::Unsupported)
        }
    }
}
