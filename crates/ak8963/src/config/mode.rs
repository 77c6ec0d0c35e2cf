//! Operation modes of the AK8963 (CNTL1.MODE[3:0]).

/// Settling time after any CNTL1 mode write.
///
/// The datasheet asks for at least 100 us in power-down before entering
/// another mode.
pub(crate) const MODE_SETTLE_DELAY_NS: u32 = 100_000;

/// Operation modes from the CNTL1 register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Power-down; required between any two other modes.
    PowerDown,
    /// One measurement, then back to power-down.
    SingleMeasurement,
    /// Continuous measurement mode 1 (8 Hz).
    Continuous8Hz,
    /// Continuous measurement mode 2 (100 Hz).
    Continuous100Hz,
    /// Measurement on each external trigger pulse.
    ExternalTrigger,
    /// Built-in self-test (driven by [`self_test`](crate::Ak8963::self_test)).
    SelfTest,
    /// Fuse ROM access (driven by [`calibrate`](crate::Ak8963::calibrate)).
    FuseRomAccess,
}

impl Mode {
    /// Returns the 4-bit mode code.
    pub const fn bits(self) -> u8 {
        match self {
            Self::PowerDown => 0b0000,
            Self::SingleMeasurement => 0b0001,
            Self::Continuous8Hz => 0b0010,
            Self::Continuous100Hz => 0b0110,
            Self::ExternalTrigger => 0b0100,
            Self::SelfTest => 0b1000,
            Self::FuseRomAccess => 0b1111,
        }
    }

    /// Decodes a 4-bit mode code. Undefined codes return `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x0F {
            0b0000 => Some(Self::PowerDown),
            0b0001 => Some(Self::SingleMeasurement),
            0b0010 => Some(Self::Continuous8Hz),
            0b0110 => Some(Self::Continuous100Hz),
            0b0100 => Some(Self::ExternalTrigger),
            0b1000 => Some(Self::SelfTest),
            0b1111 => Some(Self::FuseRomAccess),
            _ => None,
        }
    }

    /// Whether the mode may be requested through `set_mode`.
    ///
    /// Power-down, self-test and fuse ROM access belong to the driver's own
    /// sequences.
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::PowerDown | Self::SelfTest | Self::FuseRomAccess)
    }

    /// Whether the chip samples on its own in this mode.
    pub const fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous8Hz | Self::Continuous100Hz)
    }
}
