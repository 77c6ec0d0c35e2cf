//! Output resolution setting (CNTL1.BIT).

/// Measurement output bit depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 14-bit output, 0.6 uT/LSB typical.
    Bits14,
    /// 16-bit output, 0.15 uT/LSB typical.
    Bits16,
}

impl Resolution {
    /// Returns the CNTL1.BIT value.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Bits14 => 0,
            Self::Bits16 => 1,
        }
    }

    /// Decodes the CNTL1.BIT (or ST2.BITM) value.
    pub const fn from_bit(bit: u8) -> Self {
        if bit & 1 == 0 { Self::Bits14 } else { Self::Bits16 }
    }

    /// Largest count magnitude the chip reports at this resolution.
    pub const fn full_scale_counts(self) -> i16 {
        match self {
            Self::Bits14 => 8_190,
            Self::Bits16 => 32_760,
        }
    }
}
