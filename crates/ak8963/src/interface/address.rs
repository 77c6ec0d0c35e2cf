//! I2C address definitions for the AK8963.

/// AK8963 I2C addresses, selected by the CAD1/CAD0 pins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ak8963Address {
    /// 0x0C (CAD1 = low, CAD0 = low). Also the address inside the MPU-9250.
    #[default]
    Cad00,
    /// 0x0D (CAD1 = low, CAD0 = high).
    Cad01,
    /// 0x0E (CAD1 = high, CAD0 = low).
    Cad10,
    /// 0x0F (CAD1 = high, CAD0 = high).
    Cad11,
}

impl Ak8963Address {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Cad00 => 0x0C,
            Self::Cad01 => 0x0D,
            Self::Cad10 => 0x0E,
            Self::Cad11 => 0x0F,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        assert_eq!(Ak8963Address::Cad00.addr(), 0x0C);
        assert_eq!(Ak8963Address::Cad01.addr(), 0x0D);
        assert_eq!(Ak8963Address::Cad10.addr(), 0x0E);
        assert_eq!(Ak8963Address::Cad11.addr(), 0x0F);
        assert_eq!(Ak8963Address::default(), Ak8963Address::Cad00);
    }
}
