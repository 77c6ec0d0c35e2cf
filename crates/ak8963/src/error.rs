//! Error type for the AK8963 driver.

/// Error type for AK8963 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C, SPI, etc.).
    Bus,
    /// WIA returned an unexpected device ID.
    WrongDevice,
    /// ST1.DRDY is clear; no new measurement is available.
    NotReady,
    /// ST2.HOFL was set; the measurement exceeded the sensor range.
    Overflow,
    /// Sensitivity adjustment has not been read from the fuse ROM.
    NotCalibrated,
    /// Self-test readings fell outside the acceptance window.
    SelfTestFailed,
    /// A bounded wait expired before the sensor became ready.
    Timeout,
    /// A register returned an undefined value (e.g. a reserved mode code).
    InvalidData,
    /// The requested mode is reserved for internal sequences.
    Unsupported,
}
