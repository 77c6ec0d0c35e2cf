//! AK8963 driver implementation.
//!
//! This module provides the public async driver for the AK8963.

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use embedded_hal_async::spi::SpiDevice;

use crate::calibration::SensitivityAdjustment;
use crate::config::{Config, Mode, Resolution};
use crate::data::{DataStatus, MagRaw, MagneticField};
use crate::device::DeviceCore;
use crate::error::Error;
use crate::init::InitReport;
use crate::interface::Interface;
use crate::interface::{I2cConfig, I2cInterface};
use crate::interface::SpiInterface;
use crate::self_test::SelfTestReport;

/// AK8963 3-axis magnetometer driver.
pub struct Ak8963<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the AK8963 driver.
pub type Ak8963I2c<I2C> = Ak8963<I2cInterface<I2C>>;
/// SPI type alias for the AK8963 driver.
pub type Ak8963Spi<SPI> = Ak8963<SpiInterface<SPI>>;

impl<I2C> Ak8963<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver with default settings (address 0x0C).
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::with_i2c_config(i2c, Config::default(), I2cConfig::default())
    }

    /// Creates a new I2C-based driver with a custom configuration.
    pub fn with_i2c_config(i2c: I2C, config: Config, i2c_config: I2cConfig) -> Self {
        let interface = I2cInterface::new(i2c, i2c_config.address);
        Self::new(interface, config)
    }

    /// Updates the I2C address used by the interface.
    pub fn set_i2c_address(&mut self, address: u8) {
        self.core.set_i2c_address(address);
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release(self) -> I2C {
        self.core.release().release()
    }
}

impl<SPI> Ak8963<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver with default settings.
    pub fn new_spi(spi: SPI) -> Self {
        Self::with_spi_config(spi, Config::default())
    }

    /// Creates a new SPI-based driver with a custom configuration.
    pub fn with_spi_config(spi: SPI, config: Config) -> Self {
        Self::new(SpiInterface::new(spi), config)
    }

    /// Releases the SPI device, consuming the driver.
    pub fn release(self) -> SPI {
        self.core.release().release()
    }
}

impl<I> Ak8963<I>
where
    I: Interface,
{
    /// Creates a driver over any register interface.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            core: DeviceCore::new(interface, config),
        }
    }

    /// Releases the register interface, consuming the driver.
    pub fn into_interface(self) -> I {
        self.core.release()
    }

    /// Returns the configuration applied by [`init`](Self::init).
    pub const fn config(&self) -> Config {
        self.core.config()
    }

    /// Updates the configuration used by the next [`init`](Self::init).
    pub fn set_config(&mut self, config: Config) {
        self.core.set_config(config);
    }

    /// Initializes the device.
    ///
    /// Runs soft reset, resolution setup, fuse ROM calibration, self-test,
    /// identity check and run-mode entry. Every step runs even if an earlier
    /// one failed; the first failure is returned.
    pub async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.init(delay).await
    }

    /// Same sequence as [`init`](Self::init), returning every step's outcome.
    pub async fn init_report<D: DelayNs>(&mut self, delay: &mut D) -> InitReport {
        self.core.init_report(delay).await
    }

    /// Soft reset followed by [`init`](Self::init).
    pub async fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.power_up(delay).await
    }

    /// Performs a software reset.
    ///
    /// Clears the cached resolution, sensitivity adjustment and overflow flag.
    pub async fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.soft_reset(delay).await
    }

    /// Enters power-down mode.
    pub async fn power_down<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.power_down(delay).await
    }

    /// Reads the WIA register.
    pub async fn device_id(&mut self) -> Result<u8, Error> {
        self.core.device_id().await
    }

    /// Reads the INFO register.
    pub async fn info(&mut self) -> Result<u8, Error> {
        self.core.info().await
    }

    /// Verifies the device WIA register.
    pub async fn verify_device(&mut self) -> Result<(), Error> {
        self.core.verify_device().await
    }

    /// Returns `true` if WIA reads back the AK8963 device ID.
    pub async fn test_connection(&mut self) -> bool {
        self.core.verify_device().await.is_ok()
    }

    /// Reads the output resolution from CNTL1.
    pub async fn resolution(&mut self) -> Result<Resolution, Error> {
        self.core.resolution().await
    }

    /// Writes the output resolution to CNTL1.
    pub async fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error> {
        self.core.set_resolution(resolution).await
    }

    /// Reads the operation mode from CNTL1.
    pub async fn mode(&mut self) -> Result<Mode, Error> {
        self.core.mode().await
    }

    /// Powers down, then enters `mode`.
    ///
    /// Power-down, self-test and fuse ROM access are rejected with
    /// [`Error::Unsupported`] before any bus access.
    pub async fn set_mode<D: DelayNs>(&mut self, delay: &mut D, mode: Mode) -> Result<(), Error> {
        self.core.set_mode(delay, mode).await
    }

    /// Triggers a single measurement.
    pub async fn start_measurement<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.start_measurement(delay).await
    }

    /// Reads the fuse ROM sensitivity adjustment.
    pub async fn calibrate<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<SensitivityAdjustment, Error> {
        self.core.calibrate(delay).await
    }

    /// Runs the built-in self-test and evaluates the reading.
    ///
    /// Requires a prior [`calibrate`](Self::calibrate). Leaves the chip in
    /// power-down.
    pub async fn self_test<D: DelayNs>(&mut self, delay: &mut D) -> Result<SelfTestReport, Error> {
        self.core.self_test(delay).await
    }

    /// Reads and decodes ST1.
    pub async fn data_status(&mut self) -> Result<DataStatus, Error> {
        self.core.data_status().await
    }

    /// Reads raw counts without sensitivity adjustment.
    pub async fn read_counts(&mut self) -> Result<MagRaw, Error> {
        self.core.read_counts().await
    }

    /// Reads sensitivity-adjusted counts.
    pub async fn read_raw(&mut self) -> Result<MagneticField, Error> {
        self.core.read_raw().await
    }

    /// Reads the magnetic field in microtesla.
    pub async fn read(&mut self) -> Result<MagneticField, Error> {
        self.core.read().await
    }

    /// Whether the last completed read reported a sensor overflow.
    pub const fn overflow(&self) -> bool {
        self.core.overflow()
    }

    /// Resolution last written by the driver; `None` until set or after reset.
    pub const fn resolution_setting(&self) -> Option<Resolution> {
        self.core.resolution_setting()
    }

    /// Sensitivity adjustment from the last successful calibration.
    pub const fn sensitivity(&self) -> Option<SensitivityAdjustment> {
        self.core.sensitivity()
    }

    /// Disables the I2C interface (SPI stays available).
    pub async fn disable_i2c(&mut self) -> Result<(), Error> {
        self.core.disable_i2c().await
    }

    /// Re-enables I2C by soft reset.
    pub async fn enable_i2c<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.soft_reset(delay).await
    }
}
