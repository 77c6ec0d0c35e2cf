//! Device core operations for the AK8963.

use embedded_hal_async::delay::DelayNs;

use crate::calibration::{FUSE_ROM_LEN, FUSE_ROM_START, SensitivityAdjustment};
use crate::config::{Config, MODE_SETTLE_DELAY_NS, Mode, Resolution};
use crate::data::{
    DataStatus, MEASUREMENT_BLOCK_LEN, MEASUREMENT_BLOCK_START, MagRaw, MagneticField,
    MeasurementBlock, microtesla_per_lsb,
};
use crate::error::Error;
use crate::init::{InitReport, InitStep};
use crate::interface::{I2cInterface, Interface};
use crate::register::{BitField, Register, astc, cntl1, cntl2, i2cdis, st1, wia};
use crate::self_test::{SELF_TEST_POLL_DELAY_NS, SELF_TEST_POLL_RETRIES, SelfTestReport};

/// Time allowed for the soft reset to reload the registers.
const RESET_DELAY_NS: u32 = 100_000;

pub(crate) struct DeviceCore<I> {
    interface: I,
    config: Config,
    resolution: Option<Resolution>,
    sensitivity: Option<SensitivityAdjustment>,
    overflow: bool,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            resolution: None,
            sensitivity: None,
            overflow: false,
        }
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Resolution last written successfully; `None` after reset.
    pub(crate) const fn resolution_setting(&self) -> Option<Resolution> {
        self.resolution
    }

    pub(crate) const fn sensitivity(&self) -> Option<SensitivityAdjustment> {
        self.sensitivity
    }

    pub(crate) const fn overflow(&self) -> bool {
        self.overflow
    }

    pub(crate) async fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.init_report(delay).await.result()
    }

    pub(crate) async fn init_report<D: DelayNs>(&mut self, delay: &mut D) -> InitReport {
        let mut report = InitReport::new();
        for step in InitStep::ALL {
            let result = self.run_init_step(delay, step).await;
            if let Err(err) = result {
                warn!("ak8963: init step {} failed: {}", step, err);
            }
            report.record(step, result);
        }
        report
    }

    async fn run_init_step<D: DelayNs>(
        &mut self,
        delay: &mut D,
        step: InitStep,
    ) -> Result<(), Error> {
        let config = self.config;
        match step {
            InitStep::SoftReset => self.soft_reset(delay).await,
            InitStep::SetResolution | InitStep::ReassertResolution => {
                self.set_resolution(config.resolution).await
            }
            InitStep::Calibrate => self.calibrate(delay).await.map(|_| ()),
            InitStep::SelfTest => match self.self_test(delay).await {
                Ok(report) if report.passed => Ok(()),
                Ok(_) => Err(Error::SelfTestFailed),
                Err(err) => Err(err),
            },
            InitStep::VerifyDevice => self.verify_device().await,
            InitStep::EnterRunMode => self.set_mode(delay, config.mode).await,
        }
    }

    pub(crate) async fn power_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        let reset = self.soft_reset(delay).await;
        let init = self.init(delay).await;
        reset.and(init)
    }

    pub(crate) async fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.write_flag(Register::Cntl2, cntl2::SRST, true).await?;
        delay.delay_ns(RESET_DELAY_NS).await;
        self.resolution = None;
        self.sensitivity = None;
        self.overflow = false;
        Ok(())
    }

    pub(crate) async fn device_id(&mut self) -> Result<u8, Error> {
        self.read_reg(Register::Wia).await
    }

    pub(crate) async fn info(&mut self) -> Result<u8, Error> {
        self.read_reg(Register::Info).await
    }

    pub(crate) async fn verify_device(&mut self) -> Result<(), Error> {
        let id = self.device_id().await?;
        if id != wia::EXPECTED {
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    pub(crate) async fn resolution(&mut self) -> Result<Resolution, Error> {
        let bit = self.read_field(Register::Cntl1, cntl1::BIT).await?;
        Ok(Resolution::from_bit(bit))
    }

    pub(crate) async fn set_resolution(&mut self, resolution: Resolution) -> Result<(), Error> {
        self.write_field(Register::Cntl1, cntl1::BIT, resolution.bit())
            .await?;
        self.resolution = Some(resolution);
        Ok(())
    }

    /// Reads CNTL1.MODE; the undefined code 0b1010 (or any other gap) is `InvalidData`.
    pub(crate) async fn mode(&mut self) -> Result<Mode, Error> {
        let bits = self.read_field(Register::Cntl1, cntl1::MODE).await?;
        Mode::from_bits(bits).ok_or(Error::InvalidData)
    }

    pub(crate) async fn set_mode<D: DelayNs>(
        &mut self,
        delay: &mut D,
        mode: Mode,
    ) -> Result<(), Error> {
        if !mode.is_selectable() {
            return Err(Error::Unsupported);
        }
        // A failed power-down does not abort the mode change.
        let _ = self.power_down(delay).await;
        self.enter_mode(delay, mode).await
    }

    pub(crate) async fn start_measurement<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), Error> {
        self.set_mode(delay, Mode::SingleMeasurement).await
    }

    pub(crate) async fn power_down<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.write_field(Register::Cntl1, cntl1::MODE, Mode::PowerDown.bits())
            .await?;
        delay.delay_ns(MODE_SETTLE_DELAY_NS).await;
        Ok(())
    }

    /// Writes any mode code, reserved ones included, then waits the settling time.
    async fn enter_mode<D: DelayNs>(&mut self, delay: &mut D, mode: Mode) -> Result<(), Error> {
        let result = self
            .write_field(Register::Cntl1, cntl1::MODE, mode.bits())
            .await;
        delay.delay_ns(MODE_SETTLE_DELAY_NS).await;
        if result.is_ok() {
            debug!("ak8963: mode {}", mode);
        }
        result
    }

    /// Reads the fuse ROM and stores the sensitivity adjustment.
    pub(crate) async fn calibrate<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<SensitivityAdjustment, Error> {
        self.sensitivity = None;
        self.power_down(delay).await?;
        self.enter_mode(delay, Mode::FuseRomAccess).await?;

        let mut asa = [0u8; FUSE_ROM_LEN];
        let read = self.read_regs(FUSE_ROM_START, &mut asa).await;
        let _ = self.power_down(delay).await;
        read?;

        let adjustment = SensitivityAdjustment::from_fuse_bytes(asa);
        debug!(
            "ak8963: sensitivity x={} y={} z={}",
            adjustment.x, adjustment.y, adjustment.z
        );
        self.sensitivity = Some(adjustment);
        Ok(adjustment)
    }

    pub(crate) async fn self_test<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<SelfTestReport, Error> {
        let _ = self.power_down(delay).await;
        let sample = self.self_test_sample(delay).await;
        let restore = self.write_flag(Register::Astc, astc::SELF, false).await;
        let _ = self.power_down(delay).await;

        let field = sample?;
        restore?;
        let report = SelfTestReport::evaluate(field, self.resolution);
        if !report.passed {
            warn!(
                "ak8963: self-test failed x={} y={} z={}",
                field.x, field.y, field.z
            );
        }
        Ok(report)
    }

    async fn self_test_sample<D: DelayNs>(&mut self, delay: &mut D) -> Result<MagneticField, Error> {
        self.write_flag(Register::Astc, astc::SELF, true).await?;
        self.enter_mode(delay, Mode::SelfTest).await?;

        for _ in 0..SELF_TEST_POLL_RETRIES {
            match self.read_raw().await {
                Ok(field) => return Ok(field),
                Err(Error::NotCalibrated) => return Err(Error::NotCalibrated),
                Err(_) => delay.delay_ns(SELF_TEST_POLL_DELAY_NS).await,
            }
        }

        warn!("ak8963: self-test sample timed out");
        Err(Error::Timeout)
    }

    pub(crate) async fn data_status(&mut self) -> Result<DataStatus, Error> {
        let status = self.read_reg(Register::St1).await?;
        Ok(DataStatus::from_st1(status))
    }

    /// Reads HXL..ST2 once ST1.DRDY is set and updates the overflow flag.
    ///
    /// ST2 is part of the burst so the chip releases the data registers.
    pub(crate) async fn read_counts(&mut self) -> Result<MagRaw, Error> {
        if !self.read_flag(Register::St1, st1::DRDY).await? {
            return Err(Error::NotReady);
        }

        let mut buffer = [0u8; MEASUREMENT_BLOCK_LEN];
        self.read_regs(MEASUREMENT_BLOCK_START, &mut buffer)
            .await?;
        let block = MeasurementBlock::from_bytes(buffer);

        self.overflow = block.overflow();
        if self.overflow {
            warn!("ak8963: magnetic sensor overflow");
            return Err(Error::Overflow);
        }
        Ok(block.raw)
    }

    pub(crate) async fn read_raw(&mut self) -> Result<MagneticField, Error> {
        let sensitivity = self.sensitivity.ok_or(Error::NotCalibrated)?;
        let raw = self.read_counts().await?;
        Ok(sensitivity.apply(raw))
    }

    /// Reads the field in microtesla. An unknown resolution scales as 16-bit.
    pub(crate) async fn read(&mut self) -> Result<MagneticField, Error> {
        let field = self.read_raw().await?;
        let resolution = self.resolution.unwrap_or(Resolution::Bits16);
        Ok(field.scaled(microtesla_per_lsb(resolution)))
    }

    pub(crate) async fn disable_i2c(&mut self) -> Result<(), Error> {
        self.write_reg(Register::I2cDis, i2cdis::DISABLE).await
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    async fn read_reg(&mut self, reg: Register) -> Result<u8, Error> {
        self.interface.read_reg(reg.addr()).await
    }

    async fn read_regs(
        &mut self,
        reg: Register,
        buffer: &mut [u8],
    ) -> Result<(), Error> {
        self.interface.read_regs(reg.addr(), buffer).await
    }

    async fn write_reg(&mut self, reg: Register, value: u8) -> Result<(), Error> {
        self.interface.write_reg(reg.addr(), value).await
    }

    async fn read_field(&mut self, reg: Register, field: BitField) -> Result<u8, Error> {
        self.interface.read_field(reg.addr(), field).await
    }

    async fn write_field(&mut self, reg: Register, field: BitField, value: u8) -> Result<(), Error> {
        self.interface.write_field(reg.addr(), field, value).await
    }

    async fn read_flag(&mut self, reg: Register, field: BitField) -> Result<bool, Error> {
        self.interface.read_flag(reg.addr(), field).await
    }

    async fn write_flag(&mut self, reg: Register, field: BitField, set: bool) -> Result<(), Error> {
        self.interface.write_flag(reg.addr(), field, set).await
    }
}

impl<I2C> DeviceCore<I2cInterface<I2C>>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    pub(crate) fn set_i2c_address(&mut self, address: u8) {
        self.interface.set_address(address);
    }
}
