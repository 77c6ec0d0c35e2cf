//! Async `#![no_std]` driver for the
//! [AK8963](https://www.akm.com/) 3-axis electronic compass from Asahi Kasei
//! Microdevices (standalone, or the magnetometer die inside the MPU-9250).
//!
//! This crate provides a lightweight, `embedded-hal-async` based driver that
//! takes the chip from an unknown state to a calibrated, self-tested,
//! continuously sampling state and converts readings to microtesla.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_ak8963::{Ak8963Address, Ak8963I2c, Config, I2cConfig};
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c, D: DelayNs>(i2c: I2C, delay: &mut D) -> Result<(), ph_ak8963::Error> {
//! let i2c_config = I2cConfig::for_pins(Ak8963Address::Cad00);
//! let mut mag: Ak8963I2c<I2C> = Ak8963I2c::with_i2c_config(i2c, Config::new(), i2c_config);
//! mag.init(delay).await?;
//! let field = mag.read().await?;
//! # let _ = field;
//! # Ok(())
//! # }
//! ```
//!
//! # Initialization
//!
//! [`Ak8963::init`] runs soft reset, resolution setup, fuse ROM calibration,
//! self-test, identity check and run-mode entry. Every step runs even when an
//! earlier one fails; use [`Ak8963::init_report`] to see each outcome.
//!
//! # Readings
//!
//! - [`Ak8963::read_counts`]: raw signed counts.
//! - [`Ak8963::read_raw`]: counts times the fuse ROM sensitivity adjustment.
//! - [`Ak8963::read`]: microtesla (0.15 uT/LSB at 16 bits, 0.6 uT/LSB at 14 bits).
//!
//! A reading with ST2.HOFL set returns [`Error::Overflow`] and latches
//! [`Ak8963::overflow`] until the next completed read.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature to convert raw counts into microtesla with
//! `I32F32` integer math.
//!
//! # Logging
//!
//! Enable the `defmt` feature for `defmt::Format` on public types and driver
//! log records.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::float_cmp,
    clippy::excessive_precision,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

#[macro_use]
mod macros;

mod calibration;
mod config;
mod data;
mod device;
mod driver;
mod error;
mod init;
mod interface;
mod register;
mod self_test;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Ak8963Address;
pub use interface::Interface;
pub use interface::SpiInterface;
pub use interface::{I2cConfig, I2cInterface};
pub use register::{BitField, Register};

// Configuration
pub use config::{Config, Mode, Resolution};

// Driver
pub use driver::{Ak8963, Ak8963I2c, Ak8963Spi};

// Data types
pub use data::{DataStatus, MagRaw, MagneticField};
pub use data::{
    MICROTESLA_PER_LSB_14BIT,
    MICROTESLA_PER_LSB_16BIT,
    ScaleFactor,
    microtesla_per_lsb,
    microtesla_ratio,
};

// Features
pub use calibration::{SensitivityAdjustment, sensitivity_coefficient};
pub use error::Error;
pub use init::{InitReport, InitStep};
pub use self_test::{SelfTestLimits, SelfTestReport};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{
    Fixed, MagneticFieldFixed, adjusted_counts_to_microtesla, counts_to_microtesla,
};
