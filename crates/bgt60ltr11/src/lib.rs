//! Blocking `#![no_std]` driver for the
//! [BGT60LTR11](https://www.infineon.com/cms/en/product/sensor/radar-sensors/radar-sensors-for-iot/60ghz-radar/bgt60ltr11aip/)
//! 60 GHz mmWave radar transceiver from Infineon.
//!
//! This crate provides a lightweight, `embedded-hal` based driver for the
//! BGT60LTR11 family. It exposes the chip's 16-bit registers as named,
//! bit-field-addressable properties, sequences the continuous-wave bring-up,
//! and drives the on-chip ADC acquisition pipeline.
//!
//! # Quick start (SPI)
//!
//! ```rust,no_run
//! use bgt60ltr11::{AdcChannel, Bgt60Ltr11Spi, Conversion};
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::spi::SpiDevice;
//! #
//! # fn example<SPI: SpiDevice, D: DelayNs>(spi: SPI, delay: &mut D) -> Result<(), bgt60ltr11::Error> {
//! let mut radar = Bgt60Ltr11Spi::new_spi(spi);
//! radar.start_continuous_wave(delay)?;
//!
//! radar.start_conversion(delay, Conversion::Single(AdcChannel::Temperature))?;
//! while !radar.adc_result_ready()? {}
//! let code = radar.read_channel(AdcChannel::Temperature)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Wire protocol
//!
//! The chip speaks SPI mode 0, MSB first, with the read/write flag in bit 0
//! of the left-shifted 7-bit register address. Chip-select framing is owned
//! by the [`embedded_hal::spi::SpiDevice`] implementation you hand to the
//! driver, so each register access is one scoped transaction. See
//! [`SpiInterface`] for the exact byte layout.
//!
//! # Bounded polling
//!
//! The bring-up and conversion paths wait on hardware status flags (bandgap
//! up, ADC ready). Every such wait is bounded by [`Config`] and fails with
//! [`Error::Timeout`] instead of hanging on an absent or miswired device.
//! The global result-ready flag is the exception by contract: the driver
//! never waits on it; poll [`Bgt60Ltr11::adc_result_ready`] yourself.
//!
//! # Register facade
//!
//! [`Bgt60Ltr11::write_field`] and friends give raw, datasheet-level access
//! to every cataloged register field (see [`register`]). Field updates are
//! read-modify-write over two bus transactions; the driver assumes a single
//! logical bus owner and holds no register cache.
//!
//! # Not supported
//!
//! - Interrupt- or DMA-driven transfers (the execution model is purely
//!   blocking).
//! - Multi-device bus arbitration.
//! - Scaling or calibration of raw ADC codes.

#![no_std]
#![deny(missing_docs)]
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
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::wildcard_imports
)]

mod adc;
mod config;
mod device;
mod driver;
mod error;
mod interface;
pub mod register;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::{Interface, SpiInterface};

// Configuration
pub use config::Config;

// Driver
pub use driver::{Bgt60Ltr11, Bgt60Ltr11Spi};

// ADC acquisition
pub use adc::{AdcChannel, AdcPowerDown, AdcResultSet, Conversion};

// Register model
pub use register::{Field, Register};

pub use error::Error;
