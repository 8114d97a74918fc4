//! BGT60LTR11 driver implementation.
//!
//! This module provides the public blocking driver for the BGT60LTR11.

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

use crate::adc::{AdcChannel, AdcPowerDown, AdcResultSet, Conversion};
use crate::config::Config;
use crate::device::DeviceCore;
use crate::error::Error;
use crate::interface::{Interface, SpiInterface};
use crate::register::{Field, Register};

/// BGT60LTR11 mmWave radar transceiver driver.
///
/// The driver is a session handle over hardware state: it owns the bus
/// interface and the poll configuration, and caches no register contents.
/// All operations block on the underlying bus transfer. Exactly one logical
/// owner may issue transactions at a time; field updates span two bus
/// transactions (read, then write-back) and are not guarded against a
/// concurrent writer.
pub struct Bgt60Ltr11<I> {
    core: DeviceCore<I>,
}

/// SPI type alias for the BGT60LTR11 driver.
pub type Bgt60Ltr11Spi<SPI> = Bgt60Ltr11<SpiInterface<SPI>>;

impl<SPI> Bgt60Ltr11<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver with the default configuration.
    pub fn new_spi(spi: SPI) -> Self {
        Self::with_config(spi, Config::default())
    }

    /// Creates a new SPI-based driver with a custom configuration.
    pub fn with_config(spi: SPI, config: Config) -> Self {
        let interface = SpiInterface::new(spi);
        Self {
            core: DeviceCore::new(interface, config),
        }
    }

    /// Releases the SPI bus, consuming the driver.
    pub fn release(self) -> SPI {
        self.core.release().release()
    }
}

impl<I> Bgt60Ltr11<I>
where
    I: Interface,
{
    /// Returns the current driver configuration.
    pub const fn config(&self) -> Config {
        self.core.config()
    }

    /// Updates the driver configuration.
    pub fn set_config(&mut self, config: Config) {
        self.core.set_config(config);
    }

    /// Reads a full 16-bit register.
    pub fn read_register(&mut self, reg: Register) -> Result<u16, Error> {
        self.core.read_reg(reg)
    }

    /// Writes a full 16-bit register unconditionally, without read-back
    /// verification.
    pub fn write_register(&mut self, reg: Register, value: u16) -> Result<(), Error> {
        self.core.write_reg(reg, value)
    }

    /// Reads a single field out of a register.
    pub fn read_field(&mut self, reg: Register, field: Field) -> Result<u16, Error> {
        self.core.read_field(reg, field)
    }

    /// Updates a single field via read-modify-write, preserving every other
    /// bit of the register as observed at read time.
    pub fn write_field(&mut self, reg: Register, field: Field, value: u16) -> Result<(), Error> {
        self.core.write_field(reg, field, value)
    }

    /// Clears a single field via read-modify-write.
    pub fn clear_field(&mut self, reg: Register, field: Field) -> Result<(), Error> {
        self.core.clear_field(reg, field)
    }

    /// Writes the whole register to zero, discarding all fields, including
    /// ones unrelated to the caller's intent. Use only where a full-register
    /// reset is the documented procedure.
    pub fn clear_register(&mut self, reg: Register) -> Result<(), Error> {
        self.core.clear_register(reg)
    }

    /// Places the chip in continuous-wave acquisition mode and powers up
    /// the ADC.
    ///
    /// Sequence: disable quick-start reads, arm the pulsed-mode start, set
    /// the continuous-wave start (which reinterprets the armed trigger),
    /// then enable the ADC. The order is load-bearing and fixed.
    pub fn start_continuous_wave<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.start_continuous_wave(delay)
    }

    /// Triggers a soft reset and waits for the chip to settle.
    pub fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.soft_reset(delay)
    }

    /// Reads the chip version from the status register.
    pub fn chip_version(&mut self) -> Result<u16, Error> {
        self.core.chip_version()
    }

    /// Returns whether the chip reports initialization done.
    pub fn init_done(&mut self) -> Result<bool, Error> {
        self.core.init_done()
    }

    /// Returns whether the PLL reports lock.
    pub fn pll_locked(&mut self) -> Result<bool, Error> {
        self.core.pll_locked()
    }

    /// Powers up the analog front end: bandgap and ADC clock enables first,
    /// then a bounded wait for the bandgap to come up, then the ADC enable.
    pub fn enable_adc<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.core.enable_adc(delay)
    }

    /// Powers down the ADC.
    ///
    /// Returns [`AdcPowerDown::AlreadyDisabled`] without touching the bus
    /// when the ADC enable field already reads 0.
    pub fn disable_adc(&mut self) -> Result<AdcPowerDown, Error> {
        self.core.disable_adc()
    }

    /// Starts a single-channel conversion or a sequential all-channel
    /// sweep, after a bounded wait for the ADC to accept requests.
    pub fn start_conversion<D: DelayNs>(
        &mut self,
        delay: &mut D,
        conversion: Conversion,
    ) -> Result<(), Error> {
        self.core.start_conversion(delay, conversion)
    }

    /// Non-blocking read of the global result-ready flag. Poll this before
    /// fetching results; the driver does not wait here.
    pub fn adc_result_ready(&mut self) -> Result<bool, Error> {
        self.core.adc_result_ready()
    }

    /// Reads one channel's 14-bit conversion result.
    ///
    /// Returns [`Error::NotReady`] when the result-ready flag is clear; use
    /// `read_channel(ch).unwrap_or(0)` for the legacy zero-sentinel
    /// behavior.
    pub fn read_channel(&mut self, channel: AdcChannel) -> Result<u16, Error> {
        self.core.read_channel(channel)
    }

    /// Reads the I/Q and common-mode results of a sequential pass.
    ///
    /// Returns [`Error::NotReady`] when the result-ready flag is clear; use
    /// `read_result_set().unwrap_or_default()` for the legacy zero-filled
    /// set.
    pub fn read_result_set(&mut self) -> Result<AdcResultSet, Error> {
        self.core.read_result_set()
    }
}
