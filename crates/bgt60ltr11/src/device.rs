//! Device core operations for the BGT60LTR11.
//!
//! The core owns the bus interface and the poll configuration and nothing
//! else: register contents are never cached, so every field operation
//! re-reads the device. Field updates are read-modify-write over two bus
//! transactions; the design assumes a single logical bus owner at a time
//! and does not lock.

use embedded_hal::delay::DelayNs;

use crate::adc::{AdcChannel, AdcPowerDown, AdcResultSet, Conversion};
use crate::config::Config;
use crate::error::Error;
use crate::interface::Interface;
use crate::register::{Field, Register, adc_result, gsr0, reg1, reg15, reg34, reg35, reg36, reg56};

const SOFT_RESET_SETTLE_NS: u32 = 1_000_000;

pub(crate) struct DeviceCore<I> {
    interface: I,
    config: Config,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) const fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }

    pub(crate) fn read_addr(&mut self, addr: u8) -> Result<u16, Error> {
        self.interface.read_reg(addr)
    }

    pub(crate) fn read_reg(&mut self, reg: Register) -> Result<u16, Error> {
        self.read_addr(reg.addr())
    }

    pub(crate) fn write_reg(&mut self, reg: Register, value: u16) -> Result<(), Error> {
        self.interface.write_reg(reg.addr(), value)
    }

    pub(crate) fn read_field(&mut self, reg: Register, field: Field) -> Result<u16, Error> {
        Ok(field.extract(self.read_reg(reg)?))
    }

    /// Read-modify-write field update; all other bits are written back as
    /// observed at read time.
    pub(crate) fn write_field(
        &mut self,
        reg: Register,
        field: Field,
        value: u16,
    ) -> Result<(), Error> {
        let current = self.read_reg(reg)?;
        self.write_reg(reg, field.insert(current, value))
    }

    pub(crate) fn clear_field(&mut self, reg: Register, field: Field) -> Result<(), Error> {
        self.write_field(reg, field, 0)
    }

    /// Writes the whole register to zero, discarding every field. Only for
    /// registers where a full reset is the documented procedure.
    pub(crate) fn clear_register(&mut self, reg: Register) -> Result<(), Error> {
        self.write_reg(reg, 0)
    }

    /// Polls `field` until it reads `expected`, bounded by the configured
    /// attempt budget.
    fn poll_field<D: DelayNs>(
        &mut self,
        delay: &mut D,
        reg: Register,
        field: Field,
        expected: u16,
    ) -> Result<(), Error> {
        for _ in 0..self.config.max_poll_attempts {
            if self.read_field(reg, field)? == expected {
                return Ok(());
            }
            delay.delay_ns(self.config.poll_delay_ns);
        }
        Err(Error::Timeout)
    }

    /// Places the chip in continuous-wave acquisition mode.
    ///
    /// Ordering: START_PM must be set before START_CW within REG15, because
    /// START_CW reinterprets the already-armed mode-start trigger.
    pub(crate) fn start_continuous_wave<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.clear_field(Register::Reg1, reg1::QS_RD_EN)?;
        self.write_field(Register::Reg15, reg15::START_PM, 1)?;
        self.write_field(Register::Reg15, reg15::START_CW, 1)?;
        self.enable_adc(delay)
    }

    pub(crate) fn soft_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.write_field(Register::Reg15, reg15::SOFT_RESET, 1)?;
        delay.delay_ns(SOFT_RESET_SETTLE_NS);
        Ok(())
    }

    pub(crate) fn chip_version(&mut self) -> Result<u16, Error> {
        self.read_field(Register::Reg56, reg56::CHIP_VERSION)
    }

    pub(crate) fn init_done(&mut self) -> Result<bool, Error> {
        Ok(self.read_field(Register::Reg56, reg56::INIT_DONE)? != 0)
    }

    pub(crate) fn pll_locked(&mut self) -> Result<bool, Error> {
        Ok(self.read_field(Register::Reg56, reg56::PLL_LOCK_DETECT)? != 0)
    }

    /// Powers up the analog front end: bandgap and ADC clock first, then
    /// the ADC itself once the bandgap reports up.
    pub(crate) fn enable_adc<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error> {
        self.write_field(Register::Reg34, reg34::BANDGAP_EN, 1)?;
        self.write_field(Register::Reg34, reg34::ADC_CLK_EN, 1)?;
        self.poll_field(delay, Register::Reg36, reg36::BANDGAP_UP, 1)?;
        self.write_field(Register::Reg34, reg34::ADC_ED, 1)
    }

    /// Powers down the ADC; reports (rather than fails) when it was already
    /// off, touching no register in that case.
    pub(crate) fn disable_adc(&mut self) -> Result<AdcPowerDown, Error> {
        if self.read_field(Register::Reg34, reg34::ADC_ED)? == 0 {
            return Ok(AdcPowerDown::AlreadyDisabled);
        }
        self.clear_field(Register::Reg34, reg34::ADC_ED)?;
        self.clear_field(Register::Reg34, reg34::ADC_CLK_EN)?;
        Ok(AdcPowerDown::Disabled)
    }

    /// Waits for the ADC to accept a request, then triggers either a single
    /// channel conversion or a sequential sweep of all channels.
    pub(crate) fn start_conversion<D: DelayNs>(
        &mut self,
        delay: &mut D,
        conversion: Conversion,
    ) -> Result<(), Error> {
        self.poll_field(delay, Register::Reg36, reg36::ADC_READY, 1)?;
        match conversion {
            Conversion::Single(channel) => {
                self.write_field(Register::Reg35, reg35::CHNR, u16::from(channel.index()))
            }
            Conversion::AllChannels => self.write_field(Register::Reg35, reg35::CHNR_ALL, 1),
        }
    }

    /// Single non-blocking read of the global result-ready flag. Callers
    /// poll this themselves; unlike the enable/start waits, the driver does
    /// not block here.
    pub(crate) fn adc_result_ready(&mut self) -> Result<bool, Error> {
        Ok(self.read_field(Register::Gsr0, gsr0::ADC_RESULT_READY)? != 0)
    }

    /// Reads one channel's conversion result, or `NotReady` when no fresh
    /// result is available. Read-only: never writes a register.
    pub(crate) fn read_channel(&mut self, channel: AdcChannel) -> Result<u16, Error> {
        if !self.adc_result_ready()? {
            return Err(Error::NotReady);
        }
        self.read_result(channel)
    }

    /// Reads the I/Q and common-mode codes captured by a sequential pass,
    /// or `NotReady` when no fresh results are available.
    pub(crate) fn read_result_set(&mut self) -> Result<AdcResultSet, Error> {
        if !self.adc_result_ready()? {
            return Err(Error::NotReady);
        }
        Ok(AdcResultSet {
            ifi: self.read_result(AdcChannel::Ifi)?,
            ifq: self.read_result(AdcChannel::Ifq)?,
            ifi_common_mode: self.read_result(AdcChannel::IfiCommonMode)?,
            ifq_common_mode: self.read_result(AdcChannel::IfqCommonMode)?,
        })
    }

    fn read_result(&mut self, channel: AdcChannel) -> Result<u16, Error> {
        let raw = self.read_addr(channel.result_register())?;
        Ok(adc_result::ADC_RESULT.extract(raw))
    }
}
