//! ADC channel model and acquisition value types.
//!
//! The chip exposes a contiguous block of analog inputs whose conversion
//! results land in a contiguous block of result registers starting at REG38.
//! The channel enumeration below carries the datasheet channel ids; the
//! mapping onto result registers is pure arithmetic and is pinned by
//! compile-time assertions.

use crate::register::Register;

/// Logical ADC input channels (datasheet channel ids 38..=53).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcChannel {
    /// Medium-power amplifier power sensor output.
    MpaPowerSensor = 38,
    /// Complementary medium-power amplifier power sensor output.
    MpaxPowerSensor = 39,
    /// I mixer intermediate-frequency output.
    Ifi = 40,
    /// Q mixer intermediate-frequency output.
    Ifq = 41,
    /// BITE power detector output.
    BitePdPowerSensor = 42,
    /// Complementary BITE power detector output.
    BitePdxPowerSensor = 43,
    /// Quadrature sequencer stage 2 sensor.
    Qs2 = 44,
    /// Quadrature sequencer stage 3 sensor.
    Qs3 = 45,
    /// IFI common-mode voltage.
    IfiCommonMode = 46,
    /// IFQ common-mode voltage.
    IfqCommonMode = 47,
    /// RF supply tap close to the SPI pads.
    VddRf = 48,
    /// Ground reference.
    Ground = 49,
    /// On-chip temperature sensor.
    Temperature = 50,
    /// PLL bandgap reference voltage.
    PllBandgap = 51,
    /// ADC bandgap reference voltage.
    AdcBandgap = 52,
    /// Analog baseband bandgap reference voltage.
    AbbBandgap = 53,
}

impl AdcChannel {
    /// Datasheet id of the first channel in the block.
    const FIRST_ID: u8 = Self::MpaPowerSensor as u8;

    /// Number of channels in the block.
    pub const COUNT: u8 = 16;

    /// Zero-based channel index, as written into the CHNR select field.
    pub const fn index(self) -> u8 {
        self as u8 - Self::FIRST_ID
    }

    /// Physical address of this channel's result register.
    pub const fn result_register(self) -> u8 {
        Register::Reg38.addr() + self.index()
    }
}

// The channel ids must stay contiguous with the result register block for
// the index arithmetic to hold, and the block must end before REG56.
const _: () = {
    assert!(AdcChannel::AbbBandgap as u8 - AdcChannel::FIRST_ID + 1 == AdcChannel::COUNT);
    assert!(AdcChannel::MpaPowerSensor.result_register() == Register::Reg38.addr());
    assert!(AdcChannel::AbbBandgap.result_register() < Register::Reg56.addr());
};

/// A conversion request: one channel, or a sequential sweep of all channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Conversion {
    /// Convert a single channel selected via the CHNR field.
    Single(AdcChannel),
    /// Convert all channels sequentially via the CHNR_ALL trigger.
    AllChannels,
}

/// ADC codes captured together in one sequential-conversion pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcResultSet {
    /// I mixer output code.
    pub ifi: u16,
    /// Q mixer output code.
    pub ifq: u16,
    /// IFI common-mode voltage code.
    pub ifi_common_mode: u16,
    /// IFQ common-mode voltage code.
    pub ifq_common_mode: u16,
}

/// Outcome of an ADC power-down request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcPowerDown {
    /// The ADC was enabled and has been switched off.
    Disabled,
    /// The ADC was already off; no register was touched.
    AlreadyDisabled,
}
