//! Error type for the BGT60LTR11 driver.

/// Error type for BGT60LTR11 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (SPI transfer fault).
    Bus,
    /// A bounded status poll expired before the device asserted the flag.
    Timeout,
    /// ADC result requested while the result-ready flag is clear.
    NotReady,
}
