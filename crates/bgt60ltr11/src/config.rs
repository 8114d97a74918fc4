//! Driver configuration.

/// BGT60LTR11 driver configuration.
///
/// Bounds every internal status poll: an operation that waits for a hardware
/// flag (bandgap up, ADC ready) re-reads the status register at most
/// `max_poll_attempts` times with `poll_delay_ns` between attempts, then
/// fails with [`Error::Timeout`](crate::Error::Timeout). Embedded
/// deployments vary in acceptable latency, so both knobs are configuration
/// rather than constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub(crate) max_poll_attempts: u16,
    pub(crate) poll_delay_ns: u32,
}

impl Config {
    /// Default poll budget: 400 attempts at 50 us apart (20 ms total).
    pub const DEFAULT: Self = Self {
        max_poll_attempts: 400,
        poll_delay_ns: 50_000,
    };

    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum number of status poll attempts.
    #[must_use]
    pub const fn with_max_poll_attempts(mut self, attempts: u16) -> Self {
        self.max_poll_attempts = attempts;
        self
    }

    /// Sets the delay between status poll attempts, in nanoseconds.
    #[must_use]
    pub const fn with_poll_delay_ns(mut self, delay_ns: u32) -> Self {
        self.poll_delay_ns = delay_ns;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
