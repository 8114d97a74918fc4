//! Interface abstraction for register I/O.

pub(crate) mod spi;

pub use spi::SpiInterface;

use crate::error::Error;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Minimal blocking register I/O for the device core.
///
/// One call is one framed bus transaction; implementations must not
/// interleave two register accesses. A failed transfer surfaces as
/// [`Error::Bus`] and leaves no partial register update behind.
pub trait Interface: sealed::Sealed {
    /// Reads a single 16-bit register.
    fn read_reg(&mut self, reg: u8) -> Result<u16, Error>;
    /// Writes a single 16-bit register.
    fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error>;
}
