//! SPI register interface for the BGT60LTR11.
//!
//! Wire contract: the address byte is the 7-bit register address shifted
//! left by one, with the read/write flag in bit 0 (`1` = write, `0` = read).
//! A write is one 3-byte frame `[addr, value_hi, value_lo]`; a read is a
//! 1-byte address frame followed by a 2-byte read, decoded big-endian. Each
//! register access runs inside a single [`SpiDevice`] transaction, which
//! asserts chip select for the whole access and releases it afterwards even
//! if the transfer fails. The bus is expected to be configured for mode 0
//! (clock idle low, sample on the rising edge) with MSB-first data.

use embedded_hal::spi::{Operation, SpiDevice};

use super::{Interface, sealed};
use crate::error::Error;

/// Read/write flag in bit 0 of the left-shifted address byte.
const SPI_WRITE_BIT: u8 = 0x01;

const fn spi_addr_write(reg: u8) -> u8 {
    (reg << 1) | SPI_WRITE_BIT
}

const fn spi_addr_read(reg: u8) -> u8 {
    (reg << 1) & !SPI_WRITE_BIT
}

/// SPI register interface.
///
/// The [`SpiDevice`] implementation owns chip-select framing; use e.g.
/// `embedded_hal_bus::spi::ExclusiveDevice` to pair a raw bus with a CS pin.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new SPI interface with the given bus.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI bus.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    fn read_reg(&mut self, reg: u8) -> Result<u16, Error> {
        let addr_buf = [spi_addr_read(reg)];
        let mut data = [0u8; 2];
        let mut ops = [Operation::Write(&addr_buf), Operation::Read(&mut data)];
        self.spi.transaction(&mut ops).map_err(|_| Error::Bus)?;
        Ok(u16::from_be_bytes(data))
    }

    fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error> {
        let [hi, lo] = value.to_be_bytes();
        let frame = [spi_addr_write(reg), hi, lo];
        self.spi.write(&frame).map_err(|_| Error::Bus)
    }
}

impl<SPI> sealed::Sealed for SpiInterface<SPI> {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use embedded_hal::spi::ErrorKind;

    use super::*;

    #[derive(Default)]
    struct ScriptedSpi {
        frames: Vec<Vec<u8>>,
        read_data: [u8; 2],
    }

    impl embedded_hal::spi::ErrorType for ScriptedSpi {
        type Error = core::convert::Infallible;
    }

    impl SpiDevice for ScriptedSpi {
        fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(bytes) => self.frames.push(bytes.to_vec()),
                    Operation::Read(buf) => buf.copy_from_slice(&self.read_data),
                    _ => {}
                }
            }
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Fault;

    impl embedded_hal::spi::Error for Fault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct FailingSpi;

    impl embedded_hal::spi::ErrorType for FailingSpi {
        type Error = Fault;
    }

    impl SpiDevice for FailingSpi {
        fn transaction(
            &mut self,
            _operations: &mut [Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            Err(Fault)
        }
    }

    #[test]
    fn write_frame_matches_wire_layout() {
        let mut interface = SpiInterface::new(ScriptedSpi::default());
        interface.write_reg(0x22, 0x0006).unwrap();

        assert_eq!(interface.spi.frames, [[0x45, 0x00, 0x06]]);
    }

    #[test]
    fn read_frame_clears_write_bit_and_decodes_big_endian() {
        let mut spi = ScriptedSpi::default();
        spi.read_data = [0x12, 0x34];
        let mut interface = SpiInterface::new(spi);

        let value = interface.read_reg(0x22).unwrap();

        assert_eq!(interface.spi.frames, [[0x44]]);
        assert_eq!(value, 0x1234);
    }

    #[test]
    fn bus_faults_surface_as_bus_error() {
        let mut interface = SpiInterface::new(FailingSpi);
        assert_eq!(interface.read_reg(0x01), Err(Error::Bus));
        assert_eq!(interface.write_reg(0x01, 0xFFFF), Err(Error::Bus));
    }
}
