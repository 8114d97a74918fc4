//! Continuous-wave bring-up and ADC acquisition walkthrough.
//!
//! Runs the full driver flow against a simulated SPI bus so the wire
//! traffic can be inspected on a host machine. On real hardware, replace
//! `SimulatedBus` with your platform's `SpiDevice` implementation (e.g.
//! `embedded_hal_bus::spi::ExclusiveDevice` wrapping the SPI peripheral and
//! the chip-select pin) and `NoopDelay` with a real delay provider.
//!
//! Run with: `cargo run --example continuous_wave`

use core::convert::Infallible;

use bgt60ltr11::{AdcChannel, Bgt60Ltr11Spi, Conversion};
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{Operation, SpiDevice};

/// Simulated BGT60LTR11 behind an SPI bus.
///
/// Decodes the driver's wire frames (write = `[addr << 1 | 1, hi, lo]`,
/// read = `[addr << 1]` followed by two data bytes) against a flat register
/// file, and prints every transaction.
struct SimulatedBus {
    regs: [u16; 64],
    pending_read: Option<u8>,
}

impl SimulatedBus {
    fn new() -> Self {
        let mut regs = [0u16; 64];
        // Status flags a healthy chip would report: bandgap up + ADC ready,
        // init done, PLL locked, chip version 3, fresh ADC results.
        regs[0x24] = 0x0003;
        regs[0x38] = 0x200B;
        regs[0x39] = 0x0002;
        regs[AdcChannel::Temperature.result_register() as usize] = 0x0A5C;
        regs[AdcChannel::Ifi.result_register() as usize] = 0x1F40;
        regs[AdcChannel::Ifq.result_register() as usize] = 0x1F3B;
        regs[AdcChannel::IfiCommonMode.result_register() as usize] = 0x0800;
        regs[AdcChannel::IfqCommonMode.result_register() as usize] = 0x07F9;
        Self {
            regs,
            pending_read: None,
        }
    }
}

impl embedded_hal::spi::ErrorType for SimulatedBus {
    type Error = Infallible;
}

impl SpiDevice for SimulatedBus {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => match bytes {
                    [addr, hi, lo] => {
                        let reg = addr >> 1;
                        let value = u16::from_be_bytes([*hi, *lo]);
                        self.regs[reg as usize] = value;
                        println!("  -> write reg 0x{reg:02X} = 0x{value:04X}");
                    }
                    [addr] => {
                        self.pending_read = Some(addr >> 1);
                    }
                    _ => {}
                },
                Operation::Read(buf) => {
                    let reg = self.pending_read.take().unwrap_or(0);
                    let value = self.regs[reg as usize];
                    buf.copy_from_slice(&value.to_be_bytes());
                    println!("  <- read  reg 0x{reg:02X} = 0x{value:04X}");
                }
                _ => {}
            }
        }
        Ok(())
    }
}

struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn main() {
    let mut delay = NoopDelay;
    let mut radar = Bgt60Ltr11Spi::new_spi(SimulatedBus::new());

    println!("chip status:");
    let version = radar.chip_version().unwrap();
    let locked = radar.pll_locked().unwrap();
    println!("  version={version} pll_locked={locked}\n");

    println!("continuous-wave bring-up:");
    radar.start_continuous_wave(&mut delay).unwrap();
    println!();

    println!("single temperature conversion:");
    radar
        .start_conversion(&mut delay, Conversion::Single(AdcChannel::Temperature))
        .unwrap();
    while !radar.adc_result_ready().unwrap() {}
    let code = radar.read_channel(AdcChannel::Temperature).unwrap();
    println!("  temperature code = {code}\n");

    println!("sequential I/Q sweep:");
    radar
        .start_conversion(&mut delay, Conversion::AllChannels)
        .unwrap();
    let set = radar.read_result_set().unwrap();
    println!(
        "  ifi={} ifq={} ifi_cm={} ifq_cm={}\n",
        set.ifi, set.ifq, set.ifi_common_mode, set.ifq_common_mode
    );

    println!("ADC power-down:");
    println!("  first:  {:?}", radar.disable_adc().unwrap());
    println!("  second: {:?}", radar.disable_adc().unwrap());
}
