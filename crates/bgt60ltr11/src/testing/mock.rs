extern crate std;

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::error::Error;
use crate::interface::{Interface, sealed};

/// One journaled bus transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BusOp {
    Read(u8),
    Write(u8, u16),
}

/// Register-array bus double with a transaction journal.
///
/// Reads and writes hit a flat 16-bit register file; every transaction is
/// appended to `ops` so tests can assert counts and ordering.
#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u16; 64],
    ops: Vec<BusOp>,
    failing: bool,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u16; 64],
            ops: Vec::new(),
            failing: false,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u16) -> Self {
        self.set_reg(reg, value);
        self
    }

    /// Makes every subsequent transfer fail with `Error::Bus`.
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u16) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u16 {
        self.regs[reg as usize]
    }

    pub(crate) fn ops(&self) -> &[BusOp] {
        &self.ops
    }

    pub(crate) fn writes(&self) -> Vec<(u8, u16)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Write(reg, value) => Some((*reg, *value)),
                BusOp::Read(_) => None,
            })
            .collect()
    }

    pub(crate) fn reads(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Read(reg) => Some(*reg),
                BusOp::Write(..) => None,
            })
            .collect()
    }

    pub(crate) fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Interface for MockInterface {
    fn read_reg(&mut self, reg: u8) -> Result<u16, Error> {
        if self.failing {
            return Err(Error::Bus);
        }
        self.ops.push(BusOp::Read(reg));
        Ok(self.regs[reg as usize])
    }

    fn write_reg(&mut self, reg: u8, value: u16) -> Result<(), Error> {
        if self.failing {
            return Err(Error::Bus);
        }
        self.ops.push(BusOp::Write(reg, value));
        self.regs[reg as usize] = value;
        Ok(())
    }
}

impl sealed::Sealed for MockInterface {}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
    }
}
