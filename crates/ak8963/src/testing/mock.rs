extern crate std;

use std::collections::{BTreeMap, VecDeque};
use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::error::Error;
use crate::interface::Interface;

/// Register file with a write log and scripted failures.
#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    reads: Vec<u8>,
    read_sequences: BTreeMap<u8, VecDeque<u8>>,
    failing_reads: Vec<u8>,
    failing_writes: Vec<u8>,
    fail_next_writes: usize,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            reads: Vec::new(),
            read_sequences: BTreeMap::new(),
            failing_reads: Vec::new(),
            failing_writes: Vec::new(),
            fail_next_writes: 0,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn with_regs(mut self, reg: u8, values: &[u8]) -> Self {
        for (offset, value) in values.iter().enumerate() {
            self.set_reg(reg.wrapping_add(offset as u8), *value);
        }
        self
    }

    /// Single-register reads of `reg` return `values` first, then the register file.
    pub(crate) fn with_read_sequence(mut self, reg: u8, values: &[u8]) -> Self {
        self.read_sequences
            .insert(reg, values.iter().copied().collect());
        self
    }

    /// Reads starting at `reg` fail with `Error::Bus`.
    pub(crate) fn with_failing_read(mut self, reg: u8) -> Self {
        self.failing_reads.push(reg);
        self
    }

    /// Writes to `reg` fail with `Error::Bus`.
    pub(crate) fn with_failing_write(mut self, reg: u8) -> Self {
        self.failing_writes.push(reg);
        self
    }

    /// The next `count` writes fail with `Error::Bus`, whatever the register.
    pub(crate) fn with_failing_next_writes(mut self, count: usize) -> Self {
        self.fail_next_writes = count;
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    /// Successful writes, in order.
    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    /// Start register of every read attempt, in order.
    pub(crate) fn reads(&self) -> &[u8] {
        &self.reads
    }

    fn check_write(&mut self, reg: u8) -> Result<(), Error> {
        if self.fail_next_writes > 0 {
            self.fail_next_writes -= 1;
            return Err(Error::Bus);
        }
        if self.failing_writes.contains(&reg) {
            return Err(Error::Bus);
        }
        Ok(())
    }
}

impl Interface for MockInterface {
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        self.reads.push(reg);
        if self.failing_reads.contains(&reg) {
            return Err(Error::Bus);
        }
        if let Some(value) = self
            .read_sequences
            .get_mut(&reg)
            .and_then(VecDeque::pop_front)
        {
            return Ok(value);
        }
        Ok(self.regs[reg as usize])
    }

    async fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.reads.push(reg);
        if self.failing_reads.contains(&reg) {
            return Err(Error::Bus);
        }
        for (offset, slot) in buffer.iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.regs[addr as usize];
        }
        Ok(())
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        self.check_write(reg)?;
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        Ok(())
    }

    async fn write_regs(&mut self, reg: u8, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }
        self.check_write(reg)?;
        for (offset, value) in data.iter().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            self.regs[addr as usize] = *value;
            self.writes.push((addr, *value));
        }
        Ok(())
    }
}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) total_ns: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}
