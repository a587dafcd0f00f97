// src/test_utils.rs
use crate::device::Transport;

#[derive(Debug, thiserror::Error)]
#[error("fake bus error")]
pub struct FakeBusError;

/// Records everything written to it instead of touching a bus.
#[derive(Default)]
pub struct FakeTransport {
    pub bound_address: Option<u16>,
    pub fail_bind: bool,
    pub burst: bool,
    pub fail_burst: bool,
    pub failing_registers: Vec<u8>,
    /// Successful single-register writes, in order.
    pub writes: Vec<(u8, u8)>,
    /// Every single-register write attempted, failed ones included.
    pub attempts: Vec<u8>,
    pub blocks: Vec<(u8, Vec<u8>)>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The frames seen so far, reassembled from groups of four writes.
    pub fn frames(&self) -> Vec<u32> {
        self.writes
            .chunks(4)
            .map(|regs| {
                regs.iter()
                    .fold(0u32, |acc, &(reg, val)| acc | (val as u32) << (8 * reg as u32))
            })
            .collect()
    }
}

impl Transport for FakeTransport {
    type Error = FakeBusError;

    fn bind(&mut self, address: u16) -> Result<(), FakeBusError> {
        if self.fail_bind {
            return Err(FakeBusError);
        }
        self.bound_address = Some(address);
        Ok(())
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), FakeBusError> {
        self.attempts.push(register);
        if self.failing_registers.contains(&register) {
            return Err(FakeBusError);
        }
        self.writes.push((register, value));
        Ok(())
    }

    fn write_block(&mut self, start: u8, values: &[u8]) -> Option<Result<(), FakeBusError>> {
        if !self.burst {
            return None;
        }
        if self.fail_burst {
            return Some(Err(FakeBusError));
        }
        self.blocks.push((start, values.to_vec()));
        Some(Ok(()))
    }
}
