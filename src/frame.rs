// src/frame.rs
use crate::config::REGISTER_COUNT;
use crate::error::{Error, Result};

/// One LED state. Bit n lights LED n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame(pub u32);

impl Frame {
    /// Clear every bit at or above `led_count`.
    pub fn masked(self, led_count: u32) -> Self {
        let mask = match 1u32.checked_shl(led_count) {
            Some(bit) => bit - 1,
            None => u32::MAX,
        };
        Frame(self.0 & mask)
    }

    /// Register values, register 0 holding bits 0-7.
    pub fn registers(self) -> [u8; REGISTER_COUNT] {
        self.0.to_le_bytes()
    }
}

/// A lead bit walking up from LED 0 and a trail bit walking down from the
/// last LED, combined into one frame per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChasePattern {
    led_count: u32,
    steps_per_cycle: u32,
}

impl ChasePattern {
    pub fn new(led_count: u32, steps_per_cycle: u32) -> Result<Self> {
        if led_count == 0 || led_count > u32::BITS {
            return Err(Error::InvalidPattern("LED count must be between 1 and 32"));
        }
        if steps_per_cycle == 0 {
            return Err(Error::InvalidPattern("a cycle needs at least one step"));
        }

        Ok(Self {
            led_count,
            steps_per_cycle,
        })
    }

    pub fn led_count(&self) -> u32 {
        self.led_count
    }

    /// Frames of a single cycle. Each cycle starts over from the initial
    /// positions.
    pub fn cycle(&self) -> Cycle {
        Cycle {
            led_count: self.led_count,
            lead: 1,
            trail: 1 << (self.led_count - 1),
            remaining: self.steps_per_cycle,
        }
    }
}

pub struct Cycle {
    led_count: u32,
    lead: u32,
    trail: u32,
    remaining: u32,
}

impl Iterator for Cycle {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let frame = Frame(self.lead | self.trail).masked(self.led_count);
        // Bits shifted out past either end are lost.
        self.lead <<= 1;
        self.trail >>= 1;

        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cycle {}
