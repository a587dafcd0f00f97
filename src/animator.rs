// src/animator.rs
use std::thread;

use crate::config::{AnimationConfig, OnWriteError, TransmitMode, REGISTER_COUNT};
use crate::device::{BusSession, Transport};
use crate::error::{Error, Result};
use crate::frame::{ChasePattern, Frame};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub failed_writes: u64,
}

/// Drives the chase pattern onto the bus.
pub struct Animator<T: Transport> {
    session: BusSession<T>,
    pattern: ChasePattern,
    config: AnimationConfig,
}

impl<T: Transport> Animator<T> {
    pub fn new(session: BusSession<T>, config: AnimationConfig) -> Result<Self> {
        let pattern = ChasePattern::new(config.led_count, config.steps_per_cycle)?;
        Ok(Self {
            session,
            pattern,
            config,
        })
    }

    /// Run `cycles` full cycles. Zero cycles writes nothing.
    pub fn run(&mut self, cycles: u64) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for cycle in 0..cycles {
            log::debug!("cycle {}/{}", cycle + 1, cycles);
            for frame in self.pattern.cycle() {
                summary.failed_writes += self.transmit(frame)?;
                summary.frames += 1;
                thread::sleep(self.config.frame_delay);
            }
        }

        Ok(summary)
    }

    /// Put one frame on the bus, returning how many register writes failed.
    ///
    /// Registers are written in ascending order and every one is attempted
    /// unless the policy is `Abort`. A failed burst write counts as a failure
    /// of every register and is not retried register by register.
    pub fn transmit(&mut self, frame: Frame) -> Result<u64> {
        let regs = frame.masked(self.pattern.led_count()).registers();
        log::debug!("frame {:#07x}", frame.0);

        if self.config.transmit == TransmitMode::Burst {
            match self.session.write_registers(&regs) {
                Some(Ok(())) => return Ok(0),
                Some(Err(e)) => {
                    self.handle_failure(e)?;
                    return Ok(REGISTER_COUNT as u64);
                }
                None => log::trace!("burst write unsupported, writing registers one by one"),
            }
        }

        let mut failed = 0;
        for (register, value) in (0u8..).zip(regs) {
            if let Err(e) = self.session.write_register(register, value) {
                self.handle_failure(e)?;
                failed += 1;
            }
        }

        Ok(failed)
    }

    fn handle_failure(&self, e: Error) -> Result<()> {
        match self.config.on_write_error {
            OnWriteError::Continue => {
                log::error!("{}: {}", e, source_of(&e));
                Ok(())
            }
            OnWriteError::Abort => Err(e),
        }
    }
}

fn source_of(e: &Error) -> String {
    std::error::Error::source(e)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
