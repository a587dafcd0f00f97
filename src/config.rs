// src/config.rs
use std::time::Duration;

pub const I2C_BUS: &str = "/dev/i2c-8";
pub const I2C_TARGET_ADDR: u16 = 0x54;

pub const LED_COUNT: u32 = 20;
pub const STEPS_PER_CYCLE: u32 = 10;
pub const FRAME_DELAY: Duration = Duration::from_millis(30);

/// Number of byte-wide registers the peripheral exposes.
pub const REGISTER_COUNT: usize = 4;

const _: () = assert!(I2C_TARGET_ADDR <= 0x7f, "target address must be 7-bit");

/// Where the peripheral lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    pub path: &'static str,
    pub address: u16,
}

impl BusConfig {
    pub const DEFAULT: Self = Self {
        path: I2C_BUS,
        address: I2C_TARGET_ADDR,
    };
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What to do when a single register write fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnWriteError {
    /// Log the failure and carry on with the next register.
    #[default]
    Continue,
    /// Stop the animation and report the failure.
    #[cfg_attr(not(test), allow(dead_code))]
    Abort,
}

/// How a frame is put on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransmitMode {
    /// Four single-byte writes, register 0 first.
    #[default]
    PerRegister,
    /// One block write of all registers if the transport supports it.
    Burst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub led_count: u32,
    pub steps_per_cycle: u32,
    pub frame_delay: Duration,
    pub on_write_error: OnWriteError,
    pub transmit: TransmitMode,
}

impl AnimationConfig {
    pub const DEFAULT: Self = Self {
        led_count: LED_COUNT,
        steps_per_cycle: STEPS_PER_CYCLE,
        frame_delay: FRAME_DELAY,
        on_write_error: OnWriteError::Continue,
        transmit: TransmitMode::PerRegister,
    };
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
