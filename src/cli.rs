// src/cli.rs
use clap::Parser;

/// Run a two-LED chase across the 20 charlieplexed LEDs of the i2c LED
/// controller.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Number of chase cycles to run (decimal, 0x-prefixed hex or
    /// 0-prefixed octal)
    #[arg(value_parser = parse_count)]
    pub count: u64,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCountError {
    #[error("{0} is not a number")]
    NotANumber(String),

    #[error("{0} is too large")]
    OutOfRange(String),
}

/// Parse an unsigned integer, picking the base from its prefix: `0x`/`0X`
/// is hex, a leading `0` is octal, anything else decimal.
pub fn parse_count(input: &str) -> Result<u64, ParseCountError> {
    let unsigned = input.trim_start();
    let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseCountError::NotANumber(input.to_string()));
    }

    u64::from_str_radix(digits, radix)
        .map_err(|_| ParseCountError::OutOfRange(input.to_string()))
}
