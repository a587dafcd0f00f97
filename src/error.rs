// src/error.rs

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open i2c bus {path}")]
    TransportUnavailable {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("Cannot access target device at address {address:#04x}")]
    AddressingError {
        address: u16,
        #[source]
        source: BoxError,
    },

    #[error("Write to register {register} failed")]
    WriteFailure {
        register: u8,
        #[source]
        source: BoxError,
    },

    #[error("Invalid chase pattern: {0}")]
    InvalidPattern(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
