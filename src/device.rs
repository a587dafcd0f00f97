// src/device.rs
use i2cdev::core::I2CDevice;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};

use crate::config::BusConfig;
use crate::error::{Error, Result};

/// Byte-level access to the peripheral's registers.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Select the target device all following writes go to.
    fn bind(&mut self, address: u16) -> Result<(), Self::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// Write `values` to consecutive registers starting at `start` in one
    /// transaction. `None` means the transport has no burst write.
    fn write_block(&mut self, _start: u8, _values: &[u8]) -> Option<Result<(), Self::Error>> {
        None
    }
}

impl<T> Transport for &mut T
where
    T: Transport + ?Sized,
{
    type Error = T::Error;

    fn bind(&mut self, address: u16) -> Result<(), Self::Error> {
        T::bind(self, address)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        T::write_register(self, register, value)
    }

    fn write_block(&mut self, start: u8, values: &[u8]) -> Option<Result<(), Self::Error>> {
        T::write_block(self, start, values)
    }
}

impl Transport for LinuxI2CDevice {
    type Error = LinuxI2CError;

    fn bind(&mut self, address: u16) -> Result<(), LinuxI2CError> {
        self.set_slave_address(address)
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), LinuxI2CError> {
        self.smbus_write_byte_data(register, value)
    }

    fn write_block(&mut self, start: u8, values: &[u8]) -> Option<Result<(), LinuxI2CError>> {
        Some(self.smbus_write_i2c_block_data(start, values))
    }
}

/// An open, bound connection to the LED controller.
///
/// The transport is released when the session is dropped.
pub struct BusSession<T: Transport> {
    transport: T,
    config: BusConfig,
}

impl BusSession<LinuxI2CDevice> {
    /// Open the i2c-dev node named in `config` and bind it to the target.
    pub fn open(config: BusConfig) -> Result<Self> {
        // `LinuxI2CDevice::new` also issues the addressing ioctls, so only
        // a failed open of the node itself is a transport error.
        let device = LinuxI2CDevice::new(config.path, config.address).map_err(|e| match e {
            LinuxI2CError::Io(_) => Error::TransportUnavailable {
                path: config.path.to_string(),
                source: e.into(),
            },
            _ => Error::AddressingError {
                address: config.address,
                source: e.into(),
            },
        })?;
        log::info!("Opened i2c bus {}", config.path);

        Self::bind(device, config)
    }
}

impl<T: Transport> BusSession<T> {
    /// Bind an already open transport to `config.address`.
    ///
    /// On failure the transport is dropped before the error is returned.
    pub fn bind(mut transport: T, config: BusConfig) -> Result<Self> {
        transport
            .bind(config.address)
            .map_err(|e| Error::AddressingError {
                address: config.address,
                source: e.into(),
            })?;
        log::info!("Bound to target device {:#04x}", config.address);

        Ok(Self { transport, config })
    }

    pub fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        log::trace!("reg {} <- {:#04x}", register, value);
        self.transport
            .write_register(register, value)
            .map_err(|e| Error::WriteFailure {
                register,
                source: e.into(),
            })
    }

    /// Write all of `values` starting at register 0 in one transaction, if
    /// the transport can.
    pub fn write_registers(&mut self, values: &[u8]) -> Option<Result<()>> {
        log::trace!("regs 0.. <- {:02x?}", values);
        self.transport.write_block(0, values).map(|res| {
            res.map_err(|e| Error::WriteFailure {
                register: 0,
                source: e.into(),
            })
        })
    }
}

impl<T: Transport> Drop for BusSession<T> {
    fn drop(&mut self) {
        log::debug!("Releasing i2c bus {}", self.config.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeTransport;

    #[test]
    fn bind_selects_configured_address() {
        let mut fake = FakeTransport::new();
        let session = BusSession::bind(&mut fake, BusConfig::DEFAULT);
        assert!(session.is_ok());
        drop(session);

        assert_eq!(fake.bound_address, Some(0x54));
        assert!(fake.writes.is_empty());
    }

    #[test]
    fn bind_failure_is_addressing_error() {
        let mut fake = FakeTransport::new();
        fake.fail_bind = true;

        let err = BusSession::bind(&mut fake, BusConfig::DEFAULT)
            .err()
            .unwrap();
        assert!(matches!(err, Error::AddressingError { address: 0x54, .. }));
        assert!(fake.writes.is_empty());
    }

    #[test]
    fn open_missing_bus_is_transport_unavailable() {
        let config = BusConfig {
            path: "/nonexistent/i2c-bus",
            address: 0x54,
        };

        let err = BusSession::open(config).err().unwrap();
        match err {
            Error::TransportUnavailable { path, .. } => assert_eq!(path, "/nonexistent/i2c-bus"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn open_non_i2c_node_is_addressing_error() {
        let config = BusConfig {
            path: "/dev/null",
            address: 0x54,
        };

        let err = BusSession::open(config).err().unwrap();
        assert!(matches!(err, Error::AddressingError { address: 0x54, .. }));
    }

    #[test]
    fn write_failure_names_register() {
        let mut fake = FakeTransport::new();
        fake.failing_registers = vec![2];
        let mut session = BusSession::bind(&mut fake, BusConfig::DEFAULT).unwrap();

        session.write_register(1, 0xaa).unwrap();
        let err = session.write_register(2, 0xbb).unwrap_err();
        assert!(matches!(err, Error::WriteFailure { register: 2, .. }));
        drop(session);

        assert_eq!(fake.writes, vec![(1, 0xaa)]);
    }

    #[test]
    fn burst_write_unsupported_by_default() {
        let mut fake = FakeTransport::new();
        let mut session = BusSession::bind(&mut fake, BusConfig::DEFAULT).unwrap();

        assert!(session.write_registers(&[1, 2, 3, 4]).is_none());
    }

    #[test]
    fn burst_write_when_supported() {
        let mut fake = FakeTransport::new();
        fake.burst = true;
        let mut session = BusSession::bind(&mut fake, BusConfig::DEFAULT).unwrap();

        session.write_registers(&[1, 2, 3, 4]).unwrap().unwrap();
        drop(session);

        assert_eq!(fake.blocks, vec![(0, vec![1, 2, 3, 4])]);
        assert!(fake.writes.is_empty());
    }
}
