//! Byte-level bus transport.
//!
//! The driver talks to the controller through three primitives: open a
//! write transaction to an address, push bytes, close the transaction.
//! [`Transport`] captures exactly that; [`I2cTransport`] implements it on
//! top of any `embedded-hal` blocking I2C bus.
//!
//! Addresses are passed in their on-wire form: the 7-bit device address
//! shifted left with the R/W bit (always 0, write) in bit 0. The SSD1306 has
//! two hardware addresses, `0x3C` and `0x3D`, which become [`SSD1306_ADDR1`]
//! (`0x78`) and [`SSD1306_ADDR2`] (`0x7A`).

use core::fmt;

use embedded_hal::i2c::I2c;
use heapless::Vec;

/// Write address of a display strapped to `0x3C`.
pub const SSD1306_ADDR1: u8 = 0x78;

/// Write address of a display strapped to `0x3D`.
pub const SSD1306_ADDR2: u8 = 0x7A;

/// Default transaction buffer for [`I2cTransport`]: one control byte plus a
/// full 128-column page.
pub const DEFAULT_TRANSACTION_LEN: usize = 129;

/// Merge a 7-bit device address with the write bit.
pub const fn write_address(address: u8) -> u8 {
    address << 1
}

/// Recover the 7-bit device address from its on-wire write form.
pub const fn seven_bit_address(address_byte: u8) -> u8 {
    address_byte >> 1
}

/// Write-only byte transport to a bus target.
///
/// Implementations must treat `begin` .. `end` as one bus transaction.
/// The driver never nests transactions and always calls `end` after a
/// successful `begin`, even when a `send_byte` in between failed.
pub trait Transport {
    /// Error type for bus operations.
    type Error: fmt::Debug;

    /// Open a write transaction to `address_byte` (address with R/W bit).
    fn begin(&mut self, address_byte: u8) -> Result<(), Self::Error>;

    /// Send one byte within the open transaction.
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Close the open transaction.
    fn end(&mut self) -> Result<(), Self::Error>;

    /// Largest number of bytes (control byte included) one transaction can
    /// carry, or `None` if unbounded.
    fn max_transaction_len(&self) -> Option<usize> {
        None
    }
}

/// Errors from [`I2cTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError<E> {
    /// Underlying I2C bus error.
    I2c(E),
    /// More bytes were pushed than the transaction buffer holds.
    TransactionOverflow,
}

impl<E> From<E> for BusError<E> {
    fn from(error: E) -> Self {
        BusError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for BusError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusError::I2c(e) => write!(f, "I2C error: {:?}", e),
            BusError::TransactionOverflow => write!(f, "I2C transaction buffer full"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for BusError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            BusError::I2c(e) => defmt::write!(f, "I2C error: {}", e),
            BusError::TransactionOverflow => defmt::write!(f, "I2C transaction buffer full"),
        }
    }
}

/// [`Transport`] over an `embedded-hal` blocking I2C bus.
///
/// Bytes of one transaction are collected in a fixed buffer of `N` bytes
/// and sent with a single `I2c::write` on [`end`](Transport::end). `N`
/// is reported as [`max_transaction_len`](Transport::max_transaction_len),
/// which lets the framer split long data runs into several transactions.
///
/// # Example
///
/// ```no_run
/// use ssd1306_lite_rs::{I2cTransport, Ssd1306, SSD1306_ADDR1};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut display = Ssd1306::new(I2cTransport::new(i2c), SSD1306_ADDR1);
/// display.initialize().ok();
/// # }
/// ```
pub struct I2cTransport<I2C, const N: usize = DEFAULT_TRANSACTION_LEN> {
    i2c: I2C,
    /// 7-bit address of the open transaction.
    address: u8,
    buffer: Vec<u8, N>,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Wrap an I2C bus (takes ownership for exclusive access) with a
    /// [`DEFAULT_TRANSACTION_LEN`] byte buffer.
    pub fn new(i2c: I2C) -> Self {
        Self::with_capacity(i2c)
    }
}

impl<I2C, const N: usize> I2cTransport<I2C, N>
where
    I2C: I2c,
{
    /// Wrap an I2C bus with an `N` byte transaction buffer.
    ///
    /// Smaller buffers trade RAM for more, shorter bus transactions.
    /// `N` must be at least 2 (control byte plus one payload byte).
    ///
    /// ```no_run
    /// # use ssd1306_lite_rs::I2cTransport;
    /// # fn example(i2c: impl embedded_hal::i2c::I2c) {
    /// let transport = I2cTransport::<_, 33>::with_capacity(i2c);
    /// # }
    /// ```
    pub fn with_capacity(i2c: I2C) -> Self {
        Self {
            i2c,
            address: 0,
            buffer: Vec::new(),
        }
    }

    /// Give back the I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, const N: usize> Transport for I2cTransport<I2C, N>
where
    I2C: I2c,
{
    type Error = BusError<I2C::Error>;

    fn begin(&mut self, address_byte: u8) -> Result<(), Self::Error> {
        self.address = seven_bit_address(address_byte);
        self.buffer.clear();
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.buffer
            .push(byte)
            .map_err(|_| BusError::TransactionOverflow)
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        // An empty transaction is just an address probe; skip it.
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = self.i2c.write(self.address, &self.buffer);
        self.buffer.clear();
        result.map_err(BusError::I2c)
    }

    fn max_transaction_len(&self) -> Option<usize> {
        Some(N)
    }
}
