//! Lightweight, unbuffered SSD1306 (128×64) OLED driver over I2C.
//!
//! This crate provides [`Ssd1306`], a driver that renders text, fills and
//! bitmaps straight into the controller's display RAM. There is no host-side
//! frame buffer: each call positions the controller's write cursor and
//! streams the bytes for that area, which keeps RAM use to a single bus
//! transaction buffer.
//!
//! The bus is abstracted by the [`Transport`] trait (begin / byte / end).
//! [`I2cTransport`] implements it on top of any `embedded-hal` 1.0 blocking
//! I2C bus; the [`framer`] layer adds the SSD1306 control bytes on top.
//!
//! # Quick Start
//!
//! ```no_run
//! use ssd1306_lite_rs::{I2cTransport, Ssd1306, SSD1306_ADDR1};
//!
//! # use ssd1306_lite_rs::{BusError, Error};
//! # fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), Error<BusError<I2C::Error>>> {
//! let mut oled = Ssd1306::new(I2cTransport::new(i2c), SSD1306_ADDR1);
//! oled.initialize()?;
//! oled.clear()?;
//!
//! oled.text(0, 0, "Temperature")?;      // 6×8 font, row = page
//! oled.text2x(2, 4, "21.5C")?;          // 8×16 font, pages 2 and 3
//! oled.fill_area_with_bytes(6, 0, 1, 128, &[0x18, 0x3C, 0x18, 0x00])?;
//! oled.invert_screen(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Coordinates
//!
//! The panel is 8 pages of 128 columns; each data byte is a vertical strip
//! of 8 pixels, LSB at the top. Fill and image calls address pages and pixel
//! columns, text calls address character cells (see [`MAX_TEXT`] and
//! [`MAX_TEXT2X`]). Requests that do not fit are rejected with
//! [`Error::OutOfRange`] before anything is sent.
//!
//! # Crate Features
//!
//! - **`shared`** *(default)* — [`SharedDisplay`], a display behind an
//!   [`embassy_sync`] blocking mutex.
//! - **`defmt`** — structured logging via [`defmt`] and `defmt::Format` for
//!   errors and configuration.

#![no_std]

pub mod addressing;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod framer;
#[cfg(feature = "shared")]
pub mod shared;
pub mod transport;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use addressing::{Region, MAX_TEXT, MAX_TEXT2X};
pub use config::DisplayConfig;
pub use display::Ssd1306;
pub use error::Error;
pub use framer::Framer;
#[cfg(feature = "shared")]
pub use shared::SharedDisplay;
pub use transport::{BusError, I2cTransport, Transport, SSD1306_ADDR1, SSD1306_ADDR2};
