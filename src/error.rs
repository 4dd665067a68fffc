//! Error types for the SSD1306 driver.

use core::fmt;

/// Errors that can occur during display operations.
///
/// Generic over the transport error `E` so callers can still match on the
/// underlying bus failure.
///
/// Every variant except [`Error::Transport`] is detected before the first
/// byte is sent, so a rejected call leaves the display untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Underlying bus transport error.
    ///
    /// The controller's write cursor is indeterminate afterwards. Drawing
    /// calls always reposition, so simply retrying the call is safe.
    Transport(E),

    /// A row/column or region does not fit the 8-page × 128-column grid.
    ///
    /// `row`/`column` are the start coordinates as passed by the caller,
    /// `rows`/`columns` the requested extent (1 for single-cell operations).
    OutOfRange {
        /// Start row (page or text row).
        row: u8,
        /// Start column (pixel or text cell).
        column: u8,
        /// Number of rows requested.
        rows: u8,
        /// Number of columns requested.
        columns: u8,
    },

    /// The string contains a character without a glyph in the font tables.
    UnsupportedCharacter(char),

    /// `fill_area_with_bytes` was called with an empty pattern.
    EmptyPattern,

    /// The image slice length does not match `image_rows * image_columns`.
    ImageSize {
        /// Number of bytes the region needs.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// An operation was attempted before
    /// [`Ssd1306::initialize()`](crate::Ssd1306::initialize) succeeded.
    NotInitialized,
}

// Allow ergonomic `?` propagation from raw transport errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "Transport error: {:?}", e),
            Error::OutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "Region out of range: {}x{} at row {}, column {}",
                rows, columns, row, column
            ),
            Error::UnsupportedCharacter(c) => write!(f, "No glyph for character {:?}", c),
            Error::EmptyPattern => write!(f, "Fill pattern is empty"),
            Error::ImageSize { expected, actual } => write!(
                f,
                "Image size mismatch: expected {} bytes, got {}",
                expected, actual
            ),
            Error::NotInitialized => write!(f, "Display not initialized"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(e) => defmt::write!(f, "Transport error: {}", e),
            Error::OutOfRange {
                row,
                column,
                rows,
                columns,
            } => defmt::write!(
                f,
                "Region out of range: {}x{} at row {}, column {}",
                rows,
                columns,
                row,
                column
            ),
            Error::UnsupportedCharacter(c) => {
                defmt::write!(f, "No glyph for character {}", *c as u32)
            }
            Error::EmptyPattern => defmt::write!(f, "Fill pattern is empty"),
            Error::ImageSize { expected, actual } => {
                defmt::write!(f, "Image size mismatch: expected {}, got {}", expected, actual)
            }
            Error::NotInitialized => defmt::write!(f, "Not initialized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_convert_with_question_mark() {
        fn send() -> Result<(), u8> {
            Err(7)
        }
        fn fails() -> Result<(), Error<u8>> {
            send()?;
            Ok(())
        }
        assert_eq!(fails(), Err(Error::Transport(7)));
    }

    #[test]
    fn display_formats_region() {
        let mut buf: heapless::String<64> = heapless::String::new();
        let err: Error<()> = Error::OutOfRange {
            row: 7,
            column: 120,
            rows: 1,
            columns: 20,
        };
        fmt::write(&mut buf, format_args!("{}", err)).ok();
        assert_eq!(buf.as_str(), "Region out of range: 1x20 at row 7, column 120");
    }
}
