//! Unbuffered SSD1306 driver.
//!
//! [`Ssd1306`] renders straight into the controller's display RAM: every
//! call positions the write cursor and streams its bytes over the bus. There
//! is no frame buffer on the host side.

use core::iter;

use crate::addressing::{
    checked_region, in_bounds, position_commands, GLYPH2X_WIDTH, GLYPH_WIDTH, MAX_TEXT,
    MAX_TEXT2X, NUM_COLUMNS, NUM_PAGES,
};
use crate::command::{DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY, SET_CONTRAST};
use crate::config::DisplayConfig;
use crate::error::Error;
use crate::font::{glyph_6x8, glyph_8x16, has_glyph};
use crate::framer::Framer;
use crate::transport::Transport;

/// Driver for an SSD1306 128×64 OLED display.
///
/// # Lifecycle
///
/// 1. [`Ssd1306::new()`] — constructs the driver without any bus traffic.
/// 2. [`Ssd1306::initialize()`] — programs power, timing and addressing
///    registers and switches the display on.
/// 3. Draw with [`text`](Self::text), [`fill_area_with_byte`](Self::fill_area_with_byte),
///    [`draw_image`](Self::draw_image) and friends. Each call is one
///    complete, blocking bus exchange.
///
/// Calls that touch the bus before a successful `initialize()` fail with
/// [`Error::NotInitialized`].
///
/// # Coordinates
///
/// Fill and image calls use controller units: a row is a page (8 pixel
/// rows), a column is one pixel column. Text calls use character cells; see
/// [`text`](Self::text) and [`text2x`](Self::text2x).
///
/// # Concurrency
///
/// The driver does no locking. Share it between execution contexts through
/// an external mutex, e.g. [`SharedDisplay`](crate::SharedDisplay).
///
/// # Example
///
/// ```no_run
/// use ssd1306_lite_rs::{I2cTransport, Ssd1306, SSD1306_ADDR1};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = Ssd1306::new(I2cTransport::new(i2c), SSD1306_ADDR1);
/// oled.initialize().unwrap();
/// oled.clear().unwrap();
/// oled.text(0, 0, "Hello").unwrap();
/// oled.text2x(2, 0, "World").unwrap();
/// # }
/// ```
pub struct Ssd1306<T> {
    framer: Framer<T>,
    config: DisplayConfig,
    /// Complement every content byte before sending.
    invert_data: bool,
    /// Set to `true` after a successful `initialize()` call.
    initialized: bool,
}

impl<T> Ssd1306<T>
where
    T: Transport,
{
    /// Construct an uninitialised driver with [`DisplayConfig::default()`].
    ///
    /// No bus traffic is generated. You **must** call
    /// [`initialize()`](Self::initialize) before drawing.
    ///
    /// # Arguments
    /// * `transport` — bus transport (takes ownership for exclusive access).
    /// * `address` — on-wire write address, [`SSD1306_ADDR1`](crate::SSD1306_ADDR1)
    ///   (`0x78`) or [`SSD1306_ADDR2`](crate::SSD1306_ADDR2) (`0x7A`).
    pub fn new(transport: T, address: u8) -> Self {
        Self::with_config(transport, address, DisplayConfig::default())
    }

    /// Construct an uninitialised driver with a custom configuration.
    pub fn with_config(transport: T, address: u8, config: DisplayConfig) -> Self {
        Self {
            framer: Framer::new(transport, address),
            config,
            invert_data: false,
            initialized: false,
        }
    }

    /// Program the controller and switch the display on.
    ///
    /// Sends the [`DisplayConfig::init_sequence()`] as one command frame.
    /// May be called again to re-program a controller that lost power.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] if the bus rejects the sequence; the driver is
    /// left uninitialised.
    pub fn initialize(&mut self) -> Result<(), Error<T::Error>> {
        self.initialized = false;
        let sequence = self.config.init_sequence();
        self.framer
            .command_frame(|frame| frame.send_all(&sequence))
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::error!("SSD1306 init failed");
                Error::Transport(e)
            })?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialised at {=u8:#x}", self.framer.address());

        Ok(())
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// Check whether [`initialize()`](Self::initialize) has succeeded.
    ///
    /// No bus traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether content bytes are currently complemented, see
    /// [`invert_data()`](Self::invert_data).
    pub fn is_data_inverted(&self) -> bool {
        self.invert_data
    }

    /// On-wire write address of the controller.
    pub fn address(&self) -> u8 {
        self.framer.address()
    }

    /// Configuration applied by [`initialize()`](Self::initialize).
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Tear down the driver and give back the transport.
    pub fn release(self) -> T {
        self.framer.release()
    }

    // -----------------------------------------------------------------------
    // Addressing
    // -----------------------------------------------------------------------

    /// Move the controller's write cursor to page `row`, pixel `column`.
    ///
    /// Drawing calls position the cursor themselves; this is only needed
    /// when streaming data through other means.
    ///
    /// # Errors
    /// * [`Error::OutOfRange`] if `row > 7` or `column > 127`
    /// * [`Error::NotInitialized`], [`Error::Transport`]
    pub fn set_position(&mut self, row: u8, column: u8) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        if !in_bounds(row, column) {
            return Err(rejected(Error::OutOfRange {
                row,
                column,
                rows: 1,
                columns: 1,
            }));
        }
        self.position(row, column)?;
        Ok(())
    }

    /// Complement every content byte written from now on.
    ///
    /// This is a software setting: it changes what is stored in display
    /// RAM, for text, fills and images alike, and leaves already drawn
    /// content alone. For flipping the whole panel at once use
    /// [`invert_screen()`](Self::invert_screen). No bus traffic.
    pub fn invert_data(&mut self, inverted: bool) {
        self.invert_data = inverted;
    }

    // -----------------------------------------------------------------------
    // Text
    // -----------------------------------------------------------------------

    /// Draw `text` with the 6×8 font.
    ///
    /// `row` (0–7) is a page; `column` (0–20) is a character cell of 6
    /// pixel columns. Text is clipped at pixel column 127, it never wraps.
    ///
    /// # Errors
    /// * [`Error::OutOfRange`] if `row > 7` or `column >= MAX_TEXT`
    /// * [`Error::UnsupportedCharacter`] for characters outside `' '..='~'`
    /// * [`Error::NotInitialized`], [`Error::Transport`]
    pub fn text(&mut self, row: u8, column: u8, text: &str) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        if row >= NUM_PAGES || column >= MAX_TEXT {
            return Err(text_out_of_range(row, column, text));
        }
        check_glyphs(text)?;

        let start = column * GLYPH_WIDTH;
        let bytes = text
            .chars()
            .filter_map(glyph_6x8)
            .flat_map(|glyph| glyph.iter().copied());
        self.write_row(row, start, clip_to_row(start, bytes))
    }

    /// Draw `text` with the 8×16 font.
    ///
    /// Each glyph spans two pages: upper halves go to page `row`, lower
    /// halves to page `row + 1`, so any `row` from 0 to 6 works. `column`
    /// (0–15) is a character cell of 8 pixel columns. Clipped like
    /// [`text()`](Self::text).
    ///
    /// # Errors
    /// * [`Error::OutOfRange`] if `row > 6` or `column >= MAX_TEXT2X`
    /// * [`Error::UnsupportedCharacter`] for characters outside `' '..='~'`
    /// * [`Error::NotInitialized`], [`Error::Transport`]
    pub fn text2x(&mut self, row: u8, column: u8, text: &str) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        if row >= NUM_PAGES - 1 || column >= MAX_TEXT2X {
            return Err(text_out_of_range(row, column, text));
        }
        check_glyphs(text)?;

        let start = column * GLYPH2X_WIDTH;
        let half = GLYPH2X_WIDTH as usize;
        let upper = text
            .chars()
            .filter_map(glyph_8x16)
            .flat_map(move |glyph| glyph[..half].iter().copied());
        self.write_row(row, start, clip_to_row(start, upper))?;

        let lower = text
            .chars()
            .filter_map(glyph_8x16)
            .flat_map(move |glyph| glyph[half..].iter().copied());
        self.write_row(row + 1, start, clip_to_row(start, lower))
    }

    // -----------------------------------------------------------------------
    // Fills and images
    // -----------------------------------------------------------------------

    /// Set every cell of the display to `byte`.
    pub fn fill_screen(&mut self, byte: u8) -> Result<(), Error<T::Error>> {
        self.fill_area_with_byte(0, 0, NUM_PAGES, NUM_COLUMNS, byte)
    }

    /// Blank the display, equivalent to `fill_screen(0x00)`.
    pub fn clear(&mut self) -> Result<(), Error<T::Error>> {
        self.fill_screen(0x00)
    }

    /// Fill `rows` pages × `columns` pixel columns with `byte`.
    ///
    /// # Errors
    /// * [`Error::OutOfRange`] if `start_row + rows > 8` or
    ///   `start_column + columns > 128`; nothing is sent
    /// * [`Error::NotInitialized`], [`Error::Transport`]
    pub fn fill_area_with_byte(
        &mut self,
        start_row: u8,
        start_column: u8,
        rows: u8,
        columns: u8,
        byte: u8,
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        let region = checked_region(start_row, start_column, rows, columns)
            .map_err(rejected)?;

        for page in region.pages() {
            self.write_row(
                page,
                start_column,
                iter::repeat(byte).take(columns as usize),
            )?;
        }
        Ok(())
    }

    /// Fill a region with a repeating byte pattern.
    ///
    /// Column `i` of every page gets `pattern[i % pattern.len()]`; the
    /// pattern restarts on each page so it lines up vertically.
    ///
    /// # Errors
    /// * [`Error::OutOfRange`] as for [`fill_area_with_byte()`](Self::fill_area_with_byte)
    /// * [`Error::EmptyPattern`] if `pattern` is empty
    /// * [`Error::NotInitialized`], [`Error::Transport`]
    ///
    /// # Example
    /// ```no_run
    /// # fn example<T: ssd1306_lite_rs::Transport>(oled: &mut ssd1306_lite_rs::Ssd1306<T>) {
    /// // Checkerboard of 4×4 squares over the bottom half.
    /// oled.fill_area_with_bytes(4, 0, 4, 128, &[0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0]).ok();
    /// # }
    /// ```
    pub fn fill_area_with_bytes(
        &mut self,
        start_row: u8,
        start_column: u8,
        rows: u8,
        columns: u8,
        pattern: &[u8],
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        let region = checked_region(start_row, start_column, rows, columns)
            .map_err(rejected)?;
        if pattern.is_empty() {
            return Err(rejected(Error::EmptyPattern));
        }

        for page in region.pages() {
            let bytes = pattern.iter().copied().cycle().take(columns as usize);
            self.write_row(page, start_column, bytes)?;
        }
        Ok(())
    }

    /// Copy a page-format image into the display.
    ///
    /// `image` holds `image_rows` pages of `image_columns` bytes each,
    /// row-major; every byte is one column of 8 pixels, LSB at the top.
    /// Bytes are sent verbatim (subject only to
    /// [`invert_data()`](Self::invert_data)).
    ///
    /// # Errors
    /// * [`Error::OutOfRange`] if the image does not fit at the start cell
    /// * [`Error::ImageSize`] if `image.len() != image_rows * image_columns`
    /// * [`Error::NotInitialized`], [`Error::Transport`]
    pub fn draw_image(
        &mut self,
        start_row: u8,
        start_column: u8,
        image_rows: u8,
        image_columns: u8,
        image: &[u8],
    ) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        let region = checked_region(start_row, start_column, image_rows, image_columns)
            .map_err(rejected)?;
        if image.len() != region.len() {
            return Err(rejected(Error::ImageSize {
                expected: region.len(),
                actual: image.len(),
            }));
        }
        if region.is_empty() {
            return Ok(());
        }

        for (page, line) in region.pages().zip(image.chunks_exact(image_columns as usize)) {
            self.write_row(page, start_column, line.iter().copied())?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Display control
    // -----------------------------------------------------------------------

    /// Set the contrast register (0x00–0xFF).
    pub fn set_contrast(&mut self, level: u8) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        self.framer
            .command_frame(|frame| frame.send_all(&[SET_CONTRAST, level]))?;
        Ok(())
    }

    /// Switch the controller's hardware inversion on or off.
    ///
    /// Affects how display RAM is shown, not what it holds, and applies to
    /// everything on screen at once. See [`invert_data()`](Self::invert_data)
    /// for the software variant.
    pub fn invert_screen(&mut self, inverted: bool) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        let command = if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.framer.send_command(command)?;
        Ok(())
    }

    /// Put the controller to sleep (display off) or wake it up.
    ///
    /// Display RAM is retained while asleep.
    pub fn sleep(&mut self, asleep: bool) -> Result<(), Error<T::Error>> {
        self.ensure_initialized()?;
        let command = if asleep { DISPLAY_OFF } else { DISPLAY_ON };
        self.framer.send_command(command)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn ensure_initialized(&self) -> Result<(), Error<T::Error>> {
        if self.initialized {
            Ok(())
        } else {
            Err(rejected(Error::NotInitialized))
        }
    }

    /// Program the cursor; `(page, column)` must already be in bounds.
    fn position(&mut self, page: u8, column: u8) -> Result<(), T::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("position page {} column {}", page, column);

        let commands = position_commands(page, column);
        self.framer.command_frame(|frame| frame.send_all(&commands))
    }

    /// Position at `(page, column)` and stream `bytes` as one data frame,
    /// applying the software inversion.
    fn write_row<I>(&mut self, page: u8, column: u8, bytes: I) -> Result<(), Error<T::Error>>
    where
        I: IntoIterator<Item = u8>,
    {
        let mask = if self.invert_data { 0xFF } else { 0x00 };
        self.position(page, column)?;
        self.framer
            .data_frame(|frame| frame.send_iter(bytes.into_iter().map(|b| b ^ mask)))?;
        Ok(())
    }
}

/// Limit a byte run starting at pixel `start` to the end of the page.
fn clip_to_row<I>(start: u8, bytes: I) -> iter::Take<I>
where
    I: Iterator<Item = u8>,
{
    bytes.take(NUM_COLUMNS.saturating_sub(start) as usize)
}

fn check_glyphs<E>(text: &str) -> Result<(), Error<E>> {
    match text.chars().find(|&c| !has_glyph(c)) {
        Some(c) => Err(rejected(Error::UnsupportedCharacter(c))),
        None => Ok(()),
    }
}

fn text_out_of_range<E>(row: u8, column: u8, text: &str) -> Error<E> {
    let cells = text.chars().count().min(u8::MAX as usize) as u8;
    rejected(Error::OutOfRange {
        row,
        column,
        rows: 1,
        columns: cells,
    })
}

/// Pass a precondition error through, logging it.
fn rejected<E>(error: Error<E>) -> Error<E> {
    #[cfg(feature = "defmt")]
    match &error {
        Error::OutOfRange {
            row,
            column,
            rows,
            columns,
        } => defmt::warn!(
            "SSD1306 request out of range: {}x{} at ({}, {})",
            rows,
            columns,
            row,
            column
        ),
        Error::NotInitialized => defmt::warn!("SSD1306 used before initialize()"),
        _ => defmt::warn!("SSD1306 request rejected"),
    }
    error
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::vec;
    use std::vec::Vec;

    use super::*;
    use crate::command::{ADDRESSING_PAGE, SET_MEMORY_MODE};
    use crate::config::INIT_SEQUENCE_LEN;
    use crate::framer::{CONTROL_COMMAND, CONTROL_DATA};
    use crate::mock::{MockBusError, RecordingTransport};
    use crate::transport::{SSD1306_ADDR1, SSD1306_ADDR2};

    /// An initialised driver whose recording starts empty.
    fn ready() -> Ssd1306<RecordingTransport> {
        let mut oled = Ssd1306::new(RecordingTransport::new(), SSD1306_ADDR1);
        oled.initialize().unwrap();
        oled.framer.transport_mut().clear();
        oled
    }

    fn transport(oled: &mut Ssd1306<RecordingTransport>) -> &RecordingTransport {
        oled.framer.transport_mut()
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    #[test]
    fn construction_sends_nothing() {
        let oled = Ssd1306::new(RecordingTransport::new(), SSD1306_ADDR2);
        assert!(!oled.is_initialized());
        assert_eq!(oled.address(), SSD1306_ADDR2);
        assert!(oled.release().events().is_empty());
    }

    #[test]
    fn initialize_sends_config_sequence_as_one_frame() {
        let mut oled = Ssd1306::new(RecordingTransport::new(), SSD1306_ADDR1);
        oled.initialize().unwrap();
        assert!(oled.is_initialized());

        let t = oled.release();
        let frames = t.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].address, SSD1306_ADDR1);
        assert_eq!(frames[0].control, Some(CONTROL_COMMAND));
        assert_eq!(frames[0].payload.len(), INIT_SEQUENCE_LEN);
        assert_eq!(frames[0].payload, DisplayConfig::default().init_sequence());
        let mode = frames[0]
            .payload
            .iter()
            .position(|&b| b == SET_MEMORY_MODE)
            .unwrap();
        assert_eq!(frames[0].payload[mode + 1], ADDRESSING_PAGE);
    }

    #[test]
    fn custom_config_is_used() {
        let config = DisplayConfig {
            contrast: 0x10,
            ..DisplayConfig::default()
        };
        let mut oled = Ssd1306::with_config(RecordingTransport::new(), SSD1306_ADDR1, config);
        oled.initialize().unwrap();
        assert_eq!(oled.config().contrast, 0x10);
        assert_eq!(oled.release().command_bytes(), config.init_sequence());
    }

    #[test]
    fn drawing_before_initialize_is_rejected_without_traffic() {
        let mut oled = Ssd1306::new(RecordingTransport::new(), SSD1306_ADDR1);
        assert_eq!(oled.clear(), Err(Error::NotInitialized));
        assert_eq!(oled.text(0, 0, "A"), Err(Error::NotInitialized));
        assert_eq!(oled.set_position(0, 0), Err(Error::NotInitialized));
        assert_eq!(oled.set_contrast(1), Err(Error::NotInitialized));
        assert_eq!(oled.invert_screen(true), Err(Error::NotInitialized));
        assert_eq!(oled.sleep(true), Err(Error::NotInitialized));
        assert!(oled.release().events().is_empty());
    }

    #[test]
    fn failed_initialize_leaves_driver_uninitialised() {
        let mut oled = Ssd1306::new(RecordingTransport::failing_after(3), SSD1306_ADDR1);
        assert_eq!(oled.initialize(), Err(Error::Transport(MockBusError)));
        assert!(!oled.is_initialized());
        assert!(oled.release().is_balanced());
    }

    // ── Addressing ───────────────────────────────────────────────────────

    #[test]
    fn position_then_one_byte_touches_exactly_one_cell() {
        for row in 0..NUM_PAGES {
            for column in 0..NUM_COLUMNS {
                let mut oled = ready();
                oled.set_position(row, column).unwrap();
                oled.framer
                    .data_frame(|frame| frame.send(0x5A))
                    .unwrap();

                let screen = transport(&mut oled).screen();
                assert_eq!(screen.written_count(), 1);
                assert!(screen.written[row as usize][column as usize]);
                assert_eq!(screen.cells[row as usize][column as usize], 0x5A);
            }
        }
    }

    #[test]
    fn set_position_is_one_frame_of_three_commands() {
        let mut oled = ready();
        oled.set_position(5, 0x42).unwrap();
        let frames = transport(&mut oled).frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, [0xB5, 0x02, 0x14]);
    }

    #[test]
    fn set_position_out_of_range() {
        let mut oled = ready();
        assert!(matches!(
            oled.set_position(8, 0),
            Err(Error::OutOfRange { row: 8, .. })
        ));
        assert!(matches!(
            oled.set_position(0, 128),
            Err(Error::OutOfRange { column: 128, .. })
        ));
        assert!(transport(&mut oled).events().is_empty());
    }

    // ── Text ─────────────────────────────────────────────────────────────

    #[test]
    fn text_a_emits_its_six_glyph_bytes() {
        let mut oled = ready();
        oled.text(0, 0, "A").unwrap();

        let t = transport(&mut oled);
        assert_eq!(t.data_bytes(), glyph_6x8('A').unwrap());
        let screen = t.screen();
        assert_eq!(screen.written_count(), 6);
        assert_eq!(&screen.cells[0][..6], glyph_6x8('A').unwrap());
    }

    #[test]
    fn text_honours_data_inversion() {
        let mut oled = ready();
        oled.invert_data(true);
        assert!(oled.is_data_inverted());
        oled.text(0, 0, "A").unwrap();

        let expected: Vec<u8> = glyph_6x8('A').unwrap().iter().map(|b| !b).collect();
        assert_eq!(transport(&mut oled).data_bytes(), expected);
    }

    #[test]
    fn text_columns_are_character_cells() {
        let mut oled = ready();
        oled.text(3, 2, "Hi").unwrap();

        let screen = transport(&mut oled).screen();
        assert_eq!(screen.written_count(), 12);
        assert!(screen.written[3][12..24].iter().all(|&w| w));
        assert_eq!(&screen.cells[3][12..18], glyph_6x8('H').unwrap());
        assert_eq!(&screen.cells[3][18..24], glyph_6x8('i').unwrap());
    }

    #[test]
    fn text_clips_at_last_column() {
        let mut oled = ready();
        // Cell 20 starts at pixel 120; only 8 columns remain.
        oled.text(1, 20, "ABC").unwrap();

        let t = transport(&mut oled);
        assert_eq!(t.data_bytes().len(), 8);
        let screen = t.screen();
        assert_eq!(screen.written_count(), 8);
        assert!(screen.written[1][120..128].iter().all(|&w| w));
        // Nothing wrapped back to the start of the page.
        assert!(!screen.written[1][0]);
    }

    #[test]
    fn text_rejects_bad_start_and_characters() {
        let mut oled = ready();
        assert!(matches!(
            oled.text(8, 0, "x"),
            Err(Error::OutOfRange { row: 8, .. })
        ));
        assert!(matches!(
            oled.text(0, MAX_TEXT, "x"),
            Err(Error::OutOfRange { column: 21, .. })
        ));
        assert_eq!(
            oled.text(0, 0, "ok\u{e9}"),
            Err(Error::UnsupportedCharacter('\u{e9}'))
        );
        assert_eq!(
            oled.text(0, 0, "tab\there"),
            Err(Error::UnsupportedCharacter('\t'))
        );
        assert!(transport(&mut oled).events().is_empty());
    }

    #[test]
    fn empty_text_only_positions() {
        let mut oled = ready();
        oled.text(0, 0, "").unwrap();
        let t = transport(&mut oled);
        assert!(t.data_bytes().is_empty());
        assert_eq!(t.screen().written_count(), 0);
        assert!(t.is_balanced());
    }

    #[test]
    fn text2x_writes_two_pages() {
        let mut oled = ready();
        oled.text2x(2, 1, "A").unwrap();

        let glyph = glyph_8x16('A').unwrap();
        let screen = transport(&mut oled).screen();
        assert_eq!(screen.written_count(), 16);
        assert_eq!(&screen.cells[2][8..16], &glyph[..8]);
        assert_eq!(&screen.cells[3][8..16], &glyph[8..]);
    }

    #[test]
    fn text2x_accepts_odd_rows_but_not_the_last_page() {
        let mut oled = ready();
        oled.text2x(5, 0, "Z").unwrap();
        let screen = transport(&mut oled).screen();
        assert!(screen.written[5][0] && screen.written[6][0]);

        assert!(matches!(
            oled.text2x(7, 0, "Z"),
            Err(Error::OutOfRange { row: 7, .. })
        ));
        assert!(matches!(
            oled.text2x(0, MAX_TEXT2X, "Z"),
            Err(Error::OutOfRange { column: 16, .. })
        ));
    }

    #[test]
    fn text2x_full_line_fits_and_longer_clips() {
        let mut oled = ready();
        oled.text2x(0, 0, "0123456789ABCDEFGH").unwrap();
        let t = transport(&mut oled);
        assert_eq!(t.data_bytes().len(), 2 * 128);
        assert_eq!(t.screen().written_count(), 2 * 128);
    }

    #[test]
    fn text2x_honours_data_inversion() {
        let mut oled = ready();
        oled.invert_data(true);
        oled.text2x(0, 0, " ").unwrap();
        assert_eq!(transport(&mut oled).data_bytes(), vec![0xFF; 16]);
    }

    // ── Fills ────────────────────────────────────────────────────────────

    #[test]
    fn fill_screen_writes_every_cell() {
        let mut oled = ready();
        oled.fill_screen(0xA5).unwrap();

        let t = transport(&mut oled);
        let data = t.data_bytes();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|&b| b == 0xA5));
        let screen = t.screen();
        assert_eq!(screen.written_count(), 1024);
        assert_eq!(t.data_frames().len(), 8);
    }

    #[test]
    fn clear_is_fill_with_zero() {
        let mut oled = ready();
        oled.clear().unwrap();
        let data = transport(&mut oled).data_bytes();
        assert_eq!(data.len(), 1024);
        assert!(data.iter().all(|&b| b == 0x00));
    }

    #[test]
    fn clear_with_inversion_lights_everything() {
        let mut oled = ready();
        oled.invert_data(true);
        oled.clear().unwrap();
        assert!(transport(&mut oled).data_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn fill_area_touches_only_its_region() {
        let mut oled = ready();
        oled.fill_area_with_byte(2, 10, 3, 5, 0xFF).unwrap();

        let screen = transport(&mut oled).screen();
        assert_eq!(screen.written_count(), 15);
        for page in 0..8usize {
            for column in 0..128usize {
                let inside = (2..5).contains(&page) && (10..15).contains(&column);
                assert_eq!(screen.written[page][column], inside);
            }
        }
    }

    #[test]
    fn out_of_range_fill_emits_nothing() {
        let mut oled = ready();
        assert_eq!(
            oled.fill_area_with_byte(7, 120, 1, 20, 0xFF),
            Err(Error::OutOfRange {
                row: 7,
                column: 120,
                rows: 1,
                columns: 20
            })
        );
        assert_eq!(
            oled.fill_area_with_byte(6, 0, 3, 1, 0xFF),
            Err(Error::OutOfRange {
                row: 6,
                column: 0,
                rows: 3,
                columns: 1
            })
        );
        assert!(transport(&mut oled).events().is_empty());
    }

    #[test]
    fn empty_fill_is_a_no_op() {
        let mut oled = ready();
        oled.fill_area_with_byte(0, 0, 0, 10, 0xFF).unwrap();
        oled.fill_area_with_byte(0, 0, 4, 0, 0xFF).unwrap();
        let t = transport(&mut oled);
        assert!(t.data_bytes().is_empty());
        assert_eq!(t.screen().written_count(), 0);
    }

    #[test]
    fn pattern_fill_cycles() {
        let mut oled = ready();
        oled.fill_area_with_bytes(0, 0, 1, 5, &[0x0F, 0xF0]).unwrap();
        assert_eq!(
            transport(&mut oled).data_bytes(),
            [0x0F, 0xF0, 0x0F, 0xF0, 0x0F]
        );
    }

    #[test]
    fn pattern_restarts_on_every_page() {
        let mut oled = ready();
        oled.fill_area_with_bytes(1, 4, 2, 3, &[1, 2]).unwrap();
        let screen = transport(&mut oled).screen();
        assert_eq!(&screen.cells[1][4..7], &[1, 2, 1]);
        assert_eq!(&screen.cells[2][4..7], &[1, 2, 1]);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let mut oled = ready();
        assert_eq!(
            oled.fill_area_with_bytes(0, 0, 1, 1, &[]),
            Err(Error::EmptyPattern)
        );
        assert!(transport(&mut oled).events().is_empty());
    }

    // ── Images ───────────────────────────────────────────────────────────

    #[test]
    fn image_is_copied_row_major() {
        let mut oled = ready();
        let image = [1, 2, 3, 4, 5, 6];
        oled.draw_image(6, 125, 2, 3, &image).unwrap();

        let screen = transport(&mut oled).screen();
        assert_eq!(screen.written_count(), 6);
        assert_eq!(&screen.cells[6][125..128], &[1, 2, 3]);
        assert_eq!(&screen.cells[7][125..128], &[4, 5, 6]);
    }

    #[test]
    fn image_honours_data_inversion() {
        let mut oled = ready();
        oled.invert_data(true);
        oled.draw_image(0, 0, 1, 2, &[0x00, 0x0F]).unwrap();
        assert_eq!(transport(&mut oled).data_bytes(), [0xFF, 0xF0]);
    }

    #[test]
    fn image_size_must_match_region() {
        let mut oled = ready();
        assert_eq!(
            oled.draw_image(0, 0, 2, 2, &[0; 3]),
            Err(Error::ImageSize {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            oled.draw_image(7, 127, 1, 2, &[0; 2]),
            Err(Error::OutOfRange { .. })
        ));
        assert!(transport(&mut oled).events().is_empty());
    }

    // ── Display control ──────────────────────────────────────────────────

    #[test]
    fn invert_screen_is_one_command_frame() {
        let mut oled = ready();
        oled.invert_screen(true).unwrap();

        let t = transport(&mut oled);
        let frames = t.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].control, Some(CONTROL_COMMAND));
        assert_eq!(frames[0].payload, [INVERT_DISPLAY]);
        assert!(t.data_bytes().is_empty());
    }

    #[test]
    fn invert_screen_off_restores_normal() {
        let mut oled = ready();
        oled.invert_screen(false).unwrap();
        assert_eq!(transport(&mut oled).command_bytes(), [NORMAL_DISPLAY]);
    }

    #[test]
    fn invert_data_sends_nothing() {
        let mut oled = ready();
        oled.invert_data(true);
        oled.invert_data(false);
        assert!(transport(&mut oled).events().is_empty());
    }

    #[test]
    fn contrast_is_command_with_parameter() {
        let mut oled = ready();
        oled.set_contrast(0xC0).unwrap();
        let frames = transport(&mut oled).frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, [SET_CONTRAST, 0xC0]);
    }

    #[test]
    fn sleep_toggles_display_power() {
        let mut oled = ready();
        oled.sleep(true).unwrap();
        oled.sleep(false).unwrap();
        assert_eq!(
            transport(&mut oled).command_bytes(),
            [DISPLAY_OFF, DISPLAY_ON]
        );
    }

    // ── Transport behaviour ──────────────────────────────────────────────

    #[test]
    fn small_transactions_split_page_writes() {
        let mut oled = Ssd1306::new(
            RecordingTransport::with_max_transaction_len(17),
            SSD1306_ADDR1,
        );
        oled.initialize().unwrap();
        oled.framer.transport_mut().clear();
        oled.fill_screen(0x3C).unwrap();

        let t = transport(&mut oled);
        for frame in t.frames() {
            assert!(frame.payload.len() <= 16);
            assert!(matches!(frame.control, Some(CONTROL_COMMAND | CONTROL_DATA)));
        }
        assert_eq!(t.data_bytes().len(), 1024);
        assert_eq!(t.screen().written_count(), 1024);
    }

    #[test]
    fn transport_error_closes_frame_and_is_reported() {
        let mut oled = Ssd1306::new(RecordingTransport::failing_after(40), SSD1306_ADDR1);
        oled.initialize().unwrap();
        let result = oled.fill_screen(0xFF);
        assert_eq!(result, Err(Error::Transport(MockBusError)));
        assert!(oled.release().is_balanced());
    }
}
