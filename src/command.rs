//! SSD1306 command bytes.
//!
//! Commands marked "+1" take one parameter byte, sent in the same command
//! frame right after the command.

// ---------------------------------------------------------------------------
// Fundamental
// ---------------------------------------------------------------------------

/// Contrast control (+1: level 0x00-0xFF).
pub const SET_CONTRAST: u8 = 0x81;
/// Output follows display RAM.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
/// Normal display (RAM bit 1 = pixel on).
pub const NORMAL_DISPLAY: u8 = 0xA6;
/// Inverted display (RAM bit 0 = pixel on).
pub const INVERT_DISPLAY: u8 = 0xA7;
/// Display off, controller in sleep mode.
pub const DISPLAY_OFF: u8 = 0xAE;
/// Display on.
pub const DISPLAY_ON: u8 = 0xAF;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Lower column start nibble, OR'd with `column & 0x0F` (page mode).
pub const SET_LOW_COLUMN: u8 = 0x00;
/// Upper column start nibble, OR'd with `column >> 4` (page mode).
pub const SET_HIGH_COLUMN: u8 = 0x10;
/// Memory addressing mode (+1: one of the `ADDRESSING_*` values).
pub const SET_MEMORY_MODE: u8 = 0x20;
/// Page start address, OR'd with the page index 0-7 (page mode).
pub const SET_PAGE_ADDR: u8 = 0xB0;

/// Horizontal addressing mode.
pub const ADDRESSING_HORIZONTAL: u8 = 0x00;
/// Vertical addressing mode.
pub const ADDRESSING_VERTICAL: u8 = 0x01;
/// Page addressing mode; the only mode the page/column commands apply to.
pub const ADDRESSING_PAGE: u8 = 0x02;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Display start line, OR'd with the line 0-63.
pub const SET_START_LINE: u8 = 0x40;
/// Segment remap: column 0 maps to SEG0.
pub const SEGMENT_REMAP_OFF: u8 = 0xA0;
/// Segment remap: column 127 maps to SEG0 (horizontal flip).
pub const SEGMENT_REMAP_ON: u8 = 0xA1;
/// Multiplex ratio (+1: rows - 1).
pub const SET_MUX_RATIO: u8 = 0xA8;
/// COM output scan from COM0 upwards.
pub const COM_SCAN_INC: u8 = 0xC0;
/// COM output scan from COM[N-1] downwards (vertical flip).
pub const COM_SCAN_DEC: u8 = 0xC8;
/// Display offset (+1: vertical shift 0-63).
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
/// COM pins hardware configuration (+1).
pub const SET_COM_PINS: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving
// ---------------------------------------------------------------------------

/// Display clock divide ratio / oscillator frequency (+1).
pub const SET_CLOCK_DIV: u8 = 0xD5;
/// Pre-charge period (+1).
pub const SET_PRECHARGE: u8 = 0xD9;
/// VCOMH deselect level (+1).
pub const SET_VCOM_DETECT: u8 = 0xDB;
/// Charge pump setting (+1: `CHARGE_PUMP_*`).
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enabled (internal VCC).
pub const CHARGE_PUMP_ON: u8 = 0x14;
/// Charge pump disabled (external VCC).
pub const CHARGE_PUMP_OFF: u8 = 0x10;
