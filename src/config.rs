//! Controller configuration applied by
//! [`Ssd1306::initialize()`](crate::Ssd1306::initialize).

use crate::command::*;

/// Number of command bytes in the initialisation sequence.
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Power, timing and orientation registers programmed at initialisation.
///
/// [`DisplayConfig::default()`] suits the common 128×64 I2C module that
/// generates its panel voltage with the internal charge pump. Modules with
/// external VCC, flipped glass or a different COM wiring can adjust the
/// fields before constructing the driver.
///
/// Addressing is not configurable: the driver always selects page
/// addressing mode because its positioning commands only apply there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Initial contrast level. Default: `0x7F`.
    pub contrast: u8,
    /// Clock divide ratio and oscillator frequency. Default: `0x80`.
    pub clock_div: u8,
    /// Multiplex ratio (panel rows - 1). Default: `0x3F` (64 rows).
    pub mux_ratio: u8,
    /// Vertical display offset. Default: 0.
    pub display_offset: u8,
    /// RAM line shown at the top row (0-63). Default: 0.
    pub start_line: u8,
    /// Generate panel voltage with the internal charge pump. Default: `true`.
    pub charge_pump: bool,
    /// Map column 127 to SEG0 (horizontal flip). Default: `true`.
    pub segment_remap: bool,
    /// Scan COM outputs in reverse (vertical flip). Default: `true`.
    pub com_scan_reversed: bool,
    /// COM pins hardware configuration. Default: `0x12`.
    pub com_pins: u8,
    /// Pre-charge period. Default: `0xF1`.
    pub precharge: u8,
    /// VCOMH deselect level. Default: `0x40`.
    pub vcom_detect: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            contrast: 0x7F,
            clock_div: 0x80,
            mux_ratio: 0x3F,
            display_offset: 0x00,
            start_line: 0,
            charge_pump: true,
            segment_remap: true,
            com_scan_reversed: true,
            com_pins: 0x12,
            precharge: 0xF1,
            vcom_detect: 0x40,
        }
    }
}

impl DisplayConfig {
    /// Command bytes sent by `initialize()`, in order.
    ///
    /// The display is switched off while registers are programmed and
    /// switched on, non-inverted, at the end.
    pub fn init_sequence(&self) -> [u8; INIT_SEQUENCE_LEN] {
        [
            DISPLAY_OFF,
            SET_CLOCK_DIV,
            self.clock_div,
            SET_MUX_RATIO,
            self.mux_ratio,
            SET_DISPLAY_OFFSET,
            self.display_offset,
            SET_START_LINE | (self.start_line & 0x3F),
            SET_CHARGE_PUMP,
            if self.charge_pump {
                CHARGE_PUMP_ON
            } else {
                CHARGE_PUMP_OFF
            },
            SET_MEMORY_MODE,
            ADDRESSING_PAGE,
            if self.segment_remap {
                SEGMENT_REMAP_ON
            } else {
                SEGMENT_REMAP_OFF
            },
            if self.com_scan_reversed {
                COM_SCAN_DEC
            } else {
                COM_SCAN_INC
            },
            SET_COM_PINS,
            self.com_pins,
            SET_CONTRAST,
            self.contrast,
            SET_PRECHARGE,
            self.precharge,
            SET_VCOM_DETECT,
            self.vcom_detect,
            DISPLAY_ALL_ON_RESUME,
            NORMAL_DISPLAY,
            DISPLAY_ON,
        ]
    }
}
