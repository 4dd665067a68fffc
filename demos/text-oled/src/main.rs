//! Text and fill demo
//!
//! Standalone hardware demonstration that exercises [`Ssd1306`] over a
//! blocking I2C bus. Shows a title, a large counter, a level gauge and a
//! pattern strip, and toggles the software and hardware inversion modes so
//! every drawing call is verified on real hardware.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |
//!
//! # Screen Layout
//!
//! | Page(s) | Content                                   |
//! |---------|-------------------------------------------|
//! | 0       | title, 6×8 font                           |
//! | 2–3     | counter, 8×16 font                        |
//! | 5       | gauge: filled bar, `level` columns wide   |
//! | 7       | checker pattern strip                     |

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use ssd1306_lite_rs::{I2cTransport, Ssd1306, SSD1306_ADDR1};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// 8×8 page-format arrow, drawn next to the gauge.
const ARROW: [u8; 8] = [0x18, 0x18, 0x18, 0x18, 0xFF, 0x7E, 0x3C, 0x18];

/// 4×4 checkerboard, repeated across the bottom page.
const CHECKER: [u8; 8] = [0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0];

// ---------------------------------------------------------------------------
// Hardware pin assignments — change here for hardware revisions
// I2C bus is used exclusively by the OLED display in this example
// ---------------------------------------------------------------------------
// I2C_SDA → GP20 (p.PIN_20)
// I2C_SCL → GP21 (p.PIN_21)
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Text OLED example starting");

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        i2c::Config::default(),
    );

    let mut oled = Ssd1306::new(I2cTransport::new(i2c), SSD1306_ADDR1);

    unwrap!(oled.initialize());
    unwrap!(oled.clear());
    unwrap!(oled.text(0, 0, "ssd1306-lite demo"));
    unwrap!(oled.fill_area_with_bytes(7, 0, 1, 128, &CHECKER));
    unwrap!(oled.draw_image(5, 0, 1, 8, &ARROW));
    info!("OLED initialised");

    let mut count: u32 = 0;
    let mut title_inverted = false;
    let mut label: String<16> = String::new();

    loop {
        label.clear();
        write!(label, "{:>8}", count).ok();
        oled.text2x(2, 4, &label).ok();

        // Gauge sweeps columns 10..127; erase the remainder each frame.
        let level = (count % 118) as u8;
        oled.fill_area_with_byte(5, 10, 1, level, 0x7E).ok();
        oled.fill_area_with_byte(5, 10 + level, 1, 118 - level, 0x00).ok();

        // Redraw the title inverted every 128 frames; flip the whole panel
        // every 256.
        if count % 128 == 0 {
            title_inverted = !title_inverted;
            oled.invert_data(title_inverted);
            oled.text(0, 0, "ssd1306-lite demo").ok();
            oled.invert_data(false);
        }
        if count % 256 == 0 {
            oled.invert_screen(count % 512 != 0).ok();
        }

        count = count.wrapping_add(1);
        Timer::after(Duration::from_millis(50)).await; // ~20 Hz
    }
}
