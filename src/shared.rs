//! Mutex-guarded display handle (feature `shared`).
//!
//! [`Ssd1306`] itself does no locking. When several execution contexts
//! (tasks, interrupt handlers) draw on the same panel, place the driver in a
//! [`SharedDisplay`] and take turns through [`SharedDisplay::lock`]. Each
//! closure runs with exclusive access, so a multi-call sequence such as
//! "clear a line, then draw text" is never interleaved with another
//! context's writes.
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use ssd1306_lite_rs::{SharedDisplay, Ssd1306, Transport};
//!
//! fn status_line<T: Transport>(oled: &SharedDisplay<CriticalSectionRawMutex, T>) {
//!     oled.lock(|d| {
//!         d.fill_area_with_byte(7, 0, 1, 128, 0x00)?;
//!         d.text(7, 0, "ready")
//!     })
//!     .ok();
//! }
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::display::Ssd1306;

/// An [`Ssd1306`] behind an `embassy-sync` blocking mutex.
///
/// `M` selects the locking strategy, e.g. `CriticalSectionRawMutex` to
/// share with interrupt handlers or `NoopRawMutex` within one executor.
pub struct SharedDisplay<M: RawMutex, T> {
    inner: Mutex<M, RefCell<Ssd1306<T>>>,
}

impl<M: RawMutex, T> SharedDisplay<M, T> {
    /// Wrap `display`, using `raw` as the underlying lock.
    pub const fn new(raw: M, display: Ssd1306<T>) -> Self {
        Self {
            inner: Mutex::const_new(raw, RefCell::new(display)),
        }
    }

    /// Run `f` with exclusive access to the display.
    ///
    /// # Panics
    ///
    /// If called again from inside `f` on the same handle.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Ssd1306<T>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Take the display back out.
    pub fn into_inner(self) -> Ssd1306<T> {
        self.inner.into_inner().into_inner()
    }
}
