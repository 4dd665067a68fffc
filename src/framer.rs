//! SSD1306 two-wire protocol framing.
//!
//! Every transaction to the controller starts with a control byte that says
//! how to interpret the bytes after it:
//!
//! | Control | Meaning                                   |
//! |---------|-------------------------------------------|
//! | `0x00`  | command stream (`Co = 0`, `D/C# = 0`)     |
//! | `0x40`  | display-data stream (`Co = 0`, `D/C# = 1`)|
//!
//! [`Framer`] owns the [`Transport`] and brackets byte runs in the right
//! control sequence. When the transport limits how long one transaction may
//! be, the framer transparently closes the full transaction and opens the
//! next one with the same control byte. The controller keeps parsing the
//! stream across transactions, so a long command list or pixel run stays
//! valid.
//!
//! Drawing code uses the scoped [`Framer::command_frame`] and
//! [`Framer::data_frame`], which always close the frame before returning.

use crate::transport::Transport;

/// Control byte announcing a command stream.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte announcing a display-data stream.
pub const CONTROL_DATA: u8 = 0x40;

/// Frames command and data transfers to one bus target.
pub struct Framer<T> {
    transport: T,
    /// Target address with the write bit merged in.
    address: u8,
    /// Control byte of the open frame.
    control: u8,
    /// Bytes sent in the current transaction, control byte included.
    transaction_len: usize,
    open: bool,
}

impl<T> Framer<T>
where
    T: Transport,
{
    /// Create a framer for the target at `address` (on-wire write address,
    /// e.g. [`SSD1306_ADDR1`](crate::SSD1306_ADDR1)).
    pub fn new(transport: T, address: u8) -> Self {
        Self {
            transport,
            address,
            control: CONTROL_COMMAND,
            transaction_len: 0,
            open: false,
        }
    }

    /// Target write address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // -----------------------------------------------------------------------
    // Command frames
    // -----------------------------------------------------------------------

    /// Open a command frame.
    pub fn begin_command_frame(&mut self) -> Result<(), T::Error> {
        self.begin_frame(CONTROL_COMMAND)
    }

    /// Send one command (or command parameter) byte in the open frame.
    pub fn send_command_byte(&mut self, byte: u8) -> Result<(), T::Error> {
        self.put(byte)
    }

    /// Close the open command frame.
    pub fn end_command_frame(&mut self) -> Result<(), T::Error> {
        self.end_frame()
    }

    /// Send a single command byte in its own frame.
    pub fn send_command(&mut self, command: u8) -> Result<(), T::Error> {
        self.command_frame(|frame| frame.send(command))
    }

    // -----------------------------------------------------------------------
    // Data frames
    // -----------------------------------------------------------------------

    /// Open a display-data frame.
    pub fn begin_data_frame(&mut self) -> Result<(), T::Error> {
        self.begin_frame(CONTROL_DATA)
    }

    /// Send one pixel-data byte in the open frame.
    pub fn send_data_byte(&mut self, byte: u8) -> Result<(), T::Error> {
        self.put(byte)
    }

    /// Close the open data frame.
    pub fn end_data_frame(&mut self) -> Result<(), T::Error> {
        self.end_frame()
    }

    // -----------------------------------------------------------------------
    // Scoped frames
    // -----------------------------------------------------------------------

    /// Run `body` inside a command frame.
    ///
    /// The frame is closed before returning, also when `body` fails. The
    /// first error encountered is returned.
    pub fn command_frame<R, F>(&mut self, body: F) -> Result<R, T::Error>
    where
        F: FnOnce(&mut CommandFrame<'_, T>) -> Result<R, T::Error>,
    {
        let result = match self.begin_command_frame() {
            Ok(()) => body(&mut CommandFrame { framer: self }),
            Err(e) => Err(e),
        };
        let closed = self.end_frame();
        result.and_then(|value| closed.map(|()| value))
    }

    /// Run `body` inside a data frame.
    ///
    /// Same closing guarantee as [`command_frame`](Self::command_frame).
    pub fn data_frame<R, F>(&mut self, body: F) -> Result<R, T::Error>
    where
        F: FnOnce(&mut DataFrame<'_, T>) -> Result<R, T::Error>,
    {
        let result = match self.begin_data_frame() {
            Ok(()) => body(&mut DataFrame { framer: self }),
            Err(e) => Err(e),
        };
        let closed = self.end_frame();
        result.and_then(|value| closed.map(|()| value))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn begin_frame(&mut self, control: u8) -> Result<(), T::Error> {
        // Frames never nest; close a dangling one first.
        self.end_frame()?;
        self.control = control;
        self.open_transaction()
    }

    fn open_transaction(&mut self) -> Result<(), T::Error> {
        self.transport.begin(self.address)?;
        self.open = true;
        self.transaction_len = 0;
        self.transport.send_byte(self.control)?;
        self.transaction_len = 1;
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), T::Error> {
        if let Some(limit) = self.transaction_limit() {
            if self.transaction_len >= limit {
                self.end_frame()?;
                self.open_transaction()?;
            }
        }
        self.transport.send_byte(byte)?;
        self.transaction_len += 1;
        Ok(())
    }

    /// A limit below 2 leaves no room for payload; let the transport
    /// report the overflow instead of splitting forever.
    fn transaction_limit(&self) -> Option<usize> {
        self.transport
            .max_transaction_len()
            .filter(|&limit| limit >= 2)
    }

    fn end_frame(&mut self) -> Result<(), T::Error> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.transaction_len = 0;
        self.transport.end()
    }
}

/// Handle to an open command frame, see [`Framer::command_frame`].
pub struct CommandFrame<'a, T> {
    framer: &'a mut Framer<T>,
}

impl<T> CommandFrame<'_, T>
where
    T: Transport,
{
    /// Send one command or parameter byte.
    pub fn send(&mut self, byte: u8) -> Result<(), T::Error> {
        self.framer.send_command_byte(byte)
    }

    /// Send a run of command and parameter bytes.
    pub fn send_all(&mut self, bytes: &[u8]) -> Result<(), T::Error> {
        bytes.iter().try_for_each(|&b| self.send(b))
    }
}

/// Handle to an open data frame, see [`Framer::data_frame`].
pub struct DataFrame<'a, T> {
    framer: &'a mut Framer<T>,
}

impl<T> DataFrame<'_, T>
where
    T: Transport,
{
    /// Send one pixel-data byte.
    pub fn send(&mut self, byte: u8) -> Result<(), T::Error> {
        self.framer.send_data_byte(byte)
    }

    /// Send every byte produced by `bytes`.
    pub fn send_iter<I>(&mut self, bytes: I) -> Result<(), T::Error>
    where
        I: IntoIterator<Item = u8>,
    {
        bytes.into_iter().try_for_each(|b| self.send(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, RecordingTransport};
    use crate::transport::SSD1306_ADDR1;

    #[test]
    fn single_command_is_one_framed_transaction() {
        let mut framer = Framer::new(RecordingTransport::new(), SSD1306_ADDR1);
        framer.send_command(0xAF).unwrap();

        let transport = framer.release();
        assert_eq!(
            transport.events(),
            &[
                Event::Begin(SSD1306_ADDR1),
                Event::Byte(CONTROL_COMMAND),
                Event::Byte(0xAF),
                Event::End,
            ]
        );
    }

    #[test]
    fn data_control_byte_is_sent_once_per_frame() {
        let mut framer = Framer::new(RecordingTransport::new(), SSD1306_ADDR1);
        framer
            .data_frame(|frame| frame.send_iter([1u8, 2, 3]))
            .unwrap();

        let transport = framer.release();
        let frames = transport.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].control, Some(CONTROL_DATA));
        assert_eq!(frames[0].payload, [1, 2, 3]);
    }

    #[test]
    fn explicit_begin_end_matches_scoped_frame() {
        let mut framer = Framer::new(RecordingTransport::new(), SSD1306_ADDR1);
        framer.begin_data_frame().unwrap();
        framer.send_data_byte(0xAA).unwrap();
        framer.end_data_frame().unwrap();
        framer.begin_command_frame().unwrap();
        framer.send_command_byte(0x81).unwrap();
        framer.send_command_byte(0x10).unwrap();
        framer.end_command_frame().unwrap();

        let frames = framer.release().frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].control, Some(CONTROL_DATA));
        assert_eq!(frames[0].payload, [0xAA]);
        assert_eq!(frames[1].control, Some(CONTROL_COMMAND));
        assert_eq!(frames[1].payload, [0x81, 0x10]);
    }

    #[test]
    fn long_frames_are_split_at_transaction_limit() {
        let transport = RecordingTransport::with_max_transaction_len(4);
        let mut framer = Framer::new(transport, SSD1306_ADDR1);
        framer
            .data_frame(|frame| frame.send_iter(1u8..=7))
            .unwrap();

        let frames = framer.release().frames();
        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert_eq!(frame.control, Some(CONTROL_DATA));
            assert!(frame.payload.len() <= 3);
        }
        assert_eq!(frames[0].payload, [1, 2, 3]);
        assert_eq!(frames[1].payload, [4, 5, 6]);
        assert_eq!(frames[2].payload, [7]);
    }

    #[test]
    fn frame_is_closed_when_body_fails() {
        let transport = RecordingTransport::failing_after(2);
        let mut framer = Framer::new(transport, SSD1306_ADDR1);
        let result = framer.data_frame(|frame| frame.send_iter([1u8, 2, 3]));
        assert!(result.is_err());

        let transport = framer.release();
        assert_eq!(transport.events().last(), Some(&Event::End));
        assert!(transport.is_balanced());
    }

    #[test]
    fn body_value_is_returned() {
        let mut framer = Framer::new(RecordingTransport::new(), SSD1306_ADDR1);
        let n = framer
            .command_frame(|frame| frame.send_all(&[0xA6, 0xAF]).map(|()| 2))
            .unwrap();
        assert_eq!(n, 2);
    }
}
