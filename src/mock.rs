//! Recording transport for unit tests.
//!
//! [`RecordingTransport`] logs every primitive call and can replay the log
//! into a [`Screen`] that follows the controller's page-addressing rules,
//! so tests can assert on exactly which cells a call touched.

extern crate std;

use std::vec::Vec;

use crate::addressing::{NUM_COLUMNS, NUM_PAGES};
use crate::framer::{CONTROL_COMMAND, CONTROL_DATA};
use crate::transport::Transport;

/// One primitive call on the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Begin(u8),
    Byte(u8),
    End,
}

/// Error injected by [`RecordingTransport::failing_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// One transaction as seen on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub address: u8,
    /// First byte of the transaction.
    pub control: Option<u8>,
    /// Bytes after the control byte.
    pub payload: Vec<u8>,
}

#[derive(Default)]
pub struct RecordingTransport {
    events: Vec<Event>,
    max_transaction_len: Option<usize>,
    fail_after: Option<usize>,
    bytes_sent: usize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_transaction_len(len: usize) -> Self {
        Self {
            max_transaction_len: Some(len),
            ..Self::default()
        }
    }

    /// Accept `count` bytes, then fail every further `send_byte`.
    pub fn failing_after(count: usize) -> Self {
        Self {
            fail_after: Some(count),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Every `Begin` has a matching `End`.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0i32;
        for event in &self.events {
            match event {
                Event::Begin(_) => depth += 1,
                Event::End => depth -= 1,
                Event::Byte(_) => {}
            }
            if !(0..=1).contains(&depth) {
                return false;
            }
        }
        depth == 0
    }

    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut current: Option<Frame> = None;
        for event in &self.events {
            match *event {
                Event::Begin(address) => {
                    current = Some(Frame {
                        address,
                        control: None,
                        payload: Vec::new(),
                    });
                }
                Event::Byte(b) => {
                    if let Some(frame) = current.as_mut() {
                        if frame.control.is_none() {
                            frame.control = Some(b);
                        } else {
                            frame.payload.push(b);
                        }
                    }
                }
                Event::End => {
                    if let Some(frame) = current.take() {
                        frames.push(frame);
                    }
                }
            }
        }
        frames
    }

    pub fn command_frames(&self) -> Vec<Frame> {
        self.frames()
            .into_iter()
            .filter(|f| f.control == Some(CONTROL_COMMAND))
            .collect()
    }

    pub fn data_frames(&self) -> Vec<Frame> {
        self.frames()
            .into_iter()
            .filter(|f| f.control == Some(CONTROL_DATA))
            .collect()
    }

    /// All pixel-data bytes, in bus order.
    pub fn data_bytes(&self) -> Vec<u8> {
        self.data_frames()
            .into_iter()
            .flat_map(|f| f.payload)
            .collect()
    }

    /// All command bytes, in bus order.
    pub fn command_bytes(&self) -> Vec<u8> {
        self.command_frames()
            .into_iter()
            .flat_map(|f| f.payload)
            .collect()
    }

    /// Replay the log into a fresh controller model.
    pub fn screen(&self) -> Screen {
        let mut screen = Screen::new();
        for frame in self.frames() {
            match frame.control {
                Some(CONTROL_COMMAND) => frame.payload.iter().for_each(|&b| screen.command(b)),
                Some(CONTROL_DATA) => frame.payload.iter().for_each(|&b| screen.data(b)),
                _ => {}
            }
        }
        screen
    }
}

impl Transport for RecordingTransport {
    type Error = MockBusError;

    fn begin(&mut self, address_byte: u8) -> Result<(), Self::Error> {
        self.events.push(Event::Begin(address_byte));
        Ok(())
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|n| self.bytes_sent >= n) {
            return Err(MockBusError);
        }
        self.bytes_sent += 1;
        self.events.push(Event::Byte(byte));
        Ok(())
    }

    fn end(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::End);
        Ok(())
    }

    fn max_transaction_len(&self) -> Option<usize> {
        self.max_transaction_len
    }
}

const PAGES: usize = NUM_PAGES as usize;
const COLUMNS: usize = NUM_COLUMNS as usize;

/// Page-addressing-mode model of the controller's display RAM.
pub struct Screen {
    pub cells: [[u8; COLUMNS]; PAGES],
    pub written: [[bool; COLUMNS]; PAGES],
    page: usize,
    column: usize,
    /// Parameter bytes still owed to the last multi-byte command.
    pending_params: usize,
}

impl Screen {
    fn new() -> Self {
        Self {
            cells: [[0; COLUMNS]; PAGES],
            written: [[false; COLUMNS]; PAGES],
            page: 0,
            column: 0,
            pending_params: 0,
        }
    }

    fn command(&mut self, byte: u8) {
        if self.pending_params > 0 {
            self.pending_params -= 1;
            return;
        }
        match byte {
            0x00..=0x0F => self.column = (self.column & 0xF0) | byte as usize,
            0x10..=0x1F => self.column = (self.column & 0x0F) | ((byte as usize & 0x0F) << 4),
            0xB0..=0xB7 => self.page = (byte & 0x07) as usize,
            0x20 | 0x81 | 0x8D | 0xA8 | 0xD3 | 0xD5 | 0xD9 | 0xDA | 0xDB => {
                self.pending_params = 1
            }
            _ => {}
        }
    }

    fn data(&mut self, byte: u8) {
        self.cells[self.page][self.column] = byte;
        self.written[self.page][self.column] = true;
        // Page mode wraps the column pointer within the page.
        self.column = (self.column + 1) % COLUMNS;
    }

    pub fn written_count(&self) -> usize {
        self.written
            .iter()
            .flat_map(|page| page.iter())
            .filter(|&&w| w)
            .count()
    }
}
