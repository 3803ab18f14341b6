//! Simulated TWI hardware for host tests

use core::cell::Cell;

use heapless::Vec;
use twibus_hal::twi::{control, TwiStatus};
use twibus_hal::{Clock, GpioPin, PinSetup, TwiRegisters};

/// TWSR status code bits; the rest are prescaler
const STATUS_MASK: u8 = 0xF8;

/// A register write observed by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegWrite {
    Control(u8),
    Status(u8),
    Data(u8),
    BitRate(u8),
}

/// TWI register block that completes operations instantly
///
/// `completions` limits how many operations finish before the peripheral
/// hangs (TWINT never set again). `None` means it never hangs.
pub struct MockTwi {
    control: u8,
    status: u8,
    pub start_status: u8,
    pub completions: Option<usize>,
    pub writes: Vec<RegWrite, 64>,
    reads: Cell<usize>,
}

impl MockTwi {
    pub fn new() -> Self {
        Self {
            control: 0,
            status: TwiStatus::NoInfo as u8,
            start_status: TwiStatus::Start as u8,
            completions: None,
            writes: Vec::new(),
            reads: Cell::new(0),
        }
    }

    /// Already brought up by an earlier owner
    pub fn enabled() -> Self {
        let mut twi = Self::new();
        twi.control = control::TWEN;
        twi
    }

    /// Peripheral that never completes anything
    pub fn hung() -> Self {
        let mut twi = Self::new();
        twi.completions = Some(0);
        twi
    }

    /// Total register reads and writes
    pub fn accesses(&self) -> usize {
        self.reads.get() + self.writes.len()
    }

    pub fn data_bytes(&self) -> Vec<u8, 64> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                RegWrite::Data(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    fn log(&mut self, write: RegWrite) {
        self.writes.push(write).expect("mock write log full");
    }

    fn take_completion(&mut self) -> bool {
        match &mut self.completions {
            None => true,
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}

impl TwiRegisters for MockTwi {
    fn read_control(&self) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.control
    }

    fn write_control(&mut self, value: u8) {
        self.log(RegWrite::Control(value));

        if value & control::TWINT == 0 {
            self.control = value;
            return;
        }

        // Stop completes on the wire without raising TWINT.
        if value & control::TWSTO != 0 {
            self.control = value & !(control::TWINT | control::TWSTO);
            return;
        }

        if self.take_completion() {
            self.control = value | control::TWINT;
            let code = if value & control::TWSTA != 0 {
                self.start_status
            } else {
                TwiStatus::DataWriteAck as u8
            };
            self.status = (code & STATUS_MASK) | (self.status & !STATUS_MASK);
        } else {
            self.control = value & !control::TWINT;
        }
    }

    fn read_status(&self) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.status
    }

    fn write_status(&mut self, value: u8) {
        self.log(RegWrite::Status(value));
        self.status = (self.status & STATUS_MASK) | (value & !STATUS_MASK);
    }

    fn write_data(&mut self, value: u8) {
        self.log(RegWrite::Data(value));
    }

    fn write_bit_rate(&mut self, value: u8) {
        self.log(RegWrite::BitRate(value));
    }
}

/// Records line setup calls
#[derive(Default)]
pub struct MockPins {
    pub outputs: Vec<(GpioPin, bool), 8>,
}

impl PinSetup for MockPins {
    fn setup_output(&mut self, pin: GpioPin, high: bool) {
        self.outputs.push((pin, high)).expect("mock pin log full");
    }
}

/// Tick counter (one tick per microsecond) that advances by `step` after
/// every read
pub struct MockClock {
    next: Cell<u32>,
    last: Cell<u32>,
    step: u32,
}

impl MockClock {
    pub fn new(start: u32) -> Self {
        Self::with_step(start, 1)
    }

    pub fn with_step(start: u32, step: u32) -> Self {
        Self {
            next: Cell::new(start),
            last: Cell::new(start),
            step,
        }
    }

    /// Last value handed out by `now()`
    pub fn last(&self) -> u32 {
        self.last.get()
    }
}

impl Clock for MockClock {
    fn now(&self) -> u32 {
        let now = self.next.get();
        self.last.set(now);
        self.next.set(now.wrapping_add(self.step));
        now
    }

    fn ticks_from_us(&self, us: u32) -> u32 {
        us
    }
}
