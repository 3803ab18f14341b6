//! Transaction sequencing
//!
//! A write transaction is start, address byte, payload bytes, stop. Each
//! step except the stop waits for TWINT through the deadline guard, and all
//! steps share one deadline computed when the transaction begins.
//!
//! ```text
//! Idle → StartSent → AddressSent → DataSent* → StopIssued
//!   any wait timeout → fault (no in-driver recovery)
//! ```
//!
//! Acknowledge bits are not inspected after the address or data bytes, and
//! the stop condition is issued without waiting for it to reach the wire.

use twibus_hal::twi::control::{TWEN, TWINT, TWSTA, TWSTO};
use twibus_hal::{Clock, TwiRegisters, TwiStatus};

use super::deadline::{self, Deadline};
use crate::safety::TwiError;

/// Position within a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionState {
    /// No transaction in progress
    Idle,
    /// Start condition on the bus
    StartSent,
    /// Address byte transmitted
    AddressSent,
    /// At least one payload byte transmitted
    DataSent,
    /// Stop condition requested
    StopIssued,
}

/// One in-flight transaction over a register block
pub struct TransactionEngine<'a, R, C> {
    regs: &'a mut R,
    clock: &'a C,
    deadline: Deadline,
    state: TransactionState,
}

impl<'a, R: TwiRegisters, C: Clock> TransactionEngine<'a, R, C> {
    /// Start the transaction clock; the whole sequence must finish within
    /// `timeout_us`
    pub fn begin(regs: &'a mut R, clock: &'a C, timeout_us: u32) -> Self {
        let deadline = Deadline::after(clock, timeout_us);
        Self {
            regs,
            clock,
            deadline,
            state: TransactionState::Idle,
        }
    }

    /// Current position in the sequence
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Deadline shared by every step
    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Send `payload` to the device whose shifted address is `address`
    ///
    /// On error, [`state`](Self::state) is the last step that completed.
    pub fn write<I>(&mut self, address: u8, payload: I) -> Result<(), TwiError>
    where
        I: IntoIterator<Item = u8>,
    {
        self.start()?;
        self.send_byte(address, TransactionState::AddressSent)?;
        for byte in payload {
            self.send_byte(byte, TransactionState::DataSent)?;
        }
        self.stop();
        Ok(())
    }

    fn start(&mut self) -> Result<(), TwiError> {
        self.regs.write_control(TWEN | TWINT | TWSTA);
        self.wait(TransactionState::StartSent)?;

        let status = self.regs.read_status();
        if !TwiStatus::is_start_code(status) {
            debug!("i2c start rejected, status {}", status);
            return Err(TwiError::StartFailed(status));
        }
        self.state = TransactionState::StartSent;
        Ok(())
    }

    fn send_byte(&mut self, byte: u8, next: TransactionState) -> Result<(), TwiError> {
        self.regs.write_data(byte);
        self.regs.write_control(TWEN | TWINT);
        self.wait(next)?;
        self.state = next;
        Ok(())
    }

    fn stop(&mut self) {
        self.regs.write_control(TWEN | TWINT | TWSTO);
        self.state = TransactionState::StopIssued;
    }

    fn wait(&self, pending: TransactionState) -> Result<(), TwiError> {
        deadline::wait(&*self.regs, self.clock, self.deadline, pending)
    }
}
