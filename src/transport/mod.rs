//! # Printer Transport Layer
//!
//! Byte transports for getting encoded commands to the printer.
//!
//! ## Available Transports
//!
//! - [`serial`]: RS-232 serial line with RTS/CTS or XON/XOFF flow control
//!
//! Tests use an in-memory mock implementing [`Transport`]; see the printer
//! facade tests.
//!
//! ## The Indivisibility Contract
//!
//! The printer's escape parser cannot resume a half-received sequence, so a
//! command's bytes must reach the device as one write. [`Transport::send`]
//! enforces this by serializing the whole command before writing; transports
//! must not interleave bytes of two commands even when flow control pauses
//! a write.

pub mod serial;

pub use serial::{BaudRate, FlowControl, SerialTransport};

use crate::error::Error;
use crate::protocol::command::Command;

/// A byte sink with flow-control line queries.
pub trait Transport {
    /// Write bytes as one indivisible unit.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Whether the device is asserting its ready line (DSR from the host's
    /// perspective).
    fn ready_to_send(&mut self) -> Result<bool, Error>;

    /// Whether the device is clear to receive (CTS from the host's
    /// perspective).
    fn clear_to_send(&mut self) -> Result<bool, Error>;

    /// Send one command. The command's bytes are serialized first and
    /// written with a single [`Transport::write`] call.
    fn send(&mut self, command: &Command) -> Result<(), Error> {
        if command.is_empty() {
            return Ok(());
        }
        self.write(&command.to_bytes())
    }

    /// Send a sequence of commands in order.
    fn send_all(&mut self, commands: &[Command]) -> Result<(), Error> {
        for command in commands {
            self.send(command)?;
        }
        Ok(())
    }
}
