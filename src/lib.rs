//! # ImageWriter - Apple ImageWriter II Printer Library
//!
//! A Rust library for driving the Apple ImageWriter II serial dot-matrix
//! printer. It provides:
//!
//! - **Protocol implementation**: escape-sequence and switch-bank command
//!   builders
//! - **Character encoding**: a mode state machine for mixed language,
//!   MouseText, and custom character text
//! - **Page geometry**: margins, page length, tab stops, head placement
//! - **Transport**: RS-232 serial communication with flow control
//!
//! ## Quick Start
//!
//! ```no_run
//! use imagewriter::{
//!     pitch::Pitch,
//!     printer::Printer,
//!     protocol::style::Quality,
//!     transport::{BaudRate, FlowControl, SerialTransport},
//! };
//!
//! // Open the serial connection
//! let transport =
//!     SerialTransport::open("/dev/ttyUSB0", BaudRate::Baud9600, FlowControl::RtsCts)?;
//! let mut printer = Printer::new(transport);
//!
//! // Configure and print
//! printer.set_pitch(Pitch::Elite)?;
//! printer.set_quality(Quality::NearLetterQuality)?;
//! printer.print_line("Dear sir or madam,")?;
//!
//! # Ok::<(), imagewriter::error::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Escape-sequence and switch-bank command builders |
//! | [`units`] | Physical lengths and device unit conversion |
//! | [`pitch`] | Character pitches and their density tables |
//! | [`language`] | The eight selectable language fonts |
//! | [`transport`] | Communication backends |
//! | [`printer`] | The stateful printer facade |
//! | [`error`] | Error types |

pub mod error;
pub mod language;
pub mod pitch;
pub mod printer;
pub mod protocol;
pub mod transport;
pub mod units;

// Re-exports for convenience
pub use error::Error;
pub use language::Language;
pub use pitch::Pitch;
pub use printer::Printer;
pub use transport::SerialTransport;
