//! # ImageWriter II Protocol Implementation
//!
//! Low-level command builders for the Apple ImageWriter II's escape-sequence
//! protocol. There is no negotiation or framing: every behavior is selected
//! by literal control bytes, escape sequences, or the software switch bank.
//!
//! ## Module Structure
//!
//! - [`command`]: the atomic command primitive and numeric field formatting
//! - [`switches`]: the 16-bit software switch bank and settings projection
//! - [`encoder`]: the character-mode state machine for mixed text
//! - [`mousetext`]: the 32-glyph MouseText character set
//! - [`custom`]: user-defined characters and their loading protocol
//! - [`geometry`]: margins, page length, tab stops, head placement
//! - [`motion`]: line feed configuration and the tab stop tracker
//! - [`style`]: text attributes, print quality, ribbon color
//! - [`device`]: reset, select, graphics, and other whole-device commands
//!
//! ## Usage Example
//!
//! ```
//! use imagewriter::protocol::{command, device, style};
//! use imagewriter::pitch::Pitch;
//!
//! // Build a simple print sequence
//! let mut data = Vec::new();
//!
//! data.extend(device::reset().to_bytes());
//! data.extend(Pitch::Elite.select().to_bytes());
//! data.extend(style::start_boldface().to_bytes());
//! data.extend(b"INVOICE");
//! data.extend(style::stop_boldface().to_bytes());
//! data.push(b'\r');
//!
//! // Send `data` to the printer via a transport...
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "ImageWriter II Technical Reference
//! Manual" by Apple Computer, Inc.

pub mod command;
pub mod custom;
pub mod device;
pub mod encoder;
pub mod geometry;
pub mod motion;
pub mod mousetext;
pub mod style;
pub mod switches;
