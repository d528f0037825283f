//! # Command Primitive
//!
//! The atomic unit of output. Every behavior of the ImageWriter II is
//! selected by literal byte sequences - there is no framing and no
//! negotiation - so the one structural guarantee this crate makes is that a
//! [`Command`] serializes to a fixed, deterministic byte sequence that the
//! transport must write as an indivisible unit. The printer's escape parser
//! cannot resume a half-received sequence after a flow-control pause.
//!
//! ## Command Forms
//!
//! | Form | Wire bytes |
//! |------|-----------|
//! | Empty | (none) |
//! | Raw | the bytes, verbatim |
//! | Control | one byte, `ord(ch) - 64` for `ch` in `@`..`_` |
//! | Escape | `0x1B` followed by 1+ literal bytes |
//!
//! As per page 5 of the ImageWriter II Technical Reference Manual.

use crate::error::Error;

/// ESC (Escape) - command prefix byte
///
/// Most ImageWriter II commands begin with ESC (0x1B). This byte signals the
/// start of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// An atomic, serializable unit of protocol output.
///
/// Commands are immutable once constructed; builders that carry structured
/// fields (margins, tab stops) re-encode to a fresh `Command` after a field
/// change rather than mutating one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No bytes at all. Useful as the result of a no-op transition.
    Empty,
    /// Literal bytes, sent verbatim.
    Raw(Vec<u8>),
    /// A single control code (0-31).
    Control(u8),
    /// An escape sequence: ESC followed by these bytes.
    Escape(Vec<u8>),
}

impl Command {
    /// Generate a control character command, as per page 5 of the
    /// ImageWriter II Technical Reference Manual.
    ///
    /// The source character must be in the ASCII range 64-95 (`@` through
    /// `_`); its control code is the character value minus 64.
    ///
    /// ## Example
    ///
    /// ```
    /// use imagewriter::protocol::command::Command;
    ///
    /// // CTRL-N starts double width printing
    /// assert_eq!(Command::control('N').unwrap().to_bytes(), vec![0x0E]);
    /// assert!(Command::control('a').is_err());
    /// ```
    pub fn control(ch: char) -> Result<Self, Error> {
        let point = ch as u32;
        if !(64..=95).contains(&point) {
            return Err(Error::InvalidControlCharacter(ch, point));
        }
        Ok(Command::Control((point - 64) as u8))
    }

    /// Generate an escape sequence command, as per page 5 of the
    /// ImageWriter II Technical Reference Manual: ESC followed by the given
    /// bytes.
    pub fn escape(sequence: impl Into<Vec<u8>>) -> Self {
        Command::Escape(sequence.into())
    }

    /// Literal bytes, sent verbatim.
    pub fn raw(bytes: impl Into<Vec<u8>>) -> Self {
        Command::Raw(bytes.into())
    }

    /// Serialize to the exact wire bytes. Pure and deterministic given the
    /// command's fields.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Command::Empty => Vec::new(),
            Command::Raw(bytes) => bytes.clone(),
            Command::Control(code) => vec![*code],
            Command::Escape(tail) => {
                let mut out = Vec::with_capacity(1 + tail.len());
                out.push(ESC);
                out.extend_from_slice(tail);
                out
            }
        }
    }

    /// The serialized length in bytes. Always equals `to_bytes().len()`.
    pub fn len(&self) -> usize {
        match self {
            Command::Empty => 0,
            Command::Raw(bytes) => bytes.len(),
            Command::Control(_) => 1,
            Command::Escape(tail) => 1 + tail.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Concatenate the wire bytes of a command sequence.
pub fn to_bytes(commands: &[Command]) -> Vec<u8> {
    let mut out = Vec::with_capacity(commands.iter().map(Command::len).sum());
    for command in commands {
        out.extend(command.to_bytes());
    }
    out
}

/// Format a numeric parameter as fixed-width, zero-padded ASCII digits.
///
/// The firmware reads these fields by position, so a value too large for its
/// field is a caller error, not something to widen silently.
pub fn format_number(value: u32, width: usize) -> Result<Vec<u8>, Error> {
    let formatted = format!("{:0width$}", value);
    if formatted.len() > width {
        return Err(Error::FieldOverflow { value, width });
    }
    Ok(formatted.into_bytes())
}

// ============================================================================
// TESTS
// ============================================================================
