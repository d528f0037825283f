//! # Error Types
//!
//! This module defines error types used throughout the imagewriter library.
//!
//! All encoding errors are raised at the point a command is constructed -
//! never deferred. Pure encoding has no transient failure mode, so nothing
//! here is ever retried.

use thiserror::Error;

use crate::pitch::Pitch;

/// Main error type for imagewriter operations
#[derive(Debug, Error)]
pub enum Error {
    /// Control characters are derived from ASCII 64-95 ('@' through '_')
    #[error("'{0}' ({1}) is not in the control character range 64-95")]
    InvalidControlCharacter(char, u32),

    /// A numeric parameter does not fit its fixed-width textual field
    #[error("{value} does not fit in a {width}-digit field")]
    FieldOverflow { value: u32, width: usize },

    /// Spacing and space-insertion commands only work for proportional pitches
    #[error("{0} is not a proportional pitch")]
    UnsupportedPitchOperation(Pitch),

    /// Spacing arguments must be from 1 to 6
    #[error("spacing must be from 1 to 6, got {0}")]
    OutOfRangeSpacing(u8),

    /// Custom characters live at points 32-126 (low ASCII) or 160-239 (high ASCII)
    #[error("{0} is not a valid custom character code point")]
    InvalidCodePoint(u32),

    /// Custom character glyphs are 1 to 16 dot columns wide
    #[error("custom character data must be 1 to 16 columns, got {0}")]
    InvalidGlyphWidth(usize),

    /// Tab stops no longer correspond to character columns after a pitch change
    #[error("the pitch has been changed; previously set tab stops are invalid")]
    InvalidTabStops,

    /// Transport-level errors (connection, line configuration)
    #[error("transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
