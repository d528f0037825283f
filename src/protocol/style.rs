//! # Text Attributes, Quality, and Color
//!
//! Start/stop attribute pairs, print-quality font selection, and ribbon
//! color selection.
//!
//! | Attribute | Start | Stop |
//! |-----------|-------|------|
//! | Double width | `CTRL N` | `CTRL O` |
//! | Underline | `ESC X` | `ESC Y` |
//! | Boldface | `ESC !` | `ESC "` |
//! | Half height | `ESC w` | `ESC W` |
//! | Superscript | `ESC x` | `ESC z` |
//! | Subscript | `ESC y` | `ESC z` |
//!
//! Superscript and subscript share a stop command; as per page 56 of the
//! ImageWriter II Technical Reference Manual.

use serde::{Deserialize, Serialize};

use crate::protocol::command::Command;

/// # Start Double Width (CTRL N)
pub fn start_double_width() -> Command {
    Command::Control(0x0E)
}

/// # Stop Double Width (CTRL O)
pub fn stop_double_width() -> Command {
    Command::Control(0x0F)
}

/// # Start Underline (ESC X)
pub fn start_underline() -> Command {
    Command::escape(*b"X")
}

/// # Stop Underline (ESC Y)
pub fn stop_underline() -> Command {
    Command::escape(*b"Y")
}

/// # Start Boldface (ESC !)
pub fn start_boldface() -> Command {
    Command::escape(*b"!")
}

/// # Stop Boldface (ESC ")
pub fn stop_boldface() -> Command {
    Command::escape(*b"\"")
}

/// # Start Half Height (ESC w)
pub fn start_half_height() -> Command {
    Command::escape(*b"w")
}

/// # Stop Half Height (ESC W)
pub fn stop_half_height() -> Command {
    Command::escape(*b"W")
}

/// # Start Superscript (ESC x)
pub fn start_superscript() -> Command {
    Command::escape(*b"x")
}

/// # Start Subscript (ESC y)
pub fn start_subscript() -> Command {
    Command::escape(*b"y")
}

/// # Stop Superscript / Subscript (ESC z)
pub fn stop_script() -> Command {
    Command::escape(*b"z")
}

/// A print-quality font, as per page 39 of the ImageWriter II Technical
/// Reference Manual. Lower quality fonts print more quickly.
///
/// Boldface, double-width, half-height, subscript, superscript and
/// proportional printing always print at the correspondence setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Correspondence,
    #[default]
    Draft,
    NearLetterQuality,
}

impl Quality {
    /// Print speed in characters per second.
    pub fn print_speed(self) -> u16 {
        match self {
            Quality::NearLetterQuality => 45,
            Quality::Correspondence => 180,
            Quality::Draft => 250,
        }
    }

    /// # Select Print Quality (ESC a)
    pub fn select(self) -> Command {
        let code = match self {
            Quality::Correspondence => b'0',
            Quality::Draft => b'1',
            Quality::NearLetterQuality => b'2',
        };
        Command::escape([b'a', code])
    }

    /// # Select Print Quality, Scribe Compatible (ESC m / ESC M)
    ///
    /// The Scribe printer's equivalents, as per page 39 of the ImageWriter II
    /// Technical Reference Manual. Draft has no Scribe form and falls back
    /// to [`Quality::select`].
    pub fn select_scribe(self) -> Command {
        match self {
            Quality::Correspondence => Command::escape(*b"m"),
            Quality::NearLetterQuality => Command::escape(*b"M"),
            Quality::Draft => self.select(),
        }
    }
}

/// A ribbon color, as per page 94 of the ImageWriter II Technical Reference
/// Manual. Requires a color ribbon; with a black ribbon every color prints
/// black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Black,
    Yellow,
    Magenta,
    Cyan,
    Orange,
    Green,
    Purple,
}

impl Color {
    /// The manual also names orange "red".
    pub const RED: Color = Color::Orange;

    /// The manual also names purple "blue".
    pub const BLUE: Color = Color::Purple;

    /// # Select Ribbon Color (ESC K)
    pub fn select(self) -> Command {
        let code = match self {
            Color::Black => b'0',
            Color::Yellow => b'1',
            Color::Magenta => b'2',
            Color::Cyan => b'3',
            Color::Orange => b'4',
            Color::Green => b'5',
            Color::Purple => b'6',
        };
        Command::escape([b'K', code])
    }
}

// ============================================================================
// TESTS
// ============================================================================
