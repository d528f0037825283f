//! # Page Geometry
//!
//! Margins, page length, tab stops, and exact print head placement. These
//! commands carry numeric parameters as fixed-width, zero-padded ASCII
//! digit fields.
//!
//! | Command | Field | Meaning |
//! |---------|-------|---------|
//! | `ESC L nnn` | 3 digits | left margin character column |
//! | `ESC H nnnn` | 4 digits | page length in 1/144 inch |
//! | `ESC ( nnn,... .` | 3 digits each | set tab stops |
//! | `ESC ) nnn,... .` | 3 digits each | clear tab stops |
//! | `ESC 0` | - | clear all tab stops |
//! | `ESC F nnnn` | 4 digits | place print head at dot column |
//!
//! The builders here hold their structured fields, so a caller can replace a
//! field and re-encode without re-specifying the whole command. Positions
//! beyond the pitch's physical bounds are silently clamped to the maximum,
//! as per page 59 of the ImageWriter II Technical Reference Manual.

use crate::error::Error;
use crate::pitch::Pitch;
use crate::protocol::command::{self, Command};
use crate::units::Length;

/// # Set Left Margin (ESC L)
///
/// The left margin as a character column at a pitch, as per page 59 of the
/// ImageWriter II Technical Reference Manual.
///
/// ## Example
///
/// ```
/// use imagewriter::pitch::Pitch;
/// use imagewriter::protocol::geometry::LeftMargin;
/// use imagewriter::units::Distance;
///
/// let margin = LeftMargin::new(Distance::inches(1.0), Pitch::Pica);
/// assert_eq!(margin.encode().unwrap().to_bytes(), b"\x1bL010".to_vec());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeftMargin {
    pub margin: Length,
    pub pitch: Pitch,
}

impl LeftMargin {
    pub fn new(margin: impl Into<Length>, pitch: Pitch) -> Self {
        Self {
            margin: margin.into(),
            pitch,
        }
    }

    /// The clamped character column the command will carry.
    pub fn column(&self) -> u16 {
        let column = self.margin.to_units(|d| d.characters(self.pitch));
        clamp_position(column, self.pitch.max_character_position())
    }

    pub fn encode(&self) -> Result<Command, Error> {
        let mut sequence = vec![b'L'];
        sequence.extend(command::format_number(u32::from(self.column()), 3)?);
        Ok(Command::escape(sequence))
    }
}

/// # Set Page Length (ESC H)
///
/// The page length in ticks of 1/144 inch, as per page 61 of the
/// ImageWriter II Technical Reference Manual. A 4-digit field; lengths over
/// 9999 ticks (about 69 inches) fail with a field overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLength {
    pub length: Length,
}

impl PageLength {
    pub fn new(length: impl Into<Length>) -> Self {
        Self {
            length: length.into(),
        }
    }

    /// The page length in vertical ticks.
    pub fn ticks(&self) -> i32 {
        self.length.to_units(|d| d.vertical_ticks())
    }

    pub fn encode(&self) -> Result<Command, Error> {
        let ticks = self.ticks().max(0);
        let mut sequence = vec![b'H'];
        sequence.extend(command::format_number(ticks as u32, 4)?);
        Ok(Command::escape(sequence))
    }
}

/// # Place Print Head (ESC F)
///
/// Move the print head to an exact dot column, as per page 67 of the
/// ImageWriter II Technical Reference Manual. The dot column is resolved at
/// the pitch's graphics resolution and clamped to the pitch's dot width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPosition {
    pub position: Length,
    pub pitch: Pitch,
}

impl HeadPosition {
    pub fn new(position: impl Into<Length>, pitch: Pitch) -> Self {
        Self {
            position: position.into(),
            pitch,
        }
    }

    /// The clamped dot column the command will carry.
    pub fn dots(&self) -> u16 {
        let dots = self.position.to_units(|d| d.horizontal_dots(self.pitch));
        clamp_position(dots, self.pitch.width())
    }

    pub fn encode(&self) -> Result<Command, Error> {
        let mut sequence = vec![b'F'];
        sequence.extend(command::format_number(u32::from(self.dots()), 4)?);
        Ok(Command::escape(sequence))
    }
}

/// # Set Tab Stops (ESC ( )
///
/// Set tab stops at the given character columns, as per page 65 of the
/// ImageWriter II Technical Reference Manual. Columns are sorted ascending
/// and deduplicated; each is a 3-digit field, comma separated, and the list
/// is terminated by `.`.
///
/// An empty column list encodes to nothing.
pub fn set_tab_stops(columns: &[u16]) -> Result<Command, Error> {
    tab_stop_command(b'(', columns)
}

/// # Clear Tab Stops (ESC ) )
///
/// Clear the tab stops at the given character columns, with the same field
/// format as [`set_tab_stops`].
pub fn clear_tab_stops(columns: &[u16]) -> Result<Command, Error> {
    tab_stop_command(b')', columns)
}

/// # Clear All Tab Stops (ESC 0)
pub fn clear_all_tab_stops() -> Command {
    Command::escape(*b"0")
}

fn tab_stop_command(code: u8, columns: &[u16]) -> Result<Command, Error> {
    let mut ordered: Vec<u16> = columns.to_vec();
    ordered.sort_unstable();
    ordered.dedup();

    if ordered.is_empty() {
        return Ok(Command::Empty);
    }

    let mut sequence = vec![code];
    for (i, column) in ordered.iter().enumerate() {
        if i > 0 {
            sequence.push(b',');
        }
        sequence.extend(command::format_number(u32::from(*column), 3)?);
    }
    sequence.push(b'.');
    Ok(Command::escape(sequence))
}

/// Clamp a converted position into the 0..=max device range. Conversions can
/// go negative for negative distances; the firmware fields are unsigned.
fn clamp_position(value: i32, max: u16) -> u16 {
    value.clamp(0, i32::from(max)) as u16
}

// ============================================================================
// TESTS
// ============================================================================
