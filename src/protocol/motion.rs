//! # Paper and Head Motion
//!
//! Line feed configuration and the tab stop tracker.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `ESC f` / `ESC r` | forward / reverse line feed direction |
//! | `ESC A` / `ESC B` | 6 / 8 lines per inch |
//! | `ESC T nn` | distance between lines, in 1/144 inch |
//!
//! [`TabStops`] keeps the host-side record of which stops are set. The
//! device stores stops as absolute positions, not character columns, so a
//! pitch change silently desynchronizes them; the tracker models that by
//! invalidating itself until the stops are cleared.

use crate::error::Error;
use crate::pitch::Pitch;
use crate::protocol::command::{self, Command};
use crate::protocol::geometry;
use crate::units::{Distance, Length};

/// CR - return the print head to the left margin. A print command.
pub const CARRIAGE_RETURN: Command = Command::Control(0x0D);

/// LF - advance the paper one line.
pub const LINE_FEED: Command = Command::Control(0x0A);

/// FF - advance the paper to the top of the next page.
pub const FORM_FEED: Command = Command::Control(0x0C);

/// BS - move the print head one character backwards, for overstriking.
pub const BACKSPACE: Command = Command::Control(0x08);

/// The direction the paper moves on a line feed, as per page 71 of the
/// ImageWriter II Technical Reference Manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFeedDirection {
    #[default]
    Forward,
    Reverse,
}

impl LineFeedDirection {
    /// # Set Line Feed Direction (ESC f / ESC r)
    pub fn select(self) -> Command {
        match self {
            LineFeedDirection::Forward => Command::escape(*b"f"),
            LineFeedDirection::Reverse => Command::escape(*b"r"),
        }
    }
}

/// Fixed line density, as per page 69 of the ImageWriter II Technical
/// Reference Manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinesPerInch {
    #[default]
    Six,
    Eight,
}

impl LinesPerInch {
    /// # Set Lines Per Inch (ESC A / ESC B)
    pub fn select(self) -> Command {
        match self {
            LinesPerInch::Six => Command::escape(*b"A"),
            LinesPerInch::Eight => Command::escape(*b"B"),
        }
    }
}

/// # Set Distance Between Lines (ESC T)
///
/// Set an exact line-to-line distance in ticks of 1/144 inch, as per page 70
/// of the ImageWriter II Technical Reference Manual. A 2-digit field, so the
/// distance is at most 99/144 inch.
pub fn set_distance_between_lines(distance: impl Into<Length>) -> Result<Command, Error> {
    let ticks = distance.into().to_units(|d| d.vertical_ticks()).max(0);
    let mut sequence = vec![b'T'];
    sequence.extend(command::format_number(ticks as u32, 2)?);
    Ok(Command::escape(sequence))
}

/// The line distance that makes adjacent graphics lines flush: eight dot
/// rows at 72 dots per inch, as per page 112 of the ImageWriter II Technical
/// Reference Manual.
pub fn set_graphics_line_spacing() -> Result<Command, Error> {
    set_distance_between_lines(Distance::inches(8.0 / 72.0))
}

// ============================================================================
// TAB STOPS
// ============================================================================

/// Host-side tab stop tracker, as per page 65 of the ImageWriter II
/// Technical Reference Manual.
///
/// The device keeps stops at absolute positions. After a pitch change they
/// remain where they were and no longer correspond to character columns, so
/// the tracker starts invalid and becomes invalid again on every pitch
/// change; [`TabStops::clear_all`] resynchronizes it. Operations on an
/// invalid tracker fail with [`Error::InvalidTabStops`].
#[derive(Debug, Clone)]
pub struct TabStops {
    pitch: Pitch,
    stops: Vec<Distance>,
    valid: bool,
}

impl TabStops {
    /// A new tracker. The device's stops are unknown at this point, so the
    /// tracker starts invalid.
    pub fn new(pitch: Pitch) -> Self {
        Self {
            pitch,
            stops: Vec::new(),
            valid: false,
        }
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Record a pitch change, invalidating the current stops.
    pub fn set_pitch(&mut self, pitch: Pitch) {
        self.pitch = pitch;
        self.valid = false;
    }

    /// The currently set stops, sorted by column.
    pub fn stops(&self) -> Result<&[Distance], Error> {
        if self.valid {
            Ok(&self.stops)
        } else {
            Err(Error::InvalidTabStops)
        }
    }

    /// Resolve a stop to its character column at the current pitch, clamped
    /// to the last column.
    fn column(&self, stop: Length) -> u16 {
        let column = stop.to_units(|d| d.characters(self.pitch));
        column.clamp(0, i32::from(self.pitch.max_character_position())) as u16
    }

    /// Normalize a stop to a physical distance so it survives conversion to
    /// columns at whatever pitch applies later.
    fn to_distance(&self, stop: Length) -> Distance {
        match stop {
            Length::Distance(d) => d,
            Length::Units(columns) => {
                Distance::inches(f64::from(columns) / self.pitch.characters_per_inch())
            }
        }
    }

    fn sort(&mut self) {
        let pitch = self.pitch;
        self.stops
            .sort_by_key(|d| Length::from(*d).to_units(|d| d.characters(pitch)));
    }

    /// Set several stops, returning the command to send.
    pub fn set_many(&mut self, stops: &[Length]) -> Result<Command, Error> {
        if !self.valid {
            return Err(Error::InvalidTabStops);
        }

        let mut columns: Vec<u16> = stops.iter().map(|s| self.column(*s)).collect();
        columns.sort_unstable();
        columns.dedup();

        let mut known: Vec<u16> = self.stops.iter().map(|d| self.column((*d).into())).collect();
        for stop in stops {
            let column = self.column(*stop);
            if !known.contains(&column) {
                known.push(column);
                self.stops.push(self.to_distance(*stop));
            }
        }
        self.sort();

        geometry::set_tab_stops(&columns)
    }

    /// Set a single stop, returning the command to send.
    pub fn set_one(&mut self, stop: impl Into<Length>) -> Result<Command, Error> {
        self.set_many(&[stop.into()])
    }

    /// Clear several stops by position, returning the command to send.
    pub fn clear_many(&mut self, stops: &[Length]) -> Result<Command, Error> {
        if !self.valid {
            return Err(Error::InvalidTabStops);
        }

        let mut cleared: Vec<u16> = stops.iter().map(|s| self.column(*s)).collect();
        cleared.sort_unstable();
        cleared.dedup();

        let pitch = self.pitch;
        self.stops.retain(|d| {
            let column = Length::from(*d).to_units(|d| d.characters(pitch));
            !cleared.contains(&(column.clamp(0, i32::from(pitch.max_character_position())) as u16))
        });

        geometry::clear_tab_stops(&cleared)
    }

    /// Clear everything, revalidating the tracker.
    pub fn clear_all(&mut self) -> Command {
        self.stops.clear();
        self.valid = true;
        geometry::clear_all_tab_stops()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_command_bytes() {
        assert_eq!(CARRIAGE_RETURN.to_bytes(), vec![0x0D]);
        assert_eq!(LINE_FEED.to_bytes(), vec![0x0A]);
        assert_eq!(FORM_FEED.to_bytes(), vec![0x0C]);
        assert_eq!(BACKSPACE.to_bytes(), vec![0x08]);
    }

    #[test]
    fn test_line_feed_direction() {
        assert_eq!(LineFeedDirection::Forward.select().to_bytes(), vec![0x1B, b'f']);
        assert_eq!(LineFeedDirection::Reverse.select().to_bytes(), vec![0x1B, b'r']);
    }

    #[test]
    fn test_lines_per_inch() {
        assert_eq!(LinesPerInch::Six.select().to_bytes(), vec![0x1B, b'A']);
        assert_eq!(LinesPerInch::Eight.select().to_bytes(), vec![0x1B, b'B']);
    }

    #[test]
    fn test_distance_between_lines() {
        // 1/6 in = 24/144
        let cmd = set_distance_between_lines(Distance::inches(1.0 / 6.0)).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1bT24".to_vec());

        let cmd = set_distance_between_lines(16).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1bT16".to_vec());
    }

    #[test]
    fn test_distance_between_lines_overflow() {
        assert!(matches!(
            set_distance_between_lines(100).unwrap_err(),
            Error::FieldOverflow { value: 100, width: 2 }
        ));
    }

    #[test]
    fn test_graphics_line_spacing() {
        // 8 dot rows at 72 dpi = 16/144 in
        assert_eq!(
            set_graphics_line_spacing().unwrap().to_bytes(),
            b"\x1bT16".to_vec()
        );
    }

    #[test]
    fn test_tab_stops_start_invalid() {
        let mut stops = TabStops::new(Pitch::Pica);
        assert!(matches!(stops.stops().unwrap_err(), Error::InvalidTabStops));
        assert!(matches!(
            stops.set_one(8).unwrap_err(),
            Error::InvalidTabStops
        ));
    }

    #[test]
    fn test_tab_stops_set_and_clear() {
        let mut stops = TabStops::new(Pitch::Pica);
        assert_eq!(stops.clear_all().to_bytes(), vec![0x1B, b'0']);

        let cmd = stops.set_many(&[Length::from(24), Length::from(8)]).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1b(008,024.".to_vec());
        assert_eq!(stops.stops().unwrap().len(), 2);

        let cmd = stops.clear_many(&[Length::from(8)]).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1b)008.".to_vec());
        assert_eq!(stops.stops().unwrap().len(), 1);
    }

    #[test]
    fn test_tab_stops_merge_distances_and_columns() {
        let mut stops = TabStops::new(Pitch::Pica);
        stops.clear_all();

        // 1 in at 10 cpi is column 10, same as the raw column 10
        stops.set_one(Distance::inches(1.0)).unwrap();
        let cmd = stops.set_one(10).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1b(010.".to_vec());
        assert_eq!(stops.stops().unwrap().len(), 1);
    }

    #[test]
    fn test_pitch_change_invalidates() {
        let mut stops = TabStops::new(Pitch::Pica);
        stops.clear_all();
        stops.set_one(16).unwrap();

        stops.set_pitch(Pitch::Elite);
        assert!(matches!(stops.stops().unwrap_err(), Error::InvalidTabStops));

        // Clearing everything resynchronizes
        stops.clear_all();
        assert_eq!(stops.stops().unwrap().len(), 0);
    }

    #[test]
    fn test_tab_stops_clamp_to_line() {
        let mut stops = TabStops::new(Pitch::Pica);
        stops.clear_all();
        let cmd = stops.set_one(500).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1b(079.".to_vec());
    }
}
