//! # Character Pitches
//!
//! A pitch names a character-width/density mode. The ImageWriter II has six
//! fixed pitches plus two proportional ones, as per page 48 of the
//! ImageWriter II Technical Reference Manual.
//!
//! | Pitch | CPI | Chars/line | Graphics DPI | Graphics width |
//! |-------|-----|------------|--------------|----------------|
//! | Extended | 9 | 72 | 72 | 576 |
//! | Pica | 10 | 80 | 80 | 640 |
//! | Elite | 12 | 96 | 96 | 768 |
//! | Semicondensed | 13.4 | 107 | 107 | 856 |
//! | Condensed | 15 | 120 | 120 | 960 |
//! | Ultracondensed | 17 | 136 | 136 | 1088 |
//! | Pica proportional | - | 72 | 144 | 1152 |
//! | Elite proportional | - | 80 | 160 | 1280 |
//!
//! Proportional pitches have no fixed characters per inch and are specified
//! in dots per inch instead; their chars/line figures are not strict but are
//! still useful for margins and tab stops.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::protocol::command::Command;

/// Vertical graphics resolution is 72 dpi regardless of pitch, as per page
/// 104 of the ImageWriter II Technical Reference Manual.
pub const VERTICAL_RESOLUTION: u16 = 72;

/// Character pitches, as per page 48 of the ImageWriter II Technical
/// Reference Manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pitch {
    Extended,
    #[default]
    Pica,
    Elite,
    Semicondensed,
    Condensed,
    Ultracondensed,
    PicaProportional,
    EliteProportional,
}

impl Pitch {
    /// Whether or not the pitch is proportional.
    ///
    /// Note, proportional fonts will not be printed at draft quality.
    pub fn is_proportional(self) -> bool {
        matches!(self, Pitch::PicaProportional | Pitch::EliteProportional)
    }

    /// The pitch's characters per inch. Proportional fonts do not have a set
    /// characters per inch, and are specified in dots per inch instead.
    pub fn cpi(self) -> Option<f64> {
        match self {
            Pitch::Extended => Some(9.0),
            Pitch::Pica => Some(10.0),
            Pitch::Elite => Some(12.0),
            Pitch::Semicondensed => Some(13.4),
            Pitch::Condensed => Some(15.0),
            Pitch::Ultracondensed => Some(17.0),
            Pitch::PicaProportional | Pitch::EliteProportional => None,
        }
    }

    /// The pitch's dots per inch. Only proportional fonts have a set dots
    /// per inch; all other fonts are specified in characters per inch.
    pub fn dpi(self) -> Option<u16> {
        match self {
            Pitch::PicaProportional => Some(144),
            Pitch::EliteProportional => Some(180),
            _ => None,
        }
    }

    /// Characters per inch, as per page 66 of the ImageWriter II Technical
    /// Reference Manual.
    ///
    /// For non-proportional fonts this is the true character density. For
    /// proportional fonts the value is nominal but still useful for setting
    /// tab stops.
    pub fn characters_per_inch(self) -> f64 {
        match self {
            Pitch::Extended => 9.0,
            Pitch::Pica => 10.0,
            Pitch::Elite => 12.0,
            Pitch::Semicondensed => 13.4,
            Pitch::Condensed => 15.0,
            Pitch::Ultracondensed => 17.0,
            Pitch::PicaProportional => 9.0,
            Pitch::EliteProportional => 10.0,
        }
    }

    /// Characters per line, as per page 60 of the ImageWriter II Technical
    /// Reference Manual - characters per inch over an 8 inch line.
    pub fn characters_per_line(self) -> u16 {
        (self.characters_per_inch() * crate::units::LINE_WIDTH_INCHES) as u16
    }

    /// The maximum character position, one less than the characters per line.
    pub fn max_character_position(self) -> u16 {
        self.characters_per_line() - 1
    }

    /// The horizontal resolution in graphics mode, in dots per inch, as per
    /// page 106 of the ImageWriter II Technical Reference Manual.
    pub fn horizontal_resolution(self) -> u16 {
        match self {
            Pitch::Extended => 72,
            Pitch::Pica => 80,
            Pitch::Elite => 96,
            Pitch::Semicondensed => 107,
            Pitch::Condensed => 120,
            Pitch::Ultracondensed => 136,
            Pitch::PicaProportional => 144,
            Pitch::EliteProportional => 160,
        }
    }

    /// The maximum width in graphics mode, in dots, as per page 106 of the
    /// ImageWriter II Technical Reference Manual.
    pub fn width(self) -> u16 {
        match self {
            Pitch::Extended => 576,
            Pitch::Pica => 640,
            Pitch::Elite => 768,
            Pitch::Semicondensed => 856,
            Pitch::Condensed => 960,
            Pitch::Ultracondensed => 1088,
            Pitch::PicaProportional => 1152,
            Pitch::EliteProportional => 1280,
        }
    }

    /// # Select Pitch (ESC n/N/E/e/q/Q/p/P)
    ///
    /// Build the command selecting this pitch, as per page 47 of the
    /// ImageWriter II Technical Reference Manual.
    ///
    /// ## Example
    ///
    /// ```
    /// use imagewriter::pitch::Pitch;
    ///
    /// assert_eq!(Pitch::Elite.select().to_bytes(), vec![0x1B, b'E']);
    /// ```
    pub fn select(self) -> Command {
        let code = match self {
            Pitch::Extended => b'n',
            Pitch::Pica => b'N',
            Pitch::Elite => b'E',
            Pitch::Semicondensed => b'e',
            Pitch::Condensed => b'q',
            Pitch::Ultracondensed => b'Q',
            Pitch::PicaProportional => b'p',
            Pitch::EliteProportional => b'P',
        };
        Command::escape([code])
    }

    /// # Insert Spaces (ESC 1..6)
    ///
    /// Insert dot spaces before the next character, as per page 49 of the
    /// ImageWriter II Technical Reference Manual.
    ///
    /// Only works for proportional pitches; `spaces` must be from 1 to 6.
    pub fn insert_spaces(self, spaces: u8) -> Result<Command, Error> {
        self.check_proportional_spacing(spaces)?;
        Ok(Command::escape([b'0' + spaces]))
    }

    /// # Set Spacing (ESC m n)
    ///
    /// Set the amount of dot spaces inserted between each character, as per
    /// page 49 of the ImageWriter II Technical Reference Manual.
    ///
    /// Only works for proportional pitches; `spaces` must be from 1 to 6.
    pub fn set_spacing(self, spaces: u8) -> Result<Command, Error> {
        self.check_proportional_spacing(spaces)?;
        Ok(Command::escape([b'm', b'0' + spaces]))
    }

    fn check_proportional_spacing(self, spaces: u8) -> Result<(), Error> {
        if !self.is_proportional() {
            return Err(Error::UnsupportedPitchOperation(self));
        }
        if !(1..=6).contains(&spaces) {
            return Err(Error::OutOfRangeSpacing(spaces));
        }
        Ok(())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pitch::Extended => "Extended",
            Pitch::Pica => "Pica",
            Pitch::Elite => "Elite",
            Pitch::Semicondensed => "Semicondensed",
            Pitch::Condensed => "Condensed",
            Pitch::Ultracondensed => "Ultracondensed",
            Pitch::PicaProportional => "Pica (Proportional)",
            Pitch::EliteProportional => "Elite (Proportional)",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_characters_per_line() {
        assert_eq!(Pitch::Extended.characters_per_line(), 72);
        assert_eq!(Pitch::Pica.characters_per_line(), 80);
        assert_eq!(Pitch::Elite.characters_per_line(), 96);
        // 13.4 cpi * 8 in = 107.2, truncated
        assert_eq!(Pitch::Semicondensed.characters_per_line(), 107);
        assert_eq!(Pitch::Condensed.characters_per_line(), 120);
        assert_eq!(Pitch::Ultracondensed.characters_per_line(), 136);
        assert_eq!(Pitch::PicaProportional.characters_per_line(), 72);
        assert_eq!(Pitch::EliteProportional.characters_per_line(), 80);
    }

    #[test]
    fn test_max_character_position() {
        assert_eq!(Pitch::Pica.max_character_position(), 79);
        assert_eq!(Pitch::Ultracondensed.max_character_position(), 135);
    }

    #[test]
    fn test_select_bytes() {
        assert_eq!(Pitch::Extended.select().to_bytes(), vec![0x1B, b'n']);
        assert_eq!(Pitch::Pica.select().to_bytes(), vec![0x1B, b'N']);
        assert_eq!(Pitch::Condensed.select().to_bytes(), vec![0x1B, b'q']);
        assert_eq!(
            Pitch::EliteProportional.select().to_bytes(),
            vec![0x1B, b'P']
        );
    }

    #[test]
    fn test_proportional_flags() {
        assert!(Pitch::PicaProportional.is_proportional());
        assert!(Pitch::EliteProportional.is_proportional());
        assert!(!Pitch::Pica.is_proportional());
        assert!(Pitch::Pica.dpi().is_none());
        assert_eq!(Pitch::EliteProportional.dpi(), Some(180));
        assert!(Pitch::EliteProportional.cpi().is_none());
    }

    #[test]
    fn test_spacing_commands() {
        let cmd = Pitch::PicaProportional.set_spacing(3).unwrap();
        assert_eq!(cmd.to_bytes(), vec![0x1B, b'm', b'3']);

        let cmd = Pitch::EliteProportional.insert_spaces(6).unwrap();
        assert_eq!(cmd.to_bytes(), vec![0x1B, b'6']);
    }

    #[test]
    fn test_spacing_rejects_fixed_pitch() {
        let err = Pitch::Pica.set_spacing(2).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPitchOperation(Pitch::Pica)));

        let err = Pitch::Elite.insert_spaces(1).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPitchOperation(Pitch::Elite)));
    }

    #[test]
    fn test_spacing_rejects_out_of_range() {
        let err = Pitch::PicaProportional.set_spacing(0).unwrap_err();
        assert!(matches!(err, Error::OutOfRangeSpacing(0)));

        let err = Pitch::PicaProportional.insert_spaces(7).unwrap_err();
        assert!(matches!(err, Error::OutOfRangeSpacing(7)));
    }
}
