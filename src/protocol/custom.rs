//! # Custom Characters
//!
//! The ImageWriter II can hold user-defined glyphs in RAM, addressed at low
//! ASCII points 32-126 or high ASCII points 160-239, as per Chapter 7 of the
//! ImageWriter II Technical Reference Manual.
//!
//! ## Loading Protocol
//!
//! A load transfer is framed by `ESC I` and `CTRL D`. Each glyph inside the
//! frame is its code point, a width letter (`A`-`P` for the top 8 of the 9
//! print wires, `a`-`p` for the bottom 8), then 1-16 dot-column bytes.
//!
//! ## Printing
//!
//! | Command | Effect |
//! |---------|--------|
//! | `ESC '` | print custom characters from their own points |
//! | `ESC *` | map low ASCII onto the custom set |
//! | `ESC $` | back to normal (shared with MouseText) |

use crate::error::Error;
use crate::protocol::command::Command;

/// A reference to a custom character slot.
///
/// Valid points are 32-126 (low ASCII) and 160-239 (high ASCII).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomCharacter {
    point: u8,
}

impl CustomCharacter {
    pub fn new(point: u8) -> Result<Self, Error> {
        if (32..=126).contains(&point) || (160..=239).contains(&point) {
            Ok(Self { point })
        } else {
            Err(Error::InvalidCodePoint(u32::from(point)))
        }
    }

    #[inline]
    pub fn point(self) -> u8 {
        self.point
    }

    /// The high-ASCII point mapped down to low ASCII (point - 128), as per
    /// page 45 of the ImageWriter II Technical Reference Manual. Required
    /// when the eighth data bit is ignored. Low-ASCII points are returned
    /// unchanged.
    pub fn low_ascii(self) -> u8 {
        if self.point >= 160 {
            self.point - 128
        } else {
            self.point
        }
    }
}

/// Which 8 of the 9 print wires a glyph's dot columns address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wires {
    #[default]
    Top,
    Bottom,
}

/// The maximum dot width reserved per custom character. Selecting a width
/// erases existing custom characters from memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxWidth {
    Eight,
    Sixteen,
}

/// A glyph definition ready for loading: a slot, its dot columns, and the
/// wire group they address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub character: CustomCharacter,
    pub columns: Vec<u8>,
    pub wires: Wires,
}

impl Glyph {
    pub fn new(character: CustomCharacter, columns: impl Into<Vec<u8>>, wires: Wires) -> Self {
        Self {
            character,
            columns: columns.into(),
            wires,
        }
    }

    // point + width letter + dot columns
    fn encode_into(&self, out: &mut Vec<u8>) -> Result<(), Error> {
        let width = self.columns.len();
        if !(1..=16).contains(&width) {
            return Err(Error::InvalidGlyphWidth(width));
        }

        let base = match self.wires {
            Wires::Top => b'A',
            Wires::Bottom => b'a',
        };

        out.push(self.character.point());
        out.push(base + (width as u8 - 1));
        out.extend_from_slice(&self.columns);
        Ok(())
    }
}

/// # Set Maximum Custom Character Width (ESC - / ESC +)
///
/// Reserve 8 or 16 dots of memory per character, as per page 85 of the
/// ImageWriter II Technical Reference Manual. Erases any loaded characters.
pub fn set_max_width(width: MaxWidth) -> Command {
    match width {
        MaxWidth::Eight => Command::escape(*b"-"),
        MaxWidth::Sixteen => Command::escape(*b"+"),
    }
}

/// # Load Custom Characters (ESC I ... CTRL D)
///
/// Build the full load transfer for a series of glyphs, as per page 96 of
/// the ImageWriter II Technical Reference Manual.
///
/// The transfer is returned as a single raw command: it uses 8-bit data and
/// must reach the device without interleaved traffic.
pub fn load(glyphs: &[Glyph]) -> Result<Command, Error> {
    let mut data = vec![crate::protocol::command::ESC, b'I'];
    for glyph in glyphs {
        glyph.encode_into(&mut data)?;
    }
    // CTRL-D ends the transfer
    data.push(0x04);
    Ok(Command::raw(data))
}

/// # Print Custom Characters (ESC ')
///
/// Print custom characters from their own code points.
pub fn enable() -> Command {
    Command::escape(*b"'")
}

/// # Map Custom Characters (ESC *)
///
/// Map low ASCII onto the custom character set.
pub fn enable_map() -> Command {
    Command::escape(*b"*")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_point_validation() {
        assert!(CustomCharacter::new(31).is_err());
        assert!(CustomCharacter::new(32).is_ok());
        assert!(CustomCharacter::new(126).is_ok());
        assert!(CustomCharacter::new(127).is_err());
        assert!(CustomCharacter::new(159).is_err());
        assert!(CustomCharacter::new(160).is_ok());
        assert!(CustomCharacter::new(239).is_ok());
        assert!(CustomCharacter::new(240).is_err());
    }

    #[test]
    fn test_low_ascii() {
        assert_eq!(CustomCharacter::new(160).unwrap().low_ascii(), 32);
        assert_eq!(CustomCharacter::new(239).unwrap().low_ascii(), 111);
        assert_eq!(CustomCharacter::new(65).unwrap().low_ascii(), 65);
    }

    #[test]
    fn test_max_width_commands() {
        assert_eq!(set_max_width(MaxWidth::Eight).to_bytes(), vec![0x1B, b'-']);
        assert_eq!(set_max_width(MaxWidth::Sixteen).to_bytes(), vec![0x1B, b'+']);
    }

    #[test]
    fn test_load_framing() {
        let character = CustomCharacter::new(65).unwrap();
        let glyph = Glyph::new(character, vec![0xFF, 0x81, 0xFF], Wires::Top);
        let cmd = load(&[glyph]).unwrap();

        // ESC I, point, width letter C (3 columns), data, CTRL D
        assert_eq!(
            cmd.to_bytes(),
            vec![0x1B, b'I', 65, b'C', 0xFF, 0x81, 0xFF, 0x04]
        );
    }

    #[test]
    fn test_load_bottom_wires_width_letters() {
        let character = CustomCharacter::new(200).unwrap();
        let glyph = Glyph::new(character, vec![0xAA; 16], Wires::Bottom);
        let bytes = load(&[glyph]).unwrap().to_bytes();

        assert_eq!(bytes[2], 200);
        assert_eq!(bytes[3], b'p'); // 16 columns, bottom wires
        assert_eq!(bytes.len(), 2 + 2 + 16 + 1);
    }

    #[test]
    fn test_load_rejects_bad_width() {
        let character = CustomCharacter::new(65).unwrap();
        let too_wide = Glyph::new(character, vec![0u8; 17], Wires::Top);
        assert!(matches!(
            load(&[too_wide]).unwrap_err(),
            Error::InvalidGlyphWidth(17)
        ));

        let empty = Glyph::new(character, Vec::new(), Wires::Top);
        assert!(matches!(
            load(&[empty]).unwrap_err(),
            Error::InvalidGlyphWidth(0)
        ));
    }

    #[test]
    fn test_enable_commands() {
        assert_eq!(enable().to_bytes(), vec![0x1B, b'\'']);
        assert_eq!(enable_map().to_bytes(), vec![0x1B, b'*']);
    }
}
