//! # MouseText Characters
//!
//! MouseText is a fixed 32-glyph special character set occupying device code
//! points 192-223, as per page 150 of the ImageWriter II Technical Reference
//! Manual. With mapping enabled (`ESC &`) the glyphs can also be reached
//! from low ASCII, which matters when the eighth data bit is ignored.
//!
//! Many of these glyphs were later unified into the Symbols for Legacy
//! Computing Unicode block, though some suffer from false unification;
//! [`MouseTextCharacter::from_unicode`] covers the glyphs with an undisputed
//! Unicode identity.

use crate::protocol::command::Command;

/// MouseText characters, by device code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseTextCharacter {
    DarkApple = 192,
    LightApple = 193,
    ArrowheadShapedPointer = 194,
    Hourglass = 195,
    CheckMark = 196,
    InverseCheckMark = 197,
    DownwardsArrowWithTipLeftwards = 198,
    TitleBar = 199,
    LeftwardsArrow = 200,
    Ellipsis = 201,
    DownwardsArrow = 202,
    UpwardsArrow = 203,
    UpperOneEighthBlock = 204,
    CarriageReturn = 205,
    FullBlock = 206,
    LeftwardsArrowAndUpperAndLowerOneEighthBlock = 207,
    RightwardsArrowAndUpperAndLowerOneEighthBlock = 208,
    DownwardsArrowAndRightOneEighthBlock = 209,
    UpwardsArrowAndRightOneEighthBlock = 210,
    HorizontalOneEighthBlock = 211,
    LeftAndLowerOneEighthBlock = 212,
    RightwardsArrow = 213,
    LeftHalfBlock = 214,
    RightHalfBlock = 215,
    LeftHalfFolder = 216,
    RightHalfFolder = 217,
    RightOneEighthBlock = 218,
    BlackDiamond = 219,
    UpperAndLowerOneEighthBlock = 220,
    VoidedGreekCross = 221,
    RightOpenSquaredDot = 222,
    LeftOneEighthBlock = 223,
}

impl MouseTextCharacter {
    /// The device code point, in the 192-223 range.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up the MouseText glyph for a Unicode character, if it has one.
    ///
    /// This is the table used by tokenization: any of these characters in an
    /// input string is treated as MouseText rather than passed to a language
    /// font.
    pub fn from_unicode(ch: char) -> Option<Self> {
        let glyph = match ch {
            '⌛' => MouseTextCharacter::Hourglass,
            '←' => MouseTextCharacter::LeftwardsArrow,
            '…' => MouseTextCharacter::Ellipsis,
            '↓' => MouseTextCharacter::DownwardsArrow,
            '↑' => MouseTextCharacter::UpwardsArrow,
            '↵' => MouseTextCharacter::CarriageReturn,
            '▉' => MouseTextCharacter::FullBlock,
            '→' => MouseTextCharacter::RightwardsArrow,
            '▕' => MouseTextCharacter::RightOneEighthBlock,
            '◆' => MouseTextCharacter::BlackDiamond,
            '▏' => MouseTextCharacter::LeftOneEighthBlock,
            _ => return None,
        };
        Some(glyph)
    }

    /// The glyph's code point mapped to low ASCII (point - 128), as per page
    /// 40 of the ImageWriter II Technical Reference Manual. Required when
    /// the eighth data bit is ignored.
    #[inline]
    pub fn low_ascii(self) -> u8 {
        self.code() - 128
    }
}

/// Check if a code point is MouseText, as per page 150 of the ImageWriter II
/// Technical Reference Manual.
#[inline]
pub fn is_mousetext(point: u8) -> bool {
    (192..=223).contains(&point)
}

/// # Enable MouseText Mapping (ESC &)
///
/// Map subsequent low-ASCII points onto the MouseText glyphs.
pub fn enable_map() -> Command {
    Command::escape(*b"&")
}

/// # Disable Mapping (ESC $)
///
/// Return low ASCII to its normal interpretation. Shared with custom
/// character mapping.
pub fn disable_map() -> Command {
    Command::escape(*b"$")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_points_span_table() {
        assert_eq!(MouseTextCharacter::DarkApple.code(), 192);
        assert_eq!(MouseTextCharacter::FullBlock.code(), 206);
        assert_eq!(MouseTextCharacter::LeftOneEighthBlock.code(), 223);
    }

    #[test]
    fn test_is_mousetext_bounds() {
        assert!(!is_mousetext(191));
        assert!(is_mousetext(192));
        assert!(is_mousetext(223));
        assert!(!is_mousetext(224));
    }

    #[test]
    fn test_unicode_lookup() {
        assert_eq!(
            MouseTextCharacter::from_unicode('◆'),
            Some(MouseTextCharacter::BlackDiamond)
        );
        assert_eq!(
            MouseTextCharacter::from_unicode('…'),
            Some(MouseTextCharacter::Ellipsis)
        );
        assert_eq!(MouseTextCharacter::from_unicode('a'), None);
        assert_eq!(MouseTextCharacter::from_unicode('£'), None);
    }

    #[test]
    fn test_low_ascii_mapping() {
        assert_eq!(MouseTextCharacter::DarkApple.low_ascii(), 64);
        assert_eq!(MouseTextCharacter::LeftOneEighthBlock.low_ascii(), 95);
    }

    #[test]
    fn test_map_commands() {
        assert_eq!(enable_map().to_bytes(), vec![0x1B, b'&']);
        assert_eq!(disable_map().to_bytes(), vec![0x1B, b'$']);
    }
}
