//! # Device Control
//!
//! Whole-device commands: reset, select/deselect, line cancellation,
//! character repetition, self-identification, sensor and motion toggles,
//! and dot graphics.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `ESC c` | reset to defaults |
//! | `CTRL Q` / `CTRL S` | select / deselect |
//! | `CTRL X` | cancel the buffered line |
//! | `ESC R nnn c` | repeat a character |
//! | `ESC ?` | request the ID string |
//! | `ESC O` / `ESC o` | paper-out sensor on / off |
//! | `ESC >` / `ESC <` | unidirectional / bidirectional printing |
//! | `ESC l1` / `ESC l0` | CR insertion before LF/FF on / off |
//! | `ESC g` / `ESC G` | print dot graphics |

use crate::error::Error;
use crate::protocol::command::{self, Command, ESC};

/// # Reset (ESC c)
///
/// Print and clear the buffer, reset switches and configuration to their
/// defaults, and clear custom characters, as per page 87 of the
/// ImageWriter II Technical Reference Manual.
pub fn reset() -> Command {
    Command::escape(*b"c")
}

/// # Select (CTRL Q)
///
/// Equivalent to pressing the SELECT button. While deselected the printer
/// ignores everything except [`select`]. The printer only honors these when
/// the software select response switch is open; see
/// [`enable_software_select_response`](crate::protocol::switches::enable_software_select_response).
pub fn select() -> Command {
    Command::Control(0x11)
}

/// # Deselect (CTRL S)
///
/// Note that a deselected printer drops its DTR signal, so a host using
/// hardware handshaking must ignore that line to be able to reselect.
pub fn deselect() -> Command {
    Command::Control(0x13)
}

/// # Cancel Line (CTRL X)
///
/// Discard the currently buffered line: when this byte appears anywhere in
/// a buffered line, that line is not printed on the next print command. As
/// per page 85 of the ImageWriter II Technical Reference Manual.
pub fn cancel_line() -> Command {
    Command::Control(0x18)
}

/// # Repeat Character (ESC R)
///
/// Print one character `count` times, as per page 83 of the ImageWriter II
/// Technical Reference Manual. The count is a 3-digit field.
pub fn repeat_character(byte: u8, count: u32) -> Result<Command, Error> {
    let mut sequence = vec![b'R'];
    sequence.extend(command::format_number(count, 3)?);
    sequence.push(byte);
    Ok(Command::escape(sequence))
}

/// # Request Self-Identification (ESC ?)
///
/// Ask the printer to send its ID string, as per page 88 of the
/// ImageWriter II Technical Reference Manual. The request is not answered
/// until the printer receives a print command.
pub fn request_identification() -> Command {
    Command::escape(*b"?")
}

/// # Paper-Out Sensor (ESC O / ESC o)
///
/// When enabled (the default), running out of paper lights the error lamp
/// and deselects the printer. As per page 74 of the ImageWriter II
/// Technical Reference Manual.
pub fn set_paper_out_sensor(enabled: bool) -> Command {
    if enabled {
        Command::escape(*b"O")
    } else {
        Command::escape(*b"o")
    }
}

/// # Unidirectional Printing (ESC > / ESC <)
///
/// Print left-to-right only, for tighter column registration, as per page
/// 63 of the ImageWriter II Technical Reference Manual.
pub fn set_unidirectional_printing(unidirectional: bool) -> Command {
    if unidirectional {
        Command::escape(*b">")
    } else {
        Command::escape(*b"<")
    }
}

/// # Carriage Return Insertion (ESC l1 / ESC l0)
///
/// When enabled, a CR is inserted before every LF or FF, as per page 75 of
/// the ImageWriter II Technical Reference Manual. This is the opposite
/// direction from the auto-LF-after-CR software switch.
pub fn set_carriage_return_insertion(enabled: bool) -> Command {
    if enabled {
        Command::escape(*b"l1")
    } else {
        Command::escape(*b"l0")
    }
}

/// # Print Graphics (ESC g / ESC G)
///
/// Print a line of dot columns, as per page 105 of the ImageWriter II
/// Technical Reference Manual. Each data byte is one column of 8 dots.
///
/// A column count that is a multiple of 8 uses the short header (`ESC g`
/// with a 3-digit count of 8-column groups); otherwise the long header
/// (`ESC G` with a 4-digit column count). The header and data are one raw
/// command so the transport cannot split them.
pub fn print_graphics(data: &[u8]) -> Result<Command, Error> {
    let length = data.len() as u32;
    let mut bytes = vec![ESC];

    if length % 8 == 0 {
        bytes.push(b'g');
        bytes.extend(command::format_number(length / 8, 3)?);
    } else {
        bytes.push(b'G');
        bytes.extend(command::format_number(length, 4)?);
    }

    bytes.extend_from_slice(data);
    Ok(Command::raw(bytes))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reset() {
        assert_eq!(reset().to_bytes(), vec![0x1B, b'c']);
    }

    #[test]
    fn test_select_deselect() {
        assert_eq!(select().to_bytes(), vec![0x11]);
        assert_eq!(deselect().to_bytes(), vec![0x13]);
    }

    #[test]
    fn test_cancel_line() {
        assert_eq!(cancel_line().to_bytes(), vec![0x18]);
    }

    #[test]
    fn test_repeat_character() {
        let cmd = repeat_character(b'-', 72).unwrap();
        assert_eq!(cmd.to_bytes(), b"\x1bR072-".to_vec());
    }

    #[test]
    fn test_repeat_character_overflow() {
        assert!(matches!(
            repeat_character(b'-', 1000).unwrap_err(),
            Error::FieldOverflow { value: 1000, width: 3 }
        ));
    }

    #[test]
    fn test_request_identification() {
        assert_eq!(request_identification().to_bytes(), vec![0x1B, b'?']);
    }

    #[test]
    fn test_toggles() {
        assert_eq!(set_paper_out_sensor(true).to_bytes(), vec![0x1B, b'O']);
        assert_eq!(set_paper_out_sensor(false).to_bytes(), vec![0x1B, b'o']);
        assert_eq!(set_unidirectional_printing(true).to_bytes(), vec![0x1B, b'>']);
        assert_eq!(set_unidirectional_printing(false).to_bytes(), vec![0x1B, b'<']);
        assert_eq!(
            set_carriage_return_insertion(true).to_bytes(),
            b"\x1bl1".to_vec()
        );
        assert_eq!(
            set_carriage_return_insertion(false).to_bytes(),
            b"\x1bl0".to_vec()
        );
    }

    #[test]
    fn test_graphics_short_header() {
        let data = [0xFFu8; 16];
        let cmd = print_graphics(&data).unwrap();
        let bytes = cmd.to_bytes();
        assert_eq!(&bytes[..5], b"\x1bg002");
        assert_eq!(&bytes[5..], &data[..]);
    }

    #[test]
    fn test_graphics_long_header() {
        let data = [0xAAu8; 13];
        let cmd = print_graphics(&data).unwrap();
        let bytes = cmd.to_bytes();
        assert_eq!(&bytes[..6], b"\x1bG0013");
        assert_eq!(&bytes[6..], &data[..]);
    }

    #[test]
    fn test_graphics_is_one_raw_command() {
        let cmd = print_graphics(&[0x01, 0x02, 0x03]).unwrap();
        assert!(matches!(cmd, Command::Raw(_)));
        assert_eq!(cmd.len(), 2 + 4 + 3);
    }
}
