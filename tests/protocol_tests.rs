//! # Protocol Integration Tests
//!
//! Byte-exact checks of complete command sequences: the switch bank wire
//! format, full encoder runs, page setup sequences, and the printer facade
//! driving a mock transport.

use pretty_assertions::assert_eq;

use imagewriter::language::Language;
use imagewriter::pitch::Pitch;
use imagewriter::printer::Printer;
use imagewriter::protocol::encoder::CharacterEncoder;
use imagewriter::protocol::geometry::{LeftMargin, PageLength};
use imagewriter::protocol::switches::{self, SoftwareSwitch, SwitchSet, SwitchSettings};
use imagewriter::protocol::{command, device, style};
use imagewriter::transport::Transport;
use imagewriter::units::Distance;
use imagewriter::Error;

const ESC: u8 = 0x1B;

// ============================================================================
// SWITCH BANK
// ============================================================================

#[test]
fn switch_toggle_wire_bytes() {
    // Closing {Language1, SSRD, LfWhenLineFull, PCILF, AutoLF, PSD, IEDB}
    // and opening the complement, byte for byte.
    let closed = SwitchSet::from([
        SoftwareSwitch::Language1,
        SoftwareSwitch::SoftwareSelectResponseDisabled,
        SoftwareSwitch::LfWhenLineFull,
        SoftwareSwitch::PrintCommandsIncludeLfFf,
        SoftwareSwitch::AutoLfAfterCr,
        SoftwareSwitch::PerforationSkipDisabled,
        SoftwareSwitch::IgnoreEighthDataBit,
    ]);

    let [open_cmd, close_cmd] = switches::set_switches(closed);
    assert_eq!(
        open_cmd.to_bytes(),
        vec![ESC, b'Z', 0b0110_0000, 0b1000_0000]
    );
    assert_eq!(
        close_cmd.to_bytes(),
        vec![ESC, b'D', 0b1000_1111, 0b0010_0100]
    );
}

#[test]
fn factory_default_settings_round_trip() {
    let defaults = SwitchSettings::defaults();
    assert_eq!(
        SwitchSettings::from_switches(defaults.to_switches()),
        defaults
    );
    assert_eq!(defaults.language, Language::American);
}

// ============================================================================
// CHARACTER ENCODER
// ============================================================================

#[test]
fn encoder_full_sequence_with_language_switch() {
    let mut encoder = CharacterEncoder::new(Language::American);
    let encoded = encoder.encode("Paid: £20");

    let mut expected = b"Paid: ".to_vec();
    // Into British for the pound sign
    expected.extend(command::to_bytes(&switches::set_language(Language::British)));
    expected.push(b'#');
    // Back to American for the digits
    expected.extend(command::to_bytes(&switches::set_language(
        Language::American,
    )));
    expected.extend(b"20");

    assert_eq!(encoded, expected);
}

#[test]
fn encoder_mousetext_run_is_minimal() {
    let mut encoder = CharacterEncoder::new(Language::American);
    let encoded = encoder.encode("↑↑↓↓");

    // One enable, four glyph bytes at their mapped low-ASCII points
    // (arrows 203 and 202, less 128), one disable.
    let expected = vec![ESC, b'&', 75, 75, 74, 74, ESC, b'$'];
    assert_eq!(encoded, expected);
}

#[test]
fn encoder_is_self_contained_across_calls() {
    let mut encoder = CharacterEncoder::new(Language::Danish);
    let first = encoder.encode("£");
    let second = encoder.encode("£");
    assert_eq!(first, second);
}

// ============================================================================
// PAGE SETUP
// ============================================================================

#[test]
fn page_setup_sequence() {
    // A letter-size page at Elite: 1 inch margin, 11 inch page.
    let mut data = Vec::new();
    data.extend(Pitch::Elite.select().to_bytes());
    data.extend(
        LeftMargin::new(Distance::inches(1.0), Pitch::Elite)
            .encode()
            .unwrap()
            .to_bytes(),
    );
    data.extend(
        PageLength::new(Distance::inches(11.0))
            .encode()
            .unwrap()
            .to_bytes(),
    );

    assert_eq!(data, b"\x1bE\x1bL012\x1bH1584".to_vec());
}

#[test]
fn margin_clamps_rather_than_overflowing() {
    // A margin past the right edge clamps to the last column instead of
    // producing an out-of-range field.
    let margin = LeftMargin::new(Distance::inches(20.0), Pitch::Pica);
    assert_eq!(margin.encode().unwrap().to_bytes(), b"\x1bL079".to_vec());
}

// ============================================================================
// PRINTER FACADE
// ============================================================================

/// In-memory transport recording each write as one unit.
#[derive(Default)]
struct MockTransport {
    writes: Vec<Vec<u8>>,
}

impl Transport for MockTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }

    fn ready_to_send(&mut self) -> Result<bool, Error> {
        Ok(true)
    }

    fn clear_to_send(&mut self) -> Result<bool, Error> {
        Ok(true)
    }
}

#[test]
fn printer_session_byte_stream() {
    let mut printer = Printer::new(MockTransport::default());

    printer.set_pitch(Pitch::Pica).unwrap();
    printer.set_quality(style::Quality::Draft).unwrap();
    printer.print_line("READY").unwrap();
    printer.reset().unwrap();

    let transport = printer.into_transport();
    let expected: Vec<u8> = [
        vec![ESC, b'N'],
        b"\x1ba1".to_vec(),
        b"READY".to_vec(),
        vec![0x0D],
        device::reset().to_bytes(),
    ]
    .concat();
    assert_eq!(transport.writes.concat(), expected);
}

#[test]
fn printer_never_splits_a_command() {
    let mut printer = Printer::new(MockTransport::default());

    // Graphics data is header + payload in one write.
    printer.print_graphics(&[0xFF; 24]).unwrap();

    let transport = printer.into_transport();
    assert_eq!(transport.writes.len(), 1);
    assert_eq!(&transport.writes[0][..5], b"\x1bg003");
    assert_eq!(transport.writes[0].len(), 5 + 24);
}

#[test]
fn settings_survive_json() {
    let mut settings = SwitchSettings::defaults();
    settings.language = Language::French;
    settings.slashed_zero = true;

    let json = serde_json::to_string(&settings).unwrap();
    let back: SwitchSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
}
