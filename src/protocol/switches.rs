//! # Software Switches
//!
//! The ImageWriter II keeps a 16-bit bank of persistent configuration bits,
//! the "software switches", as per Chapter 3 of the ImageWriter II Technical
//! Reference Manual. A closed switch is active; an open switch is inactive.
//!
//! ## Wire Format
//!
//! Two commands address the bank, each followed by exactly two payload bytes
//! (bank A, then bank B):
//!
//! | Command | Bytes | Effect |
//! |---------|-------|--------|
//! | Open | `ESC Z a b` | clear the named bits |
//! | Close | `ESC D a b` | set the named bits |
//!
//! Bits not named by either command are left unchanged.
//!
//! ## Bit Remapping
//!
//! Within each payload byte, switch bits are packed most-significant-first:
//! logical bit 0 lands in bit 7 of bank A, logical bit 8 in bit 7 of bank B,
//! and so on. This is a firmware quirk and is reproduced exactly; see the
//! worked example in the tests.
//!
//! ## Language Codes
//!
//! The active language font is a 3-bit sub-code spread over the first three
//! switches:
//!
//! | Code (1,2,3) | Language | Code | Language |
//! |------|----------|------|----------|
//! | 000 | American | 101 | Swedish |
//! | 110 | British | 100 | Italian |
//! | 001 | German | 111 | Spanish |
//! | 011 | French | 010 | Danish |

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::protocol::command::Command;

/// One configurable boolean device behavior, addressed by a single bit.
///
/// Bits 0-7 form bank A, bits 8-15 bank B. Positions not listed here are
/// unused by the firmware and always packed as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoftwareSwitch {
    // Bank A
    Language1,
    Language2,
    Language3,
    // Switch A-4 not used
    SoftwareSelectResponseDisabled,
    LfWhenLineFull,
    PrintCommandsIncludeLfFf,
    AutoLfAfterCr,
    // Bank B
    SlashedZero,
    // Switch B-2 not used
    PerforationSkipDisabled,
    // Switches B-4 and B-5 not used
    IgnoreEighthDataBit,
    // Switches B-7 and B-8 not used
}

impl SoftwareSwitch {
    /// Every defined switch, in bit order.
    pub const ALL: [SoftwareSwitch; 10] = [
        SoftwareSwitch::Language1,
        SoftwareSwitch::Language2,
        SoftwareSwitch::Language3,
        SoftwareSwitch::SoftwareSelectResponseDisabled,
        SoftwareSwitch::LfWhenLineFull,
        SoftwareSwitch::PrintCommandsIncludeLfFf,
        SoftwareSwitch::AutoLfAfterCr,
        SoftwareSwitch::SlashedZero,
        SoftwareSwitch::PerforationSkipDisabled,
        SoftwareSwitch::IgnoreEighthDataBit,
    ];

    /// The switch's bit value within the 16-bit bank.
    pub const fn bit(self) -> u16 {
        match self {
            SoftwareSwitch::Language1 => 1,
            SoftwareSwitch::Language2 => 1 << 1,
            SoftwareSwitch::Language3 => 1 << 2,
            SoftwareSwitch::SoftwareSelectResponseDisabled => 1 << 4,
            SoftwareSwitch::LfWhenLineFull => 1 << 5,
            SoftwareSwitch::PrintCommandsIncludeLfFf => 1 << 6,
            SoftwareSwitch::AutoLfAfterCr => 1 << 7,
            SoftwareSwitch::SlashedZero => 1 << 8,
            SoftwareSwitch::PerforationSkipDisabled => 1 << 10,
            SoftwareSwitch::IgnoreEighthDataBit => 1 << 13,
        }
    }
}

/// A set of software switches considered closed (active).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwitchSet(u16);

impl SwitchSet {
    pub const EMPTY: SwitchSet = SwitchSet(0);

    /// The set of every defined switch.
    pub fn all() -> SwitchSet {
        SoftwareSwitch::ALL.iter().copied().collect()
    }

    pub fn contains(self, switch: SoftwareSwitch) -> bool {
        self.0 & switch.bit() != 0
    }

    pub fn with(self, switch: SoftwareSwitch) -> SwitchSet {
        SwitchSet(self.0 | switch.bit())
    }

    pub fn union(self, other: SwitchSet) -> SwitchSet {
        SwitchSet(self.0 | other.0)
    }

    pub fn difference(self, other: SwitchSet) -> SwitchSet {
        SwitchSet(self.0 & !other.0)
    }

    /// The defined switches **not** in this set.
    pub fn complement(self) -> SwitchSet {
        SwitchSet::all().difference(self)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SoftwareSwitch> {
        SoftwareSwitch::ALL
            .into_iter()
            .filter(move |sw| self.contains(*sw))
    }
}

impl FromIterator<SoftwareSwitch> for SwitchSet {
    fn from_iter<I: IntoIterator<Item = SoftwareSwitch>>(iter: I) -> Self {
        let mut set = SwitchSet::EMPTY;
        for switch in iter {
            set = set.with(switch);
        }
        set
    }
}

impl<const N: usize> From<[SoftwareSwitch; N]> for SwitchSet {
    fn from(switches: [SoftwareSwitch; N]) -> Self {
        switches.into_iter().collect()
    }
}

// ============================================================================
// BANK PACKING
// ============================================================================

/// Pack a switch set into the two payload bytes of an open/close command.
///
/// Logical bit *i* is written most-significant-first within its bank: bank A
/// holds bits 0-7, bank B bits 8-15.
pub fn pack(switches: SwitchSet) -> [u8; 2] {
    let bits = switches.0;
    let mut bank_a: u8 = 0;
    let mut bank_b: u8 = 0;

    for i in 0..16 {
        if bits & (1 << i) != 0 {
            if i < 8 {
                bank_a |= 0x80 >> i;
            } else {
                bank_b |= (0x8000u16 >> i) as u8;
            }
        }
    }

    [bank_a, bank_b]
}

/// Recover a switch set from packed bank bytes. Inverse of [`pack`] for
/// every set of defined switches; unused bit positions are discarded.
pub fn unpack(banks: [u8; 2]) -> SwitchSet {
    let mut bits: u16 = 0;

    for i in 0..8 {
        if banks[0] & (0x80 >> i) != 0 {
            bits |= 1 << i;
        }
    }
    for i in 8..16 {
        if banks[1] & ((0x8000u16 >> i) as u8) != 0 {
            bits |= 1 << i;
        }
    }

    // Unused bit positions carry no switch; mask them off.
    SwitchSet(bits & SwitchSet::all().0)
}

// ============================================================================
// COMMANDS
// ============================================================================

/// # Open Software Switches (ESC Z a b)
///
/// Clear (deactivate) the named switches; all others are left unchanged.
pub fn open(switches: SwitchSet) -> Command {
    let [a, b] = pack(switches);
    Command::escape(vec![b'Z', a, b])
}

/// # Close Software Switches (ESC D a b)
///
/// Set (activate) the named switches; all others are left unchanged.
pub fn close(switches: SwitchSet) -> Command {
    let [a, b] = pack(switches);
    Command::escape(vec![b'D', a, b])
}

/// Drive the bank to exactly `target`: close the named switches and open
/// every other defined switch.
///
/// The order is open-then-close. The device applies the two commands
/// incrementally, and opening first guarantees no transient state where a
/// stale closed switch overlaps the new target.
pub fn set_switches(target: SwitchSet) -> [Command; 2] {
    [open(target.complement()), close(target)]
}

/// Language switches which should be closed for a language, as per page 32
/// of the ImageWriter II Technical Reference Manual.
pub fn language_switches(language: Language) -> SwitchSet {
    use SoftwareSwitch::{Language1, Language2, Language3};

    match language {
        Language::American => SwitchSet::EMPTY,
        Language::British => SwitchSet::from([Language1, Language2]),
        Language::German => SwitchSet::from([Language3]),
        Language::French => SwitchSet::from([Language2, Language3]),
        Language::Swedish => SwitchSet::from([Language1, Language3]),
        Language::Italian => SwitchSet::from([Language1]),
        Language::Spanish => SwitchSet::from([Language1, Language2, Language3]),
        Language::Danish => SwitchSet::from([Language2]),
    }
}

/// The language switches which should be opened for a language: the
/// complement of [`language_switches`] over the three language bits.
pub fn open_language_switches(language: Language) -> SwitchSet {
    SwitchSet::from([
        SoftwareSwitch::Language1,
        SoftwareSwitch::Language2,
        SoftwareSwitch::Language3,
    ])
    .difference(language_switches(language))
}

/// Select a language font by toggling only the three language switches.
/// Open-then-close, like [`set_switches`].
pub fn set_language(language: Language) -> [Command; 2] {
    [
        open(open_language_switches(language)),
        close(language_switches(language)),
    ]
}

// ============================================================================
// NAMED TOGGLES
// ============================================================================
//
// Single-behavior helpers, as per page 34 of the ImageWriter II Technical
// Reference Manual. Each touches exactly one switch.

/// Enable Software Select-Deselect Response.
pub fn enable_software_select_response() -> Command {
    open(SwitchSet::from([
        SoftwareSwitch::SoftwareSelectResponseDisabled,
    ]))
}

/// Disable Software Select-Deselect Response.
pub fn disable_software_select_response() -> Command {
    close(SwitchSet::from([
        SoftwareSwitch::SoftwareSelectResponseDisabled,
    ]))
}

/// Insert a line feed automatically when the line is full.
pub fn enable_lf_when_line_full() -> Command {
    close(SwitchSet::from([SoftwareSwitch::LfWhenLineFull]))
}

pub fn disable_lf_when_line_full() -> Command {
    open(SwitchSet::from([SoftwareSwitch::LfWhenLineFull]))
}

/// Treat LF and FF as print commands.
pub fn enable_lf_ff_print_commands() -> Command {
    close(SwitchSet::from([SoftwareSwitch::PrintCommandsIncludeLfFf]))
}

pub fn disable_lf_ff_print_commands() -> Command {
    open(SwitchSet::from([SoftwareSwitch::PrintCommandsIncludeLfFf]))
}

/// Insert an automatic LF after each CR.
pub fn enable_auto_lf_after_cr() -> Command {
    close(SwitchSet::from([SoftwareSwitch::AutoLfAfterCr]))
}

pub fn disable_auto_lf_after_cr() -> Command {
    open(SwitchSet::from([SoftwareSwitch::AutoLfAfterCr]))
}

/// Print zeroes with a slash.
pub fn print_slashed_zero() -> Command {
    close(SwitchSet::from([SoftwareSwitch::SlashedZero]))
}

pub fn print_unslashed_zero() -> Command {
    open(SwitchSet::from([SoftwareSwitch::SlashedZero]))
}

/// Skip over page perforations automatically.
pub fn enable_perforation_skip() -> Command {
    open(SwitchSet::from([SoftwareSwitch::PerforationSkipDisabled]))
}

pub fn disable_perforation_skip() -> Command {
    close(SwitchSet::from([SoftwareSwitch::PerforationSkipDisabled]))
}

/// Ignore the eighth data bit of each byte sent.
///
/// This setting is for the benefit of hosts that cannot transmit an eighth
/// bit. Note that the printer automatically switches to 8-bit handling when
/// an escape sequence uses 8-bit data, such as custom characters and
/// graphics.
pub fn ignore_eighth_data_bit() -> Command {
    close(SwitchSet::from([SoftwareSwitch::IgnoreEighthDataBit]))
}

pub fn include_eighth_data_bit() -> Command {
    open(SwitchSet::from([SoftwareSwitch::IgnoreEighthDataBit]))
}

// ============================================================================
// SETTINGS PROJECTION
// ============================================================================

/// Software switch settings projected into named fields.
///
/// [`SwitchSettings::from_switches`] and [`SwitchSettings::to_switches`] are
/// mutual inverses for every value this crate produces; the language field
/// covers all eight legal 3-bit codes, so no closed-switch combination the
/// projection emits is ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSettings {
    pub language: Language,
    pub software_select_response_disabled: bool,
    pub lf_when_line_full: bool,
    pub print_commands_include_lf_ff: bool,
    pub auto_lf_after_cr: bool,
    pub slashed_zero: bool,
    pub perforation_skip_disabled: bool,
    pub ignore_eighth_data_bit: bool,
}

impl SwitchSettings {
    /// The switches closed from the factory, as per page 32 of the
    /// ImageWriter II Technical Reference Manual (North American defaults:
    /// American language, perforation skip off, no automatic LF).
    pub fn defaults() -> Self {
        Self {
            language: Language::American,
            software_select_response_disabled: true,
            lf_when_line_full: false,
            print_commands_include_lf_ff: true,
            auto_lf_after_cr: false,
            slashed_zero: false,
            perforation_skip_disabled: true,
            ignore_eighth_data_bit: true,
        }
    }

    /// Decode the language from the three language switches.
    pub fn language_from_switches(switches: SwitchSet) -> Language {
        let mut key = 0u8;
        if switches.contains(SoftwareSwitch::Language1) {
            key |= 0b100;
        }
        if switches.contains(SoftwareSwitch::Language2) {
            key |= 0b010;
        }
        if switches.contains(SoftwareSwitch::Language3) {
            key |= 0b001;
        }

        // The table is total over 3 bits, so every pattern decodes.
        match key {
            0b000 => Language::American,
            0b110 => Language::British,
            0b001 => Language::German,
            0b011 => Language::French,
            0b101 => Language::Swedish,
            0b100 => Language::Italian,
            0b111 => Language::Spanish,
            0b010 => Language::Danish,
            _ => unreachable!("3-bit language code"),
        }
    }

    /// Project a closed-switch set into named settings.
    pub fn from_switches(switches: SwitchSet) -> Self {
        Self {
            language: Self::language_from_switches(switches),
            software_select_response_disabled: switches
                .contains(SoftwareSwitch::SoftwareSelectResponseDisabled),
            lf_when_line_full: switches.contains(SoftwareSwitch::LfWhenLineFull),
            print_commands_include_lf_ff: switches
                .contains(SoftwareSwitch::PrintCommandsIncludeLfFf),
            auto_lf_after_cr: switches.contains(SoftwareSwitch::AutoLfAfterCr),
            slashed_zero: switches.contains(SoftwareSwitch::SlashedZero),
            perforation_skip_disabled: switches
                .contains(SoftwareSwitch::PerforationSkipDisabled),
            ignore_eighth_data_bit: switches.contains(SoftwareSwitch::IgnoreEighthDataBit),
        }
    }

    /// The closed-switch set these settings describe.
    pub fn to_switches(self) -> SwitchSet {
        let mut switches = language_switches(self.language);

        if self.software_select_response_disabled {
            switches = switches.with(SoftwareSwitch::SoftwareSelectResponseDisabled);
        }
        if self.lf_when_line_full {
            switches = switches.with(SoftwareSwitch::LfWhenLineFull);
        }
        if self.print_commands_include_lf_ff {
            switches = switches.with(SoftwareSwitch::PrintCommandsIncludeLfFf);
        }
        if self.auto_lf_after_cr {
            switches = switches.with(SoftwareSwitch::AutoLfAfterCr);
        }
        if self.slashed_zero {
            switches = switches.with(SoftwareSwitch::SlashedZero);
        }
        if self.perforation_skip_disabled {
            switches = switches.with(SoftwareSwitch::PerforationSkipDisabled);
        }
        if self.ignore_eighth_data_bit {
            switches = switches.with(SoftwareSwitch::IgnoreEighthDataBit);
        }

        switches
    }

    /// The pair of commands driving the device to exactly these settings.
    pub fn apply(self) -> [Command; 2] {
        set_switches(self.to_switches())
    }
}

impl Default for SwitchSettings {
    fn default() -> Self {
        Self::defaults()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn every_subset() -> impl Iterator<Item = SwitchSet> {
        (0u16..1 << SoftwareSwitch::ALL.len()).map(|mask| {
            SoftwareSwitch::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, sw)| sw)
                .collect()
        })
    }

    #[test]
    fn test_pack_unpack_round_trip_all_subsets() {
        // 10 defined switches, 1024 subsets
        for set in every_subset() {
            assert_eq!(unpack(pack(set)), set);
        }
    }

    #[test]
    fn test_worked_example_from_manual() {
        // Closing this set and opening its complement is the factory default
        // configuration for a British printer with every print option on.
        let closed = SwitchSet::from([
            SoftwareSwitch::Language1,
            SoftwareSwitch::SoftwareSelectResponseDisabled,
            SoftwareSwitch::LfWhenLineFull,
            SoftwareSwitch::PrintCommandsIncludeLfFf,
            SoftwareSwitch::AutoLfAfterCr,
            SoftwareSwitch::PerforationSkipDisabled,
            SoftwareSwitch::IgnoreEighthDataBit,
        ]);

        assert_eq!(pack(closed), [0b1000_1111, 0b0010_0100]);
        assert_eq!(pack(closed.complement()), [0b0110_0000, 0b1000_0000]);
    }

    #[test]
    fn test_open_close_wire_format() {
        let set = SwitchSet::from([SoftwareSwitch::Language1]);
        assert_eq!(open(set).to_bytes(), vec![0x1B, b'Z', 0x80, 0x00]);
        assert_eq!(close(set).to_bytes(), vec![0x1B, b'D', 0x80, 0x00]);
    }

    #[test]
    fn test_set_switches_opens_then_closes() {
        let target = SwitchSet::from([SoftwareSwitch::AutoLfAfterCr]);
        let [first, second] = set_switches(target);

        let [a, b] = pack(target.complement());
        assert_eq!(first.to_bytes(), vec![0x1B, b'Z', a, b]);
        assert_eq!(second.to_bytes(), vec![0x1B, b'D', 0x01, 0x00]);
    }

    #[test]
    fn test_set_switches_is_idempotent() {
        // Applying the same toggle twice names the same bits both times, so
        // the device state after two applications equals one application.
        let target = SwitchSet::from([
            SoftwareSwitch::SlashedZero,
            SoftwareSwitch::LfWhenLineFull,
        ]);
        assert_eq!(set_switches(target), set_switches(target));
    }

    #[test]
    fn test_language_codes() {
        use SoftwareSwitch::{Language1, Language2, Language3};

        assert_eq!(language_switches(Language::American), SwitchSet::EMPTY);
        assert_eq!(
            language_switches(Language::British),
            SwitchSet::from([Language1, Language2])
        );
        assert_eq!(
            language_switches(Language::Spanish),
            SwitchSet::from([Language1, Language2, Language3])
        );
        assert_eq!(
            open_language_switches(Language::British),
            SwitchSet::from([Language3])
        );
        assert_eq!(
            open_language_switches(Language::American),
            SwitchSet::from([Language1, Language2, Language3])
        );
    }

    #[test]
    fn test_language_round_trip() {
        for language in Language::ALL {
            assert_eq!(
                SwitchSettings::language_from_switches(language_switches(language)),
                language
            );
        }
    }

    #[test]
    fn test_set_language_touches_only_language_bits() {
        let [open_cmd, close_cmd] = set_language(Language::German);
        // German is code 001: open switches 1-1 and 1-2, close 1-3
        assert_eq!(open_cmd.to_bytes(), vec![0x1B, b'Z', 0b1100_0000, 0x00]);
        assert_eq!(close_cmd.to_bytes(), vec![0x1B, b'D', 0b0010_0000, 0x00]);
    }

    #[test]
    fn test_named_toggles() {
        assert_eq!(
            enable_auto_lf_after_cr().to_bytes(),
            vec![0x1B, b'D', 0x01, 0x00]
        );
        assert_eq!(
            disable_auto_lf_after_cr().to_bytes(),
            vec![0x1B, b'Z', 0x01, 0x00]
        );
        assert_eq!(
            print_slashed_zero().to_bytes(),
            vec![0x1B, b'D', 0x00, 0x80]
        );
        assert_eq!(
            ignore_eighth_data_bit().to_bytes(),
            vec![0x1B, b'D', 0x00, 0x04]
        );
        assert_eq!(
            enable_perforation_skip().to_bytes(),
            vec![0x1B, b'Z', 0x00, 0x20]
        );
    }

    #[test]
    fn test_settings_projection_round_trip() {
        // Field replacement over defaults reaches a representative sample of
        // the legal settings space.
        let mut samples = vec![SwitchSettings::defaults()];
        for language in Language::ALL {
            let mut s = SwitchSettings::defaults();
            s.language = language;
            s.slashed_zero = true;
            samples.push(s);

            let mut s = SwitchSettings::defaults();
            s.language = language;
            s.auto_lf_after_cr = true;
            s.ignore_eighth_data_bit = false;
            samples.push(s);
        }

        for settings in samples {
            assert_eq!(SwitchSettings::from_switches(settings.to_switches()), settings);
        }
    }

    #[test]
    fn test_defaults_closed_set() {
        let closed = SwitchSettings::defaults().to_switches();
        assert!(closed.contains(SoftwareSwitch::SoftwareSelectResponseDisabled));
        assert!(closed.contains(SoftwareSwitch::PrintCommandsIncludeLfFf));
        assert!(closed.contains(SoftwareSwitch::IgnoreEighthDataBit));
        assert!(closed.contains(SoftwareSwitch::PerforationSkipDisabled));
        assert!(!closed.contains(SoftwareSwitch::AutoLfAfterCr));
        assert!(!closed.contains(SoftwareSwitch::Language1));
    }

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = SwitchSettings::defaults();
        let json = serde_json::to_string(&settings).unwrap();
        let back: SwitchSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
