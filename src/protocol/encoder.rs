//! # Character Encoder
//!
//! The printer interprets incoming text through exactly one character
//! context at a time: a language font, the MouseText glyph set, or the
//! custom character set. Mixing them in one print job means switching
//! contexts with mode-transition commands around each run.
//!
//! [`CharacterEncoder`] takes an ordered token stream and produces the
//! byte-minimal equivalent: same-mode runs are buffered and emitted under a
//! single transition, a transition is emitted only when the required mode
//! actually changes, and the device is always returned to the configured
//! default language at the end so the next job starts from a known state.
//!
//! ## Mode Transitions
//!
//! | Transition | Bytes |
//! |------------|-------|
//! | enter MouseText (mapped) | `ESC &` |
//! | enter custom set | `ESC *` (mapped) or `ESC '` |
//! | leave MouseText/custom | `ESC $` |
//! | language change | switch bank commands (`ESC Z` + `ESC D`) |
//!
//! Language modes have no disable sequence - a language font can only be
//! replaced, never turned off - so two consecutive different languages cost
//! one transition, not two.

use crate::language::Language;
use crate::protocol::command;
use crate::protocol::custom::{self, CustomCharacter};
use crate::protocol::mousetext::{self, MouseTextCharacter};
use crate::protocol::switches;

/// A unit of encoder input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A plain character, printed through a language font.
    Char(char),
    /// A MouseText glyph.
    MouseText(MouseTextCharacter),
    /// A custom character reference.
    Custom(CustomCharacter),
}

/// Split a string into tokens. Characters with a MouseText identity become
/// MouseText tokens; everything else stays a plain character.
pub fn tokenize(text: &str) -> impl Iterator<Item = Token> + '_ {
    text.chars().map(|ch| match MouseTextCharacter::from_unicode(ch) {
        Some(glyph) => Token::MouseText(glyph),
        None => Token::Char(ch),
    })
}

/// The device's active character-interpretation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Language(Language),
    MouseText { map: bool },
    Custom { map: bool },
}

impl Mode {
    /// The bytes that activate this mode.
    pub fn enable(self) -> Vec<u8> {
        match self {
            Mode::Language(language) => command::to_bytes(&switches::set_language(language)),
            Mode::MouseText { map: true } => mousetext::enable_map().to_bytes(),
            Mode::MouseText { map: false } => Vec::new(),
            Mode::Custom { map: true } => custom::enable_map().to_bytes(),
            Mode::Custom { map: false } => custom::enable().to_bytes(),
        }
    }

    /// The bytes that deactivate this mode.
    ///
    /// Language modes cannot be turned off, only replaced, so their disable
    /// is always empty.
    pub fn disable(self) -> Vec<u8> {
        match self {
            Mode::Language(_) => Vec::new(),
            Mode::MouseText { map: true } => mousetext::disable_map().to_bytes(),
            Mode::MouseText { map: false } => Vec::new(),
            Mode::Custom { .. } => mousetext::disable_map().to_bytes(),
        }
    }
}

// ============================================================================
// LANGUAGE ALTERNATE ENCODINGS
// ============================================================================

// Which language fonts can print a given character through an alternate
// low-ASCII point. The manual documents the font layouts only partially;
// this table covers what has been verified against real hardware.
// TODO: print a test page per language and fill in the remaining alternates.

/// The languages that have an alternate encoding for `ch`. Empty for plain
/// ASCII and unknown characters.
pub fn languages_for(ch: char) -> &'static [Language] {
    match ch {
        '£' => &[Language::British],
        _ => &[],
    }
}

/// The low-ASCII point that prints `ch` under `language`, if the font has
/// one.
pub fn alternate(language: Language, ch: char) -> Option<u8> {
    match (language, ch) {
        (Language::British, '£') => Some(b'#'),
        _ => None,
    }
}

// ============================================================================
// ENCODER
// ============================================================================

/// An encoder for mixed text leveraging language fonts, MouseText, and
/// custom characters.
///
/// Exactly one [`Mode`] is active at any point. The most recent language
/// mode is remembered even while temporarily in MouseText or custom mode -
/// those are escapes from language mode, not independent states.
///
/// ## Example
///
/// ```
/// use imagewriter::protocol::encoder::CharacterEncoder;
/// use imagewriter::language::Language;
///
/// let mut encoder = CharacterEncoder::new(Language::American);
/// // Plain ASCII in the default language needs no transitions at all.
/// assert_eq!(encoder.encode("hello"), b"hello");
/// ```
#[derive(Debug, Clone)]
pub struct CharacterEncoder {
    default_language: Language,
    map_mousetext: bool,
    map_custom: bool,
    /// The most recent language mode, active or escaped-from.
    language: Language,
    mode: Mode,
}

impl CharacterEncoder {
    pub fn new(language: Language) -> Self {
        Self::with_mapping(language, true, true)
    }

    /// `map_mousetext` / `map_custom` choose the mapped form of the
    /// non-language modes, for hosts that ignore the eighth data bit: runs
    /// are bracketed by the map escapes and glyphs are addressed at their
    /// low-ASCII points (point - 128).
    pub fn with_mapping(language: Language, map_mousetext: bool, map_custom: bool) -> Self {
        Self {
            default_language: language,
            map_mousetext,
            map_custom,
            language,
            mode: Mode::Language(language),
        }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Encode a string. Equivalent to tokenizing it and calling
    /// [`CharacterEncoder::encode_tokens`].
    pub fn encode(&mut self, text: &str) -> Vec<u8> {
        let tokens: Vec<Token> = tokenize(text).collect();
        self.encode_tokens(tokens)
    }

    /// Encode an ordered token stream into a single byte sequence.
    ///
    /// Transitions are emitted only where the required mode changes, and the
    /// device is left in the default language regardless of where the stream
    /// ends, so successive calls compose.
    pub fn encode_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) -> Vec<u8> {
        let mut encoded: Vec<u8> = Vec::new();
        let mut buffer: Vec<u8> = Vec::new();

        for token in tokens {
            let next = self.next_mode(&token);

            if next != self.mode {
                // The buffer was encoded under the old mode; flush it before
                // the transition.
                encoded.append(&mut buffer);
                encoded.extend(self.mode.disable());
                encoded.extend(next.enable());

                if let Mode::Language(language) = next {
                    self.language = language;
                }
                self.mode = next;
            }

            buffer.push(self.token_byte(&token));
        }

        encoded.append(&mut buffer);
        encoded.extend(self.mode.disable());

        // Leave the device in the default language for the next call.
        if self.language != self.default_language {
            encoded.extend(Mode::Language(self.default_language).enable());
            self.language = self.default_language;
        }
        self.mode = Mode::Language(self.default_language);

        encoded
    }

    /// The mode a token requires, given the current language.
    fn next_mode(&self, token: &Token) -> Mode {
        match token {
            Token::MouseText(_) => Mode::MouseText {
                map: self.map_mousetext,
            },
            Token::Custom(_) => Mode::Custom {
                map: self.map_custom,
            },
            Token::Char(ch) => {
                let supported = languages_for(*ch);
                if supported.is_empty() {
                    // No special encoding needed; any font prints it, so
                    // fall back toward the default language.
                    if self.language == self.default_language {
                        Mode::Language(self.language)
                    } else {
                        Mode::Language(self.default_language)
                    }
                } else if supported.contains(&self.language) {
                    Mode::Language(self.language)
                } else {
                    Mode::Language(supported[0])
                }
            }
        }
    }

    /// The raw encoded byte for a token under the (already switched)
    /// current mode. In a mapped mode the glyph is addressed through its
    /// low-ASCII point (point - 128); that is what the map escapes are for.
    fn token_byte(&self, token: &Token) -> u8 {
        match token {
            Token::MouseText(glyph) => {
                if self.map_mousetext {
                    glyph.low_ascii()
                } else {
                    glyph.code()
                }
            }
            Token::Custom(character) => {
                if self.map_custom {
                    character.low_ascii()
                } else {
                    character.point()
                }
            }
            Token::Char(ch) => {
                if let Some(point) = alternate(self.language, *ch) {
                    point
                } else if ch.is_ascii() {
                    *ch as u8
                } else {
                    eprintln!(
                        "encoder: unmapped character '{}' (U+{:04X}), replacing with '?'",
                        ch, *ch as u32
                    );
                    b'?'
                }
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
