//! # Printer Facade
//!
//! [`Printer`] ties the protocol modules together behind one stateful
//! handle: it owns a [`Transport`], a [`CharacterEncoder`] for text, and the
//! host-side record of the device's pitch, switch settings, and tab stops.
//!
//! ## Example
//!
//! ```no_run
//! use imagewriter::pitch::Pitch;
//! use imagewriter::printer::Printer;
//! use imagewriter::transport::{BaudRate, FlowControl, SerialTransport};
//!
//! let transport =
//!     SerialTransport::open("/dev/ttyUSB0", BaudRate::Baud9600, FlowControl::RtsCts)?;
//! let mut printer = Printer::new(transport);
//!
//! printer.set_pitch(Pitch::Elite)?;
//! printer.print_line("hello from 1985")?;
//! # Ok::<(), imagewriter::error::Error>(())
//! ```

use crate::error::Error;
use crate::pitch::Pitch;
use crate::protocol::command::Command;
use crate::protocol::custom::{self, Glyph};
use crate::protocol::device;
use crate::protocol::encoder::CharacterEncoder;
use crate::protocol::geometry::{HeadPosition, LeftMargin, PageLength};
use crate::protocol::motion::{self, TabStops};
use crate::protocol::style::{Color, Quality};
use crate::protocol::switches::SwitchSettings;
use crate::transport::Transport;
use crate::units::Length;

/// A stateful handle to one printer.
///
/// The struct tracks the device state it has itself commanded; it cannot see
/// front-panel changes. [`Printer::reset`] resynchronizes both sides to the
/// factory defaults.
pub struct Printer<T: Transport> {
    transport: T,
    encoder: CharacterEncoder,
    settings: SwitchSettings,
    pitch: Pitch,
    tab_stops: TabStops,
}

impl<T: Transport> Printer<T> {
    /// A printer assumed to be in its factory default state.
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, SwitchSettings::defaults())
    }

    /// A printer whose switches are already known to match `settings`.
    pub fn with_settings(transport: T, settings: SwitchSettings) -> Self {
        let pitch = Pitch::default();
        Self {
            transport,
            encoder: CharacterEncoder::new(settings.language),
            settings,
            pitch,
            tab_stops: TabStops::new(pitch),
        }
    }

    pub fn settings(&self) -> SwitchSettings {
        self.settings
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn tab_stops(&mut self) -> &mut TabStops {
        &mut self.tab_stops
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Drive the switch bank to exactly `settings` and track the new
    /// default language.
    pub fn apply_settings(&mut self, settings: SwitchSettings) -> Result<(), Error> {
        self.transport.send_all(&settings.apply())?;
        self.settings = settings;
        self.encoder = CharacterEncoder::new(settings.language);
        Ok(())
    }

    /// Encode and send text, switching character modes as needed.
    pub fn print_text(&mut self, text: &str) -> Result<(), Error> {
        let encoded = self.encoder.encode(text);
        self.transport.send(&Command::raw(encoded))
    }

    /// Encode and send text followed by a carriage return, which triggers
    /// printing of the buffered line.
    pub fn print_line(&mut self, text: &str) -> Result<(), Error> {
        self.print_text(text)?;
        self.transport.send(&motion::CARRIAGE_RETURN)
    }

    /// Select a pitch. Existing tab stops no longer line up with character
    /// columns afterwards; the tracker is invalidated.
    pub fn set_pitch(&mut self, pitch: Pitch) -> Result<(), Error> {
        self.transport.send(&pitch.select())?;
        self.pitch = pitch;
        self.tab_stops.set_pitch(pitch);
        Ok(())
    }

    pub fn set_quality(&mut self, quality: Quality) -> Result<(), Error> {
        self.transport.send(&quality.select())
    }

    pub fn set_color(&mut self, color: Color) -> Result<(), Error> {
        self.transport.send(&color.select())
    }

    pub fn set_left_margin(&mut self, margin: impl Into<Length>) -> Result<(), Error> {
        let command = LeftMargin::new(margin, self.pitch).encode()?;
        self.transport.send(&command)
    }

    pub fn set_page_length(&mut self, length: impl Into<Length>) -> Result<(), Error> {
        let command = PageLength::new(length).encode()?;
        self.transport.send(&command)
    }

    /// Move the print head to an exact dot column at the current pitch.
    pub fn place_head(&mut self, position: impl Into<Length>) -> Result<(), Error> {
        let command = HeadPosition::new(position, self.pitch).encode()?;
        self.transport.send(&command)
    }

    pub fn set_tab_stops(&mut self, stops: &[Length]) -> Result<(), Error> {
        let command = self.tab_stops.set_many(stops)?;
        self.transport.send(&command)
    }

    pub fn clear_all_tab_stops(&mut self) -> Result<(), Error> {
        let command = self.tab_stops.clear_all();
        self.transport.send(&command)
    }

    /// Load custom character glyphs into printer RAM.
    pub fn load_custom_characters(&mut self, glyphs: &[Glyph]) -> Result<(), Error> {
        let command = custom::load(glyphs)?;
        self.transport.send(&command)
    }

    /// Print a line of dot graphics at the current pitch's resolution.
    pub fn print_graphics(&mut self, data: &[u8]) -> Result<(), Error> {
        let command = device::print_graphics(data)?;
        self.transport.send(&command)
    }

    /// Reset the device and the host-side state to factory defaults.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.transport.send(&device::reset())?;
        self.settings = SwitchSettings::defaults();
        self.encoder = CharacterEncoder::new(self.settings.language);
        self.pitch = Pitch::default();
        self.tab_stops = TabStops::new(self.pitch);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
