//! # Serial Transport
//!
//! Communication with the printer over an RS-232 serial line.
//!
//! ## Wiring
//!
//! The printer signals "stop sending" with its DTR line. Apple's manuals
//! describe wiring DTR/DSR to the host's DSR/DCD and DTR, an older regime
//! where those lines stood in for flow control. On a modern system DSR and
//! DTR usually cannot be driven directly, so wire the printer's DTR and DSR
//! to the host's CTS and RTS lines instead and use hardware handshaking.
//!
//! The printer runs half-duplex: it waits for the host's RTS to de-assert
//! before processing its buffer, so RTS is raised for each write and dropped
//! again afterwards.
//!
//! XON/XOFF flow control ignores the modem lines and carries the same
//! semantics in-band.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data passes unmodified:
//!
//! - **No input processing**: disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity, one stop bit
//! - **No echo**: disable ECHO, ECHONL
//! - **Non-canonical mode**: disable ICANON (no line buffering)

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::transport::Transport;

/// The baud rates the printer's DIP switches can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BaudRate {
    #[serde(rename = "300")]
    Baud300,
    #[serde(rename = "1200")]
    Baud1200,
    #[serde(rename = "2400")]
    Baud2400,
    #[default]
    #[serde(rename = "9600")]
    Baud9600,
}

impl BaudRate {
    pub fn bits_per_second(self) -> u32 {
        match self {
            BaudRate::Baud300 => 300,
            BaudRate::Baud1200 => 1200,
            BaudRate::Baud2400 => 2400,
            BaudRate::Baud9600 => 9600,
        }
    }

    #[cfg(unix)]
    fn speed(self) -> libc::speed_t {
        match self {
            BaudRate::Baud300 => libc::B300,
            BaudRate::Baud1200 => libc::B1200,
            BaudRate::Baud2400 => libc::B2400,
            BaudRate::Baud9600 => libc::B9600,
        }
    }
}

/// The flow control modes the printer supports.
///
/// XON/XOFF is untested against real hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowControl {
    #[default]
    RtsCts,
    XonXoff,
}

/// # Serial Printer Transport
///
/// Owns the tty and manages the half-duplex RTS discipline around writes.
///
/// ## Example
///
/// ```no_run
/// use imagewriter::protocol::device;
/// use imagewriter::transport::{BaudRate, FlowControl, SerialTransport, Transport};
///
/// let mut transport =
///     SerialTransport::open("/dev/ttyUSB0", BaudRate::Baud9600, FlowControl::RtsCts)?;
/// transport.send(&device::reset())?;
/// # Ok::<(), imagewriter::error::Error>(())
/// ```
pub struct SerialTransport {
    file: File,
    flow_control: FlowControl,
}

impl SerialTransport {
    /// Open and configure the serial device.
    ///
    /// ## Errors
    ///
    /// Returns an error if the device does not exist, the process lacks
    /// permission (dialout group on most Linux systems), or tty
    /// configuration fails.
    pub fn open<P: AsRef<Path>>(
        device: P,
        baud_rate: BaudRate,
        flow_control: FlowControl,
    ) -> Result<Self, Error> {
        let path = device.as_ref();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| Error::Transport(format!("Failed to open {}: {}", path.display(), e)))?;

        configure_tty(&file, baud_rate, flow_control)?;

        let mut transport = Self { file, flow_control };

        // Half-duplex: leave RTS dropped until there is data to send
        transport.set_rts(false)?;

        eprintln!(
            "Opened {} at {} baud ({:?} flow control)",
            path.display(),
            baud_rate.bits_per_second(),
            flow_control
        );

        Ok(transport)
    }

    /// Raise or drop the host's RTS line. Under XON/XOFF this is a no-op;
    /// the tty driver handles the in-band codes.
    #[cfg(unix)]
    fn set_rts(&mut self, asserted: bool) -> Result<(), Error> {
        if self.flow_control != FlowControl::RtsCts {
            return Ok(());
        }

        let fd = self.file.as_raw_fd();
        let bits: libc::c_int = libc::TIOCM_RTS;
        let request = if asserted {
            libc::TIOCMBIS
        } else {
            libc::TIOCMBIC
        };
        let result = unsafe { libc::ioctl(fd, request, &bits) };
        if result != 0 {
            return Err(Error::Transport(format!(
                "RTS ioctl failed: {}",
                io::Error::last_os_error()
            )));
        }
        Ok(())
    }

    #[cfg(not(unix))]
    fn set_rts(&mut self, _asserted: bool) -> Result<(), Error> {
        Ok(())
    }

    /// Read the modem status bits.
    #[cfg(unix)]
    fn modem_bits(&mut self) -> Result<libc::c_int, Error> {
        let fd = self.file.as_raw_fd();
        let mut bits: libc::c_int = 0;
        let result = unsafe { libc::ioctl(fd, libc::TIOCMGET, &mut bits) };
        if result != 0 {
            return Err(Error::Transport(format!(
                "TIOCMGET failed: {}",
                io::Error::last_os_error()
            )));
        }
        Ok(bits)
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        // OS would likely assert RTS on write, but just in case
        self.set_rts(true)?;

        self.file
            .write_all(bytes)
            .map_err(|e| Error::Transport(format!("Write failed: {}", e)))?;
        self.file
            .flush()
            .map_err(|e| Error::Transport(format!("Flush failed: {}", e)))?;

        // OS will not drop RTS unless data is being read, so do it here
        self.set_rts(false)?;

        Ok(())
    }

    #[cfg(unix)]
    fn ready_to_send(&mut self) -> Result<bool, Error> {
        Ok(self.modem_bits()? & libc::TIOCM_DSR != 0)
    }

    #[cfg(unix)]
    fn clear_to_send(&mut self) -> Result<bool, Error> {
        Ok(self.modem_bits()? & libc::TIOCM_CTS != 0)
    }

    #[cfg(not(unix))]
    fn ready_to_send(&mut self) -> Result<bool, Error> {
        Ok(true)
    }

    #[cfg(not(unix))]
    fn clear_to_send(&mut self) -> Result<bool, Error> {
        Ok(true)
    }
}

/// Configure the tty: raw mode, 8N1, the requested baud rate, and the
/// requested flow control.
#[cfg(unix)]
fn configure_tty(file: &File, baud_rate: BaudRate, flow_control: FlowControl) -> Result<(), Error> {
    use std::mem::MaybeUninit;

    let fd = file.as_raw_fd();

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(Error::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: disable all processing
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8 data bits, no parity, one stop bit, modem lines live
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB);
    termios.c_cflag |= libc::CS8 | libc::CREAD;

    match flow_control {
        FlowControl::RtsCts => {
            termios.c_cflag |= libc::CRTSCTS;
        }
        FlowControl::XonXoff => {
            termios.c_cflag &= !libc::CRTSCTS;
            termios.c_iflag |= libc::IXON | libc::IXOFF;
        }
    }

    unsafe {
        libc::cfsetispeed(&mut termios, baud_rate.speed());
        libc::cfsetospeed(&mut termios, baud_rate.speed());
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(Error::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty(
    _file: &File,
    _baud_rate: BaudRate,
    _flow_control: FlowControl,
) -> Result<(), Error> {
    // On non-Unix platforms, skip tty configuration
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
