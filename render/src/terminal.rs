//! Terminal width providers.
//!
//! The help formatter never talks to the terminal directly. It asks a
//! [`TerminalWidth`] implementation and falls back to a default width when
//! the query fails.

use std::io;

use tracing::debug;

/// Width used when no terminal width is available.
pub const DEFAULT_DISPLAY_WIDTH: usize = 80;

/// Source of the current display column count.
pub trait TerminalWidth {
    /// Returns the number of columns, or an error if it cannot be
    /// determined.
    fn columns(&self) -> io::Result<usize>;
}

/// Queries the controlling terminal (`/dev/tty`) with `TIOCGWINSZ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtyWidth;

impl TerminalWidth for TtyWidth {
    #[cfg(unix)]
    fn columns(&self) -> io::Result<usize> {
        use std::fs::OpenOptions;
        use std::os::fd::AsRawFd;

        let tty = OpenOptions::new().read(true).write(true).open("/dev/tty")?;
        let mut size = libc::winsize {
            ws_row: 0,
            ws_col: 0,
            ws_xpixel: 0,
            ws_ypixel: 0,
        };
        // SAFETY: `tty` is an open descriptor for the lifetime of the call and
        // `size` is a valid, writable `winsize`.
        let rc = unsafe { libc::ioctl(tty.as_raw_fd(), libc::TIOCGWINSZ, &mut size) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        if size.ws_col == 0 {
            return Err(io::Error::other("terminal reports zero columns"));
        }
        Ok(usize::from(size.ws_col))
    }

    #[cfg(not(unix))]
    fn columns(&self) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "terminal width query is only implemented on unix",
        ))
    }
}

/// A fixed column count.
///
/// # Examples
///
/// ```
/// use cmdopts_render::{FixedWidth, TerminalWidth};
///
/// assert_eq!(FixedWidth(120).columns().unwrap(), 120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn columns(&self) -> io::Result<usize> {
        Ok(self.0)
    }
}

/// Reads `COLUMNS` from the environment, deferring to `inner` when it is
/// unset or not a positive number.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvWidth<P> {
    inner: P,
}

impl<P: TerminalWidth> EnvWidth<P> {
    /// Wraps `inner` as the provider used when `COLUMNS` is unusable.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: TerminalWidth> TerminalWidth for EnvWidth<P> {
    fn columns(&self) -> io::Result<usize> {
        match std::env::var("COLUMNS").ok().and_then(|raw| raw.trim().parse().ok()) {
            Some(columns) if columns > 0 => Ok(columns),
            _ => self.inner.columns(),
        }
    }
}

/// Asks `terminal` for its width, degrading to `default` on failure.
pub fn display_width(terminal: &dyn TerminalWidth, default: usize) -> usize {
    match terminal.columns() {
        Ok(columns) => columns,
        Err(err) => {
            debug!(error = %err, default, "terminal width unavailable, using default");
            default
        }
    }
}
