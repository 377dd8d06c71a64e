//! Terminal width lookup
//!
//! The spinner pads every line out to the terminal width so that a short
//! frame fully overwrites a longer one. The lookup is a pluggable
//! collaborator: anything implementing [`TerminalWidth`] can be injected,
//! including a plain `Fn() -> usize` closure.
//!
//! A width of `0` always means "unknown" and disables padding.

use log::trace;

/// Reports the current terminal column count, or `0` when unknown.
pub trait TerminalWidth: Send + Sync {
    fn columns(&self) -> usize;
}

impl<F> TerminalWidth for F
where
    F: Fn() -> usize + Send + Sync,
{
    fn columns(&self) -> usize {
        self()
    }
}

/// Queries the controlling terminal of the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtyWidth;

impl TtyWidth {
    pub fn new() -> Self {
        TtyWidth
    }
}

impl TerminalWidth for TtyWidth {
    fn columns(&self) -> usize {
        let columns = query_columns().unwrap_or(0);
        trace!("Terminal width lookup: {} columns", columns);
        columns
    }
}

#[cfg(unix)]
fn query_columns() -> Option<usize> {
    use terminal_size::{terminal_size_of, Width};

    // Prefer the controlling tty so redirected stdio still reports a width
    let size = match std::fs::File::open("/dev/tty") {
        Ok(tty) => terminal_size_of(&tty),
        Err(_) => terminal_size_of(std::io::stdin()),
    };
    size.map(|(Width(columns), _)| usize::from(columns))
}

#[cfg(not(unix))]
fn query_columns() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(columns), _)| usize::from(columns))
}

/// A constant width. `FixedWidth(0)` turns padding off entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn columns(&self) -> usize {
        self.0
    }
}
