//! Single-line terminal spinner
//!
//! Renders a cyclic animation at the start of the current terminal line while
//! a long-running operation executes, then finalizes the line when it
//! completes. See [`Spinner`] for the lifecycle and [`terminal`] for the
//! width lookup used to pad each frame.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod spinner;
pub mod terminal;

pub use crate::config::SpinnerConfig;
pub use crate::error::{Result, SpinnerError};
pub use crate::spinner::Spinner;
pub use crate::terminal::{FixedWidth, TerminalWidth, TtyWidth};
