//! Animated single-line spinner
//!
//! A [`Spinner`] cycles through its frames on a background thread while a
//! long-running operation executes, then finalizes the line with the empty
//! frame and a newline once stopped.
//!
//! ```no_run
//! use spinline::Spinner;
//!
//! let mut spinner = Spinner::new();
//! spinner.set_status("Indexing... ");
//! spinner.call([|| -> Result<(), std::io::Error> {
//!     std::thread::sleep(std::time::Duration::from_secs(1));
//!     Ok(())
//! }])
//! .unwrap();
//! ```

use crate::config::{SpinnerConfig, DEFAULT_EMPTY_FRAME, DEFAULT_FRAMES, DEFAULT_INTERVAL};
use crate::render::compose_line;
use crate::terminal::{TerminalWidth, TtyWidth};
use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, trace, warn};
use std::fmt;
use std::io::{self, Write};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Shortest tick the loop will sleep for, so a zero interval cannot spin hot
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Everything a render needs, shared between the caller and the loop thread.
/// The lock is held for a whole render so writes to `output` never interleave.
struct SpinnerState {
    status: String,
    frames: Vec<String>,
    empty_frame: String,
    interval: Duration,
    iteration: usize,
    output: Box<dyn Write + Send>,
    width: Arc<dyn TerminalWidth>,
}

impl SpinnerState {
    fn advance(&mut self) {
        if !self.frames.is_empty() {
            self.iteration = (self.iteration + 1) % self.frames.len();
        }
    }

    fn render(&mut self, active: bool) {
        let glyph = if active {
            self.frames
                .get(self.iteration)
                .map(String::as_str)
                .unwrap_or(self.empty_frame.as_str())
        } else {
            self.empty_frame.as_str()
        };

        let mut line = compose_line(&self.status, glyph, self.width.columns());
        if !active {
            line.push('\n');
        }

        let written = self
            .output
            .write_all(line.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(e) = written {
            warn!("Failed to write spinner frame: {}", e);
        }
    }
}

fn lock(state: &Mutex<SpinnerState>) -> MutexGuard<'_, SpinnerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Spinner {
    state: Arc<Mutex<SpinnerState>>,
    active: Arc<AtomicBool>,
    wake_tx: Option<Sender<()>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("Spinner")
            .field("status", &state.status)
            .field("frames", &state.frames)
            .field("empty_frame", &state.empty_frame)
            .field("interval", &state.interval)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Spinner {
    /// Creates an idle spinner writing to standard error with the default
    /// frames, interval and empty frame.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SpinnerState {
                status: String::new(),
                frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
                empty_frame: DEFAULT_EMPTY_FRAME.to_string(),
                interval: DEFAULT_INTERVAL,
                iteration: 0,
                output: Box::new(io::stderr()),
                width: Arc::new(TtyWidth::new()),
            })),
            active: Arc::new(AtomicBool::new(false)),
            wake_tx: None,
            thread_handle: None,
        }
    }

    /// Creates an idle spinner from configuration values. Call
    /// [`SpinnerConfig::validate`] first to reject empty frames.
    pub fn from_config(config: &SpinnerConfig) -> Self {
        let mut spinner = Self::new();
        spinner
            .set_status(config.status.clone())
            .set_frames(config.frames.clone())
            .set_interval(config.interval())
            .set_empty_frame(config.empty_frame.clone());
        spinner
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        lock(&self.state).status = status.into();
        self
    }

    /// Replaces the frame sequence. An empty sequence is tolerated: the
    /// spinner then shows only the empty frame.
    pub fn set_frames<I, S>(&mut self, frames: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = lock(&self.state);
        state.frames = frames.into_iter().map(Into::into).collect();
        state.iteration = 0;
        drop(state);
        self
    }

    pub fn set_interval(&mut self, interval: Duration) -> &mut Self {
        lock(&self.state).interval = interval;
        self
    }

    pub fn set_empty_frame(&mut self, frame: impl Into<String>) -> &mut Self {
        lock(&self.state).empty_frame = frame.into();
        self
    }

    pub fn set_output<W>(&mut self, output: W) -> &mut Self
    where
        W: Write + Send + 'static,
    {
        lock(&self.state).output = Box::new(output);
        self
    }

    pub fn set_terminal_width<T>(&mut self, width: T) -> &mut Self
    where
        T: TerminalWidth + 'static,
    {
        lock(&self.state).width = Arc::new(width);
        self
    }

    /// Flips the active flag directly without starting or stopping the loop.
    /// Clearing it on a running spinner makes the loop finalize after its
    /// current tick; a later [`stop`](Self::stop) still reaps the thread.
    pub fn set_active(&mut self, active: bool) -> &mut Self {
        self.active.store(active, Ordering::SeqCst);
        self
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn status(&self) -> String {
        lock(&self.state).status.clone()
    }

    pub fn frames(&self) -> Vec<String> {
        lock(&self.state).frames.clone()
    }

    pub fn interval(&self) -> Duration {
        lock(&self.state).interval
    }

    pub fn empty_frame(&self) -> String {
        lock(&self.state).empty_frame.clone()
    }

    /// Renders one line for the current state. When the spinner is inactive
    /// this is the finalizing render: it shows the empty frame and ends the
    /// line.
    ///
    /// Must not be called from another thread while the loop is running.
    pub fn spin(&self) {
        let active = self.is_active();
        lock(&self.state).render(active);
    }

    /// Starts the animation loop. Does nothing if the loop is already running.
    pub fn start(&mut self) {
        if self.thread_handle.is_some() {
            if self.is_active() {
                return; // Already running
            }
            // The loop was told to finish via set_active(false); reap it first
            self.join_loop();
        }

        self.active.store(true, Ordering::SeqCst);

        let (wake_tx, wake_rx) = channel::bounded(1);
        let state = Arc::clone(&self.state);
        let active = Arc::clone(&self.active);

        self.wake_tx = Some(wake_tx);
        self.thread_handle = Some(thread::spawn(move || {
            run_loop(&state, &active, &wake_rx);
        }));
        debug!("Spinner started");
    }

    /// Stops the animation loop and blocks until the final line, empty frame
    /// and newline, has been written. Does nothing if never started.
    pub fn stop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        self.join_loop();
    }

    fn join_loop(&mut self) {
        // Dropping the sender wakes the loop out of its interval wait
        self.wake_tx.take();

        if let Some(handle) = self.thread_handle.take() {
            if handle.join().is_err() {
                warn!("Spinner loop thread panicked");
            }
            debug!("Spinner stopped");
        }
    }

    /// Runs each operation in order while spinning, stopping at the first
    /// error. The spinner is always stopped, and its line finalized, before
    /// this returns, including when an operation fails or panics.
    pub fn call<I, F, E>(&mut self, operations: I) -> Result<(), E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Result<(), E>,
    {
        self.start();
        let _guard = StopOnDrop(self);

        for operation in operations {
            operation()?;
        }
        Ok(())
    }

    /// Sets the status and then behaves like [`call`](Self::call).
    pub fn call_with_status<I, F, E>(
        &mut self,
        status: impl Into<String>,
        operations: I,
    ) -> Result<(), E>
    where
        I: IntoIterator<Item = F>,
        F: FnOnce() -> Result<(), E>,
    {
        self.set_status(status);
        self.call(operations)
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.thread_handle.is_some() {
            self.stop();
        }
    }
}

struct StopOnDrop<'a>(&'a mut Spinner);

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        self.0.stop();
    }
}

fn run_loop(state: &Mutex<SpinnerState>, active: &AtomicBool, wake_rx: &Receiver<()>) {
    lock(state).iteration = 0;

    while active.load(Ordering::SeqCst) {
        let interval = {
            let mut state = lock(state);
            trace!("Spinner tick {}", state.iteration);
            state.render(true);
            state.advance();
            state.interval.max(MIN_INTERVAL)
        };

        // Returns early once stop drops the sender
        let _ = wake_rx.recv_timeout(interval);
    }

    lock(state).render(false);
}
