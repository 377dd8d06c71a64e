use crate::config::SpinnerConfig;
use crate::error::{Result, SpinnerError};
use crate::spinner::Spinner;
use clap::Parser;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Output};

#[derive(Parser, Debug)]
#[command(author, version, about = "Show a spinner while a command runs", long_about = None)]
pub struct Args {
    /// Label printed before the spinner glyph
    #[arg(long)]
    pub status: Option<String>,

    /// Comma separated animation frames
    #[arg(long, value_delimiter = ',')]
    pub frames: Option<Vec<String>>,

    /// Milliseconds between frames
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Glyph left on the line once the command finishes
    #[arg(long)]
    pub empty_frame: Option<String>,

    /// TOML config file with spinner settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,

    /// Command to run, followed by its arguments
    #[arg(last = true, required = true)]
    pub command: Vec<String>,
}

impl Args {
    /// Loads file and environment settings, then applies command line
    /// overrides on top.
    pub fn spinner_config(&self) -> Result<SpinnerConfig> {
        let mut config = SpinnerConfig::load(self.config.as_deref())?;

        if let Some(status) = &self.status {
            config.status = status.clone();
        }
        if let Some(frames) = &self.frames {
            config.frames = frames.clone();
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(empty_frame) = &self.empty_frame {
            config.empty_frame = empty_frame.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Runs the command under a spinner and replays its captured output once the
/// spinner line is finalized.
pub fn run(args: &Args) -> Result<()> {
    let config = args.spinner_config()?;
    let mut spinner = Spinner::from_config(&config);
    run_with(&mut spinner, &args.command)
}

pub fn run_with(spinner: &mut Spinner, command: &[String]) -> Result<()> {
    let (program, rest) = command
        .split_first()
        .ok_or_else(|| SpinnerError::Spawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "no command given"),
        })?;

    info!("Running '{}' with {} argument(s)", program, rest.len());
    let mut captured: Option<Output> = None;

    let result = spinner.call([|| -> Result<()> {
        let output = Command::new(program)
            .args(rest)
            .output()
            .map_err(|source| SpinnerError::Spawn {
                program: program.clone(),
                source,
            })?;
        let status = output.status;
        captured = Some(output);

        if status.success() {
            Ok(())
        } else {
            Err(SpinnerError::CommandFailed {
                program: program.clone(),
                code: status.code(),
            })
        }
    }]);

    if let Some(output) = captured {
        debug!(
            "'{}' produced {} bytes of stdout, {} bytes of stderr",
            program,
            output.stdout.len(),
            output.stderr.len()
        );
        io::stdout().write_all(&output.stdout)?;
        io::stderr().write_all(&output.stderr)?;
    }

    result
}

/// Process exit code for a failed run: the command's own code when it has
/// one, otherwise 1.
pub fn exit_code(error: &SpinnerError) -> i32 {
    match error {
        SpinnerError::CommandFailed {
            code: Some(code), ..
        } => *code,
        _ => 1,
    }
}
