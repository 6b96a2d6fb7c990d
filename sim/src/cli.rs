use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use movement::MovementConfig;

use crate::{
    runner::{MIN_FRAME, RunOptions},
    scenario::Scenario,
};

#[derive(Parser, Debug)]
#[command(name = "sim")]
#[command(about = "Run scripted air-strafe movement scenarios headlessly", long_about = None)]
pub struct Cli {
    /// Scripted input to play
    #[arg(long, value_enum, default_value_t = Scenario::Strafe)]
    pub scenario: Scenario,

    /// Movement tunables as JSON; missing fields keep their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Jump on every grounded tick while jump is held
    #[arg(long)]
    pub bunnyhop: bool,

    /// Simulated seconds
    #[arg(long, default_value_t = 10.0)]
    pub seconds: f32,

    /// Exact tick count, overrides --seconds
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Fixed tick rate (Hz)
    #[arg(long, default_value_t = 60)]
    pub hz: u32,

    /// Frame length fed to the fixed timestep (milliseconds)
    #[arg(long, default_value_t = 16.667)]
    pub frame_ms: f64,

    /// Write one JSON line per tick here
    #[arg(long)]
    pub trace: Option<PathBuf>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run_options(&self) -> Result<RunOptions> {
        ensure!(self.hz > 0, "--hz must be positive");
        let frame = Duration::try_from_secs_f64(self.frame_ms / 1000.0)
            .context("--frame-ms must be a finite, non-negative number")?;
        ensure!(
            frame >= MIN_FRAME,
            "--frame-ms must be at least {} ms",
            MIN_FRAME.as_secs_f64() * 1000.0
        );
        ensure!(
            self.seconds.is_finite() && self.seconds >= 0.0,
            "--seconds must be non-negative"
        );

        let mut config = match &self.config {
            Some(path) => MovementConfig::load(path)
                .with_context(|| format!("loading movement config from {}", path.display()))?,
            None => MovementConfig::default(),
        };
        if self.bunnyhop {
            config.bunnyhop_mode = true;
        }

        let ticks = self
            .ticks
            .unwrap_or_else(|| (f64::from(self.seconds) * f64::from(self.hz)).round() as u64);

        Ok(RunOptions {
            scenario: self.scenario,
            config,
            tick_hz: self.hz,
            frame,
            ticks,
        })
    }
}
