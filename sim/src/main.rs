//! Headless driver for the movement crate.
//!
//! Plays a scripted scenario against a walled floor, optionally writes a per-tick JSON-lines
//! trace and reports the top horizontal speed reached.

mod cli;
mod runner;
mod scenario;
mod trace;
mod world;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{cli::Cli, trace::TraceWriter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.run_options()?;

    let summary = match &cli.trace {
        Some(path) => {
            let mut trace = TraceWriter::create(path)
                .with_context(|| format!("creating trace file {}", path.display()))?;
            let summary = runner::run(&options, Some(&mut trace))?;
            let rows = trace.rows();
            trace.finish().context("flushing trace file")?;
            log::info!("wrote {rows} trace rows to {}", path.display());
            summary
        }
        None => runner::run::<std::io::Sink>(&options, None)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{:?}: {} ticks, {} jumps, top {:.2} m/s, final {:.2} m/s, travelled {:.1} m",
            options.scenario,
            summary.ticks,
            summary.jumps,
            summary.top_horizontal_speed,
            summary.final_horizontal_speed,
            summary.distance_travelled
        );
    }

    Ok(())
}
