//! Headless frame loop: frames feed a fixed timestep, each tick asks the scenario for input,
//! steps the simulator and records the sample.

use std::{io::Write, time::Duration};

use anyhow::{Context, Result, ensure};
use movement::{
    CapsuleSpec, CharacterController, FixedTimestep, MovementConfig, RapierCharacter,
    RapierQueryWorld, Simulator, Vec3,
};
use serde::Serialize;

use crate::{scenario::Scenario, trace::TraceWriter, world};

/// Shortest frame the runner will feed the timestep. Anything shorter needs thousands of
/// frames per tick.
pub const MIN_FRAME: Duration = Duration::from_micros(10);

/// Everything one run needs.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub scenario: Scenario,
    pub config: MovementConfig,
    pub tick_hz: u32,
    /// Wall-clock length of one rendered frame fed to the timestep.
    pub frame: Duration,
    /// Run until this many fixed ticks have been simulated.
    pub ticks: u64,
}

/// End-of-run figures.
#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub ticks: u64,
    pub jumps: u32,
    pub top_horizontal_speed: f32,
    pub final_horizontal_speed: f32,
    pub final_position: Vec3,
    pub distance_travelled: f32,
}

/// Spawn point: capsule resting on the arena floor.
fn spawn_point(capsule: CapsuleSpec) -> Vec3 {
    Vec3::new(0.0, capsule.half_height + capsule.radius + 0.02, 0.0)
}

pub fn run<W: Write>(
    options: &RunOptions,
    mut trace: Option<&mut TraceWriter<W>>,
) -> Result<Summary> {
    ensure!(options.tick_hz > 0, "tick rate must be positive");
    ensure!(
        options.frame >= MIN_FRAME,
        "frame duration {:?} is shorter than {MIN_FRAME:?}",
        options.frame
    );

    let mut timestep = FixedTimestep::from_hz(options.tick_hz);
    let dt = timestep.dt();
    let world = RapierQueryWorld::build(world::arena(), dt);

    let capsule = CapsuleSpec::default();
    let start = spawn_point(capsule);
    let character = RapierCharacter::spawn(&world, capsule, start);
    let mut sim = Simulator::new(options.config.clone(), character);
    let mut source = options.scenario.source();

    log::info!(
        "running {:?} for {} ticks at {} Hz (bunnyhop mode: {})",
        options.scenario,
        options.ticks,
        options.tick_hz,
        options.config.bunnyhop_mode
    );

    let mut jumps = 0;
    let mut distance = 0.0;
    let mut last = start;

    while sim.ticks() < options.ticks {
        let due = timestep.advance_by(options.frame);
        for _ in 0..due {
            if sim.ticks() >= options.ticks {
                break;
            }

            let grounded = sim.controller().is_grounded();
            let command = source.next(grounded, &sim.state, &mut sim.view, dt);
            let sample = sim.tick(&command, dt);

            if sample.jumped {
                jumps += 1;
                log::debug!(
                    "tick {}: jump at {:.2} m/s",
                    sample.tick,
                    sample.horizontal_speed
                );
            }
            distance += (sample.position - last).norm();
            last = sample.position;

            if let Some(trace) = trace.as_deref_mut() {
                trace
                    .write(&sample)
                    .with_context(|| format!("writing trace row for tick {}", sample.tick))?;
            }
        }
    }

    let summary = Summary {
        ticks: sim.ticks(),
        jumps,
        top_horizontal_speed: sim.state.top_horizontal_speed,
        final_horizontal_speed: sim.state.horizontal_speed(),
        final_position: sim.controller().position(),
        distance_travelled: distance,
    };

    log::info!(
        "done: {} ticks, {} jumps, top speed {:.2} m/s ({:.0}% of move speed)",
        summary.ticks,
        summary.jumps,
        summary.top_horizontal_speed,
        100.0 * summary.top_horizontal_speed / options.config.move_speed.max(f32::EPSILON)
    );

    Ok(summary)
}
