//! Headless tick driver for the Game of Life.

mod telemetry;

use anyhow::{Context, Result};
use life_core::{RunSummary, RunnerConfig};
use life_world::{Frame, Simulation};
use std::future::Future;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::signal;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = RunnerConfig::from_env().context("loading runner configuration")?;
    config.validate()?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        width = config.width,
        height = config.height,
        seed,
        tick_interval_ms = config.tick_interval_ms,
        "Starting Game of Life"
    );

    let simulation = Simulation::new(config.simulation_config(seed))?;
    let summary = run_loop(simulation, &config, shutdown_signal()).await;

    info!(
        generations = summary.generations,
        final_population = summary.final_population,
        "Shutting down"
    );
    Ok(())
}

/// Seed derived from the wall clock
fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or_default()
}

/// Step the simulation once per tick until `shutdown` resolves or the
/// generation limit is reached. The simulation never leaves this task, so
/// every generation runs to completion before anything else touches it.
async fn run_loop<S>(mut simulation: Simulation, config: &RunnerConfig, shutdown: S) -> RunSummary
where
    S: Future<Output = ()>,
{
    let mut ticker = interval(Duration::from_millis(config.tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    let mut frame = Frame::new();
    present(&mut frame, &simulation, config);

    loop {
        if let Some(limit) = config.max_generations {
            if simulation.generation() >= limit {
                info!("Reached generation limit {}", limit);
                break;
            }
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                simulation.step();
                present(&mut frame, &simulation, config);
            }
        }
    }

    simulation.emit_summary();
    simulation.summary().clone()
}

fn present(frame: &mut Frame, simulation: &Simulation, config: &RunnerConfig) {
    let dirty = frame.observe(simulation.grid());
    debug!(
        generation = simulation.generation(),
        dirty = dirty.len(),
        "Frame ready"
    );
    if config.print_frames {
        println!("generation {}\n{}", simulation.generation(), simulation.grid());
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_world::Grid;

    fn fast_config(max_generations: Option<u64>) -> RunnerConfig {
        RunnerConfig {
            width: 3,
            height: 3,
            seed: Some(0),
            tick_interval_ms: 1,
            max_generations,
            log_every: 0,
            print_frames: false,
        }
    }

    #[tokio::test]
    async fn test_stops_at_generation_limit() {
        let config = fast_config(Some(5));
        let simulation = Simulation::new(config.simulation_config(0)).unwrap();
        let summary = run_loop(simulation, &config, std::future::pending()).await;
        assert_eq!(summary.generations, 5);
    }

    #[tokio::test]
    async fn test_stops_on_shutdown() {
        let config = fast_config(None);
        let grid = Grid::parse("...\n###\n...").unwrap();
        let simulation = Simulation::with_grid(grid, config.simulation_config(0));
        let summary = run_loop(simulation, &config, async {}).await;
        assert_eq!(summary.generations, 0);
        assert_eq!(summary.final_population, 3);
    }

    #[test]
    fn test_clock_seed_varies() {
        let a = clock_seed();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert_ne!(a, clock_seed());
    }
}
