//! Generation driver over a single grid.

use crate::grid::Grid;
use life_core::{GenerationStats, Result, RunSummary, SimulationConfig};
use tracing::{debug, info, instrument, trace};

pub struct Simulation {
    grid: Grid,
    config: SimulationConfig,
    generation: u64,
    summary: RunSummary,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.grid.validate()?;
        let grid = Grid::from_config(&config.grid);
        Ok(Self::with_grid(grid, config))
    }

    /// Run over an explicit board instead of a seeded one
    pub fn with_grid(grid: Grid, config: SimulationConfig) -> Self {
        let summary = RunSummary::new(grid.population());
        Self {
            grid,
            config,
            generation: 0,
            summary,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Advance one generation: evaluate every cell, then commit every cell
    pub fn step(&mut self) -> GenerationStats {
        let (births, deaths) = self.grid.step();
        self.generation += 1;

        let stats = GenerationStats {
            generation: self.generation,
            population: self.grid.population(),
            changed: births + deaths,
            births,
            deaths,
        };
        self.summary.update(&stats);

        trace!(?stats, "Generation committed");
        if self.config.log_every > 0 && self.generation % self.config.log_every == 0 {
            info!(
                event = "generation_metrics",
                generation = stats.generation,
                population = stats.population,
                births = stats.births,
                deaths = stats.deaths,
                "Population snapshot"
            );
        }

        stats
    }

    /// Run `generations` steps and return the summary
    #[instrument(skip(self), fields(width = self.grid.width(), height = self.grid.height()))]
    pub fn run(&mut self, generations: u64) -> RunSummary {
        debug!("Running {} generations", generations);
        for _ in 0..generations {
            self.step();
        }
        self.emit_summary();
        self.summary.clone()
    }

    /// Log the aggregated statistics of the run so far
    pub fn emit_summary(&self) {
        let s = &self.summary;
        info!(
            event = "run_summary",
            generations = s.generations,
            initial_population = s.initial_population,
            final_population = s.final_population,
            peak_population = s.peak_population,
            total_births = s.total_births,
            total_deaths = s.total_deaths,
            settled_at = ?s.settled_at,
            extinct = s.is_extinct(),
            "Run complete"
        );
    }
}
