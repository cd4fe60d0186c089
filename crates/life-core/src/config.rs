//! Configuration types for the automaton.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Board dimensions and the seed of its initial population
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Seed for the initial random population
    pub seed: i64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: 0,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width.checked_mul(self.height).is_none() {
            return Err(Error::Config(format!(
                "grid of {}x{} cells overflows usize",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid: GridConfig,
    /// Emit an info-level summary every N generations (0 disables it)
    pub log_every: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            log_every: 100,
        }
    }
}

/// Configuration of the tick driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub width: usize,
    pub height: usize,
    /// Fixed seed; the wall clock is used when unset
    pub seed: Option<i64>,
    /// Time between generations (milliseconds)
    pub tick_interval_ms: u64,
    /// Stop after this many generations
    pub max_generations: Option<u64>,
    pub log_every: u64,
    /// Print a text snapshot of the board after every generation
    pub print_frames: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: None,
            tick_interval_ms: 20,
            max_generations: None,
            log_every: 100,
            print_frames: false,
        }
    }
}

impl RunnerConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load from `LIFE_CONFIG` (if set) and then apply `LIFE_*` overrides
    /// from the process environment.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var("LIFE_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `LIFE_*` overrides using `lookup` to resolve variable names.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LIFE_WIDTH") {
            self.width = parse_var("LIFE_WIDTH", &v)?;
        }
        if let Some(v) = lookup("LIFE_HEIGHT") {
            self.height = parse_var("LIFE_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("LIFE_SEED") {
            self.seed = Some(parse_var("LIFE_SEED", &v)?);
        }
        if let Some(v) = lookup("LIFE_TICK_INTERVAL_MS") {
            self.tick_interval_ms = parse_var("LIFE_TICK_INTERVAL_MS", &v)?;
        }
        if let Some(v) = lookup("LIFE_MAX_GENERATIONS") {
            self.max_generations = Some(parse_var("LIFE_MAX_GENERATIONS", &v)?);
        }
        if let Some(v) = lookup("LIFE_LOG_EVERY") {
            self.log_every = parse_var("LIFE_LOG_EVERY", &v)?;
        }
        if let Some(v) = lookup("LIFE_PRINT_FRAMES") {
            self.print_frames = parse_var("LIFE_PRINT_FRAMES", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be positive".to_string()));
        }
        self.simulation_config(0).grid.validate()
    }

    /// Build the simulation config, using `fallback_seed` when no seed is set
    pub fn simulation_config(&self, fallback_seed: i64) -> SimulationConfig {
        SimulationConfig {
            grid: GridConfig {
                width: self.width,
                height: self.height,
                seed: self.seed.unwrap_or(fallback_seed),
            },
            log_every: self.log_every,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{key}: cannot parse {value:?}")))
}
