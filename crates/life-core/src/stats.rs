//! Per-generation and whole-run statistics.

/// What one generation did to the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Generation number after the step (the initial board is generation 0)
    pub generation: u64,
    /// Live cells after commit
    pub population: usize,
    /// Cells whose status flipped
    pub changed: usize,
    pub births: usize,
    pub deaths: usize,
}

impl GenerationStats {
    /// No cell flipped, so every later generation is identical
    pub fn is_still(&self) -> bool {
        self.changed == 0
    }
}

/// Statistics aggregated across a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub initial_population: usize,
    pub final_population: usize,
    pub peak_population: usize,
    pub total_births: u64,
    pub total_deaths: u64,
    /// First generation at which the board stopped changing
    pub settled_at: Option<u64>,
}

impl RunSummary {
    pub fn new(initial_population: usize) -> Self {
        Self {
            initial_population,
            final_population: initial_population,
            peak_population: initial_population,
            ..Default::default()
        }
    }

    /// Fold one generation into the summary
    pub fn update(&mut self, stats: &GenerationStats) {
        self.generations = stats.generation;
        self.final_population = stats.population;
        self.peak_population = self.peak_population.max(stats.population);
        self.total_births += stats.births as u64;
        self.total_deaths += stats.deaths as u64;

        if stats.is_still() {
            self.settled_at.get_or_insert(stats.generation);
        } else {
            self.settled_at = None;
        }
    }

    pub fn is_extinct(&self) -> bool {
        self.final_population == 0
    }
}
