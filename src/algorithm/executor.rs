use crate::algorithm::assembler::{GeneratedMap, MapAssembler};
use crate::algorithm::selection::RandomSelector;
use crate::catalog::tiles::TileCatalog;
use crate::io::configuration::{
    DEFAULT_LAND_PROBABILITY, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::spatial::vertex::{LandAssignment, StrategyKind};

/// Parameters for a map generation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Vertex field strategy
    pub strategy: StrategyKind,
    /// Probability that an interior corner is land
    pub land_probability: f64,
    /// Full attempts before giving up on catalog exhaustion
    pub max_attempts: usize,
    /// Seed for every random draw of the run
    pub seed: u64,
}

impl GenerationConfig {
    /// Configuration with default strategy, probability, attempts and seed
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            strategy: StrategyKind::Parceled,
            land_probability: DEFAULT_LAND_PROBABILITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: DEFAULT_SEED,
        }
    }

    /// Check every parameter before any work starts
    ///
    /// # Errors
    ///
    /// Returns [`crate::MapError::InvalidParameter`] for a zero or oversized
    /// dimension, a probability outside `[0, 1]`, or zero attempts
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.land_probability) {
            return Err(invalid_parameter(
                "land_probability",
                &self.land_probability,
                &"must be within [0, 1]",
            ));
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }
        Ok(())
    }
}

/// Progress notifications emitted while generating
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationEvent {
    /// A fresh attempt begins
    AttemptStarted {
        /// Attempt number, 1-based
        attempt: usize,
        /// Cells to resolve
        total_cells: usize,
    },
    /// One more cell was resolved
    CellResolved {
        /// Attempt number, 1-based
        attempt: usize,
        /// Cells resolved so far in this attempt
        resolved: usize,
        /// Cells to resolve
        total_cells: usize,
    },
    /// The attempt ran out of candidates and was discarded
    AttemptFailed {
        /// Attempt number, 1-based
        attempt: usize,
        /// Cell `[col, row]` without candidates
        cell: [usize; 2],
    },
}

/// Runs whole generation attempts until one resolves every cell
///
/// Each attempt draws a fresh vertex field and assembles from scratch; a
/// failed attempt leaves nothing behind. The random stream continues across
/// attempts, so a seed fixes the entire run.
pub struct MapGenerator {
    config: GenerationConfig,
    strategy: Box<dyn LandAssignment>,
    selector: RandomSelector,
}

impl MapGenerator {
    /// Create a generator using the configured strategy
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let strategy = config.strategy.build(config.land_probability);
        Self::with_strategy(config, strategy)
    }

    /// Create a generator with a custom vertex strategy
    ///
    /// `config.strategy` and `config.land_probability` are ignored in favour
    /// of `strategy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_strategy(config: GenerationConfig, strategy: Box<dyn LandAssignment>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            strategy,
            selector: RandomSelector::new(config.seed),
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a map, retrying on catalog exhaustion
    ///
    /// # Errors
    ///
    /// Returns the last [`crate::MapError::CatalogExhausted`] if every attempt
    /// fails, or any other error immediately
    pub fn generate(&mut self, catalog: &TileCatalog) -> Result<GeneratedMap> {
        self.generate_observed(catalog, |_| {})
    }

    /// Generate a map, reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`]
    pub fn generate_observed(
        &mut self,
        catalog: &TileCatalog,
        mut observer: impl FnMut(GenerationEvent),
    ) -> Result<GeneratedMap> {
        let mut last_error = None;

        for attempt in 1..=self.config.max_attempts {
            match self.run_attempt(catalog, attempt, &mut observer) {
                Ok(map) => {
                    tracing::info!(
                        target: "wangmap::generator",
                        attempt,
                        width = self.config.width,
                        height = self.config.height,
                        land_vertices = map.vertices.land_count(),
                        "generation.complete"
                    );
                    return Ok(map);
                }
                Err(error) if error.is_retryable() => {
                    tracing::warn!(target: "wangmap::generator", attempt, %error, "generation.retry");
                    if let crate::MapError::CatalogExhausted { cell, .. } = &error {
                        observer(GenerationEvent::AttemptFailed {
                            attempt,
                            cell: *cell,
                        });
                    }
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            invalid_parameter(
                "max_attempts",
                &self.config.max_attempts,
                &"at least one attempt is required",
            )
        }))
    }

    fn run_attempt(
        &mut self,
        catalog: &TileCatalog,
        attempt: usize,
        observer: &mut impl FnMut(GenerationEvent),
    ) -> Result<GeneratedMap> {
        let vertices = self
            .strategy
            .assign(self.config.width, self.config.height, &mut self.selector);
        tracing::debug!(
            target: "wangmap::generator",
            attempt,
            strategy = self.strategy.name(),
            land_vertices = vertices.land_count(),
            catalog_size = catalog.len(),
            "attempt.vertices"
        );

        let mut assembler = MapAssembler::new(catalog, vertices)?;
        let total_cells = assembler.total_cells();
        observer(GenerationEvent::AttemptStarted {
            attempt,
            total_cells,
        });

        while assembler
            .resolve_next(&mut self.selector)
            .with_attempt(attempt)?
        {
            observer(GenerationEvent::CellResolved {
                attempt,
                resolved: assembler.resolved_cells(),
                total_cells,
            });
        }
        Ok(assembler.into_map())
    }
}
