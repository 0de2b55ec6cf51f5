//! Strategy selection and the generator facade.

use crate::generators::random::RandomGenerator;
use crate::generators::sequential::SequentialGenerator;
use crate::generators::CoordinateSource;
use sync_core::{ConfigError, Coordinate};
use tracing::debug;

/// Error type for generator construction.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Strategy name not recognised
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Strategy received the wrong number of parameters
    #[error("Required params: {usage}")]
    WrongParamCount { usage: &'static str },

    /// A parameter was non-numeric or out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Coordinate generator over the closed set of strategies.
///
/// New strategies are added as variants here; the pipeline only selects
/// one at startup and then drives it through [`CoordinateGenerator::next_coordinate`]
/// or the `Iterator` impl.
#[derive(Debug, Clone)]
pub enum CoordinateGenerator {
    Random(RandomGenerator),
    Sequential(SequentialGenerator),
}

impl CoordinateGenerator {
    /// Names accepted by [`CoordinateGenerator::from_args`].
    pub const STRATEGIES: &'static [&'static str] = &["random", "sequential"];

    /// Select a strategy by name and build it from its positional params.
    pub fn from_args(strategy: &str, params: &[String]) -> Result<Self, GeneratorError> {
        let generator = match strategy {
            "random" => Self::Random(RandomGenerator::from_params(params)?),
            "sequential" => Self::Sequential(SequentialGenerator::from_params(params)?),
            other => return Err(GeneratorError::UnknownStrategy(other.to_string())),
        };
        debug!(
            "Selected '{strategy}' strategy with {} bits to generate",
            generator.remaining()
        );
        Ok(generator)
    }

    /// Produce the next coordinate, or `None` once the budget is exhausted.
    pub fn next_coordinate(&mut self) -> Option<Coordinate> {
        match self {
            Self::Random(g) => g.next_coordinate(),
            Self::Sequential(g) => g.next_coordinate(),
        }
    }

    /// Number of coordinates still to be produced.
    pub fn remaining(&self) -> u64 {
        match self {
            Self::Random(g) => g.remaining(),
            Self::Sequential(g) => g.remaining(),
        }
    }
}

impl Iterator for CoordinateGenerator {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_coordinate()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CoordinateGenerator {}
