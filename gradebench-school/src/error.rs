//! Error types for building and running strategies

use thiserror::Error;

/// Errors raised while setting up or running a computation strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchoolError {
    /// A population must contain at least one student
    #[error("population must contain at least one student")]
    EmptyPopulation,

    /// A skill catalog must contain at least one skill
    #[error("skill catalog must contain at least one skill")]
    EmptyCatalog,

    /// Strategy id not recognised
    #[error("unknown strategy '{0}' (expected one of: {1})")]
    UnknownStrategy(String, String),

    /// Suite id not recognised
    #[error("unknown suite '{0}' (expected one of: {1})")]
    UnknownSuite(String, String),

    /// The channeling strategy needs an async runtime to spawn its tasks on
    #[error("the channeling strategy requires a tokio runtime handle")]
    MissingRuntime,

    /// A task chain ended without delivering its total
    #[error("task chain ended before delivering a total")]
    ChainBroken,

    /// Fewer grades arrived than students were spawned
    #[error("expected {expected} grades, received {received}")]
    TeamIncomplete {
        /// Students spawned
        expected: u64,
        /// Grades received before every sender hung up
        received: u64,
    },
}
