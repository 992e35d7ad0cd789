pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat, Section};

pub use adapters::{ConsoleSink, MemorySink, SinkFormat};
pub use core::{
    basics::BasicsPipeline, engine::Engine, primes::PrimePipeline, shelter::ShelterPipeline,
};
pub use utils::error::{HofError, Result};
