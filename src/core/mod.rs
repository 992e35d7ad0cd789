pub mod basics;
pub mod engine;
pub mod primes;
pub mod shelter;

pub use crate::domain::model::{BasicsReport, PrimeClassification, PrimeReport, ShelterReport};
pub use crate::domain::ports::{OutputSink, Pipeline, RunSettings};
pub use crate::utils::error::Result;
