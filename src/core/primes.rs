//! Prime filtering and the product reduction built on top of it.
//!
//! `is_prime` is deliberately shallow: it only rules out values below 2 and
//! even values, so 2 is rejected and odd composites (9, 15, ...) pass.

use crate::domain::dataset::sample_numbers;
use crate::domain::model::{PrimeClassification, PrimeReport};
use crate::domain::ports::{OutputSink, Pipeline};
use crate::utils::error::{HofError, Result};
use serde_json::json;

pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    n % 2 != 0
}

pub fn filter_primes(seq: &[i64]) -> Vec<i64> {
    seq.iter().copied().filter(|&n| is_prime(n)).collect()
}

pub fn classify(seq: &[i64]) -> Vec<PrimeClassification> {
    seq.iter()
        .map(|&value| PrimeClassification {
            value,
            is_prime: is_prime(value),
        })
        .collect()
}

/// Checked `a * b`, the reducer behind [`product_of`].
pub fn multiply(a: i64, b: i64) -> Option<i64> {
    a.checked_mul(b)
}

/// Left fold seeded with the first element.
pub fn product_of(seq: &[i64]) -> Result<i64> {
    let (&first, rest) = seq
        .split_first()
        .ok_or_else(|| HofError::empty_reduction("product"))?;

    rest.iter().enumerate().try_fold(first, |acc, (i, &n)| {
        multiply(acc, n).ok_or_else(|| HofError::OverflowError {
            operation: "product".to_string(),
            processed: i + 1,
        })
    })
}

pub struct PrimePipeline {
    numbers: Vec<i64>,
}

impl PrimePipeline {
    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }
}

impl Default for PrimePipeline {
    fn default() -> Self {
        Self::new(sample_numbers())
    }
}

impl Pipeline for PrimePipeline {
    type Input = Vec<i64>;
    type Output = PrimeReport;

    fn name(&self) -> &str {
        "primes"
    }

    fn extract(&self) -> Result<Vec<i64>> {
        Ok(self.numbers.clone())
    }

    fn transform(&self, input: Vec<i64>) -> Result<PrimeReport> {
        let primes = filter_primes(&input);
        tracing::debug!(
            "{} of {} values passed the prime check",
            primes.len(),
            input.len()
        );

        // a failed reduction surfaces in load, after the prime list is written
        let product = product_of(&primes).ok();

        Ok(PrimeReport {
            primes,
            product,
            classifications: classify(&input),
        })
    }

    fn load(&self, output: &PrimeReport, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit("primes", &json!(output.primes))?;
        let product = match output.product {
            Some(product) => product,
            None => product_of(&output.primes)?,
        };
        sink.emit("product", &json!(product))?;
        for classification in &output.classifications {
            sink.emit("classification", &json!(classification.to_string()))?;
        }
        Ok(())
    }
}
