use crate::domain::ports::{OutputSink, Pipeline};
use crate::utils::error::Result;

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self, sink: &mut dyn OutputSink) -> Result<P::Output> {
        let name = self.pipeline.name();
        tracing::info!("Running {} pipeline", name);

        tracing::debug!("[{}] extracting", name);
        let input = self.pipeline.extract()?;

        tracing::debug!("[{}] transforming", name);
        let output = self.pipeline.transform(input)?;

        tracing::debug!("[{}] loading", name);
        self.pipeline.load(&output, sink)?;

        tracing::info!("Finished {} pipeline", name);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::core::primes::PrimePipeline;
    use crate::utils::error::HofError;
    use serde_json::json;

    #[test]
    fn test_run_returns_transform_output() {
        let mut sink = MemorySink::new();
        let report = Engine::new(PrimePipeline::default()).run(&mut sink).unwrap();
        assert_eq!(report.product, Some(945));
        assert_eq!(sink.len(), 11);
    }

    #[test]
    fn test_empty_reduction_still_emits_filtered_primes() {
        let mut sink = MemorySink::new();
        let result = Engine::new(PrimePipeline::new(vec![2, 4, 6])).run(&mut sink);
        assert!(matches!(result, Err(HofError::EmptyReduction { .. })));
        assert_eq!(sink.values_for("primes"), vec![&json!([])]);
        assert_eq!(sink.len(), 1);
    }
}
