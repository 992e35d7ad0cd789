use crate::utils::error::Result;
use serde_json::Value;

/// Destination for the human-readable lines a pipeline produces.
pub trait OutputSink {
    fn emit(&mut self, step: &str, value: &Value) -> Result<()>;
}

pub trait RunSettings {
    fn verbose(&self) -> bool;
    fn json_output(&self) -> bool;
}

pub trait Pipeline {
    type Input;
    type Output;

    fn name(&self) -> &str;
    fn extract(&self) -> Result<Self::Input>;
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;
    fn load(&self, output: &Self::Output, sink: &mut dyn OutputSink) -> Result<()>;
}
