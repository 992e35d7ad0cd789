// Adapters layer: concrete output sinks behind the OutputSink port.

pub mod sink;

pub use sink::{ConsoleSink, MemorySink, SinkFormat};
