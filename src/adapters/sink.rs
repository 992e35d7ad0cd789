use crate::core::{OutputSink, RunSettings};
use crate::utils::error::Result;
use serde_json::{json, Value};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkFormat {
    /// Strings verbatim, everything else as compact JSON.
    Text,
    /// One `{"step": .., "value": ..}` object per line.
    JsonLines,
}

pub fn render_line(format: SinkFormat, step: &str, value: &Value) -> Result<String> {
    let line = match (format, value) {
        (SinkFormat::Text, Value::String(text)) => text.clone(),
        (SinkFormat::Text, other) => serde_json::to_string(other)?,
        (SinkFormat::JsonLines, _) => {
            serde_json::to_string(&json!({ "step": step, "value": value }))?
        }
    };
    Ok(line)
}

pub struct ConsoleSink<W: Write> {
    writer: W,
    format: SinkFormat,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout(format: SinkFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }

    pub fn from_settings<C: RunSettings>(settings: &C) -> Self {
        let format = if settings.json_output() {
            SinkFormat::JsonLines
        } else {
            SinkFormat::Text
        };
        Self::stdout(format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: SinkFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, step: &str, value: &Value) -> Result<()> {
        let line = render_line(self.format, step, value)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    emissions: Vec<(String, Value)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> &[(String, Value)] {
        &self.emissions
    }

    pub fn values_for(&self, step: &str) -> Vec<&Value> {
        self.emissions
            .iter()
            .filter(|(s, _)| s == step)
            .map(|(_, v)| v)
            .collect()
    }

    pub fn lines(&self) -> Result<Vec<String>> {
        self.emissions
            .iter()
            .map(|(step, value)| render_line(SinkFormat::Text, step, value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, step: &str, value: &Value) -> Result<()> {
        self.emissions.push((step.to_string(), value.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_format_prints_strings_verbatim() {
        let mut sink = ConsoleSink::new(Vec::new(), SinkFormat::Text);
        sink.emit("classification", &json!("3 is a prime number")).unwrap();
        sink.emit("primes", &json!([3, 5, 7, 9])).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "3 is a prime number\n[3,5,7,9]\n");
    }

    #[test]
    fn test_json_lines_format_wraps_step() {
        let mut sink = ConsoleSink::new(Vec::new(), SinkFormat::JsonLines);
        sink.emit("product", &json!(945)).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let parsed: Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(parsed, json!({"step": "product", "value": 945}));
    }

    #[test]
    fn test_memory_sink_filters_by_step() {
        let mut sink = MemorySink::new();
        sink.emit("species", &json!("dog")).unwrap();
        sink.emit("total_weight", &json!(219)).unwrap();
        sink.emit("species", &json!("cat")).unwrap();
        assert_eq!(sink.values_for("species"), vec![&json!("dog"), &json!("cat")]);
        assert_eq!(sink.lines().unwrap(), vec!["dog", "219", "cat"]);
    }
}
