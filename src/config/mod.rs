use crate::core::RunSettings;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    All,
    Basics,
    Primes,
    Shelter,
}

impl Section {
    pub fn includes(self, other: Section) -> bool {
        self == Section::All || self == other
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "small-hof")]
#[command(about = "Higher-order function walkthrough over two small datasets")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "all")]
    pub section: Section,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl RunSettings for CliConfig {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_output(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
