use clap::Parser;
use small_hof::core::RunSettings;
use small_hof::utils::logger;
use small_hof::{
    BasicsPipeline, CliConfig, ConsoleSink, Engine, HofError, PrimePipeline, Section,
    ShelterPipeline,
};

fn run(config: &CliConfig) -> Result<(), HofError> {
    let mut sink = ConsoleSink::from_settings(config);

    if config.section.includes(Section::Basics) {
        Engine::new(BasicsPipeline::default()).run(&mut sink)?;
    }
    if config.section.includes(Section::Primes) {
        let report = Engine::new(PrimePipeline::default()).run(&mut sink)?;
        tracing::debug!("Prime product: {:?}", report.product);
    }
    if config.section.includes(Section::Shelter) {
        let report = Engine::new(ShelterPipeline::default()).run(&mut sink)?;
        tracing::debug!("Shelter total weight: {}", report.total_weight);
    }
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    if config.json_output() {
        logger::init_json_logger(config.verbose());
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting small-hof walkthrough");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Walkthrough failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Walkthrough completed");
}
