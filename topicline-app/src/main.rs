use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use topicline_common::observability::init_logging;
use topicline_config::{TopiclineConfig, TopiclineConfigLoader};

use cli::Cli;
use runner::{build_from_config, log_config, resolve_url};

mod cli;
mod runner;

const DEFAULT_CONFIG_FILE: &str = "topicline.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1) Config: file, then env, then flags
    let loader = match &cli.config {
        Some(path) => TopiclineConfigLoader::new().with_file(path),
        None => TopiclineConfigLoader::new().with_optional_file(DEFAULT_CONFIG_FILE),
    };
    let mut cfg: TopiclineConfig = loader.load().context("loading configuration")?;
    cli.apply(&mut cfg);
    cfg.validate()?;

    let log_path = init_logging(log_config(&cfg.logging))?;
    tracing::debug!(log_path = %log_path.display(), "topicline.start");

    let url = resolve_url(&cfg)?;
    let topicline = build_from_config(&cfg)?;
    let picks = topicline.run(&url).await?;

    let mut out = std::io::stdout().lock();
    for pick in &picks {
        writeln!(out, "{}", serde_json::to_string(pick)?)?;
    }
    Ok(())
}
