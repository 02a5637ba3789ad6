use std::path::PathBuf;

use clap::Parser;
use topicline_config::{LogFormatSetting, TopiclineConfig};

/// Print representative sentences from a web page.
#[derive(Debug, Parser)]
#[command(name = "topicline", version, about)]
pub struct Cli {
    /// Page to read; overrides `source.url` from the config.
    pub url: Option<String>,

    /// YAML config file. Without it, `./topicline.yaml` is used if present.
    #[arg(short, long, env = "TOPICLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of independent draws to print.
    #[arg(short = 'n', long)]
    pub draws: Option<usize>,

    /// Seed for reproducible draws.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed significance threshold instead of half the top count.
    #[arg(long)]
    pub more_than: Option<usize>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,

    /// Mirror debug logs to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Flags win over file and environment values.
    pub fn apply(&self, cfg: &mut TopiclineConfig) {
        if let Some(url) = &self.url {
            cfg.source.url = Some(url.clone());
        }
        if let Some(draws) = self.draws {
            cfg.selection.draws = draws;
        }
        if self.seed.is_some() {
            cfg.selection.seed = self.seed;
        }
        if self.more_than.is_some() {
            cfg.selection.more_than = self.more_than;
        }
        if self.json_logs {
            cfg.logging.format = LogFormatSetting::Json;
        }
        if self.verbose {
            cfg.logging.emit_stderr = true;
            cfg.logging.filter = "debug".into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "topicline",
            "https://example.com/a",
            "-n",
            "3",
            "--seed",
            "42",
            "--json-logs",
            "-v",
        ]);
        let mut cfg = TopiclineConfig::default();
        cli.apply(&mut cfg);
        assert_eq!(cfg.source.url.as_deref(), Some("https://example.com/a"));
        assert_eq!(cfg.selection.draws, 3);
        assert_eq!(cfg.selection.seed, Some(42));
        assert_eq!(cfg.selection.more_than, None);
        assert_eq!(cfg.logging.format, LogFormatSetting::Json);
        assert!(cfg.logging.emit_stderr);
        assert_eq!(cfg.logging.filter, "debug");
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let cli = Cli::parse_from(["topicline"]);
        let mut cfg = TopiclineConfig::default();
        cfg.selection.seed = Some(7);
        cli.apply(&mut cfg);
        assert_eq!(cfg.selection.seed, Some(7));
        assert_eq!(cfg.selection.draws, 10);
        assert!(cfg.source.url.is_none());
    }
}
