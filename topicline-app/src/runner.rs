use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use rand::SeedableRng;
use rand::rngs::StdRng;
use topicline_common::SelectionResult;
use topicline_common::observability::{LogConfig, LogFormat};
use topicline_config::{
    LexiconConfig, LogFormatSetting, LoggingConfig, TokenizerConfig, TopiclineConfig,
};
use topicline_http::HttpClient;
use topicline_text::lexicon::DEFAULT_NOISE_WORDS;
use topicline_text::{Lexicon, Pipeline, RuleTokenizer};
use topicline_web::{HttpPageSource, PageSource};
use url::Url;

/// A fully wired run: where pages come from and how they are analysed.
pub struct Topicline {
    source: Arc<dyn PageSource>,
    pipeline: Pipeline,
    draws: usize,
    seed: Option<u64>,
}

impl Topicline {
    pub fn new(source: Arc<dyn PageSource>, pipeline: Pipeline, draws: usize) -> Self {
        Self {
            source,
            pipeline,
            draws,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Fetch `url` and draw from its topical sentences.
    pub async fn run(&self, url: &Url) -> Result<Vec<SelectionResult>> {
        let capture = self.source.capture(url).await?;
        let title = capture.title_or_url();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let picks = self
            .pipeline
            .run(&title, &capture.content.paragraphs, self.draws, &mut rng)
            .with_context(|| format!("no representative sentence for {url}"))?;

        tracing::info!(
            %url,
            draws = picks.len(),
            seeded = self.seed.is_some(),
            "topicline.picked"
        );
        Ok(picks)
    }
}

pub fn build_from_config(cfg: &TopiclineConfig) -> Result<Topicline> {
    let lexicon = build_lexicon(&cfg.lexicon).context("building lexicon")?;
    let tokenizer = build_tokenizer(&cfg.tokenizer).context("building tokenizer")?;
    let pipeline = Pipeline::new(lexicon, tokenizer).with_more_than(cfg.selection.more_than);

    let client = HttpClient::new(&cfg.source.user_agent)?
        .with_timeout(Duration::from_secs(cfg.source.timeout_secs))
        .with_retries(cfg.source.retries);
    let source: Arc<dyn PageSource> = Arc::new(HttpPageSource::new(client));

    Ok(Topicline::new(source, pipeline, cfg.selection.draws).with_seed(cfg.selection.seed))
}

pub fn resolve_url(cfg: &TopiclineConfig) -> Result<Url> {
    let raw = cfg
        .source
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("no URL given: pass one or set source.url"))?;
    Url::parse(raw).with_context(|| format!("invalid URL `{raw}`"))
}

pub fn build_lexicon(cfg: &LexiconConfig) -> topicline_common::Result<Lexicon> {
    let lexicon = match &cfg.stop_words {
        Some(words) => Lexicon::new(DEFAULT_NOISE_WORDS.iter().copied(), words.iter().cloned()),
        None => Lexicon::for_language(&cfg.stop_words_language)?,
    };
    let lexicon = match &cfg.noise_words {
        Some(words) => lexicon.with_noise_words(words.iter().cloned()),
        None => lexicon,
    };
    Ok(lexicon.with_extra_stop_words(cfg.extra_stop_words.iter().cloned()))
}

pub fn build_tokenizer(cfg: &TokenizerConfig) -> topicline_common::Result<RuleTokenizer> {
    let tokenizer = RuleTokenizer::new()?.with_adpositions(&cfg.extra_adpositions);
    match &cfg.lexicon_path {
        Some(path) => tokenizer.with_adposition_file(path),
        None => Ok(tokenizer),
    }
}

pub fn log_config(cfg: &LoggingConfig) -> LogConfig {
    LogConfig {
        app_name: "topicline",
        log_dir: cfg.dir.clone(),
        emit_stderr: cfg.emit_stderr,
        format: match cfg.format {
            LogFormatSetting::Text => LogFormat::Text,
            LogFormatSetting::Json => LogFormat::Json,
        },
        default_filter: cfg.filter.clone(),
    }
}
