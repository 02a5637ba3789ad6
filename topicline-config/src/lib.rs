//! Loader for Topicline configuration with YAML + environment overlays.
//!
//! Sources are merged in the order they are added, with `TOPICLINE__`
//! environment variables applied on top (`TOPICLINE__SELECTION__DRAWS=3`
//! sets `selection.draws`). After merging, `${VAR}` placeholders inside any
//! string value are expanded from the process environment.
//!
//! Every section is optional:
//!
//! ```yaml
//! source:
//!   url: "https://example.com/article"
//!   timeout_secs: 15
//!   retries: 2
//! lexicon:
//!   stop_words_language: en
//!   extra_stop_words: [also]
//! tokenizer:
//!   extra_adpositions: [amidst]
//! selection:
//!   draws: 10
//!   seed: 7
//! logging:
//!   format: json
//!   emit_stderr: true
//! ```
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;
const ENV_PREFIX: &str = "TOPICLINE";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error(transparent)]
    Source(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TopiclineConfig {
    pub version: Option<String>,
    pub source: SourceConfig,
    pub lexicon: LexiconConfig,
    pub tokenizer: TokenizerConfig,
    pub selection: SelectionConfig,
    pub logging: LoggingConfig,
}

/// Where the page comes from and how hard to try fetching it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: Option<String>,
    pub timeout_secs: u64,
    pub retries: usize,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 15,
            retries: 2,
            user_agent: concat!("topicline/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Word lists for content-word extraction.
///
/// `noise_words: None` keeps the built-in noise list. An explicit
/// `stop_words` list replaces the language list entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub noise_words: Option<Vec<String>>,
    pub stop_words: Option<Vec<String>>,
    pub stop_words_language: String,
    pub extra_stop_words: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            noise_words: None,
            stop_words: None,
            stop_words_language: "en".into(),
            extra_stop_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub extra_adpositions: Vec<String>,
    /// File with one additional adposition per line.
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub draws: usize,
    pub more_than: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            draws: 10,
            more_than: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatSetting {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormatSetting,
    pub emit_stderr: bool,
    pub filter: String,
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormatSetting::Text,
            emit_stderr: false,
            filter: "info".into(),
            dir: None,
        }
    }
}

impl TopiclineConfig {
    /// Reject values that would make a run meaningless.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.selection.draws == 0 {
            return Err(ConfigLoadError::Invalid(
                "selection.draws must be at least 1".into(),
            ));
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigLoadError::Invalid(
                "source.timeout_secs must be at least 1".into(),
            ));
        }
        if self.lexicon.stop_words.is_none() && self.lexicon.stop_words_language.trim().is_empty()
        {
            return Err(ConfigLoadError::Invalid(
                "lexicon needs either stop_words or stop_words_language".into(),
            ));
        }
        Ok(())
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct TopiclineConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env: Environment,
}

impl Default for TopiclineConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TopiclineConfigLoader {
    /// Start from built-in defaults; `TOPICLINE__` env overrides apply last.
    ///
    /// ```
    /// use topicline_config::TopiclineConfigLoader;
    ///
    /// let config = TopiclineConfigLoader::new().load().expect("defaults are valid");
    /// assert_eq!(config.selection.draws, 10);
    /// assert_eq!(config.lexicon.stop_words_language, "en");
    /// assert!(config.source.url.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            env: Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Like [`with_file`](Self::with_file) but a missing file is skipped.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use topicline_config::{LogFormatSetting, TopiclineConfigLoader};
    ///
    /// let cfg = TopiclineConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// selection:
    ///   draws: 3
    ///   more_than: 2
    /// logging:
    ///   format: json
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.selection.draws, 3);
    /// assert_eq!(cfg.selection.more_than, Some(2));
    /// assert_eq!(cfg.logging.format, LogFormatSetting::Json);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly typed config.
    ///
    /// ```
    /// use topicline_config::TopiclineConfigLoader;
    ///
    /// unsafe { std::env::set_var("ARTICLE_HOST", "news.example.com"); }
    ///
    /// let config = TopiclineConfigLoader::new()
    ///     .with_yaml_str(r#"
    /// source:
    ///   url: "https://${ARTICLE_HOST}/today"
    /// "#)
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.source.url.as_deref(), Some("https://news.example.com/today"));
    ///
    /// unsafe { std::env::remove_var("ARTICLE_HOST"); }
    /// ```
    pub fn load(self) -> Result<TopiclineConfig, ConfigLoadError> {
        let cfg = self.builder.add_source(self.env).build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: TopiclineConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;
        typed.validate()?;
        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("PAGE", Some("article"), || {
            let mut v = json!("https://example.com/${PAGE}.html");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("https://example.com/article.html"));
        });
    }

    #[test]
    fn expands_inside_word_lists_and_sections() {
        temp_env::with_vars([("EXTRA", Some("alas")), ("LANG_CODE", Some("en"))], || {
            let mut v = json!({
                "lexicon": {
                    "extra_stop_words": ["$EXTRA", "plain"],
                    "stop_words_language": "${LANG_CODE}"
                },
                "selection": { "draws": 10, "seed": null }
            });
            expand_env_in_value(&mut v);
            assert_eq!(
                v,
                json!({
                    "lexicon": {
                        "extra_stop_words": ["alas", "plain"],
                        "stop_words_language": "en"
                    },
                    "selection": { "draws": 10, "seed": null }
                })
            );
        });
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                ("HOST", Some("example.org")),
                ("BASE", Some("https://${HOST}")),
                ("URL", Some("${BASE}/news")),
            ],
            || {
                let mut v = json!("${URL}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("https://example.org/news"));
            },
        );
    }

    #[test]
    fn stops_on_cycles() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${TOPICLINE_DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${TOPICLINE_DOES_NOT_EXIST}"));
    }

    #[test]
    fn zero_draws_is_rejected() {
        let err = TopiclineConfigLoader::new()
            .with_yaml_str("selection:\n  draws: 0\n")
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
    }

    #[test]
    fn unknown_log_format_fails_to_deserialize() {
        let err = TopiclineConfigLoader::new()
            .with_yaml_str("logging:\n  format: xml\n")
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Source(_)));
    }
}
