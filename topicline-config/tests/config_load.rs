use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use topicline_config::{LogFormatSetting, TopiclineConfigLoader};

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

const FILE_YAML: &str = r#"
version: "1"
source:
  url: "https://${TOPICLINE_TEST_HOST}/news/2017/07/rankings"
  retries: 4
lexicon:
  noise_words: ["-PRON-", "the"]
  extra_stop_words: ["also"]
tokenizer:
  extra_adpositions: ["amidst"]
selection:
  draws: 5
  seed: 99
logging:
  format: json
  emit_stderr: true
"#;

#[test]
#[serial]
fn test_config_load() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "topicline.yaml", FILE_YAML);

    let config = temp_env::with_var("TOPICLINE_TEST_HOST", Some("www.infoq.com"), || {
        TopiclineConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config")
    });

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(
        config.source.url.as_deref(),
        Some("https://www.infoq.com/news/2017/07/rankings")
    );
    assert_eq!(config.source.retries, 4);
    assert_eq!(config.source.timeout_secs, 15);
    assert_eq!(
        config.lexicon.noise_words,
        Some(vec!["-PRON-".to_string(), "the".to_string()])
    );
    assert_eq!(config.lexicon.extra_stop_words, ["also"]);
    assert_eq!(config.tokenizer.extra_adpositions, ["amidst"]);
    assert_eq!(config.selection.draws, 5);
    assert_eq!(config.selection.seed, Some(99));
    assert_eq!(config.logging.format, LogFormatSetting::Json);
    assert!(config.logging.emit_stderr);
}

#[test]
#[serial]
fn env_overrides_file_values() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(&tmp, "topicline.yaml", FILE_YAML);

    let config = temp_env::with_vars(
        [
            ("TOPICLINE_TEST_HOST", Some("example.com")),
            ("TOPICLINE__SELECTION__DRAWS", Some("2")),
            ("TOPICLINE__LOGGING__FILTER", Some("debug")),
        ],
        || {
            TopiclineConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config")
        },
    );

    assert_eq!(config.selection.draws, 2);
    assert_eq!(config.logging.filter, "debug");
    assert_eq!(config.selection.seed, Some(99));
}

#[test]
#[serial]
fn missing_optional_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = TopiclineConfigLoader::new()
        .with_optional_file(tmp.path().join("absent.yaml"))
        .load()
        .expect("defaults");

    assert_eq!(config.selection.draws, 10);
    assert!(config.lexicon.noise_words.is_none());
    assert_eq!(config.logging.format, LogFormatSetting::Text);
}

#[test]
#[serial]
fn missing_required_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = TopiclineConfigLoader::new()
        .with_file(tmp.path().join("absent.yaml"))
        .load();
    assert!(result.is_err());
}
