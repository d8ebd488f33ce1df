use std::path::PathBuf;

use jiff::SignedDuration;

use vitalwatch_server::config::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_PORT, EnvSource, ServerConfig, load_env_file, parse_env_line,
};

fn pair(key: &str, value: &str) -> Option<(String, String)> {
    Some((key.to_string(), value.to_string()))
}

#[test]
fn env_lines_are_parsed() {
    assert_eq!(parse_env_line("PORT=8080"), pair("PORT", "8080"));
    assert_eq!(parse_env_line("  OPENAI_MODEL = gpt-4o  "), pair("OPENAI_MODEL", "gpt-4o"));
    assert_eq!(parse_env_line(r#"KEY="quoted value""#), pair("KEY", "quoted value"));
    assert_eq!(parse_env_line("KEY='single'"), pair("KEY", "single"));
    assert_eq!(parse_env_line(r#"KEY="mismatched'"#), pair("KEY", r#""mismatched'"#));
    assert_eq!(parse_env_line("URL=http://a/?x=1"), pair("URL", "http://a/?x=1"));
    assert_eq!(parse_env_line("EMPTY="), pair("EMPTY", ""));
}

#[test]
fn comments_blanks_and_keyless_lines_are_skipped() {
    for line in ["", "   ", "# PORT=1", "  # note", "=value", "no equals sign"] {
        assert_eq!(parse_env_line(line), None, "{line:?}");
    }
}

#[test]
fn env_file_is_read_line_by_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    std::fs::write(&path, "# keys\nOPENAI_API_KEY=sk-test\r\n\nGEMINI_MODEL='gemini-pro'\n").unwrap();

    let vars = load_env_file(&path).unwrap();
    assert_eq!(vars.len(), 2);
    assert_eq!(vars["OPENAI_API_KEY"], "sk-test");
    assert_eq!(vars["GEMINI_MODEL"], "gemini-pro");

    assert!(load_env_file(&dir.path().join("missing.env")).unwrap().is_empty());
}

#[test]
fn process_environment_wins_over_file() {
    let Ok(path_var) = std::env::var("PATH") else {
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(".env");
    std::fs::write(&file, "PATH=/from/file\nVITALWATCH_FILE_ONLY_KEY=from-file\n").unwrap();

    let env = EnvSource::load(&file);
    assert_eq!(env.get("VITALWATCH_FILE_ONLY_KEY"), Some("from-file"));
    assert_eq!(env.get("PATH"), Some(path_var.trim()));
}

#[test]
fn defaults_apply_without_any_variables() {
    let config = ServerConfig::from_source(&EnvSource::default());
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.rate_limit_window, SignedDuration::from_secs(300));
    assert_eq!(config.rate_limit_max_requests, 30);
    assert_eq!(
        config.allowed_origins,
        DEFAULT_ALLOWED_ORIGINS.split(',').collect::<Vec<_>>()
    );
    assert_eq!(config.chat.openai_model, "gpt-4o-mini");
    assert_eq!(config.chat.gemini_model, "gemini-1.5-flash");
    assert!(!config.chat.has_any_provider());
    assert!(config.logo_path.is_none());
}

#[test]
fn variables_override_defaults() {
    let config = ServerConfig::from_source(&EnvSource::from_pairs([
        ("PORT", "8080"),
        ("OPENAI_API_KEY", "sk-1"),
        ("GEMINI_API_KEY", "   "),
        ("CHAT_RATE_LIMIT_WINDOW_MS", "1500"),
        ("CHAT_RATE_LIMIT_MAX_REQUESTS", "5"),
        ("ALLOWED_ORIGINS", " https://a.example , ,https://b.example "),
        ("VITALWATCH_LOGO", "/srv/logo.png"),
    ]));
    assert_eq!(config.port, 8080);
    assert_eq!(config.chat.openai_api_key.as_deref(), Some("sk-1"));
    assert_eq!(config.chat.gemini_api_key, None);
    assert_eq!(config.rate_limit_window, SignedDuration::from_millis(1500));
    assert_eq!(config.rate_limit_max_requests, 5);
    assert_eq!(config.allowed_origins, ["https://a.example", "https://b.example"]);
    assert_eq!(config.logo_path, Some(PathBuf::from("/srv/logo.png")));

    assert!(config.is_origin_allowed("https://b.example"));
    assert!(!config.is_origin_allowed("https://c.example"));
}

#[test]
fn unparsable_values_fall_back_to_defaults() {
    let config = ServerConfig::from_source(&EnvSource::from_pairs([
        ("PORT", "not-a-port"),
        ("CHAT_RATE_LIMIT_WINDOW_MS", "0"),
        ("CHAT_RATE_LIMIT_MAX_REQUESTS", "-3"),
    ]));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.rate_limit_window, SignedDuration::from_secs(300));
    assert_eq!(config.rate_limit_max_requests, 30);
}
