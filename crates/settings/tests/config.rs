use lazy_settings::{
    AppConfig, ConfigError, LoaderConfig, LoggingConfig, WindowConfig, load_config,
    load_config_with_env,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn config_defaults_are_sane() {
    let window = WindowConfig::default();
    assert_eq!(window.title, "Lazy Heavy Component");
    assert!(window.width > 0.0 && window.height > 0.0);

    let loader = LoaderConfig::default();
    assert_eq!(loader.delay_ms, 800);
    assert_eq!(loader.fallback_text, "Loading...");

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.filter.is_none());
    assert!(logging.directory.is_none());
    assert!(!logging.json);
}

#[test]
fn loads_partial_toml_and_keeps_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("host.toml");
    fs::write(
        &path,
        r#"
[loader]
delay_ms = 25

[logging]
directory = "/tmp/lazy-logs"
json = true
"#,
    )?;

    let cfg = AppConfig::load(Some(&path))?;

    assert_eq!(cfg.loader.delay_ms, 25);
    assert_eq!(cfg.loader.fallback_text, "Loading...");
    assert_eq!(cfg.logging.directory, Some(PathBuf::from("/tmp/lazy-logs")));
    assert!(cfg.logging.json);
    assert_eq!(cfg.window, WindowConfig::default());
    Ok(())
}

#[test]
fn explicit_missing_file_is_not_found() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<AppConfig>(Some(&path)).expect_err("missing file should fail");

    assert!(matches!(err, ConfigError::NotFound { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_value_reports_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[loader]\ndelay_ms = \"soon\"\n")?;

    let err = load_config::<AppConfig>(Some(&path)).expect_err("string delay should fail");

    assert!(matches!(err, ConfigError::Config { .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("Failed to deserialize config"), "got: {err}");
    Ok(())
}

#[test]
fn absent_default_file_falls_back_to_defaults() -> Result<(), ConfigError> {
    let cfg = AppConfig::load(None::<&str>)?;

    assert_eq!(cfg.window, WindowConfig::default());
    assert_eq!(cfg.loader, LoaderConfig::default());
    Ok(())
}

#[test]
fn environment_overrides_win_over_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("host.toml");
    fs::write(&path, "[loader]\ndelay_ms = 25\nfallback_text = \"Wait\"\n\n[logging]\njson = false\n")?;

    let env = [
        ("LAZY__LOADER__DELAY_MS".to_owned(), "250".to_owned()),
        ("LAZY__LOGGING__JSON".to_owned(), "true".to_owned()),
        ("OTHER__LOADER__DELAY_MS".to_owned(), "9".to_owned()),
    ];
    let cfg: AppConfig = load_config_with_env(Some(&path), env)?;

    assert_eq!(cfg.loader.delay_ms, 250);
    assert!(cfg.logging.json);
    assert_eq!(cfg.loader.fallback_text, "Wait");
    Ok(())
}
