//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use polychora::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("POLY_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("POLY_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric_section() {
    std::env::set_var("POLY_ENGINE__TARGET_FPS", "30");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.engine.target_fps, 30.0);
    std::env::remove_var("POLY_ENGINE__TARGET_FPS");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("POLY_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml
    assert_eq!(config.window.title, "Polychora");
    assert_eq!(config.engine.preset, "hologram");
    assert!((config.rendering.frame_budget_ms - 16.67).abs() < 1e-4);
}
