//! Integration tests for Settings loading from explicit config files.
//!
//! Note: these tests assume no global config file is present.

use std::fs;

use tempfile::TempDir;

use hometree::application::ApplicationError;
use hometree::config::{RenderStyle, Settings};

#[test]
fn given_no_config_file_when_loading_then_uses_defaults() {
    let settings = Settings::load(None).expect("load defaults");

    assert_eq!(settings.indent, "   ");
    assert_eq!(settings.style, RenderStyle::Plain);
}

#[test]
fn given_partial_config_file_when_loading_then_overrides_only_given_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hometree.toml");
    fs::write(
        &path,
        r#"
style = "tree"

[movie]
channel = "7"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.style, RenderStyle::Tree);
    assert_eq!(settings.movie.channel, "7");
    assert_eq!(settings.movie.volume, 40);
    assert_eq!(settings.indent, "   ");
}

#[test]
fn given_missing_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "style = [unclosed").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("parse"));
}

#[test]
fn given_unknown_style_in_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("style.toml");
    fs::write(&path, "style = \"fancy\"\n").unwrap();

    assert!(Settings::load(Some(&path)).is_err());
}

#[test]
fn given_fresh_path_when_writing_template_then_file_loads_as_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("hometree.toml");

    Settings::write_template(&path).expect("write template");
    let settings = Settings::load(Some(&path)).expect("load template");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_existing_file_when_writing_template_then_refuses() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hometree.toml");
    fs::write(&path, "indent = \"..\"\n").unwrap();

    assert!(Settings::write_template(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "indent = \"..\"\n");
}
