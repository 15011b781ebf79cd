//! Environment variable overrides for Settings.
//!
//! Kept in its own test binary: it mutates the process environment.

use std::fs;

use tempfile::TempDir;

use hometree::config::Settings;

#[test]
fn given_env_vars_when_loading_then_override_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hometree.toml");
    fs::write(&path, "[music]\nvolume = 10\n\n[game]\nvolume = 11\n").unwrap();

    std::env::set_var("HOMETREE_MUSIC__VOLUME", "33");
    std::env::set_var("HOMETREE_STYLE", "tree");
    let settings = Settings::load(Some(&path)).expect("load settings");
    std::env::remove_var("HOMETREE_MUSIC__VOLUME");
    std::env::remove_var("HOMETREE_STYLE");

    assert_eq!(settings.music.volume, 33);
    assert_eq!(settings.game.volume, 11);
    assert_eq!(settings.style.to_string(), "tree");
}
