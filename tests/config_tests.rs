//! Config discovery and merge behaviour through the public API

use std::fs;
use std::path::PathBuf;

use spritefx::config::{
    find_config_from, load_config, merge_cli_overrides, CliOverrides, ConfigError,
    SpritefxConfig, CONFIG_FILE_NAME,
};
use tempfile::TempDir;

#[test]
fn test_nearest_config_wins() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("game").join("sprites");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "[defaults]\nseed = 1\n").unwrap();
    fs::write(temp.path().join("game").join(CONFIG_FILE_NAME), "[defaults]\nseed = 2\n").unwrap();

    let found = find_config_from(nested).unwrap();
    assert_eq!(found, temp.path().join("game").join(CONFIG_FILE_NAME));
    assert_eq!(load_config(Some(&found)).unwrap().defaults.seed, 2);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "").unwrap();

    assert_eq!(load_config(Some(&path)).unwrap(), SpritefxConfig::default());
}

#[test]
fn test_unknown_style_in_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[defaults]\nstyle = \"vaporwav\"\n").unwrap();

    let err = load_config(Some(&path)).unwrap_err();
    let message = err.to_string();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(message.contains("defaults.style"));
    assert!(message.contains("vaporwave"));
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[defaults]\nseed = \"forty-two\"\n").unwrap();

    assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse(_))));
}

#[test]
fn test_cli_overrides_take_precedence_over_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[defaults]\neffect = \"fire\"\nintensity = 40\n\n[output]\ndir = \"a\"\n")
        .unwrap();

    let mut config = load_config(Some(&path)).unwrap();
    merge_cli_overrides(
        &mut config,
        &CliOverrides {
            effect: Some("storm".to_string()),
            out: Some(PathBuf::from("b")),
            ..Default::default()
        },
    );
    assert_eq!(config.defaults.effect, "storm");
    assert_eq!(config.defaults.intensity, 40);
    assert_eq!(config.output.dir, PathBuf::from("b"));
}
