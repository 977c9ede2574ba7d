use canvasbind_host::{DefaultMode, PluginConfig, UiOptions, UiPosition};
use std::io::Write;

#[test]
fn defaults_match_plugin_window() {
    let config = PluginConfig::default();
    assert_eq!(
        config.ui,
        UiOptions {
            position: UiPosition::TopRight,
            min_height: 240,
            width: 240,
        }
    );
    assert_eq!(config.color_styles, vec!["Primary Color", "Secondary Color"]);
    assert_eq!(config.mode, DefaultMode::Name);
}

#[test]
fn parse_partial_config_keeps_defaults() {
    let config = PluginConfig::parse("[ui]\nwidth = 320\n").unwrap();
    assert_eq!(config.ui.width, 320);
    assert_eq!(config.ui.min_height, 240);
    assert_eq!(config.ui.position, UiPosition::TopRight);
    assert_eq!(config.color_styles.len(), 2);
}

#[test]
fn parse_full_config() {
    let toml = r#"
color_styles = ["Brand", "Accent"]

[ui]
position = "bottom left"
min_height = 300
width = 280
"#;
    let config = PluginConfig::parse(toml).unwrap();
    assert_eq!(config.ui.position, UiPosition::BottomLeft);
    assert_eq!(config.ui.min_height, 300);
    assert!(config.is_color_style("Accent"));
    assert!(!config.is_color_style("Primary Color"));
}

#[test]
fn parse_default_mode() {
    let config = PluginConfig::parse("mode = \"color-style\"\n").unwrap();
    assert_eq!(config.mode, DefaultMode::ColorStyle);
    assert_eq!(PluginConfig::parse("mode = \"kind\"\n").unwrap().mode, DefaultMode::Kind);
    assert!(PluginConfig::parse("mode = \"everything\"\n").is_err());
}

#[test]
fn parse_rejects_unknown_position() {
    assert!(PluginConfig::parse("[ui]\nposition = \"sideways\"\n").is_err());
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = PluginConfig::load_from(&dir.path().join("canvasbind.toml"));
    assert_eq!(config, PluginConfig::default());
}

#[test]
fn load_from_malformed_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is = = not toml").unwrap();
    let config = PluginConfig::load_from(file.path());
    assert_eq!(config, PluginConfig::default());
}

#[test]
fn load_from_valid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "color_styles = [\"Brand\"]").unwrap();
    let config = PluginConfig::load_from(file.path());
    assert_eq!(config.color_styles, vec!["Brand"]);
}
