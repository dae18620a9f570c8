//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_kexplain_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("kexplain") && path_str.ends_with("config.toml"),
            "Path should contain 'kexplain' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("kexplain_test_config.toml");

    let toml_content = r#"
command = "oc"
command_args = ["explain", "--recursive"]
initial_target = "pods"
bell = "visual"

[keybindings]
next_match = ["n", "j"]
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.command, Some("oc".to_string()));
    assert_eq!(
        config.command_args,
        Some(vec!["explain".to_string(), "--recursive".to_string()])
    );
    assert_eq!(config.initial_target, Some("pods".to_string()));
    assert_eq!(config.bell, Some(BellStyle::Visual));
    let keybindings = config.keybindings.expect("keybindings table");
    assert_eq!(keybindings["next_match"], vec!["n", "j"]);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("kexplain_test_invalid.toml");
    fs::write(&config_path, "command = [unterminated").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = env::temp_dir().join("kexplain_test_unknown.toml");
    fs::write(&config_path, "theme = \"monokai\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_bell_style() {
    let config_path = env::temp_dir().join("kexplain_test_bell.toml");
    fs::write(&config_path, "bell = \"loud\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

#[test]
#[serial(env)]
fn load_with_precedence_prefers_explicit_path() {
    let explicit = env::temp_dir().join("kexplain_test_explicit.toml");
    let from_env = env::temp_dir().join("kexplain_test_env.toml");
    fs::write(&explicit, "command = \"explicit\"\n").unwrap();
    fs::write(&from_env, "command = \"from-env\"\n").unwrap();

    env::set_var("KEXPLAIN_CONFIG", &from_env);
    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    env::remove_var("KEXPLAIN_CONFIG");

    assert_eq!(config.command, Some("explicit".to_string()));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(env)]
fn load_with_precedence_uses_env_var_path() {
    let from_env = env::temp_dir().join("kexplain_test_env_only.toml");
    fs::write(&from_env, "initial_target = \"deployments\"\n").unwrap();

    env::set_var("KEXPLAIN_CONFIG", &from_env);
    let config = load_config_with_precedence(None).unwrap().unwrap();
    env::remove_var("KEXPLAIN_CONFIG");

    assert_eq!(config.initial_target, Some("deployments".to_string()));

    fs::remove_file(from_env).ok();
}

#[test]
fn merge_config_none_yields_defaults() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn resolved_defaults_run_kubectl_explain_help() {
    let config = ResolvedConfig::default();
    assert_eq!(config.command, "kubectl");
    assert_eq!(config.command_args, vec!["explain"]);
    assert_eq!(config.initial_target, "--help");
    assert_eq!(config.bell, BellStyle::Audible);
}

#[test]
fn merge_config_partial_file_keeps_other_defaults() {
    let file = ConfigFile {
        command: Some("oc".to_string()),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.command, "oc");
    assert_eq!(resolved.command_args, vec!["explain"]);
    assert_eq!(resolved.initial_target, "--help");
}

#[test]
#[serial(env)]
fn env_override_replaces_command() {
    env::set_var("KEXPLAIN_COMMAND", "oc");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var("KEXPLAIN_COMMAND");

    assert_eq!(config.command, "oc");
}

#[test]
#[serial(env)]
fn env_override_ignores_blank_command() {
    env::set_var("KEXPLAIN_COMMAND", "  ");
    let config = apply_env_overrides(ResolvedConfig::default());
    env::remove_var("KEXPLAIN_COMMAND");

    assert_eq!(config.command, "kubectl");
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let file = ConfigFile {
        command: Some("oc".to_string()),
        bell: Some(BellStyle::Visual),
        ..ConfigFile::default()
    };
    let resolved = apply_cli_overrides(
        merge_config(Some(file)),
        Some("pods.spec".to_string()),
        Some("kubectl".to_string()),
        Some(BellStyle::Silent),
    );
    assert_eq!(resolved.initial_target, "pods.spec");
    assert_eq!(resolved.command, "kubectl");
    assert_eq!(resolved.bell, BellStyle::Silent);
}

#[test]
fn cli_overrides_absent_leave_config_untouched() {
    let base = ResolvedConfig::default();
    let resolved = apply_cli_overrides(base.clone(), None, None, None);
    assert_eq!(resolved, base);
}
