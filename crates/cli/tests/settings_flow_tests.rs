use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;
use unitcuts_cli::cli_args::{Args, Recipe};
use unitcuts_cli::collaborator_choice::resolve_selector;
use unitcuts_core::config::SelectorKind;
use unitcuts_core::file_handling::get_settings;

fn settings_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

#[test]
fn test_file_settings_survive_without_flags() {
    let temp_file = settings_file("selector: fzf\nuser_units: true\n");
    let path = temp_file.path().to_str().unwrap();

    let args = Args::parse_from(["uc", "-c", path, "service"]);
    let settings = args.apply_overrides(get_settings(path).unwrap());

    assert_eq!(settings.selector, SelectorKind::Fzf);
    assert!(settings.user_units);
    assert!(resolve_selector(settings.selector, false).is_err());
}

#[test]
fn test_flags_win_over_file() {
    let temp_file = settings_file("selector: fzf\nspell_checker: hunspell\n");
    let path = temp_file.path().to_str().unwrap();

    let args = Args::parse_from([
        "uc",
        "-c",
        path,
        "--selector",
        "builtin",
        "--no-advice",
        "service",
        "ssh",
    ]);
    let settings = args.apply_overrides(get_settings(path).unwrap());

    assert_eq!(settings.selector, SelectorKind::Builtin);
    assert!(settings.spell_checker.is_none());
    assert_eq!(
        resolve_selector(settings.selector, false).unwrap(),
        SelectorKind::Builtin
    );
    assert_eq!(
        args.recipe,
        Recipe::Service {
            pattern: Some("ssh".to_string()),
            action: None
        }
    );
}

#[test]
fn test_missing_settings_file_uses_defaults() {
    let args = Args::parse_from(["uc", "-c", "/no/such/dir/config.yml", "jump"]);
    let settings = args.apply_overrides(get_settings("/no/such/dir/config.yml").unwrap());

    assert_eq!(settings.selector, SelectorKind::Auto);
    assert_eq!(settings.privilege_command.as_deref(), Some("sudo"));
    assert_eq!(args.recipe, Recipe::Jump { query: vec![] });
}
