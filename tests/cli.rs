//! Command line tests.

use std::fs;
use std::path::Path;

use funcss_rs::CliError;
use funcss_rs::cli::{Cli, Parser, execute};

const CONFIG: &str = r##"{
    "display": { "rules": ["flex", "none"] },
    "padding-top": {
        "rules": { "sm": "0.5rem" },
        "pseudo": [":hover"]
    }
}"##;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("funcss").chain(args.iter().copied())).unwrap()
}

fn write_config(dir: &Path) -> String {
    let path = dir.join("funcss.json");
    fs::write(&path, CONFIG).unwrap();
    path.display().to_string()
}

#[test]
fn writes_css_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let mut stdout = Vec::new();

    execute(&cli(&[config.as_str()]), &mut stdout).unwrap();

    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        concat!(
            ".display--flex{display:flex}",
            ".display--none{display:none}",
            ".padding-top--sm{padding-top:0.5rem}",
            ".padding-top--sm--hover:hover{padding-top:0.5rem}",
        )
    );
}

#[test]
fn writes_globals_and_css_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let globals = dir.path().join("reset.css");
    let output = dir.path().join("out.css");
    fs::write(&globals, "*{margin:0}").unwrap();

    let globals = globals.display().to_string();
    let output_arg = output.display().to_string();

    let mut stdout = Vec::new();
    execute(
        &cli(&[
            config.as_str(),
            "--globals",
            globals.as_str(),
            "--output",
            output_arg.as_str(),
        ]),
        &mut stdout,
    )
    .unwrap();

    assert!(stdout.is_empty());
    let css = fs::read_to_string(&output).unwrap();
    assert!(css.starts_with("*{margin:0}.display--flex{display:flex}"));
}

#[test]
fn lists_accessors() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let mut stdout = Vec::new();

    execute(&cli(&[config.as_str(), "--list"]), &mut stdout).unwrap();

    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "display\tdisplay\npaddingTop\tpadding-top\n"
    );
}

#[test]
fn missing_globals_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let missing = dir.path().join("missing.css").display().to_string();

    let err = execute(
        &cli(&[config.as_str(), "--globals", missing.as_str()]),
        Vec::new(),
    )
    .unwrap_err();

    assert!(matches!(err, CliError::Globals { .. }));
    assert!(err.to_string().contains("missing.css"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"[{ "name": "color", "rules": [] }]"#).unwrap();

    let path = path.display().to_string();

    let err = execute(&cli(&[path.as_str()]), Vec::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid configuration: definition 'color' has no rules"
    );
}
