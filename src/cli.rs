//! The `funcss` command.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub use clap::Parser;
use funcss::accessor::{self, ValidationMode};
use funcss::{CompileOptions, Config, Generator, WriterHost};

use crate::error::{CliError, Result};

/// Compile a funcss JSON configuration into CSS.
#[derive(Debug, Parser)]
#[command(name = "funcss", version, about)]
pub struct Cli {
    /// Configuration file (JSON)
    pub config: PathBuf,

    /// CSS file prepended verbatim to the output
    #[arg(long)]
    pub globals: Option<PathBuf>,

    /// Output file [default: stdout]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print accessor names instead of CSS
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the command, writing CSS (or the accessor list) to `stdout` unless an
/// output file is given.
pub fn execute(cli: &Cli, mut stdout: impl Write) -> Result<()> {
    let config = Config::from_path(&cli.config)?;

    if cli.list {
        return list(&config, &mut stdout);
    }

    let options = match &cli.globals {
        Some(path) => {
            let globals = fs::read_to_string(path).map_err(|source| CliError::Globals {
                path: path.clone(),
                source,
            })?;
            CompileOptions::with_globals(globals)
        }
        None => CompileOptions::default(),
    };
    let generator = Generator::new().options(options);

    let sheet = match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Output {
                path: path.clone(),
                source,
            })?;
            let sheet = generator.run(&config, WriterHost::new(BufWriter::new(file)))?;
            log::info!("wrote {}", path.display());
            sheet
        }
        None => generator.run(&config, WriterHost::new(&mut stdout))?,
    };
    log::info!("{} accessors available", sheet.len());
    Ok(())
}

fn list(config: &Config, out: &mut impl Write) -> Result<()> {
    let sheet = accessor::compile(config, ValidationMode::Strict);
    for key in sheet.keys() {
        if let Some(accessor) = sheet.get(key) {
            writeln!(out, "{key}\t{}", accessor.name())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "funcss",
            "styles.json",
            "--globals",
            "reset.css",
            "-o",
            "out.css",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("styles.json"));
        assert_eq!(cli.globals, Some(PathBuf::from("reset.css")));
        assert_eq!(cli.output, Some(PathBuf::from("out.css")));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.list);
    }

    #[test]
    fn config_is_required() {
        assert!(Cli::try_parse_from(["funcss"]).is_err());
    }
}
