use std::io::Write;

use clap::{ErrorKind, Parser as Clap};
use thiserror::Error;

use crate::lib::config::Config;
use crate::lib::scaffold::generate_scaffold;

/// Command line scaffolding tool for new projects.
#[derive(Clap)]
#[clap(version = "0.1")]
pub struct App {
    /// Project name.
    #[clap(short)]
    name: Option<String>,
    /// Project location on disk.
    #[clap(short)]
    directory: Option<String>,
    /// Project remote repository URL.
    #[clap(short)]
    repository: Option<String>,
    /// Project will have static assets or not.
    #[clap(short = 's')]
    has_static_assets: bool,
}

impl App {
    fn into_config(self) -> Config {
        Config {
            name: self.name.unwrap_or_default(),
            directory: self.directory.unwrap_or_default(),
            repository: self.repository.unwrap_or_default(),
            has_static_assets: self.has_static_assets,
        }
    }
}

/// Errors produced while reading the command line.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("a name, directory, and repository url must be provided")]
    MissingParameters,
    #[error("flag: help requested")]
    HelpRequested,
    #[error("{0}")]
    Flag(clap::Error),
}

/// Usage summary written when no arguments are supplied or help is requested.
const USAGE: &str = "\
Usage of scaffoldgen:
  -d <directory>
        Project location on disk
  -n <name>
        Project name
  -r <repository>
        Project remote repository URL
  -s    Project will have static assets or not
";

/// Read the raw argument list into a [`Config`].
///
/// An empty argument list writes the usage text to `out` and fails; flags
/// that are left out parse to empty strings, presence is checked by
/// [`Config::validate`] and not here.
pub fn parse_flags<W: Write>(out: &mut W, args: &[String]) -> Result<Config, ParseError> {
    if args.is_empty() {
        let _ = write!(out, "{}", USAGE);
        return Err(ParseError::MissingParameters);
    }

    let argv = std::iter::once("scaffoldgen".to_owned()).chain(args.iter().cloned());

    match App::try_parse_from(argv) {
        Ok(app) => Ok(app.into_config()),
        Err(err) if err.kind == ErrorKind::DisplayHelp => {
            let _ = write!(out, "{}", USAGE);
            Err(ParseError::HelpRequested)
        }
        Err(err) => {
            let _ = writeln!(out, "{}", err);
            Err(ParseError::Flag(err))
        }
    }
}

/// Parse the arguments, validate the configuration and report the scaffold.
///
/// Validation failures are printed to stderr, one per line. The `Err` side
/// carries no payload; `main` maps it to a non-zero exit status.
pub fn run<W: Write>(out: &mut W, args: &[String]) -> Result<(), ()> {
    let conf = match parse_flags(out, args) {
        Ok(conf) => conf,
        Err(err) => {
            log::debug!("Parsing the command line failed: {}", err);
            return Err(());
        }
    };

    log::trace!("Parsed configuration: {:?}", conf);

    let errors = conf.validate();
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("{}", err);
        }
        return Err(());
    }

    match generate_scaffold(out, &conf) {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("Error: {}", err);
            Err(())
        }
    }
}
