//! # polyloc
//!
//! A CLI tool that counts source lines of code per language across file
//! trees, splitting every line into code, comment, and blank.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! polyloc
//!
//! # Count specific files and directories
//! polyloc src/ vendor/lib.c Makefile
//!
//! # Layer user-defined languages over the built-in set
//! polyloc --config languages.toml .
//!
//! # JSON output
//! polyloc --output json .
//!
//! # Show which languages are registered
//! polyloc --list-languages --sorted
//! ```
//!
//! Unreadable files and unrecognized extensions are skipped, never fatal: a
//! tree scan always runs to completion and exits 0.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use polyloclib::{
    apply_config_file, count_path, register_defaults, LanguageRegistry, PolylocError, Report,
};

mod render;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("polyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Counts source lines of code per language (code / comment / blank)")
        .arg(
            Arg::new("path")
                .help("Files or directories to count (defaults to current directory)")
                .action(ArgAction::Append)
                .default_value("."),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .action(ArgAction::Append)
                .value_name("FILE")
                .help("Language config file (TOML); may be given multiple times"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("list-languages")
                .short('l')
                .long("list-languages")
                .action(ArgAction::SetTrue)
                .help("List registered language names and exit"),
        )
        .arg(
            Arg::new("sorted")
                .long("sorted")
                .action(ArgAction::SetTrue)
                .help("Sort the --list-languages output alphabetically"),
        )
}

/// Report a recoverable problem on stderr and keep going.
fn warn(message: impl AsRef<str>) {
    let style = Style::new().yellow().for_stderr();
    eprintln!("{} {}", style.apply_to("warning:"), message.as_ref());
}

/// Build the registry: built-in languages first, then config files in the
/// order given, so later files override earlier definitions by name.
fn build_registry(matches: &ArgMatches) -> Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::new();
    register_defaults(&mut registry)?;

    if let Some(configs) = matches.get_many::<String>("config") {
        for config in configs {
            match apply_config_file(&mut registry, config) {
                Ok(skipped) => {
                    for err in skipped {
                        warn(format!("{config}: {err}"));
                    }
                }
                // A missing or malformed config file skips that file only.
                Err(err) => warn(err.to_string()),
            }
        }
    }

    Ok(registry)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut registry = build_registry(matches)?;

    if matches.get_flag("list-languages") {
        let mut names: Vec<String> = registry
            .language_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if matches.get_flag("sorted") {
            names.sort_unstable();
        }
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    let paths: Vec<&String> = matches
        .get_many::<String>("path")
        .map(|v| v.collect())
        .unwrap_or_default();

    for path in paths {
        match count_path(&mut registry, path) {
            Ok(_) => {}
            Err(PolylocError::PathNotFound(p)) => {
                warn(format!("{}: no such file or directory", p.display()));
            }
            Err(err) => warn(err.to_string()),
        }
    }

    let report = Report::from_registry(&registry);

    match matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("table")
    {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", render::render_table(&report)),
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
