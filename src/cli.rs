// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command line handling.

use anyhow::{bail, Result};
use std::path::PathBuf;

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Edit(Options),
}

/// Options for an editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// KML file to open; a file picker is shown when absent
    pub file: Option<PathBuf>,
    /// Optional YAML/JSON settings file
    pub settings: Option<PathBuf>,
}

/// Parse `args` as passed to the process (program name first).
pub fn parse_args(args: &[String]) -> Result<Command> {
    let mut options = Options::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--settings" => match rest.next() {
                Some(path) => options.settings = Some(PathBuf::from(path)),
                None => bail!("--settings requires a file path"),
            },
            flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
            file => {
                if options.file.is_some() {
                    bail!("Only one KML file can be edited at a time");
                }
                options.file = Some(PathBuf::from(file));
            }
        }
    }

    Ok(Command::Edit(options))
}

pub fn print_help() {
    println!("Google KML path editor");
    println!();
    println!("Usage: kml-path-editor [FILE.kml] [--settings SETTINGS.yaml|.json]");
    println!();
    println!("  FILE.kml     KML file to edit (a file picker opens when omitted)");
    println!("  --settings   canvas size, padding and handle radius overrides");
    println!("  -h, --help   show this help");
    println!();
    println!("Set RUST_LOG=debug to log every moved coordinate.");
}
