// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Google KML path editor
//!
//! Opens a Google Maps exported KML file, shows its path on a plain canvas
//! (no map background), lets the user drag individual points and saves the
//! edited path as a new KML file.

mod app;
mod cli;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::EditorApp;
use io::settings::EditorSettings;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let options = match cli::parse_args(&args)? {
        cli::Command::Help => {
            cli::print_help();
            return Ok(());
        }
        cli::Command::Edit(options) => options,
    };

    let settings = match load_settings(options.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{:#}", e);
            app::notify(rfd::MessageLevel::Error, "Cannot load settings", &format!("{:#}", e));
            return Err(e);
        }
    };

    let path = match options.file {
        Some(path) => path,
        None => pick_kml_file().context("No file has been selected. Exit.")?,
    };
    log::info!("Opening KML file: {}", path.display());

    // A failed initial load ends the session
    let app = match EditorApp::open(&path, settings) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{:#}", e);
            let title = match e.downcast_ref::<error::Error>() {
                Some(err) if err.is_parse_error() => "Invalid KML file",
                _ => "Cannot open KML file",
            };
            app::notify(rfd::MessageLevel::Error, title, &format!("{:#}", e));
            return Err(e);
        }
    };

    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let settings = app.settings();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                settings.canvas_width as f32 + 300.0,
                settings.canvas_height as f32 + 90.0,
            ])
            .with_title(format!("Google KML Geo-point Editor - {}", file_name)),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "kml-path-editor",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// Settings from `path`, or the defaults when no file was given.
fn load_settings(path: Option<&Path>) -> Result<EditorSettings> {
    match path {
        Some(path) => EditorSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(EditorSettings::default()),
    }
}

/// Ask the user for the KML file to edit.
fn pick_kml_file() -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Select KML file")
        .add_filter("Google KML files", &["kml"]);
    if let Ok(dir) = std::env::current_dir() {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}
