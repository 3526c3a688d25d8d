// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application structure that implements the
//! eframe::App trait. It owns the point editor (path data) and the handle
//! layer (what is drawn where) and routes UI actions between them.

use crate::io::kml::{self, LOSSY_SAVE_NOTICE};
use crate::io::settings::EditorSettings;
use crate::models::editor::PointEditor;
use crate::models::geo::BoundingBox;
use crate::ui::canvas::{CanvasAction, HandleLayer};
use crate::ui::{canvas, properties, toolbar};
use crate::util::projection::Projection;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Main application state.
#[derive(Debug)]
pub struct EditorApp {
    /// File the path was loaded from
    source: PathBuf,

    /// Path data and unsaved-changes flag
    editor: PointEditor,

    /// Visual placement of the point handles
    layer: HandleLayer,

    settings: EditorSettings,

    /// Last status message for the footer
    status: String,
}

impl EditorApp {
    /// Load `path` and set up an editing session.
    ///
    /// Nothing is constructed unless every step succeeds.
    pub fn open(path: &Path, settings: EditorSettings) -> Result<Self> {
        let points = kml::load_path(path)
            .with_context(|| format!("Failed to load KML file {}", path.display()))?;
        let bbox = BoundingBox::from_points(&points)?;
        log::info!("Bounding box: {:?}", bbox);
        let projection = Projection::fit(bbox, &settings)?;

        let editor = PointEditor::new(points, projection);
        let layer = HandleLayer::from_editor(&editor);

        Ok(Self {
            source: path.to_path_buf(),
            status: format!("Loaded {} points", editor.len()),
            editor,
            layer,
            settings,
        })
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Whether closing the window needs a confirmation first.
    pub fn has_unsaved_changes(&self) -> bool {
        self.editor.is_modified()
    }

    /// Apply a canvas interaction to the editor, then mirror it on the layer.
    ///
    /// Handles only ever come from this session's layer, so an unknown one is
    /// logged and ignored: the editor and the layer are left untouched.
    fn apply_canvas_action(&mut self, action: CanvasAction) {
        match action {
            CanvasAction::BeginDrag(handle) => match self.editor.begin_drag(handle) {
                Ok(()) => log::info!(
                    "Started dragging point {} from {:?}",
                    handle,
                    self.layer.position(handle)
                ),
                Err(e) => log::error!("Cannot drag point: {}", e),
            },
            CanvasAction::Drag(handle, position) => match self.editor.update_drag(handle, position) {
                Ok(geo) => {
                    self.layer.move_to(handle, position);
                    self.status = format!("Point {}: {:.6}, {:.6}", handle, geo.lat, geo.lon);
                }
                Err(e) => log::error!("Cannot move point: {}", e),
            },
            CanvasAction::EndDrag => {
                if let Some(handle) = self.editor.end_drag() {
                    log::info!("Stopped dragging point {}", handle);
                }
            }
            CanvasAction::None => {}
        }
    }

    /// Default file name offered in the save dialog.
    fn default_save_name(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("path");
        format!("{}_edited.kml", stem)
    }

    /// Write the current path to `path` and clear the unsaved-changes flag.
    ///
    /// On failure the flag is left set so the save can be retried.
    fn save_to(&mut self, path: &Path) -> Result<()> {
        kml::save_path(path, &self.editor.geo_points())
            .with_context(|| format!("Failed to save {}", path.display()))?;
        self.editor.mark_saved();
        self.status = format!("Saved {}", path.display());
        Ok(())
    }

    /// Ask for a target file and save a copy of the edited path.
    fn save_with_dialog(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save edited path as")
            .add_filter("KML files", &["kml"])
            .set_file_name(self.default_save_name());
        if let Some(dir) = self.source.parent() {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return;
        };
        let path = with_kml_extension(path);

        match self.save_to(&path) {
            Ok(()) => notify(
                rfd::MessageLevel::Info,
                "File saved",
                &format!(
                    "File saved successfully.\n{}\n\n{}",
                    path.display(),
                    LOSSY_SAVE_NOTICE
                ),
            ),
            Err(e) => {
                log::error!("{:#}", e);
                self.status = "Save failed".to_string();
                notify(rfd::MessageLevel::Error, "Save failed", &format!("{:#}", e));
            }
        }
    }
}

/// Append `.kml` when the chosen file name has no extension.
fn with_kml_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension("kml")
    } else {
        path
    }
}

/// Show a native message box with a single OK button.
pub fn notify(level: rfd::MessageLevel, title: &str, description: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Confirm before losing unsaved edits
        if ctx.input(|i| i.viewport().close_requested()) && self.has_unsaved_changes() {
            let answer = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Exit")
                .set_description("The path has unsaved changes. Do you really want to exit?")
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            if matches!(answer, rfd::MessageDialogResult::Yes) {
                log::info!("Exiting with unsaved changes");
            } else {
                ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            }
        }

        // Ctrl+S saves when there is something to save
        if self.has_unsaved_changes()
            && ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S))
        {
            self.save_with_dialog();
        }

        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, self.has_unsaved_changes()))
            .inner;
        if toolbar_action == toolbar::ToolbarAction::Save {
            self.save_with_dialog();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.source.display().to_string());
                ui.separator();
                ui.label(&self.status);
                if self.has_unsaved_changes() {
                    ui.separator();
                    ui.label(egui::RichText::new("unsaved changes").italics());
                }
            });
        });

        egui::SidePanel::right("properties")
            .default_width(250.0)
            .show(ctx, |ui| properties::show(ui, &self.editor));

        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(ui, &self.layer, self.editor.active(), &self.settings)
            })
            .inner;
        self.apply_canvas_action(canvas_action);
    }
}
