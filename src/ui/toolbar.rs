// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top panel with the editing hint and the save button.

/// Result of toolbar interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    None,
    Save,
}

/// Display the toolbar. The save button is only enabled with unsaved edits.
pub fn show(ui: &mut egui::Ui, can_save: bool) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(
            egui::RichText::new("Drag & drop point(s), then save as a copy!")
                .size(14.0)
                .color(egui::Color32::DARK_BLUE),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save = ui
                .add_enabled(can_save, egui::Button::new("Save (as copy!)"))
                .on_hover_text("Ctrl+S")
                .on_disabled_hover_text("No unsaved changes");
            if save.clicked() {
                action = ToolbarAction::Save;
            }
        });
    });

    action
}
