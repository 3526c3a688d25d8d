// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path properties panel.
//!
//! Lists the projection frame and every point's coordinates in path order,
//! highlighting the point being dragged.

use crate::models::editor::PointEditor;

/// Display the properties panel for the current path.
pub fn show(ui: &mut egui::Ui, editor: &PointEditor) {
    ui.heading("Path");
    ui.label(format!("{} points", editor.len()));

    let bbox = editor.projection().bounding_box();
    ui.label(
        egui::RichText::new(format!(
            "lat {:.5} .. {:.5}\nlon {:.5} .. {:.5}",
            bbox.lat_min, bbox.lat_max, bbox.lon_min, bbox.lon_max
        ))
        .weak(),
    );

    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("path_points")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.strong("#");
                ui.strong("Latitude");
                ui.strong("Longitude");
                ui.end_row();

                for (i, point) in editor.points().iter().enumerate() {
                    // Points dragged out of the original frame are extrapolated
                    let outside = !bbox.contains(point.geo);
                    let text = |s: String| {
                        let mut text = egui::RichText::new(s).monospace();
                        if outside {
                            text = text.italics();
                        }
                        if editor.active() == Some(point.handle) {
                            text.color(egui::Color32::from_rgb(255, 165, 0))
                        } else {
                            text
                        }
                    };
                    ui.label(text(format!("{}", i + 1)));
                    ui.label(text(format!("{:.6}", point.geo.lat)));
                    ui.label(text(format!("{:.6}", point.geo.lon)));
                    ui.end_row();
                }
            });
    });
}
