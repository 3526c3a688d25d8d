// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the path and its point handles.
//!
//! The canvas owns where each handle is drawn ([`HandleLayer`]). Placements
//! come from the editor once at load time and then follow the pointer on
//! every drag, so a dragged handle sits exactly where it was dropped.

use crate::io::settings::EditorSettings;
use crate::models::editor::{HandleId, PointEditor};
use crate::models::geo::CanvasPoint;

/// Result of canvas interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    BeginDrag(HandleId),
    Drag(HandleId, CanvasPoint),
    EndDrag,
}

/// Visual placement of every handle, in path order.
#[derive(Debug, Clone, Default)]
pub struct HandleLayer {
    placements: Vec<(HandleId, CanvasPoint)>,
}

impl HandleLayer {
    /// Place every handle at its projected position.
    pub fn from_editor(editor: &PointEditor) -> Self {
        Self {
            placements: editor.placements(),
        }
    }

    pub fn placements(&self) -> &[(HandleId, CanvasPoint)] {
        &self.placements
    }

    pub fn position(&self, handle: HandleId) -> Option<CanvasPoint> {
        self.placements
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, p)| *p)
    }

    /// Put `handle` at `position`. Returns false for an unknown handle.
    pub fn move_to(&mut self, handle: HandleId, position: CanvasPoint) -> bool {
        match self.placements.iter_mut().find(|(h, _)| *h == handle) {
            Some(placement) => {
                placement.1 = position;
                true
            }
            None => false,
        }
    }

    /// Topmost handle within `radius` of `position`.
    ///
    /// Handles are drawn in path order, so the last match is on top.
    pub fn handle_at(&self, position: CanvasPoint, radius: f64) -> Option<HandleId> {
        self.placements
            .iter()
            .rev()
            .find(|(_, p)| p.distance(position) <= radius)
            .map(|(h, _)| *h)
    }
}

/// Display the canvas and translate pointer drags into actions.
pub fn show(
    ui: &mut egui::Ui,
    layer: &HandleLayer,
    active: Option<HandleId>,
    settings: &EditorSettings,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let size = egui::vec2(settings.canvas_width as f32, settings.canvas_height as f32);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
    let origin = response.rect.min;

    let to_canvas = |pos: egui::Pos2| {
        let rel = pos - origin;
        CanvasPoint::new(rel.x as f64, rel.y as f64)
    };
    let to_screen = |p: CanvasPoint| origin + egui::vec2(p.x as f32, p.y as f32);

    if response.drag_started() {
        // Hit-test where the button went down, not where the drag threshold was crossed
        let press = ui.input(|i| i.pointer.press_origin());
        if let Some(handle) = press.and_then(|pos| layer.handle_at(to_canvas(pos), settings.handle_radius)) {
            action = CanvasAction::BeginDrag(handle);
        }
    } else if response.dragged() {
        if let (Some(handle), Some(pos)) = (active, response.interact_pointer_pos()) {
            action = CanvasAction::Drag(handle, to_canvas(pos));
        }
    }
    if response.drag_stopped() && active.is_some() {
        action = CanvasAction::EndDrag;
    }

    painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);

    let screen_points: Vec<egui::Pos2> = layer
        .placements()
        .iter()
        .map(|(_, p)| to_screen(*p))
        .collect();

    // Path edges in point order
    for pair in screen_points.windows(2) {
        painter.line_segment(
            [pair[0], pair[1]],
            egui::Stroke::new(2.0, egui::Color32::from_rgb(70, 110, 200)),
        );
    }

    let radius = settings.handle_radius as f32;
    for ((handle, _), point) in layer.placements().iter().zip(&screen_points) {
        let color = if Some(*handle) == active {
            egui::Color32::from_rgb(255, 165, 0)
        } else {
            egui::Color32::RED
        };
        painter.circle_filled(*point, radius, color);
        painter.circle_stroke(*point, radius, egui::Stroke::new(1.0, egui::Color32::BLACK));
    }

    if response.hovered() && active.is_none() {
        let hovering = ui
            .input(|i| i.pointer.hover_pos())
            .and_then(|pos| layer.handle_at(to_canvas(pos), settings.handle_radius));
        if hovering.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    } else if active.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    action
}
