// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Point editing state.
//!
//! The editor owns the ordered path: one [`TrackedPoint`] per loaded
//! coordinate, addressed by an opaque [`HandleId`]. Drags arrive as canvas
//! positions and are projected back into geographic coordinates. Where a
//! handle is drawn is the rendering layer's business, not the editor's.

use super::geo::{CanvasPoint, GeoPoint};
use crate::error::{Error, Result};
use crate::util::projection::Projection;
use std::fmt;

/// Opaque identifier of one point of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(usize);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point of the path together with the handle that moves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackedPoint {
    pub handle: HandleId,
    pub geo: GeoPoint,
}

/// Ordered path under edit, plus the unsaved-changes flag.
#[derive(Debug, Clone)]
pub struct PointEditor {
    projection: Projection,
    points: Vec<TrackedPoint>,
    /// Handle currently being dragged
    active: Option<HandleId>,
    modified: bool,
}

impl PointEditor {
    /// Start a session on `points`, in order, using a fixed projection frame.
    pub fn new(points: Vec<GeoPoint>, projection: Projection) -> Self {
        let points = points
            .into_iter()
            .enumerate()
            .map(|(i, geo)| TrackedPoint {
                handle: HandleId(i),
                geo,
            })
            .collect();

        Self {
            projection,
            points,
            active: None,
            modified: false,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn points(&self) -> &[TrackedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Initial canvas placement of every handle, in path order.
    pub fn placements(&self) -> Vec<(HandleId, CanvasPoint)> {
        self.points
            .iter()
            .map(|p| (p.handle, self.projection.to_canvas(p.geo)))
            .collect()
    }

    /// Current geographic coordinates, in path order.
    pub fn geo_points(&self) -> Vec<GeoPoint> {
        self.points.iter().map(|p| p.geo).collect()
    }

    pub fn get(&self, handle: HandleId) -> Option<&TrackedPoint> {
        self.points.iter().find(|p| p.handle == handle)
    }

    pub fn active(&self) -> Option<HandleId> {
        self.active
    }

    /// Whether there are edits that have not been saved yet.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Start dragging `handle`.
    pub fn begin_drag(&mut self, handle: HandleId) -> Result<()> {
        if self.get(handle).is_none() {
            return Err(Error::UnknownHandle(handle));
        }
        self.active = Some(handle);
        Ok(())
    }

    /// Move `handle` to the canvas position `position`.
    ///
    /// The position is used as-is: no snapping and no clamping to the canvas,
    /// so positions off the canvas give extrapolated coordinates.
    pub fn update_drag(&mut self, handle: HandleId, position: CanvasPoint) -> Result<GeoPoint> {
        let geo = self.projection.to_geo(position);
        let point = self
            .points
            .iter_mut()
            .find(|p| p.handle == handle)
            .ok_or(Error::UnknownHandle(handle))?;

        point.geo = geo;
        self.active = Some(handle);
        self.modified = true;
        log::debug!("Moved point {} to ({}, {})", handle, geo.lat, geo.lon);
        Ok(geo)
    }

    /// Release the active handle, if any.
    pub fn end_drag(&mut self) -> Option<HandleId> {
        self.active.take()
    }

    /// Clear the unsaved-changes flag after a successful save.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}
