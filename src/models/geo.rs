// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geographic and canvas coordinate types.
//!
//! This module defines the point types used on both sides of the
//! projection and the bounding box that parameterizes it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Values are not range checked; whatever the document contains is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A position on the drawing surface in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another canvas point.
    pub fn distance(&self, other: CanvasPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Smallest lat/lon rectangle enclosing a set of points.
///
/// # Limitations
///
/// Plain min/max is used, so a path crossing the anti-meridian yields a box
/// spanning nearly the whole globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a non-empty point list in a single pass.
    ///
    /// Returns [`Error::EmptyInput`] if `points` is empty.
    pub fn from_points(points: &[GeoPoint]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(Error::EmptyInput)?;

        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Ok(bbox)
    }

    /// Grow the box to include `point`.
    pub fn extend(&mut self, point: GeoPoint) {
        self.lat_min = self.lat_min.min(point.lat);
        self.lat_max = self.lat_max.max(point.lat);
        self.lon_min = self.lon_min.min(point.lon);
        self.lon_max = self.lon_max.max(point.lon);
    }

    pub fn lat_height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn lon_width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.lat_min..=self.lat_max).contains(&point.lat)
            && (self.lon_min..=self.lon_max).contains(&point.lon)
    }

    /// Widen every axis narrower than `min_span` degrees to exactly
    /// `min_span`, keeping the axis centered on its midpoint.
    ///
    /// Axes already at least `min_span` wide are left untouched.
    pub fn widened(&self, min_span: f64) -> Self {
        let mut bbox = *self;
        if bbox.lat_height() < min_span {
            let mid = bbox.lat_min + bbox.lat_height() / 2.0;
            bbox.lat_min = mid - min_span / 2.0;
            bbox.lat_max = mid + min_span / 2.0;
        }
        if bbox.lon_width() < min_span {
            let mid = bbox.lon_min + bbox.lon_width() / 2.0;
            bbox.lon_min = mid - min_span / 2.0;
            bbox.lon_max = mid + min_span / 2.0;
        }
        bbox
    }
}

impl From<GeoPoint> for BoundingBox {
    fn from(point: GeoPoint) -> Self {
        Self {
            lat_min: point.lat,
            lat_max: point.lat,
            lon_min: point.lon,
            lon_max: point.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};

    #[test]
    fn test_from_points_two_corners() {
        let points = vec![GeoPoint::new(40.0, -74.0), GeoPoint::new(41.0, -73.0)];
        let bbox = assert_ok!(BoundingBox::from_points(&points));

        assert_eq!(bbox.lat_min, 40.0);
        assert_eq!(bbox.lat_max, 41.0);
        assert_eq!(bbox.lon_min, -74.0);
        assert_eq!(bbox.lon_max, -73.0);
        assert_eq!(bbox.lat_height(), 1.0);
        assert_eq!(bbox.lon_width(), 1.0);
    }

    #[test]
    fn test_from_points_empty() {
        let err = assert_err!(BoundingBox::from_points(&[]));
        assert_matches!(err, Error::EmptyInput);
    }

    #[test]
    fn test_from_points_contains_every_input() {
        let points = vec![
            GeoPoint::new(47.4979, 19.0402),
            GeoPoint::new(47.5316, 21.6273),
            GeoPoint::new(46.2530, 20.1414),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(64.1466, -21.9426),
        ];
        let bbox = assert_ok!(BoundingBox::from_points(&points));

        for point in &points {
            assert!(bbox.contains(*point), "{point:?} outside {bbox:?}");
        }
        assert_eq!(bbox.lat_min, -33.8688);
        assert_eq!(bbox.lat_max, 64.1466);
        assert_eq!(bbox.lon_min, -21.9426);
        assert_eq!(bbox.lon_max, 151.2093);
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let bbox = assert_ok!(BoundingBox::from_points(&[GeoPoint::new(20.0, 10.0)]));
        assert_eq!(bbox.lat_height(), 0.0);
        assert_eq!(bbox.lon_width(), 0.0);
    }

    #[test]
    fn test_widened_only_touches_narrow_axes() {
        // Horizontal path: all points share a latitude
        let points = vec![GeoPoint::new(10.0, 1.0), GeoPoint::new(10.0, 3.0)];
        let bbox = assert_ok!(BoundingBox::from_points(&points)).widened(0.002);

        assert!((bbox.lat_min - 9.999).abs() < 1e-9);
        assert!((bbox.lat_max - 10.001).abs() < 1e-9);
        assert_eq!(bbox.lon_min, 1.0);
        assert_eq!(bbox.lon_max, 3.0);
    }

    #[test]
    fn test_canvas_distance() {
        let a = CanvasPoint::new(0.0, 0.0);
        let b = CanvasPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }
}


/// Random coordinates for property tests.
#[cfg(test)]
pub(crate) mod strategies {
    use super::GeoPoint;
    use proptest::prelude::*;

    /// Any valid latitude/longitude pair.
    pub fn geo_point() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon))
    }

    /// A non-empty path of at most `max_len` points.
    pub fn path(max_len: usize) -> impl Strategy<Value = Vec<GeoPoint>> {
        proptest::collection::vec(geo_point(), 1..=max_len)
    }
}
