// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geo <-> canvas coordinate projection.
//!
//! An equirectangular affine mapping of a fixed bounding box onto the
//! padded canvas area. The canvas Y axis points down while latitude grows
//! northward, so the latitude axis is flipped.

use crate::error::{Error, Result};
use crate::io::settings::EditorSettings;
use crate::models::geo::{BoundingBox, CanvasPoint, GeoPoint};

/// Projection frame fixed for the editing session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    bbox: BoundingBox,
    padding: f64,
    /// Pixels per degree of longitude
    x_scale: f64,
    /// Pixels per degree of latitude
    y_scale: f64,
}

impl Projection {
    /// Build the projection for a non-degenerate bounding box.
    pub fn new(bbox: BoundingBox, settings: &EditorSettings) -> Result<Self> {
        let lat_height = bbox.lat_height();
        let lon_width = bbox.lon_width();
        let usable = |span: f64| span.is_finite() && span > 0.0;
        if !usable(lat_height) || !usable(lon_width) {
            return Err(Error::DegenerateBoundingBox {
                lat_height,
                lon_width,
            });
        }

        let x_scale = settings.drawable_width() / lon_width;
        let y_scale = settings.drawable_height() / lat_height;
        // Subnormal spans pass the check above but overflow the scale
        if !x_scale.is_finite() || !y_scale.is_finite() {
            return Err(Error::DegenerateBoundingBox {
                lat_height,
                lon_width,
            });
        }

        Ok(Self {
            bbox,
            padding: settings.padding,
            x_scale,
            y_scale,
        })
    }

    /// Like [`Projection::new`], but widens a box too narrow to project
    /// to `min_span_degrees` first.
    pub fn fit(bbox: BoundingBox, settings: &EditorSettings) -> Result<Self> {
        match Self::new(bbox, settings) {
            Err(Error::DegenerateBoundingBox { .. }) => {
                let widened = bbox.widened(settings.min_span_degrees);
                log::warn!(
                    "Degenerate bounding box {:?}, widened to {:?}",
                    bbox,
                    widened
                );
                Self::new(widened, settings)
            }
            result => result,
        }
    }

    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Project a geographic position onto the canvas.
    pub fn to_canvas(&self, geo: GeoPoint) -> CanvasPoint {
        CanvasPoint {
            x: self.padding + (geo.lon - self.bbox.lon_min) * self.x_scale,
            y: self.padding + (self.bbox.lat_max - geo.lat) * self.y_scale,
        }
    }

    /// Inverse of [`Projection::to_canvas`].
    ///
    /// Positions outside the canvas extrapolate linearly; nothing is clamped.
    pub fn to_geo(&self, point: CanvasPoint) -> GeoPoint {
        GeoPoint {
            lat: self.bbox.lat_max - (point.y - self.padding) / self.y_scale,
            lon: self.bbox.lon_min + (point.x - self.padding) / self.x_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};

    fn nyc_box() -> BoundingBox {
        assert_ok!(BoundingBox::from_points(&[
            GeoPoint::new(40.0, -74.0),
            GeoPoint::new(41.0, -73.0),
        ]))
    }

    #[test]
    fn test_box_corners_map_to_padded_corners() {
        let projection = assert_ok!(Projection::new(nyc_box(), &EditorSettings::default()));

        let sw = projection.to_canvas(GeoPoint::new(40.0, -74.0));
        assert_eq!(sw, CanvasPoint::new(10.0, 590.0));

        let ne = projection.to_canvas(GeoPoint::new(41.0, -73.0));
        assert_eq!(ne, CanvasPoint::new(790.0, 10.0));
    }

    #[test]
    fn test_to_geo_of_corner_is_exact() {
        let projection = assert_ok!(Projection::new(nyc_box(), &EditorSettings::default()));
        let geo = projection.to_geo(CanvasPoint::new(10.0, 590.0));
        assert_eq!(geo, GeoPoint::new(40.0, -74.0));
    }

    #[test]
    fn test_roundtrip_inside_box() {
        let projection = assert_ok!(Projection::new(nyc_box(), &EditorSettings::default()));

        for &(lat, lon) in &[
            (40.0, -74.0),
            (40.5, -73.5),
            (40.123456, -73.987654),
            (40.999, -73.001),
        ] {
            let geo = GeoPoint::new(lat, lon);
            let back = projection.to_geo(projection.to_canvas(geo));
            assert!((back.lat - lat).abs() < 1e-9, "{geo:?} -> {back:?}");
            assert!((back.lon - lon).abs() < 1e-9, "{geo:?} -> {back:?}");
        }
    }

    #[test]
    fn test_outside_canvas_extrapolates() {
        let projection = assert_ok!(Projection::new(nyc_box(), &EditorSettings::default()));

        // One full drawable width left of the padding edge
        let geo = projection.to_geo(CanvasPoint::new(10.0 - 780.0, -570.0));
        assert!((geo.lon - -75.0).abs() < 1e-9);
        assert!((geo.lat - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_rejects_degenerate_box() {
        let bbox = BoundingBox::from(GeoPoint::new(20.0, 10.0));
        let err = assert_err!(Projection::new(bbox, &EditorSettings::default()));
        assert_matches!(err, Error::DegenerateBoundingBox { .. });
    }

    #[test]
    fn test_fit_centers_single_point() {
        let bbox = BoundingBox::from(GeoPoint::new(20.0, 10.0));
        let projection = assert_ok!(Projection::fit(bbox, &EditorSettings::default()));

        let center = projection.to_canvas(GeoPoint::new(20.0, 10.0));
        assert!((center.x - 400.0).abs() < 1e-6);
        assert!((center.y - 300.0).abs() < 1e-6);

        let back = projection.to_geo(center);
        assert!((back.lat - 20.0).abs() < 1e-9);
        assert!((back.lon - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_subnormal_span_is_degenerate() {
        let bbox = BoundingBox {
            lat_min: 0.0,
            lat_max: 1e-310,
            lon_min: 0.0,
            lon_max: 1.0,
        };
        let err = assert_err!(Projection::new(bbox, &EditorSettings::default()));
        assert_matches!(err, Error::DegenerateBoundingBox { .. });

        let projection = assert_ok!(Projection::fit(bbox, &EditorSettings::default()));
        let p = projection.to_canvas(GeoPoint::new(0.0, 0.5));
        assert!(p.x.is_finite() && p.y.is_finite(), "{p:?}");
        assert!((p.y - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_canvas_size() {
        let settings = EditorSettings {
            canvas_width: 200.0,
            canvas_height: 100.0,
            padding: 0.0,
            ..EditorSettings::default()
        };
        let projection = assert_ok!(Projection::new(nyc_box(), &settings));

        let mid = projection.to_canvas(GeoPoint::new(40.5, -73.5));
        assert_eq!(mid, CanvasPoint::new(100.0, 50.0));
    }
}

#[cfg(test)]
mod properties {
    use super::Projection;
    use crate::io::settings::EditorSettings;
    use crate::models::geo::{BoundingBox, GeoPoint};
    use claims::assert_ok;
    use proptest::prelude::*;

    /// A box with both spans between 0.001 and 20 degrees.
    fn bounding_box() -> impl Strategy<Value = BoundingBox> {
        (-80.0f64..60.0, 0.001f64..20.0, -170.0f64..150.0, 0.001f64..20.0).prop_map(
            |(lat_min, lat_height, lon_min, lon_width)| BoundingBox {
                lat_min,
                lat_max: lat_min + lat_height,
                lon_min,
                lon_max: lon_min + lon_width,
            },
        )
    }

    proptest! {
        #[test]
        fn to_geo_inverts_to_canvas(
            bbox in bounding_box(),
            fractions in proptest::collection::vec((0.0f64..=1.0, 0.0f64..=1.0), 1..20),
        ) {
            let projection = assert_ok!(Projection::new(bbox, &EditorSettings::default()));

            for (fy, fx) in fractions {
                let geo = GeoPoint::new(
                    bbox.lat_min + fy * bbox.lat_height(),
                    bbox.lon_min + fx * bbox.lon_width(),
                );
                let canvas = projection.to_canvas(geo);
                prop_assert!((0.0..=800.0 + 1e-6).contains(&canvas.x), "{:?}", canvas);
                prop_assert!((0.0..=600.0 + 1e-6).contains(&canvas.y), "{:?}", canvas);

                let back = projection.to_geo(canvas);
                prop_assert!((back.lat - geo.lat).abs() < 1e-9, "{:?} -> {:?}", geo, back);
                prop_assert!((back.lon - geo.lon).abs() < 1e-9, "{:?} -> {:?}", geo, back);
            }
        }
    }
}
