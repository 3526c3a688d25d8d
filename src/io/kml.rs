// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! KML path reading and writing.
//!
//! Reading flattens every Point and LineString placemark of a document
//! into one ordered path. Writing produces a minimal single-LineString
//! document; names, styles and any other features of the source file are
//! not carried over.

use crate::error::{Error, Result};
use crate::models::geo::GeoPoint;
use kml::types::Geometry;
use kml::Kml;
use std::path::Path;

/// OGC KML 2.2 namespace written on the root element.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Shown with the save confirmation; the written file keeps only coordinates.
pub const LOSSY_SAVE_NOTICE: &str = "Only the path coordinates are saved. Placemark names, styles and \
     other features of the original file are not preserved, so save the edited path as a copy.";

/// Parse a KML document into a flat, ordered list of points.
///
/// KML stores `lon,lat[,alt]`; the returned points are `(lat, lon)` and the
/// altitude is dropped.
pub fn parse(content: &str) -> Result<Vec<GeoPoint>> {
    let document: Kml = strip_xml_declaration(content).parse()?;

    let mut points = Vec::new();
    collect_points(&document, &mut points);

    if points.is_empty() {
        return Err(Error::NoGeometry);
    }
    Ok(points)
}

/// Serialize a path as a minimal KML document with a single LineString.
pub fn serialize(points: &[GeoPoint]) -> String {
    // `{:?}` keeps the fractional part (`-74.0`) and round-trips exactly
    let coordinates: String = points
        .iter()
        .map(|p| format!("{:?},{:?},0 ", p.lon, p.lat))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <kml xmlns=\"{KML_NAMESPACE}\">\n\
         <Document>\n\
         \x20 <Placemark>\n\
         \x20   <LineString>\n\
         \x20     <coordinates>{coordinates}</coordinates>\n\
         \x20   </LineString>\n\
         \x20 </Placemark>\n\
         </Document>\n\
         </kml>\n"
    )
}

/// Read and parse a KML file.
pub fn load_path(path: &Path) -> Result<Vec<GeoPoint>> {
    let content = std::fs::read_to_string(path)?;
    let points = parse(&content)?;
    log::info!("Read {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Write a path to a KML file as UTF-8.
pub fn save_path(path: &Path, points: &[GeoPoint]) -> Result<()> {
    std::fs::write(path, serialize(points))?;
    log::info!("Wrote {} points to {}", points.len(), path.display());
    Ok(())
}

fn strip_xml_declaration(content: &str) -> &str {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some((_, rest)) = trimmed.split_once("?>") {
            return rest;
        }
    }
    content
}

fn collect_points(element: &Kml, points: &mut Vec<GeoPoint>) {
    match element {
        Kml::KmlDocument(document) => {
            for child in &document.elements {
                collect_points(child, points);
            }
        }
        Kml::Document { elements, .. } => {
            for child in elements {
                collect_points(child, points);
            }
        }
        Kml::Folder { elements, .. } => {
            for child in elements {
                collect_points(child, points);
            }
        }
        Kml::Placemark(placemark) => {
            if let Some(geometry) = &placemark.geometry {
                collect_geometry(geometry, points);
            }
        }
        _ => {}
    }
}

fn collect_geometry(geometry: &Geometry, points: &mut Vec<GeoPoint>) {
    match geometry {
        Geometry::Point(point) => {
            points.push(GeoPoint::new(point.coord.y, point.coord.x));
        }
        Geometry::LineString(line) => {
            points.extend(line.coords.iter().map(|c| GeoPoint::new(c.y, c.x)));
        }
        Geometry::MultiGeometry(multi) => {
            for member in &multi.geometries {
                collect_geometry(member, points);
            }
        }
        _ => {}
    }
}
