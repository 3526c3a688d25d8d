// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for loading, projecting, editing and saving a path.

use crate::models::editor::HandleId;
use std::io;

/// Failures surfaced to the user at the point of the failing action.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed KML document: {0}")]
    Parse(#[from] kml::Error),

    #[error("KML document contains no Point or LineString coordinates")]
    NoGeometry,

    #[error("Cannot compute a bounding box without any points")]
    EmptyInput,

    #[error("Degenerate bounding box (latitude span {lat_height}, longitude span {lon_width})")]
    DegenerateBoundingBox { lat_height: f64, lon_width: f64 },

    #[error("Unknown point handle {0}")]
    UnknownHandle(HandleId),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl Error {
    /// True for errors caused by the document content rather than the file system.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::NoGeometry)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
