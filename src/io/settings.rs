// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor settings loading.
//!
//! Settings are optional; when given, they are read from a YAML or JSON
//! file chosen by extension. Missing fields fall back to the defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas geometry and interaction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Drawing surface width in pixels
    pub canvas_width: f64,
    /// Drawing surface height in pixels
    pub canvas_height: f64,
    /// Margin kept free on every side of the path
    pub padding: f64,
    /// Radius of the point handles, also the drag hit radius
    pub handle_radius: f64,
    /// Span (degrees) given to a bounding box axis too narrow to project
    pub min_span_degrees: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            padding: 10.0,
            handle_radius: 5.0,
            min_span_degrees: 0.001,
        }
    }
}

impl EditorSettings {
    /// Load settings from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path.extension().and_then(|s| s.to_str());
        let settings: Self = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| Error::Settings(format!("invalid YAML: {}", e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| Error::Settings(format!("invalid JSON: {}", e)))?,
            _ => {
                return Err(Error::Settings(format!(
                    "unsupported settings file extension: {:?}",
                    extension
                )))
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Check that the canvas leaves a drawable area and the handles are visible.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(Error::Settings("canvas dimensions must be > 0".to_string()));
        }
        if !(self.padding >= 0.0) {
            return Err(Error::Settings("padding must be >= 0".to_string()));
        }
        if self.drawable_width() <= 0.0 || self.drawable_height() <= 0.0 {
            return Err(Error::Settings(
                "padding leaves no drawable area on the canvas".to_string(),
            ));
        }
        if !(self.handle_radius > 0.0) {
            return Err(Error::Settings("handle radius must be > 0".to_string()));
        }
        if !(self.min_span_degrees > 0.0) {
            return Err(Error::Settings("minimum span must be > 0".to_string()));
        }
        Ok(())
    }

    /// Width available to the path once padding is removed.
    pub fn drawable_width(&self) -> f64 {
        self.canvas_width - 2.0 * self.padding
    }

    /// Height available to the path once padding is removed.
    pub fn drawable_height(&self) -> f64 {
        self.canvas_height - 2.0 * self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_matches, assert_ok};
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert_eq!(settings.canvas_width, 800.0);
        assert_eq!(settings.canvas_height, 600.0);
        assert_eq!(settings.padding, 10.0);
        assert_eq!(settings.drawable_width(), 780.0);
        assert_eq!(settings.drawable_height(), 580.0);
        assert_ok!(settings.validate());
    }

    #[test]
    fn test_load_yaml_partial() {
        let file = write_temp(".yaml", "canvas_width: 1024\nhandle_radius: 7.5\n");
        let settings = assert_ok!(EditorSettings::load(file.path()));

        assert_eq!(settings.canvas_width, 1024.0);
        assert_eq!(settings.handle_radius, 7.5);
        // Unset fields keep their defaults
        assert_eq!(settings.canvas_height, 600.0);
        assert_eq!(settings.padding, 10.0);
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(".json", r#"{"canvas_height": 480, "padding": 20}"#);
        let settings = assert_ok!(EditorSettings::load(file.path()));

        assert_eq!(settings.canvas_height, 480.0);
        assert_eq!(settings.padding, 20.0);
        assert_eq!(settings.canvas_width, 800.0);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = write_temp(".toml", "canvas_width = 10\n");
        let err = assert_err!(EditorSettings::load(file.path()));
        assert_matches!(err, Error::Settings(_));
    }

    #[test]
    fn test_load_rejects_padding_eating_canvas() {
        let file = write_temp(".yaml", "canvas_width: 100\npadding: 50\n");
        let err = assert_err!(EditorSettings::load(file.path()));
        assert_matches!(err, Error::Settings(_));
    }

    #[test]
    fn test_load_missing_file() {
        let err = assert_err!(EditorSettings::load(Path::new("/nonexistent/editor.yaml")));
        assert_matches!(err, Error::Io(_));
    }
}
