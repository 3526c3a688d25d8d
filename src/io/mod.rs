// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for KML path files and editor settings.

pub mod kml;
pub mod settings;
