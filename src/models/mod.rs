// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path data model: coordinates, bounding box and editing state.

pub mod editor;
pub mod geo;
