// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.

#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible,
    non_camel_case_types,
    unused_parens,
    non_upper_case_globals,
    unused_qualifications,
    unused_results,
    unused_imports,
    unused_variables,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    elided_lifetimes_in_paths
)]
#![warn(clippy::explicit_into_iter_loop)]

//! Incremental, non-Delaunay triangulation of 2D point sets.
//!
//! Two insertion strategies are provided by [`TriSubdiv`](prelude::TriSubdiv):
//!
//! * subdivision ([`insert_sd`](prelude::TriSubdiv::insert_sd)): the bounding rectangle is
//!   split into four triangles around the first point, then every new point splits the
//!   triangle containing it into three.
//! * nearest neighbor ([`insert_nn`](prelude::TriSubdiv::insert_nn)): every new point is
//!   connected to its two closest predecessors. These triangles may overlap.
//!
//! The triangle list is kept in draw order so that a renderer can animate it one triangle
//! per frame.
//!
//! ```rust
//! use trisubdiv::prelude::*;
//! use vector_traits::glam::DVec2;
//!
//! let mut tri = TriSubdiv::<DVec2>::new(0.0, 0.0, 500.0, 500.0, InsertionMode::Subdivision);
//! let _ = tri.insert_sd(DVec2::new(250.0, 250.0))?;
//! let _ = tri.insert_sd(DVec2::new(250.0, 100.0))?;
//! assert_eq!(tri.len(), 6);
//! # Ok::<(), TriSubdivError>(())
//! ```

mod geo;
mod obj;
mod pattern;
mod pointfile;
mod trisubdiv;
mod util;

pub mod prelude {
    pub use crate::{
        geo::{centroid_2d, Bounds, Triangle},
        obj::Obj,
        pattern::{
            circle, column_triangles, grid, nn_spiral, sort_by_center_distance, spiral,
            symmetric_cross,
        },
        pointfile::{parse_points, read_points},
        trisubdiv::{
            Edges, Frame, Frames, InsertionMode, InsertionOutcome, TriSubdiv, TriSubdivBuilder,
            TriangleKey,
        },
        TriSubdivError,
    };
}

#[derive(thiserror::Error, Debug)]
pub enum TriSubdivError {
    #[error("The engine was built for {engine:?} insertion, {requested:?} was requested")]
    ModeMismatch {
        engine: trisubdiv::InsertionMode,
        requested: trisubdiv::InsertionMode,
    },

    #[error("Invalid input data: {0}")]
    InvalidParameter(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Unknown error: {0}")]
    InternalError(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
