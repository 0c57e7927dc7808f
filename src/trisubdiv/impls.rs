// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.
//! A module containing boiler-plate implementations of standard traits such as Default, Debug etc etc

use super::{Edges, Frame, InsertionMode, TriSubdiv, TriSubdivBuilder};
use std::{fmt, fmt::Debug};
use vector_traits::GenericVector2;

impl<T: GenericVector2> Default for TriSubdivBuilder<T> {
    fn default() -> Self {
        Self {
            region: None,
            mode: InsertionMode::default(),
            capacity: 0,
        }
    }
}

impl<T: GenericVector2> Debug for TriSubdiv<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriSubdiv")
            .field("mode", &self.mode)
            .field("bounds", &self.bounds)
            .field("points", &self.points.len())
            .field("triangles", &self.order.len())
            .finish()
    }
}

impl<T: GenericVector2> Debug for Frame<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({}:{:?})", self.shown, self.latest())
    }
}

impl<T: GenericVector2> ExactSizeIterator for Edges<'_, T> {}
