// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.

//! A module containing boiler-plate implementations of standard traits such as Debug, Display etc etc

use super::*;
use std::fmt::{Debug, Display};

fn format_vertex<T: GenericVector2>(v: T) -> String {
    format!("({},{})", format_float(v.x()), format_float(v.y()))
}

impl<T: GenericVector2> Debug for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Triangle({},{},{})",
            format_vertex(self.vertex1),
            format_vertex(self.vertex2),
            format_vertex(self.vertex3)
        )
    }
}

impl<T: GenericVector2> Display for Triangle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            format_vertex(self.vertex1),
            format_vertex(self.vertex2),
            format_vertex(self.vertex3)
        )
    }
}

impl<T: GenericVector2> Debug for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bounds(ul:{},ur:{},ll:{},lr:{})",
            format_vertex(self.upper_left),
            format_vertex(self.upper_right),
            format_vertex(self.lower_left),
            format_vertex(self.lower_right)
        )
    }
}

impl<T: GenericVector2> From<[T; 3]> for Triangle<T> {
    fn from(vertices: [T; 3]) -> Self {
        Self::new(vertices[0], vertices[1], vertices[2])
    }
}
