// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.
mod impls;

use std::fmt;
use vector_traits::{num_traits::Float, GenericScalar, GenericVector2};

pub fn centroid_2d<T: GenericVector2>(p0: T, p1: T, p2: T) -> T {
    let x = (p0.x() + p1.x() + p2.x()) / T::Scalar::THREE;
    let y = (p0.y() + p1.y() + p2.y()) / T::Scalar::THREE;
    T::new_2d(x, y)
}

/// A triangle defined by three 2D vertices, stored in the order they were given.
///
/// The vertex order only matters for drawing (edges are v1->v2, v2->v3, v3->v1), the
/// containment test does not depend on the winding.
/// A `Triangle` is never mutated after construction, subdivision replaces it wholesale.
#[derive(PartialEq, Copy, Clone)]
pub struct Triangle<T: GenericVector2> {
    vertex1: T,
    vertex2: T,
    vertex3: T,
}

impl<T: GenericVector2> Triangle<T> {
    pub fn new(vertex1: T, vertex2: T, vertex3: T) -> Self {
        Self {
            vertex1,
            vertex2,
            vertex3,
        }
    }

    #[inline(always)]
    pub fn vertex1(&self) -> T {
        self.vertex1
    }

    #[inline(always)]
    pub fn vertex2(&self) -> T {
        self.vertex2
    }

    #[inline(always)]
    pub fn vertex3(&self) -> T {
        self.vertex3
    }

    #[inline(always)]
    pub fn vertices(&self) -> [T; 3] {
        [self.vertex1, self.vertex2, self.vertex3]
    }

    /// The three edges in drawing order: v1->v2, v2->v3, v3->v1
    #[inline]
    pub fn edges(&self) -> [(T, T); 3] {
        [
            (self.vertex1, self.vertex2),
            (self.vertex2, self.vertex3),
            (self.vertex3, self.vertex1),
        ]
    }

    #[inline]
    pub fn centroid(&self) -> T {
        centroid_2d(self.vertex1, self.vertex2, self.vertex3)
    }

    /// Checks if `p` lies inside the triangle, boundary included.
    ///
    /// The test computes the barycentric coordinates `(a, b, c)` of `p` and accepts it when
    /// all three are within `[0, 1]`. No epsilon is applied, so points exactly on an edge
    /// are accepted only when the arithmetic happens to land on the boundary.
    ///
    /// A degenerate triangle (collinear vertices) has a zero denominator. `a` and `b` then
    /// become infinite or NaN, every comparison fails and `contains` returns `false` for any
    /// `p`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let t = Triangle::new(DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0), DVec2::new(0.0, 1.0));
    ///
    /// assert!(t.contains(DVec2::new(0.25, 0.25)));
    /// assert!(!t.contains(DVec2::new(1.0, 1.0)));
    /// ```
    pub fn contains(&self, p: T) -> bool {
        let (v1, v2, v3) = (self.vertex1, self.vertex2, self.vertex3);
        let denominator =
            (v2.y() - v3.y()) * (v1.x() - v3.x()) + (v3.x() - v2.x()) * (v1.y() - v3.y());
        let a = ((v2.y() - v3.y()) * (p.x() - v3.x()) + (v3.x() - v2.x()) * (p.y() - v3.y()))
            / denominator;
        let b = ((v3.y() - v1.y()) * (p.x() - v3.x()) + (v1.x() - v3.x()) * (p.y() - v3.y()))
            / denominator;
        let c = T::Scalar::ONE - a - b;

        let unit = |w: T::Scalar| T::Scalar::ZERO <= w && w <= T::Scalar::ONE;
        unit(a) && unit(b) && unit(c)
    }
}

/// The four corners of the rectangular region being triangulated.
///
/// Note that the corners are taken as absolute coordinates:
/// `Bounds::new(x1, y1, x2, y2)` spans `(x1, y1)` to `(x2, y2)`, the last two
/// values are *not* a width and height offset.
#[derive(PartialEq, Copy, Clone)]
pub struct Bounds<T: GenericVector2> {
    pub upper_left: T,
    pub upper_right: T,
    pub lower_left: T,
    pub lower_right: T,
}

impl<T: GenericVector2> Bounds<T> {
    pub fn new(x1: T::Scalar, y1: T::Scalar, x2: T::Scalar, y2: T::Scalar) -> Self {
        Self {
            upper_left: T::new_2d(x1, y1),
            upper_right: T::new_2d(x2, y1),
            lower_left: T::new_2d(x1, y2),
            lower_right: T::new_2d(x2, y2),
        }
    }

    /// The corners in the order UL, UR, LL, LR
    #[inline]
    pub fn corners(&self) -> [T; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_left,
            self.lower_right,
        ]
    }

    /// The four triangles fanning out from `apex` to each side of the rectangle, in the order
    /// top, left, right, bottom.
    /// They only tile the rectangle if `apex` lies inside it, this is not checked.
    pub(crate) fn fan(&self, apex: T) -> [Triangle<T>; 4] {
        [
            Triangle::new(self.upper_left, self.upper_right, apex),
            Triangle::new(self.upper_left, self.lower_left, apex),
            Triangle::new(self.upper_right, self.lower_right, apex),
            Triangle::new(self.lower_left, self.lower_right, apex),
        ]
    }
}

pub(crate) fn format_float<F: Float + fmt::Display>(value: F) -> String {
    if value.fract().is_zero() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
