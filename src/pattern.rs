// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.

//! Point sets that produce nice looking triangulations.
//!
//! All generators round the coordinates to whole numbers, so the patterns land on a pixel grid.
#[cfg(test)]
mod tests;

use itertools::iproduct;
use vector_traits::{
    glam::{dvec2, DVec2},
    num_traits::{Float, ToPrimitive},
    GenericVector2,
};

/// Samples `f` at `0, step, 2*step ..` while the parameter is below `end`
fn sample(end: f64, step: f64, f: impl Fn(f64) -> DVec2) -> Vec<DVec2> {
    (0..)
        .map(|i| i as f64 * step)
        .take_while(|t| *t < end)
        .map(|t| f(t).round())
        .collect()
}

/// Four arms growing out of `center`, one point per arm and step:
/// right, down, left, up.
pub fn symmetric_cross(center: DVec2, step: f64, extent: f64) -> Vec<DVec2> {
    sample(extent, step, |j| dvec2(j, j))
        .into_iter()
        .flat_map(|d| {
            [
                center + dvec2(d.x, 0.0),
                center + dvec2(0.0, d.y),
                center - dvec2(d.x, 0.0),
                center - dvec2(0.0, d.y),
            ]
        })
        .map(|p| p.round())
        .collect()
}

/// An archimedean spiral around `center`, `r = scale * angle`, sampled every `step` radians
/// up to `max_angle`.
pub fn spiral(center: DVec2, scale: f64, max_angle: f64, step: f64) -> Vec<DVec2> {
    sample(max_angle, step, |a| {
        center + dvec2(scale * a * a.cos(), scale * a * a.sin())
    })
}

/// The spiral used with nearest neighbor insertion: tighter and sparser than [`spiral`]
pub fn nn_spiral(center: DVec2) -> Vec<DVec2> {
    spiral(center, 15.0, 12.0 * std::f64::consts::PI, 0.4)
}

/// Points on a circle around `center`, sampled every `step` radians
pub fn circle(center: DVec2, radius: f64, step: f64) -> Vec<DVec2> {
    sample(std::f64::consts::TAU, step, |a| {
        center + dvec2(radius * a.cos(), radius * a.sin())
    })
}

/// Three columns of points (`x_center`, `x_left` and `x_right`), one row every `step`
/// starting at `y_start` and ending before `y_end`.
pub fn column_triangles(
    x_left: f64,
    x_center: f64,
    x_right: f64,
    y_start: f64,
    y_end: f64,
    step: f64,
) -> Vec<DVec2> {
    sample(y_end - y_start, step, |dy| dvec2(0.0, y_start + dy))
        .into_iter()
        .flat_map(|p| [dvec2(x_center, p.y), dvec2(x_left, p.y), dvec2(x_right, p.y)])
        .collect()
}

/// A regular grid from the origin up to (but excluding) `extent`, column by column.
pub fn grid(spacing: f64, extent: f64) -> Vec<DVec2> {
    let ticks = sample(extent, spacing, |t| dvec2(t, t));
    iproduct!(ticks.iter(), ticks.iter())
        .map(|(x, y)| dvec2(x.x, y.y))
        .collect()
}

/// Sorts `points` by their distance to `center`, truncated to whole units.
///
/// Points at the same truncated distance keep their relative order. Inserting points in this
/// order makes subdivision grow outwards from the center.
pub fn sort_by_center_distance<T: GenericVector2>(points: &mut [T], center: T) {
    points.sort_by_cached_key(|p| {
        ToPrimitive::to_i64(&Float::trunc((*p - center).magnitude())).unwrap_or(i64::MAX)
    });
}
