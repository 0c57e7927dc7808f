// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.

use super::*;
use vector_traits::glam::vec2;

#[test]
fn test_symmetric_cross() {
    let points = symmetric_cross(dvec2(250.0, 250.0), 30.0, 500.0);
    // 0, 30, .. 480
    assert_eq!(points.len(), 17 * 4);
    assert_eq!(
        &points[4..8],
        &[
            dvec2(280.0, 250.0),
            dvec2(250.0, 280.0),
            dvec2(220.0, 250.0),
            dvec2(250.0, 220.0)
        ]
    );
}

#[test]
fn test_spiral_and_circle() {
    let center = dvec2(250.0, 250.0);
    let s = spiral(center, 25.0, 8.0 * std::f64::consts::PI, 0.1);
    assert_eq!(s.first(), Some(&center));
    assert!(s.len() > 250);
    for p in s.iter() {
        assert_eq!(p.round(), *p);
    }

    let c = circle(center, 100.0, 0.1);
    assert_eq!(c.len(), 63);
    for p in c.iter() {
        // rounding moves a point at most half a unit in each direction
        assert!(((p.distance(center)) - 100.0).abs() < 1.0, "{:?}", p);
    }
    assert!(!nn_spiral(center).is_empty());
}

#[test]
fn test_column_triangles() {
    let points = column_triangles(10.0, 250.0, 490.0, 20.0, 500.0, 30.0);
    assert_eq!(points.len(), 16 * 3);
    assert_eq!(
        &points[..3],
        &[dvec2(250.0, 20.0), dvec2(10.0, 20.0), dvec2(490.0, 20.0)]
    );
    assert_eq!(points.last(), Some(&dvec2(490.0, 470.0)));
}

#[test]
fn test_grid() {
    let points = grid(40.0, 500.0);
    assert_eq!(points.len(), 13 * 13);
    assert_eq!(points[0], dvec2(0.0, 0.0));
    assert_eq!(points[1], dvec2(0.0, 40.0));
    assert_eq!(points[13], dvec2(40.0, 0.0));
}

#[test]
fn test_sort_by_center_distance_is_stable() {
    let center = vec2(250.0, 250.0);
    let mut points = vec![
        vec2(0.0, 0.0),
        vec2(260.0, 250.0),
        vec2(250.0, 240.5),
        vec2(240.0, 250.0),
        vec2(250.0, 250.0),
    ];
    sort_by_center_distance(&mut points, center);
    assert_eq!(
        points,
        vec![
            vec2(250.0, 250.0),
            // 9.5 truncates to 9
            vec2(250.0, 240.5),
            // both at distance 10, original order kept
            vec2(260.0, 250.0),
            vec2(240.0, 250.0),
            vec2(0.0, 0.0),
        ]
    );
}
