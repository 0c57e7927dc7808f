// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.

use super::*;
use std::io::Cursor;
use vector_traits::glam::{dvec2, DVec2, Vec2};

#[test]
fn test_parse_points_pairs_across_lines() -> Result<(), TriSubdivError> {
    let data = "120 80\n 130 85 \n\n140\n90 150 95\n";
    let points = parse_points::<DVec2, _>(Cursor::new(data))?;
    assert_eq!(
        points,
        vec![
            dvec2(120.0, 80.0),
            dvec2(130.0, 85.0),
            dvec2(140.0, 90.0),
            dvec2(150.0, 95.0)
        ]
    );
    Ok(())
}

#[test]
fn test_parse_points_stops_at_garbage() -> Result<(), TriSubdivError> {
    let data = "1 2\n3 4\n5 x 6\n7 8\n";
    let points = parse_points::<Vec2, _>(Cursor::new(data))?;
    // the unpaired 5 is dropped together with everything after the bad token
    assert_eq!(points, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    Ok(())
}

#[test]
fn test_parse_points_stops_at_invalid_utf8() -> Result<(), TriSubdivError> {
    let data: &[u8] = b"1 2\n3 4\n\xff\xfe\n5 6";
    let points = parse_points::<DVec2, _>(Cursor::new(data))?;
    assert_eq!(points, vec![dvec2(1.0, 2.0), dvec2(3.0, 4.0)]);
    Ok(())
}

#[test]
fn test_parse_points_empty() -> Result<(), TriSubdivError> {
    let points = parse_points::<DVec2, _>(Cursor::new(""))?;
    assert!(points.is_empty());
    Ok(())
}

#[test]
fn test_read_points_missing_file() {
    let rv = read_points::<DVec2>("this/file/does/not/exist.txt");
    assert!(matches!(rv, Err(TriSubdivError::IoError(_))));
}
