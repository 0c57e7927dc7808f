// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 The trisubdiv developers
// This file is part of the trisubdiv crate.
mod impls;

use crate::{
    geo::{Bounds, Triangle},
    util::NearestTwoTracker,
    TriSubdivError,
};
use slotmap::{new_key_type, SlotMap};
use std::alloc::Layout;
use tracing::{debug, trace};
use vector_traits::{num_traits::Float, GenericVector2};

new_key_type! {
    /// A stable handle to a triangle of a [`TriSubdiv`].
    /// The handle stays valid until the triangle is subdivided.
    pub struct TriangleKey;
}

/// The insertion strategy of a [`TriSubdiv`], fixed when the engine is built.
///
/// The two strategies do not share invariants: subdivision keeps a tiling of the bounding
/// rectangle while nearest neighbor insertion produces a (possibly overlapping) triangle soup.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum InsertionMode {
    #[default]
    Subdivision,
    NearestNeighbor,
}

/// What happened to the triangle list when a point was inserted.
///
/// The point itself is always recorded, even when no triangle was created.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum InsertionOutcome {
    /// The first subdivision point split the bounding rectangle into four triangles.
    Seeded([TriangleKey; 4]),
    /// The triangle at `position` was replaced by three new triangles, now occupying
    /// `position..position + 3`.
    Subdivided {
        position: usize,
        created: [TriangleKey; 3],
    },
    /// No triangle contained the point, the triangle list is unchanged.
    NotCovered,
    /// A triangle was appended connecting the point to its two nearest predecessors.
    Connected(TriangleKey),
    /// Fewer than two points preceded this one, no triangle was appended.
    InsufficientNeighbors,
}

impl InsertionOutcome {
    /// Returns true if the triangle list changed
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            InsertionOutcome::NotCovered | InsertionOutcome::InsufficientNeighbors
        )
    }
}

/// Builds a [`TriSubdiv`].
///
/// ```rust,ignore
/// let tri = TriSubdivBuilder::<DVec2>::default()
///     .with_region(0.0, 0.0, 500.0, 500.0)?
///     .with_mode(InsertionMode::NearestNeighbor)
///     .build()?;
/// ```
pub struct TriSubdivBuilder<T: GenericVector2> {
    region: Option<Bounds<T>>,
    mode: InsertionMode,
    capacity: usize,
}

impl<T: GenericVector2> TriSubdivBuilder<T> {
    /// The rectangle to triangulate. `x2` and `y2` are the absolute coordinates of the
    /// lower right corner.
    pub fn with_region(
        mut self,
        x1: T::Scalar,
        y1: T::Scalar,
        x2: T::Scalar,
        y2: T::Scalar,
    ) -> Result<Self, TriSubdivError> {
        if ![x1, y1, x2, y2].into_iter().all(Float::is_finite) {
            return Err(TriSubdivError::InvalidParameter(format!(
                "the region corners must be finite: ({},{}) ({},{})",
                x1, y1, x2, y2
            )));
        }
        self.region = Some(Bounds::new(x1, y1, x2, y2));
        Ok(self)
    }

    pub fn with_mode(mut self, mode: InsertionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reserve room for this many points up front
    pub fn with_capacity(mut self, points: usize) -> Self {
        self.capacity = points;
        self
    }

    /// Finalizes the build of the TriSubdiv
    pub fn build(self) -> Result<TriSubdiv<T>, TriSubdivError> {
        let bounds = self
            .region
            .ok_or_else(|| TriSubdivError::MissingParameter("missing region".to_string()))?;
        let mut tri = TriSubdiv::with_bounds(bounds, self.mode);
        tri.reserve(self.capacity)?;
        Ok(tri)
    }
}

/// An incremental triangulation of points inside a rectangular region.
///
/// The triangles live in an arena addressed by [`TriangleKey`], the current decomposition is
/// the ordered list of live keys. The list order is the draw order, and it also decides which
/// triangle is split when a point lies on an edge shared by two of them (the first one wins).
pub struct TriSubdiv<T: GenericVector2> {
    bounds: Bounds<T>,
    mode: InsertionMode,
    points: Vec<T>,
    arena: SlotMap<TriangleKey, Triangle<T>>,
    order: Vec<TriangleKey>,
}

impl<T: GenericVector2> TriSubdiv<T> {
    /// Creates an empty triangulation.
    ///
    /// The corners are UL=(x1,y1), UR=(x2,y1), LL=(x1,y2) and LR=(x2,y2), i.e. `x2` and `y2`
    /// are absolute coordinates and not a width and height.
    pub fn new(
        x1: T::Scalar,
        y1: T::Scalar,
        x2: T::Scalar,
        y2: T::Scalar,
        mode: InsertionMode,
    ) -> Self {
        Self::with_bounds(Bounds::new(x1, y1, x2, y2), mode)
    }

    pub fn with_bounds(bounds: Bounds<T>, mode: InsertionMode) -> Self {
        Self {
            bounds,
            mode,
            points: Vec::new(),
            arena: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn reserve(&mut self, points: usize) -> Result<(), TriSubdivError> {
        let too_large = || {
            TriSubdivError::InvalidParameter(format!("capacity {} is too large", points))
        };
        // subdivision produces 2 triangles per point, plus the two extra of the first split
        let triangles = points
            .checked_mul(2)
            .and_then(|t| t.checked_add(2))
            .ok_or_else(too_large)?;
        // the arena has no fallible reserve, bound its slots (value plus version) up front
        let _ = Layout::array::<(Triangle<T>, TriangleKey)>(triangles).map_err(|_| too_large())?;
        self.points.try_reserve(points).map_err(|_| too_large())?;
        self.order.try_reserve(triangles).map_err(|_| too_large())?;
        self.arena.reserve(triangles);
        Ok(())
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds<T> {
        &self.bounds
    }

    #[inline]
    pub fn mode(&self) -> InsertionMode {
        self.mode
    }

    /// Every point inserted so far, in insertion order
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// The number of live triangles
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The keys of the live triangles, in draw order
    #[inline]
    pub fn triangle_keys(&self) -> &[TriangleKey] {
        &self.order
    }

    /// Looks up a triangle by key. Returns `None` if the triangle has been subdivided.
    #[inline]
    pub fn get(&self, key: TriangleKey) -> Option<&Triangle<T>> {
        self.arena.get(key)
    }

    /// Iterates over the live triangles in draw order.
    /// The iterator borrows the engine, so it always reflects the state at the time of the call.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = &Triangle<T>> + Clone + '_ {
        self.order.iter().map(move |key| &self.arena[*key])
    }

    /// Iterates over every triangle edge, three per triangle, in draw order
    pub fn edges(&self) -> Edges<'_, T> {
        Edges {
            tri: self,
            next: 0,
        }
    }

    /// Iterates over the animation frames, frame `n` shows the first `n` triangles
    pub fn frames(&self) -> Frames<'_, T> {
        Frames {
            tri: self,
            shown: 0,
        }
    }

    fn require_mode(&self, requested: InsertionMode) -> Result<(), TriSubdivError> {
        if self.mode != requested {
            return Err(TriSubdivError::ModeMismatch {
                engine: self.mode,
                requested,
            });
        }
        Ok(())
    }

    /// Inserts a point using the strategy the engine was built for
    pub fn insert(&mut self, point: T) -> Result<InsertionOutcome, TriSubdivError> {
        match self.mode {
            InsertionMode::Subdivision => self.insert_sd(point),
            InsertionMode::NearestNeighbor => self.insert_nn(point),
        }
    }

    /// Inserts every point in order, returning one outcome per point
    pub fn extend_from<I>(&mut self, points: I) -> Result<Vec<InsertionOutcome>, TriSubdivError>
    where
        I: IntoIterator<Item = T>,
    {
        points.into_iter().map(|p| self.insert(p)).collect()
    }

    /// Inserts a point by subdivision.
    ///
    /// The first point splits the bounding rectangle into four triangles:
    /// (UL,UR,p), (UL,LL,p), (UR,LR,p), (LL,LR,p). There is no bounds check, a point outside
    /// the rectangle still produces these four (overlapping) triangles.
    ///
    /// Every later point splits the first triangle, in list order, that contains it. If no
    /// triangle contains the point it is only recorded in the point list.
    pub fn insert_sd(&mut self, point: T) -> Result<InsertionOutcome, TriSubdivError> {
        self.require_mode(InsertionMode::Subdivision)?;
        self.points.push(point);

        if self.order.is_empty() {
            let keys = self.bounds.fan(point).map(|t| self.arena.insert(t));
            self.order.extend_from_slice(&keys);
            debug!(?point, bounds = ?self.bounds, "seeded the region with four triangles");
            return Ok(InsertionOutcome::Seeded(keys));
        }

        let arena = &self.arena;
        let position = self
            .order
            .iter()
            .position(|key| arena[*key].contains(point));
        match position {
            Some(position) => {
                let created = self.subdivide(position, point)?;
                Ok(InsertionOutcome::Subdivided { position, created })
            }
            None => {
                debug!(?point, triangles = self.order.len(), "no triangle contains the point");
                Ok(InsertionOutcome::NotCovered)
            }
        }
    }

    /// Replaces the triangle at `index` with three triangles sharing `point`.
    ///
    /// With the original vertices (v1,v2,v3) the new triangles are C=(p,v3,v1), B=(p,v2,v3)
    /// and A=(p,v1,v2), placed at `index`, `index + 1` and `index + 2`. The rest of the list
    /// keeps its order. `point` is neither recorded nor checked to be inside the triangle,
    /// [`insert_sd`](Self::insert_sd) is the public entry that keeps the tiling intact.
    pub(crate) fn subdivide(
        &mut self,
        index: usize,
        point: T,
    ) -> Result<[TriangleKey; 3], TriSubdivError> {
        self.require_mode(InsertionMode::Subdivision)?;
        let key = *self.order.get(index).ok_or_else(|| {
            TriSubdivError::InvalidParameter(format!(
                "triangle index {} is out of range, there are {} triangles",
                index,
                self.order.len()
            ))
        })?;
        let original = self.arena.remove(key).ok_or_else(|| {
            TriSubdivError::InternalError(format!("triangle {:?} is listed but not stored", key))
        })?;
        let [v1, v2, v3] = original.vertices();
        let created = [(v3, v1), (v2, v3), (v1, v2)]
            .map(|(a, b)| self.arena.insert(Triangle::new(point, a, b)));
        let _ = self.order.splice(index..=index, created);
        trace!(index, ?original, "subdivided");
        debug!(?point, index, triangles = self.order.len(), "subdivided a triangle");
        Ok(created)
    }

    /// Inserts a point by connecting it to its two nearest predecessors.
    ///
    /// Ties in distance are won by the point inserted first. The new triangle is appended
    /// last and may overlap any existing triangle. With fewer than two predecessors the point
    /// is recorded but no triangle is created.
    pub fn insert_nn(&mut self, point: T) -> Result<InsertionOutcome, TriSubdivError> {
        self.require_mode(InsertionMode::NearestNeighbor)?;
        let mut tracker = NearestTwoTracker::default();
        for (index, p) in self.points.iter().enumerate() {
            tracker.insert(point.distance_sq(*p), index);
        }
        self.points.push(point);

        let Some((nearest, second)) = tracker.get() else {
            debug!(?point, points = self.points.len(), "too few points to form a triangle");
            return Ok(InsertionOutcome::InsufficientNeighbors);
        };
        let triangle = Triangle::new(point, self.points[nearest], self.points[second]);
        let key = self.arena.insert(triangle);
        self.order.push(key);
        debug!(?point, nearest, second, "connected to the nearest neighbors");
        Ok(InsertionOutcome::Connected(key))
    }
}

/// Iterator over the edges of a [`TriSubdiv`], see [`TriSubdiv::edges`]
pub struct Edges<'a, T: GenericVector2> {
    tri: &'a TriSubdiv<T>,
    next: usize,
}

impl<'a, T: GenericVector2> Iterator for Edges<'a, T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.tri.order.get(self.next / 3)?;
        let edge = self.tri.arena[*key].edges()[self.next % 3];
        self.next += 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tri.order.len() * 3 - self.next;
        (remaining, Some(remaining))
    }
}

/// One step of the triangulation animation
#[derive(Clone, Copy)]
pub struct Frame<'a, T: GenericVector2> {
    tri: &'a TriSubdiv<T>,
    shown: usize,
}

impl<'a, T: GenericVector2> Frame<'a, T> {
    /// The number of triangles visible in this frame
    pub fn len(&self) -> usize {
        self.shown
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }

    /// The triangle drawn in this frame
    pub fn latest(&self) -> &'a Triangle<T> {
        &self.tri.arena[self.tri.order[self.shown - 1]]
    }

    /// Every triangle visible in this frame, in draw order
    pub fn triangles(&self) -> impl Iterator<Item = &'a Triangle<T>> + 'a {
        let tri = self.tri;
        tri.order[..self.shown].iter().map(move |key| &tri.arena[*key])
    }
}

/// Iterator over the animation frames of a [`TriSubdiv`], see [`TriSubdiv::frames`]
pub struct Frames<'a, T: GenericVector2> {
    tri: &'a TriSubdiv<T>,
    shown: usize,
}

impl<'a, T: GenericVector2> Iterator for Frames<'a, T> {
    type Item = Frame<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.shown >= self.tri.order.len() {
            return None;
        }
        self.shown += 1;
        Some(Frame {
            tri: self.tri,
            shown: self.shown,
        })
    }
}
