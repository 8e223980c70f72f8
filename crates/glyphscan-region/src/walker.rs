//! Similarity-based flood fill
//!
//! A single breadth-first traversal drives both extent accumulation and
//! reachability testing, so adjacency and clipping rules cannot diverge
//! between them. Two 8-connected neighbors are adjacent when both lie in
//! the traversal region and the neighbor is similar to the *seed* color;
//! similarity never chains from the most recently visited pixel.

use crate::classify::is_similar;
use crate::error::{RegionError, RegionResult};
use crate::visited::VisitedGrid;
use glyphscan_core::{Box, Color, PixelSource, Point, Region};
use std::collections::VecDeque;
use std::ops::ControlFlow;

/// 8-connected neighbor offsets
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Flood-fill walker over one region of a pixel source
pub struct ComponentWalker<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    region: Region,
}

impl<'a, S: PixelSource + ?Sized> ComponentWalker<'a, S> {
    /// Create a walker confined to `region`
    ///
    /// The region is clipped to the image first.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::EmptyRegion`] if nothing of the region lies
    /// inside the image.
    pub fn new(source: &'a S, region: Region) -> RegionResult<Self> {
        let region = region.clip_to(source.width(), source.height());
        if region.is_empty() {
            return Err(RegionError::EmptyRegion);
        }
        Ok(Self { source, region })
    }

    /// The (clipped) traversal region
    pub fn region(&self) -> Region {
        self.region
    }

    /// Color at a point already known to be inside the region
    #[inline]
    fn color(&self, point: Point) -> Color {
        self.source.color_at(point.x as u32, point.y as u32)
    }

    fn check(&self, point: Point) -> RegionResult<()> {
        if self.region.contains(point) {
            Ok(())
        } else {
            Err(RegionError::InvalidSeed {
                x: point.x,
                y: point.y,
            })
        }
    }

    /// Breadth-first traversal from `seed`
    ///
    /// `visit` is called once for every dequeued point, seed first.
    /// Returning `ControlFlow::Break` stops the traversal immediately;
    /// the result tells whether that happened.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSeed`] if the seed is outside the region.
    pub fn walk<F>(&self, seed: Point, visit: F) -> RegionResult<ControlFlow<()>>
    where
        F: FnMut(Point) -> ControlFlow<()>,
    {
        let mut visited = VisitedGrid::new(self.region);
        self.walk_marking(seed, &mut visited, visit)
    }

    fn walk_marking<F>(
        &self,
        seed: Point,
        visited: &mut VisitedGrid,
        mut visit: F,
    ) -> RegionResult<ControlFlow<()>>
    where
        F: FnMut(Point) -> ControlFlow<()>,
    {
        self.check(seed)?;
        let anchor = self.color(seed);

        let mut queue = VecDeque::new();
        visited.mark(seed);
        queue.push_back(seed);

        while let Some(p) = queue.pop_front() {
            if visit(p).is_break() {
                return Ok(ControlFlow::Break(()));
            }

            for (dx, dy) in NEIGHBORS {
                let n = Point::new(p.x + dx, p.y + dy);
                if !self.region.contains(n) || visited.is_marked(n) {
                    continue;
                }
                if is_similar(anchor, self.color(n)) {
                    visited.mark(n);
                    queue.push_back(n);
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Every point connected to `seed`, as a visited grid
    pub fn flood(&self, seed: Point) -> RegionResult<VisitedGrid> {
        let mut visited = VisitedGrid::new(self.region);
        self.walk_marking(seed, &mut visited, |_| ControlFlow::Continue(()))?;
        Ok(visited)
    }

    /// Bounding box of the blob containing `seed`
    pub fn find_extent(&self, seed: Point) -> RegionResult<Box> {
        let mut extent = Box::at(seed);
        self.walk(seed, |p| {
            extent.include(p);
            ControlFlow::Continue(())
        })?;
        Ok(extent)
    }

    /// Check whether `end` can be reached from `start`
    ///
    /// Similarity is anchored to the color at `start`, so the relation is
    /// only guaranteed symmetric inside a uniformly colored component.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSeed`] if either point is outside the
    /// region.
    pub fn is_reachable(&self, start: Point, end: Point) -> RegionResult<bool> {
        self.check(end)?;
        let flow = self.walk(start, |p| {
            if p == end {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(flow.is_break())
    }
}
