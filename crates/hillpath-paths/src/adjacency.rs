//! Precomputed per-cell neighbor lists.

use hillpath_core::{HeightMap, Point, Range};

use crate::traits::Pather;

/// The legal-step graph of a [`HeightMap`], stored as one neighbor list
/// per cell.
///
/// A map is always non-empty and rectangular (its constructors reject
/// anything else), so building the adjacency itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    rng: Range,
    width: usize,
    lists: Vec<Vec<Point>>,
}

impl Adjacency {
    /// For every cell, list the orthogonal neighbors (up, right, down,
    /// left) inside the grid whose elevation is at most one above it.
    pub fn new(map: &HeightMap) -> Self {
        let rng = map.bounds();
        let lists = rng
            .iter()
            .map(|p| {
                p.neighbors_4()
                    .into_iter()
                    .filter(|&n| map.can_step(p, n))
                    .collect()
            })
            .collect();
        Self {
            rng,
            width: rng.width() as usize,
            lists,
        }
    }

    /// The transposed graph: `u` lists `v` iff `v` lists `u` here.
    ///
    /// Searching the transposed graph from a target gives, for every cell,
    /// the distance *to* that target.
    pub fn reversed(&self) -> Self {
        let mut lists = vec![Vec::new(); self.lists.len()];
        for (from, targets) in self.rng.iter().zip(&self.lists) {
            for &to in targets {
                let i = self.index(to);
                lists[i].push(from);
            }
        }
        Self {
            rng: self.rng,
            width: self.width,
            lists,
        }
    }

    /// Cells reachable from `p` in one step; empty outside the grid.
    pub fn neighbors_of(&self, p: Point) -> &[Point] {
        if !self.rng.contains(p) {
            return &[];
        }
        &self.lists[self.index(p)]
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y - self.rng.min.y) as usize * self.width + (p.x - self.rng.min.x) as usize
    }
}

impl Pather for Adjacency {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(self.neighbors_of(p));
    }
}
