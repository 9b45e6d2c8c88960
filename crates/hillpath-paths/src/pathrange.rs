use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use hillpath_core::{Point, Range};

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "unreachable" in distance queries and maps.
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Displays a distance, spelling out [`UNREACHABLE`].
pub(crate) struct ShowDistance(pub(crate) i32);

impl fmt::Display for ShowDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == UNREACHABLE {
            f.write_str("unreachable")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// Frontier entry for Dijkstra searches
// ---------------------------------------------------------------------------

/// Reference into the node arrays, ordered by tentative distance for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dist: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest distance first;
        // ties go to the lower index so runs are reproducible.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Owner of all per-query search state for a grid rectangle.
///
/// Node state (`visited`, `distance`, `predecessor`) lives in flat vectors
/// indexed by cell, separate from the map itself. Every Dijkstra run resets
/// all of it before starting, so consecutive queries never observe each
/// other's results. Buffers are kept between runs to avoid reallocation.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // Dijkstra state
    pub(crate) distance: Vec<i32>,
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) expanded: usize,
    // BFS state
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_queue: VecDeque<usize>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            distance: vec![UNREACHABLE; len],
            visited: vec![false; len],
            parent: vec![NO_PARENT; len],
            open: BinaryHeap::new(),
            expanded: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_queue: VecDeque::new(),
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Reinitialize every cell's Dijkstra state.
    pub(crate) fn reset_search(&mut self) {
        self.distance.fill(UNREACHABLE);
        self.visited.fill(false);
        self.parent.fill(NO_PARENT);
        self.open.clear();
        self.expanded = 0;
    }

    // -----------------------------------------------------------------------
    // State left by the last Dijkstra run
    // -----------------------------------------------------------------------

    /// Tentative (or, for visited cells, final) distance at `p`.
    ///
    /// Returns [`UNREACHABLE`] outside the range or for cells never reached.
    pub fn distance_at(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.distance[i])
    }

    /// Whether `p` was finalized by the last run.
    pub fn visited_at(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    /// The cell from which `p` was last improved, if any.
    pub fn predecessor_at(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        let parent = self.parent[i];
        if parent == NO_PARENT {
            None
        } else {
            Some(self.point(parent))
        }
    }

    /// Number of cells finalized by the last run.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
