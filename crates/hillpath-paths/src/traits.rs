use hillpath_core::{HeightMap, Point};

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Edges are directed: `q` appearing among the neighbors of `p` says
/// nothing about `p` appearing among the neighbors of `q`. Every edge has
/// unit cost.
pub trait Pather {
    /// Append the cells reachable from `p` in one step into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Evaluates the climb rule on the fly, without a precomputed adjacency.
impl Pather for HeightMap {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.can_step(p, n)));
    }
}
