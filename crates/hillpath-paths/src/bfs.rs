use hillpath_core::Point;

use crate::PathRange;
use crate::pathrange::{PathNode, ShowDistance, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes in visiting order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        self.bfs_map.fill(UNREACHABLE);
        self.bfs_results.clear();

        let mut queue = std::mem::take(&mut self.bfs_queue);
        queue.clear();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        self.bfs_queue = queue;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }

    /// Fewest steps to `to` from the nearest of `starts`, answered with a
    /// single search.
    ///
    /// `reversed` must enumerate *incoming* edges of the graph being asked
    /// about (see [`Adjacency::reversed`](crate::Adjacency::reversed)): the
    /// search runs backwards from `to` and reads off every start at once.
    /// Agrees with [`shortest_from_many`](Self::shortest_from_many) on the
    /// forward graph.
    pub fn nearest_source<P: Pather>(&mut self, reversed: &P, starts: &[Point], to: Point) -> i32 {
        let reached = self.bfs_map(reversed, &[to], UNREACHABLE).len();
        let best = starts
            .iter()
            .map(|&s| self.bfs_at(s))
            .min()
            .unwrap_or(UNREACHABLE);
        log::debug!(
            "reverse search from {} reached {} cells, best of {} starts {}",
            to,
            reached,
            starts.len(),
            ShowDistance(best)
        );
        best
    }
}
