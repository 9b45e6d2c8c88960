use hillpath_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, NodeRef, ShowDistance, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Run Dijkstra from `from` until `to` is finalized or the frontier
    /// empties. Returns whether `to` was reached.
    ///
    /// All node state is reset first; afterwards it describes this run only.
    fn dijkstra_run<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> bool {
        self.reset_search();
        let (Some(si), Some(goal)) = (self.idx(from), self.idx(to)) else {
            return false;
        };

        self.distance[si] = 0;
        self.open.push(NodeRef { idx: si, dist: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break false;
            };
            let ci = current.idx;
            // Skip stale entries.
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;
            self.expanded += 1;
            if ci == goal {
                break true;
            }

            let current_dist = self.distance[ci];
            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                let tentative = current_dist + 1;
                if tentative >= self.distance[ni] {
                    continue;
                }
                self.distance[ni] = tentative;
                self.parent[ni] = ci;
                self.open.push(NodeRef {
                    idx: ni,
                    dist: tentative,
                });
            }
        };

        self.nbuf = nbuf;
        log::debug!(
            "dijkstra {} -> {}: {} after expanding {} cells",
            from,
            to,
            if found { "reached" } else { "unreachable" },
            self.expanded
        );
        found
    }

    /// Fewest steps from `from` to `to`, or [`UNREACHABLE`] if no legal path
    /// exists (including when either point lies outside the range).
    pub fn shortest_distance<P: Pather>(&mut self, pather: &P, from: Point, to: Point) -> i32 {
        if self.dijkstra_run(pather, from, to) {
            self.distance_at(to)
        } else {
            UNREACHABLE
        }
    }

    /// One shortest path from `from` to `to`, both endpoints included, or
    /// `None` if `to` is unreachable.
    ///
    /// The path has `shortest_distance(from, to) + 1` points.
    pub fn shortest_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        if !self.dijkstra_run(pather, from, to) {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = self.idx(to)?;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        Some(path)
    }

    /// Minimum over `starts` of the fewest steps to `to`, running one full
    /// search per start. Returns [`UNREACHABLE`] if no start reaches `to`
    /// or `starts` is empty.
    pub fn shortest_from_many<P: Pather>(
        &mut self,
        pather: &P,
        starts: &[Point],
        to: Point,
    ) -> i32 {
        let mut best = UNREACHABLE;
        let mut reached = 0usize;
        for &start in starts {
            let d = self.shortest_distance(pather, start, to);
            if d != UNREACHABLE {
                reached += 1;
                best = best.min(d);
            }
        }
        log::debug!(
            "{} of {} starts reach {}, best distance {}",
            reached,
            starts.len(),
            to,
            ShowDistance(best)
        );
        best
    }
}

#[cfg(test)]
mod tests {
    use hillpath_core::HeightMap;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::Adjacency;

    const SAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    fn sample() -> (HeightMap, Adjacency, PathRange) {
        let map: HeightMap = SAMPLE.parse().unwrap();
        let adj = Adjacency::new(&map);
        let pr = PathRange::new(map.bounds());
        (map, adj, pr)
    }

    /// A random map with small elevations so both reachable and unreachable
    /// pairs show up.
    fn random_map(rng: &mut StdRng) -> HeightMap {
        let w = rng.random_range(1..=8usize);
        let h = rng.random_range(1..=8usize);
        let rows: Vec<Vec<u8>> = (0..h)
            .map(|_| (0..w).map(|_| rng.random_range(0..=4u8)).collect::<Vec<u8>>())
            .collect();
        let start = Point::new(rng.random_range(0..w as i32), rng.random_range(0..h as i32));
        let end = Point::new(rng.random_range(0..w as i32), rng.random_range(0..h as i32));
        HeightMap::from_rows(rows, start, end).unwrap()
    }

    fn assert_legal_path(map: &HeightMap, path: &[Point]) {
        for step in path.windows(2) {
            assert!(
                map.can_step(step[0], step[1]),
                "illegal step {} -> {}",
                step[0],
                step[1]
            );
        }
    }

    #[test]
    fn sample_shortest_path_is_31() {
        let (map, adj, mut pr) = sample();
        assert_eq!(pr.shortest_distance(&adj, map.start(), map.end()), 31);
        let path = pr.shortest_path(&adj, map.start(), map.end()).unwrap();
        assert_eq!(path.len(), 32);
        assert_eq!(path.first(), Some(&map.start()));
        assert_eq!(path.last(), Some(&map.end()));
        assert_legal_path(&map, &path);
    }

    #[test]
    fn sample_best_of_lowest_cells_is_29() {
        let (map, adj, mut pr) = sample();
        let starts = map.lowest_cells();
        assert_eq!(pr.shortest_from_many(&adj, &starts, map.end()), 29);
    }

    #[test]
    fn self_distance_is_zero() {
        let (map, adj, mut pr) = sample();
        for p in map.bounds() {
            assert_eq!(pr.shortest_distance(&adj, p, p), 0);
            assert_eq!(pr.shortest_path(&adj, p, p), Some(vec![p]));
        }
    }

    #[test]
    fn steep_step_is_one_way() {
        // a c: climbing from a to c is forbidden, descending is fine.
        let map = HeightMap::from_rows(vec![vec![0, 2]], Point::new(0, 0), Point::new(1, 0))
            .unwrap();
        let adj = Adjacency::new(&map);
        let mut pr = PathRange::new(map.bounds());
        let (low, high) = (Point::new(0, 0), Point::new(1, 0));
        assert_eq!(pr.shortest_distance(&adj, low, high), UNREACHABLE);
        assert_eq!(pr.shortest_distance(&adj, high, low), 1);
    }

    #[test]
    fn wall_yields_unreachable() {
        // A column of 'z' between S and E that nothing low can climb.
        let map: HeightMap = "Sazab\naazab\naazaE".parse().unwrap();
        let adj = Adjacency::new(&map);
        let mut pr = PathRange::new(map.bounds());
        assert_eq!(pr.shortest_distance(&adj, map.start(), map.end()), UNREACHABLE);
        assert_eq!(pr.shortest_path(&adj, map.start(), map.end()), None);
        // Everything west of the wall was explored before giving up.
        assert_eq!(pr.expanded(), 6);
        assert!(!pr.visited_at(map.end()));
    }

    #[test]
    fn points_outside_range_are_unreachable() {
        let (map, adj, mut pr) = sample();
        assert_eq!(pr.shortest_distance(&adj, Point::new(-1, 0), map.end()), UNREACHABLE);
        assert_eq!(pr.shortest_path(&adj, map.start(), Point::new(8, 0)), None);
    }

    #[test]
    fn visited_cells_hold_final_distances() {
        let (map, adj, mut pr) = sample();
        let far = Point::new(0, 4);
        let mut exact = PathRange::new(map.bounds());
        exact.bfs_map(&adj, &[map.start()], UNREACHABLE);

        pr.shortest_distance(&adj, map.start(), map.end());
        let mut visited = 0;
        for p in map.bounds() {
            if pr.visited_at(p) {
                visited += 1;
                assert_eq!(pr.distance_at(p), exact.bfs_at(p), "at {p}");
            } else {
                // Tentative distances are upper bounds.
                assert!(pr.distance_at(p) >= exact.bfs_at(p), "at {p}");
            }
        }
        assert_eq!(visited, pr.expanded());
        assert!(pr.visited_at(far));
    }

    #[test]
    fn predecessors_form_a_tree_back_to_source() {
        let (map, adj, mut pr) = sample();
        pr.shortest_distance(&adj, map.start(), map.end());
        assert_eq!(pr.predecessor_at(map.start()), None);
        for p in map.bounds() {
            if let Some(prev) = pr.predecessor_at(p) {
                assert!(map.can_step(prev, p));
                assert_eq!(pr.distance_at(p), pr.distance_at(prev) + 1);
            }
        }
    }

    #[test]
    fn state_does_not_leak_between_runs() {
        let (map, adj, mut pr) = sample();
        let end = map.end();
        let first = pr.shortest_distance(&adj, map.start(), end);
        // A run that stops at once must not inherit the previous distances.
        assert_eq!(pr.shortest_distance(&adj, end, end), 0);
        assert_eq!(pr.distance_at(map.start()), UNREACHABLE);
        assert_eq!(pr.shortest_distance(&adj, map.start(), end), first);
    }

    #[test]
    fn many_equals_min_of_singles_on_random_maps() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let map = random_map(&mut rng);
            let adj = Adjacency::new(&map);
            let mut pr = PathRange::new(map.bounds());
            let starts = map.lowest_cells();
            let expected = starts
                .iter()
                .map(|&s| pr.shortest_distance(&adj, s, map.end()))
                .min()
                .unwrap_or(UNREACHABLE);
            assert_eq!(pr.shortest_from_many(&adj, &starts, map.end()), expected);
        }
    }

    #[test]
    fn distances_match_bfs_on_random_maps() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let map = random_map(&mut rng);
            let adj = Adjacency::new(&map);
            let mut pr = PathRange::new(map.bounds());
            let mut bfs = PathRange::new(map.bounds());
            bfs.bfs_map(&map, &[map.start()], UNREACHABLE);
            for target in map.bounds() {
                let d = pr.shortest_distance(&adj, map.start(), target);
                assert_eq!(d, bfs.bfs_at(target));
                match pr.shortest_path(&adj, map.start(), target) {
                    Some(path) => {
                        assert_eq!(path.len() as i32 - 1, d);
                        assert_eq!(path[0], map.start());
                        assert_eq!(*path.last().unwrap(), target);
                        assert_legal_path(&map, &path);
                    }
                    None => assert_eq!(d, UNREACHABLE),
                }
            }
        }
    }
}
