//! Shortest-path search over elevation grids.
//!
//! A step moves to one of the four orthogonal neighbours and may climb at
//! most one elevation unit; descending is unrestricted. Every step costs 1,
//! and the resulting graph is directed.
//!
//! - **Adjacency** precomputed per-cell neighbor lists ([`Adjacency::new`])
//!   and their transpose ([`Adjacency::reversed`])
//! - **Dijkstra** single-source queries ([`PathRange::shortest_distance`],
//!   [`PathRange::shortest_path`]) and the best of several starts
//!   ([`PathRange::shortest_from_many`])
//! - **BFS** distance maps ([`PathRange::bfs_map`]), and the one-pass
//!   best-of-many-starts query on the reversed graph
//!   ([`PathRange::nearest_source`])
//!
//! All searches operate through [`PathRange`], which owns the per-run
//! search state. Unreachable targets are reported with the [`UNREACHABLE`]
//! sentinel or a `None` path, never as an error.

mod adjacency;
mod bfs;
mod dijkstra;
mod pathrange;
mod traits;

pub use adjacency::Adjacency;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::Pather;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use hillpath_core::Point;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
