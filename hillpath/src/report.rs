//! Answers both hill-climbing queries for one map.

use std::fmt;
use std::time::Instant;

use clap::ValueEnum;
use hillpath_core::{HeightMap, PathOverlay, Point, format_path};
use hillpath_paths::{Adjacency, PathRange, UNREACHABLE};
use serde::Serialize;

/// How the best-of-many-starts query is answered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One Dijkstra search per lowest cell.
    #[default]
    Repeated,
    /// One breadth-first search backwards from the end cell.
    Reverse,
}

/// Results of both queries. Unreachable distances are `None`.
///
/// Serialized points use the `Point` fields, so `{"x": 5, "y": 2}` is
/// row 2, column 5. The text form prints the same cell as `(2, 5)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub start: Point,
    pub end: Point,
    pub distance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Point>>,
    pub candidates: usize,
    pub best_distance: Option<i32>,
    pub strategy: Strategy,
    #[serde(skip)]
    overlay: Option<String>,
}

fn finite(d: i32) -> Option<i32> {
    (d != UNREACHABLE).then_some(d)
}

impl Report {
    /// Run the start-to-end query and the lowest-cells query.
    ///
    /// With `keep_path`, the shortest path (if any) is kept for display.
    pub fn solve(map: &HeightMap, strategy: Strategy, keep_path: bool) -> Self {
        let t0 = Instant::now();
        let adj = Adjacency::new(map);
        let mut pr = PathRange::new(map.bounds());
        log::info!(
            "built {}x{} adjacency with {} edges in {:?}",
            map.width(),
            map.height(),
            adj.edge_count(),
            t0.elapsed()
        );

        let t1 = Instant::now();
        let path = pr.shortest_path(&adj, map.start(), map.end());
        let distance = path.as_ref().map(|p| p.len() as i32 - 1);
        log::info!("start to end query took {:?}", t1.elapsed());

        let t2 = Instant::now();
        let starts = map.lowest_cells();
        let best = match strategy {
            Strategy::Repeated => pr.shortest_from_many(&adj, &starts, map.end()),
            Strategy::Reverse => pr.nearest_source(&adj.reversed(), &starts, map.end()),
        };
        log::info!(
            "best of {} starts ({:?}) took {:?}",
            starts.len(),
            strategy,
            t2.elapsed()
        );

        let (path, overlay) = match path {
            Some(path) if keep_path => {
                let overlay = PathOverlay::new(map, &path).to_string();
                (Some(path), Some(overlay))
            }
            _ => (None, None),
        };

        Self {
            start: map.start(),
            end: map.end(),
            distance,
            path,
            candidates: starts.len(),
            best_distance: finite(best),
            strategy,
            overlay,
        }
    }
}

struct Distance(Option<i32>);

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(d) => write!(f, "{d}"),
            None => f.write_str("unreachable"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Start {} end {}",
            format_path(&[self.start]),
            format_path(&[self.end])
        )?;
        if let Some(path) = &self.path {
            writeln!(f, "Shortest path: {}", format_path(path))?;
        }
        if let Some(overlay) = &self.overlay {
            write!(f, "{overlay}")?;
        }
        writeln!(f, "Path length = {}", Distance(self.distance))?;
        writeln!(f, "{} start points tested", self.candidates)?;
        writeln!(
            f,
            "Shortest of shortest paths = {}",
            Distance(self.best_distance)
        )
    }
}
