//! Text rendering of paths over a [`HeightMap`].

use std::fmt;

use crate::geom::Point;
use crate::heightmap::HeightMap;

/// Format a path as space-separated `(row, col)` pairs.
pub fn format_path(path: &[Point]) -> String {
    path.iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Draws a map with a path traced over it.
///
/// Each path cell except the last shows the direction of the next step
/// (`^ > v <`), the last cell shows `E`, and every other cell is `.`.
pub struct PathOverlay<'a> {
    map: &'a HeightMap,
    path: &'a [Point],
}

impl<'a> PathOverlay<'a> {
    pub fn new(map: &'a HeightMap, path: &'a [Point]) -> Self {
        Self { map, path }
    }

    fn glyphs(&self) -> Vec<char> {
        let w = self.map.width() as usize;
        let mut glyphs = vec!['.'; self.map.bounds().len()];
        let index = |p: Point| p.y as usize * w + p.x as usize;
        for step in self.path.windows(2) {
            let (from, to) = (step[0], step[1]);
            if !self.map.contains(from) {
                continue;
            }
            glyphs[index(from)] = match (to.x - from.x, to.y - from.y) {
                (0, -1) => '^',
                (1, 0) => '>',
                (0, 1) => 'v',
                (-1, 0) => '<',
                _ => '?',
            };
        }
        if let Some(&last) = self.path.last() {
            if self.map.contains(last) {
                glyphs[index(last)] = 'E';
            }
        }
        glyphs
    }
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = self.glyphs();
        for row in glyphs.chunks(self.map.width() as usize) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
