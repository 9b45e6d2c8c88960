//! **hillpath-core** — core types for hill-climbing path search.
//!
//! This crate provides geometry primitives, the immutable elevation grid
//! ([`HeightMap`]) with its text parser, the grid construction errors, and
//! a text renderer for paths traced over a map.

pub mod error;
pub mod geom;
pub mod heightmap;
pub mod render;

pub use error::{LoadError, MalformedGridError};
pub use geom::{Point, Range};
pub use heightmap::{HeightMap, MAX_ELEVATION, MIN_ELEVATION};
pub use render::{PathOverlay, format_path};
