//! hillpath — fewest-step routes over elevation grids.
//!
//! Re-exports the core map types and path search, plus [`Report`], which
//! runs both queries the `hillpath` binary prints.

pub mod report;

pub use hillpath_core::{HeightMap, LoadError, MalformedGridError, Point};
pub use hillpath_paths::{Adjacency, PathRange, UNREACHABLE};
pub use report::{Report, Strategy};
