//! Path containers consumed and produced by the offset engine: vertexes, paths, and
//! path sets.
mod path;
mod vertex;

pub use path::*;
pub use vertex::*;

/// Insertion ordered collection of [Path]s. Ordering and duplicates are caller
/// meaningful (they decide which input subpath produced which offset output).
pub type PathSet<T = f64> = Vec<Path<T>>;
