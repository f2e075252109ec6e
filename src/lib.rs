//! This crate offsets (inflates/shrinks) 2D polygons and polylines by a signed distance
//! with configurable join styles (miter, square, bevel, round) and end styles (closed
//! polygon, joined polyline, butt, square, round caps).
//!
//! The [offset::OffsetEngine] produces raw offset contours that deliberately contain
//! self-overlap at concave joins; a [union::UnionResolver] implementation (a general
//! polygon boolean engine, supplied by the caller or the default pass-through) cleans
//! the result. See the [offset] and [union] module docs for the full contract.
//!
//! # Quick Start
//!
//! ```
//! use contour_offset::offset::{EndType, JoinType, OffsetEngine};
//! use contour_offset::path;
//! use contour_offset::path::PathSet;
//!
//! // expand a 10 x 10 square by 2 with mitered corners
//! let mut engine = OffsetEngine::new();
//! engine.add_path(
//!     path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
//!     JoinType::Miter,
//!     EndType::Polygon,
//! );
//!
//! let mut solution = PathSet::new();
//! engine.execute(2.0, &mut solution);
//!
//! assert_eq!(solution.len(), 1);
//! let expanded = &solution[0];
//! assert_eq!(expanded.vertex_count(), 4);
//! assert!(expanded.area() > path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)].area());
//! ```
//!
//! Offsetting the same square with `-2.0` shrinks it instead. Open paths (end styles
//! [offset::EndType::Butt], [offset::EndType::Square], [offset::EndType::Round]) are
//! offset on both sides into a closed band around the polyline.

#[macro_use]
mod macros;

pub mod core;
pub mod offset;
pub mod path;
pub mod union;
