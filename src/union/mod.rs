//! Boundary contract with the external boolean-geometry engine that merges the raw
//! offset output.
//!
//! The offset engine deliberately produces self-overlapping raw contours (concave joins
//! emit negative-area notches, over-shrunk paths reverse on themselves). Removing those
//! regions is the job of a general polygon clipper performing a union with the fill rule
//! the engine selects; that clipper is a collaborator of this crate, not part of it, and
//! is abstracted behind the [UnionResolver] trait.

use crate::core::traits::Real;
use crate::path::{Path, PathSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fill rule handed to the union resolver to decide which wound regions are filled.
///
/// The offset engine only ever selects [FillRule::Positive] or [FillRule::Negative]
/// (the latter when the group orientation was flagged reversed); the other variants are
/// part of the boundary contract for resolvers shared with other clipping uses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillRule {
    /// Odd winding counts are filled.
    EvenOdd,
    /// Non-zero winding counts are filled.
    NonZero,
    /// Regions with winding count greater than zero are filled.
    Positive,
    /// Regions with winding count less than zero are filled.
    Negative,
}

/// Options forwarded to the union resolver alongside the raw solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnionOptions {
    /// Keep collinear output vertexes instead of merging the adjoining edges.
    pub preserve_collinear: bool,
    /// Reverse the orientation of the cleaned output paths.
    pub reverse_solution: bool,
}

/// External polygon union engine consumed by the offset engine to clean its raw output.
///
/// Implementations must discard the zero/negative-area artifacts introduced by concave
/// join notches and by over-shrinking (see the module docs); the subject paths are all
/// treated as closed polygons.
pub trait UnionResolver<T>
where
    T: Real,
{
    /// Union all `subject` paths under `fill_rule`, writing the cleaned flat path set
    /// into `solution` (cleared first).
    fn union_into_paths(
        &mut self,
        subject: &[Path<T>],
        fill_rule: FillRule,
        options: &UnionOptions,
        solution: &mut PathSet<T>,
    );

    /// Union all `subject` paths under `fill_rule`, writing the cleaned result as a
    /// hierarchical outer/hole tree into `solution` (cleared first).
    ///
    /// The default implementation performs the flat union and lifts every resulting path
    /// to a root node; resolvers that compute real nesting should override it.
    fn union_into_tree(
        &mut self,
        subject: &[Path<T>],
        fill_rule: FillRule,
        options: &UnionOptions,
        solution: &mut PolygonTree<T>,
    ) {
        let mut paths = PathSet::new();
        self.union_into_paths(subject, fill_rule, options, &mut paths);
        solution.clear();
        solution
            .roots
            .extend(paths.into_iter().map(PolygonNode::new));
    }
}

/// Pass-through stand-in for a real union resolver.
///
/// Returns the raw offset contours unmerged, so overlap introduced by concave joins and
/// over-shrinking is left in place; the result is only clean geometry for inputs that
/// produce none (e.g. outward offsets of convex polygons). Useful when the caller runs
/// its own boolean engine over the raw solution, and for testing the raw offset
/// geometry itself. `reverse_solution` is still honored; `preserve_collinear` is
/// meaningless here since nothing is merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughUnion;

impl<T> UnionResolver<T> for PassthroughUnion
where
    T: Real,
{
    fn union_into_paths(
        &mut self,
        subject: &[Path<T>],
        _fill_rule: FillRule,
        options: &UnionOptions,
        solution: &mut PathSet<T>,
    ) {
        solution.clear();
        if options.reverse_solution {
            solution.extend(subject.iter().map(|p| p.reversed()));
        } else {
            solution.extend(subject.iter().cloned());
        }
    }
}

/// One polygon of a hierarchical solution: an outer contour (or hole, alternating by
/// depth) and the polygons nested directly inside it.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonNode<T = f64> {
    pub contour: Path<T>,
    pub children: Vec<PolygonNode<T>>,
}

impl<T> PolygonNode<T>
where
    T: Real,
{
    #[inline]
    pub fn new(contour: Path<T>) -> Self {
        PolygonNode {
            contour,
            children: Vec::new(),
        }
    }
}

/// Hierarchical solution form: top level outer contours with nested holes/islands.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonTree<T = f64> {
    pub roots: Vec<PolygonNode<T>>,
}

impl<T> PolygonTree<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        PolygonTree { roots: Vec::new() }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.roots.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Flatten the tree back into a depth-first path set.
    pub fn flatten(&self) -> PathSet<T> {
        fn visit<T: Real>(nodes: &[PolygonNode<T>], out: &mut PathSet<T>) {
            for node in nodes {
                out.push(node.contour.clone());
                visit(&node.children, out);
            }
        }

        let mut out = PathSet::new();
        visit(&self.roots, &mut out);
        out
    }
}
