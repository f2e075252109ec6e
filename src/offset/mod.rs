//! Polygon and polyline offsetting (inflating/shrinking).
//!
//! [OffsetEngine] collects input paths into groups (each group sharing a join style and
//! end style), offsets every group by a signed delta, and hands the raw result to a
//! [UnionResolver](crate::union::UnionResolver) for self-intersection cleanup. Positive
//! deltas expand positively wound polygons, negative deltas shrink them; open paths are
//! offset symmetrically on both sides into closed bands.

use crate::core::{math::Vector2, traits::Real};
use crate::path::{Path, PathSet};
use crate::union::{FillRule, PassthroughUnion, PolygonNode, PolygonTree, UnionOptions, UnionResolver};

use internal::offset_builder::{DeltaSource, OffsetBuilder};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod group;
pub mod internal;

pub use group::OffsetGroup;

/// Offset deltas with magnitude below this produce no visible change at unit geometry
/// scale, so execution short-circuits to copying the input.
const SIGNIFICANT_DELTA: f64 = 0.5;

/// Style of join applied where two offset edges meet at a convex vertex.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    /// Single intersection point of the extended offset edges, falling back to a square
    /// join when the extension would exceed the miter limit.
    Miter,
    /// Squared-off corner at exactly delta distance from the vertex.
    Square,
    /// Straight edge directly connecting the two offset edge endpoints.
    Bevel,
    /// Circular arc approximation within the configured arc tolerance.
    Round,
}

/// How a path's ends are treated, which also decides whether it offsets as a closed
/// polygon or an open polyline.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndType {
    /// Closed polygon offset on one side only (outward for positive delta and positive
    /// winding).
    Polygon,
    /// Closed polyline offset on both sides, producing two contours.
    Joined,
    /// Open polyline with flat ends squared off exactly at the endpoints.
    Butt,
    /// Open polyline with flat ends extended delta beyond the endpoints.
    Square,
    /// Open polyline with semicircular arc caps.
    Round,
}

/// Caller-supplied per-vertex offset distance, enabling variable-width results such as
/// tapered strokes.
///
/// `curr` and `prev` index the current vertex and the previous distinct vertex;
/// `path_normals` holds one unit normal per edge in lockstep with the vertexes.
/// Returning a negative distance flips offset direction for that vertex and returning
/// zero leaves the vertex un-offset.
///
/// Blanket implemented for closures, e.g.
/// `|path: &Path, _: &[Vector2], curr: usize, _: usize| path[curr].x * 0.1`.
pub trait DeltaCallback<T>
where
    T: Real,
{
    fn delta(&mut self, path: &Path<T>, path_normals: &[Vector2<T>], curr: usize, prev: usize)
        -> T;
}

impl<T, F> DeltaCallback<T> for F
where
    T: Real,
    F: FnMut(&Path<T>, &[Vector2<T>], usize, usize) -> T,
{
    fn delta(
        &mut self,
        path: &Path<T>,
        path_normals: &[Vector2<T>],
        curr: usize,
        prev: usize,
    ) -> T {
        self(path, path_normals, curr, prev)
    }
}

/// Result of offsetting all groups, before union cleanup.
enum RunOutcome<T> {
    /// No groups were added.
    Empty,
    /// The delta was insignificant; the input paths pass through unchanged.
    Unchanged(PathSet<T>),
    /// Raw offset contours plus the fill rule and options the union must apply.
    Raw {
        raw: PathSet<T>,
        fill_rule: FillRule,
        options: UnionOptions,
    },
}

/// Engine for offsetting sets of closed polygons and open polylines.
///
/// Groups of paths are staged with [add_path](OffsetEngine::add_path)/
/// [add_paths](OffsetEngine::add_paths) and offset together by one
/// [execute](OffsetEngine::execute) call; each group keeps its own join and end style
/// while configuration fields apply to the whole execution. The engine may be reused:
/// [clear](OffsetEngine::clear) drops the staged groups but keeps the configuration.
///
/// # Examples
///
/// ```
/// # use contour_offset::offset::*;
/// # use contour_offset::path::*;
/// # use contour_offset::path;
/// let mut engine = OffsetEngine::new();
/// engine.add_path(
///     path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
///     JoinType::Miter,
///     EndType::Polygon,
/// );
/// let mut solution = PathSet::new();
/// engine.execute(2.0, &mut solution);
/// assert_eq!(solution.len(), 1);
/// assert_eq!(solution[0].vertex_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct OffsetEngine<T = f64, R = PassthroughUnion> {
    groups: Vec<OffsetGroup<T>>,
    resolver: R,
    /// Maximum ratio of miter join extension to delta before a miter falls back to a
    /// square join. Values at or below 1.0 clamp to the minimum (squaring off 90 degree
    /// joins and sharper).
    pub miter_limit: T,
    /// Maximum distance an arc approximation may deviate from the true circle. Values
    /// at or below 0.01 select an automatic tolerance of |delta| / 500.
    pub arc_tolerance: T,
    /// Reserved: union all groups in a single clipper pass rather than per group.
    /// Currently all executions behave as if this were set.
    pub merge_groups: bool,
    /// Forwarded to the union resolver: keep collinear output vertexes.
    pub preserve_collinear: bool,
    /// Forwarded to the union resolver: reverse the cleaned output orientation.
    pub reverse_solution: bool,
}

impl<T> OffsetEngine<T, PassthroughUnion>
where
    T: Real,
{
    /// Engine with default configuration and the pass-through union resolver (raw
    /// contours are returned unmerged, see
    /// [PassthroughUnion](crate::union::PassthroughUnion)).
    pub fn new() -> Self {
        Self::with_resolver(PassthroughUnion)
    }
}

impl<T> Default for OffsetEngine<T, PassthroughUnion>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> OffsetEngine<T, R>
where
    T: Real,
    R: UnionResolver<T>,
{
    /// Engine with default configuration cleaning its output through `resolver`.
    pub fn with_resolver(resolver: R) -> Self {
        OffsetEngine {
            groups: Vec::new(),
            resolver,
            miter_limit: T::two(),
            arc_tolerance: T::zero(),
            merge_groups: true,
            preserve_collinear: false,
            reverse_solution: false,
        }
    }

    /// Stage a single path as its own group. Empty paths are ignored.
    pub fn add_path(&mut self, path: Path<T>, join_type: JoinType, end_type: EndType) {
        if path.is_empty() {
            return;
        }
        self.add_paths(vec![path], join_type, end_type);
    }

    /// Stage a set of paths sharing one join and end style as a group. Empty sets are
    /// ignored.
    pub fn add_paths(&mut self, paths: PathSet<T>, join_type: JoinType, end_type: EndType) {
        if paths.is_empty() {
            return;
        }
        self.groups.push(OffsetGroup::new(paths, join_type, end_type));
    }

    /// Drop all staged groups, keeping configuration.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Staged groups in insertion order.
    pub fn groups(&self) -> &[OffsetGroup<T>] {
        &self.groups
    }

    /// The union resolver cleaning this engine's output.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut R {
        &mut self.resolver
    }

    /// Offset all staged groups by `delta` and write the cleaned result into
    /// `solution` (cleared first).
    pub fn execute(&mut self, delta: T, solution: &mut PathSet<T>) {
        solution.clear();
        match self.run(delta, DeltaSource::Constant) {
            RunOutcome::Empty => {}
            RunOutcome::Unchanged(paths) => *solution = paths,
            RunOutcome::Raw {
                raw,
                fill_rule,
                options,
            } => self
                .resolver
                .union_into_paths(&raw, fill_rule, &options, solution),
        }
    }

    /// Offset all staged groups by `delta` and write the cleaned result as a
    /// hierarchical outer/hole tree into `solution` (cleared first).
    pub fn execute_into_tree(&mut self, delta: T, solution: &mut PolygonTree<T>) {
        solution.clear();
        match self.run(delta, DeltaSource::Constant) {
            RunOutcome::Empty => {}
            RunOutcome::Unchanged(paths) => {
                solution.roots.extend(paths.into_iter().map(PolygonNode::new));
            }
            RunOutcome::Raw {
                raw,
                fill_rule,
                options,
            } => self
                .resolver
                .union_into_tree(&raw, fill_rule, &options, solution),
        }
    }

    /// Offset all staged groups with a per-vertex delta callback and write the cleaned
    /// result into `solution` (cleared first).
    ///
    /// The callback fully controls magnitude and sign of the offset at each vertex (a
    /// nominal delta of 1.0 stands in wherever a constant would be consulted, so the
    /// insignificant-delta short circuit never triggers).
    pub fn execute_with_callback<C>(&mut self, callback: &mut C, solution: &mut PathSet<T>)
    where
        C: DeltaCallback<T>,
    {
        solution.clear();
        match self.run(T::one(), DeltaSource::PerVertex(callback)) {
            RunOutcome::Empty => {}
            RunOutcome::Unchanged(paths) => *solution = paths,
            RunOutcome::Raw {
                raw,
                fill_rule,
                options,
            } => self
                .resolver
                .union_into_paths(&raw, fill_rule, &options, solution),
        }
    }

    fn run(&self, delta: T, delta_source: DeltaSource<'_, T>) -> RunOutcome<T> {
        if self.groups.is_empty() {
            return RunOutcome::Empty;
        }

        let capacity = self.solution_capacity();

        // make sure the offset delta is significant
        if matches!(delta_source, DeltaSource::Constant)
            && delta.abs() < T::from(SIGNIFICANT_DELTA).unwrap()
        {
            let mut paths = PathSet::with_capacity(capacity);
            for group in self.groups.iter() {
                paths.extend(group.in_paths.iter().cloned());
            }
            return RunOutcome::Unchanged(paths);
        }

        let mut builder = OffsetBuilder::new(
            delta,
            self.miter_limit,
            self.arc_tolerance,
            capacity,
            delta_source,
        );
        for group in self.groups.iter() {
            builder.offset_group(group);
        }
        let raw = builder.into_raw_solution();

        let paths_reversed = self.paths_reversed();
        RunOutcome::Raw {
            raw,
            fill_rule: if paths_reversed {
                FillRule::Negative
            } else {
                FillRule::Positive
            },
            options: UnionOptions {
                preserve_collinear: self.preserve_collinear,
                // the union step's reversal must compose with the orientation flip the
                // offset applied in place of physically reversing the group paths
                reverse_solution: self.reverse_solution != paths_reversed,
            },
        }
    }

    /// Upper bound on the number of output contours: Joined groups produce two contours
    /// per path, everything else one.
    fn solution_capacity(&self) -> usize {
        self.groups
            .iter()
            .map(|g| {
                if g.end_type == EndType::Joined {
                    g.in_paths.len() * 2
                } else {
                    g.in_paths.len()
                }
            })
            .sum()
    }

    /// Orientation of the whole execution, taken from the first polygon group.
    fn paths_reversed(&self) -> bool {
        self.groups
            .iter()
            .find(|g| g.end_type == EndType::Polygon)
            .map(|g| g.paths_reversed)
            .unwrap_or(false)
    }
}
