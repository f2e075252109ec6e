use crate::core::{
    math::{
        avg_unit_vector, ellipse, line_intersect_point, reflect_point, unit_normal, vec2, Vector2,
    },
    traits::Real,
};
use crate::offset::{DeltaCallback, EndType, JoinType, OffsetGroup};
use crate::path::{Path, PathSet, PathVertex};

/// Per-vertex deltas below this magnitude leave the vertex in place (no join emitted).
const PER_VERTEX_DELTA_TOLERANCE: f64 = 1.0e-12;

/// Default arc tolerance as a fraction of |delta| (1/500) when no explicit tolerance is
/// configured.
const DEFAULT_ARC_TOLERANCE_RATIO: f64 = 0.002;

/// Explicit arc tolerances at or below this value fall back to the default ratio.
const MIN_EXPLICIT_ARC_TOLERANCE: f64 = 0.01;

/// Joins with `cos_a` above this limit (and a delta opposing the turn direction) are
/// treated as concave.
const CONCAVE_COS_LIMIT: f64 = -0.999;

/// Joins with `cos_a` above this limit turn by under ~2.5 degrees and are mitered
/// regardless of configured join style.
const NEAR_STRAIGHT_COS_LIMIT: f64 = 0.999;

/// Source of the offset distance applied at each vertex.
pub enum DeltaSource<'a, T> {
    /// One fixed signed distance for the whole execution.
    Constant,
    /// Distance supplied per vertex by a caller callback (e.g. tapered strokes). The
    /// nominal session delta is 1.0; the callback supplies real magnitude and sign.
    PerVertex(&'a mut dyn DeltaCallback<T>),
}

/// Call-scoped state for one offset execution: active deltas, arc stepping, the normals
/// buffer, the accumulating contour, and the raw solution. Created fresh per execution
/// so the engine itself holds only configuration and staged groups.
pub struct OffsetBuilder<'a, T>
where
    T: Real,
{
    /// Session offset distance (sign flipped to absolute when a polygon group has no
    /// orientation-deciding path).
    delta: T,
    /// Active group's signed delta: negated from `delta` for orientation-reversed
    /// groups, absolute for open path groups, per vertex under a callback.
    group_delta: T,
    miter_limit_sqr: T,
    arc_tolerance: T,
    steps_per_rad: T,
    step_sin: T,
    step_cos: T,
    join_type: JoinType,
    end_type: EndType,
    /// One unit normal per edge of the path currently being offset, in lockstep with
    /// its vertexes.
    normals: Vec<Vector2<T>>,
    /// Contour being accumulated for the current path.
    path_out: Path<T>,
    /// All finished raw contours (self-overlap included, union cleanup pending).
    raw_solution: PathSet<T>,
    delta_source: DeltaSource<'a, T>,
}

impl<'a, T> OffsetBuilder<'a, T>
where
    T: Real,
{
    pub fn new(
        delta: T,
        miter_limit: T,
        arc_tolerance: T,
        solution_capacity: usize,
        delta_source: DeltaSource<'a, T>,
    ) -> Self {
        let miter_limit_sqr = if miter_limit <= T::one() {
            T::two()
        } else {
            T::two() / (miter_limit * miter_limit)
        };

        OffsetBuilder {
            delta,
            group_delta: T::zero(),
            miter_limit_sqr,
            arc_tolerance,
            steps_per_rad: T::zero(),
            step_sin: T::zero(),
            step_cos: T::zero(),
            join_type: JoinType::Miter,
            end_type: EndType::Polygon,
            normals: Vec::new(),
            path_out: Path::new(),
            raw_solution: PathSet::with_capacity(solution_capacity),
            delta_source,
        }
    }

    /// Consume the builder, returning the accumulated raw (pre-union) solution.
    pub fn into_raw_solution(self) -> PathSet<T> {
        self.raw_solution
    }

    /// Offset every path of `group`, appending the finished raw contours.
    pub fn offset_group(&mut self, group: &OffsetGroup<T>) {
        if group.end_type == EndType::Polygon {
            // a straight path (2 points) can also be polygon offset, with the ends
            // treated as 180 degree joins
            if group.lowest_path_index.is_none() {
                self.delta = self.delta.abs();
            }
            self.group_delta = signed_group_delta(group, self.delta);
        } else {
            // open paths are offset symmetrically on both sides regardless of winding
            self.group_delta = self.delta.abs();
        }

        self.join_type = group.join_type;
        self.end_type = group.end_type;

        if group.join_type == JoinType::Round || group.end_type == EndType::Round {
            self.update_arc_steps();
        }

        for path in group.in_paths.iter() {
            match path.vertex_count() {
                0 => continue,
                1 => {
                    self.offset_single_vertex(group, path);
                    continue;
                }
                2 if group.end_type == EndType::Joined => {
                    // a 2 point path cannot form an interior join
                    self.end_type = if group.join_type == JoinType::Round {
                        EndType::Round
                    } else {
                        EndType::Square
                    };
                }
                _ => {}
            }

            self.build_normals(path);
            match self.end_type {
                EndType::Polygon => self.offset_polygon(group, path),
                EndType::Joined => self.offset_open_joined(group, path),
                _ => self.offset_open_path(group, path),
            }
        }
    }

    fn build_normals(&mut self, path: &Path<T>) {
        let cnt = path.vertex_count();
        self.normals.clear();
        if cnt == 0 {
            return;
        }
        self.normals.reserve(cnt);
        for i in 0..cnt - 1 {
            self.normals
                .push(unit_normal(path.at(i).pos(), path.at(i + 1).pos()));
        }
        self.normals
            .push(unit_normal(path.at(cnt - 1).pos(), path.at(0).pos()));
    }

    /// A 1 vertex path offsets into a circle (Round end style) or axis aligned square
    /// centered on the vertex, skipping the join pipeline entirely.
    fn offset_single_vertex(&mut self, group: &OffsetGroup<T>, path: &Path<T>) {
        let v = path.at(0);
        self.update_per_vertex_delta(group, path, 0, 0);
        let abs_delta = self.group_delta.abs();

        let mut path_out = Path::new();
        if group.end_type == EndType::Round {
            let steps = (self.steps_per_rad * T::tau())
                .ceil()
                .to_usize()
                .unwrap_or(0);
            for pt in ellipse(v.pos(), abs_delta, abs_delta, steps) {
                path_out.add_vertex(PathVertex::from_vector2(pt, v.tag));
            }
        } else {
            let d = self.group_delta.ceil();
            path_out.add_vertex(PathVertex::with_tag(v.x - d, v.y - d, v.tag));
            path_out.add_vertex(PathVertex::with_tag(v.x + d, v.y - d, v.tag));
            path_out.add_vertex(PathVertex::with_tag(v.x + d, v.y + d, v.tag));
            path_out.add_vertex(PathVertex::with_tag(v.x - d, v.y + d, v.tag));
        }
        self.raw_solution.push(path_out);
    }

    fn offset_polygon(&mut self, group: &OffsetGroup<T>, path: &Path<T>) {
        self.path_out = Path::new();
        let cnt = path.vertex_count();
        let mut k = cnt - 1;
        for i in 0..cnt {
            self.offset_point(group, path, i, &mut k);
        }
        self.raw_solution.push(std::mem::take(&mut self.path_out));
    }

    /// Joined open paths produce two separate closed contours: the polygon offset of
    /// the path, and the polygon offset of the reversed path.
    fn offset_open_joined(&mut self, group: &OffsetGroup<T>, path: &Path<T>) {
        self.offset_polygon(group, path);
        let reversed = path.reversed();
        self.build_normals(&reversed);
        self.offset_polygon(group, &reversed);
    }

    /// Offset an open path into a single closed band: start cap, forward side, end cap,
    /// back side (over in-place reversed normals).
    fn offset_open_path(&mut self, group: &OffsetGroup<T>, path: &Path<T>) {
        self.path_out = Path::new();
        let high_i = path.vertex_count() - 1;

        self.update_per_vertex_delta(group, path, 0, 0);
        if self.group_delta.abs() < T::from(PER_VERTEX_DELTA_TOLERANCE).unwrap() {
            self.path_out.add_vertex(path.at(0));
        } else {
            match self.end_type {
                EndType::Butt => self.do_bevel(path, 0, 0),
                EndType::Round => self.do_round(path, 0, 0, T::pi()),
                _ => self.do_square(path, 0, 0),
            }
        }

        // offset the left side going forward
        let mut k = 0;
        for i in 1..high_i {
            self.offset_point(group, path, i, &mut k);
        }

        // rotate and negate the normals to represent the reverse direction
        for i in (1..=high_i).rev() {
            self.normals[i] = -self.normals[i - 1];
        }
        self.normals[0] = self.normals[high_i];

        self.update_per_vertex_delta(group, path, high_i, high_i);
        if self.group_delta.abs() < T::from(PER_VERTEX_DELTA_TOLERANCE).unwrap() {
            self.path_out.add_vertex(path.at(high_i));
        } else {
            match self.end_type {
                EndType::Butt => self.do_bevel(path, high_i, high_i),
                EndType::Round => self.do_round(path, high_i, high_i, T::pi()),
                _ => self.do_square(path, high_i, high_i),
            }
        }

        // offset the right side going back
        let mut k = high_i;
        for i in (1..high_i).rev() {
            self.offset_point(group, path, i, &mut k);
        }

        self.raw_solution.push(std::mem::take(&mut self.path_out));
    }

    /// Join dispatch for the vertex at `j` with previous distinct vertex at `k`.
    fn offset_point(&mut self, group: &OffsetGroup<T>, path: &Path<T>, j: usize, k: &mut usize) {
        if path.at(j).same_pos(path.at(*k)) {
            *k = j;
            return;
        }

        // A = turn angle where the edges join:
        //   sin(A) < 0: right turning
        //   cos(A) < 0: turning more than 90 degrees
        // zero length edges have zero normals, yielding sin_a == cos_a == 0, which
        // lands in the convex bevel/square/round branches instead of dividing by zero
        let mut sin_a = self.normals[*k].perp_dot(self.normals[j]);
        let cos_a = self.normals[j].dot(self.normals[*k]);
        if sin_a > T::one() {
            sin_a = T::one();
        } else if sin_a < -T::one() {
            sin_a = -T::one();
        }

        self.update_per_vertex_delta(group, path, j, *k);
        if self.group_delta.abs() < T::from(PER_VERTEX_DELTA_TOLERANCE).unwrap() {
            self.path_out.add_vertex(path.at(j));
            return;
        }

        if cos_a > T::from(CONCAVE_COS_LIMIT).unwrap() && sin_a * self.group_delta < T::zero() {
            // concave join: the two perpendicular offsets with the input vertex wedged
            // between them form a negative (self overlapping) region that the finishing
            // union operation removes, along with any over-shrunk path reversals
            self.path_out.add_vertex(self.perpendic(path.at(j), self.normals[*k]));
            self.path_out.add_vertex(path.at(j));
            self.path_out.add_vertex(self.perpendic(path.at(j), self.normals[j]));
        } else if cos_a > T::from(NEAR_STRAIGHT_COS_LIMIT).unwrap()
            && self.join_type != JoinType::Round
        {
            // almost straight (under ~2.5 degrees of turn)
            self.do_miter(path, j, *k, cos_a);
        } else {
            match self.join_type {
                JoinType::Miter => {
                    // miter unless the turn is acute enough to exceed the miter limit
                    if cos_a > self.miter_limit_sqr - T::one() {
                        self.do_miter(path, j, *k, cos_a);
                    } else {
                        self.do_square(path, j, *k);
                    }
                }
                JoinType::Round => self.do_round(path, j, *k, sin_a.atan2(cos_a)),
                JoinType::Bevel => self.do_bevel(path, j, *k),
                JoinType::Square => self.do_square(path, j, *k),
            }
        }

        *k = j;
    }

    /// Two points: the perpendicular offsets along each adjacent edge normal, or (at an
    /// endpoint, `j == k`) the two points straddling the vertex along its one normal.
    fn do_bevel(&mut self, path: &Path<T>, j: usize, k: usize) {
        let v = path.at(j);
        let (pt1, pt2) = if j == k {
            let abs_delta = self.group_delta.abs();
            (
                v.pos() - self.normals[j].scale(abs_delta),
                v.pos() + self.normals[j].scale(abs_delta),
            )
        } else {
            (
                v.pos() + self.normals[k].scale(self.group_delta),
                v.pos() + self.normals[j].scale(self.group_delta),
            )
        };
        self.path_out.add_vertex(PathVertex::from_vector2(pt1, v.tag));
        self.path_out.add_vertex(PathVertex::from_vector2(pt2, v.tag));
    }

    /// Squared-off join/cap: translate the vertex |delta| along the bisector (or, at an
    /// endpoint, the perpendicular) to a construction point, intersect the line through
    /// it with the adjacent offset edge, and reflect the intersection through the
    /// construction point for the second emitted vertex.
    fn do_square(&mut self, path: &Path<T>, j: usize, k: usize) {
        let vec = if j == k {
            vec2(self.normals[j].y, -self.normals[j].x)
        } else {
            avg_unit_vector(
                vec2(-self.normals[k].y, self.normals[k].x),
                vec2(self.normals[j].y, -self.normals[j].x),
            )
        };

        let abs_delta = self.group_delta.abs();
        let v = path.at(j);
        // offset the original vertex delta units along the unit vector
        let pt_q = v.pos() + vec.scale(abs_delta);

        // two vertices along the line perpendicular to vec through pt_q
        let pt1 = pt_q + vec2(vec.y, -vec.x).scale(self.group_delta);
        let pt2 = pt_q + vec2(-vec.y, vec.x).scale(self.group_delta);
        // two vertices along one offset edge
        let pt3 = path.at(k).pos() + self.normals[k].scale(self.group_delta);

        if j == k {
            let pt4 = pt3 + vec.scale(self.group_delta);
            let pt = line_intersect_point(pt1, pt2, pt3, pt4);
            // the second point comes from reflecting through the construction point
            self.path_out
                .add_vertex(PathVertex::from_vector2(reflect_point(pt, pt_q), v.tag));
            self.path_out.add_vertex(PathVertex::from_vector2(pt, v.tag));
        } else {
            let pt4 = v.pos() + self.normals[k].scale(self.group_delta);
            let pt = line_intersect_point(pt1, pt2, pt3, pt4);
            self.path_out.add_vertex(PathVertex::from_vector2(pt, v.tag));
            self.path_out
                .add_vertex(PathVertex::from_vector2(reflect_point(pt, pt_q), v.tag));
        }
    }

    /// One point at `vertex + (n_k + n_j) * delta / (cos_a + 1)`.
    fn do_miter(&mut self, path: &Path<T>, j: usize, k: usize, cos_a: T) {
        let q = self.group_delta / (cos_a + T::one());
        let v = path.at(j);
        let pt = v.pos() + (self.normals[k] + self.normals[j]).scale(q);
        self.path_out.add_vertex(PathVertex::from_vector2(pt, v.tag));
    }

    /// Arc of points swept from the incoming normal to the outgoing normal by repeated
    /// rotation with the precomputed step sin/cos, finished with the exact outgoing
    /// perpendicular point.
    fn do_round(&mut self, path: &Path<T>, j: usize, k: usize, angle: T) {
        if matches!(self.delta_source, DeltaSource::PerVertex(_)) {
            // group delta is not constant under a callback so arc stepping must be
            // recomputed for every vertex
            self.update_arc_steps();
        }

        let v = path.at(j);
        let mut offset_vec = self.normals[k].scale(self.group_delta);
        if j == k {
            offset_vec = -offset_vec;
        }
        self.path_out
            .add_vertex(PathVertex::from_vector2(v.pos() + offset_vec, v.tag));

        let steps = (self.steps_per_rad * angle.abs())
            .ceil()
            .to_usize()
            .unwrap_or(0);
        for _ in 1..steps {
            offset_vec = offset_vec.rotate_by(self.step_cos, self.step_sin);
            self.path_out
                .add_vertex(PathVertex::from_vector2(v.pos() + offset_vec, v.tag));
        }
        self.path_out.add_vertex(self.perpendic(v, self.normals[j]));
    }

    /// Perpendicular offset of `v` along `norm` by the active group delta, carrying the
    /// vertex tag.
    fn perpendic(&self, v: PathVertex<T>, norm: Vector2<T>) -> PathVertex<T> {
        PathVertex::from_vector2(v.pos() + norm.scale(self.group_delta), v.tag)
    }

    /// Under a per-vertex callback, refresh the active group delta for vertex `j`.
    fn update_per_vertex_delta(&mut self, group: &OffsetGroup<T>, path: &Path<T>, j: usize, k: usize) {
        if let DeltaSource::PerVertex(cb) = &mut self.delta_source {
            let d = cb.delta(path, &self.normals, j, k);
            self.group_delta = if group.paths_reversed { -d } else { d };
        }
    }

    /// Compute the arc stepping parameters (step rotation sin/cos and steps per radian)
    /// from the arc tolerance and the active |delta|.
    fn update_arc_steps(&mut self) {
        let abs_delta = self.group_delta.abs();
        let arc_tol = if self.arc_tolerance > T::from(MIN_EXPLICIT_ARC_TOLERANCE).unwrap() {
            self.arc_tolerance
        } else {
            abs_delta * T::from(DEFAULT_ARC_TOLERANCE_RATIO).unwrap()
        };
        let steps_per_360 = T::pi() / (T::one() - arc_tol / abs_delta).acos();
        let (step_sin, step_cos) = (T::tau() / steps_per_360).sin_cos();
        self.step_sin = if self.group_delta < T::zero() {
            -step_sin
        } else {
            step_sin
        };
        self.step_cos = step_cos;
        self.steps_per_rad = steps_per_360 / T::tau();
    }
}

/// Signed delta for a group: negated when the group is orientation flagged reversed.
///
/// Used uniformly wherever a delta is applied to a group in place of physically
/// reversing the group's paths.
#[inline]
pub fn signed_group_delta<T>(group: &OffsetGroup<T>, delta: T) -> T
where
    T: Real,
{
    if group.paths_reversed {
        -delta
    } else {
        delta
    }
}
