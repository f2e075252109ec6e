use super::{vec2, Vector2};
use crate::core::traits::{FuzzyEq, Real};

/// Epsilon used when deciding a vector length is too small to normalize.
const HYPOT_EPS: f64 = 0.001;

/// Returns the unit normal of the edge going from `p1` to `p2`.
///
/// The normal points to the right of the direction of travel (for a counter clockwise
/// wound polygon this is the outward side). A zero length edge yields the zero vector
/// rather than a division by zero; callers treat it as "no turn".
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let n = unit_normal(vec2(0.0, 0.0), vec2(10.0, 0.0));
/// assert!(n.fuzzy_eq(vec2(0.0, -1.0)));
/// assert!(unit_normal(vec2(1.0, 1.0), vec2(1.0, 1.0)).fuzzy_eq(vec2(0.0, 0.0)));
/// ```
#[inline]
pub fn unit_normal<T>(p1: Vector2<T>, p2: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx == T::zero() && dy == T::zero() {
        return Vector2::zero();
    }

    let f = T::one() / (dx * dx + dy * dy).sqrt();
    vec2(dy * f, -dx * f)
}

/// Normalize `v`, returning the zero vector when its length is below a small threshold.
#[inline]
pub fn normalize_or_zero<T>(v: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    let h = v.length();
    if h.fuzzy_eq_zero_eps(T::from(HYPOT_EPS).unwrap()) {
        return Vector2::zero();
    }
    v.scale(T::one() / h)
}

/// Returns the unit vector with the average direction of the two unit vectors given.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let v = avg_unit_vector(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// let s = std::f64::consts::FRAC_1_SQRT_2;
/// assert!(v.fuzzy_eq(vec2(s, s)));
/// ```
#[inline]
pub fn avg_unit_vector<T>(v1: Vector2<T>, v2: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    normalize_or_zero(v1 + v2)
}

/// Reflect the point `pt` through the `pivot` point.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let r = reflect_point(vec2(1.0, 1.0), vec2(2.0, 3.0));
/// assert!(r.fuzzy_eq(vec2(3.0, 5.0)));
/// ```
#[inline]
pub fn reflect_point<T>(pt: Vector2<T>, pivot: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    vec2(pivot.x + (pivot.x - pt.x), pivot.y + (pivot.y - pt.y))
}

/// Intersection point of the infinite line through `p1a`/`p1b` with the infinite line
/// through `p2a`/`p2b`.
///
/// Solves in slope-intercept form, branching on nearly vertical lines (fuzzy zero x
/// difference) so a near zero slope denominator is never divided by. Parallel (including
/// both nearly vertical) lines return the zero vector, matching the defined-not-failing
/// error model of the offset engine.
///
/// # Examples
///
/// ```
/// # use contour_offset::core::math::*;
/// let p = line_intersect_point(
///     vec2(2.0, 0.0),
///     vec2(2.0, 5.0),
///     vec2(0.0, 0.0),
///     vec2(4.0, 4.0),
/// );
/// assert!(p.fuzzy_eq(vec2(2.0, 2.0)));
/// ```
pub fn line_intersect_point<T>(
    p1a: Vector2<T>,
    p1b: Vector2<T>,
    p2a: Vector2<T>,
    p2b: Vector2<T>,
) -> Vector2<T>
where
    T: Real,
{
    if (p1a.x - p1b.x).fuzzy_eq_zero() {
        // first line vertical
        if (p2a.x - p2b.x).fuzzy_eq_zero() {
            return Vector2::zero();
        }
        let m2 = (p2b.y - p2a.y) / (p2b.x - p2a.x);
        let b2 = p2a.y - m2 * p2a.x;
        return vec2(p1a.x, m2 * p1a.x + b2);
    }

    if (p2a.x - p2b.x).fuzzy_eq_zero() {
        // second line vertical
        let m1 = (p1b.y - p1a.y) / (p1b.x - p1a.x);
        let b1 = p1a.y - m1 * p1a.x;
        return vec2(p2a.x, m1 * p2a.x + b1);
    }

    let m1 = (p1b.y - p1a.y) / (p1b.x - p1a.x);
    let b1 = p1a.y - m1 * p1a.x;
    let m2 = (p2b.y - p2a.y) / (p2b.x - p2a.x);
    let b2 = p2a.y - m2 * p2a.x;
    if (m1 - m2).fuzzy_eq_zero() {
        return Vector2::zero();
    }
    let x = (b2 - b1) / (m1 - m2);
    vec2(x, m1 * x + b1)
}

/// Approximate an axis aligned ellipse with `steps` points starting at
/// `(center.x + radius_x, center.y)` and sweeping counter clockwise.
///
/// A non-positive `radius_x` yields no points, a non-positive `radius_y` defaults to
/// `radius_x` (circle), and `steps <= 2` selects a point count from the mean radius.
pub fn ellipse<T>(center: Vector2<T>, radius_x: T, radius_y: T, steps: usize) -> Vec<Vector2<T>>
where
    T: Real,
{
    if radius_x <= T::zero() {
        return Vec::new();
    }
    let radius_y = if radius_y <= T::zero() {
        radius_x
    } else {
        radius_y
    };

    let steps = if steps <= 2 {
        (T::pi() * ((radius_x + radius_y) / T::two()).sqrt())
            .ceil()
            .to_usize()
            .unwrap_or(3)
            .max(3)
    } else {
        steps
    };

    let (si, co) = (T::tau() / T::from(steps).unwrap()).sin_cos();
    let mut d = vec2(co, si);

    let mut result = Vec::with_capacity(steps);
    result.push(vec2(center.x + radius_x, center.y));
    for _ in 1..steps {
        result.push(vec2(center.x + radius_x * d.x, center.y + radius_y * d.y));
        d = vec2(d.x * co - d.y * si, d.x * si + d.y * co);
    }

    result
}
