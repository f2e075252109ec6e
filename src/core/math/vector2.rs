use crate::core::traits::Real;
use std::ops;

/// 2D vector/point with `x` and `y` components.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Uniformly scale the vector by `scale_factor`.
    #[inline]
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular dot product (`self.x * other.y - self.y * other.x`), i.e. the z
    /// component of the 3D cross product. Positive when `other` is a counter clockwise
    /// turn from `self`.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Length of the vector.
    #[inline]
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Normalize the vector (length = 1).
    #[inline]
    pub fn normalize(&self) -> Self {
        self.scale(T::one() / self.length())
    }

    /// Rotate the vector by an angle given as its precomputed `cos_a`/`sin_a` pair.
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::core::math::*;
    /// let v = vec2(1.0, 0.0);
    /// let a = std::f64::consts::FRAC_PI_2;
    /// assert!(v.rotate_by(a.cos(), a.sin()).fuzzy_eq(vec2(0.0, 1.0)));
    /// ```
    #[inline]
    pub fn rotate_by(&self, cos_a: T, sin_a: T) -> Self {
        vec2(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Distance between this vector and `other` interpreted as points.
    #[inline]
    pub fn distance_to(&self, other: Self) -> T {
        (other - *self).length()
    }

    /// Fuzzy equal comparison with another vector using the `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using `T::fuzzy_epsilon()`.
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Shorthand for [Vector2::new].
#[inline(always)]
pub fn vec2<T>(x: T, y: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(x, y)
}

impl<T: Real> ops::Add for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Self::Output {
        vec2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Real> ops::Sub for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Self::Output {
        vec2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Real> ops::Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        vec2(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn ops() {
        let v1 = vec2(4.0, 5.0);
        let v2 = vec2(1.0, 2.0);
        assert!((v1 + v2).fuzzy_eq(vec2(5.0, 7.0)));
        assert!((v1 - v2).fuzzy_eq(vec2(3.0, 3.0)));
        assert!((-v1).fuzzy_eq(vec2(-4.0, -5.0)));
    }

    #[test]
    fn products() {
        let v1: Vector2<f64> = vec2(2.0, 3.0);
        let v2 = vec2(4.0, -1.0);
        assert!(v1.dot(v2).fuzzy_eq(5.0));
        assert!(v1.perp_dot(v2).fuzzy_eq(-14.0));
        assert!(v2.perp_dot(v1).fuzzy_eq(14.0));
    }

    #[test]
    fn normalize_and_length() {
        let v: Vector2<f64> = vec2(3.0, 4.0);
        assert!(v.length().fuzzy_eq(5.0));
        assert!(v.normalize().fuzzy_eq(vec2(0.6, 0.8)));
        assert!(v.distance_to(vec2(0.0, 0.0)).fuzzy_eq(5.0));
    }
}
