use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared.
///
/// All offsetting math in the crate is generic over this trait, implemented for `f32`
/// and `f64` (with `f64` as the default type parameter for all generic types).
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn tau() -> Self {
        Self::from(std::f64::consts::TAU).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
