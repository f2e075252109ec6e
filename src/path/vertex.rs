use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single path vertex: a 2D position plus an opaque user `tag`.
///
/// The tag (default 0) is carried by the offset engine, never recomputed: every offset
/// vertex derived from an input vertex (perpendicular offsets, caps, miter points, round
/// join arc steps) keeps the tag of the input vertex it was constructed around.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PathVertex<T = f64> {
    pub x: T,
    pub y: T,
    pub tag: u64,
}

impl<T> PathVertex<T>
where
    T: Real,
{
    /// Create a new vertex with a zero tag.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        PathVertex { x, y, tag: 0 }
    }

    /// Create a new vertex carrying the user `tag` given.
    #[inline]
    pub fn with_tag(x: T, y: T, tag: u64) -> Self {
        PathVertex { x, y, tag }
    }

    /// Create a vertex from a position vector and `tag`.
    #[inline]
    pub fn from_vector2(v: Vector2<T>, tag: u64) -> Self {
        PathVertex { x: v.x, y: v.y, tag }
    }

    /// Position of the vertex as a [Vector2].
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Fuzzy position equality with `other` using the `eps` given. Tags are not compared.
    #[inline]
    pub fn same_pos_eps(&self, other: Self, eps: T) -> bool {
        self.pos().fuzzy_eq_eps(other.pos(), eps)
    }

    /// Fuzzy position equality with `other` using `T::fuzzy_epsilon()`. Tags are not
    /// compared.
    #[inline]
    pub fn same_pos(&self, other: Self) -> bool {
        self.pos().fuzzy_eq(other.pos())
    }
}
