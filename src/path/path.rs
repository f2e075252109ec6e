use super::PathVertex;
use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Ordered sequence of [PathVertex]es.
///
/// No implicit closing edge is stored; whether the last vertex connects back to the
/// first is decided by the interpretation of the path (the offset engine derives it from
/// the group's end style).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path<T = f64> {
    /// Contiguous sequence of vertexes.
    pub vertex_data: Vec<PathVertex<T>>,
}

impl<T> Path<T>
where
    T: Real,
{
    /// Create a new empty [Path].
    #[inline]
    pub fn new() -> Self {
        Path {
            vertex_data: Vec::new(),
        }
    }

    /// Create a new empty [Path] with `capacity` vertexes reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Path {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    /// Number of vertexes in the path.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    /// Add a vertex with a zero tag.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.vertex_data.push(PathVertex::new(x, y));
    }

    /// Add the vertex given to the end of the path.
    #[inline]
    pub fn add_vertex(&mut self, vertex: PathVertex<T>) {
        self.vertex_data.push(vertex);
    }

    /// Vertex at `index` (copied), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PathVertex<T>> {
        self.vertex_data.get(index).copied()
    }

    /// Vertex at `index` (copied), panicking when out of bounds.
    #[inline]
    pub fn at(&self, index: usize) -> PathVertex<T> {
        self[index]
    }

    /// Iterate over all vertexes of the path.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PathVertex<T>> + '_ {
        self.vertex_data.iter()
    }

    /// Signed area of the path interpreted as a closed polygon.
    ///
    /// Positive when the path winds counter clockwise, negative when clockwise, zero for
    /// degenerate paths (fewer than 3 vertexes or collinear).
    ///
    /// # Examples
    ///
    /// ```
    /// # use contour_offset::path;
    /// let ccw = path![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)];
    /// assert_eq!(ccw.area(), 8.0);
    /// assert_eq!(ccw.reversed().area(), -8.0);
    /// ```
    pub fn area(&self) -> T {
        let cnt = self.vertex_count();
        if cnt < 3 {
            return T::zero();
        }

        let mut sum = T::zero();
        let mut j = cnt - 1;
        for i in 0..cnt {
            let (pj, pi) = (self.vertex_data[j], self.vertex_data[i]);
            sum = sum + (pj.y + pi.y) * (pj.x - pi.x);
            j = i;
        }
        sum * T::from(0.5).unwrap()
    }

    /// Create a copy of the path with the vertex order reversed.
    pub fn reversed(&self) -> Self {
        Path {
            vertex_data: self.vertex_data.iter().rev().copied().collect(),
        }
    }

    /// Create a copy of the path with consecutive fuzzy-duplicate vertexes removed.
    ///
    /// When `is_closed` is true and the final vertex duplicates the first, the final
    /// vertex is removed as well (the closing edge is implicit).
    pub fn strip_repeat_pos(&self, is_closed: bool, pos_equal_eps: T) -> Self {
        let mut result = Path::with_capacity(self.vertex_count());
        let mut iter = self.iter();
        let mut last = match iter.next() {
            Some(v) => *v,
            None => return result,
        };
        result.add_vertex(last);

        for &v in iter {
            if !last.same_pos_eps(v, pos_equal_eps) {
                last = v;
                result.add_vertex(v);
            }
        }

        if is_closed && result.vertex_count() > 1 && last.same_pos_eps(result[0], pos_equal_eps) {
            result.vertex_data.pop();
        }

        result
    }

    /// Minimum and maximum corner of the axis aligned bounding box of all vertexes, or
    /// `None` for an empty path.
    pub fn extents(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        let first = self.get(0)?.pos();
        let mut min = first;
        let mut max = first;
        for v in self.iter().skip(1) {
            min = Vector2::new(min.x.min(v.x), min.y.min(v.y));
            max = Vector2::new(max.x.max(v.x), max.y.max(v.y));
        }
        Some((min, max))
    }
}

impl<T> Index<usize> for Path<T> {
    type Output = PathVertex<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Path<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

impl<T> FromIterator<PathVertex<T>> for Path<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = PathVertex<T>>>(iter: I) -> Self {
        Path {
            vertex_data: iter.into_iter().collect(),
        }
    }
}
