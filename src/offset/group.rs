use super::{EndType, JoinType};
use crate::core::{math::Vector2, traits::Real};
use crate::path::{Path, PathSet};

/// A batch of input paths sharing one join style, end style, and orientation metadata.
///
/// Built once per `add_path`/`add_paths` call and immutable afterwards. Input paths are
/// stored already stripped of consecutive duplicate vertexes (using the closedness
/// implied by the end style).
#[derive(Debug, Clone)]
pub struct OffsetGroup<T = f64> {
    /// Duplicate-stripped input paths.
    pub in_paths: PathSet<T>,
    pub join_type: JoinType,
    pub end_type: EndType,
    /// Index of the path owning the orientation-deciding extreme vertex, `None` for
    /// non-polygon groups and for groups whose candidate paths all have zero area.
    pub lowest_path_index: Option<usize>,
    /// True when the lowest path winds negatively. Rather than physically reversing
    /// every path in the group, every delta applied to the group is negated instead
    /// (cheaper, and exactly equivalent for the offset math).
    pub paths_reversed: bool,
}

impl<T> OffsetGroup<T>
where
    T: Real,
{
    pub fn new(paths: PathSet<T>, join_type: JoinType, end_type: EndType) -> Self {
        let is_joined = matches!(end_type, EndType::Polygon | EndType::Joined);
        let in_paths: PathSet<T> = paths
            .iter()
            .map(|p| p.strip_repeat_pos(is_joined, T::fuzzy_epsilon()))
            .collect();

        let (lowest_path_index, paths_reversed) = if end_type == EndType::Polygon {
            let (idx, is_neg_area) = lowest_path_info(&in_paths);
            // the lowest path must be an outer path, so a negative orientation there
            // flags the whole group as reversed
            (idx, idx.is_some() && is_neg_area)
        } else {
            (None, false)
        };

        OffsetGroup {
            in_paths,
            join_type,
            end_type,
            lowest_path_index,
            paths_reversed,
        }
    }
}

/// Find the path owning the extreme ("lowest") vertex across all `paths` and whether
/// that path has negative signed area.
///
/// The signed area of a candidate path is computed lazily, at most once per path, and a
/// path whose area is exactly zero is dropped from candidacy (degenerate closed path).
pub(crate) fn lowest_path_info<T>(paths: &[Path<T>]) -> (Option<usize>, bool)
where
    T: Real,
{
    let mut idx = None;
    let mut is_neg_area = false;
    let mut bot_pt = Vector2::new(T::max_value(), T::min_value());
    for (i, path) in paths.iter().enumerate() {
        let mut area: Option<T> = None;
        for v in path.iter() {
            if v.y < bot_pt.y || (v.y == bot_pt.y && v.x >= bot_pt.x) {
                continue;
            }
            let a = match area {
                Some(a) => a,
                None => {
                    let a = path.area();
                    if a == T::zero() {
                        // degenerate closed path, drop from candidacy
                        break;
                    }
                    area = Some(a);
                    a
                }
            };
            is_neg_area = a < T::zero();
            idx = Some(i);
            bot_pt = v.pos();
        }
    }

    (idx, is_neg_area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn polygon_group_orientation() {
        let ccw = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let group = OffsetGroup::new(vec![ccw], JoinType::Miter, EndType::Polygon);
        assert_eq!(group.lowest_path_index, Some(0));
        assert!(!group.paths_reversed);

        let cw = path![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        let group = OffsetGroup::new(vec![cw], JoinType::Miter, EndType::Polygon);
        assert_eq!(group.lowest_path_index, Some(0));
        assert!(group.paths_reversed);
    }

    #[test]
    fn lowest_path_among_outer_and_hole() {
        let hole = path![(2.0, 2.0), (2.0, 8.0), (8.0, 8.0), (8.0, 2.0)];
        let outer = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        // hole listed first, the outer path must still win the orientation scan
        let group = OffsetGroup::new(vec![hole, outer], JoinType::Miter, EndType::Polygon);
        assert_eq!(group.lowest_path_index, Some(1));
        assert!(!group.paths_reversed);
    }

    #[test]
    fn zero_area_candidate_is_dropped() {
        let line = path![(0.0, 0.0), (5.0, 0.0)];
        let group = OffsetGroup::new(vec![line], JoinType::Miter, EndType::Polygon);
        assert_eq!(group.lowest_path_index, None);
        assert!(!group.paths_reversed);
    }

    #[test]
    fn open_group_has_no_orientation() {
        let p = path![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        let group = OffsetGroup::new(vec![p], JoinType::Round, EndType::Round);
        assert_eq!(group.lowest_path_index, None);
        assert!(!group.paths_reversed);
    }

    #[test]
    fn duplicate_stripping_respects_closedness() {
        let p = path![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)];
        let closed = OffsetGroup::new(vec![p.clone()], JoinType::Miter, EndType::Polygon);
        assert_eq!(closed.in_paths[0].vertex_count(), 3);
        let open = OffsetGroup::new(vec![p], JoinType::Miter, EndType::Butt);
        assert_eq!(open.in_paths[0].vertex_count(), 4);
    }
}
