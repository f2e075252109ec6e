#![allow(dead_code)]
use contour_offset::{
    core::traits::FuzzyEq,
    path::{Path, PathSet},
    union::{FillRule, UnionOptions, UnionResolver},
};

/// Holds a set of properties of a path for comparison in tests.
#[derive(Debug, Copy, Clone)]
pub struct PathProperties {
    pub vertex_count: usize,
    pub area: f64,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl PathProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        vertex_count: usize,
        area: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            vertex_count,
            area,
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn from_path(path: &Path<f64>) -> Self {
        let (min, max) = path
            .extents()
            .expect("path should have at least one vertex for properties");
        Self {
            vertex_count: path.vertex_count(),
            area: path.area(),
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        let eps = Self::PROP_CMP_EPS;
        self.vertex_count == other.vertex_count
            && self.area.fuzzy_eq_eps(other.area, eps)
            && self.min_x.fuzzy_eq_eps(other.min_x, eps)
            && self.min_y.fuzzy_eq_eps(other.min_y, eps)
            && self.max_x.fuzzy_eq_eps(other.max_x, eps)
            && self.max_y.fuzzy_eq_eps(other.max_y, eps)
    }
}

/// Compare all `paths` against `expected` properties without requiring matching order.
pub fn property_sets_match(paths: &[Path<f64>], expected: &[PathProperties]) -> bool {
    if paths.len() != expected.len() {
        return false;
    }
    let properties: Vec<PathProperties> = paths.iter().map(PathProperties::from_path).collect();
    let mut matched = vec![false; expected.len()];
    for p in properties.iter() {
        let found = expected
            .iter()
            .enumerate()
            .find(|&(i, e)| !matched[i] && p.fuzzy_eq(e));
        match found {
            Some((i, _)) => matched[i] = true,
            None => return false,
        }
    }
    true
}

/// Assert a path's vertexes fuzzy equal the expected `(x, y)` positions in order.
pub fn assert_path_vertexes_eq(path: &Path<f64>, expected: &[(f64, f64)]) {
    assert_eq!(
        path.vertex_count(),
        expected.len(),
        "vertex count mismatch, path: {:?}",
        path
    );
    for (i, (v, e)) in path.iter().zip(expected.iter()).enumerate() {
        assert!(
            v.x.fuzzy_eq_eps(e.0, 1e-8) && v.y.fuzzy_eq_eps(e.1, 1e-8),
            "vertex {} mismatch, got ({}, {}), expected {:?}",
            i,
            v.x,
            v.y,
            e
        );
    }
}

/// Minimum distance from `pt` to the segment `a`-`b`.
pub fn dist_to_segment(pt: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sqr = dx * dx + dy * dy;
    let t = if len_sqr == 0.0 {
        0.0
    } else {
        (((pt.0 - a.0) * dx + (pt.1 - a.1) * dy) / len_sqr).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((pt.0 - cx) * (pt.0 - cx) + (pt.1 - cy) * (pt.1 - cy)).sqrt()
}

/// Minimum distance from `pt` to the closed boundary of `path`.
pub fn dist_to_closed_path(pt: (f64, f64), path: &Path<f64>) -> f64 {
    let cnt = path.vertex_count();
    let mut min_dist = f64::MAX;
    for i in 0..cnt {
        let a = path.at(i);
        let b = path.at((i + 1) % cnt);
        min_dist = min_dist.min(dist_to_segment(pt, (a.x, a.y), (b.x, b.y)));
    }
    min_dist
}

/// Union resolver that records what the engine handed it and passes the subject
/// through untouched, for asserting on the engine/resolver boundary.
#[derive(Debug, Clone, Default)]
pub struct RecordingUnion {
    pub calls: Vec<(usize, FillRule, UnionOptions)>,
}

impl UnionResolver<f64> for RecordingUnion {
    fn union_into_paths(
        &mut self,
        subject: &[Path<f64>],
        fill_rule: FillRule,
        options: &UnionOptions,
        solution: &mut PathSet<f64>,
    ) {
        self.calls.push((subject.len(), fill_rule, *options));
        solution.clear();
        solution.extend(subject.iter().cloned());
    }
}
