mod test_utils;

use contour_offset::offset::{EndType, JoinType, OffsetEngine};
use contour_offset::path;
use contour_offset::path::PathSet;
use test_utils::{assert_path_vertexes_eq, dist_to_segment};

#[test]
fn butt_caps_collinear_path() {
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)],
        JoinType::Miter,
        EndType::Butt,
    );
    let mut solution = PathSet::new();
    engine.execute(1.0, &mut solution);

    // both sides of the polyline plus flat caps exactly at the endpoints
    assert_eq!(solution.len(), 1);
    assert_path_vertexes_eq(
        &solution[0],
        &[
            (0.0, 1.0),
            (0.0, -1.0),
            (5.0, -1.0),
            (10.0, -1.0),
            (10.0, 1.0),
            (5.0, 1.0),
        ],
    );
    assert!((solution[0].area() - 20.0).abs() < 1e-9);
}

#[test]
fn butt_caps_l_shaped_path() {
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)],
        JoinType::Miter,
        EndType::Butt,
    );
    let mut solution = PathSet::new();
    engine.execute(1.0, &mut solution);

    // the forward side miters the convex corner; the return side sees the same
    // corner as concave and emits the notch triple
    assert_path_vertexes_eq(
        &solution[0],
        &[
            (0.0, 1.0),
            (0.0, -1.0),
            (11.0, -1.0),
            (11.0, 10.0),
            (9.0, 10.0),
            (9.0, 0.0),
            (10.0, 0.0),
            (10.0, 1.0),
        ],
    );
}

#[test]
fn square_caps_extend_past_endpoints() {
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (10.0, 0.0)],
        JoinType::Miter,
        EndType::Square,
    );
    let mut solution = PathSet::new();
    engine.execute(1.0, &mut solution);

    assert_path_vertexes_eq(
        &solution[0],
        &[(-1.0, 1.0), (-1.0, -1.0), (11.0, -1.0), (11.0, 1.0)],
    );
}

#[test]
fn round_caps_form_semicircles() {
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (10.0, 0.0)],
        JoinType::Round,
        EndType::Round,
    );
    let mut solution = PathSet::new();
    engine.execute(1.0, &mut solution);

    // default arc tolerance yields 26 points per semicircular cap
    assert_eq!(solution.len(), 1);
    assert_eq!(solution[0].vertex_count(), 52);
    for v in solution[0].iter() {
        let d = dist_to_segment((v.x, v.y), (0.0, 0.0), (10.0, 0.0));
        assert!((d - 1.0).abs() < 1e-9, "expected distance 1, got {}", d);
    }
}

#[test]
fn joined_path_produces_two_contours() {
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)],
        JoinType::Miter,
        EndType::Joined,
    );
    let mut solution = PathSet::new();
    engine.execute(1.0, &mut solution);

    // one closed contour per side of the joined polyline: the forward pass
    // miters/squares the convex side, the reversed pass sees every corner as
    // concave and emits notch triples
    assert_eq!(solution.len(), 2);
    assert_eq!(solution[0].vertex_count(), 5);
    assert_eq!(solution[1].vertex_count(), 9);
}

#[test]
fn two_point_joined_promotes_end_style() {
    // a 2 point path cannot form an interior join so a Joined group falls back
    // to capped ends: round caps under a round join
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (10.0, 0.0)],
        JoinType::Round,
        EndType::Joined,
    );
    let mut solution = PathSet::new();
    engine.execute(1.0, &mut solution);
    assert_eq!(solution.len(), 1);
    assert_eq!(solution[0].vertex_count(), 52);

    // and square caps under any other join
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (10.0, 0.0)],
        JoinType::Miter,
        EndType::Joined,
    );
    engine.execute(1.0, &mut solution);
    assert_eq!(solution.len(), 1);
    assert_path_vertexes_eq(
        &solution[0],
        &[(-1.0, 1.0), (-1.0, -1.0), (11.0, -1.0), (11.0, 1.0)],
    );
}

#[test]
fn zero_delta_callback_passes_vertexes_through() {
    let mut engine = OffsetEngine::new();
    engine.add_path(
        path![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)],
        JoinType::Miter,
        EndType::Butt,
    );
    let mut solution = PathSet::new();
    let mut callback = |_: &contour_offset::path::Path,
                        _: &[contour_offset::core::math::Vector2],
                        _: usize,
                        _: usize| 0.0;
    engine.execute_with_callback(&mut callback, &mut solution);

    // a zero distance leaves every vertex in place (both travel directions)
    assert_path_vertexes_eq(
        &solution[0],
        &[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (5.0, 0.0)],
    );
}

#[test]
fn constant_callback_matches_constant_execute() {
    let square = path![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

    let mut engine = OffsetEngine::new();
    engine.add_path(square.clone(), JoinType::Miter, EndType::Polygon);
    let mut expected = PathSet::new();
    engine.execute(2.0, &mut expected);

    let mut engine = OffsetEngine::new();
    engine.add_path(square, JoinType::Miter, EndType::Polygon);
    let mut solution = PathSet::new();
    let mut callback = |_: &contour_offset::path::Path,
                        _: &[contour_offset::core::math::Vector2],
                        _: usize,
                        _: usize| 2.0;
    engine.execute_with_callback(&mut callback, &mut solution);

    assert_eq!(solution, expected);
}
