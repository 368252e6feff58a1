use proptest::prelude::*;

use walk_routing::config::PlannerConfig;
use walk_routing::constructive::build_tour;
use walk_routing::distance::{distance, path_length};
use walk_routing::insertion::insert_pois;
use walk_routing::local_search::{improve_tour, DEFAULT_MAX_ITERATIONS};
use walk_routing::models::{Point, PoiCandidate, Route};
use walk_routing::planner::{build_and_optimize_route, insert_pois_into_route};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn city_point() -> impl Strategy<Value = Point> {
    (55.70f64..55.80, 37.55f64..37.70).prop_map(|(lat, lon)| Point::new(lat, lon))
}

fn any_point() -> impl Strategy<Value = Point> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Point::new(lat, lon))
}

fn city_route(max_len: usize) -> impl Strategy<Value = Route> {
    prop::collection::vec(city_point(), 0..=max_len).prop_map(|pts| Route::from_points(&pts))
}

fn candidates(max_len: usize) -> impl Strategy<Value = Vec<PoiCandidate>> {
    prop::collection::vec(city_point(), 0..=max_len).prop_map(|pts| {
        pts.into_iter()
            .enumerate()
            .map(|(i, p)| PoiCandidate::new(format!("poi-{i}"), format!("Place {i}"), p))
            .collect()
    })
}

/// Plain 2-opt over points: reverse `[i..=j]`, recompute the whole length,
/// keep the candidate only when strictly shorter.
fn reference_two_opt(points: &[Point], max_iterations: usize) -> Vec<Point> {
    let mut route = points.to_vec();
    let n = route.len();
    if n <= 3 {
        return route;
    }

    let mut improved = true;
    let mut passes = 0;
    while improved && passes < max_iterations {
        improved = false;
        passes += 1;
        for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                let mut candidate = route.clone();
                candidate[i..=j].reverse();
                if path_length(&candidate) < path_length(&route) {
                    route = candidate;
                    improved = true;
                }
            }
        }
    }
    route
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in any_point(), b in any_point()) {
        prop_assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-6);
    }

    #[test]
    fn distance_to_self_is_zero(a in any_point()) {
        prop_assert!(distance(&a, &a).abs() < 1e-6);
    }

    #[test]
    fn short_routes_are_fixed_points(route in city_route(1)) {
        prop_assert_eq!(build_tour(&route), route.clone());
        prop_assert_eq!(improve_tour(&route, DEFAULT_MAX_ITERATIONS), route);
    }

    #[test]
    fn build_tour_keeps_anchors(route in city_route(12)) {
        prop_assume!(route.len() >= 2);
        let tour = build_tour(&route);
        prop_assert_eq!(tour.len(), route.len());
        prop_assert_eq!(tour.first(), route.first());
        prop_assert_eq!(tour.last(), route.last());
    }

    #[test]
    fn improve_tour_never_lengthens(route in city_route(10)) {
        let improved = improve_tour(&route, DEFAULT_MAX_ITERATIONS);
        prop_assert!(improved.total_distance() <= route.total_distance() + 1e-9);
        prop_assert_eq!(improved.len(), route.len());
        if route.len() >= 2 {
            prop_assert_eq!(improved.first(), route.first());
            prop_assert_eq!(improved.last(), route.last());
        }
    }

    #[test]
    fn improve_tour_matches_plain_two_opt(pts in prop::collection::vec(city_point(), 4..=16)) {
        let improved = improve_tour(&Route::from_points(&pts), DEFAULT_MAX_ITERATIONS);
        prop_assert_eq!(improved.points(), reference_two_opt(&pts, DEFAULT_MAX_ITERATIONS));
    }

    #[test]
    fn insert_never_exceeds_budget(
        route in city_route(6),
        pois in candidates(8),
        max_waypoints in 0usize..12,
    ) {
        let outcome = insert_pois(&route, &pois, max_waypoints);
        prop_assert!(outcome.route.len() <= max_waypoints.max(route.len()));
        if route.len() <= max_waypoints {
            prop_assert!(outcome.route.len() <= max_waypoints);
        }
        prop_assert_eq!(outcome.inserted_count + outcome.remaining_count, pois.len());
        prop_assert_eq!(outcome.route.len(), route.len() + outcome.inserted_count);
        prop_assert_eq!(outcome.route.poi_count(), outcome.inserted_count);
    }

    #[test]
    fn insert_without_candidates_is_noop(route in city_route(6), max_waypoints in 0usize..12) {
        let outcome = insert_pois(&route, &[], max_waypoints);
        prop_assert_eq!(outcome.route, route);
        prop_assert_eq!(outcome.inserted_count, 0);
    }
}

#[test]
fn square_tour_is_bounded() {
    init_logging();
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 1.0);
    let c = Point::new(1.0, 1.0);
    let d = Point::new(1.0, 0.0);
    let route = Route::from_points(&[a, b, c, d]);

    let optimized = improve_tour(&build_tour(&route), DEFAULT_MAX_ITERATIONS);
    let perimeter = route.total_distance();
    let direct = distance(&a, &d);

    assert!(optimized.total_distance() <= perimeter + 1e-9);
    assert!(optimized.total_distance() >= direct - 1e-9);
    assert_eq!(optimized.first().map(|w| w.point()), Some(a));
    assert_eq!(optimized.last().map(|w| w.point()), Some(d));
}

#[test]
fn three_candidates_one_slot() {
    init_logging();
    let route = Route::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 0.02)]);
    let pois = vec![
        PoiCandidate::new("p1", "Far", Point::new(0.008, 0.01)),
        PoiCandidate::new("p2", "Near", Point::new(0.001, 0.01)),
        PoiCandidate::new("p3", "Middle", Point::new(0.004, 0.01)),
    ];
    let config = PlannerConfig {
        max_waypoints: 3,
        ..PlannerConfig::default()
    };

    let outcome = insert_pois_into_route(&route, &pois, &config);
    assert_eq!(outcome.inserted_count, 1);
    assert_eq!(outcome.remaining_count, 2);
    assert_eq!(outcome.route.len(), 3);
    assert_eq!(outcome.route.waypoints()[1].display_name(), Some("Near"));
    assert!(outcome.route.waypoints()[1].is_point_of_interest());
}

#[test]
fn midpoint_insertion() {
    let a = Point::new(55.75, 37.60);
    let b = Point::new(55.76, 37.62);
    let mid = a.midpoint(&b);
    let route = Route::from_points(&[a, b]);

    let plan = walk_routing::insertion::plan_insertion(
        &PoiCandidate::new("m", "Midpoint", mid),
        &route,
    );
    assert_eq!(plan.position, 1);
    let expected = 2.0 * distance(&a, &mid) - distance(&a, &b);
    // The degree-space midpoint is only approximately equidistant from both
    // ends away from the equator.
    assert!((plan.cost - expected).abs() < 0.5);
    assert!(plan.cost < 0.5);
}

#[test]
fn optimize_then_insert_pipeline() {
    init_logging();
    let config = PlannerConfig {
        max_waypoints: 7,
        ..PlannerConfig::default()
    };
    let route = Route::from_points(&[
        Point::new(55.750, 37.610),
        Point::new(55.760, 37.640),
        Point::new(55.745, 37.600),
        Point::new(55.770, 37.620),
        Point::new(55.755, 37.650),
    ]);
    let optimized = build_and_optimize_route(&route, &config);
    assert_eq!(optimized.first(), route.first());
    assert_eq!(optimized.last(), route.last());

    let pois = vec![
        PoiCandidate::new("1", "Museum", Point::new(55.752, 37.615)),
        PoiCandidate::new("2", "Park", Point::new(55.765, 37.630)),
        PoiCandidate::new("3", "Theatre", Point::new(55.748, 37.640)),
    ];
    let outcome = insert_pois_into_route(&optimized, &pois, &config);
    assert_eq!(outcome.inserted_count, 2);
    assert_eq!(outcome.remaining_count, 1);
    assert_eq!(outcome.route.len(), 7);
    assert_eq!(outcome.route.first(), optimized.first());
    assert_eq!(outcome.route.last(), optimized.last());
}
