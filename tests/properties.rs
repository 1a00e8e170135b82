//! Invariants of the savings construction over generated instances.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use u_vrppd::constructive::{compute_savings, merge_savings, SavingsEdge};
use u_vrppd::evaluation::RouteEvaluator;
use u_vrppd::models::{distance, Job, JobId, JobSet, Point, RoutingConfig, Solution, ViolationType};

fn point(x: f64, y: f64) -> Point {
    Point::new(x, y).expect("finite")
}

fn coord() -> impl Strategy<Value = f64> {
    -50.0..50.0f64
}

fn jobs_strategy() -> impl Strategy<Value = JobSet> {
    prop::collection::vec((coord(), coord(), coord(), coord()), 0..12).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(k, (a, b, c, d))| Job::new(k as JobId + 1, point(a, b), point(c, d)))
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = RoutingConfig> {
    (coord(), coord(), 20.0..600.0f64).prop_map(|(x, y, max)| {
        RoutingConfig::default()
            .with_depot(point(x, y))
            .with_max_duration(max)
    })
}

fn assert_partition(jobs: &JobSet, solution: &Solution) {
    let mut served: Vec<JobId> = solution.job_ids().into_iter().flatten().collect();
    served.sort_unstable();
    assert_eq!(served, jobs.ids());
}

fn random_instance(rng: &mut StdRng, n: i64) -> JobSet {
    (1..=n)
        .map(|id| {
            let source = point(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
            let destination =
                point(rng.random_range(-100.0..100.0), rng.random_range(-100.0..100.0));
            Job::new(id, source, destination)
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_every_job_served_once(mut jobs in jobs_strategy(), config in config_strategy()) {
        let solution = u_vrppd::solve(&mut jobs, &config);
        assert_partition(&jobs, &solution);
        prop_assert!(solution.routes().iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn prop_routes_within_bound_except_lone_jobs(
        mut jobs in jobs_strategy(),
        config in config_strategy(),
    ) {
        let solution = u_vrppd::solve(&mut jobs, &config);
        let evaluator = RouteEvaluator::new(&jobs, &config);
        for route in solution.routes() {
            let duration = evaluator.duration(route.jobs());
            prop_assert!((duration - route.total_duration()).abs() < 1e-9);
            prop_assert!(duration <= config.max_duration() || route.len() == 1);
        }

        let (_, violations) = evaluator.evaluate_solution(&solution);
        for v in violations {
            let ViolationType::MaxDurationExceeded { route_id, .. } = v.kind;
            let route = solution.routes().iter().find(|r| r.id() == route_id);
            prop_assert_eq!(route.map(|r| r.len()), Some(1));
        }
    }

    #[test]
    fn prop_assignments_match_routes(mut jobs in jobs_strategy(), config in config_strategy()) {
        let solution = u_vrppd::solve(&mut jobs, &config);
        for job in jobs.iter() {
            prop_assert_eq!(job.route(), solution.route_of(job.id()));
            prop_assert!(job.route().is_some());
        }
    }

    #[test]
    fn prop_distance_is_symmetric(a in (coord(), coord()), b in (coord(), coord())) {
        let (a, b) = (point(a.0, a.1), point(b.0, b.1));
        prop_assert_eq!(distance(&a, &a), 0.0);
        prop_assert!((distance(&a, &b) - distance(&b, &a)).abs() < 1e-12);
        prop_assert!(distance(&a, &b) >= 0.0);
    }

    #[test]
    fn prop_savings_cover_all_ordered_pairs(jobs in jobs_strategy(), depot in (coord(), coord())) {
        let edges = compute_savings(&jobs, point(depot.0, depot.1));
        let n = jobs.len();
        prop_assert_eq!(edges.len(), n * n.saturating_sub(1));
        for pair in edges.windows(2) {
            prop_assert!(pair[0].amount >= pair[1].amount);
        }
    }

    #[test]
    fn prop_same_route_edge_is_noop(mut jobs in jobs_strategy(), config in config_strategy()) {
        let mut edges = compute_savings(&jobs, config.depot());
        let before = merge_savings(&mut jobs, &edges, &config);

        let pair = before
            .routes()
            .iter()
            .find(|r| r.len() >= 2)
            .map(|r| (r.jobs()[1], r.jobs()[0]));
        if let Some((source, destination)) = pair {
            edges.push(SavingsEdge { source, destination, amount: f64::MAX });
            let after = merge_savings(&mut jobs, &edges, &config);
            prop_assert_eq!(before, after);
        }
    }
}

#[test]
fn test_large_random_instance() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut jobs = random_instance(&mut rng, 80);
    let config = RoutingConfig::default();

    let solution = u_vrppd::solve(&mut jobs, &config);
    assert_partition(&jobs, &solution);
    assert!(solution.num_routes() < 80);
}

#[test]
fn test_shuffled_edges_still_partition() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut jobs = random_instance(&mut rng, 30);
    let config = RoutingConfig::default().with_max_duration(400.0);

    let mut edges = compute_savings(&jobs, config.depot());
    edges.shuffle(&mut rng);
    let solution = merge_savings(&mut jobs, &edges, &config);
    assert_partition(&jobs, &solution);

    let evaluator = RouteEvaluator::new(&jobs, &config);
    for route in solution.routes().iter().filter(|r| r.len() > 1) {
        assert!(evaluator.is_feasible(route.jobs()));
    }
}
