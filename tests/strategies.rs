//! End-to-end comparison of every strategy on shared instances.

use std::time::Duration;

use u_tsp::constructive::{Greedy, RandomConfig, RandomSampling};
use u_tsp::evaluation::score_tour;
use u_tsp::graph::CostMatrix;
use u_tsp::models::Solver;
use u_tsp::search::{BranchAndBound, DepthFirst, SearchConfig, SearchOrder, SearchStatus};
use u_tsp::Timer;

const INF: f64 = f64::INFINITY;

fn reference_graph() -> CostMatrix {
    CostMatrix::from_rows(&[
        vec![0.0, 9.0, INF, 8.0, INF],
        vec![INF, 0.0, 4.0, INF, 2.0],
        vec![INF, 3.0, 0.0, 4.0, INF],
        vec![INF, 6.0, 7.0, 0.0, 12.0],
        vec![1.0, INF, INF, 10.0, 0.0],
    ])
    .expect("valid")
}

/// Asymmetric costs from points on a grid, with a few edges removed.
fn grid_graph(n: usize) -> CostMatrix {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| (((i * 37) % 11) as f64, ((i * 53) % 7) as f64))
        .collect();
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            let d = (dx * dx + dy * dy).sqrt();
            // Uphill costs more than downhill
            rows[i][j] = if (i + 2 * j) % 13 == 0 {
                INF
            } else {
                d + 0.25 * (points[j].1 - points[i].1).max(0.0)
            };
        }
    }
    CostMatrix::from_rows(&rows).expect("valid")
}

fn all_solvers() -> Vec<Box<dyn Solver>> {
    vec![
        Box::new(RandomSampling::new(
            RandomConfig::default().with_seed(312).with_max_samples(2_000),
        )),
        Box::new(Greedy),
        Box::new(DepthFirst::default()),
        Box::new(BranchAndBound::new(
            SearchConfig::default().with_order(SearchOrder::DepthFirst),
        )),
        Box::new(BranchAndBound::new(
            SearchConfig::default().with_order(SearchOrder::BestFirst),
        )),
    ]
}

#[test]
fn test_reference_graph_greedy() {
    let stats = Greedy.solve(&reference_graph(), &Timer::new(Duration::from_secs(10)));
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].tour, vec![1, 4, 0, 3, 2]);
    assert_eq!(stats[0].score, 21.0);
}

#[test]
fn test_reference_graph_branch_and_bound_matches_greedy() {
    for order in [SearchOrder::DepthFirst, SearchOrder::BestFirst] {
        let outcome = BranchAndBound::new(SearchConfig::default().with_order(order))
            .run(&reference_graph(), &Timer::new(Duration::from_secs(10)));
        assert_eq!(outcome.status, SearchStatus::Exhausted);
        let last = outcome.best().expect("record");
        assert_eq!(last.score, 21.0);
    }
}

#[test]
fn test_no_solver_beats_proven_optimum() {
    let g = grid_graph(8);
    let names: Vec<&str> = all_solvers().iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec![
            "random_tour",
            "greedy_tour",
            "dfs",
            "branch_and_bound",
            "branch_and_bound_smart"
        ]
    );

    let exact = BranchAndBound::default().run(&g, &Timer::new(Duration::from_secs(60)));
    assert!(exact.is_exhausted());
    let optimum = exact.best().expect("record").score;

    for solver in all_solvers() {
        let stats = solver.solve(&g, &Timer::new(Duration::from_secs(60)));
        let last = stats.last().expect("record");
        if last.is_sentinel() {
            continue;
        }
        assert!(
            last.score >= optimum - 1e-9,
            "{} beat the proven optimum",
            solver.name()
        );
        assert!((score_tour(&last.tour, &g) - last.score).abs() < 1e-9);
    }
}

#[test]
fn test_best_first_matches_exhaustive_dfs() {
    let g = grid_graph(7);
    let timer = Timer::new(Duration::from_secs(60));
    let dfs = DepthFirst::default().solve(&g, &timer);
    let smart =
        BranchAndBound::new(SearchConfig::default().with_greedy_seed(false)).run(&g, &timer);
    assert!(smart.is_exhausted());

    let dfs_last = dfs.last().expect("record");
    let smart_last = smart.best().expect("record");
    assert!(dfs_last.score.is_finite());
    assert!((dfs_last.score - smart_last.score).abs() < 1e-9);
}

#[test]
fn test_anytime_timeout_keeps_best_so_far() {
    let g = grid_graph(14);
    let config = SearchConfig::default().with_order(SearchOrder::DepthFirst);
    let outcome = BranchAndBound::new(config).run(&g, &Timer::new(Duration::from_millis(30)));
    let last = outcome.best().expect("record");
    assert!(last.fraction_leaves_covered <= 1.0);
    if !last.is_sentinel() {
        assert!((score_tour(&last.tour, &g) - last.score).abs() < 1e-9);
    }
    for w in outcome.stats.windows(2) {
        assert!(w[0].score > w[1].score);
    }
}
