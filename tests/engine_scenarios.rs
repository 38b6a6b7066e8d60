use kmeans_demo::{
    Bounds, ClusteringDemo, DataMode, DemoConfig, Error, FinishReason, Init, Renderer, RunTick,
    Status, SvgRenderer, Vec2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tight_groups() -> Vec<Vec2> {
    vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(0.5, -0.5),
        Vec2::new(-0.5, 0.5),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.5, 99.5),
        Vec2::new(99.5, 100.5),
    ]
}

#[test]
fn two_tight_groups_converge_within_two_iterations() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(1)).unwrap();
    demo.load_points(tight_groups());
    demo.set_centroids([Vec2::new(2.0, 1.0), Vec2::new(97.0, 98.0)]);

    let mut converged = demo.step();
    let labels = demo.labels();
    assert!(labels[..3].iter().all(|l| *l == Some(0)));
    assert!(labels[3..].iter().all(|l| *l == Some(1)));

    if !converged {
        converged = demo.step();
    }
    assert!(converged);
    assert!(demo.iteration() <= 2);

    // Centroids land on the group means.
    let c = demo.centroids();
    assert!(c[0].x.abs() < 1e-4 && c[0].y.abs() < 1e-4);
    assert!((c[1].x - 100.0).abs() < 1e-3 && (c[1].y - 100.0).abs() < 1e-3);
}

#[test]
fn generate_zero_points_is_invalid_argument() {
    let mut demo = ClusteringDemo::new(DemoConfig::default()).unwrap();
    let err = demo.generate_data(0, DataMode::UniformRandom).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { name: "count", .. }));
    assert!(err.to_string().contains("count"));
}

#[test]
fn step_with_zero_centroids_reports_converged_and_assigns_nothing() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(5)).unwrap();
    demo.generate_data(25, DataMode::Blobs).unwrap();

    assert!(demo.step());
    assert!(demo.points().all(|p| p.label() == -1));
    assert_eq!(demo.iteration(), 0);
    assert_eq!(demo.compute_inertia(), 0.0);
}

#[test]
fn injected_rng_makes_sessions_reproducible() {
    let session = |seed| {
        let mut demo =
            ClusteringDemo::with_rng(DemoConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
        demo.generate_data(40, DataMode::Blobs).unwrap();
        demo.initialize_centroids(3).unwrap();
        let _ = demo.run().finish();
        demo.snapshot()
    };
    assert_eq!(session(99), session(99));
}

#[test]
fn blob_data_with_matching_k_clusters_well() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(2024)).unwrap();
    demo.generate_data(90, DataMode::Blobs).unwrap();
    // Start one centroid per preset centre, offset slightly.
    let centres: Vec<Vec2> = demo
        .config()
        .blob_centers
        .iter()
        .map(|c| Vec2::new(c.x + 5.0, c.y - 5.0))
        .collect();
    demo.set_centroids(centres);

    let last = demo.resume().finish().unwrap();
    assert!(last.converged);
    assert_eq!(demo.status(), Status::Converged);
    assert_eq!(demo.finish_reason(), Some(FinishReason::Converged));

    // Round-robin generation: point i belongs to blob i % 3.
    for (i, label) in demo.labels().iter().enumerate() {
        assert_eq!(*label, Some(i % 3));
    }
    assert!(demo.silhouette().is_some_and(|s| s > 0.5));
}

#[test]
fn timer_driven_run_can_be_cancelled_between_ticks() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(8)).unwrap();
    // Both centroids start at the left end of a long line, so the first
    // iteration moves one of them by 49 units and cannot converge.
    demo.load_points((0..100).map(|i| Vec2::new(i as f32, 0.0)));
    demo.set_centroids([Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]);

    demo.resume_run();
    assert_eq!(demo.status(), Status::Running);
    match demo.tick() {
        RunTick::Stepped(report) => {
            assert_eq!(report.iteration, 1);
            assert!(!report.converged);
        }
        other => panic!("first tick should step, got {other:?}"),
    }
    assert!(demo.is_running());

    demo.stop();
    assert_eq!(demo.tick(), RunTick::Idle);
    assert_eq!(demo.iteration(), 1);
    assert_eq!(demo.finish_reason(), Some(FinishReason::Cancelled));
    assert_eq!(demo.status(), Status::Stopped);
}

#[test]
fn second_run_starts_from_fresh_centroids() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(12)).unwrap();
    demo.generate_data(60, DataMode::Blobs).unwrap();

    let first = demo.run().count();
    assert!(first >= 1);
    assert_eq!(demo.k(), 3);
    let settled = demo.centroids().to_vec();

    let mut run = demo.run();
    assert_eq!(run.demo().iteration(), 0);
    assert_ne!(run.demo().centroids(), &settled[..]);
    assert_eq!(run.next().map(|r| r.iteration), Some(1));
}

#[test]
fn kmeans_plus_plus_runs_cluster_blobs() {
    let config = DemoConfig::default()
        .with_seed(31)
        .with_init(Init::KmeansPlusPlus);
    let mut demo = ClusteringDemo::new(config).unwrap();
    demo.generate_data(90, DataMode::Blobs).unwrap();

    let last = demo.run().finish().unwrap();
    assert!(last.converged);
    let history = demo.inertia_history();
    assert_eq!(history.len(), last.iteration);
    // Lloyd iterations never raise the objective.
    assert!(history.windows(2).all(|w| w[1] <= w[0] * (1.0 + 1e-5)));
}

#[test]
fn bounds_with_an_overflowing_span_are_refused() {
    let config = DemoConfig::default().with_bounds(Bounds::new(-3.0e38, 3.0e38, 50.0, 250.0));
    assert!(matches!(
        ClusteringDemo::new(config),
        Err(Error::InvalidArgument { name: "bounds", .. })
    ));
}

#[test]
fn renderer_sees_every_point_and_centroid() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(3)).unwrap();
    demo.generate_data(12, DataMode::UniformRandom).unwrap();
    demo.initialize_centroids(2).unwrap();
    demo.step();

    let svg = SvgRenderer::default().render(&demo.snapshot());
    assert_eq!(svg.matches("<circle").count(), 12);
    assert_eq!(svg.matches("<rect").count(), 2);
}

#[test]
fn snapshot_serializes_for_a_host_page() {
    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(4)).unwrap();
    demo.generate_data(3, DataMode::UniformRandom).unwrap();
    let json = serde_json::to_string(&demo.snapshot()).unwrap();
    assert!(json.contains(r#""status":"ready""#));
    assert!(json.contains(r#""cluster":null"#));
}
