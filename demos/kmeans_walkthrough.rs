//! Walk through a k-means run the way the tutorial widget does:
//! generate blobs, step until converged, print status and write an SVG.

use kmeans_demo::cluster::{metrics, Clustering, Kmeans, Metric};
use kmeans_demo::{ClusteringDemo, DataMode, DemoConfig, Init, Renderer, SvgRenderer};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut demo = ClusteringDemo::new(DemoConfig::default().with_seed(42))?;
    demo.generate_data(60, DataMode::Blobs)?;

    // `run` seeds default_k (3) centroids uniformly inside the canvas.
    println!("=== Lloyd iterations (k=3) ===");
    for report in demo.run() {
        println!(
            "  iteration {:3}  moved {:3} points  max shift {:7.3}  WCSS {:10.2}",
            report.iteration, report.changed, report.max_shift, report.inertia
        );
    }
    println!("status: {:?} after {} iterations", demo.status(), demo.iteration());
    if let Some(s) = demo.silhouette() {
        println!("silhouette: {:.3}", s);
    }

    // Same data, k-means++ seeding.
    let uniform_iterations = demo.iteration();
    demo.initialize_centroids_with(3, Init::KmeansPlusPlus)?;
    let kpp = demo.resume().count();
    println!("k-means++ seeding: {kpp} iterations (uniform seeding took {uniform_iterations})");

    let svg = SvgRenderer::default().render(&demo.snapshot());
    let path = std::env::temp_dir().join("kmeans_walkthrough.svg");
    std::fs::write(&path, svg)?;
    println!("wrote {}", path.display());

    // Same data under each metric.
    println!("\n=== Metric comparison (k=3) ===");
    let data = demo.positions().to_vec();
    for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Cosine] {
        let model = Kmeans::new(3).with_metric(metric).with_seed(42);
        let fit = model.fit(&data)?;
        let labels: Vec<Option<usize>> = model.fit_predict(&data)?.into_iter().map(Some).collect();
        println!(
            "  {:10} WCSS {:10.2}  silhouette {:.3}  iterations {}",
            metric.name(),
            fit.inertia,
            metrics::silhouette_score(&data, &labels, metric),
            fit.iterations
        );
    }

    Ok(())
}
