//! Generate every dataset from one seed and print a small summary.

use playset::cluster::{assign_clusters, centroids};
use playset::dataset::DatasetKind;
use playset::metrics::classification_metrics;
use playset::PlaygroundConfig;

fn main() -> playset::Result<()> {
    for kind in DatasetKind::ALL {
        let data = PlaygroundConfig::new()
            .with_dataset(kind)
            .with_noise(10.0)
            .with_seed("12345")
            .generate()?;

        let positives = data.examples.iter().filter(|e| e.label > 0.0).count();
        println!(
            "{:<10} n={:<4} train={:<4} test={:<4} positive={}",
            kind.name(),
            data.examples.len(),
            data.train.len(),
            data.test.len(),
            positives
        );
    }

    // A stand-in backend: cluster the XOR quadrants by the sign of x * y.
    let mut data = PlaygroundConfig::new()
        .with_dataset(DatasetKind::Xor)
        .with_seed("12345")
        .generate()?
        .examples;
    let quadrant = |rows: &[Vec<f32>]| -> playset::Result<Vec<usize>> {
        Ok(rows.iter().map(|r| usize::from(r[0] * r[1] >= 0.0)).collect())
    };
    let k = assign_clusters(&mut data, &quadrant)?;
    println!("\nxor: {k} clusters");
    for c in centroids(&data) {
        println!("  centroid {} at ({:5.2}, {:5.2})", c.cluster, c.x(), c.y());
    }

    let pred: Vec<f64> = data
        .iter()
        .map(|e| if e.cluster == 1 { 1.0 } else { -1.0 })
        .collect();
    let truth: Vec<f64> = data.iter().map(|e| e.label).collect();
    let m = classification_metrics(&pred, &truth)?;
    println!(
        "  accuracy={:.3} precision={:.3} recall={:.3}",
        m.accuracy, m.precision, m.recall
    );
    Ok(())
}
