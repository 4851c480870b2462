use playset::cluster::{assign_clusters, centroids};
use playset::dataset::{circle, DatasetKind};
use playset::sample::seeded_rng;
use playset::schema::{is_valid, parse_examples};
use playset::{Example, PlaygroundConfig, Result};

#[test]
fn seeded_circle_is_reproducible() {
    let mut rng = seeded_rng("12345");
    let first = circle(10, 0.0, &mut rng);

    assert_eq!(first.len(), 10);
    for e in &first {
        assert!(e.label == 1.0 || e.label == -1.0);
        assert_eq!(e.cluster, 0);
        assert!(!e.is_centroid);
    }

    let mut rng = seeded_rng("12345");
    let second = circle(10, 0.0, &mut rng);
    assert_eq!(first, second);
}

#[test]
fn generated_classification_data_passes_upload_validation() {
    for kind in DatasetKind::classification().filter(|k| k.has_binary_labels()) {
        let data = PlaygroundConfig::new()
            .with_dataset(kind)
            .with_seed("upload")
            .with_sample_count(200)
            .generate()
            .unwrap();

        let in_domain: Vec<&Example> = data
            .examples
            .iter()
            .filter(|e| e.point.in_domain())
            .collect();
        let json = serde_json::to_value(&in_domain).unwrap();
        assert!(is_valid(&json), "{kind}");
    }
}

#[test]
fn anisotropic_labels_fail_upload_validation() {
    let data = DatasetKind::Anisotropic.generate(30, 0.0, &mut seeded_rng("aniso"));
    let json = serde_json::to_value(&data).unwrap();
    assert!(!is_valid(&json));
}

#[test]
fn rejected_upload_keeps_existing_data() {
    let mut current = circle(20, 0.0, &mut seeded_rng("keep"));
    let before = current.clone();

    let upload = r#"[{"x": 0, "y": 0, "label": 1}, {"x": 9, "y": 0, "label": -1}]"#;
    if let Ok(replacement) = parse_examples(upload) {
        current = replacement;
    }
    assert_eq!(current, before);

    let upload = r#"[{"x": 0.5, "y": -0.5, "label": -1}]"#;
    if let Ok(replacement) = parse_examples(upload) {
        current = replacement;
    }
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].label, -1.0);
}

#[test]
fn clustering_round_trip_on_gaussian_blobs() {
    let config = PlaygroundConfig::new()
        .with_dataset(DatasetKind::Gauss)
        .with_seed("blobs")
        .with_sample_count(100)
        .with_clusters(2);
    let mut data = config.generate().unwrap().examples;

    let seeds = config
        .initial_centroids(data.len(), &mut seeded_rng("init"))
        .unwrap();
    assert_eq!(seeds.len(), config.clusters);

    let diagonal = |rows: &[Vec<f32>]| -> Result<Vec<usize>> {
        Ok(rows.iter().map(|r| usize::from(r[0] + r[1] > 0.0)).collect())
    };
    let k = assign_clusters(&mut data, &diagonal).unwrap();
    assert_eq!(k, 2);

    let markers = centroids(&data);
    assert_eq!(markers.len(), 2);
    assert!(markers[0].x() < 0.0 && markers[0].y() < 0.0);
    assert!(markers[1].x() > 0.0 && markers[1].y() > 0.0);
}
