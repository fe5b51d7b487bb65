use bubbles_rs::{BubbleLayoutEngine, LayoutConfig, Record};

fn rec(id: &str, region: &str, value: f64) -> Record {
    Record {
        id: id.into(),
        country: format!("Country {id}"),
        region: region.into(),
        year: 2014,
        value,
        group: None,
    }
}

#[test]
fn nodes_come_out_largest_first() {
    // Values [10, 100, 50] with categories [A, B, A] -> [100(B), 50(A), 10(A)].
    let engine = BubbleLayoutEngine::new(LayoutConfig::default());
    let nodes = engine
        .build_nodes(&[rec("1", "A", 10.0), rec("2", "B", 100.0), rec("3", "A", 50.0)])
        .unwrap();

    let order: Vec<(f64, &str)> = nodes.iter().map(|n| (n.value, n.region.as_str())).collect();
    assert_eq!(order, vec![(100.0, "B"), (50.0, "A"), (10.0, "A")]);
    for pair in nodes.windows(2) {
        assert!(pair[0].value >= pair[1].value);
    }
}

#[test]
fn radii_span_the_configured_range() {
    let engine = BubbleLayoutEngine::new(LayoutConfig::default());
    let nodes = engine
        .build_nodes(&[rec("zero", "A", 0.0), rec("max", "A", 400.0), rec("mid", "A", 100.0)])
        .unwrap();

    // Sorted descending: max, mid, zero.
    assert!((nodes[0].radius - 85.0).abs() < 1e-9);
    assert!((nodes[2].radius - 2.0).abs() < 1e-9);
    assert!(nodes[1].radius > nodes[2].radius && nodes[1].radius < nodes[0].radius);
}

#[test]
fn radius_is_monotone_in_value() {
    let engine = BubbleLayoutEngine::new(LayoutConfig::default());
    let records: Vec<Record> = (0..20).map(|i| rec(&i.to_string(), "A", (i * 7) as f64)).collect();
    let nodes = engine.build_nodes(&records).unwrap();
    for pair in nodes.windows(2) {
        // Descending values means descending (or equal) radii.
        assert!(pair[0].radius >= pair[1].radius);
    }
}

#[test]
fn seeded_builds_are_identical() {
    let cfg = LayoutConfig {
        rng_seed: Some(42),
        ..Default::default()
    };
    let engine = BubbleLayoutEngine::new(cfg);
    let records = vec![rec("a", "Asia", 3.0), rec("b", "Europe", 8.0)];
    let first = engine.build_nodes(&records).unwrap();
    let second = engine.build_nodes(&records).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unseeded_builds_keep_metadata_stable() {
    let engine = BubbleLayoutEngine::new(LayoutConfig::default());
    let records = vec![rec("a", "Asia", 3.0), rec("b", "Europe", 8.0)];
    let first = engine.build_nodes(&records).unwrap();
    let second = engine.build_nodes(&records).unwrap();

    // Positions are free to differ; ids, radii, and categories are not.
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.radius, b.radius);
        assert_eq!(a.region, b.region);
    }
}

#[test]
fn seed_positions_stay_in_the_seeding_rectangle() {
    let cfg = LayoutConfig {
        rng_seed: Some(7),
        ..Default::default()
    };
    let engine = BubbleLayoutEngine::new(cfg.clone());
    let records: Vec<Record> = (0..50).map(|i| rec(&i.to_string(), "A", i as f64)).collect();
    let nodes = engine.build_nodes(&records).unwrap();
    for n in &nodes {
        assert!((0.0..cfg.seed_width).contains(&n.x));
        assert!((0.0..cfg.seed_height).contains(&n.y));
    }
}
