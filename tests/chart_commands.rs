use bubbles_rs::{Chart, ChartRequest, Command, LayoutConfig, Mode, Record, SimConfig, reduce};

fn rec(id: &str, region: &str, year: i32, value: f64) -> Record {
    Record {
        id: id.into(),
        country: format!("Country {id}"),
        region: region.into(),
        year,
        value,
        group: None,
    }
}

fn frozen_sim() -> SimConfig {
    SimConfig {
        alpha_start: 0.0,
        ..Default::default()
    }
}

#[test]
fn reduce_folds_each_command_into_the_request() {
    let base = ChartRequest::new("spend.csv", Some(2013), Mode::Grouped);

    let next = reduce(&base, &Command::SelectMode(Mode::Split));
    assert_eq!(next.mode, Mode::Split);
    assert_eq!(next.dataset, "spend.csv");
    assert_eq!(next.year, Some(2013));

    let next = reduce(&base, &Command::SelectYear(2014));
    assert_eq!(next.year, Some(2014));
    assert_eq!(next.mode, Mode::Grouped);

    let next = reduce(&base, &Command::SelectDataset("other.csv".into()));
    assert_eq!(next.dataset, "other.csv");
    // The input request is untouched.
    assert_eq!(base.dataset, "spend.csv");
}

#[test]
fn dispatch_select_year_rebuilds_with_only_that_year() {
    let layout = LayoutConfig {
        rng_seed: Some(31),
        ..Default::default()
    };
    let mut chart = Chart::new(layout, frozen_sim());
    let records = vec![
        rec("a13", "Asia", 2013, 5.0),
        rec("a14", "Asia", 2014, 6.0),
        rec("e14", "Europe", 2014, 7.0),
    ];
    chart
        .render(&records, &ChartRequest::new("t", None, Mode::Grouped))
        .unwrap();

    let frame = chart.dispatch(&records, &Command::SelectYear(2014)).unwrap();
    assert_eq!(frame.nodes.len(), 2);
    assert!(frame.nodes.iter().all(|n| n.year == 2014));
    assert_eq!(chart.request().year, Some(2014));
}

#[test]
fn dispatch_select_mode_takes_the_continuous_path() {
    let layout = LayoutConfig {
        rng_seed: Some(32),
        ..Default::default()
    };
    let mut chart = Chart::new(layout, frozen_sim());
    let records = vec![rec("a", "Asia", 2014, 5.0), rec("b", "Europe", 2014, 6.0)];
    let before = chart
        .render(&records, &ChartRequest::new("t", None, Mode::Grouped))
        .unwrap();

    let after = chart
        .dispatch(&records, &Command::SelectMode(Mode::Split))
        .unwrap();
    assert_eq!(chart.request().mode, Mode::Split);
    // Frozen sim: a rebuild would have reseeded, continuity means same spots.
    for (b, a) in before.nodes.iter().zip(after.nodes.iter()) {
        assert_eq!((b.x, b.y), (a.x, a.y));
    }
}

#[test]
fn dispatch_select_dataset_updates_the_request() {
    let mut chart = Chart::new(LayoutConfig::default(), frozen_sim());
    let records = vec![rec("a", "Asia", 2014, 5.0)];
    chart
        .render(&records, &ChartRequest::new("old.csv", None, Mode::Grouped))
        .unwrap();

    chart
        .dispatch(&records, &Command::SelectDataset("new.csv".into()))
        .unwrap();
    assert_eq!(chart.request().dataset, "new.csv");
}
