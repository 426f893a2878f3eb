use std::fs;

use supply_dash::data::datasets::Category;
use supply_dash::data::regions::{default_regions, load_region_table};
use supply_dash::random::seeded_rng;
use supply_dash::ranking::generate_regional_performance_from;

#[test]
fn default_table_has_fourteen_tiered_regions() {
    let regions = default_regions();
    assert_eq!(regions.len(), 14);
    assert_eq!(regions[0].name, "深莞区");
    assert_eq!(regions[13].name, "非南区");
    assert!(regions.iter().all(|r| (1..=3).contains(&r.tier)));
    assert_eq!(regions.iter().filter(|r| r.tier == 1).count(), 5);
    assert_eq!(regions.iter().filter(|r| r.tier == 3).count(), 3);
}

#[test]
fn loads_custom_table_from_yaml() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("regions.yaml");
    fs::write(
        &path,
        "regions:\n  - name: 北欧区\n    tier: 1\n  - name: 南亚区\n    tier: 3\n",
    )
    .expect("write region table");

    let regions = load_region_table(&path).expect("load region table");
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[1].name, "南亚区");

    let mut rng = seeded_rng(Some(1));
    let records = generate_regional_performance_from(&regions, Category::Transport, &mut rng);
    assert_eq!(records.len(), 2);
}

#[test]
fn rejects_invalid_yaml() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("regions.yaml");
    fs::write(&path, "regions: [not").expect("write invalid table");

    let err = load_region_table(&path).expect_err("invalid yaml should fail");
    assert!(
        err.to_string().contains("invalid region table"),
        "unexpected error: {err}"
    );
}

#[test]
fn rejects_empty_and_duplicate_tables() {
    let temp = tempfile::tempdir().expect("tempdir");

    let empty = temp.path().join("empty.yaml");
    fs::write(&empty, "regions: []\n").expect("write empty table");
    let err = load_region_table(&empty).expect_err("empty table should fail");
    assert!(
        err.to_string().contains("at least one region"),
        "unexpected error: {err}"
    );

    let duplicate = temp.path().join("duplicate.yaml");
    fs::write(
        &duplicate,
        "regions:\n  - name: 香港区\n    tier: 1\n  - name: 香港区\n    tier: 2\n",
    )
    .expect("write duplicate table");
    let err = load_region_table(&duplicate).expect_err("duplicate table should fail");
    assert!(
        err.to_string().contains("duplicate region"),
        "unexpected error: {err}"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_region_table("/tmp/definitely-missing-supply-dash-regions.yaml")
        .expect_err("missing file should fail");
    assert!(
        err.to_string().contains("io error"),
        "unexpected error: {err}"
    );
}
