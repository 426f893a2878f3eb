use std::path::PathBuf;

use clap::Parser;
use supply_dash::cli::{validate_log_level, Args, Command};
use supply_dash::data::datasets::Category;
use supply_dash::snapshot::DashboardFilter;

#[test]
fn parses_regions_category() {
    let args = Args::try_parse_from(["supply-dash", "--seed", "42", "regions", "warehouse"])
        .expect("args should parse");
    assert_eq!(args.seed, Some(42));
    match args.command {
        Command::Regions { category } => assert_eq!(category, Category::Warehouse),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_category() {
    let err = Args::try_parse_from(["supply-dash", "regions", "retail"])
        .expect_err("unknown category should be rejected");
    assert!(
        err.to_string().contains("unknown category"),
        "unexpected error: {err}"
    );
}

#[test]
fn snapshot_defaults_to_headquarters_current_week() {
    let args = Args::try_parse_from(["supply-dash", "snapshot"]).expect("args should parse");
    match args.command {
        Command::Snapshot {
            org,
            week,
            with_summary,
        } => {
            assert_eq!(org, "全国总部");
            assert_eq!(week, "2024-W12");
            assert!(!with_summary);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn filter_rejects_unknown_organization() {
    let err = DashboardFilter::new("西部组织", "2024-W12").expect_err("unknown org");
    assert!(
        err.to_string().contains("organization"),
        "unexpected error: {err}"
    );
    DashboardFilter::new("海外事业部", "2024-W09").expect("known org and week");
}

#[test]
fn log_level_accepts_bare_levels() {
    for level in ["trace", "DEBUG", "info", "warn", "error", "off"] {
        validate_log_level(level).expect("level should be valid");
    }
}

#[test]
fn log_level_accepts_target_directives() {
    for directive in [
        "supply_dash=debug",
        "info,supply_dash=trace",
        "warn,reqwest=off",
    ] {
        validate_log_level(directive).expect("directive should be valid");
    }
}

#[test]
fn log_level_rejects_unknown_directive_levels() {
    let err = validate_log_level("supply_dash=verbose").expect_err("unknown level");
    assert!(
        err.to_string().contains("log level"),
        "unexpected error: {err}"
    );
}

#[test]
fn summary_takes_its_context_positionally() {
    let args = Args::try_parse_from(["supply-dash", "--output", "out.json", "summary", "ctx"])
        .expect("args should parse");
    assert_eq!(args.output, Some(PathBuf::from("out.json")));
    match args.command {
        Command::Summary { context } => assert_eq!(context, "ctx"),
        other => panic!("unexpected command: {other:?}"),
    }
}
