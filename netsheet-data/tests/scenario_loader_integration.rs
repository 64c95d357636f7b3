//! Loads the fixture batch file and runs every scenario through the net sheet.

use std::fs::File;
use std::path::PathBuf;

use netsheet_core::calculations::common::round_half_up;
use netsheet_core::{Location, compute_breakdown};
use netsheet_data::ScenarioLoader;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn fixture_loads_all_scenarios_in_order() {
    let file = File::open(fixture_path("scenarios.csv")).expect("fixture should exist");

    let scenarios = ScenarioLoader::parse(file).expect("fixture should parse");

    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Typical San Antonio", "Underwater Dallas", "Manual taxes Houston"]
    );
    assert_eq!(scenarios[1].input.location, Location::Dallas);
}

#[test]
fn fixture_scenarios_produce_expected_net_proceeds() {
    let file = File::open(fixture_path("scenarios.csv")).expect("fixture should exist");
    let scenarios = ScenarioLoader::parse(file).expect("fixture should parse");

    let typical = compute_breakdown(&scenarios[0].input);
    assert_eq!(round_half_up(typical.prorated_property_taxes), dec!(2975.34));
    assert_eq!(typical.commission_amount, dec!(30000));
    assert_eq!(typical.recording_tax, dec!(50));
    assert_eq!(round_half_up(typical.net_proceeds), dec!(165549.66));

    let underwater = compute_breakdown(&scenarios[1].input);
    assert_eq!(underwater.net_proceeds, Decimal::ZERO);
    assert_eq!(underwater.shortfall, dec!(43475));
    assert!(underwater.is_underwater());

    let manual = compute_breakdown(&scenarios[2].input);
    assert_eq!(manual.transfer_tax, dec!(1000));
    assert_eq!(manual.recording_tax, dec!(75));
    assert_eq!(manual.total_closing_costs, dec!(2700));
    assert_eq!(manual.net_proceeds, dec!(373300));
}
