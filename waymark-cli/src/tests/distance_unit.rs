//! Unit tests for the distance command.

use super::*;
use crate::distance::{DistanceArgs, DistanceQuery, run_distance};
use rstest::rstest;

fn london_to_paris() -> DistanceArgs {
    DistanceArgs {
        from_lat: Some(51.5074),
        from_lng: Some(-0.1278),
        to_lat: Some(48.8566),
        to_lng: Some(2.3522),
    }
}

#[rstest]
#[case::from_lat(DistanceArgs { from_lat: None, ..london_to_paris() }, ARG_DISTANCE_FROM_LAT)]
#[case::from_lng(DistanceArgs { from_lng: None, ..london_to_paris() }, ARG_DISTANCE_FROM_LNG)]
#[case::to_lat(DistanceArgs { to_lat: None, ..london_to_paris() }, ARG_DISTANCE_TO_LAT)]
#[case::to_lng(DistanceArgs { to_lng: None, ..london_to_paris() }, ARG_DISTANCE_TO_LNG)]
fn every_coordinate_is_required(#[case] args: DistanceArgs, #[case] expected: &'static str) {
    match DistanceQuery::try_from(args).expect_err("missing coordinate") {
        CliError::MissingArgument { field, .. } => assert_eq!(field, expected),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn measures_london_to_paris() {
    let report = DistanceQuery::try_from(london_to_paris())
        .expect("query")
        .measure();
    assert!((report.distance_km - 343.56).abs() < 0.1);
    assert!((report.distance_meters - report.distance_km * 1000.0).abs() < 1e-6);
}

#[rstest]
fn run_distance_writes_report() {
    let mut out = Vec::new();
    run_distance(london_to_paris(), &mut out).expect("distance should succeed");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json output");
    let km = value["distanceKm"].as_f64().expect("distanceKm");
    assert!((km - 343.56).abs() < 0.1);
}
