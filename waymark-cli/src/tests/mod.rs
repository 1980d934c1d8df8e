//! Unit tests for the Waymark CLI commands.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod distance_unit;
mod helpers;

#[rstest::rstest]
fn write_json_appends_newline() {
    let mut out = Vec::new();
    write_json(&mut out, &serde_json::json!({ "ok": true })).expect("write json");
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.ends_with("}\n"));
}

#[rstest::rstest]
fn cli_parses_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "waymark", "distance", "--from-lat", "-33.86", "--from-lng", "151.2", "--to-lat",
        "-37.81", "--to-lng", "144.96",
    ])
    .expect("arguments should parse");
    match cli.command {
        Command::Distance(args) => assert_eq!(args.from_lat, Some(-33.86)),
        other => panic!("expected distance command, found {other:?}"),
    }
}
