//! End-to-end resolution scenarios.

use bezirk_core::{
    Parity, RangeTest, RuleBranch, RuleSet, Session, SessionOptions, StreetRule, resolve,
};
use bezirk_ingest::parse_street_table;
use bezirk_model::{RawAddress, ResolutionSource, UNKNOWN_DISTRICT};

fn session_with_table(text: &str) -> Session {
    let mut session = Session::new(SessionOptions::new());
    session.import_text(text);
    session
}

fn resolve_in(session: &Session, street: &str, number: &str) -> bezirk_model::ResolutionResult {
    session.resolve(&RawAddress::new(street, number), None)
}

#[test]
fn gereonstrasse_odd_low_number() {
    let session = Session::default();
    let result = resolve_in(&session, "Gereonstraße", "1");
    assert_eq!(result.district, "Bezirk 1");
    assert_eq!(result.display_name, "Gereonstraße");
}

#[test]
fn gereonstrasse_even_outside_suffix_range() {
    let session = Session::default();
    assert_eq!(
        resolve_in(&session, "Gereonstraße", "4").district,
        "Bezirk 2"
    );
}

#[test]
fn konrad_adenauer_upper_even_range() {
    let session = Session::default();
    let result = resolve_in(&session, "Konrad-Adenauer-Straße", "80");
    assert_eq!(result.district, "Bezirk 3");
    assert_eq!(result.display_name, "Konrad-Adenauer-Str.");
}

#[test]
fn table_entry_for_unknown_street() {
    let session = session_with_table("unknown lane,Bezirk 4");
    let result = resolve_in(&session, "Unknown Lane", "5");
    assert_eq!(result.display_name, "Unknown Lane");
    assert_eq!(result.district, "Bezirk 4");
    assert_eq!(result.source, ResolutionSource::Table);
}

#[test]
fn no_table_no_rule_is_unknown() {
    let session = Session::default();
    let result = resolve_in(&session, "Unknown Lane", "5");
    assert_eq!(result.district, UNKNOWN_DISTRICT);
    assert_eq!(result.display_name, "Unknown Lane");
    assert_eq!(result.house_number, "5");
    assert_eq!(result.source, ResolutionSource::Unknown);
}

#[test]
fn malformed_table_keeps_only_valid_line() {
    let session = session_with_table("onlyonecolumn\n;nodata\nGood St;Bezirk 2");
    assert_eq!(session.table().len(), 1);
    assert_eq!(resolve_in(&session, "good st", "1").district, "Bezirk 2");
}

#[test]
fn imported_abbreviation_matches_full_spelling() {
    let session = session_with_table("Teststr.;Bezirk 9");
    assert_eq!(resolve_in(&session, "Teststraße", "1").district, "Bezirk 9");
}

#[test]
fn rule_beats_table_entry() {
    let session = session_with_table("Gereonstraße;Bezirk 99\nRheinblick;Bezirk 98");
    assert_eq!(
        resolve_in(&session, "Gereonstraße", "1").district,
        "Bezirk 1"
    );
    // Rheinblick 14 has no rule branch, so the table answers.
    let fallback = resolve_in(&session, "Rheinblick", "14");
    assert_eq!(fallback.district, "Bezirk 98");
    assert_eq!(fallback.display_name, "Rheinblick");
}

#[test]
fn unsatisfied_group_falls_through_to_later_group() {
    let rules = RuleSet::new(vec![
        StreetRule::new(
            "ring",
            "Ring",
            vec![RuleBranch::new(
                Parity::Odd,
                vec![RangeTest::Numbers { from: 1, to: 9 }],
                "Bezirk 1",
            )],
        ),
        StreetRule::new(
            "ringstr",
            "Ringstraße",
            vec![RuleBranch::new(
                Parity::Even,
                vec![RangeTest::Numbers { from: 2, to: 40 }],
                "Bezirk 5",
            )],
        ),
    ]);
    let even = resolve(&rules, None, &RawAddress::new("Ringstraße", "10"), None);
    assert_eq!(even.district, "Bezirk 5");
    assert_eq!(even.display_name, "Ringstraße");

    let odd = resolve(&rules, None, &RawAddress::new("Ringstraße", "3"), None);
    assert_eq!(odd.district, "Bezirk 1");
    assert_eq!(odd.display_name, "Ring");
}

#[test]
fn new_import_replaces_table_wholesale() {
    let mut session = session_with_table("Alpha;Bezirk 1\nBeta;Bezirk 2");
    let summary = session.import_text("Gamma;Bezirk 3");
    assert_eq!(summary.entries, 1);
    assert_eq!(
        resolve_in(&session, "Alpha", "1").district,
        UNKNOWN_DISTRICT
    );
    assert_eq!(resolve_in(&session, "Gamma", "1").district, "Bezirk 3");
}

#[test]
fn clearing_the_table_removes_fallback() {
    let mut session = session_with_table("Alpha;Bezirk 1");
    assert!(session.has_table());
    session.clear_table();
    assert!(!session.has_table());
    assert_eq!(
        resolve_in(&session, "Alpha", "1").district,
        UNKNOWN_DISTRICT
    );
}

#[test]
fn free_function_accepts_prebuilt_table() {
    let import = parse_street_table("Lindenweg;Bezirk 6");
    let result = resolve(
        &RuleSet::empty(),
        Some(&import.table),
        &RawAddress::new("Lindenweg", ""),
        None,
    );
    assert_eq!(result.district, "Bezirk 6");
}
