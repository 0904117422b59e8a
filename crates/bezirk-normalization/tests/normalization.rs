//! Property and equivalence tests for street keys and house numbers.

use bezirk_normalization::{HouseNumber, normalize_street_name};
use proptest::prelude::*;

fn street_fragments() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("Straße".to_string()),
            Just("STRASSE".to_string()),
            Just("str".to_string()),
            Just("Str.".to_string()),
            Just(".".to_string()),
            Just("..".to_string()),
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("-".to_string()),
            "[a-zA-Zäöüß]{1,6}",
        ],
        0..10,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in street_fragments()) {
        let once = normalize_street_name(&raw);
        let twice = normalize_street_name(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_is_idempotent_for_any_ascii(raw in "[ -~]{0,40}") {
        let once = normalize_street_name(&raw);
        prop_assert_eq!(normalize_street_name(once.as_str()), once);
    }

    #[test]
    fn keys_never_contain_whitespace_or_double_dashes(raw in street_fragments()) {
        let key = normalize_street_name(&raw);
        prop_assert!(!key.as_str().chars().any(char::is_whitespace));
        prop_assert!(!key.as_str().contains("--"));
    }

    #[test]
    fn comparator_agrees_with_ord(
        a_num in 0u64..50, a_suffix in "[a-d]{0,2}",
        b_num in 0u64..50, b_suffix in "[a-d]{0,2}",
    ) {
        let a = HouseNumber::new(a_num, &a_suffix);
        let b = HouseNumber::new(b_num, &b_suffix);
        prop_assert_eq!(a.is_at_most(&b), a <= b);
        prop_assert_eq!(a.is_at_least(&b), a >= b);
        prop_assert!(a.is_at_most(&b) || a.is_at_least(&b));
    }

    #[test]
    fn display_round_trips_through_parse(num in 0u64..100_000, suffix in "[a-z]{0,3}") {
        let number = HouseNumber::new(num, &suffix);
        prop_assert_eq!(HouseNumber::parse(&number.to_string()), number);
    }
}

#[test]
fn spelling_variants_share_a_key() {
    let expected = normalize_street_name("Hauptstr. 5");
    assert_eq!(normalize_street_name("Hauptstraße 5"), expected);
    assert_eq!(normalize_street_name("hauptstr 5"), expected);
    assert_eq!(
        normalize_street_name("HAUPTSTRASSE 5"),
        normalize_street_name("Hauptstrasse 5")
    );
}

#[test]
fn table_and_query_spellings_meet() {
    assert_eq!(
        normalize_street_name("Teststr."),
        normalize_street_name("Teststraße")
    );
    assert_eq!(
        normalize_street_name("unknown lane"),
        normalize_street_name("Unknown Lane")
    );
}

#[test]
fn house_number_ordering_chain() {
    let chain: Vec<HouseNumber> = ["2", "2a", "2b", "2c", "3"]
        .iter()
        .map(|raw| HouseNumber::parse(raw))
        .collect();
    for pair in chain.windows(2) {
        assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        assert!(pair[0].is_at_most(&pair[1]));
        assert!(!pair[0].is_at_least(&pair[1]));
    }
}

#[test]
fn unparseable_numbers_equal_empty() {
    assert_eq!(HouseNumber::parse("abc"), HouseNumber::parse(""));
    assert_eq!(HouseNumber::parse(""), HouseNumber::new(0, ""));
}
