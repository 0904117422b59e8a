//! Built-in street rules.

use bezirk_normalization::HouseNumber;

use super::{Parity, RangeTest, RuleBranch, StreetRule};

fn numbers(from: u64, to: u64) -> RangeTest {
    RangeTest::Numbers { from, to }
}

fn suffixed(from: (u64, &str), to: (u64, &str)) -> RangeTest {
    RangeTest::Suffixed {
        from: HouseNumber::new(from.0, from.1),
        to: HouseNumber::new(to.0, to.1),
    }
}

fn odd(ranges: Vec<RangeTest>, district: &str) -> RuleBranch {
    RuleBranch::new(Parity::Odd, ranges, district)
}

fn even(ranges: Vec<RangeTest>, district: &str) -> RuleBranch {
    RuleBranch::new(Parity::Even, ranges, district)
}

pub(super) fn streets() -> Vec<StreetRule> {
    vec![
        StreetRule::new(
            "gereonstr",
            "Gereonstraße",
            vec![
                odd(vec![numbers(1, 3)], "Bezirk 1"),
                even(vec![suffixed((2, ""), (2, "c"))], "Bezirk 1"),
                // Every other Gereonstraße number.
                RuleBranch::new(Parity::Any, Vec::new(), "Bezirk 2"),
            ],
        ),
        StreetRule::new(
            "konrad-adenauer",
            "Konrad-Adenauer-Str.",
            vec![
                odd(vec![suffixed((1, ""), (71, "a"))], "Bezirk 1"),
                odd(vec![suffixed((75, ""), (151, ""))], "Bezirk 3"),
                even(vec![suffixed((4, ""), (44, "b"))], "Bezirk 1"),
                even(vec![suffixed((46, ""), (134, ""))], "Bezirk 3"),
            ],
        ),
        StreetRule::new(
            "oberdorfstr",
            "Oberdorfstraße",
            vec![
                odd(vec![numbers(0, 21)], "Bezirk 7"),
                even(vec![numbers(2, 18)], "Bezirk 7"),
            ],
        ),
        StreetRule::new(
            "rheinblick",
            "Rheinblick",
            vec![
                odd(vec![numbers(0, 19)], "Bezirk 8"),
                odd(vec![numbers(21, 25)], "Bezirk 7"),
                // 12a must be tested before the 2-12 branch.
                even(vec![suffixed((12, "a"), (12, "a"))], "Bezirk 7"),
                even(vec![numbers(2, 12)], "Bezirk 8"),
            ],
        ),
        StreetRule::new(
            "rolandstr",
            "Rolandstraße",
            vec![
                odd(
                    vec![suffixed((1, ""), (7, "b")), numbers(11, 27)],
                    "Bezirk 1",
                ),
                even(vec![numbers(2, 20)], "Bezirk 1"),
            ],
        ),
    ]
}
