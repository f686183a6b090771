//! Integration tests for folding several selection strings into one spec.

use gauntlet_spec_rs::{parse_test_spec, SpecParser, TestCaseInfo};

fn cases() -> Vec<TestCaseInfo> {
    vec![
        TestCaseInfo::new("a", ""),
        TestCaseInfo::new("b", "[one][x]"),
        TestCaseInfo::new("longer name with spaces", "[two][three][.][x]"),
        TestCaseInfo::new("zlonger name with spacesz", ""),
    ]
}

#[test]
fn test_accumulated_strings_behave_like_comma_joined_input() {
    let mut parser = SpecParser::new();
    parser.parse("~*name*");
    parser.parse("[three]");
    let accumulated = parser.into_spec();

    let joined = parse_test_spec("~*name*,[three]");

    for case in cases() {
        assert_eq!(
            accumulated.matches(&case),
            joined.matches(&case),
            "case {:?} selected differently",
            case.name
        );
    }
}

#[test]
fn test_accumulating_degenerate_strings_adds_nothing() {
    let mut parser = SpecParser::new();
    parser.parse("[x]");
    parser.parse("");
    parser.parse(",");
    parser.parse("[]");
    parser.parse("\"\"");
    let spec = parser.into_spec();

    assert_eq!(spec.clauses().len(), 1);
    for case in cases() {
        assert_eq!(spec.matches(&case), case.has_tag("x"));
    }
}

#[test]
fn test_reparsing_is_idempotent_over_a_case_set() {
    let texts = [
        "b",
        "*name*",
        "[two][x]",
        "~[one]",
        "exclude:[two]*name*",
        "\"longer*\"\"*spaces\"",
        "a,[b]",
        "*",
    ];
    for text in texts {
        let first = parse_test_spec(text);
        let second = parse_test_spec(text);
        for case in cases() {
            assert_eq!(
                first.matches(&case),
                second.matches(&case),
                "spec {:?} unstable for case {:?}",
                text,
                case.name
            );
        }
    }
}
