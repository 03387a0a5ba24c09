use manaforge::valuation::pt::parse_pt;
use manaforge::valuation::PtValuator;
use rstest::rstest;

#[rstest]
#[case("2/2", 8)]
#[case("0/0", 0)]
#[case("10/3", 26)]
#[case(" 4/5 ", 18)]
#[case("1+*/2", 6)] // first integer on each side
#[case("*/*", 0)]
#[case("*/3", 0)]
#[case("", 0)]
#[case("3", 0)]
#[case("1/2/3", 0)]
#[case("x/y", 0)]
fn test_pt_value(#[case] pt: &str, #[case] expected: u64) {
    assert_eq!(PtValuator::new(2).value(pt), expected, "P/T '{}'", pt);
}

#[test]
fn test_multiplier_is_configurable() {
    assert_eq!(PtValuator::new(3).value("2/2"), 12);
    assert_eq!(PtValuator::new(0).value("9/9"), 0);
}

#[test]
fn test_parse_pt() {
    assert_eq!(parse_pt("3/4"), Some((3, 4)));
    assert_eq!(parse_pt("-1/2"), Some((1, 2)));
    assert_eq!(parse_pt("5/*"), None);
    assert_eq!(parse_pt("/"), None);
}

#[test]
fn test_overflowing_pt_is_malformed() {
    assert_eq!(PtValuator::new(2).value("99999999999999999999999/1"), 0);
}
