use super::*;

fn spell(n: u64) -> String {
    EnglishNumerals.spell(n)
}

#[test]
fn spells_single_digits() {
    assert_eq!(spell(0), "zero");
    assert_eq!(spell(3), "three");
    assert_eq!(spell(5), "five");
    assert_eq!(spell(9), "nine");
}

#[test]
fn spells_teens_without_hyphen() {
    assert_eq!(spell(11), "eleven");
    assert_eq!(spell(13), "thirteen");
    assert_eq!(spell(19), "nineteen");
}

#[test]
fn spells_hyphenated_tens() {
    assert_eq!(spell(21), "twenty-one");
    assert_eq!(spell(42), "forty-two");
    assert_eq!(spell(99), "ninety-nine");
}

#[test]
fn spells_round_tens_without_unit() {
    assert_eq!(spell(20), "twenty");
    assert_eq!(spell(70), "seventy");
}

#[test]
fn spells_hundreds() {
    assert_eq!(spell(100), "one hundred");
    assert_eq!(spell(105), "one hundred five");
    assert_eq!(spell(999), "nine hundred ninety-nine");
}

#[test]
fn spells_thousand_groups_and_skips_zero_groups() {
    assert_eq!(spell(1_000), "one thousand");
    assert_eq!(spell(2_001), "two thousand one");
    assert_eq!(spell(1_234), "one thousand two hundred thirty-four");
    assert_eq!(spell(1_000_000), "one million");
    assert_eq!(
        spell(1_000_021),
        "one million twenty-one"
    );
}

#[test]
fn spells_largest_value_without_panicking() {
    let words = spell(u64::MAX);
    assert!(words.starts_with("eighteen quintillion"));
    assert!(words.ends_with("six hundred fifteen"));
}
