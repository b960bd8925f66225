//! Behavior of the individual field rules.

use chrono::NaiveDate;
use proptest::prelude::*;

use regcheck_validate::{Rule, Strictness, is_leap_year};

fn lenient(rule: Rule, value: &str) -> bool {
    rule.matches(value)
}

fn strict(rule: Rule, value: &str) -> bool {
    rule.matches_with(value, Strictness::Strict)
}

#[test]
fn code_accepts_exact_shape_only() {
    assert!(lenient(Rule::Code, "A-123"));
    assert!(lenient(Rule::Code, "Z-000"));
    assert!(!lenient(Rule::Code, "a-123"));
    assert!(!lenient(Rule::Code, "A-12"));
    assert!(!lenient(Rule::Code, "A-1234"));
    assert!(!lenient(Rule::Code, "A123"));
    assert!(!lenient(Rule::Code, " A-123"));
    assert!(!lenient(Rule::Code, "A-123 "));
    assert!(!lenient(Rule::Code, "AB-123"));
    assert!(!lenient(Rule::Code, ""));
}

#[test]
fn code_rejects_non_ascii_digits() {
    // Arabic-Indic digits are Unicode \d but not valid code digits.
    assert!(!lenient(Rule::Code, "A-\u{0661}\u{0662}\u{0663}"));
}

#[test]
fn purchase_date_leap_days() {
    assert!(lenient(Rule::PurchaseDate, "2000-02-29"));
    assert!(lenient(Rule::PurchaseDate, "2004-02-29"));
    assert!(lenient(Rule::PurchaseDate, "1996-02-29"));
    assert!(lenient(Rule::PurchaseDate, "1904-02-29"));
    assert!(!lenient(Rule::PurchaseDate, "1900-02-29"));
    assert!(!lenient(Rule::PurchaseDate, "2023-02-29"));
    assert!(!lenient(Rule::PurchaseDate, "2024-02-30"));
}

#[test]
fn purchase_date_month_lengths() {
    assert!(lenient(Rule::PurchaseDate, "2023-02-28"));
    assert!(lenient(Rule::PurchaseDate, "2023-12-31"));
    assert!(lenient(Rule::PurchaseDate, "2023-01-31"));
    assert!(lenient(Rule::PurchaseDate, "2023-04-30"));
    assert!(!lenient(Rule::PurchaseDate, "2023-04-31"));
    assert!(!lenient(Rule::PurchaseDate, "2023-06-31"));
    assert!(!lenient(Rule::PurchaseDate, "2023-09-31"));
    assert!(!lenient(Rule::PurchaseDate, "2023-11-31"));
    assert!(!lenient(Rule::PurchaseDate, "2023-13-01"));
    assert!(!lenient(Rule::PurchaseDate, "2023-00-10"));
    assert!(!lenient(Rule::PurchaseDate, "2023-05-00"));
}

#[test]
fn purchase_date_format() {
    assert!(!lenient(Rule::PurchaseDate, "2023-5-01"));
    assert!(!lenient(Rule::PurchaseDate, "2023-05-1"));
    assert!(!lenient(Rule::PurchaseDate, "1899-12-31"));
    assert!(!lenient(Rule::PurchaseDate, "2100-01-01"));
    assert!(!lenient(Rule::PurchaseDate, "23-05-01"));
    assert!(!lenient(Rule::PurchaseDate, "01/05/2023"));
    assert!(!lenient(Rule::PurchaseDate, "2023-05-01x"));
    assert!(!lenient(Rule::PurchaseDate, ""));
}

#[test]
fn amount_lenient() {
    assert!(lenient(Rule::Amount, "1234"));
    assert!(lenient(Rule::Amount, "1234,56"));
    assert!(lenient(Rule::Amount, "1,5"));
    assert!(lenient(Rule::Amount, "0"));
    assert!(!lenient(Rule::Amount, ""));
    assert!(!lenient(Rule::Amount, "12,"));
    assert!(!lenient(Rule::Amount, "abc"));
    // Not start-anchored: the trailing digits carry the match.
    assert!(lenient(Rule::Amount, "12345"));
    assert!(lenient(Rule::Amount, "EUR 12,50"));
    assert!(lenient(Rule::Amount, "12,345"));
}

#[test]
fn amount_strict() {
    assert!(strict(Rule::Amount, "1234"));
    assert!(strict(Rule::Amount, "1234,56"));
    assert!(strict(Rule::Amount, "1,5"));
    assert!(!strict(Rule::Amount, ""));
    assert!(!strict(Rule::Amount, "12345"));
    assert!(!strict(Rule::Amount, "EUR 12,50"));
    assert!(!strict(Rule::Amount, "12,345"));
    assert!(!strict(Rule::Amount, "12.50"));
}

#[test]
fn description_needs_non_whitespace() {
    assert!(lenient(Rule::Description, "x"));
    assert!(lenient(Rule::Description, "  padded  "));
    assert!(!lenient(Rule::Description, "  "));
    assert!(!lenient(Rule::Description, "\t"));
    assert!(!lenient(Rule::Description, ""));
    assert!(strict(Rule::Description, "x"));
    assert!(!strict(Rule::Description, " "));
}

#[test]
fn email_lenient() {
    assert!(lenient(Rule::Email, "a.b+c@example.com"));
    assert!(lenient(Rule::Email, "user_1%x@mail.example.co.uk"));
    assert!(!lenient(Rule::Email, "bad@"));
    assert!(!lenient(Rule::Email, "no-domain-dot@com"));
    assert!(!lenient(Rule::Email, "user@example.c"));
    assert!(!lenient(Rule::Email, ""));
    // Contains semantics: surrounding text is tolerated.
    assert!(lenient(Rule::Email, "mail: a@b.com"));
    assert!(lenient(Rule::Email, "<a@b.com>"));
}

#[test]
fn email_strict() {
    assert!(strict(Rule::Email, "a.b+c@example.com"));
    assert!(!strict(Rule::Email, "bad@"));
    assert!(!strict(Rule::Email, "no-domain-dot@com"));
    assert!(!strict(Rule::Email, "mail: a@b.com"));
    assert!(!strict(Rule::Email, "<a@b.com>"));
    // No word boundary before a punctuation-only local part.
    assert!(strict(Rule::Email, "..@b.com"));
    assert!(!lenient(Rule::Email, "..@b.com"));
}

#[test]
fn code_and_date_same_in_both_modes() {
    for value in ["A-123", "a-123", "2000-02-29", "1900-02-29"] {
        assert_eq!(lenient(Rule::Code, value), strict(Rule::Code, value));
        assert_eq!(
            lenient(Rule::PurchaseDate, value),
            strict(Rule::PurchaseDate, value)
        );
    }
}

fn is_code_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_uppercase()
        && bytes[1] == b'-'
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

fn is_calendar_date(year: i32, month: u32, day: u32) -> bool {
    (1900..=2099).contains(&year) && NaiveDate::from_ymd_opt(year, month, day).is_some()
}

proptest! {
    #[test]
    fn generated_codes_match(code in "[A-Z]-[0-9]{3}") {
        prop_assert!(Rule::Code.matches(&code));
    }

    #[test]
    fn code_agrees_with_shape_check(value in "[A-Za-z0-9 -]{0,7}") {
        prop_assert_eq!(Rule::Code.matches(&value), is_code_shaped(&value));
    }

    #[test]
    fn purchase_date_agrees_with_calendar(
        year in 1850i32..2150,
        month in 0u32..=13,
        day in 0u32..=32,
    ) {
        let value = format!("{year:04}-{month:02}-{day:02}");
        prop_assert_eq!(
            Rule::PurchaseDate.matches(&value),
            is_calendar_date(year, month, day),
            "value {}", value
        );
    }

    #[test]
    fn feb_29_tracks_leap_years(year in 1900i32..=2099) {
        let value = format!("{year:04}-02-29");
        prop_assert_eq!(Rule::PurchaseDate.matches(&value), is_leap_year(year));
    }

    #[test]
    fn strict_amount_agrees_with_split(value in "[0-9,]{0,8}") {
        let expected = match value.split_once(',') {
            None => (1..=4).contains(&value.len()),
            Some((int, frac)) => {
                (1..=4).contains(&int.len())
                    && (1..=2).contains(&frac.len())
                    && !frac.contains(',')
            }
        };
        prop_assert_eq!(Rule::Amount.matches_with(&value, Strictness::Strict), expected);
    }

    // Email is left out: a local part opening with punctuation has no
    // leading word boundary, so strict can accept what lenient rejects.
    #[test]
    fn strict_acceptance_implies_lenient(value in "\\PC{0,24}") {
        for rule in [Rule::Code, Rule::PurchaseDate, Rule::Amount, Rule::Description] {
            if rule.matches_with(&value, Strictness::Strict) {
                prop_assert!(rule.matches(&value));
            }
        }
    }
}
