//! Field format rules.
//!
//! Each rule is a fixed regular expression compiled once per process. Rules
//! are stateless; a rule plus a [`Strictness`] fully determines the outcome
//! for any input value.
//!
//! # Lenient vs strict
//!
//! Lenient mode reproduces the historical behavior of two rules:
//!
//! - Amount is anchored only at the end, so `"x12"` and `"12345"` pass on
//!   their trailing digits.
//! - Email is bounded by ASCII word boundaries, so any value that *contains*
//!   an address-shaped substring passes.
//!
//! Strict mode anchors both rules to the whole value. The other three rules
//! are identical in both modes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use regcheck_model::FieldRole;

/// How tightly the Amount and Email rules are anchored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    #[default]
    Lenient,
    Strict,
}

const CODE_PATTERN: &str = r"^[A-Z]-[0-9]{3}$";

// Feb 29 only in Gregorian leap years; 1900 is excluded, 2000 is not.
const PURCHASE_DATE_PATTERN: &str = concat!(
    r"^(?:",
    r"(?:19(?:0[48]|[2468][048]|[13579][26])|20(?:[02468][048]|[13579][26]))-02-29",
    r"|",
    r"(?:19|20)[0-9]{2}-(?:",
    r"02-(?:0[1-9]|1[0-9]|2[0-8])",
    r"|(?:0[13-9]|1[0-2])-(?:0[1-9]|[12][0-9]|30)",
    r"|(?:0[13578]|1[02])-31",
    r")",
    r")$",
);

const AMOUNT_PATTERN: &str = r"(?:[0-9]{1,4}(?:,[0-9]{1,2})?)$";
const AMOUNT_STRICT_PATTERN: &str = r"^[0-9]{1,4}(?:,[0-9]{1,2})?$";

const DESCRIPTION_PATTERN: &str = r"\S";

const EMAIL_PATTERN: &str =
    r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)";
const EMAIL_STRICT_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern must compile")
}

static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(CODE_PATTERN));
static PURCHASE_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(PURCHASE_DATE_PATTERN));
static AMOUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(AMOUNT_PATTERN));
static AMOUNT_STRICT_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(AMOUNT_STRICT_PATTERN));
static DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(DESCRIPTION_PATTERN));
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_PATTERN));
static EMAIL_STRICT_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL_STRICT_PATTERN));

/// One format rule per checked field role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Code,
    PurchaseDate,
    Amount,
    Description,
    Email,
}

impl Rule {
    /// Evaluation order. When several fields fail, the earliest rule here is
    /// the one reported.
    pub const PRECEDENCE: [Rule; 5] = [
        Rule::Code,
        Rule::PurchaseDate,
        Rule::Amount,
        Rule::Description,
        Rule::Email,
    ];

    /// The record field this rule checks.
    pub fn role(&self) -> FieldRole {
        match self {
            Rule::Code => FieldRole::Code,
            Rule::PurchaseDate => FieldRole::PurchaseDate,
            Rule::Amount => FieldRole::Amount,
            Rule::Description => FieldRole::Description,
            Rule::Email => FieldRole::Email,
        }
    }

    /// Short description of the accepted format.
    pub fn summary(&self) -> &'static str {
        match self {
            Rule::Code => "uppercase letter, hyphen, three digits",
            Rule::PurchaseDate => "YYYY-MM-DD, years 1900-2099, calendar-valid day",
            Rule::Amount => "1-4 digits, optional comma and 1-2 decimals",
            Rule::Description => "at least one non-whitespace character",
            Rule::Email => "local@domain.tld, TLD of two or more letters",
        }
    }

    fn regex(&self, strictness: Strictness) -> &'static Regex {
        match (self, strictness) {
            (Rule::Code, _) => &*CODE_REGEX,
            (Rule::PurchaseDate, _) => &*PURCHASE_DATE_REGEX,
            (Rule::Amount, Strictness::Lenient) => &*AMOUNT_REGEX,
            (Rule::Amount, Strictness::Strict) => &*AMOUNT_STRICT_REGEX,
            (Rule::Description, _) => &*DESCRIPTION_REGEX,
            (Rule::Email, Strictness::Lenient) => &*EMAIL_REGEX,
            (Rule::Email, Strictness::Strict) => &*EMAIL_STRICT_REGEX,
        }
    }

    /// Source text of the pattern used under `strictness`.
    pub fn pattern(&self, strictness: Strictness) -> &'static str {
        self.regex(strictness).as_str()
    }

    /// Check a value using lenient anchoring.
    pub fn matches(&self, value: &str) -> bool {
        self.matches_with(value, Strictness::Lenient)
    }

    pub fn matches_with(&self, value: &str, strictness: Strictness) -> bool {
        self.regex(strictness).is_match(value)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.role().label())
    }
}

/// Gregorian leap year test.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
