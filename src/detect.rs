//! Card brand detection from leading digits.
//!
//! Classification walks a fixed table of prefix rules, each pairing a brand
//! with one or more anchored patterns. The first rule whose pattern matches
//! the start of the cleaned digit string wins, so table order is part of the
//! contract, not an implementation detail.
//!
//! # Performance
//!
//! The table is compiled once on first use; a classification is a bounded
//! walk over a handful of anchored regexes, effectively O(1).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::CardType;

/// A brand paired with its anchored prefix patterns, in priority order.
struct PrefixRule {
    card_type: CardType,
    patterns: Vec<Regex>,
}

/// Ordered rule table. Order resolves every prefix overlap:
///
/// - Mastercard's `^5[1-5]` must be tried before Maestro's `^5[0678]`
///   (disjoint today, but the pairing documents the priority).
/// - Discover (`6011`, `65`) must be tried before Maestro's `^6` catch-all.
///   The upstream pattern encoded this as a lookahead (`6(?!011|5)`); the
///   `regex` crate has no lookaround, so the exclusion lives in the order.
/// - Visa's single-digit `^4` is first: nothing else claims a 4 prefix.
static PREFIX_RULES: Lazy<Vec<PrefixRule>> = Lazy::new(|| {
    const TABLE: &[(CardType, &[&str])] = &[
        (CardType::Visa, &[r"^4"]),
        (CardType::Mastercard, &[r"^5[1-5]", r"^2[2-7]"]),
        (CardType::Discover, &[r"^6(?:011|5)"]),
        (CardType::Amex, &[r"^3[47]"]),
        (CardType::DinersClub, &[r"^3(?:0[0-5]|[68])"]),
        (CardType::Jcb, &[r"^35"]),
        (CardType::Maestro, &[r"^5[0678]", r"^6"]),
    ];

    TABLE
        .iter()
        .map(|&(card_type, patterns)| PrefixRule {
            card_type,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("prefix pattern must compile"))
                .collect(),
        })
        .collect()
});

/// Detects the card brand from a raw number string.
///
/// Non-digit characters (spaces, dashes, anything the user typed) are
/// stripped before matching, so partially formatted input classifies the
/// same as bare digits. Returns [`CardType::Unknown`] when no rule matches,
/// including for empty input - this function never fails.
///
/// # Example
///
/// ```
/// use card_input::{card_type, CardType};
///
/// assert_eq!(card_type("4111 1111 1111 1111"), CardType::Visa);
/// assert_eq!(card_type("37"), CardType::Amex);
/// assert_eq!(card_type(""), CardType::Unknown);
/// ```
#[inline]
pub fn card_type(raw_number: &str) -> CardType {
    let cleaned: String = raw_number.chars().filter(|c| c.is_ascii_digit()).collect();

    for rule in PREFIX_RULES.iter() {
        if rule.patterns.iter().any(|p| p.is_match(&cleaned)) {
            return rule.card_type;
        }
    }
    CardType::Unknown
}
