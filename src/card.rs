//! Core card types.
//!
//! This module provides the `CardType` enum for identifying card networks
//! and the per-brand input length policy.

use std::fmt;

/// Default maximum digit count for brands without a specific cap.
///
/// 19 is the general ISO/IEC 7812 upper limit and covers Discover, JCB,
/// Maestro and unrecognized prefixes.
pub const DEFAULT_MAX_LENGTH: usize = 19;

/// Supported card brands/networks.
///
/// Each variant represents a payment network detected from the leading
/// digits of a card number. `Unknown` is a first-class value, not an error:
/// every input classifies to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CardType {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55, 22-27
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 65
    Discover,
    /// Diners Club - Prefix 300-305, 36, 38
    #[cfg_attr(feature = "serde", serde(rename = "dinersclub"))]
    DinersClub,
    /// JCB - Prefix 35
    Jcb,
    /// Maestro - Prefix 50, 56-58, remaining 6x
    Maestro,
    /// No recognized prefix.
    Unknown,
}

impl CardType {
    /// Returns the maximum number of digits to accept for this brand.
    ///
    /// This is an input cap for card-entry fields, not a validity check:
    /// a UI stops accepting keystrokes once the digit count reaches it.
    /// Brands without an explicit entry fall through to
    /// [`DEFAULT_MAX_LENGTH`].
    ///
    /// # Example
    ///
    /// ```
    /// use card_input::CardType;
    ///
    /// assert_eq!(CardType::Amex.max_length(), 15);
    /// assert_eq!(CardType::Visa.max_length(), 16);
    /// assert_eq!(CardType::Unknown.max_length(), 19);
    /// ```
    #[inline]
    pub const fn max_length(&self) -> usize {
        match self {
            Self::Amex => 15,
            Self::Mastercard => 16,
            // 13- and 19-digit Visa exist, but 16 is the entry cap
            Self::Visa => 16,
            // International Diners (36, 38) runs 14-19; 16 is the common cap
            Self::DinersClub => 16,
            // Discover, JCB, Maestro and unknown prefixes go up to 19
            _ => DEFAULT_MAX_LENGTH,
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Maestro => "Maestro",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the lowercase wire name used by UI layers to key logo and
    /// styling tables (`"visa"`, `"dinersclub"`, ...).
    #[inline]
    pub const fn name_lower(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::DinersClub => "dinersclub",
            Self::Jcb => "jcb",
            Self::Maestro => "maestro",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if this is a recognized brand (anything but `Unknown`).
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [CardType; 8] = [
        CardType::Visa,
        CardType::Mastercard,
        CardType::Amex,
        CardType::Discover,
        CardType::DinersClub,
        CardType::Jcb,
        CardType::Maestro,
        CardType::Unknown,
    ];

    #[test]
    fn test_max_length_table() {
        assert_eq!(CardType::Amex.max_length(), 15);
        assert_eq!(CardType::Mastercard.max_length(), 16);
        assert_eq!(CardType::Visa.max_length(), 16);
        assert_eq!(CardType::DinersClub.max_length(), 16);
        assert_eq!(CardType::Discover.max_length(), 19);
        assert_eq!(CardType::Jcb.max_length(), 19);
        assert_eq!(CardType::Maestro.max_length(), 19);
        assert_eq!(CardType::Unknown.max_length(), 19);
    }

    #[test]
    fn test_max_length_is_positive() {
        for card_type in ALL_TYPES {
            assert!(card_type.max_length() >= 15);
            assert!(card_type.max_length() <= DEFAULT_MAX_LENGTH);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(CardType::Amex.name(), "American Express");
        assert_eq!(CardType::DinersClub.name(), "Diners Club");
        assert_eq!(CardType::Visa.to_string(), "Visa");
    }

    #[test]
    fn test_lowercase_names_are_unique() {
        for (i, a) in ALL_TYPES.iter().enumerate() {
            for b in &ALL_TYPES[i + 1..] {
                assert_ne!(a.name_lower(), b.name_lower());
            }
        }
    }

    #[test]
    fn test_is_known() {
        assert!(CardType::Visa.is_known());
        assert!(CardType::Maestro.is_known());
        assert!(!CardType::Unknown.is_known());
    }
}
