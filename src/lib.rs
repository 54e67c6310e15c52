//! # card_input
//!
//! Card-entry normalization library for Rust: real-time brand detection and
//! input sanitization for payment card number and expiry fields.
//!
//! ## Features
//!
//! - Card brand detection from numeric prefixes (7 brands + unknown)
//! - Per-brand maximum input length
//! - Display formatting in groups of four digits
//! - Expiry date repair: partial or malformed `MM/YY` input is normalized,
//!   never rejected
//!
//! Every operation is a total, pure function: empty input, stray
//! separators and out-of-range months all produce a best-effort canonical
//! value instead of an error. Validation proper (Luhn, full IIN lookup) is
//! deliberately out of scope - this crate sits under an input field, not a
//! payment processor.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input::{card_type, format_card_number, CardType};
//! use card_input::expiry::format_expiry_date_with_year;
//!
//! // Classify on every keystroke of the number field
//! let brand = card_type("4111-1111-1111-1111");
//! assert_eq!(brand, CardType::Visa);
//!
//! // Cap further input by brand
//! assert_eq!(brand.max_length(), 16);
//!
//! // Render with visual spacing
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//!
//! // Repair the expiry field (current year injected as 26 here)
//! assert_eq!(format_expiry_date_with_year("130", 26), "01/30");
//! assert_eq!(format_expiry_date_with_year("8888", 26), "12/26");
//! ```
//!
//! ## Supported Card Brands
//!
//! | Brand | Prefix | Max input length |
//! |-------|--------|------------------|
//! | Visa | 4 | 16 |
//! | Mastercard | 51-55, 22-27 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Discover | 6011, 65 | 19 |
//! | Diners Club | 300-305, 36, 38 | 16 |
//! | JCB | 35 | 19 |
//! | Maestro | 50, 56-58, other 6x | 19 |
//! | Unknown | anything else | 19 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for `CardType` (lowercase wire names) |
//! | `wasm` | WebAssembly bindings for browser input fields |
//!
//! ## Concurrency
//!
//! All functions are synchronous and stateless; the only shared data is the
//! static, read-only prefix-rule table. Call from any thread without
//! coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod expiry;
pub mod format;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types and functions at crate root
pub use card::{CardType, DEFAULT_MAX_LENGTH};
pub use detect::card_type;
pub use expiry::format_expiry_date;
pub use format::{format_card_number, strip_formatting};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA: &str = "4111111111111111";
    const MASTERCARD: &str = "5500000000000004";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3530111333300000";
    const MAESTRO: &str = "5018000000000009";

    #[test]
    fn test_classification() {
        assert_eq!(card_type(VISA), CardType::Visa);
        assert_eq!(card_type(MASTERCARD), CardType::Mastercard);
        assert_eq!(card_type(AMEX), CardType::Amex);
        assert_eq!(card_type(DISCOVER), CardType::Discover);
        assert_eq!(card_type(DINERS), CardType::DinersClub);
        assert_eq!(card_type(JCB), CardType::Jcb);
        assert_eq!(card_type(MAESTRO), CardType::Maestro);
        assert_eq!(card_type("0000"), CardType::Unknown);
    }

    #[test]
    fn test_classify_then_cap() {
        assert_eq!(card_type(AMEX).max_length(), 15);
        assert_eq!(card_type(VISA).max_length(), 16);
        assert_eq!(card_type("garbage").max_length(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_card_number(VISA), "4111 1111 1111 1111");
        assert_eq!(strip_formatting("4111 1111 1111 1111"), VISA);
    }

    #[test]
    fn test_expiry_shape() {
        // Clock-dependent, but the shape invariants always hold
        for input in ["", "1", "7", "12", "99", "123", "1230", "12/30", "999999"] {
            let out = format_expiry_date(input);
            match out.len() {
                0 | 1 | 2 => assert!(out.chars().all(|c| c.is_ascii_digit())),
                5 => {
                    let month: u8 = out[0..2].parse().unwrap();
                    assert!((1..=12).contains(&month));
                    assert_eq!(&out[2..3], "/");
                    assert!(out[3..5].chars().all(|c| c.is_ascii_digit()));
                }
                n => panic!("unexpected output length {} for {:?}: {:?}", n, input, out),
            }
        }
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardType>();
    }
}
