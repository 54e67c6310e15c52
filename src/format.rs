//! Card number display formatting.
//!
//! Formatting is purely cosmetic: digits are grouped in fours regardless of
//! brand, matching how card-entry fields render the number as the user
//! types. Stripping the separators back out always recovers the exact digit
//! string, so formatting loses nothing.
//!
//! # Example
//!
//! ```
//! use card_input::format::{format_card_number, strip_formatting};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_card_number("41111"), "4111 1");
//! assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
//! ```

/// Formats a card number into space-separated groups of four digits.
///
/// Non-digit characters are stripped first, so already-formatted or
/// dash-separated input reformats cleanly. The final group may be shorter
/// than four. Input with no digits yields an empty string.
///
/// # Example
///
/// ```
/// use card_input::format::format_card_number;
///
/// assert_eq!(format_card_number("1234567812345678"), "1234 5678 1234 5678");
/// assert_eq!(format_card_number("1234-5678-1234"), "1234 5678 1234");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(raw_number: &str) -> String {
    let digits: Vec<char> = raw_number.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(*c);
    }
    result
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use card_input::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// assert_eq!(strip_formatting("abc1234def5678"), "12345678");
/// ```
pub fn strip_formatting(raw_number: &str) -> String {
    raw_number.chars().filter(|c| c.is_ascii_digit()).collect()
}
