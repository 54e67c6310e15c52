//! WebAssembly bindings for card-entry UIs.
//!
//! Thin string-in/string-out wrappers so browser input fields can call the
//! normalization core directly.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { detect_card_type, card_max_length, format_number, format_expiry } from 'card_input';
//!
//! await init();
//!
//! numberField.addEventListener('input', () => {
//!   const brand = detect_card_type(numberField.value);   // "visa", "unknown", ...
//!   numberField.maxLength = card_max_length(numberField.value);
//!   numberField.value = format_number(numberField.value);
//!   logo.src = logos[brand];
//! });
//!
//! expiryField.addEventListener('blur', () => {
//!   expiryField.value = format_expiry(expiryField.value);
//! });
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{card_type, expiry, format};

/// Detects the card brand, returned as its lowercase wire name
/// (`"visa"`, `"mastercard"`, ..., `"unknown"`).
#[wasm_bindgen]
pub fn detect_card_type(raw_number: &str) -> String {
    card_type(raw_number).name_lower().to_string()
}

/// Returns the maximum digit count to accept for the given raw number,
/// based on its detected brand.
#[wasm_bindgen]
pub fn card_max_length(raw_number: &str) -> usize {
    card_type(raw_number).max_length()
}

/// Formats a card number into space-separated groups of four digits.
#[wasm_bindgen]
pub fn format_number(raw_number: &str) -> String {
    format::format_card_number(raw_number)
}

/// Normalizes an expiry string into `MM/YY` (or a valid partial form).
#[wasm_bindgen]
pub fn format_expiry(raw_date: &str) -> String {
    expiry::format_expiry_date(raw_date)
}
