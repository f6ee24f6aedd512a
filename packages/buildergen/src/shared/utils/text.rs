//! Identifier casing utilities
//!
//! The casing rules here are pinned and locale-independent so that generated
//! output is byte-identical across environments.

/// Convert a string to title case.
///
/// A word is a maximal run of alphabetic characters. The first character of
/// each word is uppercased, the remaining characters lowercased.
/// Non-alphabetic characters pass through unchanged and delimit words.
///
/// For a single-word lower-case identifier this capitalizes exactly the
/// first letter: `"name"` → `"Name"`.
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
                in_word = true;
            }
        } else {
            in_word = false;
            out.push(ch);
        }
    }

    out
}
