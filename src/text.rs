//! String helpers served by `/reverse/{str}`.

/// Reverses `input` by Unicode scalar value.
///
/// ```
/// assert_eq!(notes_api::reverse_string("hello"), "olleh");
/// ```
pub fn reverse_string(input: &str) -> String {
    input.chars().rev().collect()
}
