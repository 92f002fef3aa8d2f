//! Identifier derivation from display names
//!
//! Catalog entries are addressed by a camel-case key built from the `Name`
//! column, e.g. `"Copper (Type B)"` becomes `"copperTypeB"`.

/// Characters removed without starting a new word (`Barrie's` -> `barries`)
const ELIDED: &[char] = &['\'', '\u{2019}'];

/// Derive a camel-case identifier from a display name
///
/// Letters that begin a word are uppercased, except when they would be the
/// first character of the identifier. A word begins at the start of the name
/// and after any digit, space, or punctuation mark. Digits are kept verbatim;
/// everything else is dropped. Apostrophes are dropped without breaking the
/// word. The result is a pure function of `name` and may be empty.
pub fn derive_identifier(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len());
    let mut word_start = true;

    for ch in name.to_lowercase().chars() {
        if ch.is_alphabetic() {
            if word_start && !identifier.is_empty() {
                identifier.extend(ch.to_uppercase());
            } else {
                identifier.push(ch);
            }
            word_start = false;
        } else if ch.is_numeric() {
            identifier.push(ch);
            word_start = true;
        } else if !ELIDED.contains(&ch) {
            word_start = true;
        }
    }

    identifier
}
