//! Canonical data string construction.
//!
//! The provider recomputes the signature over the same string, so every
//! detail here is part of the wire contract: ordinal key order, the two
//! escape passes, and names-then-values layout.

use std::borrow::Cow;
use std::collections::HashMap;

/// Unordered mapping of notification field names to values.
pub type FieldSet = HashMap<String, String>;

/// Separator placed between tokens of the canonical string.
pub const DELIMITER: char = ':';

const ESCAPE: char = '\\';

/// Field names that carry signatures and never sign themselves.
const SIGNATURE_FIELDS: &[&str] = &["sig", "merchantSig"];

/// Prefix marking fields the provider leaves out of the signed payload.
const IGNORED_PREFIX: &str = "ignore.";

/// Whether a field is left out of the canonical string.
pub fn is_excluded(name: &str) -> bool {
    SIGNATURE_FIELDS.contains(&name) || name.starts_with(IGNORED_PREFIX)
}

/// Escape a single token.
///
/// Backslashes are doubled first, then each delimiter gets a backslash in
/// front of it. Reversing the order would escape the inserted backslashes.
pub fn escape(token: &str) -> Cow<'_, str> {
    if !token.contains([ESCAPE, DELIMITER]) {
        return Cow::Borrowed(token);
    }

    let mut escaped = String::with_capacity(token.len() + 4);
    for ch in token.chars() {
        match ch {
            ESCAPE => escaped.push_str("\\\\"),
            DELIMITER => escaped.push_str("\\:"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Build the canonical data string for a set of fields.
///
/// Excluded fields are dropped, the rest are sorted by name in ordinal
/// order, and the escaped names followed by the escaped values (same order)
/// are joined with [`DELIMITER`]. An empty set yields an empty string.
///
/// ```rust
/// use paysig_crypto::canonicalize;
///
/// let data = canonicalize([("b", "2"), ("a", "1"), ("merchantSig", "x")]);
/// assert_eq!(data, "a:b:1:2");
/// ```
pub fn canonicalize<I, K, V>(fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut entries: Vec<(K, V)> = fields
        .into_iter()
        .filter(|(name, _)| !is_excluded(name.as_ref()))
        .collect();

    // str's Ord is byte order, which for UTF-8 is code point order.
    entries.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let names = entries.iter().map(|(name, _)| escape(name.as_ref()));
    let values = entries.iter().map(|(_, value)| escape(value.as_ref()));

    let mut data = String::new();
    for (index, token) in names.chain(values).enumerate() {
        if index > 0 {
            data.push(DELIMITER);
        }
        data.push_str(&token);
    }
    data
}
