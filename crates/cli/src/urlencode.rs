//! `application/x-www-form-urlencoded` encoding.
//!
//! Base64 signatures contain `+`, `/` and `=`, which must be escaped before
//! they go into a redirect URL or form body.

use url::form_urlencoded;

/// Encode text for a form value.
///
/// ASCII letters, digits and `.-*_` pass through, space becomes `+`, and
/// every other byte of the UTF-8 encoding becomes `%XX` with uppercase hex.
pub fn form_urlencode(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes()).collect()
}
