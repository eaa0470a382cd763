//! SQL identifier handling.
//!
//! Table, database and trigger-target names are compared without regard to
//! case everywhere in Sluice.

/// Lower-case an identifier for comparison or map keys.
pub fn normalize(ident: &str) -> String {
    ident.to_lowercase()
}

/// Compare two identifiers case-insensitively.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    normalize(a) == normalize(b)
}
