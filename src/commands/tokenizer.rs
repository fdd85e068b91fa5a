//! Token splitting for command names and process arguments.
//!
//! Splitting is deliberately naive: no quoting, no trimming, no collapsing of
//! repeated delimiters. Process arguments arrive pre-split by the OS, so they
//! are only sliced, never re-split.

/// Delimiter separating alias words in a command name.
pub const ALIAS_DELIMITER: char = ' ';

/// Splits `s` on every occurrence of `delimiter`.
///
/// Empty segments between consecutive delimiters are kept. A trailing
/// delimiter ends the last segment without starting a new one, so an empty
/// input yields no segments at all:
///
/// - `"a b"` → `["a", "b"]`
/// - `"a  b"` → `["a", "", "b"]`
/// - `"a b "` → `["a", "b"]`
/// - `""` → `[]`
pub fn split(s: &str, delimiter: char) -> Vec<String> {
    let mut parts: Vec<String> = s.split(delimiter).map(str::to_string).collect();
    if parts.last().is_some_and(|last| last.is_empty()) {
        parts.pop();
    }
    parts
}

/// Returns the alias words of a declared command name.
pub fn aliases(name: &str) -> Vec<String> {
    split(name, ALIAS_DELIMITER)
}

/// Returns true if `name` contains at least one non-empty alias word.
///
/// Usable in const context so declarations can be rejected at compile time.
pub const fn has_alias(name: &str) -> bool {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b' ' {
            return true;
        }
        i += 1;
    }
    false
}

/// Converts a process argument vector into a token sequence.
///
/// The first element (the program path) is dropped; everything after it is
/// kept in order, unmodified.
pub fn args_to_tokens<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter().skip(1).map(Into::into).collect()
}
