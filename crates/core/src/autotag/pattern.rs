//! Builds the path-matching regex for an entity name.
//!
//! Names in file paths show up with arbitrary separators between words
//! ("performer name", "performer.name", "performer_name", …), so each
//! whitespace-separated token is matched literally and joined with a
//! separator class. Boundary assertions on both sides stop partial-word
//! matches ("name" must not match inside "surname").

/// Matches any run of the characters users put between name tokens.
const SEPARATOR: &str = r"[.\-_ ]*";

/// Start of string, an underscore, or anything that is not a Unicode
/// letter or digit.
const BOUNDARY_LEFT: &str = r"(?:^|_|[^\p{L}\d])";
const BOUNDARY_RIGHT: &str = r"(?:$|_|[^\p{L}\d])";

/// Derive a case-insensitive path regex from a display name. Pure; always
/// returns a syntactically valid pattern, even for an empty name.
pub fn path_regex(name: &str) -> String {
    // On platforms where the native path separator is a backslash, a
    // trailing backslash is a path delimiter rather than part of the
    // name. Elsewhere it is kept as a required literal.
    let name = if std::path::MAIN_SEPARATOR == '\\' {
        name.trim_end_matches('\\')
    } else {
        name
    };

    let body = name
        .split_whitespace()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    format!("(?i){BOUNDARY_LEFT}{body}{BOUNDARY_RIGHT}")
}
