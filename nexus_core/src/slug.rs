//! Page-name to URL-path normalization.
//!
//! Every link on the site is produced from a human-readable page name
//! ("Medical", "AI Solutions") rather than a hand-written path, so the
//! header, the industries grid and the route table can never drift apart.

/// Path returned for the home page and for empty input.
pub const ROOT_PATH: &str = "/";

/// Convert a page name into its canonical, slash-prefixed path.
///
/// - `None` or `""` → `"/"`
/// - `"Home"` (any case, surrounding whitespace ignored) → `"/"`
/// - otherwise trimmed, lower-cased, whitespace runs collapsed to `-`
///
/// "Whitespace" is the ECMAScript set (`String.prototype.trim`, `\s`):
/// Unicode `White_Space` plus U+FEFF, minus U+0085. Page names authored for
/// the browser therefore produce the same paths here.
///
/// ```
/// use nexus_core::slug::normalize;
///
/// assert_eq!(normalize("AI Solutions"), "/ai-solutions");
/// assert_eq!(normalize(" HOME "), "/");
/// assert_eq!(normalize(None::<&str>), "/");
/// ```
pub fn normalize<'a>(title: impl Into<Option<&'a str>>) -> String {
    let title = match title.into() {
        Some(t) if !t.is_empty() => t,
        _ => return ROOT_PATH.to_string(),
    };

    let lowered = title.trim_matches(is_ecma_whitespace).to_lowercase();
    if lowered == "home" {
        return ROOT_PATH.to_string();
    }

    let mut path = String::with_capacity(lowered.len() + 1);
    path.push('/');
    let mut in_whitespace = false;
    for ch in lowered.chars() {
        if is_ecma_whitespace(ch) {
            if !in_whitespace {
                path.push('-');
            }
            in_whitespace = true;
        } else {
            path.push(ch);
            in_whitespace = false;
        }
    }
    path
}

fn is_ecma_whitespace(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        other => other.is_whitespace(),
    }
}
