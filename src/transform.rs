use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first char and lowercase the rest.
///
/// ```
/// assert_eq!(strkit::capitalize("hELLO"), "Hello");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// Uppercase the first char, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first char, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Surround `s` with `token` on both sides. Empty `s` or `token` returns `s`.
pub fn wrap(s: &str, token: &str) -> String {
    if s.is_empty() || token.is_empty() {
        return s.to_string();
    }

    let mut wrapped = String::with_capacity(s.len() + token.len() * 2);
    wrapped.push_str(token);
    wrapped.push_str(s);
    wrapped.push_str(token);
    wrapped
}

/// Remove one leading and one trailing `token`.
///
/// Both must be present and must not overlap; otherwise `s` is returned as is.
pub fn unwrap<'a>(s: &'a str, token: &str) -> &'a str {
    if token.is_empty() || s.len() < token.len() * 2 {
        return s;
    }

    s.strip_prefix(token)
        .and_then(|inner| inner.strip_suffix(token))
        .unwrap_or(s)
}

/// Reverse the order of chars (code points).
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Reverse the order of extended grapheme clusters, keeping combining
/// sequences and emoji ZWJ sequences intact.
pub fn reverse_graphemes(s: &str) -> String {
    s.graphemes(true).rev().collect()
}
