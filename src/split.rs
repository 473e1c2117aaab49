// Delimiter-based splitting and substring extraction.
//
// Delimiters are matched as whole strings with `str::find`/`str::rfind`, so
// every offset used for slicing lies on a char boundary.

/// Split `s` on every occurrence of `sep`.
///
/// With `remove_empty` set, empty segments (including an empty final
/// remainder) are dropped. An empty `sep` has no split points and yields an
/// empty vector.
///
/// ```
/// assert_eq!(strkit::split_ex("a,,b,", ",", false), vec!["a", "", "b", ""]);
/// assert_eq!(strkit::split_ex("a,,b,", ",", true), vec!["a", "b"]);
/// ```
pub fn split_ex<'a>(s: &'a str, sep: &str, remove_empty: bool) -> Vec<&'a str> {
    if sep.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut rest = s;

    while let Some(idx) = rest.find(sep) {
        let segment = &rest[..idx];
        if !(remove_empty && segment.is_empty()) {
            segments.push(segment);
        }
        rest = &rest[idx + sep.len()..];
    }

    if !(remove_empty && rest.is_empty()) {
        segments.push(rest);
    }

    log::trace!("split {:?} on {:?} into {} segments", s, sep, segments.len());
    segments
}

/// Text before the first occurrence of `delim`.
///
/// Returns `s` unchanged when `s` or `delim` is empty or `delim` is absent.
pub fn before<'a>(s: &'a str, delim: &str) -> &'a str {
    if s.is_empty() || delim.is_empty() {
        return s;
    }
    s.find(delim).map_or(s, |idx| &s[..idx])
}

/// Text before the last occurrence of `delim`.
pub fn before_last<'a>(s: &'a str, delim: &str) -> &'a str {
    if s.is_empty() || delim.is_empty() {
        return s;
    }
    s.rfind(delim).map_or(s, |idx| &s[..idx])
}

/// Text after the first occurrence of `delim`.
pub fn after<'a>(s: &'a str, delim: &str) -> &'a str {
    if s.is_empty() || delim.is_empty() {
        return s;
    }
    s.find(delim).map_or(s, |idx| &s[idx + delim.len()..])
}

/// Text after the last occurrence of `delim`.
pub fn after_last<'a>(s: &'a str, delim: &str) -> &'a str {
    if s.is_empty() || delim.is_empty() {
        return s;
    }
    s.rfind(delim).map_or(s, |idx| &s[idx + delim.len()..])
}
