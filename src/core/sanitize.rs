// src/core/sanitize.rs
// Char-level text passes. Each one is total: any &str in, a String out.

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Replace every `<…>` span with a space. A span never crosses a line break;
/// a `<` with no `>` later on its line is kept as-is.
pub fn strip_tag_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let line_end = after.find('\n').unwrap_or(after.len());
        match after[..line_end].find('>') {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push(' ');
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Replace `http…` / `www…` tokens with a space. The prefix may sit anywhere,
/// even mid-word, and must be followed by at least one non-whitespace char;
/// the match runs to the next whitespace.
pub fn strip_url_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut i = 0usize;
    while i < s.len() {
        let tail = &s[i..];
        let prefix = if tail.starts_with("http") { 4 } else if tail.starts_with("www") { 3 } else { 0 };
        if prefix > 0 {
            let after = &tail[prefix..];
            let token_len = after.find(char::is_whitespace).unwrap_or(after.len());
            if token_len > 0 {
                out.push(' ');
                i += prefix + token_len;
                continue;
            }
        }
        // Safe: i is always on a char boundary
        let ch = tail.chars().next().unwrap_or_default();
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

/// Drop ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub fn strip_ascii_punct(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Keep only ASCII digits, ',' and '.'.
pub fn numeric_chars(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.').collect()
}
