//! String manipulation helpers
//!
//! Pattern based splitting and joining, ASCII case folding, trimming and a
//! handful of small numeric helpers. Every function here is total: invalid or
//! absent inputs fall back to a defined result instead of failing.

/// Split `text` on every literal occurrence of `pattern`.
///
/// Matching is exact, left to right and non-overlapping. Empty fields are
/// kept, so a leading separator yields a leading `""` and a trailing separator
/// yields a trailing `""`. An absent or empty pattern returns `[text]`.
///
/// ```
/// use rassist::core::strings::split;
///
/// assert_eq!(split("Aa.Bb.Cc", Some(".")), vec!["Aa", "Bb", "Cc"]);
/// assert_eq!(split(".Aa.Bb", Some(".")), vec!["", "Aa", "Bb"]);
/// assert_eq!(split("Aa.Bb", None), vec!["Aa.Bb"]);
/// ```
pub fn split(text: &str, pattern: Option<&str>) -> Vec<String> {
    match pattern {
        Some(pattern) if !pattern.is_empty() => text.split(pattern).map(str::to_string).collect(),
        _ => vec![text.to_string()],
    }
}

/// Split `text` on a single character.
pub fn split_char(text: &str, separator: char) -> Vec<String> {
    let mut buffer = [0u8; 4];
    split(text, Some(&*separator.encode_utf8(&mut buffer)))
}

/// Join `fields` with `separator` between consecutive elements.
///
/// Empty fields are not skipped. An absent separator concatenates the fields.
pub fn join<S: AsRef<str>>(fields: &[S], separator: Option<&str>) -> String {
    let separator = separator.unwrap_or("");
    let mut output = String::new();
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            output.push_str(separator);
        }
        output.push_str(field.as_ref());
    }
    output
}

pub fn uppercase(value: &str) -> String {
    value.to_ascii_uppercase()
}

pub fn lowercase(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Uppercase the first character only (ASCII semantics).
pub fn capitalize_first_character(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut output = String::with_capacity(value.len());
            output.push(first.to_ascii_uppercase());
            output.push_str(chars.as_str());
            output
        }
        None => String::new(),
    }
}

pub fn trim(value: &str) -> String {
    trim_char(value, ' ')
}

pub fn trim_left(value: &str) -> String {
    trim_left_char(value, ' ')
}

pub fn trim_right(value: &str) -> String {
    trim_right_char(value, ' ')
}

/// Remove every leading and trailing `c`. A NUL character trims nothing.
pub fn trim_char(value: &str, c: char) -> String {
    if c == '\0' {
        return value.to_string();
    }
    value.trim_matches(c).to_string()
}

pub fn trim_left_char(value: &str, c: char) -> String {
    if c == '\0' {
        return value.to_string();
    }
    value.trim_start_matches(c).to_string()
}

pub fn trim_right_char(value: &str, c: char) -> String {
    if c == '\0' {
        return value.to_string();
    }
    value.trim_end_matches(c).to_string()
}

pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Returns true if `value` only contains digits, at most one dot and an
/// optional sign as its first character.
pub fn is_numeric(value: &str) -> bool {
    let mut found_dot = false;
    for (offset, c) in value.char_indices() {
        match c {
            '0'..='9' => {}
            '.' if !found_dot => found_dot = true,
            '+' | '-' if offset == 0 => {}
            _ => return false,
        }
    }
    true
}

/// Replace every occurrence of `old` in `text` by `new`, in place.
///
/// Returns the number of replacements. Scanning resumes after the inserted
/// text so a replacement is never matched again.
pub fn replace_all(text: &mut String, old: &str, new: &str) -> usize {
    if old.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(position) = text[start..].find(old) {
        let at = start + position;
        text.replace_range(at..at + old.len(), new);
        start = at + new.len();
        count += 1;
    }
    count
}

/// Strip a single trailing end-of-line sequence (Windows, Unix or old Mac).
pub fn remove_eol(text: &mut String) {
    for eol in ["\r\n", "\n\r", "\n", "\r"] {
        if text.ends_with(eol) {
            text.truncate(text.len() - eol.len());
            return;
        }
    }
}

pub fn to_string(value: u64) -> String {
    value.to_string()
}

pub fn parse_value(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

/// Format a float the way printf's `%W.Pf` does: right aligned in at least
/// `width` columns with `precision` decimals.
pub fn format_float(value: f64, width: usize, precision: usize) -> String {
    format!("{:>width$.precision$}", value, width = width, precision = precision)
}
