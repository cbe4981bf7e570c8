//! String helpers for log and console previews.

/// Single-line preview of `s`, at most `max_len` bytes plus an ellipsis.
///
/// Newlines are folded into spaces so a multi-line prompt stays on one log
/// line. Truncation never splits a UTF-8 character.
pub fn preview(s: &str, max_len: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len;
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}
