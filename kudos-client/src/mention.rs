use crate::api::User;

/// In-progress mention detected around the caret. Derived from the raw text
/// on every keystroke, never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MentionSpan {
    /// Text between the `@` and the caret
    pub query: String,
    /// Byte offset of the `@`
    pub start: usize,
    /// Byte offset of the caret
    pub end: usize,
}

/// Looks backward from the caret for an in-progress mention: an `@` preceded
/// by whitespace (or the start of the text), with no other `@` and no line
/// break between it and the caret.
///
/// A caret that is out of range or inside a multi-byte character is moved
/// back to the previous char boundary.
pub fn detect(text: &str, caret: usize) -> Option<MentionSpan> {
    let mut caret = caret.min(text.len());
    while !text.is_char_boundary(caret) {
        caret -= 1;
    }
    let before = &text[..caret];
    let start = before.rfind('@')?;
    if !before[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
    {
        return None;
    }
    let query = &before[start + 1..caret];
    if query.contains('\n') || query.contains('\r') {
        return None;
    }
    Some(MentionSpan {
        query: query.to_string(),
        start,
        end: caret,
    })
}

/// Filters the roster by a query fragment, preserving roster order.
///
/// An empty (or whitespace-only) query matches everyone. Otherwise a user
/// matches when their display name or email contains the query,
/// case-insensitively. No ranking beyond that.
pub fn candidates(query: &str, roster: &[User]) -> Vec<User> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return roster.to_vec();
    }
    roster
        .iter()
        .filter(|u| {
            u.full_name.to_lowercase().contains(&query) || u.email.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Splices the chosen display name over the detected span, with a trailing
/// space so the mention is terminated and `detect` goes inactive right after.
///
/// A stale span (offsets that no longer fit the text) leaves the text
/// unchanged.
pub fn insert(text: &str, span: &MentionSpan, full_name: &str) -> String {
    if span.start > span.end
        || span.end > text.len()
        || !text.is_char_boundary(span.start)
        || !text.is_char_boundary(span.end)
    {
        return text.to_string();
    }
    format!("{}@{} {}", &text[..span.start], full_name, &text[span.end..])
}
