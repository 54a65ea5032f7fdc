/// One piece of a rendered comment or shout-out body
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// Verbatim text, exactly as it appeared
    Plain(String),
    /// A recognized `@name` token; carries the display name without the `@`
    Mention(String),
}

/// Splits a block of text into plain and mention segments.
///
/// A mention is `@` followed by an exact known display name, with end-of-text
/// or a non-alphanumeric character right after it, so `"@Bob."` highlights
/// `"@Bob"` but `"@Bobby"` does not match a roster entry `"Bob"`. Names are
/// compared as literal strings; nothing in them is pattern syntax. Scanning
/// is left to right and non-overlapping, and when several names match at the
/// same `@` the longest one wins. Concatenating the segments (with `@` put
/// back in front of mentions) always reproduces the input exactly.
pub fn split_mentions(text: &str, names: &[String]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while let Some(off) = text[pos..].find('@') {
        let at = pos + off;
        let after = &text[at + 1..];
        let matched = names
            .iter()
            .filter(|name| !name.is_empty() && after.starts_with(name.as_str()))
            .filter(|name| ends_at_boundary(after, name.len()))
            .max_by_key(|name| name.len());
        match matched {
            Some(name) => {
                if plain_start < at {
                    segments.push(Segment::Plain(text[plain_start..at].to_string()));
                }
                segments.push(Segment::Mention(name.clone()));
                pos = at + 1 + name.len();
                plain_start = pos;
            }
            None => pos = at + 1,
        }
    }
    if plain_start < text.len() {
        segments.push(Segment::Plain(text[plain_start..].to_string()));
    }
    if segments.is_empty() {
        segments.push(Segment::Plain(text.to_string()));
    }
    segments
}

fn ends_at_boundary(after: &str, len: usize) -> bool {
    match after[len..].chars().next() {
        None => true,
        Some(c) => !c.is_alphanumeric(),
    }
}
