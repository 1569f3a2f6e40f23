use std::ops::Range;

/// A word split around the first case-insensitive occurrence of the query.
///
/// `matched` is empty when the query does not occur, in which case the whole
/// word sits in `before` and renders unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub before: String,
    pub matched: String,
    pub after: String,
}

impl Highlight {
    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }

    /// Concatenated text, identical to the original word.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before, self.matched, self.after)
    }
}

/// Split `word` around the first case-insensitive occurrence of `query`.
pub fn highlight_match(word: &str, query: &str) -> Highlight {
    match find_case_insensitive(word, query) {
        Some(span) => Highlight {
            before: word[..span.start].to_owned(),
            matched: word[span.clone()].to_owned(),
            after: word[span.end..].to_owned(),
        },
        None => Highlight {
            before: word.to_owned(),
            ..Default::default()
        },
    }
}

/// Byte range of the first span of `haystack` whose lowercase form starts
/// with the lowercase `needle`, ending at the char that completes it. Spans
/// start and end on char boundaries of `haystack`; a char whose lowercase
/// form is longer than one char (e.g. `İ`) is covered whole even when the
/// needle only matches its first part.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for (start, _) in haystack.char_indices() {
        let mut lowered = String::new();
        for (offset, ch) in haystack[start..].char_indices() {
            lowered.extend(ch.to_lowercase());
            if lowered.starts_with(&needle) {
                return Some(start..start + offset + ch.len_utf8());
            }
            if !needle.starts_with(&lowered) {
                break;
            }
        }
    }
    None
}
