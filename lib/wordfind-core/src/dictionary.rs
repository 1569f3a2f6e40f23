use std::collections::HashMap;

/// Immutable word → definition table.
///
/// Keys are unique by construction. Lookups are exact (case-sensitive); only
/// prefix filtering ignores case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Definition for `word`. The empty word, an absent word and a word whose
    /// definition is empty are all misses.
    pub fn get(&self, word: &str) -> Option<&str> {
        if word.is_empty() {
            return None;
        }
        self.entries
            .get(word)
            .map(String::as_str)
            .filter(|definition| !definition.is_empty())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Dictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
