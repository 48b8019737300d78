use std::collections::HashMap;

/// Flat string-to-string mapping extracted from a response body.
///
/// Keys keep the position of their first occurrence. Inserting a key that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, value: String) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for FlatMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, String)> for FlatMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = FlatMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Extract alternating quoted tokens from `body` as key/value pairs.
///
/// This is not a JSON parser. Every `"` toggles quoting, the first quoted token
/// becomes a key and the next one its value. Structure outside quotes is
/// ignored, so nested objects are flattened into whatever pairs the quote
/// sequence happens to form, and `\"` terminates a token. Use
/// [`RbxStatsClient::fetch_json`](crate::api::RbxStatsClient::fetch_json) for
/// real decoding.
pub fn parse_flat(body: &str) -> FlatMap {
    let mut result = FlatMap::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut in_quotes = false;
    let mut reading_value = false;

    for ch in body.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            // Closing quote. A token closed while the key is still empty is dropped.
            if !in_quotes && !key.is_empty() {
                if !reading_value {
                    reading_value = true;
                } else {
                    result.insert(std::mem::take(&mut key), std::mem::take(&mut value));
                    reading_value = false;
                }
            }
        } else if in_quotes {
            if reading_value {
                value.push(ch);
            } else {
                key.push(ch);
            }
        }
    }

    result
}
