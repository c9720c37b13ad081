use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Computed analysis of a stored string. Derived once at creation and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: CharFrequency,
}

/// Per-character occurrence counts over the original value, kept in
/// first-seen order so the serialized map reads in the order the characters
/// appear. Order is display-only; lookups do not depend on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharFrequency(Vec<(char, usize)>);

impl CharFrequency {
    fn tally(value: &str) -> Self {
        let mut counts: Vec<(char, usize)> = Vec::new();
        for c in value.chars() {
            match counts.iter_mut().find(|(seen, _)| *seen == c) {
                Some((_, count)) => *count += 1,
                None => counts.push((c, 1)),
            }
        }
        CharFrequency(counts)
    }

    pub fn get(&self, c: char) -> Option<usize> {
        self.0
            .iter()
            .find(|(seen, _)| *seen == c)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for CharFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (c, count) in &self.0 {
            map.serialize_entry(&c.to_string(), count)?;
        }
        map.end()
    }
}

/// Lowercase hex SHA-256 of the value's UTF-8 bytes. This is the record's
/// identity: the same function backs lookups, uniqueness checks, and the
/// `sha256_hash` property.
pub fn fingerprint(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compute the descriptive properties of a string. Pure and deterministic.
///
/// `length` counts UTF-16 code units, matching how the service has always
/// reported it; astral-plane characters (emoji) count as 2. The palindrome
/// check folds case and strips whitespace, while `unique_characters` and the
/// frequency map treat case and whitespace as significant; that asymmetry is
/// part of the contract.
pub fn analyze(value: &str) -> Properties {
    let length = value.encode_utf16().count();

    let normalized: String = value
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let is_palindrome = normalized == normalized.chars().rev().collect::<String>();

    let unique_characters = value.chars().collect::<HashSet<_>>().len();
    let word_count = value.split_whitespace().count();

    Properties {
        length,
        is_palindrome,
        unique_characters,
        word_count,
        sha256_hash: fingerprint(value),
        character_frequency_map: CharFrequency::tally(value),
    }
}
