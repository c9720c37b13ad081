//! Query filters: translation from free-text phrases and evaluation against
//! stored records.
//!
//! A [`FilterSet`] is a bundle of optional predicates; an absent field means
//! "no constraint". Filter sets come from two places:
//!
//! - the structured query parameters of a list request, validated field by
//!   field in the service layer, or
//! - a free-text phrase run through [`translate`], which recognizes a fixed
//!   sequence of lexical patterns.
//!
//! # Recognized phrases
//!
//! ```text
//! palindrome / palindromic        is_palindrome = true
//! single word                     word_count = 1
//! <n> words                       word_count = n
//! longer than <n>                 min_length = n + 1
//! shorter than <n>                max_length = n - 1
//! containing [the letter] <c>     contains_character = c
//! first vowel                     contains_character = 'a'
//! ```
//!
//! Evaluation is a pure conjunction: a record matches a filter set when every
//! present predicate holds.

pub mod evaluator;
pub mod translator;

pub use evaluator::apply_filters;
pub use translator::translate;

use crate::store::StringRecord;
use serde::Serialize;

/// Optional predicates applied conjunctively to stored records. Transient;
/// never persisted. Serialization skips absent fields so response echoes show
/// only the constraints actually in force.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// True when both length bounds are present and the minimum exceeds the
    /// maximum. Such a set is unsatisfiable; callers reject it as a semantic
    /// conflict instead of evaluating it to an empty result.
    pub fn has_conflicting_bounds(&self) -> bool {
        matches!(
            (self.min_length, self.max_length),
            (Some(min), Some(max)) if min > max
        )
    }

    /// Check a record against every present predicate. Length and word-count
    /// predicates read the computed properties; the character predicate is a
    /// case-sensitive containment check on the raw value.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let palindrome_match = self
            .is_palindrome
            .map(|want| record.properties.is_palindrome == want)
            .unwrap_or(true);

        let min_length_match = self
            .min_length
            .map(|min| record.properties.length >= min as usize)
            .unwrap_or(true);

        let max_length_match = self
            .max_length
            .map(|max| record.properties.length <= max as usize)
            .unwrap_or(true);

        let word_count_match = self
            .word_count
            .map(|count| record.properties.word_count == count as usize)
            .unwrap_or(true);

        let character_match = self
            .contains_character
            .map(|c| record.value.contains(c))
            .unwrap_or(true);

        palindrome_match
            && min_length_match
            && max_length_match
            && word_count_match
            && character_match
    }
}
