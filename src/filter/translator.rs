use super::FilterSet;
use regex::Regex;
use std::sync::LazyLock;

static WORD_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+words?").expect("valid word count regex"));
static LONGER_THAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"longer than (\d+)").expect("valid longer-than regex"));
static SHORTER_THAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"shorter than (\d+)").expect("valid shorter-than regex"));
static CONTAINS_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"containing (?:the letter )?([a-z])").expect("valid containing regex")
});

/// The translation rules, in evaluation order.
///
/// The order is contractual: each rule assigns independently, and a later
/// rule overwrites an earlier assignment to the same field. "3 words" beats
/// "single word" on `word_count`, and "first vowel" beats "containing the
/// letter x" on `contains_character`.
const RULES: &[fn(&str, &mut FilterSet)] = &[
    palindrome_rule,
    single_word_rule,
    word_count_rule,
    longer_than_rule,
    shorter_than_rule,
    contains_letter_rule,
    first_vowel_rule,
];

/// Translate a free-text phrase into structured filters.
///
/// Pure and total: any input, including nonsense, yields a (possibly empty)
/// filter set. Matching is case-insensitive; the query is lowercased once and
/// every rule runs against the lowercased form. The result may still be
/// internally conflicting (`min_length > max_length`); detecting that is the
/// caller's job, see [`FilterSet::has_conflicting_bounds`].
pub fn translate(query: &str) -> FilterSet {
    let lowered = query.to_lowercase();
    let mut filters = FilterSet::new();
    for rule in RULES {
        rule(&lowered, &mut filters);
    }
    filters
}

fn palindrome_rule(query: &str, filters: &mut FilterSet) {
    if query.contains("palindrome") || query.contains("palindromic") {
        filters.is_palindrome = Some(true);
    }
}

fn single_word_rule(query: &str, filters: &mut FilterSet) {
    if query.contains("single word") {
        filters.word_count = Some(1);
    }
}

fn word_count_rule(query: &str, filters: &mut FilterSet) {
    if let Some(count) = capture_number(&WORD_COUNT_RE, query) {
        filters.word_count = Some(count);
    }
}

/// "longer than n" is strict, so the bound stored is n + 1.
fn longer_than_rule(query: &str, filters: &mut FilterSet) {
    if let Some(bound) = capture_number(&LONGER_THAN_RE, query) {
        filters.min_length = Some(bound.saturating_add(1));
    }
}

/// "shorter than n" is strict, so the bound stored is n - 1, saturating at 0
/// since the field is non-negative.
fn shorter_than_rule(query: &str, filters: &mut FilterSet) {
    if let Some(bound) = capture_number(&SHORTER_THAN_RE, query) {
        filters.max_length = Some(bound.saturating_sub(1));
    }
}

fn contains_letter_rule(query: &str, filters: &mut FilterSet) {
    if let Some(caps) = CONTAINS_LETTER_RE.captures(query) {
        filters.contains_character = caps[1].chars().next();
    }
}

/// Fixed heuristic: "first vowel" means the letter 'a', not anything computed
/// from stored content.
fn first_vowel_rule(query: &str, filters: &mut FilterSet) {
    if query.contains("first vowel") {
        filters.contains_character = Some('a');
    }
}

/// First capture group of `re`, parsed as a number. A number too large for
/// u32 fails the parse and leaves the rule unapplied; `translate` never
/// fails.
fn capture_number(re: &Regex, query: &str) -> Option<u32> {
    re.captures(query).and_then(|caps| caps[1].parse().ok())
}
