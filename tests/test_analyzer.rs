use string_analyzer::{analyze, fingerprint};

#[test]
fn test_fingerprint_is_deterministic() {
    assert_eq!(fingerprint("hello world"), fingerprint("hello world"));
    assert_ne!(fingerprint("hello world"), fingerprint("hello worlD"));
}

#[test]
fn test_fingerprint_matches_known_sha256_vector() {
    assert_eq!(
        fingerprint("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_fingerprint_backs_the_hash_property() {
    let properties = analyze("hello world");
    assert_eq!(properties.sha256_hash, fingerprint("hello world"));
}

#[test]
fn test_palindrome_check_is_case_and_space_insensitive() {
    assert!(analyze("A man am a").is_palindrome);
    assert!(analyze("Race car").is_palindrome);
    assert!(!analyze("hello").is_palindrome);
}

#[test]
fn test_unique_characters_keeps_case_and_whitespace_significant() {
    // The palindrome check folds case and strips whitespace; the unique
    // count does neither.
    let properties = analyze("Aa bb");
    assert_eq!(properties.unique_characters, 4); // 'A', 'a', ' ', 'b'
    assert!(!properties.is_palindrome); // "aabb" reversed is "bbaa"
}

#[test]
fn test_word_count_ignores_surrounding_and_repeated_whitespace() {
    assert_eq!(analyze("  hello   world  ").word_count, 2);
    assert_eq!(analyze("one").word_count, 1);
    assert_eq!(analyze("   ").word_count, 0);
    assert_eq!(analyze("").word_count, 0);
}

#[test]
fn test_length_counts_utf16_code_units() {
    // Astral-plane characters are two UTF-16 code units.
    assert_eq!(analyze("😀").length, 2);
    assert_eq!(analyze("héllo").length, 5);
    assert_eq!(analyze("abc").length, 3);

    // The unique count iterates scalar values, so the emoji is one entry.
    let properties = analyze("😀😀");
    assert_eq!(properties.length, 4);
    assert_eq!(properties.unique_characters, 1);
}

#[test]
fn test_character_frequency_counts_exact_occurrences() {
    let properties = analyze("hello");
    assert_eq!(properties.character_frequency_map.get('l'), Some(2));
    assert_eq!(properties.character_frequency_map.get('h'), Some(1));
    assert_eq!(properties.character_frequency_map.get('z'), None);
    assert_eq!(properties.character_frequency_map.len(), 4);
}

#[test]
fn test_character_frequency_serializes_in_first_seen_order() {
    let properties = analyze("hello world");
    let rendered = serde_json::to_string(&properties.character_frequency_map).unwrap();
    assert_eq!(rendered, r#"{"h":1,"e":1,"l":3,"o":2," ":1,"w":1,"r":1,"d":1}"#);
}
