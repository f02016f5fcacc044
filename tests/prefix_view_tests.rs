use frequency_trie::{Completion, Trie};
use std::collections::HashSet;

#[test]
fn test_prefix_view_creation() {
    let trie = Trie::build(vec!["hello", "help", "world"]).unwrap();

    // Create a view with a prefix that exists
    let view = trie.view_prefix("hel");

    // Basic properties
    assert!(view.exists());
    assert_eq!(view.prompt(), "hel");
    assert_eq!(view.trie(), &trie);
    assert_eq!(view.len(), 2);
    assert!(!view.is_empty());
}

#[test]
fn test_prefix_view_lexicographic_iteration() {
    // Corpus deliberately not in lexicographic order
    let trie = Trie::build(vec![
        "zebra",
        "apple",
        "banana",
        "cherry",
        "date",
        "apricot",
        "blueberry",
        "blackberry",
    ])
    .unwrap();

    let a_keys: Vec<String> = trie.view_prefix("a").iter().map(|(key, _)| key).collect();
    assert_eq!(a_keys, vec!["apple", "apricot"]);

    let b_keys: Vec<String> = trie.view_prefix("b").iter().map(|(key, _)| key).collect();
    assert_eq!(b_keys, vec!["banana", "blackberry", "blueberry"]);

    // Prefix that is itself a stored sequence comes before its extensions
    let complex_trie = Trie::build(vec!["abcg", "abce", "abc", "abcd", "abd", "abcf"]).unwrap();
    let abc_keys: Vec<String> = complex_trie
        .view_prefix("abc")
        .iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(abc_keys, vec!["abc", "abcd", "abce", "abcf", "abcg"]);
}

#[test]
fn test_prefix_view_nonexistent() {
    let trie = Trie::build(vec!["hello", "world"]).unwrap();

    let view = trie.view_prefix("xyz");

    assert!(!view.exists());
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert!(!view.contains("hello"));
    assert_eq!(view.best(), None);
}

#[test]
fn test_prefix_view_contains() {
    let trie = Trie::build(vec!["hello", "help", "world"]).unwrap();

    // View with the "hel" prefix
    let view = trie.view_prefix("hel");

    // Should contain sequences in the view
    assert!(view.contains("hello"));
    assert!(view.contains("help"));

    // Should not contain sequences outside the prefix or never stored
    assert!(!view.contains("world"));
    assert!(!view.contains("he"));
    assert!(!view.contains("hel"));
}

#[test]
fn test_prefix_view_iter_counts() {
    let trie = Trie::build(vec!["hello", "help", "help", "world"]).unwrap();
    let view = trie.view_prefix("hel");

    let results: HashSet<(String, usize)> = view.iter().collect();
    let expected: HashSet<(String, usize)> =
        vec![("hello".to_string(), 1), ("help".to_string(), 2)]
            .into_iter()
            .collect();

    assert_eq!(results, expected);
}

#[test]
fn test_prefix_view_partial_match() {
    let trie = Trie::build(vec!["hello", "help"]).unwrap();

    // Prefix is a partial match of both sequences
    let view = trie.view_prefix("he");

    // The prefix exists, but is not a stored sequence itself
    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(!view.is_complete_sequence());
    assert!(!view.contains("he"));

    // Tie between the two goes to the smaller one
    assert_eq!(
        view.best(),
        Some(&Completion {
            text: "hello".to_string(),
            count: 1
        })
    );
}

#[test]
fn test_prefix_view_nested() {
    let trie = Trie::build(vec!["a", "ab", "abc", "abcd"]).unwrap();

    // Create nested views
    let view_a = trie.view_prefix("a");
    let view_ab = trie.view_prefix("ab");
    let view_abc = trie.view_prefix("abc");

    // Check lengths
    assert_eq!(view_a.len(), 4);
    assert_eq!(view_ab.len(), 3);
    assert_eq!(view_abc.len(), 2);

    assert!(view_a.contains("a"));
    assert!(view_a.contains("abc"));

    assert!(!view_ab.contains("a"));
    assert!(view_ab.contains("ab"));
    assert!(view_ab.contains("abc"));

    assert!(!view_abc.contains("ab"));
    assert!(view_abc.contains("abcd"));

    // All counts tie, so each view completes to its own prompt
    assert_eq!(view_a.best().unwrap().text, "a");
    assert_eq!(view_ab.best().unwrap().text, "ab");
    assert_eq!(view_abc.best().unwrap().text, "abc");
}

#[test]
fn test_prefix_view_empty_prefix() {
    let trie = Trie::build(vec!["hello", "world", "world"]).unwrap();

    // Empty prefix covers the entire trie
    let view = trie.view_prefix("");

    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(view.contains("hello"));
    assert!(view.contains("world"));
    assert_eq!(view.best_count(), 2);
    assert_eq!(view.best().unwrap().text, "world");
}
