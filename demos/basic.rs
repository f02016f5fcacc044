//! Examples of using the frequency trie
use frequency_trie::{autocomplete, build, Trie};

fn main() {
    // Build a trie from a corpus; repeated sentences count as more frequent
    let trie = build(vec!["cat", "cats", "cats", "car", "dog"]).unwrap();

    // The most frequent completion wins
    assert_eq!(autocomplete(&trie, "ca"), Some("cats".to_string()));
    assert_eq!(autocomplete(&trie, "d"), Some("dog".to_string()));
    assert_eq!(autocomplete(&trie, "x"), None);

    // Ties go to the lexicographically smaller sequence
    let trie = Trie::build(vec!["ac", "ab"]).unwrap();
    assert_eq!(trie.autocomplete("a"), Some("ab".to_string()));

    // The strict form reports counts and rejects characters outside a-z
    let trie = Trie::build(vec!["hello", "help", "help"]).unwrap();
    let completion = trie.complete("hel").unwrap().unwrap();
    println!("{} ({} occurrences)", completion.text, completion.count);
    assert!(trie.complete("Hel").is_err());

    // Walk everything stored under a prefix
    for (sequence, count) in &trie.view_prefix("he") {
        println!("{:>8} {}", sequence, count);
    }
}
