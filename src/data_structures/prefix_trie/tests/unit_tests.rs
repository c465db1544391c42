// Copyright (c) 2025 Gosh Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the prefix trie.

use test_case::test_case;

use super::as_set;
use crate::data_structures::prefix_trie::PrefixTrie;

#[test]
fn test_shared_prefix_creates_single_root_child() {
    let trie = PrefixTrie::build(["-l", "-a"]);

    assert_eq!(trie.root.children.len(), 1);
    let dash = trie.root.child('-').expect("dash node");
    assert_eq!(dash.character, '-');
    assert!(!dash.is_end_of_word);
}

#[test]
fn test_two_words_build_expected_nodes() {
    let trie = PrefixTrie::build(["-l", "-a"]);

    assert_eq!(trie.root.character, '\0');
    let dash = trie.root.child('-').expect("dash node");
    let l = dash.child('l').expect("l node");
    let a = dash.child('a').expect("a node");

    assert_eq!(l.character, 'l');
    assert!(l.is_end_of_word);
    assert_eq!(a.character, 'a');
    assert!(a.is_end_of_word);
}

#[test]
fn test_insert_marks_internal_node_as_word() {
    let mut trie = PrefixTrie::new();
    assert!(trie.insert("-lint"));
    assert!(trie.insert("-l"));

    let l = trie
        .root
        .child('-')
        .and_then(|n| n.child('l'))
        .expect("l node");
    assert!(l.is_end_of_word);
    assert!(l.child('i').is_some());
}

#[test]
fn test_insert_reports_new_words() {
    let mut trie = PrefixTrie::new();

    assert!(trie.insert("--color"));
    assert!(!trie.insert("--color"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_insert_empty_word_is_noop() {
    let mut trie = PrefixTrie::new();

    assert!(!trie.insert(""));
    assert!(trie.is_empty());
    assert_eq!(trie, PrefixTrie::new());
}

#[test]
fn test_duplicate_insert_leaves_trie_unchanged() {
    let mut trie = PrefixTrie::build(["-l", "-list", "-a"]);
    let before = trie.clone();
    let suggestions_before = as_set(trie.suggest("-"));

    trie.insert("-list");

    assert_eq!(trie, before);
    assert_eq!(as_set(trie.suggest("-")), suggestions_before);
}

#[test_case(&["-l", "-a"], "-a", &["-a"] ; "lookup single word")]
#[test_case(
    &["-l", "-list", "-lat", "-lng", "-a", "-bind"],
    "-l",
    &["-l", "-list", "-lat", "-lng"]
    ; "suggestions below a word"
)]
#[test_case(&["-l", "-a", "-ls", "-ag"], "-an", &[] ; "no suggestions for missing branch")]
#[test_case(&["-l", "-lin", "-line"], "-l", &["-l", "-lin", "-line"] ; "words along one path")]
#[test_case(&[], "x", &[] ; "empty trie")]
#[test_case(
    &[
        "-a", "--all", "-A", "--almost-all", "--author", "-b", "--escape",
        "--block-size", "-B", "--ignore-backups", "-c", "-C", "--color",
    ],
    "--a",
    &["--all", "--almost-all", "--author"]
    ; "ls long options"
)]
fn test_suggest_scenarios(words: &[&str], prefix: &str, expected: &[&str]) {
    let trie = PrefixTrie::build(words.iter().copied());

    let suggestions = trie.suggest(prefix);

    assert_eq!(suggestions.len(), expected.len());
    assert_eq!(as_set(suggestions), as_set(expected.iter().copied()));
}

#[test]
fn test_suggest_empty_prefix_returns_all_words() {
    let words = ["-l", "-list", "-a", "--all", "x"];
    let trie = PrefixTrie::build(words);

    assert_eq!(as_set(trie.suggest("")), as_set(words));
}

#[test]
fn test_suggest_empty_prefix_on_empty_trie() {
    let trie = PrefixTrie::new();

    assert!(trie.suggest("").is_empty());
}

#[test]
fn test_suggest_prefix_that_is_not_a_word() {
    let trie = PrefixTrie::build(["--all", "--almost-all"]);

    assert_eq!(
        as_set(trie.suggest("--al")),
        as_set(["--all", "--almost-all"])
    );
}

#[test]
fn test_suggest_prefix_longer_than_any_word() {
    let trie = PrefixTrie::build(["-l"]);

    assert!(trie.suggest("-lx").is_empty());
}

#[test]
fn test_suggest_multibyte_characters() {
    let trie = PrefixTrie::build(["--größe", "--grün", "--gray"]);

    assert_eq!(as_set(trie.suggest("--gr")), as_set(["--größe", "--grün", "--gray"]));
    assert_eq!(as_set(trie.suggest("--grö")), as_set(["--größe"]));
}

#[test]
fn test_suggest_is_case_sensitive() {
    let trie = PrefixTrie::build(["-a", "-A"]);

    assert_eq!(trie.suggest("-A"), vec!["-A".to_string()]);
}

#[test]
fn test_suggestions_iterator_is_lazy() {
    let trie = PrefixTrie::build(["-a", "-b", "-c"]);

    let first = trie.suggestions("-").next();

    assert!(first.is_some());
    assert_eq!(trie.suggestions("-").count(), 3);
    assert_eq!(trie.suggestions("-z").count(), 0);
}

#[test]
fn test_contains() {
    let trie = PrefixTrie::build(["-l", "-lint"]);

    assert!(trie.contains("-l"));
    assert!(trie.contains("-lint"));
    assert!(!trie.contains("-li"));
    assert!(!trie.contains(""));
    assert!(!trie.contains("-x"));
}

#[test]
fn test_len_counts_distinct_words() {
    let trie = PrefixTrie::build(["-l", "-l", "-lin", "", "-line"]);

    assert_eq!(trie.len(), 3);
    assert!(!trie.is_empty());
}

#[test]
fn test_collect_and_extend() {
    let mut trie: PrefixTrie = vec!["-a".to_string(), "-b".to_string()].into_iter().collect();
    trie.extend(["-c"]);

    assert_eq!(as_set(trie.suggest("-")), as_set(["-a", "-b", "-c"]));
}

#[test]
fn test_debug_print() {
    let trie = PrefixTrie::build(["-l", "-a", "-la"]);

    let dump = trie.debug_print(0);

    assert_eq!(dump, "^ 0\n  - 0\n    a 1\n    l 1\n      a 1\n");
}

#[test]
fn test_debug_print_with_level() {
    let trie = PrefixTrie::build(["x"]);

    assert_eq!(trie.debug_print(1), "  ^ 0\n    x 1\n");
}

#[test]
fn test_trie_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PrefixTrie>();

    let trie = std::sync::Arc::new(PrefixTrie::build(["-l", "-list"]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let trie = std::sync::Arc::clone(&trie);
            std::thread::spawn(move || trie.suggest("-l").len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
