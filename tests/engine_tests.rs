// Integration tests for the search engine: the documented scenarios,
// intersection properties, reload idempotence, and suggestion bounds

use wordseek::{Constraint, ParsedQuery, Pattern, SearchEngine};

fn engine() -> SearchEngine {
    // Mixed-case input on purpose: load must normalize "WORLD".
    SearchEngine::load(["words", "works", "wants", "about", "WORLD"])
}

// ============ Pattern queries ============

#[test]
fn test_scenario_wildcard_pattern() {
    // Every 5-letter word with 'w' at 0 and 's' at 4 matches,
    // "wants" included: the wildcards cover a/n/t.
    assert_eq!(engine().search("w___s"), vec!["wants", "words", "works"]);
}

#[test]
fn test_scenario_pattern_plus_required_char() {
    let engine = engine();

    // Requiring 'o' drops "wants" from the pattern matches.
    let parsed = ParsedQuery {
        pattern: Some(Pattern::parse("w___s").unwrap()),
        required: vec!['o'],
        length: None,
    };
    assert_eq!(engine.search_parsed(&parsed), vec!["words", "works"]);

    // Requiring 'a' keeps only "wants".
    let parsed = ParsedQuery {
        pattern: Some(Pattern::parse("w___s").unwrap()),
        required: vec!['a'],
        length: None,
    };
    assert_eq!(engine.search_parsed(&parsed), vec!["wants"]);
}

#[test]
fn test_pattern_results_match_literal_positions() {
    // Every loaded word is found by the pattern built from itself with
    // wildcards at every other position.
    let engine = engine();
    for word in ["words", "works", "wants", "about", "world"] {
        let mut template: Vec<char> = vec!['_'; word.len()];
        template[0] = word.chars().next().unwrap();
        let text: String = template.into_iter().collect();
        let results = engine.search(&text);
        assert!(
            results.contains(&word.to_string()),
            "{} should match {}",
            word,
            text
        );
    }
}

#[test]
fn test_pattern_never_matches_other_lengths() {
    let engine = SearchEngine::load(["cat", "cart", "carts"]);
    for (query, length) in [("___", 3), ("____", 4), ("_____", 5)] {
        let results = engine.search(query);
        assert!(!results.is_empty(), "{} should match", query);
        assert!(results.iter().all(|word| word.len() == length));
    }
}

#[test]
fn test_free_text_required_chars_only() {
    // No pattern: the base set is the whole vocabulary.
    assert_eq!(engine().search("[o]"), vec!["about", "words", "works", "world"]);
    assert_eq!(engine().search("[o] [k]"), vec!["works"]);
}

#[test]
fn test_free_text_length_phrase_only() {
    let engine = SearchEngine::load(["cat", "dog", "horse"]);
    assert_eq!(engine.search("3 letters"), vec!["cat", "dog"]);
    assert_eq!(engine.search("9 letters"), Vec::<String>::new());
}

#[test]
fn test_unmatched_pattern_is_empty_not_an_error() {
    assert_eq!(engine().search("z___z"), Vec::<String>::new());
}

// ============ Structured queries ============

#[test]
fn test_scenario_advanced_search() {
    let results = engine().advanced_search(&[
        Constraint::Length { value: 5 },
        Constraint::StartsWith {
            value: "w".to_string(),
        },
        Constraint::EndsWith {
            value: "s".to_string(),
        },
        Constraint::Contains { ch: 'o' },
    ]);
    assert_eq!(results, vec!["words", "works"]);
}

#[test]
fn test_scenario_position_constraint_matches_direct_filter() {
    // Assert against the algorithm itself: the result must equal a
    // direct scan applying the same conditions.
    let words = ["with", "when", "what"];
    let engine = SearchEngine::load(words);

    let results = engine.advanced_search(&[
        Constraint::Length { value: 4 },
        Constraint::ContainsAtPosition { ch: 'w', position: 2 },
        Constraint::Contains { ch: 'h' },
    ]);

    let mut expected: Vec<String> = words
        .iter()
        .filter(|w| w.len() == 4)
        .filter(|w| w.chars().nth(2) == Some('w'))
        .filter(|w| w.contains('h'))
        .map(|w| w.to_string())
        .collect();
    expected.sort();

    assert_eq!(results, expected);
}

#[test]
fn test_empty_constraint_list_returns_whole_vocabulary() {
    assert_eq!(
        engine().advanced_search(&[]),
        vec!["about", "wants", "words", "works", "world"]
    );
}

#[test]
fn test_constraint_order_does_not_change_results() {
    let engine = engine();
    let constraints = vec![
        Constraint::Length { value: 5 },
        Constraint::StartsWith {
            value: "w".to_string(),
        },
        Constraint::EndsWith {
            value: "s".to_string(),
        },
        Constraint::Contains { ch: 'o' },
    ];

    let forward = engine.advanced_search(&constraints);
    let reversed: Vec<Constraint> = constraints.iter().rev().cloned().collect();
    assert_eq!(forward, engine.advanced_search(&reversed));

    let rotated: Vec<Constraint> = constraints[2..]
        .iter()
        .chain(&constraints[..2])
        .cloned()
        .collect();
    assert_eq!(forward, engine.advanced_search(&rotated));
}

#[test]
fn test_suffix_constraint_scans_whole_vocabulary() {
    let engine = SearchEngine::load(["running", "sing", "song", "ring"]);
    let results = engine.advanced_search(&[Constraint::EndsWith {
        value: "ing".to_string(),
    }]);
    assert_eq!(results, vec!["ring", "running", "sing"]);
}

#[test]
fn test_containment_property_over_all_words() {
    // For every word W and every character C in W, a contains(C)
    // query includes W; per-position queries include W at each index.
    let words = ["words", "works", "wants", "about", "world"];
    let engine = SearchEngine::load(words);

    for word in words {
        for (position, ch) in word.chars().enumerate() {
            let anywhere = engine.advanced_search(&[Constraint::Contains { ch }]);
            assert!(anywhere.contains(&word.to_string()));

            let at = engine.advanced_search(&[Constraint::ContainsAtPosition { ch, position }]);
            assert!(
                at.contains(&word.to_string()),
                "{} should have '{}' at {}",
                word,
                ch,
                position
            );
        }
    }
}

// ============ Load / reload ============

#[test]
fn test_duplicate_and_mixed_case_load_input() {
    let engine = SearchEngine::load(["cat", "CAT", "Cat", "dog"]);
    assert_eq!(engine.word_count(), 2);
    assert_eq!(engine.advanced_search(&[]), vec!["cat", "dog"]);
}

#[test]
fn test_reload_is_idempotent() {
    let words = ["words", "works", "wants", "about", "world"];
    let first = SearchEngine::load(words);
    let second = SearchEngine::load(words);

    assert_eq!(first.word_count(), second.word_count());
    assert_eq!(first.length_histogram(), second.length_histogram());
    for query in ["w___s", "[o]", "5 letters", "_____"] {
        assert_eq!(first.search(query), second.search(query), "query: {}", query);
    }
    assert_eq!(
        first.advanced_search(&[Constraint::Contains { ch: 'o' }]),
        second.advanced_search(&[Constraint::Contains { ch: 'o' }])
    );
}

#[test]
fn test_empty_engine_answers_everything_empty() {
    let engine = SearchEngine::load(Vec::<String>::new());
    assert!(engine.is_empty());
    assert_eq!(engine.search("w___s"), Vec::<String>::new());
    assert_eq!(engine.advanced_search(&[]), Vec::<String>::new());
    assert_eq!(engine.suggestions("5 letters", 10), Vec::<String>::new());
}

// ============ Suggestions ============

#[test]
fn test_suggestions_respect_limit_and_uniqueness() {
    let engine = SearchEngine::load([
        "words", "works", "wants", "wards", "wires", "wives", "about", "world",
    ]);

    for limit in [0, 1, 3, 10] {
        let hints = engine.suggestions("w___s 5 letters", limit);
        assert!(hints.len() <= limit, "limit {} exceeded", limit);

        let mut unique = hints.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), hints.len(), "duplicate suggestion");
    }
}

#[test]
fn test_suggestions_pattern_source() {
    let hints = engine().suggestions("w___s", 10);
    assert!(hints.contains(&"words".to_string()));
    assert!(hints.contains(&"works".to_string()));
    assert!(hints.len() <= 5);
}

#[test]
fn test_suggestions_length_source() {
    let hints = engine().suggestions("5 letters", 10);
    assert!(hints.contains(&"about".to_string()));
    assert!(hints.len() <= 5);
}

#[test]
fn test_suggestions_mixed_query_salvage_is_lossy() {
    // Stripping "w___s 5 letters" to pattern characters yields the
    // dead template "w___sletters", so only the length source
    // contributes. This mirrors the documented best-effort contract.
    let hints = engine().suggestions("w___s 5 letters", 10);
    assert!(hints.contains(&"about".to_string()));
    assert!(hints.contains(&"words".to_string()));
}

#[test]
fn test_suggestions_are_subset_of_vocabulary() {
    let engine = engine();
    let all = engine.advanced_search(&[]);
    for hint in engine.suggestions("w___s 5 letters", 10) {
        assert!(all.contains(&hint));
    }
}

#[test]
fn test_suggestions_without_usable_parts() {
    assert_eq!(engine().suggestions("hello", 10), Vec::<String>::new());
}
