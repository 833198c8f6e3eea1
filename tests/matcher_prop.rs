//! Property tests for the substring matcher, checked against the
//! standard library's naive containment as an oracle.

use biblio_search::matcher;
use proptest::prelude::*;

proptest! {
    // Small alphabet to force long borders and failure-table fallbacks
    #[test]
    fn agrees_with_naive_contains(text in "[ab]{0,40}", pattern in "[ab]{0,8}") {
        prop_assert_eq!(matcher::matches(&text, &pattern), text.contains(&pattern));
    }

    #[test]
    fn agrees_with_naive_contains_unicode(text in "\\PC{0,30}", pattern in "\\PC{0,6}") {
        prop_assert_eq!(matcher::matches(&text, &pattern), text.contains(&pattern));
    }

    #[test]
    fn planted_pattern_is_always_found(
        prefix in "[abc]{0,20}",
        pattern in "[abc]{0,8}",
        suffix in "[abc]{0,20}",
    ) {
        let text = format!("{prefix}{pattern}{suffix}");
        prop_assert!(matcher::matches(&text, &pattern));
    }

    #[test]
    fn failure_table_invariants(pattern in "\\PC{1,24}") {
        let chars: Vec<char> = pattern.chars().collect();
        let table = matcher::failure_table(&chars);

        prop_assert_eq!(table.len(), chars.len());
        prop_assert_eq!(table[0], 0usize);
        for (i, &entry) in table.iter().enumerate() {
            prop_assert!(entry <= i);
        }
    }

    #[test]
    fn compiled_matcher_agrees_with_one_shot(
        texts in proptest::collection::vec("[ab]{0,20}", 0..8),
        pattern in "[ab]{0,6}",
    ) {
        // One table per request, reused across candidates, must behave
        // exactly like rebuilding per candidate.
        let compiled = matcher::Matcher::new(&pattern);
        for text in &texts {
            prop_assert_eq!(compiled.matches(text), matcher::matches(text, &pattern));
        }
    }
}
