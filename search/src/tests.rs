use super::*;
use common::{create_index, create_palette, make_entry, slugs};
use folio_core::ContentSet;
use folio_core::types::Collection;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod common {
    use super::*;
    use chrono::NaiveDate;
    use folio_core::types::{Entry, EntryData, Slug};
    use std::collections::BTreeMap;

    pub(super) fn make_entry(
        collection: Collection,
        slug: &str,
        title: &str,
        summary: &str,
        tags: &[&str],
    ) -> Entry {
        Entry {
            slug: Slug::try_new(slug.to_string()).unwrap(),
            collection,
            data: EntryData {
                title: title.to_string(),
                summary: summary.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                draft: false,
                extra: BTreeMap::new(),
            },
        }
    }

    pub(super) fn create_content() -> ContentSet {
        ContentSet::new(vec![
            make_entry(
                Collection::Blog,
                "hello-world",
                "Hello World",
                "My first post on this site",
                &["intro"],
            ),
            make_entry(
                Collection::Projects,
                "weather-cli",
                "Weather CLI",
                "Terminal forecasts written in Rust",
                &["rust", "cli"],
            ),
            make_entry(
                Collection::Blog,
                "async-rust",
                "Understanding async",
                "Futures, executors and pinning",
                &["rust", "async"],
            ),
        ])
        .unwrap()
    }

    pub(super) fn create_index() -> FuzzyIndex {
        FuzzyIndex::new(&create_content(), SearchConfig::default())
    }

    pub(super) fn create_palette() -> SearchPalette {
        SearchPalette::new(create_index(), GlobalShortcuts::default())
    }

    pub(super) fn slugs(results: &SearchResults) -> Vec<&str> {
        results.iter().map(|e| e.slug.as_str()).collect()
    }
}

mod search {
    use super::*;

    #[test]
    fn test_short_query_is_idle() {
        let index = create_index();

        for query in ["", "h", "é"] {
            let results = index.search(query);
            assert!(results.is_idle());
            assert!(results.is_empty());
            assert_eq!(results.status_line(), None);
        }
    }

    #[test]
    fn test_typos_still_match_title() {
        let index = create_index();

        let results = index.search("helo wrld");

        assert_eq!(slugs(&results).first(), Some(&"hello-world"));
        assert!(!results.is_idle());
    }

    #[test]
    fn test_nonsense_has_no_matches() {
        let index = create_index();

        let results = index.search("zzzzz");

        assert!(results.is_empty());
        assert!(!results.is_idle());
        assert_eq!(
            results.status_line(),
            Some("No results found for \"zzzzz\"".to_string())
        );
    }

    #[test]
    fn test_scattered_letters_do_not_match() {
        let content = ContentSet::new(vec![
            make_entry(
                Collection::Blog,
                "reading-list",
                "Read user stories today",
                "Recipes using sweet tomatoes",
                &[],
            ),
            make_entry(
                Collection::Blog,
                "field-notes",
                "Field notes",
                "zen elephants bring rare apples and yaks by the zoo",
                &[],
            ),
        ])
        .unwrap();
        let index = FuzzyIndex::new(&content, SearchConfig::default());

        for query in ["rust", "zebra", "ab"] {
            let results = index.search(query);
            assert!(results.is_empty(), "{query} matched {:?}", slugs(&results));
            assert!(!results.is_idle());
        }
    }

    #[test]
    fn test_matches_tags_and_reports_field() {
        let index = create_index();

        let results = index.search("intro");

        assert_eq!(slugs(&results), vec!["hello-world"]);
        assert_eq!(results.hits()[0].similarity, 1.0);
        assert_eq!(results.hits()[0].field, MatchedField::Tag(0));
    }

    #[test]
    fn test_matches_slug() {
        let index = create_index();

        let results = index.search("weather-cli");

        assert_eq!(slugs(&results).first(), Some(&"weather-cli"));
    }

    #[test]
    fn test_equal_scores_keep_content_order() {
        let index = create_index();

        let results = index.search("rust");

        // Both carry an exact "rust" tag.
        let ranked = slugs(&results);
        let weather = ranked.iter().position(|s| *s == "weather-cli").unwrap();
        let async_rust = ranked.iter().position(|s| *s == "async-rust").unwrap();
        assert!(weather < async_rust);
        assert_eq!(
            results.status_line(),
            Some(format!("Found {} results", results.len()))
        );
    }

    #[test]
    fn test_ranked_best_first() {
        let index = create_index();

        let results = index.search("weather");

        let similarities: Vec<f64> = results.hits().iter().map(|h| h.similarity).collect();
        assert!(similarities.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_whitespace_query_matches_nothing() {
        let index = create_index();

        let results = index.search("   ");

        assert!(!results.is_idle());
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_threshold_requires_perfect_match() {
        let config = SearchConfig {
            threshold: 0.0,
            ..SearchConfig::default()
        };
        let index = FuzzyIndex::new(&common::create_content(), config);

        assert!(index.search("helo wrld").is_empty());
        assert_eq!(slugs(&index.search("intro")), vec!["hello-world"]);
    }

    #[test]
    fn test_min_query_len_is_configurable() {
        let config = SearchConfig {
            min_query_len: 4,
            ..SearchConfig::default()
        };
        let index = FuzzyIndex::new(&common::create_content(), config);

        assert!(index.search("cli").is_idle());
        assert!(!index.search("rust").is_idle());
    }

    #[test]
    fn test_empty_index() {
        let index = FuzzyIndex::new(&ContentSet::new(vec![]).unwrap(), SearchConfig::default());

        assert!(index.is_empty());
        assert!(index.search("anything").is_empty());
    }

    #[test]
    fn test_results_outlive_query_reset() {
        let index = create_index();

        let first = index.search("");
        let second = index.search("weather");
        let third = index.search("");

        assert!(first.is_empty());
        assert!(!second.is_empty());
        assert!(third.is_empty());
        assert!(third.is_idle());
    }
}

mod palette {
    use super::*;

    #[test]
    fn test_starts_closed_and_idle() {
        let palette = create_palette();

        assert!(!palette.is_open());
        assert!(palette.results().is_idle());
        assert_eq!(palette.selection().index(), -1);
    }

    #[test]
    fn test_global_keys_open_and_close() {
        let mut palette = create_palette();

        assert!(palette.handle_global_key(&KeyInput::new("Slash")));
        assert!(palette.is_open());

        // Slash no longer opens, so it reaches the input.
        assert!(!palette.handle_global_key(&KeyInput::new("Slash")));
        assert!(palette.is_open());

        assert!(palette.handle_global_key(&KeyInput::new("KeyK").with_ctrl()));
        assert!(!palette.is_open());

        assert!(palette.handle_global_key(&KeyInput::new("KeyK").with_meta()));
        assert!(palette.is_open());

        assert!(palette.handle_global_key(&KeyInput::new("Escape")));
        assert!(!palette.is_open());

        assert!(palette.handle_global_key(&KeyInput::new("Escape")));
        assert!(!palette.is_open());

        assert!(!palette.handle_global_key(&KeyInput::new("KeyA")));
    }

    #[test]
    fn test_arrow_navigation_clamps() {
        let content = ContentSet::new(vec![
            make_entry(Collection::Blog, "rust-one", "Rust one", "", &[]),
            make_entry(Collection::Blog, "rust-two", "Rust two", "", &[]),
            make_entry(Collection::Blog, "rust-three", "Rust three", "", &[]),
        ])
        .unwrap();
        let index = FuzzyIndex::new(&content, SearchConfig::default());
        let mut palette = SearchPalette::new(index, GlobalShortcuts::default());
        palette.set_query("rust");
        assert_eq!(palette.results().len(), 3);

        for _ in 0..4 {
            palette.move_selection(Direction::Down);
        }
        assert_eq!(palette.selection().index(), 2);

        for _ in 0..5 {
            palette.move_selection(Direction::Up);
        }
        assert_eq!(palette.selection().index(), -1);
    }

    #[test]
    fn test_enter_navigates_to_selected_entry() {
        let mut palette = create_palette();
        palette.set_query("weather");

        assert_eq!(
            palette.handle_input_key(&KeyInput::new("Enter")),
            InputOutcome::Handled
        );
        assert_eq!(
            palette.handle_input_key(&KeyInput::new("ArrowDown")),
            InputOutcome::Handled
        );
        assert_eq!(
            palette.handle_input_key(&KeyInput::new("Enter")),
            InputOutcome::Navigate("/projects/weather-cli/".to_string())
        );
        assert_eq!(
            palette.handle_input_key(&KeyInput::new("KeyA")),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn test_keys_ignored_without_results() {
        let mut palette = create_palette();
        palette.set_query("zzzzz");

        assert_eq!(
            palette.handle_input_key(&KeyInput::new("ArrowDown")),
            InputOutcome::Ignored
        );
        assert_eq!(palette.selection().index(), -1);
        assert_eq!(palette.activate_selected(), None);
    }

    #[test]
    fn test_new_query_resets_selection() {
        let mut palette = create_palette();
        palette.set_query("rust");
        palette.move_selection(Direction::Down);
        assert_eq!(palette.selection().index(), 0);

        palette.set_query("rusty");

        assert_eq!(palette.selection().index(), -1);
    }

    #[test]
    fn test_clearing_query_returns_to_idle() {
        let mut palette = create_palette();

        palette.set_query("");
        assert!(palette.results().is_empty());
        palette.set_query("weather");
        assert!(!palette.results().is_empty());
        palette.set_query("");
        assert!(palette.results().is_empty());
        assert!(palette.results().is_idle());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_activate_by_rank() {
        let mut palette = create_palette();
        palette.set_query("hello");

        assert_eq!(palette.activate(0), Some("/blog/hello-world/".to_string()));
        assert_eq!(palette.activate(99), None);
    }

    #[test]
    fn test_on_change_fires_for_state_changes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut palette = create_palette();
        palette.on_change(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        palette.open();
        palette.open();
        palette.set_query("weather");
        palette.move_selection(Direction::Up);
        palette.move_selection(Direction::Down);
        palette.close();

        // open, set_query, move down, close; the repeated open and the
        // clamped move up change nothing.
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
