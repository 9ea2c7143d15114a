use super::*;
use common::{create_filter, visible_slugs};
use std::sync::atomic::{AtomicUsize, Ordering};

mod common {
    use super::*;
    use crate::types::{Collection, EntryData, Slug};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    pub(super) fn make_entry(slug: &str, tags: &[&str]) -> Entry {
        Entry {
            slug: Slug::try_new(slug.to_string()).unwrap(),
            collection: Collection::Blog,
            data: EntryData {
                title: slug.to_string(),
                summary: String::new(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                draft: false,
                extra: BTreeMap::new(),
            },
        }
    }

    /// a: [x, y], b: [y], c: [z]
    pub(super) fn create_filter() -> TagFilter {
        let content = ContentSet::new(vec![
            make_entry("a", &["x", "y"]),
            make_entry("b", &["y"]),
            make_entry("c", &["z"]),
        ])
        .unwrap();
        TagFilter::new(content)
    }

    pub(super) fn visible_slugs(filter: &TagFilter) -> Vec<&str> {
        filter.visible_entries().map(|e| e.slug.as_str()).collect()
    }
}

mod new {
    use super::*;

    #[test]
    fn test_new_shows_everything() {
        let filter = create_filter();

        assert_eq!(visible_slugs(&filter), vec!["a", "b", "c"]);
        assert!(!filter.is_filtered());
        assert_eq!(filter.visible_len(), filter.total_len());
    }

    #[test]
    fn test_new_empty_content() {
        let filter = TagFilter::new(ContentSet::new(vec![]).unwrap());

        assert_eq!(filter.visible_len(), 0);
    }
}

mod toggle_tag {
    use super::*;

    #[test]
    fn test_toggle_narrows_then_clear_restores() {
        let mut filter = create_filter();

        filter.toggle_tag("y");
        assert_eq!(visible_slugs(&filter), vec!["a", "b"]);

        filter.toggle_tag("x");
        assert_eq!(visible_slugs(&filter), vec!["a"]);

        filter.clear_all();
        assert_eq!(visible_slugs(&filter), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut filter = create_filter();
        filter.toggle_tag("x");

        filter.toggle_tag("z");
        filter.toggle_tag("z");

        assert_eq!(filter.selected_tags(), ["x".to_string()]);
        assert_eq!(visible_slugs(&filter), vec!["a"]);
    }

    #[test]
    fn test_toggle_matches_case_insensitively() {
        let mut filter = create_filter();

        filter.toggle_tag("Y");

        assert_eq!(visible_slugs(&filter), vec!["a", "b"]);
        assert!(filter.is_selected("Y"));
        assert!(!filter.is_selected("y"));
    }

    #[test]
    fn test_toggle_unknown_tag_hides_everything() {
        let mut filter = create_filter();

        filter.toggle_tag("nonexistent");

        assert_eq!(filter.visible_len(), 0);
        assert_eq!(filter.total_len(), 3);
    }

    #[test]
    fn test_toggle_keeps_selection_order() {
        let mut filter = create_filter();

        filter.toggle_tag("z");
        filter.toggle_tag("x");
        filter.toggle_tag("y");
        filter.toggle_tag("x");

        assert_eq!(filter.selected_tags(), ["z".to_string(), "y".to_string()]);
        assert_eq!(filter.selection_len(), 2);
    }

    #[test]
    fn test_toggle_does_not_touch_content() {
        let mut filter = create_filter();

        filter.toggle_tag("z");

        assert_eq!(filter.content().len(), 3);
        assert_eq!(filter.content().entries()[0].slug.as_str(), "a");
    }
}

mod notify {
    use super::*;

    #[test]
    fn test_on_change_fires_per_mutation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut filter = create_filter();
        filter.on_change(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        filter.toggle_tag("x");
        filter.toggle_tag("y");
        filter.clear_all();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_clear_all_on_empty_selection_is_silent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut filter = create_filter();
        filter.on_change(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        filter.clear_all();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(filter.visible_len(), 3);
    }
}
