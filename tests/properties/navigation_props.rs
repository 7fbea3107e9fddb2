use proptest::prelude::*;
use skillmap::search::navigation::{NavKey, NavState, RecordingHandler, SearchBox};
use skillmap::search::SearchEngine;

use crate::arb_employees;

fn arb_key() -> impl Strategy<Value = NavKey> {
    prop_oneof![
        4 => Just(NavKey::Down),
        4 => Just(NavKey::Up),
        1 => Just(NavKey::Enter),
        1 => Just(NavKey::Escape),
    ]
}

proptest! {
    #[test]
    fn test_highlight_stays_in_range(
        employees in arb_employees(),
        query in "[a-z]{1,3}",
        keys in prop::collection::vec(arb_key(), 0..20),
    ) {
        let mut search_box = SearchBox::new(SearchEngine::default(), &employees);
        search_box.set_query(query);
        let mut handler = RecordingHandler::new(true);

        for key in keys {
            let committed = search_box.handle_key(key, &mut handler);
            match search_box.state() {
                NavState::Open { selected: Some(i) } => {
                    prop_assert!(i < search_box.results().len());
                }
                NavState::Open { selected: None } => {
                    prop_assert!(!search_box.results().is_empty());
                }
                NavState::Closed => {}
            }
            if committed.is_some() || key == NavKey::Escape {
                prop_assert_eq!(search_box.state(), NavState::Closed);
                prop_assert!(search_box.query().is_empty());
            }
        }
    }

    #[test]
    fn test_enter_on_open_box_always_commits(employees in arb_employees(), query in "[a-z]{1,3}") {
        let mut search_box = SearchBox::new(SearchEngine::default(), &employees);
        search_box.set_query(query);
        let mut handler = RecordingHandler::new(false);
        let was_open = matches!(search_box.state(), NavState::Open { .. });

        let committed = search_box.handle_key(NavKey::Enter, &mut handler);
        prop_assert_eq!(committed.is_some(), was_open);
    }
}
