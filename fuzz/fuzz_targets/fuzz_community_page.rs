#![no_main]

use libfuzzer_sys::fuzz_target;

use collection_cards::models::CommunityQuery;
use collection_cards::view::{CollectionsPanel, PageState};

fuzz_target!(|data: &[u8]| {
    let query: CommunityQuery = match serde_json::from_slice(data) {
        Ok(q) => q,
        Err(_) => return,
    };

    // Building the page should never panic or fail for a parsed query
    let state = PageState::from_query(&query).expect("page state");

    if let PageState::Ready(page) = state {
        let count = query
            .community
            .as_ref()
            .map(|c| c.collections.len())
            .unwrap_or(0);
        match page.collections {
            CollectionsPanel::List { cards, .. } => assert_eq!(cards.len(), count),
            CollectionsPanel::Empty { .. } => assert_eq!(count, 0),
        }
    }
});
