//! Property-based tests for link store operations.
//!
//! Inserting then listing returns exactly what was submitted, and deleting
//! identities that do not exist never changes the store.

use linkboard::database::Database;
use linkboard::managers::link_store::{LinkStore, LinkStoreTrait};
use linkboard::services::query_builder::build_listing;
use linkboard::services::validator::validate_submission;
use linkboard::types::config::AppConfig;
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Tag-free descriptions within the length limit.
fn arb_description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?'&-]{0,250}"
}

fn setup() -> Database {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    db.ensure_schema(&AppConfig::default_seed_categories())
        .expect("Failed to prepare schema");
    db
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn insert_then_list_returns_same_link(
        url in arb_url(),
        description in arb_description(),
    ) {
        let db = setup();
        let store = LinkStore::new(db.connection());

        let link = validate_submission(&store, &url, &description, "").unwrap();
        let id = store.insert_link(&link).unwrap();

        let links = store.list_links(&build_listing(None, None)).unwrap();
        let found = links.iter().find(|l| l.id == id);
        prop_assert!(found.is_some(), "inserted link {} missing from listing", id);

        let found = found.unwrap();
        prop_assert_eq!(&found.url, &url);
        prop_assert_eq!(&found.description, &description);
        prop_assert_eq!(found.category_id, Some(1));
        prop_assert_eq!(found.category_name.as_deref(), Some("General"));
    }

    #[test]
    fn deleting_missing_identity_changes_nothing(
        urls in proptest::collection::vec(arb_url(), 0..6),
        missing_offset in 1i64..1000,
    ) {
        let db = setup();
        let store = LinkStore::new(db.connection());

        let mut max_id = 0;
        for url in &urls {
            let link = validate_submission(&store, url, "", "").unwrap();
            max_id = store.insert_link(&link).unwrap();
        }
        let before = store.count_links().unwrap();

        let missing = max_id + missing_offset;
        prop_assert!(store.delete_link(missing).is_ok());
        prop_assert!(store.delete_link(missing).is_ok());
        prop_assert_eq!(store.count_links().unwrap(), before);
    }

    #[test]
    fn category_filter_partitions_listing(
        categories in proptest::collection::vec(1i64..=5, 1..10),
    ) {
        let db = setup();
        let store = LinkStore::new(db.connection());

        for (i, category) in categories.iter().enumerate() {
            let url = format!("https://site{}.example", i);
            let link = validate_submission(&store, &url, "", &category.to_string()).unwrap();
            store.insert_link(&link).unwrap();
        }

        let all = store.list_links(&build_listing(None, Some("all"))).unwrap();
        prop_assert_eq!(all.len(), categories.len());

        let mut filtered_total = 0;
        for category in 1..=5i64 {
            let filtered = store
                .list_links(&build_listing(None, Some(&category.to_string())))
                .unwrap();
            prop_assert!(filtered.iter().all(|l| l.category_id == Some(category)));
            filtered_total += filtered.len();
        }
        prop_assert_eq!(filtered_total, categories.len());
    }
}
