//! Store Tests
//!
//! Covers the record store contract: duplicate detection, ordering of
//! `list`, idempotent delete, and behaviour under concurrent callers.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::errors::StoreError;
    use crate::state::item::Item;
    use crate::state::store::MemStore;
    use crate::state::AppState;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    // ============================================================
    // CREATE / LIST
    // ============================================================

    #[test]
    fn test_create_then_list_contains_record() {
        let store = MemStore::new();
        store.create(Item::new("1", "foo")).unwrap();

        assert_eq!(store.list(), vec![Item::new("1", "foo")]);
    }

    #[test]
    fn test_duplicate_create_fails_and_leaves_store_unchanged() {
        let store = MemStore::new();
        store.create(Item::new("1", "foo")).unwrap();

        let err = store.create(Item::new("1", "other")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("1".to_string()));
        assert_eq!(err.to_string(), "duplicate ID");

        // First write wins, nothing partially replaced
        assert_eq!(store.list(), vec![Item::new("1", "foo")]);
    }

    #[test]
    fn test_list_is_sorted_regardless_of_insertion_order() {
        let store = MemStore::new();
        store.create(Item::new("b", "second")).unwrap();
        store.create(Item::new("a", "first")).unwrap();

        assert_eq!(ids(&store.list()), vec!["a", "b"]);
    }

    #[test]
    fn test_list_order_is_lexicographic_not_numeric() {
        let store = MemStore::new();
        for id in ["10", "9", "1", "B", "a"] {
            store.create(Item::new(id, "x")).unwrap();
        }

        // Byte order: digits < uppercase < lowercase, "10" < "9"
        assert_eq!(ids(&store.list()), vec!["1", "10", "9", "B", "a"]);
    }

    #[test]
    fn test_list_on_empty_store_is_empty() {
        let store: MemStore<Item> = MemStore::new();
        assert!(store.list().is_empty());
        assert_eq!(store.len(), 0);
    }

    // ============================================================
    // DELETE
    // ============================================================

    #[test]
    fn test_delete_removes_entry() {
        let store = MemStore::new();
        store.create(Item::new("1", "foo")).unwrap();
        store.create(Item::new("2", "bar")).unwrap();

        store.delete("1");

        assert_eq!(store.list(), vec![Item::new("2", "bar")]);
    }

    #[test]
    fn test_delete_of_absent_id_is_noop() {
        let store = MemStore::new();
        store.create(Item::new("1", "foo")).unwrap();

        store.delete("missing");
        store.delete("missing");

        assert_eq!(store.list(), vec![Item::new("1", "foo")]);
    }

    #[test]
    fn test_delete_then_create_reuses_id() {
        let store = MemStore::new();
        store.create(Item::new("1", "foo")).unwrap();
        store.delete("1");

        store.create(Item::new("1", "again")).unwrap();
        assert_eq!(store.list(), vec![Item::new("1", "again")]);
    }

    // ============================================================
    // CONCURRENCY
    // ============================================================

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_admit_exactly_one() {
        let store = Arc::new(MemStore::new());

        let handles: Vec<_> = (0..32)
            .map(|n| {
                let store = store.clone();
                tokio::task::spawn_blocking(move || {
                    store.create(Item::new("same", format!("writer {}", n)))
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_distinct_creates_are_all_kept() {
        let store = Arc::new(MemStore::new());

        let handles: Vec<_> = (0..50)
            .map(|n| {
                let store = store.clone();
                tokio::task::spawn_blocking(move || {
                    store.create(Item::new(format!("id{:02}", n), "x"))
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let listed = store.list();
        assert_eq!(listed.len(), 50);
        assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
    }

    // ============================================================
    // SEEDING
    // ============================================================

    #[test]
    fn test_seed_skips_invalid_and_duplicate_items() {
        let state = AppState::with_seed(vec![
            Item::new("1", "foo"),
            Item::new("1", "dup"),
            Item::new("!!", "bad id"),
            Item::new("2", ""),
            Item::new("3", "baz"),
        ]);

        assert_eq!(
            state.store.list(),
            vec![Item::new("1", "foo"), Item::new("3", "baz")]
        );
    }
}
