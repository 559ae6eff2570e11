use super::*;
use crate::web::storage::tests::MemoryStorage;

#[test]
fn load_page_defaults_to_home_when_nothing_stored() {
    let store = MemoryStorage::new();
    assert_eq!(load_page(&store), Page::Home);
}

#[test]
fn store_then_load_round_trips() {
    let store = MemoryStorage::new();
    assert!(store_page(&store, Page::Register));
    assert_eq!(load_page(&store), Page::Register);

    // 后写覆盖先写
    assert!(store_page(&store, Page::Profile));
    assert_eq!(load_page(&store), Page::Profile);
}

#[test]
fn load_page_tolerates_garbage_values() {
    let store = MemoryStorage::new();
    store.set(STORAGE_PAGE_KEY, "not-a-page");
    assert_eq!(load_page(&store), Page::Home);
}

#[test]
fn stored_page_is_persisted_under_fixed_key() {
    let store = MemoryStorage::new();
    store_page(&store, Page::Login);
    assert_eq!(store.get("currentPage").as_deref(), Some("login"));
}
