use super::*;
use crate::web::storage::tests::MemoryStorage;

// =========================================================
// 辅助函数
// =========================================================

fn test_user() -> User {
    User {
        id: "u1".to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        bio: None,
    }
}

// =========================================================
// hydrate 测试
// =========================================================

#[test]
fn hydrate_with_both_fields_is_authenticated() {
    let store = MemoryStorage::new();
    persist_session(&store, &test_user(), "jwt-token");

    let state = hydrate_session(&store);
    assert!(state.is_authenticated());
    assert!(!state.is_loading);
    assert_eq!(state.token.as_deref(), Some("jwt-token"));
    assert_eq!(state.user, Some(test_user()));
}

#[test]
fn hydrate_empty_store_is_anonymous() {
    let store = MemoryStorage::new();
    let state = hydrate_session(&store);

    assert!(!state.is_authenticated());
    assert!(!state.is_loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn hydrate_token_without_user_is_anonymous() {
    let store = MemoryStorage::new();
    store.set("token", "jwt-token");

    let state = hydrate_session(&store);
    assert!(!state.is_authenticated());
    // 不变量：不允许只有 token 没有 user 的半认证状态
    assert!(state.token.is_none());
}

#[test]
fn hydrate_user_without_token_is_anonymous() {
    let store = MemoryStorage::new();
    store.set("user", r#"{"id":"u1","name":"Ana","email":"ana@example.com"}"#);

    let state = hydrate_session(&store);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn hydrate_corrupt_user_json_is_anonymous() {
    let store = MemoryStorage::new();
    store.set("token", "jwt-token");
    store.set("user", "{not json");

    let state = hydrate_session(&store);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

// =========================================================
// persist / clear 测试
// =========================================================

#[test]
fn persist_writes_both_fixed_keys() {
    let store = MemoryStorage::new();
    assert!(persist_session(&store, &test_user(), "jwt-token"));

    assert_eq!(store.get("token").as_deref(), Some("jwt-token"));
    let raw = store.get("user").unwrap();
    let user: User = serde_json_wasm::from_str(&raw).unwrap();
    assert_eq!(user, test_user());
}

#[test]
fn clear_removes_both_fields() {
    let store = MemoryStorage::new();
    persist_session(&store, &test_user(), "jwt-token");

    clear_session(&store);
    assert!(store.get("token").is_none());
    assert!(store.get("user").is_none());

    // 注销后重新恢复必须是匿名状态
    let state = hydrate_session(&store);
    assert!(!state.is_authenticated());
}

// =========================================================
// 状态机测试
// =========================================================

#[test]
fn default_state_is_loading() {
    let state = SessionState::default();
    assert!(state.is_loading);
    assert!(!state.is_authenticated());
}

#[test]
fn authenticated_state_upholds_pairing_invariant() {
    let state = SessionState::authenticated(test_user(), "jwt-token".to_string());
    assert_eq!(state.user.is_some(), state.token.is_some());
    assert!(state.is_authenticated());

    let state = SessionState::anonymous();
    assert_eq!(state.user.is_some(), state.token.is_some());
    assert!(!state.is_authenticated());
}
