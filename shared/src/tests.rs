use super::*;
use crate::protocol::{ApiRequest, HttpMethod, ListPostsRequest, UserPostsRequest};

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
// 序列化格式
// =========================================================

#[test]
fn post_parses_camel_case_payload() {
    let raw = r#"{
        "id": "p1",
        "content": "hi",
        "author": { "id": "u1", "name": "Ana", "email": "ana@example.com" },
        "createdAt": "2024-05-01T12:30:00Z"
    }"#;

    let post: Post = serde_json::from_str(raw).unwrap();
    assert_eq!(post.id, "p1");
    assert_eq!(post.content, "hi");
    assert_eq!(post.author, test_user());
    assert_eq!(post.created_at_millis(), 1_714_566_600_000);
}

#[test]
fn post_serializes_created_at_as_camel_case() {
    let post = Post {
        id: "p1".to_string(),
        content: "hi".to_string(),
        author: test_user(),
        created_at: DateTime::parse_from_rfc3339("2024-05-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc),
    };

    let raw = serde_json::to_string(&post).unwrap();
    assert!(raw.contains("\"createdAt\""));
    assert!(!raw.contains("\"created_at\""));
    // bio 为 None 时不应出现在序列化结果中
    assert!(!raw.contains("\"bio\""));
}

#[test]
fn error_body_ignores_unknown_fields() {
    let raw = r#"{ "message": "Invalid credentials", "code": 401, "details": {} }"#;
    let body: ErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.message, "Invalid credentials");
}

#[test]
fn error_body_requires_message_field() {
    let raw = r#"{ "error": "something else entirely" }"#;
    assert!(serde_json::from_str::<ErrorBody>(raw).is_err());
}

#[test]
fn auth_response_carries_user_and_token() {
    let raw = r#"{
        "user": { "id": "u1", "name": "Ana", "email": "ana@example.com", "bio": "hello" },
        "token": "jwt-token"
    }"#;

    let auth: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(auth.token, "jwt-token");
    assert_eq!(auth.user.bio.as_deref(), Some("hello"));
}

// =========================================================
// 领域操作
// =========================================================

#[test]
fn avatar_initial_uppercases_first_char() {
    let mut user = test_user();
    assert_eq!(user.avatar_initial(), 'A');

    user.name = "bob".to_string();
    assert_eq!(user.avatar_initial(), 'B');
}

#[test]
fn avatar_initial_falls_back_for_empty_name() {
    let mut user = test_user();
    user.name = String::new();
    assert_eq!(user.avatar_initial(), 'U');
}

#[test]
fn create_post_trims_content() {
    let req = CreatePostRequest::from_input("  hello world \n").unwrap();
    assert_eq!(req.content, "hello world");
}

#[test]
fn create_post_rejects_empty_and_whitespace_input() {
    assert!(CreatePostRequest::from_input("").is_none());
    assert!(CreatePostRequest::from_input("   \t\n").is_none());
}

// =========================================================
// 协议定义
// =========================================================

#[test]
fn endpoint_paths_and_methods() {
    let login = LoginRequest {
        email: "a@b.c".to_string(),
        password: "pw".to_string(),
    };
    assert_eq!(login.path(), "/api/auth/login");
    assert_eq!(LoginRequest::METHOD, HttpMethod::Post);

    let register = RegisterRequest {
        name: "Ana".to_string(),
        email: "a@b.c".to_string(),
        password: "pw".to_string(),
        bio: String::new(),
    };
    assert_eq!(register.path(), "/api/auth/register");
    assert_eq!(RegisterRequest::METHOD, HttpMethod::Post);

    assert_eq!(ListPostsRequest.path(), "/api/posts");
    assert_eq!(ListPostsRequest::METHOD, HttpMethod::Get);

    let create = CreatePostRequest::from_input("hi").unwrap();
    assert_eq!(create.path(), "/api/posts");
    assert_eq!(CreatePostRequest::METHOD, HttpMethod::Post);
}

#[test]
fn user_posts_path_interpolates_id() {
    let req = UserPostsRequest {
        user_id: "u42".to_string(),
    };
    assert_eq!(req.path(), "/api/posts/user/u42");
    assert_eq!(UserPostsRequest::METHOD, HttpMethod::Get);
}
