use crate::{AuthResponse, CreatePostRequest, LoginRequest, Post, RegisterRequest};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::borrow::Cow;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// GET endpoints never serialize their payload as a body; the payload type
/// only carries whatever the path needs (e.g. a user id).
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path. Borrowed for fixed endpoints, owned when interpolated.
    fn path(&self) -> Cow<'static, str>;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/login")
    }
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/auth/register")
    }
}

/// List the whole feed, newest first (server-side ordering).
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPostsRequest;

impl ApiRequest for ListPostsRequest {
    type Response = Vec<Post>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/posts")
    }
}

impl ApiRequest for CreatePostRequest {
    type Response = Post;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/api/posts")
    }
}

/// List a single user's posts.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserPostsRequest {
    pub user_id: String,
}

impl ApiRequest for UserPostsRequest {
    type Response = Vec<Post>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/posts/user/{}", self.user_id))
    }
}
