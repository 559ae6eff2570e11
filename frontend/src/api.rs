//! API 客户端模块
//!
//! 把类型化的端点定义 (`ApiRequest`) 发送到配置的后端地址，
//! 自动附带 Bearer 令牌，并把所有失败归一成 `ApiError`。

use gloo_net::http::{Request, RequestBuilder};
use minilinked_shared::ErrorBody;
use minilinked_shared::protocol::{ApiRequest, HttpMethod};

use crate::config;
use crate::session;

/// API 调用错误
///
/// 变体只在构造处区分来源，视图层统一通过 `to_string()`
/// 渲染消息，不对错误种类做分支。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络层失败（请求未得到响应）
    Network(String),
    /// 非 2xx 状态码，消息优先取服务端错误体的 message 字段
    Status { code: u16, message: String },
    /// 响应体解析失败
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "{}", message),
            ApiError::Status { message, .. } => write!(f, "{}", message),
            ApiError::Decode(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// API 客户端
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// 使用配置的后端地址创建客户端
    pub fn new() -> Self {
        Self::with_base_url(config::api_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个类型化请求并解析响应
    ///
    /// 每次调用时从 LocalStorage 读取令牌；
    /// GET 请求不携带请求体。
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<R::Response, ApiError> {
        let url = self.url(&req.path());

        let mut builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        builder = builder.header("Content-Type", "application/json");

        if let Some(token) = session::auth_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = Self::dispatch(builder, req)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let code = response.status();
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("HTTP error! status: {}", code),
            };
            return Err(ApiError::Status { code, message });
        }

        response
            .json::<R::Response>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn dispatch<R: ApiRequest>(
        builder: RequestBuilder,
        req: &R,
    ) -> Result<gloo_net::http::Response, gloo_net::Error> {
        match R::METHOD {
            HttpMethod::Get => builder.send().await,
            HttpMethod::Post => builder.json(req)?.send().await,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_only_the_message() {
        let network = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(network.to_string(), "Failed to fetch");

        let status = ApiError::Status {
            code: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(status.to_string(), "Invalid credentials");

        let fallback = ApiError::Status {
            code: 503,
            message: format!("HTTP error! status: {}", 503),
        };
        assert_eq!(fallback.to_string(), "HTTP error! status: 503");

        let decode = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(decode.to_string(), "expected value at line 1");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(api.url("/api/posts"), "http://localhost:5000/api/posts");
        assert_eq!(api.url("api/posts"), "http://localhost:5000/api/posts");
    }
}
