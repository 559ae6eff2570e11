use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;

#[cfg(test)]
mod tests;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户信息，由服务端签发，客户端只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl User {
    /// 头像占位字符：取名字首字符的大写形式，名字为空时退回 'U'
    pub fn avatar_initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// 单条动态
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub content: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// 创建时间的毫秒时间戳，交给 JS 侧做本地化格式化
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }
}

// =========================================================
// 请求 / 响应载荷 (Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub bio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
}

impl CreatePostRequest {
    /// 从输入框内容构造载荷
    ///
    /// 首尾空白会被裁剪；空内容或纯空白内容返回 None，
    /// 调用方在发起任何请求之前就应当放弃提交。
    pub fn from_input(input: &str) -> Option<Self> {
        let content = input.trim();
        if content.is_empty() {
            None
        } else {
            Some(Self {
                content: content.to_string(),
            })
        }
    }
}

/// 登录 / 注册成功后的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// 服务端错误响应体，只取 message 字段，其余字段忽略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
