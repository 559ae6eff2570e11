//! 会话模块
//!
//! 管理当前登录用户与凭据令牌，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。
//!
//! 状态机：loading -> { anonymous, authenticated }。
//! 令牌与用户信息持久化在 LocalStorage，页面刷新后恢复；
//! 持久化的令牌被无条件信任，直到某次 API 调用以错误收场。

use crate::web::storage::{LocalStorage, StorageArea};
use leptos::prelude::*;
use minilinked_shared::User;

const STORAGE_TOKEN_KEY: &str = "token";
const STORAGE_USER_KEY: &str = "user";

/// 会话状态
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// 当前登录用户（仅在认证成功后存在）
    pub user: Option<User>,
    /// 凭据令牌
    pub token: Option<String>,
    /// 是否还在从存储恢复会话
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: true,
        }
    }
}

impl SessionState {
    /// 是否已认证
    ///
    /// user 与 token 要么同时存在要么同时为空，
    /// 恢复与写入路径都维护这一不变量。
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: false,
        }
    }

    fn authenticated(user: User, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_loading: false,
        }
    }
}

/// 会话上下文
///
/// 包含读写信号，在应用根部创建后通过 Context 注入组件树，
/// 所有写入都经由 `login` / `logout` / `init_session`。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建新的会话上下文，初始处于 loading 状态
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

// =========================================================
// 持久化逻辑 (存储无关，可注入内存实现测试)
// =========================================================

/// 从存储恢复会话状态
///
/// 令牌与用户 JSON 必须同时存在且用户可解析，否则按匿名处理，
/// 不保留半套残留状态。
pub(crate) fn hydrate_session<S: StorageArea>(store: &S) -> SessionState {
    let token = store.get(STORAGE_TOKEN_KEY);
    let user = store
        .get(STORAGE_USER_KEY)
        .and_then(|raw| serde_json_wasm::from_str::<User>(&raw).ok());

    match (token, user) {
        (Some(token), Some(user)) => SessionState::authenticated(user, token),
        _ => SessionState::anonymous(),
    }
}

/// 持久化会话的两个字段
pub(crate) fn persist_session<S: StorageArea>(store: &S, user: &User, token: &str) -> bool {
    match serde_json_wasm::to_string(user) {
        Ok(raw) => store.set(STORAGE_TOKEN_KEY, token) && store.set(STORAGE_USER_KEY, &raw),
        Err(_) => false,
    }
}

/// 清除持久化的会话字段
pub(crate) fn clear_session<S: StorageArea>(store: &S) {
    store.delete(STORAGE_TOKEN_KEY);
    store.delete(STORAGE_USER_KEY);
}

// =========================================================
// 会话操作
// =========================================================

/// 初始化会话状态
///
/// 同步地从 LocalStorage 恢复令牌与用户信息，
/// 完成后 loading 结束，应用才开始渲染页面。
pub fn init_session(ctx: &SessionContext) {
    let hydrated = hydrate_session(&LocalStorage);
    ctx.set_state.set(hydrated);
}

/// 登录：持久化并更新内存状态
pub fn login(ctx: &SessionContext, user: User, token: String) {
    persist_session(&LocalStorage, &user, &token);
    ctx.set_state.set(SessionState::authenticated(user, token));
}

/// 注销：清除持久化字段并回到匿名状态
pub fn logout(ctx: &SessionContext) {
    clear_session(&LocalStorage);
    ctx.set_state.set(SessionState::anonymous());
}

/// 当前持久化的令牌
///
/// API 客户端在每次请求时读取，而不是在登录时固化，
/// 与会话信号本身解耦。
pub fn auth_token() -> Option<String> {
    LocalStorage.get(STORAGE_TOKEN_KEY)
}

#[cfg(test)]
mod tests;
