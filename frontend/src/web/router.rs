//! 路由服务模块 - 核心引擎
//!
//! 管理"当前逻辑页面"这一份导航状态：
//! 通过 Signal 驱动界面更新，并持久化到 SessionStorage，
//! 页面刷新后仍停留在同一逻辑页面，浏览会话结束即清空。
//!
//! `navigate` 是无条件写入，不校验目标页面是否可达；
//! 可达性由渲染时的守卫 (`Page::gate`) 决定。

use leptos::prelude::*;

use super::route::Page;
use super::storage::{SessionStorage, StorageArea};

const STORAGE_PAGE_KEY: &str = "currentPage";

/// 从存储恢复上次的页面，没有记录时返回默认页面
pub(crate) fn load_page<S: StorageArea>(store: &S) -> Page {
    store
        .get(STORAGE_PAGE_KEY)
        .map(|name| Page::from_name(&name))
        .unwrap_or_default()
}

/// 持久化当前页面
pub(crate) fn store_page<S: StorageArea>(store: &S, page: Page) -> bool {
    store.set(STORAGE_PAGE_KEY, page.name())
}

/// 路由器服务
///
/// 封装所有导航操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与会话系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 请求的页面（只读信号）
    current_page: ReadSignal<Page>,
    /// 设置请求的页面（写入信号）
    set_page: WriteSignal<Page>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_page = load_page(&SessionStorage);
        let (current_page, set_page) = signal(initial_page);

        Self {
            current_page,
            set_page,
            is_authenticated,
        }
    }

    /// **导航：无条件写入并持久化**
    ///
    /// 不校验目标页面在当前认证状态下是否可达，
    /// 守卫在渲染时统一处理。
    pub fn navigate(&self, page: Page) {
        store_page(&SessionStorage, page);
        self.set_page.set(page);
    }

    /// 解析出实际渲染的页面（守卫之后）
    ///
    /// 响应式读取：请求页面或认证状态变化都会触发重新解析。
    /// 守卫生效时只覆盖渲染结果，存储中的请求页面保持原样。
    pub fn resolved_page(&self) -> Page {
        let requested = self.current_page.get();
        let is_auth = self.is_authenticated.get();
        let resolved = requested.gate(is_auth);

        if resolved != requested {
            if requested.requires_auth() && !is_auth {
                web_sys::console::log_1(
                    &format!("[Router] '{}' requires auth, rendering login.", requested).into(),
                );
            } else if requested.is_auth_page() && is_auth {
                web_sys::console::log_1(
                    &format!("[Router] already authenticated, overriding '{}'.", requested).into(),
                );
            }
        }

        resolved
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据守卫之后的页面渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 页面匹配函数：接收解析后的页面，返回对应视图
    matcher: fn(Page) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let page = router.resolved_page();
        matcher(page)
    }
}

#[cfg(test)]
mod tests;
