//! Mini LinkedIn 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 页面定义（领域模型）
//! - `web::router`: 导航服务（核心引擎）
//! - `session`: 会话状态管理
//! - `api`: 类型化 API 客户端
//! - `components`: UI 组件层

mod api;
mod config;
mod session;

mod components {
    pub mod home;
    pub mod login;
    mod navbar;
    mod post_card;
    pub mod profile;
    pub mod register;
}

// 原生 Web API 封装模块
pub(crate) mod web;

use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::session::{SessionContext, init_session};

use leptos::prelude::*;

use web::route::Page;
use web::router::{Router, RouterOutlet};

/// 页面匹配函数
///
/// 根据守卫之后的页面返回对应的视图组件。
fn route_matcher(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::Login => view! { <LoginPage /> }.into_any(),
        Page::Register => view! { <RegisterPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);

    // 2. 同步恢复持久化的会话
    init_session(&session_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦）
    let is_authenticated = session_ctx.is_authenticated_signal();
    let is_loading = move || session_ctx.state.get().is_loading;

    view! {
        // 会话恢复完成之前整页只渲染加载指示，不渲染任何子页面
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="flex flex-col items-center justify-center min-h-screen gap-4 bg-base-200">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                    <p class="text-base-content/60">"Loading..."</p>
                </div>
            }
        >
            <Router is_authenticated=is_authenticated>
                <RouterOutlet matcher=route_matcher />
            </Router>
        </Show>
    }
}
