use crate::session::{logout, use_session};
use crate::web::route::Page;
use crate::web::router::use_router;
use leptos::prelude::*;

/// 顶部导航栏
///
/// 只在已认证页面渲染，当前页面的入口高亮显示。
#[component]
pub fn Navbar(current: Page) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let user_name = move || {
        session
            .state
            .with(|s| s.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        logout(&session);
        router.navigate(Page::Login);
    };

    let nav_class = move |page: Page| {
        if current == page {
            "btn btn-ghost btn-sm font-semibold underline underline-offset-4"
        } else {
            "btn btn-ghost btn-sm"
        }
    };

    view! {
        <div class="navbar bg-primary text-primary-content shadow-md">
            <div class="navbar-start">
                <span class="text-xl font-bold px-2">"Mini LinkedIn"</span>
            </div>
            <div class="navbar-end gap-1">
                <button class=move || nav_class(Page::Home) on:click=move |_| router.navigate(Page::Home)>
                    "Home"
                </button>
                <button class=move || nav_class(Page::Profile) on:click=move |_| router.navigate(Page::Profile)>
                    "Profile"
                </button>
                <span class="hidden md:inline text-sm px-2">
                    {move || format!("Welcome, {}!", user_name())}
                </span>
                <button on:click=on_logout class="btn btn-sm btn-outline border-primary-content text-primary-content">
                    "Logout"
                </button>
            </div>
        </div>
    }
}
