use crate::api::ApiClient;
use crate::components::navbar::Navbar;
use crate::components::post_card::PostCard;
use crate::session::use_session;
use crate::web::route::Page;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use minilinked_shared::Post;
use minilinked_shared::protocol::UserPostsRequest;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let api = ApiClient::new();

    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 只跟踪用户 id：挂载时拉取一次，登录身份变化时重新拉取
    let user_id = Memo::new(move |_| {
        session
            .state
            .with(|s| s.user.as_ref().map(|u| u.id.clone()))
    });

    Effect::new({
        let api = api.clone();
        move |_| {
            let Some(id) = user_id.get() else {
                return;
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.send(&UserPostsRequest { user_id: id }).await {
                    Ok(list) => set_posts.set(list),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Error fetching user posts: {}", e).into(),
                        );
                        set_error_msg.set(Some("Failed to fetch your posts".to_string()));
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let profile_user = move || session.state.get().user;
    let post_count = move || posts.with(|p| p.len());

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar current=Page::Profile />

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex flex-col items-center justify-center py-24 gap-4">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        <p class="text-base-content/60">"Loading profile..."</p>
                    </div>
                }
            >
                <div class="max-w-4xl mx-auto px-4 py-8 space-y-6">
                    {move || profile_user().map(|user| {
                        let initial = user.avatar_initial().to_string();
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body flex-row items-center gap-6">
                                    <div class="avatar placeholder">
                                        <div class="bg-primary text-primary-content rounded-full w-20 text-2xl">
                                            <span>{initial}</span>
                                        </div>
                                    </div>
                                    <div>
                                        <h1 class="text-2xl font-bold">{user.name.clone()}</h1>
                                        <p class="text-base-content/60">{user.email.clone()}</p>
                                        {user.bio.clone().map(|bio| view! {
                                            <p class="mt-2 max-w-xl text-base-content/80">{bio}</p>
                                        })}
                                    </div>
                                </div>
                            </div>
                        }
                    })}

                    <div class="card bg-base-100 shadow">
                        <div class="card-body gap-4">
                            <h2 class="card-title">
                                {move || format!("My Posts ({})", post_count())}
                            </h2>

                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <Show
                                when=move || posts.with(|p| !p.is_empty())
                                fallback=move || view! {
                                    <div class="text-center py-8 space-y-2">
                                        <p class="text-base-content/60">
                                            "You haven't posted anything yet."
                                        </p>
                                        <button
                                            type="button"
                                            class="link link-primary font-medium"
                                            on:click=move |_| router.navigate(Page::Home)
                                        >
                                            "Create your first post"
                                        </button>
                                    </div>
                                }
                            >
                                <div class="space-y-4">
                                    <For
                                        each=move || posts.get()
                                        key=|post| post.id.clone()
                                        children=move |post| view! { <PostCard post=post /> }
                                    />
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
