use crate::api::ApiClient;
use crate::components::navbar::Navbar;
use crate::components::post_card::PostCard;
use crate::web::route::Page;
use leptos::prelude::*;
use leptos::task::spawn_local;
use minilinked_shared::protocol::ListPostsRequest;
use minilinked_shared::{CreatePostRequest, Post};

/// 新动态插到列表最前面，保持最新在前的顺序
fn prepend_post(list: &mut Vec<Post>, post: Post) {
    list.insert(0, post);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = StoredValue::new(ApiClient::new());

    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);
    let (posting, set_posting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (draft, set_draft) = signal(String::new());

    // 挂载时拉取一次信息流
    Effect::new(move |_| {
        let api = api.get_value();
        spawn_local(async move {
            match api.send(&ListPostsRequest).await {
                Ok(list) => set_posts.set(list),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error fetching posts: {}", e).into(),
                    );
                    set_error_msg.set(Some("Failed to fetch posts".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let on_create = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 纯空白内容在发出任何请求之前就被拒绝
        let Some(request) = CreatePostRequest::from_input(&draft.get_untracked()) else {
            return;
        };

        set_posting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.send(&request).await {
                Ok(created) => {
                    // 不重新拉取，直接更新本地列表
                    set_posts.update(|list| prepend_post(list, created));
                    set_draft.set(String::new());
                    set_error_msg.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error creating post: {}", e).into());
                    set_error_msg.set(Some("Failed to create post".to_string()));
                }
            }
            set_posting.set(false);
        });
    };

    let draft_is_blank = move || draft.with(|d| d.trim().is_empty());

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar current=Page::Home />

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex flex-col items-center justify-center py-24 gap-4">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        <p class="text-base-content/60">"Loading posts..."</p>
                    </div>
                }
            >
                <div class="max-w-3xl mx-auto px-4 py-8 space-y-6">
                    <h1 class="text-2xl font-bold">"Home Feed"</h1>

                    <div class="card bg-base-100 shadow">
                        <form class="card-body gap-4" on:submit=on_create>
                            <h2 class="card-title text-lg">"What's on your mind?"</h2>
                            <textarea
                                rows="3"
                                placeholder="Share your thoughts..."
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                prop:value=draft
                                class="textarea textarea-bordered w-full"
                            ></textarea>
                            <div class="card-actions justify-end">
                                <button
                                    class="btn btn-primary btn-sm"
                                    disabled=move || posting.get() || draft_is_blank()
                                >
                                    {move || if posting.get() { "Posting..." } else { "Post" }}
                                </button>
                            </div>
                        </form>
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <Show
                        when=move || posts.with(|p| !p.is_empty())
                        fallback=|| view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body items-center text-base-content/60">
                                    "No posts yet. Be the first to share something!"
                                </div>
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
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_post(id: &str) -> Post {
        let raw = format!(
            r#"{{"id":"{}","content":"hi","author":{{"id":"u1","name":"Ana","email":"ana@example.com"}},"createdAt":"2024-05-01T12:30:00Z"}}"#,
            id
        );
        serde_json_wasm::from_str(&raw).unwrap()
    }

    #[test]
    fn prepend_keeps_newest_first() {
        let mut feed = vec![test_post("p1")];

        prepend_post(&mut feed, test_post("p2"));
        prepend_post(&mut feed, test_post("p3"));

        let ids: Vec<&str> = feed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p3", "p2", "p1"]);
    }
}
