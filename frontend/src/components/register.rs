use crate::api::ApiClient;
use crate::session::{login, use_session};
use crate::web::route::Page;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use minilinked_shared::{AuthResponse, RegisterRequest};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let api = ApiClient::new();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (bio, set_bio) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let request = RegisterRequest {
                name: name.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
                bio: bio.get_untracked(),
            };
            match api.send(&request).await {
                Ok(AuthResponse { user, token }) => {
                    login(&session, user, token);
                    router.navigate(Page::Home);
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-2xl font-bold">"Join Mini LinkedIn"</h1>
                    <p class="text-base-content/70 mt-2">
                        "Already have an account? "
                        <button
                            type="button"
                            class="link link-primary font-medium"
                            on:click=move |_| router.navigate(Page::Login)
                        >
                            "Sign in here"
                        </button>
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Full Name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                autocomplete="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="new-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="bio">
                                <span class="label-text">"Bio"</span>
                            </label>
                            <textarea
                                id="bio"
                                rows="3"
                                placeholder="Tell us about yourself..."
                                on:input=move |ev| set_bio.set(event_target_value(&ev))
                                prop:value=bio
                                class="textarea textarea-bordered"
                            ></textarea>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Create account".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
