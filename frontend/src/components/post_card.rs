use leptos::prelude::*;
use minilinked_shared::Post;
use wasm_bindgen::JsValue;

/// 本地化格式化创建时间，形如 "5/1/2024 at 12:30 PM"
///
/// 日期与时间都跟随浏览器的默认区域设置。
fn format_timestamp(millis: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(millis as f64));

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"hour".into(), &"2-digit".into());
    let _ = js_sys::Reflect::set(&options, &"minute".into(), &"2-digit".into());

    let day = date.to_locale_date_string("default", &JsValue::UNDEFINED);
    // 只包含 hour/minute 的选项让 toLocaleString 仅输出时间部分
    let time = date.to_locale_string("default", &options);

    format!("{} at {}", String::from(day), String::from(time))
}

/// 单条动态卡片，纯渲染
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let initial = post.author.avatar_initial().to_string();
    let author_name = post.author.name.clone();
    let date_label = format_timestamp(post.created_at_millis());

    view! {
        <div class="card bg-base-100 shadow border border-base-300">
            <div class="card-body p-6 gap-4">
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content rounded-full w-10">
                            <span>{initial}</span>
                        </div>
                    </div>
                    <div>
                        <h3 class="font-semibold">{author_name}</h3>
                        <p class="text-xs text-base-content/60">{date_label}</p>
                    </div>
                </div>
                <p class="whitespace-pre-wrap text-base-content/90">{post.content}</p>
            </div>
        </div>
    }
}
