use leptos::prelude::*;

use crate::state::AppState;

/// Formats an RFC 3339 timestamp with the browser locale, falling back to the
/// raw value when the string does not parse as a date.
fn format_created_at(raw: &str) -> String {
    let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if parsed.get_time().is_nan() {
        return raw.to_string();
    }

    parsed
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[component]
pub(crate) fn TopicsGrid(state: AppState, on_refresh: Callback<()>) -> impl IntoView {
    let state_for_count = state.clone();
    let state_for_each = state.clone();

    view! {
        <h2>"Topics"</h2>
        <button on:click=move |_| on_refresh.run(()) disabled=move || state.loading.get()>
            "Refresh topics"
        </button>

        <p style="margin-top: 0.5rem;">
            "Loaded: "
            {move || state_for_count.topics.get().len()}
        </p>

        <ul class="topics-grid">
            <For
                each=move || state_for_each.topics.get()
                key=|topic| topic.id
                children=move |topic| {
                    let tags_text = if topic.tags.is_empty() {
                        "no tags".to_string()
                    } else {
                        topic.tags.join(", ")
                    };
                    let created_text = format_created_at(&topic.created_at);

                    view! {
                        <li class="topic-card" style="margin-bottom: 0.5rem;">
                            <strong>{topic.title.clone()}</strong>
                            <div>{topic.content.clone()}</div>
                            <small>{format!("tags: {tags_text}")}</small>
                            <small>
                                {format!(
                                    "author_id={}, created {}",
                                    topic.author_id, created_text
                                )}
                            </small>
                        </li>
                    }
                }
            />
        </ul>
    }
}
