use leptos::prelude::*;

use crate::api;
use crate::components::nav_bar::NavBar;
use crate::components::signup_form::SignupForm;
use crate::components::topics_grid::TopicsGrid;
use crate::state::AppState;
use crate::storage;

fn load_topics(state: AppState) {
    state.loading.set(true);
    state.clear_error();

    leptos::task::spawn_local(async move {
        match api::list_topics().await {
            Ok(topics) => state.topics.set(topics),
            Err(err) => state.set_error(err.to_string()),
        }
        state.loading.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    if let Some(token) = storage::load_token() {
        state.token.set(Some(token));
    }
    if let Some(user) = storage::load_user() {
        state.user.set(Some(user));
    }

    load_topics(state.clone());

    let error_text = {
        let state = state.clone();
        move || state.error.get().unwrap_or_default()
    };

    let on_refresh = Callback::new({
        let state = state.clone();
        move |_| load_topics(state.clone())
    });

    view! {
        <main class="page">
            <section class="container">
                <NavBar state=state.clone() />

                <Show when={
                    let state = state.clone();
                    move || !state.error.get().unwrap_or_default().is_empty()
                }>
                    <div class="error-banner">
                        <strong>"Error: "</strong>
                        {error_text.clone()}
                    </div>
                </Show>

                <Show when={
                    let state = state.clone();
                    move || !state.is_authenticated()
                }>
                    <SignupForm state=state.clone() />
                </Show>

                <TopicsGrid state=state.clone() on_refresh=on_refresh />
            </section>
        </main>
    }
}
