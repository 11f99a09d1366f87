use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::storage;

#[component]
pub(crate) fn NavBar(state: AppState) -> impl IntoView {
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let user_text = {
        let state = state.clone();
        move || {
            state
                .user
                .get()
                .map(|u| format!("{} {} ({})", u.name, u.surname, u.email))
                .unwrap_or_else(|| "anonymous".to_string())
        }
    };

    let on_login = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            state.clear_error();

            let email = login_email.get().trim().to_string();
            // passwords are sent as typed; whitespace can be part of them
            let password = login_password.get();

            if email.is_empty() || password.trim().is_empty() {
                state.set_error("Fill in both login fields");
                return;
            }

            state.loading.set(true);
            let state2 = state.clone();
            spawn_local(async move {
                match api::login(&email, &password).await {
                    Ok(auth) => {
                        if let Err(err) = storage::save_token(&auth.access_token) {
                            state2.set_error(err);
                        } else if let Err(err) = storage::save_user(&auth.user) {
                            state2.set_error(err);
                        } else {
                            state2.token.set(Some(auth.access_token));
                            state2.user.set(Some(auth.user));
                            state2.clear_error();
                        }
                    }
                    Err(err) => state2.set_error(err.to_string()),
                }
                state2.loading.set(false);
            });
        }
    };

    let on_logout = {
        let state = state.clone();
        move |_| {
            if let Err(err) = storage::clear_token() {
                state.set_error(err);
                return;
            }
            if let Err(err) = storage::clear_user() {
                state.set_error(err);
                return;
            }
            state.token.set(None);
            state.user.set(None);
            state.clear_error();
        }
    };

    let state_for_login_show = state.clone();
    let state_for_logout_show = state.clone();
    let state_for_login_button = state.clone();

    view! {
        <nav class="nav-bar">
            <h1>"Forum"</h1>
            <p>"Current user: " {user_text}</p>

            <Show when=move || !state_for_login_show.is_authenticated()>
                <form class="login-form" on:submit=on_login.clone()>
                    <input
                        placeholder="email"
                        on:input=move |ev| login_email.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="password"
                        type="password"
                        on:input=move |ev| login_password.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled={
                        let state = state_for_login_button.clone();
                        move || state.loading.get()
                    }>
                        "Login"
                    </button>
                </form>
            </Show>

            <Show when=move || state_for_logout_show.is_authenticated()>
                <button
                    on:click=on_logout.clone()
                    disabled={
                        let state = state.clone();
                        move || state.loading.get()
                    }
                >
                    "Logout"
                </button>
            </Show>

            <hr style="margin: 1rem 0;" />
        </nav>
    }
}
