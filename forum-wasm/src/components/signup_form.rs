use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::state::AppState;
use crate::storage;

/// Signup is only sent when every field carries a non-blank value.
fn validate_signup_fields(
    name: &str,
    surname: &str,
    email: &str,
    password: &str,
) -> Result<(), &'static str> {
    if name.trim().is_empty()
        || surname.trim().is_empty()
        || email.trim().is_empty()
        || password.trim().is_empty()
    {
        return Err("Fill in all signup fields");
    }
    Ok(())
}

#[component]
pub(crate) fn SignupForm(state: AppState) -> impl IntoView {
    let reg_name = RwSignal::new(String::new());
    let reg_surname = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());

    let on_register = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            state.clear_error();

            let name = reg_name.get().trim().to_string();
            let surname = reg_surname.get().trim().to_string();
            let email = reg_email.get().trim().to_string();
            // password is sent as typed; whitespace can be part of it
            let password = reg_password.get();

            if let Err(message) = validate_signup_fields(&name, &surname, &email, &password) {
                state.set_error(message);
                return;
            }

            state.loading.set(true);
            let state2 = state.clone();
            spawn_local(async move {
                match api::register(&name, &surname, &email, &password).await {
                    Ok(auth) => {
                        if let Err(err) = storage::save_token(&auth.access_token) {
                            state2.set_error(err);
                            state2.loading.set(false);
                            return;
                        }
                        state2.token.set(Some(auth.access_token.clone()));

                        // re-read the profile so the stored user carries the
                        // server-side posts list
                        match api::fetch_profile(&auth.access_token).await {
                            Ok(profile) => {
                                if let Err(err) = storage::save_user(&profile) {
                                    state2.set_error(err);
                                } else {
                                    state2.user.set(Some(profile));
                                    state2.clear_error();
                                }
                            }
                            Err(err) => state2.set_error(err.to_string()),
                        }
                    }
                    Err(err) => state2.set_error(err.to_string()),
                }
                state2.loading.set(false);
            });
        }
    };

    view! {
        <section class="signup-form">
            <h2>"Sign up"</h2>
            <form on:submit=on_register>
                <input
                    placeholder="name"
                    on:input=move |ev| reg_name.set(event_target_value(&ev))
                />
                <input
                    placeholder="surname"
                    on:input=move |ev| reg_surname.set(event_target_value(&ev))
                />
                <input
                    placeholder="email"
                    on:input=move |ev| reg_email.set(event_target_value(&ev))
                />
                <input
                    placeholder="password"
                    type="password"
                    on:input=move |ev| reg_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || state.loading.get()>
                    "Sign up"
                </button>
            </form>

            <hr style="margin: 1rem 0;" />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_signup_fields_accepts_complete_input() {
        let result = validate_signup_fields("Ada", "Lovelace", "ada@example.com", "password123");
        assert!(result.is_ok());
    }

    #[test]
    fn validate_signup_fields_rejects_missing_name() {
        let result = validate_signup_fields("  ", "Lovelace", "ada@example.com", "password123");
        assert!(result.is_err());
    }

    #[test]
    fn validate_signup_fields_rejects_missing_password() {
        let result = validate_signup_fields("Ada", "Lovelace", "ada@example.com", "");
        assert!(result.is_err());
    }

    #[test]
    fn validate_signup_fields_accepts_password_with_surrounding_whitespace() {
        let result =
            validate_signup_fields("Ada", "Lovelace", "ada@example.com", "  spaced pass  ");
        assert!(result.is_ok());
    }
}
