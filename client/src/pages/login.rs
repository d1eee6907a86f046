//! Login form exchanging username + password for a bearer token.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::login::LoginState;
use crate::util::mount::mount_flag;

/// Credential form. Reports the issued token through `on_success`.
#[component]
pub fn LoginPage(#[prop(into)] on_success: Callback<String>) -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginState::default());
    let alive = mount_flag();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        state.update(|s| started = s.begin());
        if !started {
            return;
        }
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&api, &username_value, &password_value).await;
                if !alive.is_mounted() {
                    return;
                }
                match result {
                    Ok(body) => {
                        state.update(LoginState::succeed);
                        on_success.run(body.access_token);
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        state.update(|s| s.fail(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &alive, username_value, password_value, on_success);
        }
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2 class="login-form__title">"Sign in"</h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="login-form__error" role="alert">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <label class="login-form__label" for="username">"Username"</label>
            <input
                id="username"
                name="username"
                class="login-form__input"
                type="text"
                autocomplete="username"
                required=true
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <label class="login-form__label" for="password">"Password"</label>
            <input
                id="password"
                name="password"
                class="login-form__input"
                type="password"
                autocomplete="current-password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="login-form__submit" type="submit" disabled=move || state.with(|s| s.loading)>
                {move || state.with(LoginState::submit_label)}
            </button>
        </form>
    }
}
