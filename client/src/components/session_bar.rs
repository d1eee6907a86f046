//! Signed-in banner with the logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by the root view only while a token is held. Looks up the account
//! name once via `/users/me`; a failed lookup keeps the generic banner.

#[cfg(test)]
#[path = "session_bar_test.rs"]
mod session_bar_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::session::use_session;
use crate::util::mount::mount_flag;

fn greeting(username: Option<&str>) -> String {
    match username {
        Some(name) => format!("Signed in as {name}"),
        None => "You are logged in!".to_owned(),
    }
}

#[component]
pub fn SessionBar() -> impl IntoView {
    let session = use_session();
    let api = expect_context::<ApiConfig>();
    let username = RwSignal::new(None::<String>);
    let alive = mount_flag();

    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = session.token_untracked() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_current_user(&api, &token).await {
                    Ok(user) => {
                        if alive.is_mounted() {
                            username.set(Some(user.username));
                        }
                    }
                    Err(e) => leptos::logging::warn!("current user lookup failed: {e}"),
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, alive);
    }

    view! {
        <div class="session-bar">
            <p class="session-bar__status">{move || greeting(username.get().as_deref())}</p>
            <button class="session-bar__logout" type="button" on:click=move |_| session.sign_out()>
                "Logout"
            </button>
        </div>
    }
}
