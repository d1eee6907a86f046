//! User list page, fetched once per mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the token from the session context. A 401 is shown as a message
//! with an explicit "Sign in again" action; the stored token is only cleared
//! when the user takes it.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use accounts::ApiError;
use leptos::prelude::*;

use crate::components::user_table::UserTable;
use crate::config::ApiConfig;
use crate::state::session::use_session;
use crate::state::users::{EMPTY_MESSAGE, LOADING_MESSAGE, UsersState};
use crate::util::mount::mount_flag;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session();
    let api = expect_context::<ApiConfig>();
    let state = RwSignal::new(UsersState::default());
    let alive = mount_flag();

    state.update(UsersState::begin);
    match session.token_untracked() {
        None => state.update(|s| s.finish(Err(ApiError::Unauthorized { detail: None }))),
        Some(token) => {
            #[cfg(feature = "hydrate")]
            {
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::fetch_users(&api, &token).await;
                    if let Err(e) = &result {
                        leptos::logging::warn!("fetch users failed: {e}");
                    }
                    if alive.is_mounted() {
                        state.update(|s| s.finish(result));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &alive, token);
            }
        }
    }

    let on_relogin = Callback::new(move |()| session.sign_out());

    view! {
        <section class="users-page">
            <h2 class="users-page__title">"User Management"</h2>
            {move || view! { <UsersBody state=state.get() on_relogin=on_relogin/> }}
        </section>
    }
}

/// One snapshot of the list: loading line, error, empty message, or table.
#[component]
fn UsersBody(state: UsersState, #[prop(into)] on_relogin: Callback<()>) -> impl IntoView {
    match state {
        UsersState::Idle | UsersState::Loading => {
            view! { <p class="users-page__loading">{LOADING_MESSAGE}</p> }.into_any()
        }
        UsersState::Failed(failure) => view! {
            <div class="users-page__error" role="alert">
                <p>{failure.message}</p>
                {failure
                    .unauthorized
                    .then(|| {
                        view! {
                            <button class="users-page__relogin" type="button" on:click=move |_| on_relogin.run(())>
                                "Sign in again"
                            </button>
                        }
                    })}
            </div>
        }
            .into_any(),
        UsersState::Loaded(users) if users.is_empty() => {
            view! { <p class="users-page__empty">{EMPTY_MESSAGE}</p> }.into_any()
        }
        UsersState::Loaded(users) => view! { <UserTable users=users/> }.into_any(),
    }
}
