//! Root view: login form or user list, depending on the session.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;
use crate::pages::login::LoginPage;
use crate::pages::users::UsersPage;
use crate::state::session::{RootView, use_session};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    // Only a change of screen re-renders; a second sign-out while signed out
    // must not remount anything.
    let screen = Memo::new(move |_| session.view());
    let on_success = Callback::new(move |token: String| session.sign_in(token));

    view! {
        <main class="home">
            <div class="home__card">
                <h1 class="home__title">"Access Manager"</h1>
                {move || match screen.get() {
                    RootView::Restoring => ().into_any(),
                    RootView::SignedOut => view! { <LoginPage on_success=on_success/> }.into_any(),
                    RootView::SignedIn => view! {
                        <SessionBar/>
                        <UsersPage/>
                    }
                        .into_any(),
                }}
            </div>
        </main>
    }
}
