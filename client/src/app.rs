//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_META_NAME, ApiConfig};
use crate::pages::home::HomePage;
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Publishes the backend base URL in a `<meta>` tag for the browser build.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_url = api.base_url.clone();
    provide_context(api);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_META_NAME content=api_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session context. The stored token is read in an effect, after
/// hydration, so server and browser agree on the first render.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api);

    let session = SessionContext::new();
    provide_context(session);
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/access-manager.css"/>
        <Title text="Access Manager"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
