//! Application shell: router, meta context, and shared-state provision.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the session store capability and the context signals every
//! page reads, then mounts the route table. `shell` is the SSR document
//! wrapper used by the server integration.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::pages::chat::ChatPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::state::nav::NavState;
use crate::state::notifications::NotificationsState;
use crate::util::i18n::I18nState;
use crate::util::session_store::StoreContext;

/// SSR document shell.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
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

/// Root component: shared context plus the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(StoreContext::browser());
    provide_context(RwSignal::new(NavState::default()));
    provide_context(RwSignal::new(I18nState::default()));
    provide_context(RwSignal::new(NotificationsState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/calcboard-client.css"/>
        <Title text="CalcBoard"/>
        <Router>
            <div class="app">
                <Routes fallback=|| "Page not found.">
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("chat") view=ChatPage/>
                </Routes>
            </div>
        </Router>
    }
}
