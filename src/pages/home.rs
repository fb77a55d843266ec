//! Workspace landing page hosting the header, toast stack, and the
//! collapsible calculation history.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::toast::ToastStack;
use crate::state::nav::NavState;
use crate::util::i18n::I18nState;

/// Landing route: header chrome plus the login-gated history panel.
#[component]
pub fn HomePage() -> impl IntoView {
    let nav_state = expect_context::<RwSignal<NavState>>();
    let i18n = expect_context::<RwSignal<I18nState>>();

    view! {
        <div class="home">
            <Header/>
            <ToastStack/>
            <main class="home__body">
                <Show when=move || nav_state.get().show_history>
                    <section class="history">
                        <h2 class="history__title">
                            {move || i18n.get().translate("history.title")}
                        </h2>
                        <p class="history__empty">
                            {move || i18n.get().translate("history.empty")}
                        </p>
                    </section>
                </Show>
                <section class="workspace">
                    <p class="workspace__tagline">
                        {move || i18n.get().translate("home.tagline")}
                    </p>
                </section>
            </main>
        </div>
    }
}
