//! Chat route target.
//!
//! The header links here unconditionally; chat internals live elsewhere, so
//! this screen only keeps the navigation contract.

use leptos::prelude::*;

use crate::util::i18n::I18nState;

/// Chat page placeholder with a back link to the workspace.
#[component]
pub fn ChatPage() -> impl IntoView {
    let i18n = expect_context::<RwSignal<I18nState>>();

    view! {
        <div class="chat">
            <h1 class="chat__title">{move || i18n.get().translate("chat.title")}</h1>
            <p class="chat__placeholder">{move || i18n.get().translate("chat.placeholder")}</p>
            <a href="/" class="chat__back">{move || i18n.get().translate("chat.back")}</a>
        </div>
    }
}
