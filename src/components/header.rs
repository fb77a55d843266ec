//! Application header: brand, chat link, language and library menus, history
//! toggle, and login controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the navigation surface for the workspace route. It owns no domain
//! data: selections live in context signals and the session store capability,
//! so the render layer stays a thin wiring of `NavState` operations.

use leptos::prelude::*;

use crate::state::nav::{self, Library, NavState};
use crate::state::notifications::NotificationsState;
use crate::util::i18n::{I18nState, Language};
use crate::util::session_store::{EMAIL_KEY, StoreContext};

/// Top header for the workspace page.
#[component]
pub fn Header() -> impl IntoView {
    let nav_state = expect_context::<RwSignal<NavState>>();
    let i18n = expect_context::<RwSignal<I18nState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let store = expect_context::<StoreContext>();

    // Mount-time setup; the component body runs once per header lifetime.
    nav_state.update(|state| state.initialize(store.0.as_ref()));

    let logged_in_email = {
        let store = store.clone();
        move || store.0.get(EMAIL_KEY).filter(|email| !email.is_empty())
    };
    let has_session = {
        let logged_in_email = logged_in_email.clone();
        move || logged_in_email().is_some()
    };

    let on_select_language = move |language: Language| {
        i18n.update(|state| state.set_language(language));
        nav_state.update(NavState::toggle_language_menu);
    };

    let on_history = {
        let store = store.clone();
        move |_| {
            notifications.update(|queue| {
                nav_state.update(|state| state.toggle_history(store.0.as_ref(), queue));
            });
        }
    };

    let on_logout = {
        let store = store.clone();
        move |_| {
            nav::log_out(store.0.as_ref());
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        }
    };

    let library_menu_store = store.clone();

    view! {
        <header class="header">
            <a href="/" class="header__brand">{move || i18n.get().translate("nav.brand")}</a>
            <a href="/chat" class="header__link">{move || i18n.get().translate("nav.chat")}</a>
            <button class="btn header__history" on:click=on_history>
                {move || i18n.get().translate("nav.history")}
            </button>

            <span class="header__spacer"></span>

            <div class="header__menu">
                <button
                    class="btn header__menu-toggle"
                    on:click=move |_| nav_state.update(NavState::toggle_library_menu)
                >
                    {move || nav_state.get().selected_library.label()}
                </button>
                <Show when=move || nav_state.get().show_library_menu>
                    <ul class="header__dropdown">
                        {Library::ALL
                            .iter()
                            .map(|&library| {
                                let store = library_menu_store.clone();
                                view! {
                                    <li>
                                        <button
                                            class="header__dropdown-item"
                                            on:click=move |_| {
                                                nav_state.update(|state| {
                                                    state.change_library(store.0.as_ref(), library);
                                                });
                                            }
                                        >
                                            {library.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>

            <div class="header__menu">
                <button
                    class="btn header__menu-toggle"
                    on:click=move |_| nav_state.update(NavState::toggle_language_menu)
                >
                    {move || i18n.get().language.label()}
                </button>
                <Show when=move || nav_state.get().show_language_menu>
                    <ul class="header__dropdown">
                        {Language::ALL
                            .iter()
                            .map(|&language| {
                                view! {
                                    <li>
                                        <button
                                            class="header__dropdown-item"
                                            on:click=move |_| on_select_language(language)
                                        >
                                            {language.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>

            <Show
                when=has_session
                fallback=move || {
                    view! {
                        <a href="/login" class="header__link">
                            {move || i18n.get().translate("nav.login")}
                        </a>
                    }
                }
            >
                <span class="header__self">{logged_in_email.clone()}</span>
                <button class="btn header__logout" on:click=on_logout.clone()>
                    {move || i18n.get().translate("nav.logout")}
                </button>
            </Show>
        </header>
    }
}
