//! Login and registration page for the authentication service.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login records the account email in the session store (the
//! header's login gate reads it from there) and returns to the workspace.
//! Registration only reports the outcome; the user signs in afterwards.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{LoginRequest, RegisterUser};
use crate::util::session_store::StoreContext;
#[cfg(feature = "hydrate")]
use crate::util::session_store::EMAIL_KEY;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterUser, &'static str> {
    let username = username.trim();
    let email = email.trim();
    let password = password.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    Ok(RegisterUser {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Login page with sign-in and registration forms.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<StoreContext>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let reg_username = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let credentials = match validate_login_input(&email.get(), &password.get()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
            busy.set(true);
            info.set("Signing in...".to_owned());

            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::login(&credentials).await {
                        Ok(_user) => {
                            store.0.set(EMAIL_KEY, &credentials.email);
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href("/");
                            }
                        }
                        Err(e) => {
                            info.set(format!("Login failed: {e}"));
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&store, &credentials);
                busy.set(false);
            }
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let details = match validate_register_input(
            &reg_username.get(),
            &reg_email.get(),
            &reg_password.get(),
        ) {
            Ok(details) => details,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_user(&details).await {
                Ok(_created) => info.set("Account created. You can sign in now.".to_owned()),
                Err(e) => info.set(format!("Registration failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = details;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"CalcBoard"</h1>
                <p class="login-card__subtitle">"Sign In"</p>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or Create An Account"</p>
                <form class="login-form" on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || reg_username.get()
                        on:input=move |ev| reg_username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
