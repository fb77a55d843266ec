//! Header navigation state: menus, library selection, and the history gate.
//!
//! DESIGN
//! ======
//! Menu and panel toggles are ephemeral component state; the library
//! selection is mirrored into the session store so it survives reloads.
//! Operations take the store capability as a parameter, keeping the contract
//! testable without a browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::notifications::{NotificationsState, Severity};
use crate::util::session_store::{EMAIL_KEY, LIBRARY_KEY, SessionStore};

/// Detail text shown when an anonymous user requests the history panel.
pub const UNAUTHORIZED_DETAIL: &str = "You must be an authorized user";

/// Execution libraries selectable from the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Library {
    #[default]
    Java,
    Python,
    Cpp,
}

impl Library {
    /// Every selectable library, in menu order.
    pub const ALL: [Library; 3] = [Library::Java, Library::Python, Library::Cpp];

    /// Token persisted under the `Library` store key.
    pub fn as_str(self) -> &'static str {
        match self {
            Library::Java => "JAVA",
            Library::Python => "PYTHON",
            Library::Cpp => "CPP",
        }
    }

    /// Label shown in the library menu.
    pub fn label(self) -> &'static str {
        match self {
            Library::Java => "Java",
            Library::Python => "Python",
            Library::Cpp => "C++",
        }
    }
}

/// Header state: current selection plus ephemeral menu/panel toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub selected_library: Library,
    pub show_language_menu: bool,
    pub show_library_menu: bool,
    pub show_history: bool,
}

impl NavState {
    /// Mount-time setup: adopt the default library and mirror it into the
    /// store. Runs once per header lifetime.
    pub fn initialize(&mut self, store: &dyn SessionStore) {
        self.selected_library = Library::default();
        store.set(LIBRARY_KEY, self.selected_library.as_str());
    }

    /// Unconditional flip of the language menu.
    pub fn toggle_language_menu(&mut self) {
        self.show_language_menu = !self.show_language_menu;
    }

    /// Unconditional flip of the library menu.
    pub fn toggle_library_menu(&mut self) {
        self.show_library_menu = !self.show_library_menu;
    }

    /// Persist `library`, adopt it as the selection, and flip the library
    /// menu from its prior state.
    pub fn change_library(&mut self, store: &dyn SessionStore, library: Library) {
        store.set(LIBRARY_KEY, library.as_str());
        self.selected_library = library;
        self.show_library_menu = !self.show_library_menu;
    }

    /// Flip the history panel when logged in; otherwise leave state
    /// untouched and emit exactly one error toast.
    pub fn toggle_history(&mut self, store: &dyn SessionStore, notifications: &mut NotificationsState) {
        if is_logged_in(store) {
            self.show_history = !self.show_history;
        } else {
            notifications.add(Severity::Error, "Error", UNAUTHORIZED_DETAIL);
        }
    }
}

/// True iff the store holds a non-empty `email` value. Trusts local state
/// only; gated actions are expected to be re-validated server-side.
pub fn is_logged_in(store: &dyn SessionStore) -> bool {
    store.get(EMAIL_KEY).is_some_and(|email| !email.is_empty())
}

/// Clear every store key, unrelated preferences included. The caller
/// navigates to the login route afterwards; server-side invalidation stays
/// opt-in via `net::api::logout`.
pub fn log_out(store: &dyn SessionStore) {
    store.clear();
}
