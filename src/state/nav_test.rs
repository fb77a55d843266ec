use super::*;

use crate::util::session_store::MemoryStore;

// =============================================================
// Library
// =============================================================

#[test]
fn library_default_is_java() {
    assert_eq!(Library::default(), Library::Java);
    assert_eq!(Library::default().as_str(), "JAVA");
}

#[test]
fn library_tokens_are_uppercase_and_distinct() {
    let tokens: Vec<&str> = Library::ALL.iter().map(|library| library.as_str()).collect();
    assert_eq!(tokens, vec!["JAVA", "PYTHON", "CPP"]);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_adopts_default_library_and_persists_it() {
    let store = MemoryStore::default();
    let mut nav = NavState::default();
    nav.initialize(&store);
    assert_eq!(nav.selected_library, Library::Java);
    assert_eq!(store.get(LIBRARY_KEY).as_deref(), Some("JAVA"));
}

#[test]
fn initialize_overwrites_a_stale_library_value() {
    let store = MemoryStore::default();
    store.set(LIBRARY_KEY, "PYTHON");
    let mut nav = NavState::default();
    nav.initialize(&store);
    assert_eq!(store.get(LIBRARY_KEY).as_deref(), Some("JAVA"));
}

// =============================================================
// Menu toggles
// =============================================================

#[test]
fn menu_toggles_flip_unconditionally() {
    let mut nav = NavState::default();
    nav.toggle_language_menu();
    assert!(nav.show_language_menu);
    nav.toggle_language_menu();
    assert!(!nav.show_language_menu);

    nav.toggle_library_menu();
    assert!(nav.show_library_menu);
    nav.toggle_library_menu();
    assert!(!nav.show_library_menu);
}

// =============================================================
// change_library
// =============================================================

#[test]
fn change_library_persists_selection_and_closes_open_menu() {
    let store = MemoryStore::default();
    let mut nav = NavState::default();
    nav.initialize(&store);
    nav.toggle_library_menu();
    assert!(nav.show_library_menu);

    nav.change_library(&store, Library::Python);
    assert_eq!(nav.selected_library, Library::Python);
    assert_eq!(store.get(LIBRARY_KEY).as_deref(), Some("PYTHON"));
    assert!(!nav.show_library_menu);
}

#[test]
fn change_library_flips_menu_from_prior_value() {
    let store = MemoryStore::default();
    let mut nav = NavState::default();
    nav.change_library(&store, Library::Cpp);
    assert_eq!(store.get(LIBRARY_KEY).as_deref(), Some("CPP"));
    assert!(nav.show_library_menu);
}

// =============================================================
// is_logged_in
// =============================================================

#[test]
fn is_logged_in_requires_a_non_empty_email() {
    let store = MemoryStore::default();
    assert!(!is_logged_in(&store));
    store.set(EMAIL_KEY, "");
    assert!(!is_logged_in(&store));
    store.set(EMAIL_KEY, "user@example.com");
    assert!(is_logged_in(&store));
}

// =============================================================
// toggle_history
// =============================================================

#[test]
fn toggle_history_rejected_when_logged_out() {
    let store = MemoryStore::default();
    let mut nav = NavState::default();
    let mut notifications = NotificationsState::default();

    nav.toggle_history(&store, &mut notifications);
    assert!(!nav.show_history);
    assert_eq!(notifications.items.len(), 1);
    let toast = &notifications.items[0];
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.summary, "Error");
    assert_eq!(toast.detail, UNAUTHORIZED_DETAIL);
}

#[test]
fn toggle_history_flips_when_logged_in_without_toasts() {
    let store = MemoryStore::default();
    store.set(EMAIL_KEY, "user@example.com");
    let mut nav = NavState::default();
    let mut notifications = NotificationsState::default();

    nav.toggle_history(&store, &mut notifications);
    assert!(nav.show_history);
    nav.toggle_history(&store, &mut notifications);
    assert!(!nav.show_history);
    assert!(notifications.items.is_empty());
}

#[test]
fn toggle_history_after_logout_leaves_panel_state_unchanged() {
    let store = MemoryStore::default();
    store.set(EMAIL_KEY, "user@example.com");
    let mut nav = NavState::default();
    let mut notifications = NotificationsState::default();

    nav.toggle_history(&store, &mut notifications);
    assert!(nav.show_history);

    log_out(&store);
    nav.toggle_history(&store, &mut notifications);
    assert!(nav.show_history);
    assert_eq!(notifications.items.len(), 1);
    assert_eq!(notifications.items[0].detail, UNAUTHORIZED_DETAIL);
}

// =============================================================
// log_out
// =============================================================

#[test]
fn log_out_clears_every_store_key() {
    let store = MemoryStore::default();
    store.set(EMAIL_KEY, "user@example.com");
    store.set(LIBRARY_KEY, "JAVA");
    store.set("theme", "dark");

    log_out(&store);
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert!(!is_logged_in(&store));
}

#[test]
fn log_out_on_an_empty_store_is_a_noop() {
    let store = MemoryStore::default();
    log_out(&store);
    assert!(store.is_empty());
}
