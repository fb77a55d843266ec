use super::*;

// =============================================================
// add
// =============================================================

#[test]
fn add_queues_a_toast_with_the_given_fields() {
    let mut state = NotificationsState::default();
    state.add(Severity::Error, "Error", "You must be an authorized user");

    assert_eq!(state.items.len(), 1);
    let toast = &state.items[0];
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.summary, "Error");
    assert_eq!(toast.detail, "You must be an authorized user");
    assert!(!toast.id.is_empty());
}

#[test]
fn add_assigns_unique_ids_and_preserves_order() {
    let mut state = NotificationsState::default();
    state.add(Severity::Info, "First", "one");
    state.add(Severity::Warn, "Second", "two");

    assert_eq!(state.items.len(), 2);
    assert_ne!(state.items[0].id, state.items[1].id);
    assert_eq!(state.items[0].summary, "First");
    assert_eq!(state.items[1].summary, "Second");
}

// =============================================================
// dismiss
// =============================================================

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotificationsState::default();
    state.add(Severity::Info, "Keep", "kept");
    state.add(Severity::Error, "Drop", "dropped");
    let dropped_id = state.items[1].id.clone();

    state.dismiss(&dropped_id);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].summary, "Keep");
}

#[test]
fn dismiss_with_unknown_id_is_a_noop() {
    let mut state = NotificationsState::default();
    state.add(Severity::Success, "Saved", "done");
    state.dismiss("not-a-real-id");
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_css_classes_are_distinct() {
    let classes = [
        Severity::Success.css_class(),
        Severity::Info.css_class(),
        Severity::Warn.css_class(),
        Severity::Error.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
