use super::*;

// =============================================================
// Language
// =============================================================

#[test]
fn default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(I18nState::default().language, Language::En);
}

#[test]
fn language_codes_and_labels() {
    assert_eq!(Language::En.as_str(), "en");
    assert_eq!(Language::Ru.as_str(), "ru");
    assert_eq!(Language::En.label(), "English");
    assert_eq!(Language::Ru.label(), "Русский");
}

#[test]
fn all_lists_every_language_once() {
    assert_eq!(Language::ALL, [Language::En, Language::Ru]);
}

// =============================================================
// translate
// =============================================================

#[test]
fn translate_resolves_english_entries() {
    let i18n = I18nState::default();
    assert_eq!(i18n.translate("nav.history"), "History");
    assert_eq!(i18n.translate("history.empty"), "No calculations yet");
}

#[test]
fn set_language_switches_lookup_table() {
    let mut i18n = I18nState::default();
    i18n.set_language(Language::Ru);
    assert_eq!(i18n.language, Language::Ru);
    assert_eq!(i18n.translate("nav.history"), "История");
}

#[test]
fn translate_falls_back_to_english_for_missing_overlay_entry() {
    let mut i18n = I18nState::default();
    i18n.set_language(Language::Ru);
    // nav.brand is intentionally absent from the Russian overlay.
    assert_eq!(i18n.translate("nav.brand"), "CalcBoard");
}

#[test]
fn translate_returns_key_when_unknown() {
    let i18n = I18nState::default();
    assert_eq!(i18n.translate("nav.does-not-exist"), "nav.does-not-exist");
}
