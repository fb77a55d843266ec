//! Translation provider with a closed language set and static string tables.
//!
//! DESIGN
//! ======
//! The active language lives in a single `RwSignal<I18nState>` context that
//! components read reactively, so there is no secondary cached copy to keep
//! in sync. Lookups fall back overlay -> English -> key, so a missing entry
//! renders as its key instead of breaking the view.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Languages selectable from the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Every selectable language, in menu order.
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    /// Short language code.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Native-script label shown in the language menu.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
        }
    }
}

/// English base table. Every key the UI uses must appear here.
const EN: &[(&str, &str)] = &[
    ("nav.brand", "CalcBoard"),
    ("nav.chat", "Chat"),
    ("nav.history", "History"),
    ("nav.login", "Log in"),
    ("nav.logout", "Log out"),
    ("history.title", "Calculation history"),
    ("history.empty", "No calculations yet"),
    ("home.tagline", "Evaluate expressions with the engine of your choice."),
    ("chat.title", "Chat"),
    ("chat.placeholder", "Conversations appear here."),
    ("chat.back", "Back to workspace"),
];

/// Russian overlay. Only keys that differ from English are included;
/// `nav.brand` deliberately stays untranslated.
const RU: &[(&str, &str)] = &[
    ("nav.chat", "Чат"),
    ("nav.history", "История"),
    ("nav.login", "Войти"),
    ("nav.logout", "Выйти"),
    ("history.title", "История вычислений"),
    ("history.empty", "Вычислений пока нет"),
    ("home.tagline", "Вычисляйте выражения на выбранном движке."),
    ("chat.title", "Чат"),
    ("chat.placeholder", "Здесь появляются беседы."),
    ("chat.back", "Назад к рабочей области"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Current-language state provided through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct I18nState {
    pub language: Language,
}

impl I18nState {
    /// Adopt `language` for all subsequent lookups.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Resolve `key` for the current language.
    pub fn translate(self, key: &'static str) -> &'static str {
        let overlay = match self.language {
            Language::En => None,
            Language::Ru => lookup(RU, key),
        };
        overlay.or_else(|| lookup(EN, key)).unwrap_or(key)
    }
}
