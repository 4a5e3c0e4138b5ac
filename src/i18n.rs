use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::content::{embedded_document, ContentError, LocalizedText};

pub static GLOBAL_TRANSLATIONS: LazyLock<Arc<TranslationTable>> =
    LazyLock::new(|| Arc::new(TranslationTable::load()));

pub const TRANSLATIONS_DOCUMENT: &str = "translations.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn all() -> [Language; 2] {
        [Language::Es, Language::En]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
struct RawTable {
    #[serde(default)]
    es: HashMap<String, String>,
    #[serde(default)]
    en: HashMap<String, String>,
}

/// Static UI strings (navigation, section titles, ARIA labels) keyed by dotted name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    entries: HashMap<String, LocalizedText>,
}

impl TranslationTable {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawTable =
            serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;
        Ok(Self::from_languages(raw.es, raw.en))
    }

    fn from_languages(mut es: HashMap<String, String>, mut en: HashMap<String, String>) -> Self {
        let mut keys = es.keys().chain(en.keys()).cloned().collect::<Vec<_>>();
        keys.sort();
        keys.dedup();
        let entries = keys
            .into_iter()
            .map(|key| {
                let es_text = es.remove(&key);
                let en_text = en.remove(&key);
                if es_text.is_none() || en_text.is_none() {
                    log::warn!("translation {key} is only defined in one language");
                }
                let text = LocalizedText {
                    es: es_text.unwrap_or_default(),
                    en: en_text.unwrap_or_default(),
                };
                (key, text)
            })
            .collect();
        Self { entries }
    }

    pub fn load() -> Self {
        embedded_document(TRANSLATIONS_DOCUMENT)
            .and_then(|json| Self::from_json(&json))
            .unwrap_or_else(|e| {
                log::error!("couldn't load translations: {e}");
                Self::default()
            })
    }

    pub fn insert(&mut self, key: impl Into<String>, text: LocalizedText) {
        self.entries.insert(key.into(), text);
    }

    pub fn get(&self, key: &str) -> Option<&LocalizedText> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Anything the resolver can turn into display text.
pub trait Resolve {
    fn resolve_in<'a>(&'a self, language: Language, table: &'a TranslationTable) -> &'a str;
}

impl Resolve for LocalizedText {
    fn resolve_in<'a>(&'a self, language: Language, _table: &'a TranslationTable) -> &'a str {
        self.in_language(language)
    }
}

// Unknown keys, and keys with no text in either usable language, resolve to themselves.
impl Resolve for str {
    fn resolve_in<'a>(&'a self, language: Language, table: &'a TranslationTable) -> &'a str {
        table
            .get(self)
            .map(|text| text.in_language(language))
            .filter(|text| !text.is_empty())
            .unwrap_or(self)
    }
}

impl Resolve for String {
    fn resolve_in<'a>(&'a self, language: Language, table: &'a TranslationTable) -> &'a str {
        self.as_str().resolve_in(language, table)
    }
}

/// Active language plus the table used to resolve keys.
#[derive(Debug, Clone)]
pub struct I18n {
    language: Language,
    table: Arc<TranslationTable>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(GLOBAL_TRANSLATIONS.clone())
    }
}

impl I18n {
    pub fn new(table: Arc<TranslationTable>) -> Self {
        Self {
            language: Language::default(),
            table,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::debug!("language changed to {}", language.code());
        }
        self.language = language;
    }

    pub fn toggle(&mut self) -> Language {
        self.set_language(self.language.other());
        self.language
    }

    pub fn resolve<'a, R>(&'a self, source: &'a R) -> &'a str
    where
        R: Resolve + ?Sized,
    {
        source.resolve_in(self.language, &self.table)
    }

    /// Owned variant of [`I18n::resolve`] for handing text to views.
    pub fn t<R>(&self, source: &R) -> String
    where
        R: Resolve + ?Sized,
    {
        self.resolve(source).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Arc<TranslationTable> {
        let mut table = TranslationTable::default();
        table.insert("nav.home", LocalizedText::new("Inicio", "Home"));
        table.insert("hero.badge", LocalizedText::new("Nuevo", ""));
        Arc::new(table)
    }

    #[test]
    fn test_resolve_localized_text_follows_language() {
        let text = LocalizedText::new("Hola", "Hi");
        let mut i18n = I18n::new(table());
        assert_eq!(i18n.language(), Language::Es);
        assert_eq!(i18n.resolve(&text), "Hola");

        i18n.set_language(Language::En);
        assert_eq!(i18n.resolve(&text), "Hi");

        assert_eq!(i18n.toggle(), Language::Es);
        assert_eq!(i18n.resolve(&text), "Hola");
    }

    #[test]
    fn test_resolve_key() {
        let mut i18n = I18n::new(table());
        assert_eq!(i18n.resolve("nav.home"), "Inicio");
        i18n.set_language(Language::En);
        assert_eq!(i18n.resolve("nav.home"), "Home");
        assert_eq!(i18n.t(&"nav.home".to_string()), "Home");
    }

    #[test]
    fn test_empty_translation_falls_back_to_spanish() {
        let mut i18n = I18n::new(table());
        i18n.set_language(Language::En);
        assert_eq!(i18n.resolve("hero.badge"), "Nuevo");
        assert_eq!(i18n.resolve(&LocalizedText::new("Hola", "")), "Hola");
    }

    #[test]
    fn test_unknown_key_resolves_to_itself() {
        let i18n = I18n::new(table());
        assert_eq!(i18n.resolve("projects.doesNotExist"), "projects.doesNotExist");
        assert_eq!(i18n.resolve(""), "");
    }

    #[test]
    fn test_one_sided_key_falls_back_to_key() {
        let table =
            TranslationTable::from_json(r#"{ "es": {}, "en": { "aria.only": "English only" } }"#)
                .unwrap();
        let mut i18n = I18n::new(Arc::new(table));
        assert_eq!(i18n.resolve("aria.only"), "aria.only");
        i18n.set_language(Language::En);
        assert_eq!(i18n.resolve("aria.only"), "English only");
    }

    #[test]
    fn test_table_merges_languages() {
        let table = TranslationTable::from_json(
            r#"{ "es": { "a": "uno", "b": "dos" }, "en": { "a": "one", "c": "three" } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a"), Some(&LocalizedText::new("uno", "one")));
        assert_eq!(table.get("b").unwrap().en, "");
        assert_eq!(table.get("c").unwrap().es, "");
        assert!(TranslationTable::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_embedded_table_is_complete() {
        let table = TranslationTable::load();
        assert!(!table.is_empty());
        let i18n = I18n::default();
        assert_eq!(i18n.resolve("nav.projects"), "Proyectos");
        for key in [
            "projects.filter.all",
            "projects.filter.uxui",
            "projects.filter.frontend",
            "projects.filter.fullstack",
            "projects.notFound.title",
            "aria.languageSelector",
            "aria.openProjectDetails",
            "aria.closeProjectDetails",
            "projects.links.caseStudy",
        ] {
            assert!(table.get(key).is_some_and(|t| t.is_complete()), "{key}");
        }
    }

    #[test]
    fn test_language_codes() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Some(language));
            assert_eq!(language.other().other(), language);
        }
        assert_eq!(Language::from_code("EN"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(
            serde_json::to_string(&Language::En).unwrap(),
            "\"en\"".to_string()
        );
    }
}
