//! Multilingual display labels.
//!
//! Labels are ordinary managed records (the console has a screen to edit
//! them); `Labels` is the resolved lookup the views consume. Views only
//! ever see final display strings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    De,
    Zh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Zh => "zh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Zh => "中文",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[Self::En, Self::De, Self::Zh]
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all().iter().copied().find(|language| {
            language.code().eq_ignore_ascii_case(value) || language.label() == value
        })
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub id: Uuid,
    /// Dotted lookup key, e.g. "nav.equipment".
    pub key: String,
    pub language: Language,
    pub text: String,
}

impl Entity for LabelEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Resolved label catalog for one configured language.
///
/// Lookup order: configured language, then English, then the caller's
/// fallback string.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    language: Language,
    entries: HashMap<(String, Language), String>,
}

impl Labels {
    pub fn from_entries(language: Language, entries: &[LabelEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| {
                (
                    (entry.key.clone(), entry.language),
                    entry.text.clone(),
                )
            })
            .collect();
        Self { language, entries }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn resolve<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        if let Some(text) = self.entries.get(&(key.to_string(), self.language)) {
            return text;
        }
        if let Some(text) = self.entries.get(&(key.to_string(), Language::En)) {
            return text;
        }
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, language: Language, text: &str) -> LabelEntry {
        LabelEntry {
            id: Uuid::from_u128(7),
            key: key.to_string(),
            language,
            text: text.to_string(),
        }
    }

    #[test]
    fn resolves_configured_language_first() {
        let labels = Labels::from_entries(
            Language::De,
            &[
                entry("nav.equipment", Language::En, "Equipment"),
                entry("nav.equipment", Language::De, "Anlagen"),
            ],
        );
        assert_eq!(labels.resolve("nav.equipment", "?"), "Anlagen");
    }

    #[test]
    fn falls_back_to_english_then_caller() {
        let labels = Labels::from_entries(
            Language::Zh,
            &[entry("nav.equipment", Language::En, "Equipment")],
        );
        assert_eq!(labels.resolve("nav.equipment", "?"), "Equipment");
        assert_eq!(labels.resolve("nav.missing", "Missing"), "Missing");
    }
}
