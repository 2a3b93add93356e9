use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Label of the switch button: the language you would switch to.
    pub fn switch_label(self) -> &'static str {
        match self.toggled() {
            Language::Es => "ES",
            Language::En => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A value available in every [`Language`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub es: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn new(es: T, en: T) -> Self {
        Self { es, en }
    }

    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        [(Language::Es, &self.es), (Language::En, &self.en)].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_two_languages() {
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::Es.toggled().toggled(), Language::Es);
    }

    #[test]
    fn switch_label_names_the_other_language() {
        assert_eq!(Language::Es.switch_label(), "EN");
        assert_eq!(Language::En.switch_label(), "ES");
    }

    #[test]
    fn localized_get_by_language() {
        let l = Localized::new("Contacto".to_string(), "Contact".to_string());
        assert_eq!(l.get(Language::Es), "Contacto");
        assert_eq!(l.get(Language::En), "Contact");
        assert_eq!(l.iter().count(), 2);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), r#""en""#);
        let l: Language = serde_json::from_str(r#""es""#).unwrap();
        assert_eq!(l, Language::Es);
    }
}
