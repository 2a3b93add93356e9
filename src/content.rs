//! Résumé content and its translations.
//!
//! The content ships as `assets/content.json`, embedded at compile time and
//! validated once at startup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{Language, Localized};
use crate::section::SectionId;

const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("section `{section}` is missing from the `{table}` table")]
    MissingSection {
        section: SectionId,
        table: &'static str,
    },
    #[error("`{field}` has no `{language}` translation")]
    EmptyTranslation { field: String, language: Language },
    #[error("demo `{title}` has no url")]
    MissingDemoUrl { title: String },
    #[error("experience `{title}` lists no technologies")]
    MissingTechnologies { title: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    /// Place and period, shown under the title
    pub description: String,
    pub content: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: Localized<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub badges: Vec<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Github,
    Linkedin,
}

impl ContactKind {
    pub fn icon(self) -> &'static str {
        match self {
            ContactKind::Email => "✉",
            ContactKind::Phone => "☎",
            ContactKind::Github => "⌥",
            ContactKind::Linkedin => "in",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: Localized<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub links: Vec<ContactLink>,
    pub send_email: Link,
    pub whatsapp: Link,
}

/// One project card of the demos carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub technologies: Vec<String>,
    pub url: String,
    pub features: Localized<Vec<String>>,
    /// Path of the preview image, relative to the site root
    pub image: String,
}

/// Short UI strings that are not part of the résumé itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    pub demos_heading: Localized<String>,
    pub view_demo: Localized<String>,
    pub details: Localized<String>,
    pub features: Localized<String>,
    pub close: Localized<String>,
    pub previous: Localized<String>,
    pub next: Localized<String>,
    pub toggle_theme: Localized<String>,
    pub toggle_language: Localized<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub name: String,
    pub role: Localized<String>,
    pub bio: Localized<String>,
    /// Short labels used by the navigation bar
    pub nav: BTreeMap<SectionId, Localized<String>>,
    /// Section headings
    pub headings: BTreeMap<SectionId, Localized<String>>,
    pub education: Vec<Localized<EducationItem>>,
    pub experience: Vec<Localized<ExperienceItem>>,
    pub skills: Localized<Vec<String>>,
    pub hobby: Hobby,
    pub contact: Contact,
    pub demos: Vec<Demo>,
    pub labels: Labels,
}

fn check_text(field: &str, text: &Localized<String>) -> Result<(), ContentError> {
    match text.iter().find(|(_, t)| t.trim().is_empty()) {
        Some((language, _)) => Err(ContentError::EmptyTranslation {
            field: field.to_string(),
            language,
        }),
        None => Ok(()),
    }
}

fn check_sections(
    table: &'static str,
    map: &BTreeMap<SectionId, Localized<String>>,
) -> Result<(), ContentError> {
    for section in SectionId::ALL {
        let text = map
            .get(&section)
            .ok_or(ContentError::MissingSection { section, table })?;
        check_text(&format!("{table}.{section}"), text)?;
    }
    Ok(())
}

impl Content {
    /// Content embedded in the binary.
    ///
    /// # Errors
    /// Fails when the embedded JSON is malformed or incomplete.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    /// # Errors
    /// [`ContentError::Parse`] on malformed JSON, or any error of [`Content::validate`].
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Checks that every section is labelled in both languages and that the
    /// experience entries and demo cards are complete.
    ///
    /// # Errors
    /// The first problem found.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_sections("nav", &self.nav)?;
        check_sections("headings", &self.headings)?;
        check_text("role", &self.role)?;
        check_text("bio", &self.bio)?;

        for (i, item) in self.experience.iter().enumerate() {
            for (language, e) in item.iter() {
                if e.title.trim().is_empty() {
                    return Err(ContentError::EmptyTranslation {
                        field: format!("experience[{i}].title"),
                        language,
                    });
                }
                if e.technologies.is_empty() {
                    return Err(ContentError::MissingTechnologies {
                        title: e.title.clone(),
                    });
                }
            }
        }

        for (i, demo) in self.demos.iter().enumerate() {
            check_text(&format!("demos[{i}].title"), &demo.title)?;
            if demo.url.trim().is_empty() {
                return Err(ContentError::MissingDemoUrl {
                    title: demo.title.es.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn nav_label(&self, section: SectionId, lang: Language) -> &str {
        self.nav.get(&section).map_or("", |l| l.get(lang).as_str())
    }

    pub fn heading(&self, section: SectionId, lang: Language) -> &str {
        self.headings.get(&section).map_or("", |l| l.get(lang).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_is_valid() {
        let content = Content::bundled().unwrap();
        assert_eq!(content.name, "Matias Guerrero");
        assert_eq!(content.education.len(), 3);
        assert_eq!(content.experience.len(), 6);
        assert_eq!(content.demos.len(), 3);
    }

    #[test]
    fn every_section_has_labels_in_both_languages() {
        let content = Content::bundled().unwrap();
        for section in SectionId::ALL {
            for lang in [Language::Es, Language::En] {
                assert!(!content.nav_label(section, lang).is_empty());
                assert!(!content.heading(section, lang).is_empty());
            }
        }
        assert_eq!(content.heading(SectionId::Experience, Language::En), "Professional Experience");
    }

    #[test]
    fn missing_nav_entry_is_rejected() {
        let mut content = Content::bundled().unwrap();
        content.nav.remove(&SectionId::Hobbies);
        let err = content.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::MissingSection {
                section: SectionId::Hobbies,
                table: "nav"
            }
        ));
    }

    #[test]
    fn empty_translation_is_rejected() {
        let mut content = Content::bundled().unwrap();
        content.bio.en = "  ".to_string();
        let err = content.validate().unwrap_err();
        assert!(matches!(
            err,
            ContentError::EmptyTranslation {
                language: Language::En,
                ..
            }
        ));
        assert_eq!(err.to_string(), "`bio` has no `en` translation");
    }

    #[test]
    fn demo_without_url_is_rejected() {
        let mut content = Content::bundled().unwrap();
        content.demos[0].url.clear();
        assert!(matches!(
            content.validate(),
            Err(ContentError::MissingDemoUrl { .. })
        ));
    }

    #[test]
    fn experience_without_technologies_is_rejected() {
        let mut content = Content::bundled().unwrap();
        content.experience[2].en.technologies.clear();
        let title = content.experience[2].en.title.clone();
        let err = content.validate().unwrap_err();
        assert!(matches!(
            &err,
            ContentError::MissingTechnologies { title: t } if *t == title
        ));
        assert!(err.to_string().ends_with("lists no technologies"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Content::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
