use serde::{Deserialize, Serialize};

use crate::carousel::ScrollDirection;
use crate::i18n::Language;
use crate::section::SectionId;
use crate::theme::ThemePreference;
use crate::tracker::ActivationSource;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadActiveSection {
    pub id: SectionId,
    pub source: ActivationSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadLanguage {
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadTheme {
    pub theme: ThemePreference,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadCarouselScroll {
    pub direction: ScrollDirection,
    pub from: f32,
    pub to: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayloadDemo {
    /// Index of the card in the carousel
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SiteEvent {
    ActiveSectionChanged(PayloadActiveSection),
    LanguageChanged(PayloadLanguage),
    ThemeChanged(PayloadTheme),
    CarouselScrolled(PayloadCarouselScroll),
    DemoOpened(PayloadDemo),
    DemoClosed(PayloadDemo),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_contract_active_section() {
        let event = SiteEvent::ActiveSectionChanged(PayloadActiveSection {
            id: SectionId::Skills,
            source: ActivationSource::ScrollSpy,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"ActiveSectionChanged":{"id":"skills","source":"ScrollSpy"}}"#
        );

        let back: SiteEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_contract_carousel() {
        let event = SiteEvent::CarouselScrolled(PayloadCarouselScroll {
            direction: ScrollDirection::Right,
            from: 0.0,
            to: 240.0,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"CarouselScrolled":{"direction":"Right","from":0.0,"to":240.0}}"#
        );
    }

    #[test]
    fn test_contract_language() {
        let event = SiteEvent::LanguageChanged(PayloadLanguage {
            language: Language::En,
        });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"LanguageChanged":{"language":"en"}}"#);
    }
}
