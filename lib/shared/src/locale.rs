use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Display languages offered by the language selector. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    EnglishUs,
    Spanish,
    French,
    Portuguese,
    German,
    Italian,
    Japanese,
    Korean,
    ChineseSimplified,
    Arabic,
}

impl Locale {
    pub const ALL: [Locale; 10] = [
        Locale::EnglishUs,
        Locale::Spanish,
        Locale::French,
        Locale::Portuguese,
        Locale::German,
        Locale::Italian,
        Locale::Japanese,
        Locale::Korean,
        Locale::ChineseSimplified,
        Locale::Arabic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Locale::EnglishUs => "English (US)",
            Locale::Spanish => "Español",
            Locale::French => "Français",
            Locale::Portuguese => "Português",
            Locale::German => "Deutsch",
            Locale::Italian => "Italiano",
            Locale::Japanese => "日本語",
            Locale::Korean => "한국어",
            Locale::ChineseSimplified => "中文(简体)",
            Locale::Arabic => "العربية",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.label() == s)
            .ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}

/// State of the language popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleSelector {
    pub selected: Locale,
    pub open: bool,
}

impl LocaleSelector {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picks a language and closes the popover.
    pub fn select(&mut self, locale: Locale) {
        self.selected = locale;
        self.open = false;
    }

    /// Picks a language by its display label, as carried by the popover entries.
    /// An unknown label leaves the selection untouched but still closes the popover.
    pub fn select_label(&mut self, label: &str) -> Result<Locale> {
        self.open = false;
        let locale = label.parse()?;
        self.selected = locale;
        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for locale in Locale::ALL {
            assert_eq!(locale.label().parse::<Locale>(), Ok(locale));
        }
        assert_eq!(
            "Klingon".parse::<Locale>(),
            Err(Error::UnknownLocale("Klingon".into()))
        );
    }

    #[test]
    fn selecting_closes_popover() {
        let mut selector = LocaleSelector::default();
        assert_eq!(selector.selected.to_string(), "English (US)");
        selector.toggle();
        assert!(selector.open);
        selector.select(Locale::Korean);
        assert!(!selector.open);
        assert_eq!(selector.selected.label(), "한국어");
        selector.toggle();
        selector.toggle();
        assert!(!selector.open);
    }

    #[test]
    fn select_by_label() {
        let mut selector = LocaleSelector::default();
        selector.toggle();
        assert_eq!(selector.select_label("Deutsch"), Ok(Locale::German));
        assert_eq!(selector.selected, Locale::German);
        assert!(!selector.open);

        selector.toggle();
        assert_eq!(
            selector.select_label("Elvish"),
            Err(Error::UnknownLocale("Elvish".into()))
        );
        assert_eq!(selector.selected, Locale::German);
        assert!(!selector.open);
    }
}
