//! Bilingual label dictionary.
//!
//! # Design Decisions
//! - Two static tables, one per language, keyed by label name
//! - A lookup miss renders the key itself (nav labels for `home` rely on this)
//! - Tables are hand-maintained; `ja` must carry every key `en` carries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ja,
            Language::Ja => Language::En,
        }
    }

    /// Language code as used in query strings and `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Caption of the button that switches away from this language.
    pub fn switch_caption(self) -> &'static str {
        match self {
            Language::En => "日本語",
            Language::Ja => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Label keys present in both tables.
pub mod keys {
    pub const WELCOME: &str = "welcome";
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const CONTACT: &str = "contact";
    pub const QUICK_LINKS: &str = "quickLinks";
    pub const SOCIAL_MEDIA: &str = "socialMedia";
    pub const COPYRIGHT: &str = "copyright";
    pub const SUBSCRIBE: &str = "subscribe";
    pub const SUBSCRIBE_BUTTON: &str = "subscribeButton";
    pub const CONTACT_INFO: &str = "contactInfo";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const VIEW_PROJECT: &str = "viewProject";
}

type Table = &'static [(&'static str, &'static str)];

const EN: Table = &[
    (keys::WELCOME, "Welcome to My Portfolio"),
    (keys::ABOUT, "About Me"),
    (keys::PROJECTS, "WORKS"),
    (keys::CONTACT, "Get in Touch"),
    (keys::QUICK_LINKS, "Quick Links"),
    (keys::SOCIAL_MEDIA, "Social Media"),
    (keys::COPYRIGHT, "© 2024 Toshiki Sakuta. All rights reserved."),
    (keys::SUBSCRIBE, "Subscribe to Newsletter"),
    (keys::SUBSCRIBE_BUTTON, "Subscribe"),
    (keys::CONTACT_INFO, "Contact Information"),
    (keys::ADDRESS, "Osaka, Japan"),
    (keys::PHONE, "+81 080-4560-1124"),
    (keys::EMAIL, "toshikiii7@outlook.com"),
    (keys::VIEW_PROJECT, "View Project"),
];

const JA: Table = &[
    (keys::WELCOME, "私の世界へようこそ"),
    (keys::ABOUT, "私について"),
    (keys::PROJECTS, "作品"),
    (keys::CONTACT, "お問い合わせ"),
    (keys::QUICK_LINKS, "クイックリンク"),
    (keys::SOCIAL_MEDIA, "ソーシャルメディア"),
    (keys::COPYRIGHT, "© 2024 作田敏希. All rights reserved."),
    (keys::SUBSCRIBE, "ニュースレターを購読する"),
    (keys::SUBSCRIBE_BUTTON, "購読する"),
    (keys::CONTACT_INFO, "連絡先情報"),
    (keys::ADDRESS, "大阪府大阪市"),
    (keys::PHONE, "080-4560-1124"),
    (keys::EMAIL, "toshikiii7@outlook.com"),
    (keys::VIEW_PROJECT, "プロジェクトを見る"),
];

/// Label table for one language.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    language: Language,
    entries: Table,
}

impl Dictionary {
    /// Table for `language`.
    pub fn for_language(language: Language) -> Self {
        let entries = match language {
            Language::En => EN,
            Language::Ja => JA,
        };
        Self { language, entries }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a label, returning `None` on a miss.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Look up a label, falling back to the key itself on a miss.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// All keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(k, _)| *k)
    }
}
