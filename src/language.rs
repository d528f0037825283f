//! # Language Fonts
//!
//! The ImageWriter II ships eight national character sets. The active set is
//! selected through the software switch bank (there is no dedicated escape
//! sequence); see [`crate::protocol::switches`] for the 3-bit language code
//! table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages supported by the ImageWriter II, as per the ImageWriter II
/// Technical Reference Manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    American,
    British,
    German,
    French,
    Swedish,
    Italian,
    Spanish,
    Danish,
}

impl Language {
    /// All eight language fonts, in manual order.
    pub const ALL: [Language; 8] = [
        Language::American,
        Language::British,
        Language::German,
        Language::French,
        Language::Swedish,
        Language::Italian,
        Language::Spanish,
        Language::Danish,
    ];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::American => "American",
            Language::British => "British",
            Language::German => "German",
            Language::French => "French",
            Language::Swedish => "Swedish",
            Language::Italian => "Italian",
            Language::Spanish => "Spanish",
            Language::Danish => "Danish",
        };
        write!(f, "{}", name)
    }
}
