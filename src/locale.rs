//! Locale identifiers
//!
//! This module parses and normalizes `language[-script][-region]` tags and
//! computes the fallback chain used when looking up locale data.

use std::fmt;
use std::str::FromStr;

use crate::parser::parse_locale_tag_str;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    /// The tag is empty or not a well-formed `language[-script][-region]` identifier
    #[error("invalid locale tag: {0:?}")]
    InvalidTag(String),
}

type Result<T> = std::result::Result<T, LocaleError>;

const UND: &str = "und";

/// A language identifier with optional script and region
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// Parse a locale tag such as `bn`, `en-US`, `sr_Latn_RS`
    ///
    /// Subtags are normalized: lowercase language, titlecase script,
    /// uppercase region.
    pub fn try_from_str(tag: &str) -> Result<Self> {
        let parts =
            parse_locale_tag_str(tag).ok_or_else(|| LocaleError::InvalidTag(tag.to_string()))?;

        Ok(Self {
            language: parts.language.to_ascii_lowercase(),
            script: parts.script.map(titlecase),
            region: parts.region.map(str::to_ascii_uppercase),
        })
    }

    /// The root locale, `und`
    pub fn und() -> Self {
        Self {
            language: UND.to_string(),
            script: None,
            region: None,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn is_und(&self) -> bool {
        self.language == UND && self.script.is_none() && self.region.is_none()
    }

    /// Canonical tag as an owned string
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// The locale itself followed by progressively less specific locales, ending with `und`
    ///
    /// `sr-Latn-RS` yields `sr-Latn-RS`, `sr-Latn`, `sr`, `und`.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];
        let mut current = self.clone();

        while !current.is_und() {
            if current.region.is_some() {
                current.region = None;
            } else if current.script.is_some() {
                current.script = None;
            } else {
                current = Locale::und();
            }
            chain.push(current.clone());
        }

        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::und()
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_str(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}

fn titlecase(subtag: &str) -> String {
    let mut result = String::with_capacity(subtag.len());
    for (i, c) in subtag.chars().enumerate() {
        if i == 0 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}
