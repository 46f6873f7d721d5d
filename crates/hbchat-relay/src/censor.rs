//! Word censor for relayed messages

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use hbchat_core::prelude::*;

/// Masks configured words, matching anywhere inside other words
#[derive(Debug, Clone, Default)]
pub struct Censor {
    pattern: Option<Regex>,
}

impl Censor {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self::default());
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::config_invalid(format!("censored_words: {}", e)))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Replace every match with `*`, one per character
    pub fn censor<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(pattern) => {
                pattern.replace_all(text, |caps: &regex::Captures| "*".repeat(caps[0].chars().count()))
            }
            None => Cow::Borrowed(text),
        }
    }
}
