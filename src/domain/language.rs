use anyhow::{anyhow, Error};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A validated Wikidata item identifier, e.g. `Q1860` for English.
///
/// Query templates interpolate this value into SPARQL text without escaping,
/// so construction rejects anything that does not match `Q[0-9]+`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageQid(String);

impl LanguageQid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageQid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageQid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Q[0-9]+$").unwrap());
        let trimmed = s.trim();
        if RE.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(anyhow!(
                "invalid language identifier (expected an item Qid like Q1860): {s}"
            ))
        }
    }
}

/// Item Qid for a handful of well-known language codes.
pub fn qid_for_code(code: &str) -> Option<LanguageQid> {
    let qid = match code {
        "en" => "Q1860",
        "fr" => "Q150",
        "es" => "Q1321",
        "de" => "Q188",
        "it" => "Q652",
        _ => return None,
    };
    Some(LanguageQid(qid.to_string()))
}
