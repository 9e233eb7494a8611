//! ISO 639-1 language codes used to key translations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::error::Error;
use std::fmt::{Display, Formatter};

static LANGUAGE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2}$").expect("valid language code regex"));

/// Two-letter lowercase language identifier.
///
/// Immutable once constructed; the only way in is [`LanguageCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parses a language code, rejecting anything but two lowercase ASCII letters.
    pub fn parse(value: &str) -> Result<Self, LanguageCodeError> {
        if LANGUAGE_CODE_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(LanguageCodeError(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// Lets keyed maps be queried with plain `&str`; hashing matches `String`.
impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LanguageCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

/// Rejected language code input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCodeError(pub String);

impl Display for LanguageCodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid language code `{}`; expected two lowercase letters",
            self.0
        )
    }
}

impl Error for LanguageCodeError {}
