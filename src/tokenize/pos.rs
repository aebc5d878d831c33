//! Part-of-speech tagged tokens.

use crate::error::{EdaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A word paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Parses `word/TAG`. The last `/` separates the tag, so `1/2/NUM` is the
/// word `1/2` tagged `NUM`.
impl FromStr for TaggedToken {
    type Err = EdaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.rsplit_once('/') {
            Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                Ok(Self::new(word, tag))
            }
            _ => Err(EdaError::InvalidTaggedToken(s.to_string())),
        }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.word, self.tag)
    }
}

/// Parse a sequence of `word/TAG` tokens.
pub fn parse_tagged<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<TaggedToken>> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Drop the tags and keep the words, in order.
pub fn strip_tags(tagged: &[TaggedToken]) -> Vec<String> {
    tagged.iter().map(|t| t.word.clone()).collect()
}

/// Keep the words whose tag is in `allowed`, in order.
///
/// Tags are compared exactly.
pub fn filter_by_pos<S: AsRef<str>>(tagged: &[TaggedToken], allowed: &[S]) -> Vec<String> {
    tagged
        .iter()
        .filter(|t| allowed.iter().any(|a| a.as_ref() == t.tag))
        .map(|t| t.word.clone())
        .collect()
}
