//! The name shown at the top of a character sheet

use std::fmt;

use crate::error::DomainError;

/// Longest accepted name, counted in characters rather than bytes.
pub const MAX_NAME_CHARS: usize = 200;

/// A character's display name.
///
/// Leading and trailing whitespace is dropped on construction. Blank names
/// and names longer than [`MAX_NAME_CHARS`] are refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = raw.as_ref().trim();
        match name.chars().count() {
            0 => Err(DomainError::validation("Every character needs a name")),
            len if len > MAX_NAME_CHARS => Err(DomainError::validation(format!(
                "Name is {len} characters long, the limit is {MAX_NAME_CHARS}"
            ))),
            _ => Ok(Self(name.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}
