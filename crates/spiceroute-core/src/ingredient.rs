//! The A-Z ingredient index.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpiceError};
use crate::filter::{FilterDimension, FilterSet};

/// An ingredient and how many recipes use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCount {
    pub name: String,
    #[serde(default)]
    pub recipe_count: u64,
}

impl IngredientCount {
    /// The list URL showing recipes with this ingredient.
    pub fn recipes_href(&self) -> String {
        FilterSet::reset()
            .toggle(FilterDimension::Ingredient, &self.name)
            .href()
    }

    /// Case-insensitive substring match used by the index search box.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// A letter of the A-Z bar. Always an uppercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexLetter(char);

impl IndexLetter {
    pub fn new(letter: char) -> Result<Self> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper))
        } else {
            Err(SpiceError::validation(format!(
                "index letter must be A-Z, got '{}'",
                letter
            )))
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(SpiceError::validation(format!(
                "index letter must be a single character, got '{}'",
                input
            ))),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// The whole A-Z bar.
    pub fn alphabet() -> impl Iterator<Item = IndexLetter> {
        ('A'..='Z').map(IndexLetter)
    }
}
