//! Filter dimensions and their URL / wire names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

use crate::error::SpiceError;

/// One categorical axis recipes can be filtered by.
///
/// Every dimension has two names: the key used in the shareable list URL
/// (`/recipes?country=...`) and the key the backend's search endpoint
/// expects (`/recipes?countries=...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    /// Cuisine of origin.
    Country,
    /// Culinary region.
    Region,
    /// Cooking method.
    Method,
    /// The primary ingredient. Single-select.
    MainIngredient,
    /// Any ingredient used in the recipe.
    Ingredient,
}

impl FilterDimension {
    /// Key of this dimension in the list URL.
    pub fn url_key(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Region => "region",
            Self::Method => "method",
            Self::MainIngredient => "main_ingredient",
            Self::Ingredient => "ingredients",
        }
    }

    /// Key of this dimension on the search endpoint.
    pub fn api_key(self) -> &'static str {
        match self {
            Self::Country => "countries",
            Self::Region => "regions",
            Self::Method => "methods",
            Self::MainIngredient => "main_ingredients",
            Self::Ingredient => "ingredients",
        }
    }

    /// Looks a dimension up by its URL key. Unknown keys yield `None`.
    pub fn from_url_key(key: &str) -> Option<Self> {
        match key {
            "country" => Some(Self::Country),
            "region" => Some(Self::Region),
            "method" => Some(Self::Method),
            "main_ingredient" => Some(Self::MainIngredient),
            "ingredients" => Some(Self::Ingredient),
            _ => None,
        }
    }

    /// Whether the dimension holds at most one value.
    pub fn is_single_valued(self) -> bool {
        matches!(self, Self::MainIngredient)
    }

    /// Dutch label shown above the dimension's controls.
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Keuken",
            Self::Region => "Regio",
            Self::Method => "Kookmethode",
            Self::MainIngredient => "Hoofdingrediënt",
            Self::Ingredient => "Ingrediënten",
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_key())
    }
}

impl FromStr for FilterDimension {
    type Err = SpiceError;

    /// Accepts the URL key, plus `ingredient` as an alias of `ingredients`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "ingredient" {
            return Ok(Self::Ingredient);
        }
        Self::from_url_key(&key)
            .ok_or_else(|| SpiceError::validation(format!("unknown filter dimension '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_url_key_round_trip() {
        for dimension in FilterDimension::iter() {
            assert_eq!(
                FilterDimension::from_url_key(dimension.url_key()),
                Some(dimension)
            );
        }
    }

    #[test]
    fn test_api_keys_are_plural() {
        assert_eq!(FilterDimension::Country.api_key(), "countries");
        assert_eq!(FilterDimension::MainIngredient.api_key(), "main_ingredients");
        assert_eq!(FilterDimension::Ingredient.api_key(), "ingredients");
    }

    #[test]
    fn test_only_main_ingredient_is_single_valued() {
        let single: Vec<_> = FilterDimension::iter()
            .filter(|d| d.is_single_valued())
            .collect();
        assert_eq!(single, vec![FilterDimension::MainIngredient]);
    }

    #[test]
    fn test_from_str_accepts_alias() {
        assert_eq!(
            "ingredient".parse::<FilterDimension>().unwrap(),
            FilterDimension::Ingredient
        );
        assert_eq!(
            "Main_Ingredient".parse::<FilterDimension>().unwrap(),
            FilterDimension::MainIngredient
        );
        assert!("flavour".parse::<FilterDimension>().is_err());
    }
}
