//! Category tiles: recipe counts per country, region, method or main ingredient.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

use crate::error::SpiceError;
use crate::filter::{FilterDimension, FilterSet};

/// The kinds of category the backend aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Country,
    Region,
    Method,
    MainIngredient,
}

impl CategoryKind {
    /// Value of the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        self.dimension().url_key()
    }

    /// The filter dimension a tile of this kind selects.
    pub fn dimension(self) -> FilterDimension {
        match self {
            Self::Country => FilterDimension::Country,
            Self::Region => FilterDimension::Region,
            Self::Method => FilterDimension::Method,
            Self::MainIngredient => FilterDimension::MainIngredient,
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Keukens",
            Self::Region => "Regio's",
            Self::Method => "Methodes",
            Self::MainIngredient => "Hoofdingrediënten",
        }
    }

    /// The list URL a tile named `name` links to.
    pub fn recipes_href(self, name: &str) -> String {
        FilterSet::reset().toggle(self.dimension(), name).href()
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = SpiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "country" => Ok(Self::Country),
            "region" => Ok(Self::Region),
            "method" => Ok(Self::Method),
            "main_ingredient" => Ok(Self::MainIngredient),
            other => Err(SpiceError::validation(format!(
                "unknown category type '{}'",
                other
            ))),
        }
    }
}

/// One category tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub name: String,
    #[serde(default)]
    pub recipe_count: u64,
    #[serde(default)]
    pub image: Option<String>,
}
