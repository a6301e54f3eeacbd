//! Option lists offered by the filter panel.

use serde::{Deserialize, Serialize};

use super::dimension::FilterDimension;

/// Selectable values per dimension, as returned by the backend's `/filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub main_ingredients: Vec<String>,
}

impl FilterOptions {
    pub fn for_dimension(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Country => &self.countries,
            FilterDimension::Region => &self.regions,
            FilterDimension::Method => &self.methods,
            FilterDimension::MainIngredient => &self.main_ingredients,
            FilterDimension::Ingredient => &self.ingredients,
        }
    }

    /// Whether `value` is one of the offered options. The free-text
    /// ingredient input only accepts known ingredients.
    pub fn offers(&self, dimension: FilterDimension, value: &str) -> bool {
        self.for_dimension(dimension).iter().any(|v| v == value)
    }
}
