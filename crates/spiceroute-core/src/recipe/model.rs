//! Recipe domain models as returned by the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recipe summary or full recipe.
///
/// `id` is opaque and frequently a provenance URL. `instructions` is only
/// present in detail responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "yield")]
    pub recipe_yield: Option<String>,
    #[serde(default)]
    pub main_ingredient: Option<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// One page of search results plus the total number of matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub total: u64,
}

impl SearchResult {
    /// A valid response without any recipe. This is a display state, not an error.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Ingredient quantity. The backend sends numbers or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

/// One ingredient usage of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    #[serde(default)]
    pub value: Option<Amount>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl IngredientLine {
    /// `"200 g rijst"`, `"snufje zout"`, `"rijst"`.
    pub fn display_line(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(value) = &self.value {
            let value = value.to_string();
            if !value.is_empty() {
                parts.push(value);
            }
        }
        if let Some(unit) = self.unit.as_deref().filter(|u| !u.is_empty()) {
            parts.push(unit.to_string());
        }
        parts.push(self.name.clone());
        parts.join(" ")
    }
}

/// A recipe similar to the one being viewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRecipe {
    pub recipe: Recipe,
    #[serde(default)]
    pub similarity: Option<f64>,
    /// Human-readable match label, e.g. `"87% match"`.
    #[serde(default)]
    pub shared_ingredients: Option<String>,
}

/// Full detail response for a single recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub related: Vec<RelatedRecipe>,
}
