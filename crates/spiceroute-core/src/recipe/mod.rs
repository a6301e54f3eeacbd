//! Recipes: models, search queries and detail identifiers.

pub mod detail_id;
pub mod model;
pub mod query;

pub use detail_id::{normalize_recipe_id, recipe_id_from_segments};
pub use model::{Amount, IngredientLine, Recipe, RecipeDetail, RelatedRecipe, SearchResult};
pub use query::SearchQuery;
