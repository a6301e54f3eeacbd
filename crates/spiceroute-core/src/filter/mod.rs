//! Filter dimensions, the URL-backed filter set, and filter option lists.

pub mod dimension;
pub mod options;
pub mod set;

pub use dimension::FilterDimension;
pub use options::FilterOptions;
pub use set::{FilterSet, RECIPES_PATH};
