//! The filter set and its query-string codec.
//!
//! The list URL is the only place filters live. A `FilterSet` is always
//! decoded fresh from the current query string, and every change produces a
//! new set (and from it a new URL) instead of mutating the old one.

use strum::IntoEnumIterator;
use url::form_urlencoded;

use super::dimension::FilterDimension;

/// Path of the recipe list view.
pub const RECIPES_PATH: &str = "/recipes";

/// Selected values per filter dimension.
///
/// Multi-valued dimensions keep insertion order for stable rendering, but
/// equality treats them as sets.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    countries: Vec<String>,
    regions: Vec<String>,
    methods: Vec<String>,
    main_ingredient: Option<String>,
    ingredients: Vec<String>,
}

impl FilterSet {
    /// The empty filter set, equivalent to a bare list URL.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Decodes a query string (with or without a leading `?`).
    ///
    /// Unrecognized keys and empty values are skipped. Repeated values of a
    /// multi-valued dimension collapse to one entry; repeated
    /// `main_ingredient` keys keep the last value.
    pub fn decode(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut set = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let Some(dimension) = FilterDimension::from_url_key(&key) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            set.insert(dimension, value.into_owned());
        }

        set
    }

    /// Encodes the set as a query string without the leading `?`.
    ///
    /// Dimensions are emitted in a fixed order, values in insertion order.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for dimension in FilterDimension::iter() {
            for value in self.values(dimension) {
                serializer.append_pair(dimension.url_key(), value);
            }
        }
        serializer.finish()
    }

    /// The list URL for this set (`/recipes` or `/recipes?...`).
    pub fn href(&self) -> String {
        let query = self.encode();
        if query.is_empty() {
            RECIPES_PATH.to_string()
        } else {
            format!("{}?{}", RECIPES_PATH, query)
        }
    }

    /// Returns a new set with `value` toggled in `dimension`.
    ///
    /// Multi-valued dimensions remove a present value and append an absent
    /// one. `main_ingredient` is always replaced; an empty value clears it.
    pub fn toggle(&self, dimension: FilterDimension, value: &str) -> Self {
        let mut next = self.clone();

        if dimension.is_single_valued() {
            next.main_ingredient = (!value.is_empty()).then(|| value.to_string());
            return next;
        }

        if value.is_empty() {
            return next;
        }

        if let Some(values) = next.multi_mut(dimension) {
            match values.iter().position(|v| v == value) {
                Some(index) => {
                    values.remove(index);
                }
                None => values.push(value.to_string()),
            }
        }

        next
    }

    /// Returns a new set with every value of `dimension` removed.
    pub fn clear(&self, dimension: FilterDimension) -> Self {
        let mut next = self.clone();
        match next.multi_mut(dimension) {
            Some(values) => values.clear(),
            None => next.main_ingredient = None,
        }
        next
    }

    /// Selected values of one dimension.
    pub fn values(&self, dimension: FilterDimension) -> &[String] {
        match dimension {
            FilterDimension::Country => &self.countries,
            FilterDimension::Region => &self.regions,
            FilterDimension::Method => &self.methods,
            FilterDimension::MainIngredient => self.main_ingredient.as_slice(),
            FilterDimension::Ingredient => &self.ingredients,
        }
    }

    pub fn contains(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        FilterDimension::iter().all(|d| self.values(d).is_empty())
    }

    /// Number of selected values across all dimensions.
    pub fn selected_count(&self) -> usize {
        FilterDimension::iter().map(|d| self.values(d).len()).sum()
    }

    /// Key/value pairs for the backend's search endpoint (plural keys).
    pub fn api_pairs(&self) -> Vec<(&'static str, String)> {
        FilterDimension::iter()
            .flat_map(|d| self.values(d).iter().map(move |v| (d.api_key(), v.clone())))
            .collect()
    }

    fn insert(&mut self, dimension: FilterDimension, value: String) {
        match self.multi_mut(dimension) {
            Some(values) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            None => self.main_ingredient = Some(value),
        }
    }

    fn multi_mut(&mut self, dimension: FilterDimension) -> Option<&mut Vec<String>> {
        match dimension {
            FilterDimension::Country => Some(&mut self.countries),
            FilterDimension::Region => Some(&mut self.regions),
            FilterDimension::Method => Some(&mut self.methods),
            FilterDimension::MainIngredient => None,
            FilterDimension::Ingredient => Some(&mut self.ingredients),
        }
    }
}

impl PartialEq for FilterSet {
    fn eq(&self, other: &Self) -> bool {
        FilterDimension::iter().all(|d| same_members(self.values(d), other.values(d)))
    }
}

impl Eq for FilterSet {}

fn same_members(a: &[String], b: &[String]) -> bool {
    a.len() == b.len() && a.iter().all(|v| b.contains(v))
}
