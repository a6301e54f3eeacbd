//! Terminal renderers. Pure functions from view data to text.

use colored::Colorize;
use spiceroute_application::ListSnapshot;
use spiceroute_application::messages;
use spiceroute_core::LoadState;
use spiceroute_core::category::{CategoryCount, CategoryKind};
use spiceroute_core::chat::{ChatMessage, Sender};
use spiceroute_core::filter::{FilterDimension, FilterOptions, FilterSet};
use spiceroute_core::ingredient::IngredientCount;
use spiceroute_core::recipe::{Recipe, RecipeDetail};
use strum::IntoEnumIterator;

/// Renders a [`LoadState`], delegating the ready case to `ready`.
pub fn load_state<T>(state: &LoadState<T>, ready: impl FnOnce(&T) -> String) -> String {
    match state {
        LoadState::Loading => "Laden...".bright_black().to_string(),
        LoadState::Ready(value) => ready(value),
        LoadState::Error(message) => error(message),
    }
}

pub fn error(message: &str) -> String {
    message.red().to_string()
}

pub fn recipe_card(recipe: &Recipe) -> String {
    let mut lines = vec![recipe.name.bold().to_string()];

    let meta: Vec<&str> = recipe
        .countries
        .iter()
        .chain(&recipe.methods)
        .map(String::as_str)
        .chain(recipe.recipe_yield.as_deref())
        .collect();
    if !meta.is_empty() {
        lines.push(format!("  {}", meta.join(" · ").bright_black()));
    }
    if let Some(main) = &recipe.main_ingredient {
        lines.push(format!("  {} {}", "Hoofdingrediënt:".bright_black(), main));
    }
    lines.push(format!("  {}", recipe.id.cyan()));
    lines.join("\n")
}

pub fn recipe_grid(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return messages::EMPTY_LIST.yellow().to_string();
    }
    recipes
        .iter()
        .map(recipe_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `Pagina 2 van 5 · 100 recepten`
pub fn pagination(snapshot: &ListSnapshot) -> String {
    let mut parts = vec![format!(
        "Pagina {} van {}",
        snapshot.page.page(),
        snapshot.display_total_pages()
    )];
    parts.push(format!("{} recepten", snapshot.total));
    if snapshot.has_prev() {
        parts.push("p: vorige".to_string());
    }
    if snapshot.has_next() {
        parts.push("n: volgende".to_string());
    }
    parts.join(" · ").bright_black().to_string()
}

pub fn active_filters(filters: &FilterSet) -> String {
    if filters.is_empty() {
        return "Geen filters".bright_black().to_string();
    }
    FilterDimension::iter()
        .filter(|d| !filters.values(*d).is_empty())
        .map(|d| format!("{}: {}", d.label().bold(), filters.values(d).join(", ")))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn recipe_list(snapshot: &ListSnapshot) -> String {
    let body = load_state(&snapshot.view, |result| recipe_grid(&result.recipes));
    let mut out = vec![
        snapshot.href.cyan().to_string(),
        active_filters(&snapshot.filters),
        String::new(),
        body,
    ];
    if snapshot.view.is_ready() {
        out.push(String::new());
        out.push(pagination(snapshot));
    }
    out.join("\n")
}

pub fn recipe_detail(detail: &RecipeDetail) -> String {
    let recipe = &detail.recipe;
    let mut out = vec![recipe.name.bold().underline().to_string()];

    if let Some(description) = &recipe.description {
        out.push(description.clone());
    }
    let origin: Vec<&str> = recipe
        .countries
        .iter()
        .chain(&recipe.regions)
        .map(String::as_str)
        .collect();
    if !origin.is_empty() {
        out.push(format!("{} {}", "Herkomst:".bright_black(), origin.join(", ")));
    }
    if !recipe.methods.is_empty() {
        out.push(format!(
            "{} {}",
            "Methode:".bright_black(),
            recipe.methods.join(", ")
        ));
    }
    if let Some(recipe_yield) = &recipe.recipe_yield {
        out.push(format!("{} {}", "Porties:".bright_black(), recipe_yield));
    }

    if !detail.ingredients.is_empty() {
        out.push(String::new());
        out.push("Ingrediënten".bold().to_string());
        out.extend(
            detail
                .ingredients
                .iter()
                .map(|line| format!("  - {}", line.display_line())),
        );
    }

    if let Some(instructions) = &recipe.instructions {
        out.push(String::new());
        out.push("Bereiding".bold().to_string());
        out.push(instructions.clone());
    }

    if !detail.related.is_empty() {
        out.push(String::new());
        out.push("Vergelijkbare recepten".bold().to_string());
        for related in &detail.related {
            let label = related
                .shared_ingredients
                .clone()
                .or_else(|| related.similarity.map(|s| format!("{:.0}% match", s * 100.0)));
            match label {
                Some(label) => out.push(format!(
                    "  - {} {}",
                    related.recipe.name,
                    format!("({})", label).bright_black()
                )),
                None => out.push(format!("  - {}", related.recipe.name)),
            }
        }
    }

    out.join("\n")
}

pub fn category_tiles(kind: CategoryKind, tiles: &[CategoryCount]) -> String {
    let mut out = vec![kind.label().bold().to_string()];
    if tiles.is_empty() {
        out.push("Geen categorieën gevonden".yellow().to_string());
    }
    out.extend(tiles.iter().map(|tile| {
        format!(
            "  {:<28} {:>5}  {}",
            tile.name,
            tile.recipe_count,
            kind.recipes_href(&tile.name).cyan()
        )
    }));
    out.join("\n")
}

pub fn ingredient_grid(entries: &[IngredientCount]) -> String {
    if entries.is_empty() {
        return "Geen ingrediënten gevonden".yellow().to_string();
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                "  {:<32} {:>5}  {}",
                entry.name,
                entry.recipe_count,
                entry.recipes_href().cyan()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn filter_options(options: &FilterOptions, selected: &FilterSet) -> String {
    FilterDimension::iter()
        .map(|dimension| {
            let values = options
                .for_dimension(dimension)
                .iter()
                .map(|value| {
                    if selected.contains(dimension, value) {
                        format!("[x] {}", value).green().to_string()
                    } else {
                        format!("[ ] {}", value)
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            format!("{} ({})\n  {}", dimension.label().bold(), dimension, values)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn chat_entry(message: &ChatMessage) -> String {
    let time = message.timestamp.format("%H:%M");
    match message.sender {
        Sender::User => format!("{} {}", format!("[{}] jij:", time).green(), message.text),
        Sender::Assistant => format!(
            "{} {}",
            format!("[{}] assistent:", time).bright_magenta(),
            message.text.bright_blue()
        ),
    }
}

pub fn transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(chat_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiceroute_core::pagination::PageState;
    use spiceroute_core::recipe::{IngredientLine, RelatedRecipe, SearchResult};

    fn plain() {
        colored::control::set_override(false);
    }

    fn recipe(name: &str) -> Recipe {
        Recipe {
            id: format!("https://example.com/{}", name.to_lowercase()),
            name: name.to_string(),
            image: None,
            description: None,
            recipe_yield: Some("4 personen".to_string()),
            main_ingredient: Some("Kip".to_string()),
            countries: vec!["Thailand".to_string()],
            regions: Vec::new(),
            methods: vec!["Wokken".to_string()],
            instructions: None,
        }
    }

    fn snapshot(total: u64, page: u32, view: LoadState<SearchResult>) -> ListSnapshot {
        ListSnapshot {
            href: "/recipes?country=Thailand".to_string(),
            filters: FilterSet::decode("country=Thailand"),
            page: PageState::with_limit(page, 24),
            total,
            view,
            options: LoadState::Loading,
        }
    }

    #[test]
    fn test_card_lists_meta() {
        plain();
        let card = recipe_card(&recipe("Pad Thai"));
        assert!(card.starts_with("Pad Thai"));
        assert!(card.contains("Thailand · Wokken · 4 personen"));
        assert!(card.contains("Hoofdingrediënt: Kip"));
    }

    #[test]
    fn test_empty_list_message() {
        plain();
        let out = recipe_list(&snapshot(0, 1, LoadState::Ready(SearchResult::default())));
        assert!(out.contains(messages::EMPTY_LIST));
        assert!(out.contains("Pagina 1 van 1"));
    }

    #[test]
    fn test_error_state_has_no_pagination() {
        plain();
        let out = recipe_list(&snapshot(100, 2, LoadState::Error(messages::LIST_ERROR.to_string())));
        assert!(out.contains(messages::LIST_ERROR));
        assert!(!out.contains("Pagina"));
    }

    #[test]
    fn test_pagination_hints() {
        plain();
        let middle = pagination(&snapshot(100, 3, LoadState::Loading));
        assert_eq!(middle, "Pagina 3 van 5 · 100 recepten · p: vorige · n: volgende");
        let single = pagination(&snapshot(6, 1, LoadState::Loading));
        assert_eq!(single, "Pagina 1 van 1 · 6 recepten");
    }

    #[test]
    fn test_detail_sections() {
        plain();
        let detail = RecipeDetail {
            recipe: Recipe {
                instructions: Some("Bak de kip.".to_string()),
                ..recipe("Kip Pad Krapow")
            },
            ingredients: vec![IngredientLine {
                name: "kip".to_string(),
                value: Some(spiceroute_core::recipe::Amount::Number(300.0)),
                unit: Some("g".to_string()),
            }],
            related: vec![RelatedRecipe {
                recipe: recipe("Pad Thai"),
                similarity: Some(0.42),
                shared_ingredients: None,
            }],
        };
        let out = recipe_detail(&detail);
        assert!(out.contains("  - 300 g kip"));
        assert!(out.contains("Bak de kip."));
        assert!(out.contains("Pad Thai (42% match)"));
    }

    #[test]
    fn test_filter_options_marks_selection() {
        plain();
        let options = FilterOptions {
            countries: vec!["Peru".to_string(), "Thailand".to_string()],
            ..FilterOptions::default()
        };
        let out = filter_options(&options, &FilterSet::decode("country=Thailand"));
        assert!(out.contains("[ ] Peru  [x] Thailand"));
    }

    #[test]
    fn test_category_tiles_link_to_list() {
        plain();
        let out = category_tiles(
            CategoryKind::Country,
            &[CategoryCount {
                name: "Peru".to_string(),
                recipe_count: 3,
                image: None,
            }],
        );
        assert!(out.contains("/recipes?country=Peru"));
    }

    #[test]
    fn test_active_filters() {
        plain();
        assert_eq!(active_filters(&FilterSet::reset()), "Geen filters");
        let out = active_filters(&FilterSet::decode("method=Stoven&method=Wokken"));
        assert!(out.contains("Stoven, Wokken"));
    }
}
