//! One-shot screens: home feed, categories, ingredient index, filter options.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use spiceroute_application::{
    AddressBar, CategoryBrowser, HomeFeed, IngredientIndex, RecipeListController,
};
use spiceroute_core::category::CategoryKind;
use spiceroute_core::ingredient::IndexLetter;

use crate::context::AppContext;
use crate::render;

pub async fn home(ctx: &AppContext) -> Result<()> {
    let feed = HomeFeed::new(ctx.api.clone());
    let view = feed.load().await;

    println!("{}", "Uitgelichte recepten".bold());
    println!();
    println!("{}", render::load_state(&view, |recipes| render::recipe_grid(recipes)));
    Ok(())
}

pub async fn categories(ctx: &AppContext, kind: CategoryKind) -> Result<()> {
    let browser = CategoryBrowser::new(ctx.api.clone());
    let view = browser.select(kind).await;
    println!(
        "{}",
        render::load_state(&view, |tiles| render::category_tiles(kind, tiles))
    );
    Ok(())
}

pub async fn ingredients(ctx: &AppContext, letter: Option<IndexLetter>, search: Option<&str>) -> Result<()> {
    let index = IngredientIndex::new(ctx.api.clone());
    let mut view = index.select_letter(letter).await;
    if let Some(search) = search {
        view = index.set_search(search).await;
    }

    let heading = match letter {
        Some(letter) => format!("Ingrediënten met {}", letter.as_char()),
        None => "Alle ingrediënten".to_string(),
    };
    println!("{}", heading.bold());
    println!(
        "{}",
        render::load_state(&view, |entries| render::ingredient_grid(entries))
    );
    Ok(())
}

pub async fn filters(ctx: &AppContext) -> Result<()> {
    let list = RecipeListController::new(ctx.api.clone(), Arc::new(AddressBar::default()));
    list.load_filter_options().await;

    let snapshot = list.snapshot().await;
    println!(
        "{}",
        render::load_state(&snapshot.options, |options| {
            render::filter_options(options, &snapshot.filters)
        })
    );
    Ok(())
}
