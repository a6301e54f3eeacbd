use anyhow::Result;
use spiceroute_application::RecipeDetailLoader;

use crate::context::AppContext;
use crate::render;

/// Loads and prints one recipe. `segments` may be a whole id or the pieces
/// of a detail route.
pub async fn show(ctx: &AppContext, segments: &[String]) -> Result<()> {
    let loader = RecipeDetailLoader::new(ctx.api.clone());
    let view = loader.open_segments(segments).await;
    println!("{}", render::load_state(&view, render::recipe_detail));
    Ok(())
}
