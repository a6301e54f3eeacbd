//! The recipe list, one-shot and interactive.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use spiceroute_application::{AddressBar, RecipeListController};
use spiceroute_core::filter::{FilterDimension, RECIPES_PATH};

use crate::context::AppContext;
use crate::helper::CliHelper;
use crate::render;

const BROWSE_COMMANDS: &[&str] = &[
    "next", "prev", "page", "toggle", "clear", "reset", "reload", "open", "filters", "help",
    "quit",
];

/// Accepts `country=X`, `?country=X` or `/recipes?country=X`.
fn list_href(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        None => RECIPES_PATH.to_string(),
        Some(q) if q.starts_with('/') => q.to_string(),
        Some(q) => format!("{}?{}", RECIPES_PATH, q.trim_start_matches('?')),
    }
}

fn controller(ctx: &AppContext, query: Option<&str>) -> RecipeListController {
    let address = Arc::new(AddressBar::new(&list_href(query)));
    RecipeListController::new(ctx.api.clone(), address)
}

pub async fn show(
    ctx: &AppContext,
    query: Option<&str>,
    page: i64,
    toggles: &[(FilterDimension, String)],
) -> Result<()> {
    let list = controller(ctx, query);

    if toggles.is_empty() {
        list.load().await;
    } else {
        for (dimension, value) in toggles {
            list.apply_filter_toggle(*dimension, value).await;
        }
    }
    if page != 1 && list.snapshot().await.view.is_ready() {
        list.jump_to(page).await;
    }

    println!("{}", render::recipe_list(&list.snapshot().await));
    Ok(())
}

/// A parsed line of the browse REPL.
#[derive(Debug, PartialEq)]
enum BrowseCommand {
    Next,
    Prev,
    Page(i64),
    Toggle(FilterDimension, String),
    Clear(FilterDimension),
    Reset,
    Reload,
    Open(String),
    Filters,
    Help,
    Quit,
}

fn parse_browse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let dimension = |raw: &str| raw.parse::<FilterDimension>().map_err(|e| e.to_string());

    match word {
        "n" | "next" => Ok(BrowseCommand::Next),
        "p" | "prev" => Ok(BrowseCommand::Prev),
        "page" => rest
            .parse()
            .map(BrowseCommand::Page)
            .map_err(|_| format!("'{}' is geen paginanummer", rest)),
        "toggle" => {
            let (dim, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Ok(BrowseCommand::Toggle(dimension(dim)?, value.trim().to_string()))
        }
        "clear" => Ok(BrowseCommand::Clear(dimension(rest)?)),
        "reset" => Ok(BrowseCommand::Reset),
        "reload" => Ok(BrowseCommand::Reload),
        "open" if !rest.is_empty() => Ok(BrowseCommand::Open(list_href(Some(rest)))),
        "filters" => Ok(BrowseCommand::Filters),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("Onbekend commando: {}", other)),
    }
}

fn print_help() {
    let lines = [
        "n | next                 volgende pagina",
        "p | prev                 vorige pagina",
        "page <n>                 naar pagina n",
        "toggle <filter> <waarde> filterwaarde aan/uit (main_ingredient zonder waarde wist)",
        "clear <filter>           alle waarden van een filter wissen",
        "reset                    alle filters wissen",
        "reload                   opnieuw laden",
        "open <url>               lijst-URL openen, bv. /recipes?country=Peru",
        "filters                  filteropties tonen",
        "quit                     stoppen",
    ];
    for line in lines {
        println!("{}", line.bright_black());
    }
}

pub async fn browse(ctx: &AppContext, query: Option<&str>) -> Result<()> {
    let list = controller(ctx, query);
    list.load().await;
    println!("{}", render::recipe_list(&list.snapshot().await));

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::words(BROWSE_COMMANDS)));

    println!();
    println!("{}", "Type 'help' for commands, 'quit' to exit.".bright_black());

    loop {
        match rl.readline("recepten> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                let command = match parse_browse_command(&line) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                let changed = match command {
                    BrowseCommand::Quit => break,
                    BrowseCommand::Help => {
                        print_help();
                        continue;
                    }
                    BrowseCommand::Filters => {
                        list.load_filter_options().await;
                        let snapshot = list.snapshot().await;
                        println!(
                            "{}",
                            render::load_state(&snapshot.options, |options| {
                                render::filter_options(options, &snapshot.filters)
                            })
                        );
                        continue;
                    }
                    BrowseCommand::Next => list.next_page().await,
                    BrowseCommand::Prev => list.prev_page().await,
                    BrowseCommand::Page(page) => list.jump_to(page).await,
                    BrowseCommand::Toggle(dimension, value) => {
                        list.apply_filter_toggle(dimension, &value).await;
                        true
                    }
                    BrowseCommand::Clear(dimension) => {
                        list.clear_dimension(dimension).await;
                        true
                    }
                    BrowseCommand::Reset => {
                        list.reset_filters().await;
                        true
                    }
                    BrowseCommand::Reload => list.reload().await,
                    BrowseCommand::Open(href) => {
                        list.open(&href).await;
                        true
                    }
                };

                if changed {
                    println!("{}", render::recipe_list(&list.snapshot().await));
                } else {
                    println!("{}", "Geen andere pagina beschikbaar.".bright_black());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_href() {
        assert_eq!(list_href(None), "/recipes");
        assert_eq!(list_href(Some("  ")), "/recipes");
        assert_eq!(list_href(Some("country=Peru")), "/recipes?country=Peru");
        assert_eq!(list_href(Some("?country=Peru")), "/recipes?country=Peru");
        assert_eq!(
            list_href(Some("/recipes?method=Stoven")),
            "/recipes?method=Stoven"
        );
    }

    #[test]
    fn test_parse_browse_command() {
        assert_eq!(parse_browse_command("n"), Ok(BrowseCommand::Next));
        assert_eq!(parse_browse_command(" prev "), Ok(BrowseCommand::Prev));
        assert_eq!(parse_browse_command("page 4"), Ok(BrowseCommand::Page(4)));
        assert!(parse_browse_command("page vier").is_err());
        assert_eq!(
            parse_browse_command("toggle ingredients rode peper"),
            Ok(BrowseCommand::Toggle(
                FilterDimension::Ingredient,
                "rode peper".to_string()
            ))
        );
        assert_eq!(
            parse_browse_command("toggle main_ingredient"),
            Ok(BrowseCommand::Toggle(
                FilterDimension::MainIngredient,
                String::new()
            ))
        );
        assert_eq!(
            parse_browse_command("clear country"),
            Ok(BrowseCommand::Clear(FilterDimension::Country))
        );
        assert_eq!(
            parse_browse_command("open region=Azie"),
            Ok(BrowseCommand::Open("/recipes?region=Azie".to_string()))
        );
        assert!(parse_browse_command("open").is_err());
        assert!(parse_browse_command("dance").is_err());
    }
}
