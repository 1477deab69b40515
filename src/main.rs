// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, IngredientCommands, RecipeCommands};
use recetario::{Config, IngredientForm, RecipeForm};
use std::path::Path;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // No command provided, show help
        println!("Recetario v{}", env!("CARGO_PKG_VERSION"));
        println!("Run 'recetario --help' for usage information");
        return Ok(());
    };

    let config = Config::resolve(cli.config.as_deref().map(Path::new))?;
    let db_path = config.db_path(cli.db_path.as_deref());

    match command {
        Commands::Init => commands::cmd_init(&db_path),

        Commands::Recipe(cmd) => match cmd {
            RecipeCommands::List { json } => commands::cmd_recipe_list(&config, &db_path, json),
            RecipeCommands::Show { id, json } => {
                commands::cmd_recipe_show(&config, &db_path, id, json)
            }
            RecipeCommands::Add {
                name,
                time,
                diners,
                calories,
                preparation,
            } => commands::cmd_recipe_add(
                &config,
                &db_path,
                RecipeForm {
                    name,
                    prep_time: time,
                    diners,
                    calories,
                    preparation,
                },
            ),
            RecipeCommands::Edit {
                id,
                name,
                time,
                diners,
                calories,
                preparation,
            } => commands::cmd_recipe_edit(
                &config,
                &db_path,
                id,
                commands::RecipeChanges {
                    name,
                    time,
                    diners,
                    calories,
                    preparation,
                },
            ),
            RecipeCommands::Remove { id } => commands::cmd_recipe_remove(&config, &db_path, id),
            RecipeCommands::Ingredients { id, json } => {
                commands::cmd_recipe_ingredients(&config, &db_path, id, json)
            }
            RecipeCommands::AddIngredient {
                recipe,
                ingredient,
                quantity,
            } => commands::cmd_recipe_add_ingredient(
                &config, &db_path, recipe, ingredient, &quantity,
            ),
            RecipeCommands::EditIngredient {
                recipe,
                ingredient,
                replace_with,
                quantity,
            } => commands::cmd_recipe_edit_ingredient(
                &config,
                &db_path,
                recipe,
                ingredient,
                replace_with,
                &quantity,
            ),
            RecipeCommands::RemoveIngredient { recipe, ingredient } => {
                commands::cmd_recipe_remove_ingredient(&config, &db_path, recipe, ingredient)
            }
        },

        Commands::Ingredient(cmd) => match cmd {
            IngredientCommands::List { json } => {
                commands::cmd_ingredient_list(&config, &db_path, json)
            }
            IngredientCommands::Show { id, json } => {
                commands::cmd_ingredient_show(&config, &db_path, id, json)
            }
            IngredientCommands::Add {
                name,
                unit,
                price,
                source,
            } => commands::cmd_ingredient_add(
                &config,
                &db_path,
                IngredientForm {
                    name,
                    unit,
                    price,
                    purchase_source: source,
                },
            ),
            IngredientCommands::Edit {
                id,
                name,
                unit,
                price,
                source,
            } => commands::cmd_ingredient_edit(
                &config,
                &db_path,
                id,
                commands::IngredientChanges {
                    name,
                    unit,
                    price,
                    source,
                },
            ),
            IngredientCommands::Remove { id } => {
                commands::cmd_ingredient_remove(&config, &db_path, id)
            }
        },

        Commands::Prepare {
            recipe,
            diners,
            json,
        } => commands::cmd_prepare(&config, &db_path, recipe, diners, json),

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
