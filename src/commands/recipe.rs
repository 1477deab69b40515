// src/commands/recipe.rs

//! Recipe CLI commands
//!
//! Every add and edit runs the validator first and stops with its message
//! before anything is written.

use super::{check_form, finish, open_cookbook, print_json};
use anyhow::Result;
use recetario::cookbook::{
    RECIPE_CREATED, RECIPE_DELETED, RECIPE_INGREDIENT_ADDED, RECIPE_INGREDIENT_DELETED,
    RECIPE_INGREDIENT_UPDATED, RECIPE_UPDATED,
};
use recetario::{Config, RecipeForm, RecipeIngredientView, RecipeView};
use serde::Serialize;

/// Fields given to `recipe edit`; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub time: Option<String>,
    pub diners: Option<String>,
    pub calories: Option<String>,
    pub preparation: Option<String>,
}

#[derive(Serialize)]
struct RecipeDetail<'a> {
    #[serde(flatten)]
    recipe: &'a RecipeView,
    ingredients: &'a [RecipeIngredientView],
}

/// List all recipes
pub fn cmd_recipe_list(config: &Config, db_path: &str, json: bool) -> Result<()> {
    let book = open_cookbook(config, db_path)?;
    let recipes = book.list_recipes()?;

    if json {
        return print_json(&recipes);
    }

    if recipes.is_empty() {
        println!("No recipes yet.");
        println!("\nUse 'recetario recipe add' to add a recipe.");
        return Ok(());
    }

    println!("Recipes ({}):", recipes.len());
    for recipe in &recipes {
        println!(
            "  [{}] {} - {} for {} diner(s), {} kcal",
            recipe.id, recipe.name, recipe.prep_time, recipe.diners, recipe.calories
        );
    }

    Ok(())
}

/// Show a recipe with its ingredients
pub fn cmd_recipe_show(config: &Config, db_path: &str, id: i64, json: bool) -> Result<()> {
    let book = open_cookbook(config, db_path)?;
    let recipe = book
        .get_recipe(id)?
        .ok_or_else(|| anyhow::anyhow!("Recipe {} not found", id))?;
    let ingredients = book.list_recipe_ingredients(id)?;

    if json {
        return print_json(&RecipeDetail {
            recipe: &recipe,
            ingredients: &ingredients,
        });
    }

    println!("Recipe: {}", recipe.name);
    println!("  ID: {}", recipe.id);
    println!("  Preparation time: {}", recipe.prep_time);
    println!("  Diners: {}", recipe.diners);
    println!("  Calories: {}", recipe.calories);
    if !ingredients.is_empty() {
        println!("  Ingredients:");
        for line in &ingredients {
            println!("    {} {} {}", line.quantity, line.unit, line.ingredient);
        }
    }
    println!();
    println!("{}", recipe.preparation);

    Ok(())
}

/// Add a new recipe
pub fn cmd_recipe_add(config: &Config, db_path: &str, form: RecipeForm) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    check_form(book.validate_recipe(None, &form))?;
    finish(book.create_recipe(&form), RECIPE_CREATED)
}

/// Edit an existing recipe
pub fn cmd_recipe_edit(
    config: &Config,
    db_path: &str,
    id: i64,
    changes: RecipeChanges,
) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    let current = book
        .get_recipe(id)?
        .ok_or_else(|| anyhow::anyhow!("Recipe {} not found", id))?;

    let form = RecipeForm {
        name: changes.name.unwrap_or(current.name),
        prep_time: changes
            .time
            .unwrap_or_else(|| current.prep_time.to_string()),
        diners: changes.diners.unwrap_or_else(|| current.diners.to_string()),
        calories: changes
            .calories
            .unwrap_or_else(|| current.calories.to_string()),
        preparation: changes.preparation.unwrap_or(current.preparation),
    };

    check_form(book.validate_recipe(Some(id), &form))?;
    finish(book.edit_recipe(id, &form), RECIPE_UPDATED)
}

/// Remove a recipe
pub fn cmd_recipe_remove(config: &Config, db_path: &str, id: i64) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    finish(book.delete_recipe(id), RECIPE_DELETED)
}

/// List the ingredients of a recipe
pub fn cmd_recipe_ingredients(config: &Config, db_path: &str, id: i64, json: bool) -> Result<()> {
    let book = open_cookbook(config, db_path)?;
    let recipe = book
        .get_recipe(id)?
        .ok_or_else(|| anyhow::anyhow!("Recipe {} not found", id))?;
    let lines = book.list_recipe_ingredients(id)?;

    if json {
        return print_json(&lines);
    }

    if lines.is_empty() {
        println!("Recipe '{}' has no ingredients.", recipe.name);
        return Ok(());
    }

    println!("Ingredients of '{}' ({}):", recipe.name, lines.len());
    for line in &lines {
        println!(
            "  [{}] {} - {} {}",
            line.ingredient_id, line.ingredient, line.quantity, line.unit
        );
    }

    Ok(())
}

/// Add an ingredient to a recipe
pub fn cmd_recipe_add_ingredient(
    config: &Config,
    db_path: &str,
    recipe_id: i64,
    ingredient_id: i64,
    quantity: &str,
) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    check_form(book.validate_recipe_ingredient(recipe_id, None, Some(ingredient_id), quantity))?;
    finish(
        book.add_recipe_ingredient(recipe_id, ingredient_id, quantity),
        RECIPE_INGREDIENT_ADDED,
    )
}

/// Change the quantity of a recipe ingredient, optionally swapping the ingredient
pub fn cmd_recipe_edit_ingredient(
    config: &Config,
    db_path: &str,
    recipe_id: i64,
    ingredient_id: i64,
    replace_with: Option<i64>,
    quantity: &str,
) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    let target = replace_with.unwrap_or(ingredient_id);

    check_form(book.validate_recipe_ingredient(
        recipe_id,
        Some(ingredient_id),
        Some(target),
        quantity,
    ))?;
    finish(
        book.edit_recipe_ingredient(recipe_id, ingredient_id, target, quantity),
        RECIPE_INGREDIENT_UPDATED,
    )
}

/// Remove an ingredient from a recipe
pub fn cmd_recipe_remove_ingredient(
    config: &Config,
    db_path: &str,
    recipe_id: i64,
    ingredient_id: i64,
) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    finish(
        book.delete_recipe_ingredient(recipe_id, ingredient_id),
        RECIPE_INGREDIENT_DELETED,
    )
}
