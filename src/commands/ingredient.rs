// src/commands/ingredient.rs

//! Ingredient catalog CLI commands

use super::{check_form, finish, open_cookbook, print_json};
use anyhow::Result;
use recetario::cookbook::{INGREDIENT_CREATED, INGREDIENT_DELETED, INGREDIENT_UPDATED};
use recetario::{Config, IngredientForm};

/// Fields given to `ingredient edit`; `None` keeps the stored value
#[derive(Debug, Default)]
pub struct IngredientChanges {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub price: Option<String>,
    pub source: Option<String>,
}

/// List all ingredients
pub fn cmd_ingredient_list(config: &Config, db_path: &str, json: bool) -> Result<()> {
    let book = open_cookbook(config, db_path)?;
    let ingredients = book.list_ingredients()?;

    if json {
        return print_json(&ingredients);
    }

    if ingredients.is_empty() {
        println!("No ingredients yet.");
        println!("\nUse 'recetario ingredient add' to add an ingredient.");
        return Ok(());
    }

    println!("Ingredients ({}):", ingredients.len());
    for ingredient in &ingredients {
        println!(
            "  [{}] {} ({}) - {} from {}",
            ingredient.id,
            ingredient.name,
            ingredient.unit,
            ingredient.price,
            ingredient.purchase_source
        );
    }

    Ok(())
}

/// Show one ingredient
pub fn cmd_ingredient_show(config: &Config, db_path: &str, id: i64, json: bool) -> Result<()> {
    let book = open_cookbook(config, db_path)?;
    let ingredient = book
        .get_ingredient(id)?
        .ok_or_else(|| anyhow::anyhow!("Ingredient {} not found", id))?;

    if json {
        return print_json(&ingredient);
    }

    println!("Ingredient: {}", ingredient.name);
    println!("  ID: {}", ingredient.id);
    println!("  Unit: {}", ingredient.unit);
    println!("  Price: {}", ingredient.price);
    println!("  Bought at: {}", ingredient.purchase_source);

    Ok(())
}

/// Add a new ingredient
pub fn cmd_ingredient_add(config: &Config, db_path: &str, form: IngredientForm) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    check_form(book.validate_ingredient(None, &form))?;
    finish(book.create_ingredient(&form), INGREDIENT_CREATED)
}

/// Edit an existing ingredient
pub fn cmd_ingredient_edit(
    config: &Config,
    db_path: &str,
    id: i64,
    changes: IngredientChanges,
) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    let current = book
        .get_ingredient(id)?
        .ok_or_else(|| anyhow::anyhow!("Ingredient {} not found", id))?;

    // The listed price is already formatted and parses back unchanged
    let form = IngredientForm {
        name: changes.name.unwrap_or(current.name),
        unit: changes.unit.unwrap_or(current.unit),
        price: changes.price.unwrap_or(current.price),
        purchase_source: changes.source.unwrap_or(current.purchase_source),
    };

    check_form(book.validate_ingredient(Some(id), &form))?;
    finish(book.edit_ingredient(id, &form), INGREDIENT_UPDATED)
}

/// Remove an ingredient from the catalog and from every recipe
pub fn cmd_ingredient_remove(config: &Config, db_path: &str, id: i64) -> Result<()> {
    let mut book = open_cookbook(config, db_path)?;
    finish(book.delete_ingredient(id), INGREDIENT_DELETED)
}
