// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recetario::{Config, Cookbook, IngredientForm, RecipeForm};
use tempfile::TempDir;

/// Create an empty recipe book in a fresh database file.
///
/// Returns (TempDir, db_path, Cookbook) - keep the TempDir alive to prevent cleanup.
pub fn setup_empty_cookbook() -> (TempDir, String, Cookbook) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("recetario.db")
        .to_str()
        .unwrap()
        .to_string();

    recetario::db::init(&db_path).unwrap();
    let book = Cookbook::open(&Config::default(), &db_path).unwrap();
    (temp_dir, db_path, book)
}

/// Create a recipe book with Ajiaco (4 diners, one hour) using potato and
/// chicken, plus an unused rice ingredient.
pub fn setup_cookbook() -> (TempDir, String, Cookbook) {
    let (temp_dir, db_path, mut book) = setup_empty_cookbook();

    assert_eq!(
        book.create_recipe(&recipe_form("Ajiaco", "01:00:00", "4")),
        "recipe created successfully"
    );
    for (name, unit, price) in [
        ("Potato", "kg", "3000"),
        ("Chicken", "kg", "12000"),
        ("Rice", "kg", "4000"),
    ] {
        assert_eq!(
            book.create_ingredient(&ingredient_form(name, unit, price)),
            "ingredient created successfully"
        );
    }

    let ajiaco = recipe_id(&book, "Ajiaco");
    let potato = ingredient_id(&book, "Potato", "kg");
    let chicken = ingredient_id(&book, "Chicken", "kg");
    assert_eq!(
        book.add_recipe_ingredient(ajiaco, potato, "2"),
        "ingredient added to recipe"
    );
    assert_eq!(
        book.add_recipe_ingredient(ajiaco, chicken, "1"),
        "ingredient added to recipe"
    );

    (temp_dir, db_path, book)
}

pub fn recipe_form(name: &str, prep_time: &str, diners: &str) -> RecipeForm {
    RecipeForm {
        name: name.to_string(),
        prep_time: prep_time.to_string(),
        diners: diners.to_string(),
        calories: "500".to_string(),
        preparation: "Simmer everything together".to_string(),
    }
}

pub fn ingredient_form(name: &str, unit: &str, price: &str) -> IngredientForm {
    IngredientForm {
        name: name.to_string(),
        unit: unit.to_string(),
        price: price.to_string(),
        purchase_source: "Market".to_string(),
    }
}

/// Id of the recipe with `name`, panicking when it is missing
pub fn recipe_id(book: &Cookbook, name: &str) -> i64 {
    book.list_recipes()
        .unwrap()
        .into_iter()
        .find(|r| r.name == name)
        .map(|r| r.id)
        .unwrap_or_else(|| panic!("recipe {} not found", name))
}

/// Id of the ingredient with `name` and `unit`, panicking when it is missing
pub fn ingredient_id(book: &Cookbook, name: &str, unit: &str) -> i64 {
    book.list_ingredients()
        .unwrap()
        .into_iter()
        .find(|i| i.name == name && i.unit == unit)
        .map(|i| i.id)
        .unwrap_or_else(|| panic!("ingredient {} ({}) not found", name, unit))
}
