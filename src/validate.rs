// src/validate.rs

//! Form validation for recipes, ingredients and recipe ingredients
//!
//! Each validator checks its rules in a fixed order and stops at the first
//! one that fails, returning `Error::Validation` with the message to show.
//! Store errors hit while checking uniqueness propagate unchanged so the
//! caller can tell a rejected form from a broken database.

use crate::config::InUsePolicy;
use crate::currency::CurrencyFormat;
use crate::db::models::{Ingredient, Recipe, RecipeIngredient};
use crate::error::{Error, Result, ValidationError};
use crate::prep_time::PrepTime;
use rusqlite::Connection;

/// Longest name, unit or purchase source accepted for an ingredient
pub const MAX_FIELD_LEN: usize = 255;

/// Raw recipe form input
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub name: String,
    pub prep_time: String,
    pub diners: String,
    pub calories: String,
    pub preparation: String,
}

/// Raw ingredient form input
#[derive(Debug, Clone, Default)]
pub struct IngredientForm {
    pub name: String,
    pub unit: String,
    pub price: String,
    pub purchase_source: String,
}

/// Parse an integer field, ignoring surrounding whitespace
fn parse_integer(field: &str) -> Option<i64> {
    field.trim().parse().ok()
}

fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

impl RecipeForm {
    /// Build the stored representation
    ///
    /// Fails with a parse error when a field is not in the expected format.
    pub fn to_recipe(&self) -> Result<Recipe> {
        let prep_time = PrepTime::parse(&self.prep_time)?;
        let diners = parse_integer(&self.diners)
            .ok_or_else(|| Error::ParseError(format!("invalid diners '{}'", self.diners)))?;
        let calories = parse_integer(&self.calories)
            .ok_or_else(|| Error::ParseError(format!("invalid calories '{}'", self.calories)))?;

        Ok(Recipe::new(
            self.name.trim().to_string(),
            prep_time,
            diners,
            calories,
            self.preparation.clone(),
        ))
    }
}

impl IngredientForm {
    /// Build the stored representation, reading the price with `currency`
    pub fn to_ingredient(&self, currency: &CurrencyFormat) -> Result<Ingredient> {
        let unit_price = currency.parse(&self.price)?;

        Ok(Ingredient::new(
            self.name.trim().to_string(),
            self.unit.trim().to_string(),
            unit_price,
            self.purchase_source.trim().to_string(),
        ))
    }
}

/// Validate a recipe form. `id` is `None` when creating a new recipe.
pub fn validate_recipe(conn: &Connection, id: Option<i64>, form: &RecipeForm) -> Result<()> {
    if is_blank(&form.name) {
        return Err(ValidationError::RecipeNameEmpty.into());
    }
    if is_blank(&form.calories) {
        return Err(ValidationError::CaloriesEmpty.into());
    }
    if is_blank(&form.preparation) {
        return Err(ValidationError::PreparationEmpty.into());
    }
    if is_blank(&form.prep_time) || PrepTime::parse(&form.prep_time).is_err() {
        return Err(ValidationError::PrepTimeFormat.into());
    }

    match parse_integer(&form.diners) {
        None => return Err(ValidationError::DinersNotInteger.into()),
        Some(n) if n < 0 => return Err(ValidationError::DinersNegative.into()),
        Some(_) => {}
    }

    match parse_integer(&form.calories) {
        Some(n) if n >= 0 => {}
        _ => return Err(ValidationError::CaloriesInvalid.into()),
    }

    // Renaming onto another recipe's name is left to the UNIQUE constraint
    let existing = Recipe::find_by_name(conn, form.name.trim())?;
    if (!existing.is_empty() && id.is_none()) || existing.len() > 1 {
        return Err(ValidationError::DuplicateRecipe.into());
    }

    Ok(())
}

/// Validate an ingredient form. `id` is `None` when creating a new ingredient.
pub fn validate_ingredient(
    conn: &Connection,
    id: Option<i64>,
    form: &IngredientForm,
    currency: &CurrencyFormat,
    policy: InUsePolicy,
) -> Result<()> {
    if form.name.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::NameTooLong.into());
    }
    if form.unit.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::UnitTooLong.into());
    }
    if form.purchase_source.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::SourceTooLong.into());
    }

    if is_blank(&form.name)
        || is_blank(&form.unit)
        || is_blank(&form.price)
        || is_blank(&form.purchase_source)
    {
        return Err(ValidationError::FieldsRequired.into());
    }

    match currency.parse(&form.price) {
        Err(_) => return Err(ValidationError::PriceNotInteger.into()),
        Ok(price) if price < 0 => return Err(ValidationError::PriceNegative.into()),
        Ok(_) => {}
    }

    let name = form.name.trim();
    let unit = form.unit.trim();
    let matches = Ingredient::find_by_name_and_unit(conn, name, unit)?;
    let duplicate = match (id, matches.as_slice()) {
        (_, []) => false,
        (None, [_]) => true,
        (Some(id), [only]) => only.id != Some(id),
        (_, _) => true,
    };
    if duplicate {
        return Err(ValidationError::DuplicateIngredient.into());
    }

    if let Some(id) = id {
        let current = Ingredient::find_by_id(conn, id)?
            .ok_or_else(|| Error::not_found(format!("ingredient {}", id)))?;

        if Ingredient::recipe_count(conn, id)? > 0 {
            let blocked = match policy {
                InUsePolicy::AnyEdit => true,
                InUsePolicy::IdentityChange => current.name != name || current.unit != unit,
            };
            if blocked {
                return Err(ValidationError::IngredientInUse.into());
            }
        }
    }

    Ok(())
}

/// Validate adding (or re-pointing) an ingredient on a recipe
///
/// `current` is the ingredient of the association being edited, or `None`
/// when adding a new one.
pub fn validate_recipe_ingredient(
    conn: &Connection,
    recipe_id: i64,
    current: Option<i64>,
    ingredient_id: Option<i64>,
    quantity: &str,
) -> Result<()> {
    let ingredient_id = match ingredient_id {
        Some(id) if !is_blank(quantity) => id,
        _ => return Err(ValidationError::AssociationFieldsEmpty.into()),
    };

    match parse_integer(quantity) {
        None => return Err(ValidationError::QuantityNotInteger.into()),
        Some(n) if n < 0 => return Err(ValidationError::QuantityNegative.into()),
        Some(_) => {}
    }

    if Recipe::find_by_id(conn, recipe_id)?.is_none()
        || Ingredient::find_by_id(conn, ingredient_id)?.is_none()
    {
        return Err(ValidationError::AssociationTargetMissing.into());
    }

    if current != Some(ingredient_id)
        && RecipeIngredient::find_by_pair(conn, recipe_id, ingredient_id)?.is_some()
    {
        return Err(ValidationError::DuplicateAssociation.into());
    }

    Ok(())
}

/// Parse a quantity field that already passed validation
pub fn parse_quantity(quantity: &str) -> Result<i64> {
    parse_integer(quantity)
        .ok_or_else(|| Error::ParseError(format!("invalid quantity '{}'", quantity)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn form(name: &str, time: &str, diners: &str, calories: &str, prep: &str) -> RecipeForm {
        RecipeForm {
            name: name.to_string(),
            prep_time: time.to_string(),
            diners: diners.to_string(),
            calories: calories.to_string(),
            preparation: prep.to_string(),
        }
    }

    fn ingredient_form(name: &str, unit: &str, price: &str, source: &str) -> IngredientForm {
        IngredientForm {
            name: name.to_string(),
            unit: unit.to_string(),
            price: price.to_string(),
            purchase_source: source.to_string(),
        }
    }

    fn message(result: Result<()>) -> String {
        match result {
            Ok(()) => String::new(),
            Err(Error::Validation(v)) => v.to_string(),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_recipe_rules_in_order() {
        let conn = db::open_in_memory().unwrap();
        let cases = [
            (form("", "01:00:00", "4", "500", "mix"), "recipe field must not be empty"),
            (form("Soup", "01:00:00", "4", "", "mix"), "calories per serving field must not be empty"),
            (form("Soup", "01:00:00", "4", "500", ""), "preparation field must not be empty"),
            (
                form("Soup", "", "4", "500", "mix"),
                "preparation time field must not be empty and must use format HH:MM:SS",
            ),
            (
                form("Soup", "1 hour", "4", "500", "mix"),
                "preparation time field must not be empty and must use format HH:MM:SS",
            ),
            (form("Soup", "01:00:00", "four", "500", "mix"), "number of servings must be an integer"),
            (form("Soup", "01:00:00", "-1", "500", "mix"), "number of servings cannot be negative"),
            (form("Soup", "01:00:00", "4", "lots", "mix"), "calories must be a positive integer"),
            (form("Soup", "01:00:00", "4", "-20", "mix"), "calories must be a positive integer"),
        ];

        for (input, expected) in cases {
            assert_eq!(message(validate_recipe(&conn, None, &input)), expected);
        }
        assert_eq!(
            message(validate_recipe(&conn, None, &form("Soup", "01:00:00", "4", "500", "mix"))),
            ""
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let conn = db::open_in_memory().unwrap();
        // Empty name and bad time: the name rule comes first
        let input = form("", "bad", "x", "", "");
        assert_eq!(
            message(validate_recipe(&conn, None, &input)),
            "recipe field must not be empty"
        );
    }

    #[test]
    fn test_duplicate_recipe_name() {
        let conn = db::open_in_memory().unwrap();
        let ajiaco = form("Ajiaco", "01:00:00", "4", "500", "Boil");
        let id = ajiaco.to_recipe().unwrap().insert(&conn).unwrap();

        // Creating a second one is rejected, name compared after trimming
        let again = form("  Ajiaco ", "00:30:00", "2", "300", "Other");
        assert_eq!(
            message(validate_recipe(&conn, None, &again)),
            "a recipe with this name already exists"
        );

        // Editing the stored one keeps its own name
        assert_eq!(message(validate_recipe(&conn, Some(id), &ajiaco)), "");
    }

    #[test]
    fn test_ingredient_rules_in_order() {
        let conn = db::open_in_memory().unwrap();
        let fmt = CurrencyFormat::default();
        let long = "x".repeat(256);
        let policy = InUsePolicy::IdentityChange;

        let cases = [
            (ingredient_form(&long, "kg", "1", "Market"), "ingredient name cannot exceed 255 characters"),
            (ingredient_form("Rice", &long, "1", "Market"), "unit of measure cannot exceed 255 characters"),
            (ingredient_form("Rice", "kg", "1", &long), "purchase source cannot exceed 255 characters"),
            (ingredient_form("", "kg", "1", "Market"), "all fields are required"),
            (ingredient_form("Rice", "kg", "", "Market"), "all fields are required"),
            (ingredient_form("Rice", "kg", "cheap", "Market"), "price must be an integer"),
            (ingredient_form("Rice", "kg", "12.50", "Market"), "price must be an integer"),
            (ingredient_form("Rice", "kg", "--5", "Market"), "price must be an integer"),
            (ingredient_form("Rice", "kg", "-$-5", "Market"), "price must be an integer"),
            (
                ingredient_form("Rice", "kg", "--9223372036854775808", "Market"),
                "price must be an integer",
            ),
            (ingredient_form("Rice", "kg", "-3", "Market"), "price cannot be negative"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                message(validate_ingredient(&conn, None, &input, &fmt, policy)),
                expected
            );
        }

        let ok = ingredient_form("Rice", "kg", "$4,000", "Market");
        assert_eq!(message(validate_ingredient(&conn, None, &ok, &fmt, policy)), "");
    }

    #[test]
    fn test_name_of_exactly_255_chars_is_accepted() {
        let conn = db::open_in_memory().unwrap();
        let name = "ñ".repeat(255);
        let input = ingredient_form(&name, "kg", "1", "Market");
        assert_eq!(
            message(validate_ingredient(
                &conn,
                None,
                &input,
                &CurrencyFormat::default(),
                InUsePolicy::IdentityChange
            )),
            ""
        );
    }

    #[test]
    fn test_ingredient_uniqueness() {
        let conn = db::open_in_memory().unwrap();
        let fmt = CurrencyFormat::default();
        let policy = InUsePolicy::IdentityChange;

        let rice_kg = ingredient_form("Rice", "kg", "4000", "Market");
        let rice_kg_id = rice_kg.to_ingredient(&fmt).unwrap().insert(&conn).unwrap();
        let rice_g = ingredient_form("Rice", "g", "5", "Market");

        assert_eq!(
            message(validate_ingredient(&conn, None, &rice_kg, &fmt, policy)),
            "an ingredient with this name and unit already exists"
        );
        assert_eq!(message(validate_ingredient(&conn, None, &rice_g, &fmt, policy)), "");

        // Editing Rice/kg itself is fine
        assert_eq!(
            message(validate_ingredient(&conn, Some(rice_kg_id), &rice_kg, &fmt, policy)),
            ""
        );

        // Editing another ingredient into Rice/kg is not
        let rice_g_id = rice_g.to_ingredient(&fmt).unwrap().insert(&conn).unwrap();
        assert_eq!(
            message(validate_ingredient(&conn, Some(rice_g_id), &rice_kg, &fmt, policy)),
            "an ingredient with this name and unit already exists"
        );
    }

    #[test]
    fn test_ingredient_in_use_policies() {
        let conn = db::open_in_memory().unwrap();
        let fmt = CurrencyFormat::default();

        let recipe_id = form("Ajiaco", "01:00:00", "4", "500", "Boil")
            .to_recipe()
            .unwrap()
            .insert(&conn)
            .unwrap();
        let potato = ingredient_form("Potato", "kg", "3000", "Market");
        let potato_id = potato.to_ingredient(&fmt).unwrap().insert(&conn).unwrap();
        RecipeIngredient::new(recipe_id, potato_id, 2).insert(&conn).unwrap();

        let new_price = ingredient_form("Potato", "kg", "3500", "Supermarket");
        let renamed = ingredient_form("Criolla potato", "kg", "3000", "Market");

        // Price and source edits pass under the identity policy
        assert_eq!(
            message(validate_ingredient(
                &conn,
                Some(potato_id),
                &new_price,
                &fmt,
                InUsePolicy::IdentityChange
            )),
            ""
        );
        assert_eq!(
            message(validate_ingredient(
                &conn,
                Some(potato_id),
                &renamed,
                &fmt,
                InUsePolicy::IdentityChange
            )),
            "this ingredient is already used in a recipe"
        );

        // The strict policy blocks every edit
        assert_eq!(
            message(validate_ingredient(
                &conn,
                Some(potato_id),
                &new_price,
                &fmt,
                InUsePolicy::AnyEdit
            )),
            "this ingredient is already used in a recipe"
        );

        // Creating is never blocked by the rule
        let yuca = ingredient_form("Yuca", "kg", "2500", "Market");
        assert_eq!(
            message(validate_ingredient(&conn, None, &yuca, &fmt, InUsePolicy::AnyEdit)),
            ""
        );
    }

    #[test]
    fn test_recipe_ingredient_rules() {
        let conn = db::open_in_memory().unwrap();
        let fmt = CurrencyFormat::default();

        let recipe_id = form("Ajiaco", "01:00:00", "4", "500", "Boil")
            .to_recipe()
            .unwrap()
            .insert(&conn)
            .unwrap();
        let potato_id = ingredient_form("Potato", "kg", "3000", "Market")
            .to_ingredient(&fmt)
            .unwrap()
            .insert(&conn)
            .unwrap();

        let check = |current, ingredient, quantity| {
            message(validate_recipe_ingredient(
                &conn, recipe_id, current, ingredient, quantity,
            ))
        };

        assert_eq!(check(None, None, "2"), "ingredient and quantity fields cannot be empty");
        assert_eq!(
            check(None, Some(potato_id), ""),
            "ingredient and quantity fields cannot be empty"
        );
        assert_eq!(check(None, Some(potato_id), "two"), "quantity must be an integer");
        assert_eq!(check(None, Some(potato_id), "-2"), "quantity cannot be negative");
        assert_eq!(
            check(None, Some(9999), "2"),
            "the selected recipe or ingredient no longer exists"
        );
        assert_eq!(check(None, Some(potato_id), "2"), "");

        RecipeIngredient::new(recipe_id, potato_id, 2).insert(&conn).unwrap();
        assert_eq!(
            check(None, Some(potato_id), "3"),
            "ingredient already stored for this recipe"
        );
        // Editing the quantity of the same association is allowed
        assert_eq!(check(Some(potato_id), Some(potato_id), "3"), "");
    }

    #[test]
    fn test_form_conversion_trims_names() {
        let recipe = form("  Ajiaco  ", "01:00:00", " 4 ", "500", "Boil")
            .to_recipe()
            .unwrap();
        assert_eq!(recipe.name, "Ajiaco");
        assert_eq!(recipe.diners, 4);

        let ingredient = ingredient_form(" Rice ", " kg ", "$1,500", " Market ")
            .to_ingredient(&CurrencyFormat::default())
            .unwrap();
        assert_eq!(ingredient.name, "Rice");
        assert_eq!(ingredient.unit, "kg");
        assert_eq!(ingredient.unit_price, 1500);
        assert_eq!(ingredient.purchase_source, "Market");

        assert!(form("A", "nope", "4", "1", "x").to_recipe().is_err());
        assert!(parse_quantity("x").is_err());
        assert_eq!(parse_quantity(" 7 ").unwrap(), 7);
    }
}
