// src/cookbook.rs

//! The recipe book facade
//!
//! `Cookbook` is what a front-end talks to. It lists entities as plain
//! serializable records, runs the validators, and performs mutations inside
//! a transaction. Validation and mutation are separate calls: a front-end
//! validates a form, shows the message if there is one, and only then asks
//! for the change. Mutations do not re-validate.
//!
//! Validation and mutation calls always answer with a message; store errors
//! are logged and rolled back, never returned.

use crate::config::{Config, InUsePolicy};
use crate::currency::CurrencyFormat;
use crate::db;
use crate::db::models::{Ingredient, Recipe, RecipeIngredient};
use crate::error::{Error, Result, ValidationError};
use crate::prep_time::PrepTime;
use crate::scale::{self, Preparation, ScaleError};
use crate::validate::{self, IngredientForm, RecipeForm};
use rusqlite::Connection;
use serde::Serialize;
use tracing::{info, warn};

pub const RECIPE_CREATED: &str = "recipe created successfully";
pub const RECIPE_UPDATED: &str = "recipe updated successfully";
pub const RECIPE_DELETED: &str = "recipe deleted";
pub const RECIPE_NOT_FOUND: &str = "recipe not found";
pub const RECIPE_CREATE_FAILED: &str = "error creating the recipe, please try again";
pub const RECIPE_UPDATE_FAILED: &str = "error updating the recipe, please try again";
pub const RECIPE_DELETE_FAILED: &str = "error deleting the recipe, please try again";

pub const INGREDIENT_CREATED: &str = "ingredient created successfully";
pub const INGREDIENT_UPDATED: &str = "ingredient updated successfully";
pub const INGREDIENT_DELETED: &str = "ingredient deleted";
pub const INGREDIENT_NOT_FOUND: &str = "ingredient not found";
pub const INGREDIENT_CREATE_FAILED: &str = "error creating the ingredient, please try again";
pub const INGREDIENT_UPDATE_FAILED: &str = "error updating the ingredient, please try again";
pub const INGREDIENT_DELETE_FAILED: &str = "error deleting the ingredient, please try again";

pub const RECIPE_INGREDIENT_ADDED: &str = "ingredient added to recipe";
pub const RECIPE_INGREDIENT_UPDATED: &str = "recipe ingredient updated";
pub const RECIPE_INGREDIENT_DELETED: &str = "ingredient removed from recipe";
pub const RECIPE_INGREDIENT_NOT_FOUND: &str = "recipe ingredient not found";
pub const RECIPE_INGREDIENT_ADD_FAILED: &str = "error adding the ingredient to the recipe, please try again";
pub const RECIPE_INGREDIENT_UPDATE_FAILED: &str = "error updating the recipe ingredient, please try again";
pub const RECIPE_INGREDIENT_DELETE_FAILED: &str = "error removing the ingredient from the recipe, please try again";

pub const VALIDATION_FAILED: &str = "could not validate the form, please try again";

/// A recipe as listed to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeView {
    pub id: i64,
    pub name: String,
    pub prep_time: PrepTime,
    pub diners: i64,
    pub calories: i64,
    pub preparation: String,
}

/// An ingredient as listed to the user, price already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientView {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub price: String,
    pub unit_price: i64,
    pub purchase_source: String,
}

/// One ingredient of a recipe as listed to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeIngredientView {
    pub ingredient_id: i64,
    pub ingredient: String,
    pub unit: String,
    pub quantity: i64,
}

/// Recipe book backed by one SQLite connection
pub struct Cookbook {
    conn: Connection,
    currency: CurrencyFormat,
    in_use_policy: InUsePolicy,
}

impl Cookbook {
    pub fn new(conn: Connection, currency: CurrencyFormat, in_use_policy: InUsePolicy) -> Self {
        Self {
            conn,
            currency,
            in_use_policy,
        }
    }

    /// Open the database at `db_path` with the formatting and policies of `config`
    pub fn open(config: &Config, db_path: &str) -> Result<Self> {
        let conn = db::open(db_path)?;
        Ok(Self::new(
            conn,
            config.currency.clone(),
            config.policy.ingredient_in_use,
        ))
    }

    /// A throwaway in-memory recipe book with default settings
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(
            db::open_in_memory()?,
            CurrencyFormat::default(),
            InUsePolicy::default(),
        ))
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    // Recipes

    /// All recipes sorted by name
    pub fn list_recipes(&self) -> Result<Vec<RecipeView>> {
        let recipes = Recipe::list_all(&self.conn)?;
        Ok(recipes.into_iter().filter_map(recipe_view).collect())
    }

    pub fn get_recipe(&self, id: i64) -> Result<Option<RecipeView>> {
        Ok(Recipe::find_by_id(&self.conn, id)?.and_then(recipe_view))
    }

    /// The recipe at `position` in the sorted listing
    pub fn recipe_at(&self, position: usize) -> Result<Option<RecipeView>> {
        Ok(self.list_recipes()?.into_iter().nth(position))
    }

    /// Check a recipe form; empty string when it is acceptable
    pub fn validate_recipe(&self, id: Option<i64>, form: &RecipeForm) -> String {
        validation_message(
            validate::validate_recipe(&self.conn, id, form),
            RECIPE_NOT_FOUND,
        )
    }

    pub fn create_recipe(&mut self, form: &RecipeForm) -> String {
        let result = form.to_recipe().and_then(|mut recipe| {
            db::transaction(&mut self.conn, |tx| recipe.insert(tx))?;
            info!("Created recipe '{}'", recipe.name);
            Ok(())
        });
        report(result, RECIPE_CREATED, RECIPE_CREATE_FAILED, RECIPE_NOT_FOUND)
    }

    pub fn edit_recipe(&mut self, id: i64, form: &RecipeForm) -> String {
        let result = form.to_recipe().and_then(|mut recipe| {
            recipe.id = Some(id);
            db::transaction(&mut self.conn, |tx| {
                if Recipe::find_by_id(tx, id)?.is_none() {
                    return Err(Error::not_found(format!("recipe {}", id)));
                }
                recipe.update(tx)
            })?;
            info!("Updated recipe {} ('{}')", id, recipe.name);
            Ok(())
        });
        report(result, RECIPE_UPDATED, RECIPE_UPDATE_FAILED, RECIPE_NOT_FOUND)
    }

    /// Delete a recipe together with its ingredient associations
    pub fn delete_recipe(&mut self, id: i64) -> String {
        let result = db::transaction(&mut self.conn, |tx| {
            let associations = RecipeIngredient::delete_by_recipe(tx, id)?;
            if !Recipe::delete(tx, id)? {
                return Err(Error::not_found(format!("recipe {}", id)));
            }
            Ok(associations)
        })
        .map(|associations| {
            info!("Deleted recipe {} and {} association(s)", id, associations);
        });
        report(result, RECIPE_DELETED, RECIPE_DELETE_FAILED, RECIPE_NOT_FOUND)
    }

    // Ingredients

    /// All ingredients sorted by name, then unit
    pub fn list_ingredients(&self) -> Result<Vec<IngredientView>> {
        let ingredients = Ingredient::list_all(&self.conn)?;
        Ok(ingredients
            .into_iter()
            .filter_map(|i| self.ingredient_view(i))
            .collect())
    }

    pub fn get_ingredient(&self, id: i64) -> Result<Option<IngredientView>> {
        Ok(Ingredient::find_by_id(&self.conn, id)?.and_then(|i| self.ingredient_view(i)))
    }

    /// The ingredient at `position` in the sorted listing
    pub fn ingredient_at(&self, position: usize) -> Result<Option<IngredientView>> {
        Ok(self.list_ingredients()?.into_iter().nth(position))
    }

    /// Check an ingredient form; empty string when it is acceptable
    pub fn validate_ingredient(&self, id: Option<i64>, form: &IngredientForm) -> String {
        validation_message(
            validate::validate_ingredient(
                &self.conn,
                id,
                form,
                &self.currency,
                self.in_use_policy,
            ),
            INGREDIENT_NOT_FOUND,
        )
    }

    pub fn create_ingredient(&mut self, form: &IngredientForm) -> String {
        let result = form.to_ingredient(&self.currency).and_then(|mut ingredient| {
            db::transaction(&mut self.conn, |tx| ingredient.insert(tx))?;
            info!("Created ingredient '{}' ({})", ingredient.name, ingredient.unit);
            Ok(())
        });
        report(
            result,
            INGREDIENT_CREATED,
            INGREDIENT_CREATE_FAILED,
            INGREDIENT_NOT_FOUND,
        )
    }

    pub fn edit_ingredient(&mut self, id: i64, form: &IngredientForm) -> String {
        let result = form.to_ingredient(&self.currency).and_then(|mut ingredient| {
            ingredient.id = Some(id);
            db::transaction(&mut self.conn, |tx| ingredient.update(tx))?;
            info!("Updated ingredient {} ('{}')", id, ingredient.name);
            Ok(())
        });
        report(
            result,
            INGREDIENT_UPDATED,
            INGREDIENT_UPDATE_FAILED,
            INGREDIENT_NOT_FOUND,
        )
    }

    /// Delete an ingredient and remove it from every recipe
    pub fn delete_ingredient(&mut self, id: i64) -> String {
        let result = db::transaction(&mut self.conn, |tx| {
            let associations = RecipeIngredient::delete_by_ingredient(tx, id)?;
            if !Ingredient::delete(tx, id)? {
                return Err(Error::not_found(format!("ingredient {}", id)));
            }
            Ok(associations)
        })
        .map(|associations| {
            info!("Deleted ingredient {} and {} association(s)", id, associations);
        });
        report(
            result,
            INGREDIENT_DELETED,
            INGREDIENT_DELETE_FAILED,
            INGREDIENT_NOT_FOUND,
        )
    }

    // Recipe ingredients

    /// Ingredients of a recipe sorted by ingredient name, then unit
    pub fn list_recipe_ingredients(&self, recipe_id: i64) -> Result<Vec<RecipeIngredientView>> {
        let lines = RecipeIngredient::lines_for_recipe(&self.conn, recipe_id)?;
        Ok(lines
            .into_iter()
            .map(|line| RecipeIngredientView {
                ingredient_id: line.ingredient_id,
                ingredient: line.name,
                unit: line.unit,
                quantity: line.quantity,
            })
            .collect())
    }

    /// Check a recipe ingredient form; empty string when it is acceptable
    ///
    /// `current` is the ingredient of the association being edited.
    pub fn validate_recipe_ingredient(
        &self,
        recipe_id: i64,
        current: Option<i64>,
        ingredient_id: Option<i64>,
        quantity: &str,
    ) -> String {
        validation_message(
            validate::validate_recipe_ingredient(
                &self.conn,
                recipe_id,
                current,
                ingredient_id,
                quantity,
            ),
            RECIPE_INGREDIENT_NOT_FOUND,
        )
    }

    pub fn add_recipe_ingredient(
        &mut self,
        recipe_id: i64,
        ingredient_id: i64,
        quantity: &str,
    ) -> String {
        let result = validate::parse_quantity(quantity).and_then(|quantity| {
            db::transaction(&mut self.conn, |tx| {
                ensure_targets_exist(tx, recipe_id, ingredient_id)?;
                RecipeIngredient::new(recipe_id, ingredient_id, quantity).insert(tx)
            })?;
            info!(
                "Added ingredient {} to recipe {} (quantity {})",
                ingredient_id, recipe_id, quantity
            );
            Ok(())
        });

        match result {
            Err(Error::NotFound(_)) => ValidationError::AssociationTargetMissing.to_string(),
            other => report(
                other,
                RECIPE_INGREDIENT_ADDED,
                RECIPE_INGREDIENT_ADD_FAILED,
                RECIPE_INGREDIENT_NOT_FOUND,
            ),
        }
    }

    /// Change the quantity of an association, optionally moving it to
    /// another ingredient
    pub fn edit_recipe_ingredient(
        &mut self,
        recipe_id: i64,
        current_ingredient_id: i64,
        ingredient_id: i64,
        quantity: &str,
    ) -> String {
        let result = validate::parse_quantity(quantity).and_then(|quantity| {
            db::transaction(&mut self.conn, |tx| {
                let entry = RecipeIngredient::find_by_pair(tx, recipe_id, current_ingredient_id)?
                    .ok_or_else(|| {
                        Error::not_found(format!(
                            "ingredient {} of recipe {}",
                            current_ingredient_id, recipe_id
                        ))
                    })?;
                ensure_targets_exist(tx, recipe_id, ingredient_id)?;
                entry.replace(tx, ingredient_id, quantity)
            })?;
            info!(
                "Updated ingredient {} of recipe {} (now {} x{})",
                current_ingredient_id, recipe_id, ingredient_id, quantity
            );
            Ok(())
        });
        report(
            result,
            RECIPE_INGREDIENT_UPDATED,
            RECIPE_INGREDIENT_UPDATE_FAILED,
            RECIPE_INGREDIENT_NOT_FOUND,
        )
    }

    pub fn delete_recipe_ingredient(&mut self, recipe_id: i64, ingredient_id: i64) -> String {
        let result = db::transaction(&mut self.conn, |tx| {
            if !RecipeIngredient::delete(tx, recipe_id, ingredient_id)? {
                return Err(Error::not_found(format!(
                    "ingredient {} of recipe {}",
                    ingredient_id, recipe_id
                )));
            }
            Ok(())
        });
        report(
            result,
            RECIPE_INGREDIENT_DELETED,
            RECIPE_INGREDIENT_DELETE_FAILED,
            RECIPE_INGREDIENT_NOT_FOUND,
        )
    }

    // Scaling

    /// The recipe scaled for `diners`
    pub fn preparation(&self, recipe_id: i64, diners: i64) -> std::result::Result<Preparation, ScaleError> {
        scale::compute_preparation(&self.conn, recipe_id, diners)
    }

    fn ingredient_view(&self, ingredient: Ingredient) -> Option<IngredientView> {
        Some(IngredientView {
            id: ingredient.id?,
            price: self.currency.format(ingredient.unit_price),
            name: ingredient.name,
            unit: ingredient.unit,
            unit_price: ingredient.unit_price,
            purchase_source: ingredient.purchase_source,
        })
    }
}

fn recipe_view(recipe: Recipe) -> Option<RecipeView> {
    Some(RecipeView {
        id: recipe.id?,
        name: recipe.name,
        prep_time: recipe.prep_time,
        diners: recipe.diners,
        calories: recipe.calories,
        preparation: recipe.preparation,
    })
}

fn ensure_targets_exist(conn: &Connection, recipe_id: i64, ingredient_id: i64) -> Result<()> {
    if Recipe::find_by_id(conn, recipe_id)?.is_none() {
        return Err(Error::not_found(format!("recipe {}", recipe_id)));
    }
    if Ingredient::find_by_id(conn, ingredient_id)?.is_none() {
        return Err(Error::not_found(format!("ingredient {}", ingredient_id)));
    }
    Ok(())
}

/// Turn a validator result into the message a front-end shows
fn validation_message(result: Result<()>, missing: &str) -> String {
    match result {
        Ok(()) => String::new(),
        Err(Error::Validation(v)) => v.to_string(),
        Err(Error::NotFound(what)) => {
            warn!("Validation target missing: {}", what);
            missing.to_string()
        }
        Err(e) => {
            warn!("Validation failed: {}", e);
            VALIDATION_FAILED.to_string()
        }
    }
}

/// Turn a mutation result into the message a front-end shows
fn report(result: Result<()>, success: &str, failure: &str, missing: &str) -> String {
    match result {
        Ok(()) => success.to_string(),
        Err(Error::NotFound(what)) => {
            warn!("Not found: {}", what);
            missing.to_string()
        }
        Err(e) if e.is_constraint_violation() => {
            warn!("Integrity check rejected change, rolled back: {}", e);
            failure.to_string()
        }
        Err(e) => {
            warn!("{}: {}", failure, e);
            failure.to_string()
        }
    }
}
