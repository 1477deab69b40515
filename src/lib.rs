// src/lib.rs

//! Recetario recipe book
//!
//! Keeps recipes, a catalog of priced ingredients and the quantities each
//! recipe uses, and scales a recipe's preparation time and cost for a
//! number of diners.
//!
//! # Architecture
//!
//! - Database-first: all state in SQLite, schema versioned by migrations
//! - Validators: forms are checked rule by rule before any mutation
//! - Facade: `Cookbook` answers every mutation with a user-facing message
//! - Stable ids: entities are addressed by row id, never by list position

pub mod config;
pub mod cookbook;
pub mod currency;
pub mod db;
mod error;
pub mod prep_time;
pub mod scale;
pub mod validate;

pub use config::{Config, InUsePolicy};
pub use cookbook::{Cookbook, IngredientView, RecipeIngredientView, RecipeView};
pub use currency::CurrencyFormat;
pub use error::{Error, Result, ValidationError};
pub use prep_time::PrepTime;
pub use scale::{Preparation, PreparationIngredient, ScaleError};
pub use validate::{IngredientForm, RecipeForm};
