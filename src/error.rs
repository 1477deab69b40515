// src/error.rs

//! Error types for Recetario

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the store, the validator and the facade
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Initialization error: {0}")]
    InitError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Shorthand for a `NotFound` error
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound(what.into())
    }

    /// True when the underlying SQLite error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Error::DatabaseError(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

/// A violated form rule. The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // Recipes
    #[error("recipe field must not be empty")]
    RecipeNameEmpty,
    #[error("calories per serving field must not be empty")]
    CaloriesEmpty,
    #[error("preparation field must not be empty")]
    PreparationEmpty,
    #[error("preparation time field must not be empty and must use format HH:MM:SS")]
    PrepTimeFormat,
    #[error("number of servings must be an integer")]
    DinersNotInteger,
    #[error("number of servings cannot be negative")]
    DinersNegative,
    #[error("calories must be a positive integer")]
    CaloriesInvalid,
    #[error("a recipe with this name already exists")]
    DuplicateRecipe,

    // Ingredients
    #[error("ingredient name cannot exceed 255 characters")]
    NameTooLong,
    #[error("unit of measure cannot exceed 255 characters")]
    UnitTooLong,
    #[error("purchase source cannot exceed 255 characters")]
    SourceTooLong,
    #[error("all fields are required")]
    FieldsRequired,
    #[error("price must be an integer")]
    PriceNotInteger,
    #[error("price cannot be negative")]
    PriceNegative,
    #[error("an ingredient with this name and unit already exists")]
    DuplicateIngredient,
    #[error("this ingredient is already used in a recipe")]
    IngredientInUse,

    // Recipe ingredients
    #[error("ingredient and quantity fields cannot be empty")]
    AssociationFieldsEmpty,
    #[error("quantity must be an integer")]
    QuantityNotInteger,
    #[error("quantity cannot be negative")]
    QuantityNegative,
    #[error("ingredient already stored for this recipe")]
    DuplicateAssociation,
    #[error("the selected recipe or ingredient no longer exists")]
    AssociationTargetMissing,
}
