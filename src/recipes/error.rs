use crate::model::RecipeId;
use thiserror::Error;

/// Field-level problems found when submitting the recipe form.
///
/// These never escape to the top-level handler: the form shows them inline and
/// blocks the save.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("At least one ingredient required")]
    IngredientsRequired,

    #[error("Instructions required")]
    InstructionsRequired,
}

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    NotFound(RecipeId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
