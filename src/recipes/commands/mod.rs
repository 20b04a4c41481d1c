//! # Command Layer
//!
//! Pure transitions over the recipe collection. Every mutating command takes the current
//! collection by reference and returns a [`Transition`]: the complete next collection plus
//! the recipe it touched. Nothing here reads or writes storage; the repository decides
//! when a transition becomes the new state and persists it.

use crate::config::RecipesConfig;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeId};

pub mod add;
pub mod config;
pub mod delete;
pub mod get;
pub mod search;
pub mod update;

/// The outcome of a mutating command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub recipes: Vec<Recipe>,
    pub affected: Recipe,
}

/// The id a new recipe receives: one past the largest id in use.
pub fn next_id(recipes: &[Recipe]) -> Result<RecipeId> {
    recipes
        .iter()
        .map(|r| r.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| RecipeError::Store("No recipe ids left above the largest one".into()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result handed back to UI clients.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<Recipe>,
    pub config: Option<RecipesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_config(mut self, config: RecipesConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::recipe;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]).unwrap(), 1);
    }

    #[test]
    fn next_id_follows_the_largest_not_the_count() {
        let recipes = vec![recipe(3, "A", &["a"], &[]), recipe(10, "B", &["b"], &[])];
        assert_eq!(next_id(&recipes).unwrap(), 11);
    }

    #[test]
    fn next_id_refuses_to_wrap() {
        let recipes = vec![recipe(u64::MAX, "Last", &["a"], &[])];
        assert!(matches!(next_id(&recipes), Err(RecipeError::Store(_))));
    }
}
