//! # API Facade
//!
//! The API layer is a **thin facade** over the repository and the command layer. One-shot
//! clients (the CLI subcommands) go through [`RecipeApi`]; interactive clients turn it
//! into a [`Session`] with [`RecipeApi::into_session`].
//!
//! The API:
//! - **Dispatches** to the repository and commands
//! - **Runs form validation** and reports failures as messages, not errors
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own besides what the store does, and never prompts: deleting is
//! only called once the client has confirmed.
//!
//! `RecipeApi<S: KeyValueStore>` is generic over the storage backend:
//! - Production: `RecipeApi<FileStore>`
//! - Testing: `RecipeApi<InMemoryStore>`

use crate::commands;
use crate::error::{RecipeError, Result, ValidationError};
use crate::form::RecipeForm;
use crate::model::{Recipe, RecipeId};
use crate::repository::RecipeRepository;
use crate::session::Session;
use crate::store::KeyValueStore;
use crate::view_state::Theme;
use std::path::PathBuf;

pub struct RecipeApi<S: KeyValueStore> {
    repository: RecipeRepository<S>,
    config_dir: PathBuf,
}

impl<S: KeyValueStore> RecipeApi<S> {
    pub fn new(repository: RecipeRepository<S>, config_dir: PathBuf) -> Self {
        Self {
            repository,
            config_dir,
        }
    }

    /// Opens the store and loads (or seeds) the collection.
    pub fn open(store: S, config_dir: PathBuf) -> Result<Self> {
        Ok(Self::new(RecipeRepository::open(store)?, config_dir))
    }

    pub fn list(&self, query: Option<&str>) -> Result<CmdResult> {
        let listed = self.repository.search(query.unwrap_or_default());
        Ok(CmdResult::default().with_listed_recipes(listed))
    }

    pub fn view(&self, id: RecipeId) -> Result<CmdResult> {
        let recipe = self.get(id)?.clone();
        Ok(CmdResult::default().with_listed_recipes(vec![recipe]))
    }

    pub fn get(&self, id: RecipeId) -> Result<&Recipe> {
        self.repository
            .find_by_id(id)
            .ok_or(RecipeError::NotFound(id))
    }

    /// The edit form for `id`, prefilled with its current values.
    pub fn edit_form(&self, id: RecipeId) -> Result<RecipeForm> {
        self.get(id).map(RecipeForm::from_recipe)
    }

    pub fn add(&mut self, form: &RecipeForm) -> Result<CmdResult> {
        let draft = match form.submit() {
            Ok(draft) => draft,
            Err(e) => return Ok(rejected(e)),
        };
        let recipe = self.repository.add(draft)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Recipe added ({}): {}",
            recipe.id, recipe.title
        )));
        Ok(result.with_affected_recipes(vec![recipe]))
    }

    pub fn update(&mut self, id: RecipeId, form: &RecipeForm) -> Result<CmdResult> {
        let draft = match form.submit() {
            Ok(draft) => draft,
            Err(e) => return Ok(rejected(e)),
        };
        let recipe = self.repository.update(id, draft)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Recipe updated ({}): {}",
            recipe.id, recipe.title
        )));
        Ok(result.with_affected_recipes(vec![recipe]))
    }

    pub fn delete(&mut self, id: RecipeId) -> Result<CmdResult> {
        let recipe = self.repository.remove(id)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Recipe deleted ({}): {}",
            recipe.id, recipe.title
        )));
        Ok(result.with_affected_recipes(vec![recipe]))
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn into_session(self, theme: Theme) -> Session<S> {
        Session::new(self.repository, theme)
    }
}

fn rejected(e: ValidationError) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(e.to_string()));
    result
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(temp: &TempDir) -> RecipeApi<InMemoryStore> {
        RecipeApi::open(
            StoreFixture::new().with_kitchen().store,
            temp.path().to_path_buf(),
        )
        .unwrap()
    }

    fn form(title: &str, ingredients: &str, instructions: &str) -> RecipeForm {
        RecipeForm {
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            ..RecipeForm::default()
        }
    }

    #[test]
    fn list_dispatches_search() {
        let temp = TempDir::new().unwrap();
        let api = api(&temp);
        assert_eq!(api.list(None).unwrap().listed_recipes.len(), 3);
        assert_eq!(api.list(Some("breakfast")).unwrap().listed_recipes.len(), 1);
    }

    #[test]
    fn view_unknown_is_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(api(&temp).view(12), Err(RecipeError::NotFound(12))));
    }

    #[test]
    fn add_reports_success() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp);
        let result = api.add(&form("Tea", "water, tea leaves", "Boil. Steep.")).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.affected_recipes[0].id, 6);
        assert!(result.messages[0].content.contains("Tea"));
    }

    #[test]
    fn invalid_form_is_a_message_not_an_error() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp);
        let result = api.add(&form("", "water", "Boil.")).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Title is required");
        assert_eq!(api.list(None).unwrap().listed_recipes.len(), 3);
    }

    #[test]
    fn edit_form_round_trip_keeps_recipe() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp);
        let before = api.get(1).unwrap().clone();

        let form = api.edit_form(1).unwrap();
        api.update(1, &form).unwrap();

        assert_eq!(api.get(1).unwrap(), &before);
    }

    #[test]
    fn delete_removes() {
        let temp = TempDir::new().unwrap();
        let mut api = api(&temp);
        api.delete(2).unwrap();
        assert!(api.get(2).is_err());
    }
}
