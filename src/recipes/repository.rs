//! # Recipe Repository
//!
//! Holds the collection in memory and writes it through to storage after every
//! mutation. The transition itself comes from `commands/`; the repository only swaps
//! in the new collection once it has been persisted, so a failed write leaves the
//! in-memory state as it was.

use crate::commands::{self, Transition};
use crate::error::Result;
use crate::model::{Recipe, RecipeDraft, RecipeId};
use crate::persistence::RecipeStorage;
use crate::store::KeyValueStore;
use log::debug;

pub struct RecipeRepository<S: KeyValueStore> {
    storage: RecipeStorage<S>,
    recipes: Vec<Recipe>,
}

impl<S: KeyValueStore> RecipeRepository<S> {
    /// Loads the collection from `store`, seeding it when empty.
    pub fn open(store: S) -> Result<Self> {
        let mut storage = RecipeStorage::new(store);
        let recipes = storage.load()?;
        Ok(Self { storage, recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find_by_id(&self, id: RecipeId) -> Option<&Recipe> {
        commands::get::run(&self.recipes, id)
    }

    pub fn search(&self, query: &str) -> Vec<Recipe> {
        commands::search::run(&self.recipes, query)
    }

    pub fn add(&mut self, draft: RecipeDraft) -> Result<Recipe> {
        let transition = commands::add::run(&self.recipes, draft)?;
        debug!("adding recipe {}", transition.affected.id);
        self.commit(transition)
    }

    pub fn update(&mut self, id: RecipeId, draft: RecipeDraft) -> Result<Recipe> {
        let transition = commands::update::run(&self.recipes, id, draft)?;
        debug!("updating recipe {}", id);
        self.commit(transition)
    }

    pub fn remove(&mut self, id: RecipeId) -> Result<Recipe> {
        let transition = commands::delete::run(&self.recipes, id)?;
        debug!("removing recipe {}", id);
        self.commit(transition)
    }

    pub fn storage(&self) -> &RecipeStorage<S> {
        &self.storage
    }

    fn commit(&mut self, transition: Transition) -> Result<Recipe> {
        self.storage.save(&transition.recipes)?;
        self.recipes = transition.recipes;
        Ok(transition.affected)
    }
}
