//! # Persistence Adapter
//!
//! Reads and writes the whole collection as one JSON array under [`STORAGE_KEY`].
//!
//! Loading never fails because of what is stored. Entries are read one at a time: an
//! entry that is not a recipe, or repeats an id already seen, is dropped and the rest are
//! kept. When nothing usable is left (missing, corrupt, non-array or empty blob) the demo
//! recipes are used and written back immediately. Only a failure to write that seed
//! reaches the caller.

use crate::error::{RecipeError, Result};
use crate::model::{demo_recipes, Recipe};
use crate::store::KeyValueStore;
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;

pub const STORAGE_KEY: &str = "recipes";

pub struct RecipeStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> RecipeStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&mut self) -> Result<Vec<Recipe>> {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(Some(blob)) => parse(&blob),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read stored recipes, starting over: {}", e);
                Vec::new()
            }
        };

        if !stored.is_empty() {
            debug!("loaded {} recipes", stored.len());
            return Ok(stored);
        }

        let seeded = demo_recipes();
        debug!("seeding store with {} demo recipes", seeded.len());
        self.save(&seeded)?;
        Ok(seeded)
    }

    pub fn save(&mut self, recipes: &[Recipe]) -> Result<()> {
        let blob = serde_json::to_string(recipes).map_err(RecipeError::Serialization)?;
        self.store.set(STORAGE_KEY, &blob)?;
        debug!("saved {} recipes", recipes.len());
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse(blob: &str) -> Vec<Recipe> {
    let entries = match serde_json::from_str::<Vec<Value>>(blob) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("stored recipes are unreadable, discarding them: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut recipes = Vec::with_capacity(entries.len());
    for (position, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Recipe>(entry) {
            Ok(recipe) if seen.insert(recipe.id) => recipes.push(recipe),
            Ok(recipe) => warn!(
                "dropping stored entry {}: id {} is already taken",
                position, recipe.id
            ),
            Err(e) => warn!("dropping stored entry {}: {}", position, e),
        }
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{recipe, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn stored_titles(storage: &RecipeStorage<InMemoryStore>) -> Vec<String> {
        let blob = storage.store().get(STORAGE_KEY).unwrap().unwrap();
        let recipes: Vec<Recipe> = serde_json::from_str(&blob).unwrap();
        recipes.into_iter().map(|r| r.title).collect()
    }

    #[test]
    fn empty_store_seeds_and_persists_demo_recipes() {
        let mut storage = RecipeStorage::new(InMemoryStore::new());
        let loaded = storage.load().unwrap();

        let titles: Vec<_> = loaded.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Classic Spaghetti Carbonara", "Guacamole"]);
        assert_eq!(
            stored_titles(&storage),
            vec!["Classic Spaghetti Carbonara", "Guacamole"]
        );
    }

    #[test]
    fn corrupt_blob_falls_back_to_demo() {
        let store = StoreFixture::new().with_raw("{not json").store;
        let mut storage = RecipeStorage::new(store);
        assert_eq!(storage.load().unwrap(), demo_recipes());
        assert_eq!(stored_titles(&storage).len(), 2);
    }

    #[test]
    fn non_array_blob_falls_back_to_demo() {
        let store = StoreFixture::new().with_raw(r#"{"id": 1}"#).store;
        let mut storage = RecipeStorage::new(store);
        assert_eq!(storage.load().unwrap(), demo_recipes());
    }

    #[test]
    fn free_form_objects_are_rejected() {
        let store = StoreFixture::new()
            .with_raw(r#"[{"id": "one", "name": "Soup"}]"#)
            .store;
        let mut storage = RecipeStorage::new(store);
        assert_eq!(storage.load().unwrap(), demo_recipes());
    }

    #[test]
    fn bad_entries_are_dropped_and_good_ones_kept() {
        let store = StoreFixture::new()
            .with_raw(
                r#"[
                    {"id": 3, "title": "Soup", "ingredients": ["water"], "instructions": "Boil.", "image": "", "tags": ["warm"]},
                    {"id": 4, "title": "Broken", "ingredients": ["x"], "instructions": "y", "image": "", "tags": [1]},
                    {"id": 7, "title": "Bread", "ingredients": ["flour"], "instructions": "Bake.", "image": ""}
                ]"#,
            )
            .store;
        let mut storage = RecipeStorage::new(store);

        let titles: Vec<_> = storage.load().unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Soup", "Bread"]);
        // Nothing was reseeded over the stored data
        assert!(storage
            .store()
            .get(STORAGE_KEY)
            .unwrap()
            .unwrap()
            .contains("Soup"));
    }

    #[test]
    fn duplicate_ids_keep_the_first_entry() {
        let store = StoreFixture::new()
            .with_recipes(&[
                recipe(1, "First", &["a"], &[]),
                recipe(1, "Second", &["b"], &[]),
                recipe(2, "Other", &["c"], &[]),
            ])
            .store;
        let mut storage = RecipeStorage::new(store);

        let loaded = storage.load().unwrap();
        let titles: Vec<_> = loaded.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Other"]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let collection = vec![
            recipe(9, "Tea", &["water", "tea leaves"], &[]),
            recipe(4, "Toast", &["bread"], &["breakfast", "quick"]),
        ];
        let mut storage = RecipeStorage::new(InMemoryStore::new());
        storage.save(&collection).unwrap();
        assert_eq!(storage.load().unwrap(), collection);
    }

    #[test]
    fn existing_collection_is_not_reseeded() {
        let store = StoreFixture::new().with_kitchen().store;
        let mut storage = RecipeStorage::new(store);
        let loaded = storage.load().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].title, "Tomato Soup");
    }
}
