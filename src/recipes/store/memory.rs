use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default, Debug, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Recipe, RecipeId};
    use crate::persistence::STORAGE_KEY;

    pub fn recipe(id: RecipeId, title: &str, ingredients: &[&str], tags: &[&str]) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: format!("Make the {}.", title.to_lowercase()),
            image: None,
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_raw(mut self, blob: &str) -> Self {
            self.store.set(STORAGE_KEY, blob).unwrap();
            self
        }

        pub fn with_recipes(self, recipes: &[Recipe]) -> Self {
            let blob = serde_json::to_string(recipes).unwrap();
            self.with_raw(&blob)
        }

        /// Soup (id 1), Pancakes (id 2), Tacos (id 5), in that order.
        pub fn with_kitchen(self) -> Self {
            self.with_recipes(&[
                recipe(1, "Tomato Soup", &["tomato", "basil", "cream"], &["soup", "vegetarian"]),
                recipe(2, "Pancakes", &["flour", "egg", "milk"], &["breakfast"]),
                recipe(5, "Fish Tacos", &["tortilla", "cod", "lime"], &["mexican"]),
            ])
        }
    }
}
