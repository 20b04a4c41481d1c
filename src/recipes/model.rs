use serde::{Deserialize, Serialize};

pub type RecipeId = u64;

/// A stored recipe.
///
/// This is the persisted schema: `image` is written as an empty string when absent and
/// `tags` may be missing in older blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(default, with = "image_url")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn from_draft(id: RecipeId, draft: RecipeDraft) -> Self {
        Self {
            id,
            title: draft.title,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
            image: draft.image,
            tags: draft.tags,
        }
    }

    /// The recipe's content without its identity.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            image: self.image.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Validated recipe content that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
}

const DEMO_IMAGE: &str =
    "https://images.pexels.com/photos/461382/pexels-photo-461382.jpeg?h=400&w=700&auto=compress";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The recipes used to seed an empty store.
pub fn demo_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Classic Spaghetti Carbonara".to_string(),
            ingredients: strings(&["spaghetti", "egg", "pancetta", "parmesan", "black pepper"]),
            instructions: "1. Cook spaghetti. 2. Fry pancetta. 3. Mix eggs and cheese. \
                4. Combine spaghetti, pancetta, and egg-cheese mix off the heat. \
                5. Add pepper and serve."
                .to_string(),
            image: Some(DEMO_IMAGE.to_string()),
            tags: strings(&["italian", "pasta"]),
        },
        Recipe {
            id: 2,
            title: "Guacamole".to_string(),
            ingredients: strings(&["avocado", "lime", "onion", "tomato", "salt", "cilantro"]),
            instructions: "1. Mash avocados. 2. Mix in lime juice, onion, tomato, and cilantro. \
                3. Season with salt."
                .to_string(),
            image: Some(DEMO_IMAGE.to_string()),
            tags: strings(&["mexican", "vegan", "appetizer"]),
        },
    ]
}

mod image_url {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(image: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(image.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        Ok(raw
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }
}
