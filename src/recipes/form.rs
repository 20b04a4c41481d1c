//! # Recipe Form
//!
//! The add/edit form works on raw text, exactly as typed. Ingredients and tags are
//! single comma-separated strings until the form is submitted; [`RecipeForm::submit`]
//! checks the required fields and turns the text into a [`RecipeDraft`].

use crate::error::ValidationError;
use crate::model::{Recipe, RecipeDraft};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Ingredients,
    Instructions,
    Image,
    Tags,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Title,
            FormField::Ingredients,
            FormField::Instructions,
            FormField::Image,
            FormField::Tags,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Ingredients => "Ingredients (comma separated)",
            FormField::Instructions => "Instructions",
            FormField::Image => "Image URL",
            FormField::Tags => "Tags (comma separated)",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Title => "title",
            FormField::Ingredients => "ingredients",
            FormField::Instructions => "instructions",
            FormField::Image => "image",
            FormField::Tags => "tags",
        };
        f.write_str(name)
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(FormField::Title),
            "ingredients" => Ok(FormField::Ingredients),
            "instructions" => Ok(FormField::Instructions),
            "image" => Ok(FormField::Image),
            "tags" => Ok(FormField::Tags),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Text the user has typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: String,
    pub tags: String,
}

impl RecipeForm {
    /// An empty form, as shown when adding a recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form prefilled with an existing recipe, lists joined back with ", ".
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            ingredients: recipe.ingredients.join(", "),
            instructions: recipe.instructions.clone(),
            image: recipe.image.clone().unwrap_or_default(),
            tags: recipe.tags.join(", "),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Ingredients => &self.ingredients,
            FormField::Instructions => &self.instructions,
            FormField::Image => &self.image,
            FormField::Tags => &self.tags,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Ingredients => self.ingredients = value,
            FormField::Instructions => self.instructions = value,
            FormField::Image => self.image = value,
            FormField::Tags => self.tags = value,
        }
    }

    pub fn submit(&self) -> Result<RecipeDraft, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        if self.ingredients.trim().is_empty() {
            return Err(ValidationError::IngredientsRequired);
        }
        if self.instructions.trim().is_empty() {
            return Err(ValidationError::InstructionsRequired);
        }

        let ingredients = split_list(&self.ingredients, false);
        // ", ," passes the presence check but yields nothing
        if ingredients.is_empty() {
            return Err(ValidationError::IngredientsRequired);
        }

        let image = self.image.trim();
        Ok(RecipeDraft {
            title: self.title.trim().to_string(),
            ingredients,
            instructions: self.instructions.trim().to_string(),
            image: (!image.is_empty()).then(|| image.to_string()),
            tags: split_list(&self.tags, true),
        })
    }
}

fn split_list(text: &str, lowercase: bool) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            if lowercase {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        })
        .collect()
}
