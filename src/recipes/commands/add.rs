use super::{next_id, Transition};
use crate::error::Result;
use crate::model::{Recipe, RecipeDraft};

/// Assigns the next id and puts the new recipe at the front of the collection.
pub fn run(recipes: &[Recipe], draft: RecipeDraft) -> Result<Transition> {
    let recipe = Recipe::from_draft(next_id(recipes)?, draft);

    let mut next = Vec::with_capacity(recipes.len() + 1);
    next.push(recipe.clone());
    next.extend_from_slice(recipes);

    Ok(Transition {
        recipes: next,
        affected: recipe,
    })
}
