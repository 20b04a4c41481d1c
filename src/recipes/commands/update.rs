use super::Transition;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeDraft, RecipeId};

/// Replaces the recipe with `id` in place. Order and every other entry are untouched.
pub fn run(recipes: &[Recipe], id: RecipeId, draft: RecipeDraft) -> Result<Transition> {
    let position = recipes
        .iter()
        .position(|r| r.id == id)
        .ok_or(RecipeError::NotFound(id))?;

    let updated = Recipe::from_draft(id, draft);
    let mut next = recipes.to_vec();
    next[position] = updated.clone();

    Ok(Transition {
        recipes: next,
        affected: updated,
    })
}
