use super::Transition;
use crate::error::{RecipeError, Result};
use crate::model::{Recipe, RecipeId};

/// Drops the recipe with `id`. There is no trash: confirm before calling.
pub fn run(recipes: &[Recipe], id: RecipeId) -> Result<Transition> {
    let removed = recipes
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .ok_or(RecipeError::NotFound(id))?;

    let next = recipes.iter().filter(|r| r.id != id).cloned().collect();

    Ok(Transition {
        recipes: next,
        affected: removed,
    })
}
