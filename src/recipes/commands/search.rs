use crate::model::Recipe;

/// Keeps the recipes whose title, ingredients or tags contain `query`, ignoring case.
///
/// A blank query returns the collection as is. Ingredients and tags are matched on their
/// space-joined form, so a query may span two neighbouring entries.
pub fn run(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return recipes.to_vec();
    }

    recipes
        .iter()
        .filter(|r| matches(r, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased.
pub fn matches(recipe: &Recipe, needle: &str) -> bool {
    recipe.title.to_lowercase().contains(needle)
        || recipe.ingredients.join(" ").to_lowercase().contains(needle)
        || recipe.tags.join(" ").to_lowercase().contains(needle)
}
