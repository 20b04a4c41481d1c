use crate::model::{Recipe, RecipeId};

pub fn run(recipes: &[Recipe], id: RecipeId) -> Option<&Recipe> {
    recipes.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::recipe;

    #[test]
    fn finds_by_id_not_position() {
        let recipes = vec![recipe(7, "Soup", &["water"], &[]), recipe(3, "Jam", &["fruit"], &[])];
        assert_eq!(run(&recipes, 3).map(|r| r.title.as_str()), Some("Jam"));
        assert!(run(&recipes, 1).is_none());
    }
}
