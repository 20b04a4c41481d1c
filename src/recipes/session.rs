//! # Browsing Session
//!
//! Drives the [`ViewState`] against a [`RecipeRepository`]. The session owns the open
//! form and its inline error, so dismissing a modal discards unsaved edits and nothing
//! else. It refuses to select an id that does not resolve; `Add` is the only mode that
//! shows a form without a recipe behind it.

use crate::error::{RecipeError, Result, ValidationError};
use crate::form::{FormField, RecipeForm};
use crate::model::{Recipe, RecipeId};
use crate::repository::RecipeRepository;
use crate::store::KeyValueStore;
use crate::view_state::{ModalMode, Theme, ViewState};
use log::debug;

/// What happened to a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(Recipe),
    /// The form stays open with this error shown inline.
    Invalid(ValidationError),
}

pub struct Session<S: KeyValueStore> {
    repository: RecipeRepository<S>,
    view: ViewState,
    query: String,
    form: Option<RecipeForm>,
    form_error: Option<ValidationError>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(repository: RecipeRepository<S>, theme: Theme) -> Self {
        Self {
            repository,
            view: ViewState::with_theme(theme),
            query: String::new(),
            form: None,
            form_error: None,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn repository(&self) -> &RecipeRepository<S> {
        &self.repository
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn form(&self) -> Option<&RecipeForm> {
        self.form.as_ref()
    }

    pub fn form_error(&self) -> Option<ValidationError> {
        self.form_error
    }

    /// Recipes matching the current search, in collection order.
    pub fn visible(&self) -> Vec<Recipe> {
        self.repository.search(&self.query)
    }

    pub fn displayed(&self) -> Option<&Recipe> {
        self.view.displayed(self.repository.recipes())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn open_view(&mut self, id: RecipeId) -> Result<()> {
        self.require(id)?;
        self.form = None;
        self.form_error = None;
        self.view = self.view.open_view(id);
        Ok(())
    }

    pub fn open_edit(&mut self, id: RecipeId) -> Result<()> {
        let form = RecipeForm::from_recipe(self.require(id)?);
        self.form = Some(form);
        self.form_error = None;
        self.view = self.view.open_edit(id);
        Ok(())
    }

    pub fn open_add(&mut self) {
        self.form = Some(RecipeForm::new());
        self.form_error = None;
        self.view = self.view.open_add();
    }

    /// Dismisses whatever is open. Unsaved form input is dropped.
    pub fn close(&mut self) {
        self.form = None;
        self.form_error = None;
        self.view = self.view.close();
    }

    pub fn toggle_theme(&mut self) {
        self.view = self.view.toggle_theme();
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> Result<()> {
        let form = self
            .form
            .as_mut()
            .ok_or_else(|| RecipeError::Api("No form is open".to_string()))?;
        form.set(field, value);
        Ok(())
    }

    /// Submits the open form: updates in edit mode, adds in add mode, then closes.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let form = self
            .form
            .as_ref()
            .ok_or_else(|| RecipeError::Api("No form is open".to_string()))?;

        let draft = match form.submit() {
            Ok(draft) => draft,
            Err(e) => {
                debug!("form rejected: {}", e);
                self.form_error = Some(e);
                return Ok(SaveOutcome::Invalid(e));
            }
        };

        let saved = match (self.view.modal, self.view.selected_id) {
            (ModalMode::Edit, Some(id)) => self.repository.update(id, draft)?,
            (ModalMode::Add, _) => self.repository.add(draft)?,
            _ => return Err(RecipeError::Api("No form is open".to_string())),
        };

        self.close();
        Ok(SaveOutcome::Saved(saved))
    }

    /// Removes `id`. The caller has already asked the user.
    pub fn delete_confirmed(&mut self, id: RecipeId) -> Result<Recipe> {
        let removed = self.repository.remove(id)?;
        self.close();
        Ok(removed)
    }

    fn require(&self, id: RecipeId) -> Result<&Recipe> {
        self.repository
            .find_by_id(id)
            .ok_or(RecipeError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn session() -> Session<InMemoryStore> {
        let repo = RecipeRepository::open(StoreFixture::new().with_kitchen().store).unwrap();
        Session::new(repo, Theme::Light)
    }

    #[test]
    fn add_tea_scenario() {
        let mut s = session();
        let max_before = s.repository().recipes().iter().map(|r| r.id).max().unwrap();

        s.open_add();
        s.set_field(FormField::Title, "Tea").unwrap();
        s.set_field(FormField::Ingredients, "water, tea leaves").unwrap();
        s.set_field(FormField::Instructions, "Boil. Steep.").unwrap();

        let SaveOutcome::Saved(tea) = s.save().unwrap() else {
            panic!("expected the recipe to be saved");
        };
        assert_eq!(tea.ingredients, vec!["water", "tea leaves"]);
        assert_eq!(tea.id, max_before + 1);
        assert_eq!(s.repository().recipes()[0], tea);
        assert_eq!(s.view().modal, ModalMode::None);
        assert!(s.form().is_none());
    }

    #[test]
    fn empty_title_blocks_save() {
        let mut s = session();
        let before = s.repository().recipes().to_vec();

        s.open_add();
        s.set_field(FormField::Ingredients, "water").unwrap();
        s.set_field(FormField::Instructions, "Boil.").unwrap();

        assert_eq!(
            s.save().unwrap(),
            SaveOutcome::Invalid(ValidationError::TitleRequired)
        );
        assert_eq!(
            s.form_error().map(|e| e.to_string()).as_deref(),
            Some("Title is required")
        );
        assert_eq!(s.view().modal, ModalMode::Add);
        assert_eq!(s.form().unwrap().ingredients, "water");
        assert_eq!(s.repository().recipes(), &before[..]);
    }

    #[test]
    fn edit_updates_in_place() {
        let mut s = session();
        s.open_edit(2).unwrap();
        assert_eq!(s.form().unwrap().ingredients, "flour, egg, milk");

        s.set_field(FormField::Title, "Buttermilk Pancakes").unwrap();
        let SaveOutcome::Saved(saved) = s.save().unwrap() else {
            panic!("expected the recipe to be saved");
        };

        assert_eq!(saved.id, 2);
        assert_eq!(s.repository().recipes()[1].title, "Buttermilk Pancakes");
        assert_eq!(s.view().modal, ModalMode::None);
    }

    #[test]
    fn close_discards_unsaved_edits() {
        let mut s = session();
        s.open_edit(1).unwrap();
        s.set_field(FormField::Title, "Changed").unwrap();
        s.close();

        assert!(s.form().is_none());
        assert_eq!(s.repository().find_by_id(1).unwrap().title, "Tomato Soup");
    }

    #[test]
    fn cannot_open_unknown_recipe() {
        let mut s = session();
        assert!(matches!(s.open_view(77), Err(RecipeError::NotFound(77))));
        assert!(matches!(s.open_edit(77), Err(RecipeError::NotFound(77))));
        assert_eq!(s.view().modal, ModalMode::None);
    }

    #[test]
    fn delete_confirmed_removes_and_closes() {
        let mut s = session();
        s.open_view(5).unwrap();
        assert_eq!(s.displayed().map(|r| r.title.as_str()), Some("Fish Tacos"));

        s.delete_confirmed(5).unwrap();

        assert!(s.repository().find_by_id(5).is_none());
        assert_eq!(s.view().modal, ModalMode::None);
        assert!(s.displayed().is_none());
    }

    #[test]
    fn save_without_form_is_an_error() {
        let mut s = session();
        assert!(matches!(s.save(), Err(RecipeError::Api(_))));
        assert!(s.set_field(FormField::Title, "x").is_err());
    }

    #[test]
    fn query_filters_visible() {
        let mut s = session();
        s.set_query("LIME");
        let visible = s.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Fish Tacos");
    }

    #[test]
    fn theme_toggle_survives_modal_changes() {
        let mut s = session();
        s.toggle_theme();
        s.open_add();
        s.close();
        assert_eq!(s.view().theme, Theme::Dark);
        s.toggle_theme();
        assert_eq!(s.view().theme, Theme::Light);
    }
}
