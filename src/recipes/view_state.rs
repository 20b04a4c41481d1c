//! # View State
//!
//! What the user is looking at: the selected recipe, which modal is open, and the
//! colour theme. [`ViewState`] is a small `Copy` value; every transition consumes the
//! current state and returns the next one, so there is no flag to forget to reset.

use crate::model::{Recipe, RecipeId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    #[default]
    None,
    View,
    Edit,
    Add,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub selected_id: Option<RecipeId>,
    pub modal: ModalMode,
    pub theme: Theme,
}

impl ViewState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn open_view(self, id: RecipeId) -> Self {
        Self {
            selected_id: Some(id),
            modal: ModalMode::View,
            ..self
        }
    }

    pub fn open_edit(self, id: RecipeId) -> Self {
        Self {
            selected_id: Some(id),
            modal: ModalMode::Edit,
            ..self
        }
    }

    pub fn open_add(self) -> Self {
        Self {
            selected_id: None,
            modal: ModalMode::Add,
            ..self
        }
    }

    pub fn close(self) -> Self {
        Self {
            selected_id: None,
            modal: ModalMode::None,
            ..self
        }
    }

    pub fn toggle_theme(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    /// The recipe the open modal is about, if it still exists in `recipes`.
    pub fn displayed<'a>(&self, recipes: &'a [Recipe]) -> Option<&'a Recipe> {
        let id = self.selected_id?;
        recipes.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::recipe;

    #[test]
    fn starts_closed_and_light() {
        let state = ViewState::default();
        assert_eq!(state.modal, ModalMode::None);
        assert_eq!(state.selected_id, None);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn open_and_close() {
        let state = ViewState::default().open_view(4);
        assert_eq!((state.selected_id, state.modal), (Some(4), ModalMode::View));

        let state = state.open_edit(4);
        assert_eq!((state.selected_id, state.modal), (Some(4), ModalMode::Edit));

        let state = state.close();
        assert_eq!((state.selected_id, state.modal), (None, ModalMode::None));
    }

    #[test]
    fn add_has_no_selection() {
        let state = ViewState::default().open_view(2).open_add();
        assert_eq!(state.selected_id, None);
        assert_eq!(state.modal, ModalMode::Add);
    }

    #[test]
    fn transitions_keep_theme() {
        let state = ViewState::with_theme(Theme::Dark).open_view(1).close();
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn toggling_twice_is_a_no_op() {
        let state = ViewState::default().open_view(3);
        let toggled = state.toggle_theme();
        assert_eq!(toggled.theme, Theme::Dark);
        assert_eq!(toggled.toggle_theme(), state);
    }

    #[test]
    fn displayed_resolves_against_collection() {
        let recipes = vec![recipe(1, "Soup", &["water"], &[])];
        assert_eq!(
            ViewState::default().open_view(1).displayed(&recipes).map(|r| r.id),
            Some(1)
        );
        assert!(ViewState::default().open_view(2).displayed(&recipes).is_none());
        assert!(ViewState::default().open_add().displayed(&recipes).is_none());
    }

    #[test]
    fn theme_parses() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
