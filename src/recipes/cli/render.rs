//! # Rendering Module
//!
//! Terminal output for the recipe views: the navigation bar, the card list, the detail
//! view and the add/edit form. Templates live in `templates.rs`; styles come from the
//! palette of the active [`Theme`] and are applied through the `style` filter.
//!
//! Layout math (width truncation, image fallback) stays in Rust. Templates only decide
//! which pieces are shown and how they are styled.

use super::styles::{names, palette};
use super::templates::{DETAIL_TEMPLATE, FORM_TEMPLATE, LIST_TEMPLATE, NAV_TEMPLATE};
use colored::Colorize;
use console::Term;
use log::error;
use minijinja::{Environment, Value};
use recipes::api::{CmdMessage, MessageLevel};
use recipes::config::RecipesConfig;
use recipes::form::{FormField, RecipeForm};
use recipes::model::Recipe;
use recipes::view_state::Theme;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const APP_TITLE: &str = "🍽️ Recipe Explorer";
pub const EMPTY_HINT: &str = "No recipes found. Try adding a new recipe!";
const CARD_INDENT: usize = 4;

#[derive(Serialize)]
struct NavData {
    app: &'static str,
    toggle: &'static str,
    query: String,
}

#[derive(Serialize)]
struct CardData {
    label: String,
    title: String,
    summary: String,
    tags: Vec<String>,
    image: String,
    image_style: &'static str,
}

#[derive(Serialize)]
struct ListData {
    cards: Vec<CardData>,
    empty: bool,
    empty_hint: &'static str,
}

#[derive(Serialize)]
struct DetailData {
    label: String,
    title: String,
    tags: Vec<String>,
    image: String,
    image_style: &'static str,
    ingredients: Vec<String>,
    instructions: String,
    actions: Option<&'static str>,
}

#[derive(Serialize)]
struct FieldData {
    label: String,
    value: String,
}

#[derive(Serialize)]
struct FormData {
    heading: &'static str,
    error: Option<String>,
    fields: Vec<FieldData>,
    actions: Option<&'static str>,
}

pub struct Renderer {
    env: Environment<'static>,
    theme: Theme,
    line_width: usize,
    placeholder_image: String,
}

impl Renderer {
    /// A renderer that colours output only when stdout supports it.
    pub fn new(theme: Theme, config: &RecipesConfig) -> Self {
        let use_color = Term::stdout().features().colors_supported();
        Self::with_color(theme, config, use_color)
    }

    pub fn with_color(theme: Theme, config: &RecipesConfig, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);

        let styles = palette(theme);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles.apply(&name, &value.to_string(), use_color)
        });

        for (name, source) in [
            ("nav", NAV_TEMPLATE),
            ("list", LIST_TEMPLATE),
            ("detail", DETAIL_TEMPLATE),
            ("form", FORM_TEMPLATE),
        ] {
            if let Err(e) = env.add_template(name, source) {
                error!("template {} does not compile: {}", name, e);
            }
        }

        Self {
            env,
            theme,
            line_width: config.line_width,
            placeholder_image: config.placeholder_image.clone(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn render_nav(&self, query: &str) -> String {
        // The toggle names the theme it switches to
        let toggle = match self.theme {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        };
        self.render(
            "nav",
            &NavData {
                app: APP_TITLE,
                toggle,
                query: query.trim().to_string(),
            },
        )
    }

    pub fn render_list(&self, recipes: &[Recipe]) -> String {
        let available = self.line_width.saturating_sub(CARD_INDENT);
        let cards = recipes
            .iter()
            .map(|r| {
                let (image, image_style) = self.image_for(r);
                CardData {
                    label: format!("[{}]", r.id),
                    title: truncate_to_width(&r.title, self.line_width),
                    summary: truncate_to_width(
                        &format!("🧾 {}", r.ingredients.join(", ")),
                        available,
                    ),
                    tags: r.tags.clone(),
                    image: truncate_to_width(&image, available),
                    image_style,
                }
            })
            .collect::<Vec<_>>();

        self.render(
            "list",
            &ListData {
                empty: cards.is_empty(),
                cards,
                empty_hint: EMPTY_HINT,
            },
        )
    }

    pub fn render_detail(&self, recipe: &Recipe, with_actions: bool) -> String {
        let (image, image_style) = self.image_for(recipe);
        self.render(
            "detail",
            &DetailData {
                label: format!("[{}]", recipe.id),
                title: recipe.title.clone(),
                tags: recipe.tags.clone(),
                image,
                image_style,
                ingredients: recipe.ingredients.clone(),
                instructions: recipe.instructions.clone(),
                actions: with_actions.then_some("edit · delete · close"),
            },
        )
    }

    pub fn render_form(
        &self,
        form: &RecipeForm,
        editing: bool,
        error: Option<String>,
        with_actions: bool,
    ) -> String {
        let fields = FormField::all()
            .iter()
            .map(|field| FieldData {
                label: format!("{} [{}]:", field.label(), field),
                value: form.get(*field).to_string(),
            })
            .collect();

        self.render(
            "form",
            &FormData {
                heading: if editing { "Edit Recipe" } else { "Add Recipe" },
                error,
                fields,
                actions: with_actions.then_some("set <field> <value> · save · cancel"),
            },
        )
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    /// The recipe's image, or the placeholder when it has none or it is not a web URL.
    fn image_for(&self, recipe: &Recipe) -> (String, &'static str) {
        match recipe.image.as_deref() {
            Some(url) if is_web_url(url) => (url.to_string(), names::IMAGE),
            _ => (self.placeholder_image.clone(), names::PLACEHOLDER),
        }
    }
}

fn is_web_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !url.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
