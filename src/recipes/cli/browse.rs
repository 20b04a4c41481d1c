//! Interactive browsing: one command per input line, the screen redrawn after each.
//!
//! The screen is either the card list or the open modal (detail view or form). Closing
//! the modal, or reaching the end of input, throws away whatever the form held.

use super::prompt::{confirm, DELETE_QUESTION};
use super::render::Renderer;
use colored::Colorize;
use recipes::config::RecipesConfig;
use recipes::error::{RecipeError, Result};
use recipes::form::FormField;
use recipes::model::RecipeId;
use recipes::session::{SaveOutcome, Session};
use recipes::store::KeyValueStore;
use recipes::view_state::ModalMode;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  search [text]        filter the list (no text clears it)
  view <id>            open a recipe
  edit [id]            edit a recipe (the open one if no id)
  add                  open an empty form
  set <field> <value>  fill a form field (title, ingredients, instructions, image, tags)
  save                 submit the form
  delete [id]          delete a recipe after confirmation
  close | cancel       close the open view or form
  theme                switch between light and dark
  help                 show this help
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Redraw,
    Help,
    Search(String),
    View(RecipeId),
    Edit(Option<RecipeId>),
    Add,
    Set(FormField, String),
    Save,
    Delete(Option<RecipeId>),
    Close,
    Theme,
    Quit,
}

pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let id = |rest: &str| -> std::result::Result<RecipeId, String> {
        rest.parse()
            .map_err(|_| format!("Not a recipe id: {:?}", rest))
    };
    let optional_id = |rest: &str| -> std::result::Result<Option<RecipeId>, String> {
        if rest.is_empty() {
            Ok(None)
        } else {
            id(rest).map(Some)
        }
    };

    match word.to_lowercase().as_str() {
        "" => Ok(BrowseCommand::Redraw),
        "help" | "?" => Ok(BrowseCommand::Help),
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
        "view" | "open" | "v" => id(rest).map(BrowseCommand::View),
        "edit" | "e" => optional_id(rest).map(BrowseCommand::Edit),
        "add" | "new" | "n" => Ok(BrowseCommand::Add),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field.parse::<FormField>()?;
            Ok(BrowseCommand::Set(field, value.trim().to_string()))
        }
        "save" => Ok(BrowseCommand::Save),
        "delete" | "rm" => optional_id(rest).map(BrowseCommand::Delete),
        "close" | "cancel" | "esc" => Ok(BrowseCommand::Close),
        "theme" | "t" => Ok(BrowseCommand::Theme),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command: {} (try help)", other)),
    }
}

/// Everything currently on screen.
pub fn draw<S: KeyValueStore>(session: &Session<S>, renderer: &Renderer) -> String {
    let mut screen = renderer.render_nav(session.query());
    let view = session.view();

    match (view.modal, session.form(), session.displayed()) {
        (ModalMode::View, _, Some(recipe)) => screen.push_str(&renderer.render_detail(recipe, true)),
        (ModalMode::Edit | ModalMode::Add, Some(form), _) => screen.push_str(&renderer.render_form(
            form,
            view.modal == ModalMode::Edit,
            session.form_error().map(|e| e.to_string()),
            true,
        )),
        _ => screen.push_str(&renderer.render_list(&session.visible())),
    }
    screen
}

pub fn run<S, R, W>(
    session: &mut Session<S>,
    config: &RecipesConfig,
    use_color: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut renderer = Renderer::with_color(session.view().theme, config, use_color);
    write!(out, "{}", draw(session, &renderer))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            session.close();
            writeln!(out)?;
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e.red())?;
                continue;
            }
        };

        match apply(session, command, input, out) {
            Ok(Step::Quit) => return Ok(()),
            Ok(Step::Continue) => {}
            Ok(Step::Message(text)) => writeln!(out, "{}", text.green())?,
            Err(RecipeError::Io(e)) => return Err(RecipeError::Io(e)),
            Err(e) => {
                writeln!(out, "{}", e.to_string().red())?;
                continue;
            }
        }

        if renderer.theme() != session.view().theme {
            renderer = Renderer::with_color(session.view().theme, config, use_color);
        }
        write!(out, "{}", draw(session, &renderer))?;
    }
}

enum Step {
    Continue,
    Message(String),
    Quit,
}

fn apply<S, R, W>(
    session: &mut Session<S>,
    command: BrowseCommand,
    input: &mut R,
    out: &mut W,
) -> Result<Step>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    match command {
        BrowseCommand::Redraw => {}
        BrowseCommand::Help => writeln!(out, "{}", HELP)?,
        BrowseCommand::Search(query) => {
            session.close();
            session.set_query(query);
        }
        BrowseCommand::View(id) => session.open_view(id)?,
        BrowseCommand::Edit(id) => {
            let id = id.or(session.view().selected_id).ok_or_else(nothing_selected)?;
            session.open_edit(id)?;
        }
        BrowseCommand::Add => session.open_add(),
        BrowseCommand::Set(field, value) => session.set_field(field, value)?,
        BrowseCommand::Save => {
            if let SaveOutcome::Saved(recipe) = session.save()? {
                return Ok(Step::Message(format!(
                    "Recipe saved ({}): {}",
                    recipe.id, recipe.title
                )));
            }
        }
        BrowseCommand::Delete(id) => {
            let id = id.or(session.view().selected_id).ok_or_else(nothing_selected)?;
            let title = session
                .repository()
                .find_by_id(id)
                .map(|r| r.title.clone())
                .ok_or(RecipeError::NotFound(id))?;
            writeln!(out, "{}", title.bold())?;
            if !confirm(DELETE_QUESTION, input, out)? {
                return Ok(Step::Message("Delete cancelled.".to_string()));
            }
            let removed = session.delete_confirmed(id)?;
            return Ok(Step::Message(format!(
                "Recipe deleted ({}): {}",
                removed.id, removed.title
            )));
        }
        BrowseCommand::Close => session.close(),
        BrowseCommand::Theme => session.toggle_theme(),
        BrowseCommand::Quit => {
            session.close();
            return Ok(Step::Quit);
        }
    }
    Ok(Step::Continue)
}

fn nothing_selected() -> RecipeError {
    RecipeError::Api("No recipe is open; give an id".to_string())
}
