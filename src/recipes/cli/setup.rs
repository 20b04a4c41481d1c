use clap::{Args, Parser, Subcommand, ValueEnum};
use recipes::form::{FormField, RecipeForm};
use recipes::model::RecipeId;
use recipes::view_state::Theme;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "recipes", bin_name = "recipes", version = get_version())]
#[command(about = "Browse and keep your recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Colour theme to start with
    #[arg(long, global = true, value_enum, default_value = "light")]
    pub theme: ThemeArg,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes as cards
    #[command(alias = "ls")]
    List {
        /// Only show recipes whose title, ingredients or tags contain this
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search recipes, ingredients and tags
    Search {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// Show one recipe
    #[command(alias = "v")]
    View { id: RecipeId },

    /// Add a recipe
    #[command(alias = "n")]
    Add {
        #[command(flatten)]
        fields: FormArgs,
    },

    /// Edit a recipe; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        id: RecipeId,

        #[command(flatten)]
        fields: FormArgs,
    },

    /// Delete a recipe
    #[command(alias = "rm")]
    Delete {
        id: RecipeId,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Browse interactively (view, edit, add, delete, toggle theme)
    #[command(alias = "b")]
    Browse,

    /// Get or set configuration
    Config {
        /// Configuration key (placeholder-image, line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Recipe form fields as command-line flags.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    #[arg(short, long)]
    pub title: Option<String>,

    /// Comma separated
    #[arg(short = 'g', long)]
    pub ingredients: Option<String>,

    #[arg(short = 'x', long)]
    pub instructions: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Comma separated
    #[arg(long)]
    pub tags: Option<String>,
}

impl FormArgs {
    /// Writes every given flag into `form`, leaving the other fields as they are.
    pub fn apply_to(&self, form: &mut RecipeForm) {
        let pairs = [
            (FormField::Title, &self.title),
            (FormField::Ingredients, &self.ingredients),
            (FormField::Instructions, &self.instructions),
            (FormField::Image, &self.image),
            (FormField::Tags, &self.tags),
        ];
        for (field, value) in pairs {
            if let Some(value) = value {
                form.set(field, value.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_flags() {
        let cli = Cli::parse_from([
            "recipes",
            "add",
            "--title",
            "Tea",
            "--ingredients",
            "water, tea leaves",
            "--instructions",
            "Boil. Steep.",
        ]);
        let Some(Commands::Add { fields }) = cli.command else {
            panic!("expected add");
        };
        let mut form = RecipeForm::new();
        fields.apply_to(&mut form);
        assert_eq!(form.title, "Tea");
        assert_eq!(form.ingredients, "water, tea leaves");
        assert_eq!(form.tags, "");
    }

    #[test]
    fn edit_keeps_unset_fields() {
        let cli = Cli::parse_from(["recipes", "edit", "3", "--tags", "Quick"]);
        let Some(Commands::Edit { id, fields }) = cli.command else {
            panic!("expected edit");
        };
        assert_eq!(id, 3);

        let mut form = RecipeForm {
            title: "Toast".into(),
            ..RecipeForm::default()
        };
        fields.apply_to(&mut form);
        assert_eq!(form.title, "Toast");
        assert_eq!(form.tags, "Quick");
    }

    #[test]
    fn theme_flag_is_global() {
        let cli = Cli::parse_from(["recipes", "list", "--theme", "dark"]);
        assert_eq!(Theme::from(cli.theme), Theme::Dark);
        let cli = Cli::parse_from(["recipes"]);
        assert_eq!(Theme::from(cli.theme), Theme::Light);
    }
}
