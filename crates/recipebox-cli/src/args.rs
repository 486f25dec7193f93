//! Command-line argument definitions using clap.
//!
//! Argument structures carry clap derives only; handlers in [`crate::cli`]
//! map them onto core types (`FieldEdit`, `NewSpecial`, ...).

use std::{path::PathBuf, str::FromStr};

use clap::{Args as ClapArgs, Parser, Subcommand};
use recipebox_core::{params::NewSpecial, FieldEdit, IngredientId, RecipeId};
use uuid::Uuid;

/// Browse, create and edit recipes from the terminal
///
/// Recipes are kept in a local SQLite file. Ingredient quantities are shown
/// as kitchen fractions and annotated with any specials registered for them.
#[derive(Parser)]
#[command(version, about, name = "rb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/recipebox/recipebox.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How long the success message stays up before the form closes
    #[arg(long, global = true, default_value_t = 0, value_name = "MS")]
    pub close_delay_ms: u64,

    /// Give up on a save that takes longer than this
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage recipes
    #[command(alias = "r")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCommands,
    },
    /// Manage ingredient specials
    #[command(alias = "s")]
    Special {
        #[command(subcommand)]
        command: SpecialCommands,
    },
    /// Show an amount as a kitchen fraction
    Format(FormatArgs),
}

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// List all recipes
    List,
    /// Show a recipe with its ingredients, directions and specials
    Show(RecipeIdArgs),
    /// Create a recipe from the template
    #[command(alias = "new")]
    Create(CreateRecipeArgs),
    /// Edit an existing recipe
    Edit(EditRecipeArgs),
    /// Delete a recipe
    Delete(RecipeIdArgs),
}

#[derive(ClapArgs)]
pub struct RecipeIdArgs {
    /// Identifier of the recipe
    #[arg(value_parser = parse_id::<RecipeId>)]
    pub id: RecipeId,
}

/// Form edits shared by `create` and `edit`.
///
/// Appends happen before field assignments, so an assignment may address an
/// item appended by the same command.
#[derive(ClapArgs)]
pub struct FormArgs {
    /// Append this many template ingredients
    #[arg(long, default_value_t = 0, value_name = "COUNT")]
    pub add_ingredient: usize,

    /// Append this many template directions
    #[arg(long = "add-step", default_value_t = 0, value_name = "COUNT")]
    pub add_direction: usize,

    /// Assign a form field, e.g. `title=Pancakes` or `ingredients[0].amount=1.5`
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub edits: Vec<FieldEdit>,
}

#[derive(ClapArgs)]
pub struct CreateRecipeArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(ClapArgs)]
pub struct EditRecipeArgs {
    /// Identifier of the recipe
    #[arg(value_parser = parse_id::<RecipeId>)]
    pub id: RecipeId,

    /// Remove the ingredient at this position (0-based); repeatable, applied
    /// in order before any append
    #[arg(long, value_name = "POSITION", allow_negative_numbers = true)]
    pub remove_ingredient: Vec<i64>,

    /// Remove the direction at this position (0-based); repeatable
    #[arg(
        long = "remove-step",
        value_name = "POSITION",
        allow_negative_numbers = true
    )]
    pub remove_direction: Vec<i64>,

    #[command(flatten)]
    pub form: FormArgs,
}

#[derive(Subcommand)]
pub enum SpecialCommands {
    /// Register a special for an ingredient
    Add(AddSpecialArgs),
    /// List registered specials
    List,
    /// Delete a special
    Delete(SpecialIdArgs),
}

#[derive(ClapArgs)]
pub struct AddSpecialArgs {
    /// Identifier of the ingredient the special applies to
    #[arg(value_parser = parse_id::<IngredientId>)]
    pub ingredient_id: IngredientId,

    /// Headline, e.g. "Half off"
    pub title: String,

    /// Category, e.g. local or promocode
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: String,

    /// Promotional text
    #[arg(long, default_value = "")]
    pub text: String,
}

impl From<AddSpecialArgs> for NewSpecial {
    fn from(val: AddSpecialArgs) -> Self {
        NewSpecial {
            ingredient_id: val.ingredient_id,
            title: val.title,
            kind: val.kind,
            text: val.text,
        }
    }
}

#[derive(ClapArgs)]
pub struct SpecialIdArgs {
    /// Identifier of the special
    #[arg(value_parser = parse_id::<Uuid>)]
    pub id: Uuid,
}

#[derive(ClapArgs)]
pub struct FormatArgs {
    /// Amount to format, e.g. 1.33
    #[arg(allow_negative_numbers = true)]
    pub amount: f64,

    /// Largest denominator to use
    #[arg(long, default_value_t = recipebox_core::quantity::DEFAULT_MAX_DENOMINATOR)]
    pub max_denominator: u32,
}

/// Parses an identifier, reporting the raw text on failure.
fn parse_id<I: FromStr>(value: &str) -> Result<I, String> {
    value
        .parse::<I>()
        .map_err(|_| format!("'{value}' is not a valid identifier"))
}
