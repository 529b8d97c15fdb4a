use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "recipe_scaler=trace" (overrides RECIPE_SCALER_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format (overrides RECIPE_SCALER_FORMAT)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rescale one or more ingredient files to a new number of servings
    Scale {
        /// Path to a text file with one ingredient per line
        #[arg(short, long = "file", required = true)]
        files: Vec<PathBuf>,

        /// Servings the recipe was written for
        #[arg(long)]
        from: f64,

        /// Servings to scale to
        #[arg(long)]
        to: f64,
    },
    /// Suggest substitutes for an ingredient
    Substitute {
        /// Ingredient to replace
        #[arg(short, long)]
        ingredient: String,

        /// Dietary preference to respect ("vegan", "gluten-free"); repeatable
        #[arg(short = 'd', long = "diet")]
        diets: Vec<String>,

        /// Allergen to exclude from suggestions; repeatable
        #[arg(short = 'a', long = "allergy")]
        allergies: Vec<String>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
