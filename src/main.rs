use anyhow::{Context, Result};
use recipe_scaler::cli::{parse_args, Command};
use recipe_scaler::config::AppConfig;
use recipe_scaler::logging::init_logging;
use recipe_scaler::output::{render_scaled_recipes, render_substitutions, OutputFormat, ScaledRecipe};
use recipe_scaler::recipe_input::{read_ingredient_file, validate_servings};
use recipe_scaler::recipe_scaler::{multiplier, scale_recipes};
use recipe_scaler::substitution::find_substitutions;
use std::path::PathBuf;
use tracing::{info, warn};

async fn scale_files(
    files: &[PathBuf],
    original_servings: f64,
    target_servings: f64,
    format: OutputFormat,
) -> Result<String> {
    validate_servings(original_servings, target_servings)?;

    let mut recipes = Vec::with_capacity(files.len());
    for path in files {
        let lines = read_ingredient_file(path)
            .await
            .with_context(|| format!("Could not load ingredients from '{}'", path.display()))?;
        recipes.push(lines);
    }

    let factor = multiplier(original_servings, target_servings);
    info!(files = files.len(), multiplier = factor, "scaling recipes");

    let scaled = scale_recipes(&recipes, original_servings, target_servings);
    let results: Vec<ScaledRecipe> = files
        .iter()
        .zip(scaled)
        .map(|(path, ingredients)| {
            let unscaled = ingredients.iter().filter(|i| i.quantity.is_none()).count();
            if unscaled > 0 {
                warn!(
                    file = %path.display(),
                    unscaled,
                    "some lines had no quantity and were left unchanged"
                );
            }
            ScaledRecipe {
                source: path.display().to_string(),
                multiplier: factor,
                ingredients,
            }
        })
        .collect();

    render_scaled_recipes(&results, format)
}

fn suggest(
    ingredient: &str,
    diets: &[String],
    allergies: &[String],
    format: OutputFormat,
) -> Result<String> {
    let report = find_substitutions(ingredient, diets, allergies);
    if report.dietary_mismatch {
        warn!(
            ingredient = %report.ingredient,
            "no substitution satisfies the requested diet/allergies; showing all"
        );
    }
    render_substitutions(&report, format)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let cli_args = parse_args();

    let log_filter = cli_args.log_level.clone().unwrap_or(config.log_filter);
    init_logging(&log_filter)?;
    let format = cli_args.format.unwrap_or(config.output_format);

    let rendered = match cli_args.command {
        Command::Scale { files, from, to } => scale_files(&files, from, to, format).await?,
        Command::Substitute {
            ingredient,
            diets,
            allergies,
        } => suggest(&ingredient, &diets, &allergies, format)?,
    };

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
