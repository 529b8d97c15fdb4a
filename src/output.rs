use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::recipe_scaler::ScaledIngredient;
use crate::substitution::SubstitutionReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One input file's worth of scaled ingredients.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScaledRecipe {
    pub source: String,
    pub multiplier: f64,
    pub ingredients: Vec<ScaledIngredient>,
}

#[derive(Debug, Serialize)]
struct ScaledRow<'a> {
    source: &'a str,
    original: &'a str,
    scaled: &'a str,
    original_quantity: Option<f64>,
    quantity: Option<f64>,
    unit: Option<&'a str>,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct SubstitutionRow<'a> {
    ingredient: &'a str,
    name: &'a str,
    ratio: &'a str,
    reason: &'a str,
    best_for: Option<&'a str>,
    dietary_mismatch: bool,
}

pub fn render_scaled_recipes(recipes: &[ScaledRecipe], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (idx, recipe) in recipes.iter().enumerate() {
                if recipes.len() > 1 {
                    if idx > 0 {
                        out.push('\n');
                    }
                    out.push_str(&format!("== {} ==\n", recipe.source));
                }
                for ingredient in &recipe.ingredients {
                    out.push_str(&ingredient.scaled);
                    out.push('\n');
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(recipes).context("Failed to serialize scaled recipes to JSON")
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for recipe in recipes {
                for ingredient in &recipe.ingredients {
                    writer
                        .serialize(ScaledRow {
                            source: &recipe.source,
                            original: &ingredient.original,
                            scaled: &ingredient.scaled,
                            original_quantity: ingredient.original_quantity,
                            quantity: ingredient.quantity,
                            unit: ingredient.unit.as_deref(),
                            name: &ingredient.name,
                        })
                        .context("Failed to write scaled ingredient CSV row")?;
                }
            }
            finish_csv(writer)
        }
    }
}

pub fn render_substitutions(report: &SubstitutionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            if report.suggestions.is_empty() {
                return Ok(format!("No substitutions known for '{}'\n", report.ingredient));
            }
            let mut out = format!("Substitutions for '{}':\n", report.ingredient);
            if report.dietary_mismatch {
                out.push_str("(none match your dietary needs; showing all suggestions)\n");
            }
            for (idx, sub) in report.suggestions.iter().enumerate() {
                out.push_str(&format!("{}. {} [{}] - {}", idx + 1, sub.name, sub.ratio, sub.reason));
                if let Some(best_for) = &sub.best_for {
                    out.push_str(&format!(" (best for {})", best_for));
                }
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize substitutions to JSON")
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for sub in &report.suggestions {
                writer
                    .serialize(SubstitutionRow {
                        ingredient: &report.ingredient,
                        name: &sub.name,
                        ratio: &sub.ratio,
                        reason: &sub.reason,
                        best_for: sub.best_for.as_deref(),
                        dietary_mismatch: report.dietary_mismatch,
                    })
                    .context("Failed to write substitution CSV row")?;
            }
            finish_csv(writer)
        }
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_scaler::scale_ingredients;
    use crate::substitution::find_substitutions;

    fn sample_recipe() -> ScaledRecipe {
        ScaledRecipe {
            source: "pancakes.txt".to_string(),
            multiplier: 2.0,
            ingredients: scale_ingredients(&["1 cup flour", "Salt to taste"], 2.0, 4.0),
        }
    }

    #[test]
    fn test_text_output_lists_scaled_lines() -> Result<()> {
        let out = render_scaled_recipes(&[sample_recipe()], OutputFormat::Text)?;
        assert_eq!(out, "2 cups flour\nSalt to taste\n");
        Ok(())
    }

    #[test]
    fn test_text_output_headers_multiple_recipes() -> Result<()> {
        let mut second = sample_recipe();
        second.source = "waffles.txt".to_string();
        let out = render_scaled_recipes(&[sample_recipe(), second], OutputFormat::Text)?;
        assert!(out.starts_with("== pancakes.txt ==\n"));
        assert!(out.contains("\n\n== waffles.txt ==\n"));
        Ok(())
    }

    #[test]
    fn test_json_output_round_trips() -> Result<()> {
        let out = render_scaled_recipes(&[sample_recipe()], OutputFormat::Json)?;
        let parsed: Vec<ScaledRecipe> = serde_json::from_str(&out)?;
        assert_eq!(parsed[0].ingredients[0].unit.as_deref(), Some("cups"));
        assert_eq!(parsed[0].ingredients[1].quantity, None);
        Ok(())
    }

    #[test]
    fn test_csv_output_has_header_and_rows() -> Result<()> {
        let out = render_scaled_recipes(&[sample_recipe()], OutputFormat::Csv)?;
        let mut lines = out.lines();
        assert_eq!(
            lines.next(),
            Some("source,original,scaled,original_quantity,quantity,unit,name")
        );
        assert_eq!(lines.next(), Some("pancakes.txt,1 cup flour,2 cups flour,1.0,2.0,cups,flour"));
        assert_eq!(lines.next(), Some("pancakes.txt,Salt to taste,Salt to taste,,,,Salt to taste"));
        Ok(())
    }

    #[test]
    fn test_substitution_text_flags_mismatch() -> Result<()> {
        let report = find_substitutions("lemon juice", &["vegan"], &["lime", "vinegar"]);
        let out = render_substitutions(&report, OutputFormat::Text)?;
        assert!(out.contains("none match your dietary needs"));
        assert!(out.contains("1. Lime juice [1:1]"));
        Ok(())
    }

    #[test]
    fn test_substitution_text_for_unknown_ingredient() -> Result<()> {
        let report = find_substitutions::<&str, &str>("saffron", &[], &[]);
        let out = render_substitutions(&report, OutputFormat::Text)?;
        assert_eq!(out, "No substitutions known for 'saffron'\n");
        Ok(())
    }

    #[test]
    fn test_substitution_csv_quotes_freeform_ratio() -> Result<()> {
        let report = find_substitutions::<&str, &str>("egg", &[], &[]);
        let out = render_substitutions(&report, OutputFormat::Csv)?;
        assert!(out.contains("egg,Flax egg,1 tbsp ground flaxseed + 3 tbsp water,"));
        Ok(())
    }
}
