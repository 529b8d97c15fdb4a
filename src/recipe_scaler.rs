use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fraction_renderer::render;
use crate::ingredient_parser::{is_unit_word, parse};

/// Singular unit → plural unit. Only these units are re-pluralized upward.
pub const UNIT_PLURALS: &[(&str, &str)] = &[
    ("cup", "cups"),
    ("tablespoon", "tablespoons"),
    ("teaspoon", "teaspoons"),
    ("ounce", "ounces"),
    ("pound", "pounds"),
    ("gram", "grams"),
    ("slice", "slices"),
    ("piece", "pieces"),
    ("clove", "cloves"),
    ("can", "cans"),
    ("bunch", "bunches"),
    ("stalk", "stalks"),
    ("sprig", "sprigs"),
    ("pinch", "pinches"),
    ("dash", "dashes"),
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub original: String,
    pub scaled: String,
    pub quantity: Option<f64>,
    pub original_quantity: Option<f64>,
    pub unit: Option<String>,
    pub name: String,
}

/// `target / original`, falling back to 1.0 whenever that ratio would be meaningless.
pub fn multiplier(original_servings: f64, target_servings: f64) -> f64 {
    if original_servings <= 0.0 || !original_servings.is_finite() || !target_servings.is_finite() {
        debug!(
            original_servings,
            target_servings, "servings ratio undefined, using multiplier 1.0"
        );
        return 1.0;
    }
    target_servings / original_servings
}

/// Scales every line by `target_servings / original_servings`, preserving order.
pub fn scale_ingredients<S: AsRef<str>>(
    lines: &[S],
    original_servings: f64,
    target_servings: f64,
) -> Vec<ScaledIngredient> {
    let factor = multiplier(original_servings, target_servings);
    lines
        .iter()
        .map(|line| scale_line(line.as_ref(), factor))
        .collect()
}

/// Scales several independent ingredient lists in parallel. Output order matches
/// input order at both the list and the line level.
pub fn scale_recipes<S: AsRef<str> + Sync>(
    recipes: &[Vec<S>],
    original_servings: f64,
    target_servings: f64,
) -> Vec<Vec<ScaledIngredient>> {
    recipes
        .par_iter()
        .map(|lines| scale_ingredients(lines, original_servings, target_servings))
        .collect()
}

pub fn scale_line(line: &str, multiplier: f64) -> ScaledIngredient {
    let parsed = parse(line);

    let original_quantity = match parsed.quantity {
        Some(quantity) => quantity,
        None => {
            debug!(line, "no quantity detected, passing line through");
            return ScaledIngredient {
                original: line.to_string(),
                scaled: line.to_string(),
                quantity: None,
                original_quantity: None,
                unit: parsed.unit,
                name: parsed.name,
            };
        }
    };

    let scaled_quantity = original_quantity * multiplier;
    let unit = parsed
        .unit
        .as_deref()
        .map(|unit| pluralize_unit(unit, scaled_quantity));
    // "2 cups" parses with the unit word as its name; keep its number in step too.
    let name = if parsed.unit.is_none() && is_unit_word(&parsed.name) {
        pluralize_unit(&parsed.name, scaled_quantity)
    } else {
        parsed.name
    };

    // Identity scaling keeps the author's notation ("1 1/2" stays "1 1/2").
    let scaled = if multiplier == 1.0 {
        line.to_string()
    } else {
        let rendered = render(scaled_quantity);
        [Some(rendered.as_str()), unit.as_deref(), Some(name.as_str())]
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    };

    ScaledIngredient {
        original: line.to_string(),
        scaled,
        quantity: Some(scaled_quantity),
        original_quantity: Some(original_quantity),
        unit,
        name,
    }
}

/// Adjusts the unit's number to agree with `quantity`.
///
/// Units above one take the plural from [`UNIT_PLURALS`]; units at or below one lose
/// their plural, first through the inverse of that map and otherwise by dropping a
/// trailing "s". The latter is a heuristic that would mangle irregular plurals such
/// as "leaves"; no unit in the current vocabulary has one.
pub fn pluralize_unit(unit: &str, quantity: f64) -> String {
    let lowered = unit.to_lowercase();
    if quantity > 1.0 {
        return match UNIT_PLURALS.iter().find(|(singular, _)| *singular == lowered) {
            Some((_, plural)) => match_case(unit, plural),
            None => unit.to_string(),
        };
    }

    if let Some((singular, _)) = UNIT_PLURALS.iter().find(|(_, plural)| *plural == lowered) {
        return match_case(unit, singular);
    }
    match unit.strip_suffix('s') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => unit.to_string(),
    }
}

/// Carries a capitalised first letter over from `template` to `word`.
fn match_case(template: &str, word: &str) -> String {
    let capitalised = template.chars().next().is_some_and(char::is_uppercase);
    if !capitalised {
        return word.to_string();
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
