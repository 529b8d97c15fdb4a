pub mod cli;
pub mod config;
pub mod fraction_renderer;
pub mod ingredient_parser;
pub mod logging;
pub mod output;
pub mod recipe_input;
pub mod recipe_scaler;
pub mod substitution;

pub use fraction_renderer::render;
pub use ingredient_parser::{parse, ParsedIngredient};
pub use recipe_scaler::{scale_ingredients, scale_recipes, ScaledIngredient};
pub use substitution::{find_substitutions, get_substitutions, Substitution, SubstitutionReport};
