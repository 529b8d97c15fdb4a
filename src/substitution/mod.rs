pub mod matcher;
pub mod table;

pub use matcher::{
    canonical_ingredient_name, find_substitutions, get_substitutions, known_ingredients,
    DietaryPreference, Substitution, SubstitutionReport,
};
