use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::{SubstitutionEntry, GENERIC_RULES, INGREDIENT_ALIASES, SUBSTITUTION_TABLE};

/// Terms that mark a suggestion as containing dairy or egg.
const DAIRY_EGG_TERMS: &[&str] = &["milk", "butter", "eggs", "cheese", "yogurt"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Substitution {
    pub name: String,
    /// Either "A:B" or free text such as "1 tbsp ground flaxseed + 3 tbsp water".
    pub ratio: String,
    pub reason: String,
    pub best_for: Option<String>,
}

impl From<&SubstitutionEntry> for Substitution {
    fn from(entry: &SubstitutionEntry) -> Self {
        Substitution {
            name: entry.name.to_string(),
            ratio: entry.ratio.to_string(),
            reason: entry.reason.to_string(),
            best_for: entry.best_for.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubstitutionReport {
    pub ingredient: String,
    pub suggestions: Vec<Substitution>,
    /// Set when the dietary and allergy filters rejected every candidate and the
    /// unfiltered suggestions were returned instead.
    pub dietary_mismatch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietaryPreference {
    Vegan,
    GlutenFree,
}

impl DietaryPreference {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "vegan" => Some(DietaryPreference::Vegan),
            "gluten-free" | "gluten free" => Some(DietaryPreference::GlutenFree),
            _ => None,
        }
    }

    fn allows(&self, name_lower: &str) -> bool {
        match self {
            DietaryPreference::Vegan => !DAIRY_EGG_TERMS.iter().any(|term| name_lower.contains(term)),
            DietaryPreference::GlutenFree => {
                !name_lower.contains("flour") || name_lower.contains("gluten-free")
            }
        }
    }
}

/// True when the name's head noun (its last word before any comma) is `keyword` or a
/// plural of it. "rye flour" and "duck eggs" match; "eggplant", "sugar snap peas" and
/// "cream of tartar" do not.
fn head_noun_matches(name: &str, keyword: &str) -> bool {
    let head = name
        .split(',')
        .next()
        .unwrap_or_default()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .last();
    head.and_then(|word| word.strip_prefix(keyword))
        .is_some_and(|rest| matches!(rest, "" | "s" | "es"))
}

/// Lowercases, trims and folds known aliases onto their table key.
pub fn canonical_ingredient_name(ingredient_name: &str) -> String {
    let normalized = ingredient_name.trim().to_lowercase();
    INGREDIENT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(normalized)
}

/// Candidates in preference order: the exact table entry if present, otherwise the
/// first generic rule whose keyword is the name's head noun.
fn candidates_for(canonical: &str) -> &'static [SubstitutionEntry] {
    if let Some((_, entries)) = SUBSTITUTION_TABLE.iter().find(|(key, _)| *key == canonical) {
        return *entries;
    }
    GENERIC_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| head_noun_matches(canonical, keyword)))
        .map(|(_, entries)| *entries)
        .unwrap_or(&[])
}

/// Canonical ingredient names that have a dedicated table entry.
pub fn known_ingredients() -> impl Iterator<Item = &'static str> {
    SUBSTITUTION_TABLE.iter().map(|(key, _)| *key)
}

/// Looks up substitutes for an ingredient and filters them by diet and allergies.
///
/// An empty result means nothing local applies. When the filters reject every
/// candidate the unfiltered list is returned and `dietary_mismatch` is set.
pub fn find_substitutions<P: AsRef<str>, A: AsRef<str>>(
    ingredient_name: &str,
    dietary_preferences: &[P],
    allergies: &[A],
) -> SubstitutionReport {
    let canonical = canonical_ingredient_name(ingredient_name);
    let candidates = candidates_for(&canonical);

    if candidates.is_empty() {
        debug!(ingredient = %canonical, "no local substitutions");
        return SubstitutionReport {
            ingredient: canonical,
            suggestions: Vec::new(),
            dietary_mismatch: false,
        };
    }

    let preferences: Vec<DietaryPreference> = dietary_preferences
        .iter()
        .filter_map(|label| {
            let preference = DietaryPreference::from_label(label.as_ref());
            if preference.is_none() {
                debug!(preference = label.as_ref(), "ignoring unknown dietary preference");
            }
            preference
        })
        .collect();

    let allergies: Vec<String> = allergies
        .iter()
        .map(|allergy| allergy.as_ref().trim().to_lowercase())
        .filter(|allergy| !allergy.is_empty())
        .collect();

    let filtered: Vec<Substitution> = candidates
        .iter()
        .filter(|entry| {
            let name_lower = entry.name.to_lowercase();
            preferences.iter().all(|preference| preference.allows(&name_lower))
                && !allergies.iter().any(|allergy| name_lower.contains(allergy.as_str()))
        })
        .map(Substitution::from)
        .collect();

    if filtered.is_empty() {
        debug!(
            ingredient = %canonical,
            candidates = candidates.len(),
            "filters rejected every substitution, returning unfiltered list"
        );
        return SubstitutionReport {
            ingredient: canonical,
            suggestions: candidates.iter().map(Substitution::from).collect(),
            dietary_mismatch: true,
        };
    }

    SubstitutionReport {
        ingredient: canonical,
        suggestions: filtered,
        dietary_mismatch: false,
    }
}

pub fn get_substitutions<P: AsRef<str>, A: AsRef<str>>(
    ingredient_name: &str,
    dietary_preferences: &[P],
    allergies: &[A],
) -> Vec<Substitution> {
    find_substitutions(ingredient_name, dietary_preferences, allergies).suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    fn names(subs: &[Substitution]) -> Vec<&str> {
        subs.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_exact_lookup_preserves_preference_order() {
        let subs = get_substitutions("Butter", NONE, NONE);
        assert_eq!(
            names(&subs),
            vec!["Coconut oil", "Olive oil", "Unsweetened applesauce", "Greek yogurt", "Ghee"]
        );
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        assert_eq!(get_substitutions("  MILK ", NONE, NONE), get_substitutions("milk", NONE, NONE));
    }

    #[test]
    fn test_alias_resolves_to_table_key() {
        let report = find_substitutions("Eggs", NONE, NONE);
        assert_eq!(report.ingredient, "egg");
        assert_eq!(report.suggestions[0].name, "Flax egg");
        assert_eq!(report.suggestions[0].ratio, "1 tbsp ground flaxseed + 3 tbsp water");
    }

    #[test]
    fn test_vegan_drops_dairy_named_entries_only() {
        let subs = get_substitutions("butter", &["vegan"], NONE);
        let names = names(&subs);
        assert!(names.contains(&"Coconut oil"));
        assert!(names.contains(&"Olive oil"));
        assert!(!names.contains(&"Greek yogurt"));
    }

    #[test]
    fn test_vegan_drops_every_dairy_term_match() {
        let subs = get_substitutions("cream cheese", &["vegan"], NONE);
        assert_eq!(names(&subs), vec!["Mascarpone"]);

        let subs = get_substitutions("peanut butter", &["Vegan"], NONE);
        assert_eq!(names(&subs), vec!["Tahini"]);
    }

    #[test]
    fn test_vegan_milk_falls_back_to_unfiltered_list() {
        let report = find_substitutions("milk", &["vegan"], NONE);
        assert!(report.dietary_mismatch);
        assert_eq!(
            names(&report.suggestions),
            vec!["Oat milk", "Soy milk", "Almond milk", "Coconut milk", "Water and butter"]
        );
    }

    #[test]
    fn test_vegan_filter_is_plain_substring_match() {
        assert!(!DietaryPreference::Vegan.allows("oat milk"));
        assert!(!DietaryPreference::Vegan.allows("buttermilk"));
        assert!(DietaryPreference::Vegan.allows("coconut oil"));
    }

    #[test]
    fn test_gluten_free_keeps_only_gluten_free_flours() {
        let subs = get_substitutions("all-purpose flour", &["gluten-free"], NONE);
        assert_eq!(names(&subs), vec!["Gluten-free flour blend"]);
    }

    #[test]
    fn test_allergy_exclusion() {
        let subs = get_substitutions("milk", NONE, &["almond"]);
        assert!(!subs.is_empty());
        assert!(subs.iter().all(|s| !s.name.to_lowercase().contains("almond")));
    }

    #[test]
    fn test_allergy_match_is_case_insensitive() {
        let subs = get_substitutions("milk", NONE, &["COCONUT"]);
        assert!(subs.iter().all(|s| !s.name.contains("Coconut")));
    }

    #[test]
    fn test_blank_allergy_is_ignored() {
        let subs = get_substitutions("honey", NONE, &["  "]);
        assert_eq!(subs.len(), 3);
    }

    #[test]
    fn test_generic_rule_fallback() {
        let subs = get_substitutions("rye flour", NONE, NONE);
        assert_eq!(subs[0].name, "Gluten-free flour blend");

        let subs = get_substitutions("evaporated milk", NONE, NONE);
        assert_eq!(subs[0].name, "Oat milk");

        let subs = get_substitutions("double cream", NONE, NONE);
        assert_eq!(subs[0].name, "Oat milk");
    }

    #[test]
    fn test_generic_keywords_match_head_noun() {
        assert!(get_substitutions("eggplant", NONE, NONE).is_empty());
        assert!(get_substitutions("sugar snap peas", NONE, NONE).is_empty());
        assert!(get_substitutions("boiled potatoes", NONE, NONE).is_empty());
        assert!(get_substitutions("cream of tartar", NONE, NONE).is_empty());

        let subs = get_substitutions("hard-boiled eggs", NONE, NONE);
        assert_eq!(subs[0].name, "Flax egg");
        let subs = get_substitutions("sesame oil", NONE, NONE);
        assert_eq!(subs[0].name, "Unsweetened applesauce");
    }

    #[test]
    fn test_head_noun_match_accepts_plurals() {
        assert!(head_noun_matches("chicken stocks", "stock"));
        assert!(head_noun_matches("duck eggs, beaten", "egg"));
        assert!(!head_noun_matches("eggplant", "egg"));
        assert!(!head_noun_matches("milk chocolate", "milk"));
        assert!(!head_noun_matches("", "oil"));
    }

    #[test]
    fn test_unknown_ingredient_yields_empty_list() {
        let report = find_substitutions("saffron", &["vegan"], &["nuts"]);
        assert!(report.suggestions.is_empty());
        assert!(!report.dietary_mismatch);
    }

    #[test]
    fn test_everything_filtered_falls_back_to_unfiltered() {
        let report = find_substitutions("lemon juice", NONE, &["lime", "vinegar"]);
        assert!(report.dietary_mismatch);
        assert_eq!(names(&report.suggestions), vec!["Lime juice", "White wine vinegar"]);
    }

    #[test]
    fn test_unknown_preference_is_ignored() {
        let subs = get_substitutions("honey", &["keto"], NONE);
        assert_eq!(subs.len(), 3);
    }

    #[test]
    fn test_known_ingredients_lists_table_keys() {
        let keys: Vec<&str> = known_ingredients().collect();
        assert!(keys.contains(&"butter"));
        assert!(keys.contains(&"all-purpose flour"));
    }
}
