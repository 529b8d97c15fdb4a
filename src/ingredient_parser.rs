use serde::{Deserialize, Serialize};

/// Unicode vulgar fraction glyphs and their decimal values.
pub const FRACTION_GLYPHS: &[(char, f64)] = &[
    ('½', 1.0 / 2.0),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 1.0 / 4.0),
    ('¾', 3.0 / 4.0),
    ('⅕', 1.0 / 5.0),
    ('⅖', 2.0 / 5.0),
    ('⅗', 3.0 / 5.0),
    ('⅘', 4.0 / 5.0),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 1.0 / 8.0),
    ('⅜', 3.0 / 8.0),
    ('⅝', 5.0 / 8.0),
    ('⅞', 7.0 / 8.0),
];

/// Unit words recognised directly after the quantity, lowercase, singular and plural.
pub const UNIT_VOCABULARY: &[&str] = &[
    "cup", "cups",
    "tbsp", "tablespoon", "tablespoons",
    "tsp", "teaspoon", "teaspoons",
    "oz", "ounce", "ounces",
    "lb", "lbs", "pound", "pounds",
    "g", "gram", "grams",
    "kg",
    "ml",
    "l", "liter", "liters",
    "pint", "pints",
    "quart", "quarts",
    "gallon", "gallons",
    "clove", "cloves",
    "slice", "slices",
    "piece", "pieces",
    "can", "cans",
    "package", "packages",
    "bunch", "bunches",
    "stalk", "stalks",
    "head", "heads",
    "sprig", "sprigs",
    "pinch", "pinches",
    "dash", "dashes",
    "large", "medium", "small",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParsedIngredient {
    /// The numeric run exactly as written, e.g. "1 1/2".
    pub quantity_text: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub name: String,
}

/// A whitespace-delimited slice of the trimmed line along with its byte span.
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token { text: &line[s..idx], start: s, end: idx });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        tokens.push(Token { text: &line[s..], start: s, end: line.len() });
    }
    tokens
}

fn glyph_value(ch: char) -> Option<f64> {
    FRACTION_GLYPHS
        .iter()
        .find(|(glyph, _)| *glyph == ch)
        .map(|(_, value)| *value)
}

/// A token belongs to the quantity run when it is built only from digits, '.', '/'
/// and fraction glyphs, and holds at least one digit or glyph.
fn is_numeric_token(token: &str) -> bool {
    let mut has_digit_or_glyph = false;
    for ch in token.chars() {
        if ch.is_ascii_digit() || glyph_value(ch).is_some() {
            has_digit_or_glyph = true;
        } else if ch != '.' && ch != '/' {
            return false;
        }
    }
    has_digit_or_glyph
}

/// (a) A token that is exactly one fraction glyph.
pub fn resolve_glyph(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => glyph_value(ch),
        _ => None,
    }
}

/// (b) An ASCII "N/M" fraction. A zero denominator yields `None`.
pub fn resolve_slash_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// (c) A plain decimal literal such as "2" or "0.75".
pub fn resolve_decimal(token: &str) -> Option<f64> {
    // `f64::from_str` also accepts "inf" and "NaN"; the run never contains letters,
    // but reject anything non-finite all the same.
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// (d) A whole number immediately followed by a glyph, e.g. "1½".
pub fn resolve_glyph_suffixed(token: &str) -> Option<f64> {
    let glyph = token.chars().last()?;
    let fraction = glyph_value(glyph)?;
    let whole_part = &token[..token.len() - glyph.len_utf8()];
    if whole_part.is_empty() || !whole_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let whole: f64 = whole_part.parse().ok()?;
    Some(whole + fraction)
}

/// Resolves one token of the quantity run, trying each rule in priority order.
pub fn resolve_quantity_token(token: &str) -> Option<f64> {
    resolve_glyph(token)
        .or_else(|| {
            if token.contains('/') {
                resolve_slash_fraction(token)
            } else {
                None
            }
        })
        .or_else(|| resolve_decimal(token))
        .or_else(|| resolve_glyph_suffixed(token))
}

/// True when `word` is a unit from [`UNIT_VOCABULARY`], ignoring case and a trailing
/// '.' or ','.
pub fn is_unit_word(word: &str) -> bool {
    match_unit(word).is_some()
}

/// Returns the unit word with trailing punctuation removed when it is in the vocabulary.
fn match_unit(token: &str) -> Option<&str> {
    let stripped = token.trim_end_matches(['.', ',']);
    let lowered = stripped.to_lowercase();
    UNIT_VOCABULARY
        .contains(&lowered.as_str())
        .then_some(stripped)
}

/// Splits an ingredient line into quantity, unit and name. Never fails: anything
/// that cannot be classified stays in `name`.
pub fn parse(line: &str) -> ParsedIngredient {
    let trimmed = line.trim();
    let tokens = tokenize(trimmed);

    let run_len = tokens
        .iter()
        .take_while(|t| is_numeric_token(t.text))
        .count();

    let mut quantity = None;
    let mut quantity_text = None;
    let mut cursor = 0;

    // A run with nothing after it ("3") has no name to scale and passes through whole.
    if run_len > 0 && run_len < tokens.len() {
        let total: f64 = tokens[..run_len]
            .iter()
            .filter_map(|t| resolve_quantity_token(t.text))
            .sum();
        // Zero of an ingredient is never meant literally; treat it as a parse miss and
        // leave the run in the name.
        if total > 0.0 && total.is_finite() {
            quantity = Some(total);
            quantity_text = Some(trimmed[tokens[0].start..tokens[run_len - 1].end].to_string());
            cursor = run_len;
        }
    }

    let mut unit = None;
    if let Some(token) = tokens.get(cursor) {
        // A unit word is only taken when something follows it to serve as the name.
        if cursor + 1 < tokens.len() {
            if let Some(word) = match_unit(token.text) {
                unit = Some(word.to_string());
                cursor += 1;
            }
        }
    }

    let name = tokens
        .get(cursor)
        .map(|token| trimmed[token.start..].to_string())
        .unwrap_or_default();

    ParsedIngredient {
        quantity_text,
        quantity,
        unit,
        name,
    }
}
