use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

#[derive(Debug)]
pub enum RecipeInputError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    EmptyRecipe(PathBuf),
    InvalidServings {
        which: &'static str,
        value: f64,
    },
}

impl fmt::Display for RecipeInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeInputError::Io { path, source } => {
                write!(f, "Failed to read recipe file {:?}: {}", path, source)
            }
            RecipeInputError::EmptyRecipe(path) => {
                write!(f, "No ingredient lines found in {:?}", path)
            }
            RecipeInputError::InvalidServings { which, value } => {
                write!(f, "Invalid {} servings: {} (must be a positive number)", which, value)
            }
        }
    }
}

impl Error for RecipeInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecipeInputError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Splits recipe text into ingredient lines, skipping blank lines and `#` comments.
pub fn ingredient_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub async fn read_ingredient_file(path: &Path) -> Result<Vec<String>, RecipeInputError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| RecipeInputError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let lines = ingredient_lines(&content);
    if lines.is_empty() {
        return Err(RecipeInputError::EmptyRecipe(path.to_path_buf()));
    }
    debug!(path = %path.display(), lines = lines.len(), "read ingredient file");
    Ok(lines)
}

/// Rejects serving counts the command line should not pass on. The engine itself
/// tolerates them, but a typo like `--from 0` is almost certainly a mistake.
pub fn validate_servings(original: f64, target: f64) -> Result<(), RecipeInputError> {
    if !(original.is_finite() && original > 0.0) {
        return Err(RecipeInputError::InvalidServings {
            which: "original",
            value: original,
        });
    }
    if !(target.is_finite() && target > 0.0) {
        return Err(RecipeInputError::InvalidServings {
            which: "target",
            value: target,
        });
    }
    Ok(())
}
