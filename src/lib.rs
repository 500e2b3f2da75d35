pub mod config;
pub mod error;
pub mod exporter;
pub mod localization;
pub mod markdown;
pub mod model;
pub mod text;

pub use config::Settings;
pub use error::ExportError;
pub use exporter::{FilenameStyle, FsStore, MarkdownExporter, RecipeStore};
pub use localization::Localizer;
pub use markdown::MarkdownRenderer;
pub use model::Recipe;

use log::debug;
use std::path::Path;

/// Parse recipes from JSON holding either a list of recipes or a single one
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, ExportError> {
    let recipes = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Recipe>>(json)?
    } else {
        vec![serde_json::from_str::<Recipe>(json)?]
    };
    debug!("Parsed {} recipes", recipes.len());
    Ok(recipes)
}

/// Read and parse a recipe JSON file
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>, ExportError> {
    let json = std::fs::read_to_string(path).map_err(|source| ExportError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_recipes(&json)
}
