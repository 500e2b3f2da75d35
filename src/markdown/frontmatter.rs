use crate::model::Recipe;
use chrono::NaiveDate;

/// Servings every rendered recipe is scaled to
pub const SERVINGS: u32 = 4;

pub const AUTHOR: &str = "KptnCook";

const RECIPE_URL_BASE: &str = "https://mobile.kptncook.com/recipe/pinterest";

/// Tags with these prefixes are classification data, not user-facing tags
pub const IGNORED_TAG_PREFIXES: &[&str] = &["diet_", "budget_", "main_ingredient_", "calories_"];

/// Builds the `---` delimited metadata block, followed by a blank line.
pub fn build_frontmatter(recipe: &Recipe, date: NaiveDate) -> Vec<String> {
    let mut lines = vec![
        "---".to_string(),
        format!("date: {}", date.format("%Y-%m-%d")),
        format!("yield: {SERVINGS}"),
        format!("prepTime: {}m", minutes(recipe.preparation_time)),
        format!("cookTime: {}m", minutes(recipe.cooking_time)),
        format!("author: {AUTHOR}"),
        format!("url: {}", recipe_url(recipe)),
        "tags:".to_string(),
    ];
    lines.extend(visible_tags(&recipe.active_tags).map(|tag| format!("- {tag}")));
    lines.push("---".to_string());
    lines.push(String::new());
    lines
}

pub fn recipe_url(recipe: &Recipe) -> String {
    format!("{RECIPE_URL_BASE}/{}", recipe.id.oid)
}

/// Tags without a reserved prefix, in their original order
pub fn visible_tags(tags: &[String]) -> impl Iterator<Item = &str> {
    tags.iter()
        .map(String::as_str)
        .filter(|tag| !IGNORED_TAG_PREFIXES.iter().any(|prefix| tag.starts_with(prefix)))
}

fn minutes(value: Option<u32>) -> String {
    value.map(|m| m.to_string()).unwrap_or_default()
}
