use crate::localization::Localizer;
use crate::model::Ingredient;

/// Ingredients listed under one optional label
#[derive(Debug, Clone)]
pub struct IngredientGroup<'a> {
    pub label: Option<&'a str>,
    pub ingredients: Vec<&'a Ingredient>,
}

/// Groups ingredients by their localized group label.
///
/// Groups appear in the order their label is first seen; ingredients keep
/// their input order inside a group.
pub fn group_ingredients<'a>(
    ingredients: &'a [Ingredient],
    localizer: &Localizer,
) -> Vec<IngredientGroup<'a>> {
    let mut groups: Vec<IngredientGroup<'a>> = Vec::new();
    for ingredient in ingredients {
        let label = ingredient
            .group
            .as_ref()
            .and_then(|group| localizer.text(group));
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.ingredients.push(ingredient),
            None => groups.push(IngredientGroup {
                label,
                ingredients: vec![ingredient],
            }),
        }
    }
    groups
}

/// Renders groups as Markdown lines: an optional `"<label>:"` line, one bullet
/// per ingredient with printable text, then a blank separator line.
pub fn render_groups(
    groups: &[IngredientGroup<'_>],
    scale: f64,
    localizer: &Localizer,
) -> Vec<String> {
    let mut lines = Vec::new();
    for group in groups {
        if let Some(label) = group.label.filter(|label| !label.is_empty()) {
            lines.push(format!("{label}:"));
        }
        lines.extend(
            group
                .ingredients
                .iter()
                .map(|ingredient| format_ingredient(ingredient, scale, localizer))
                .filter(|text| !text.is_empty())
                .map(|text| format!("- {text}")),
        );
        lines.push(String::new());
    }
    lines
}

/// Formats quantity, unit and name of an ingredient, skipping missing parts.
/// The quantity is multiplied by `scale`.
pub fn format_ingredient(ingredient: &Ingredient, scale: f64, localizer: &Localizer) -> String {
    let quantity = ingredient
        .quantity
        .filter(|quantity| *quantity != 0.0)
        .map(|quantity| format_quantity(quantity * scale));
    let name = localizer.text(&ingredient.ingredient.uncountable_title);

    [quantity.as_deref(), ingredient.measure.as_deref(), name]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Formats a quantity with at most six significant digits and no trailing
/// zeros: `2.0` is `"2"`, `0.1 * 3.0` is `"0.3"`.
pub fn format_quantity(value: f64) -> String {
    let rounded = format!("{value:.5e}").parse::<f64>().unwrap_or(value);
    rounded.to_string()
}
