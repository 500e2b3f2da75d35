use chrono::NaiveDate;
use kptncook_markdown::{parse_recipes, ExportError, MarkdownRenderer};

fn renderer() -> MarkdownRenderer {
    MarkdownRenderer::new("6q7QNKy").with_date(NaiveDate::from_ymd_opt(2023, 11, 2).unwrap())
}

const FULL_RECIPE: &str = r#"
{
    "_id": {"$oid": "5e5390e2740000cdf1381c64"},
    "localizedTitle": {"de": "Ofengemüse mit Feta", "en": "Roasted vegetables with feta"},
    "authorComment": {"de": "Perfekt für den Feierabend.", "en": "Perfect after work."},
    "preparationTime": 15,
    "cookingTime": 25,
    "activeTags": ["vegetarian", "diet_low_carb", "quick", "budget_cheap", "main_ingredient_feta", "calories_400"],
    "steps": [
        {"title": {"de": "Alles parat?"}},
        {
            "title": {"de": "Ofen vorheizen.\nGemüse schneiden."},
            "image": {"url": "https://cdn/step1.jpg", "type": "step"}
        },
        {
            "title": {"de": "Alles für <timer> backen."},
            "timers": [{"minOrExact": 25}],
            "image": {"url": "https://cdn/final.jpg", "type": "step"}
        }
    ],
    "ingredients": [
        {"quantity": 0.5, "measure": "Stk.", "ingredient": {"uncountableTitle": {"de": "Zucchini"}}},
        {"quantity": 50, "measure": "g", "ingredient": {"uncountableTitle": {"de": "Feta"}}},
        {"quantity": 0, "ingredient": {"uncountableTitle": {"de": "Salz"}}},
        {
            "quantity": 0.25,
            "measure": "EL",
            "group": {"de": "Für das Dressing"},
            "ingredient": {"uncountableTitle": {"de": "Olivenöl"}}
        }
    ],
    "imageList": [{"url": "https://cdn/cover.jpg", "type": "cover"}]
}
"#;

#[test]
fn test_full_document() {
    let recipes = parse_recipes(FULL_RECIPE).unwrap();
    let md = renderer().render(&recipes[0]);

    let expected = [
        "---",
        "date: 2023-11-02",
        "yield: 4",
        "prepTime: 15m",
        "cookTime: 25m",
        "author: KptnCook",
        "url: https://mobile.kptncook.com/recipe/pinterest/5e5390e2740000cdf1381c64",
        "tags:",
        "- vegetarian",
        "- quick",
        "---",
        "",
        "# Ofengemüse mit Feta",
        "",
        "Perfekt für den Feierabend.",
        "",
        "![Rezeptbild](https://cdn/final.jpg?kptnkey=6q7QNKy)",
        "",
        "### Zutaten",
        "",
        "- 2 Stk. Zucchini",
        "- 200 g Feta",
        "- Salz",
        "",
        "Für das Dressing:",
        "- 1 EL Olivenöl",
        "",
        "### Zubereitung",
        "",
        "- Ofen vorheizen. Gemüse schneiden.",
        "- Alles für 25m backen.",
        "",
        "### Notizen / Empfehlungen",
        "",
    ]
    .join("\n");

    assert_eq!(md, expected);
}

#[test]
fn test_same_day_renders_are_identical() {
    let recipes = parse_recipes(FULL_RECIPE).unwrap();
    let renderer = renderer();
    assert_eq!(renderer.render(&recipes[0]), renderer.render(&recipes[0]));
}

#[test]
fn test_missing_title_falls_back_to_recipe() {
    let recipes = parse_recipes(r#"{"_id": {"$oid": "x"}, "localizedTitle": {"de": ""}}"#).unwrap();
    let md = renderer().render(&recipes[0]);
    assert!(md.contains("\n# recipe\n"));
}

#[test]
fn test_null_titles_fall_back() {
    let json = r#"
    {
        "_id": {"$oid": "x"},
        "localizedTitle": null,
        "steps": [{"title": null}, {"title": "Servieren"}]
    }
    "#;
    let recipes = parse_recipes(json).unwrap();
    let md = renderer().render(&recipes[0]);
    assert!(md.contains("\n# recipe\n"));
    assert!(md.contains("### Zubereitung\n\n- \n- Servieren\n"));
}

#[test]
fn test_ambiguous_cover_is_omitted() {
    let json = r#"
    {
        "_id": {"$oid": "x"},
        "localizedTitle": "Zwei Cover",
        "steps": [{"title": "Servieren"}],
        "imageList": [
            {"url": "https://cdn/a.jpg", "type": "cover"},
            {"url": "https://cdn/b.jpg", "type": "cover"}
        ]
    }
    "#;
    let recipes = parse_recipes(json).unwrap();
    let md = renderer().render(&recipes[0]);
    assert!(!md.contains("![Rezeptbild]"));
    assert!(md.contains("# Zwei Cover\n\n### Zutaten"));
}

#[test]
fn test_empty_comment_is_skipped() {
    let json = r#"{"_id": {"$oid": "x"}, "localizedTitle": "Tee", "authorComment": {"de": ""}}"#;
    let recipes = parse_recipes(json).unwrap();
    let md = renderer().render(&recipes[0]);
    assert!(md.contains("# Tee\n\n### Zutaten\n\n- \n\n### Zubereitung"));
}

#[test]
fn test_english_locale_preference() {
    use kptncook_markdown::Localizer;

    let renderer = renderer().with_localizer(Localizer::new(vec!["en".to_string()]));
    let recipes = parse_recipes(FULL_RECIPE).unwrap();
    let md = renderer.render(&recipes[0]);
    assert!(md.contains("# Roasted vegetables with feta\n\nPerfect after work.\n"));
}

#[test]
fn test_string_quantity_fails_to_parse() {
    let json = r#"
    {
        "_id": {"$oid": "x"},
        "ingredients": [{"quantity": "two", "ingredient": {"uncountableTitle": "Eier"}}]
    }
    "#;
    match parse_recipes(json) {
        Err(ExportError::ParseError(err)) => {
            assert_eq!(err.line(), 4);
            assert!(err.to_string().contains("invalid type"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_parse_error_in_list_keeps_position() {
    let json = "[\n  {\"_id\": {\"$oid\": \"a\"}},\n  {\"_id\": {\"$oid\": \"b\"}, \"cookingTime\": \"lang\"}\n]";
    match parse_recipes(json) {
        Err(ExportError::ParseError(err)) => assert_eq!(err.line(), 3),
        other => panic!("unexpected result: {other:?}"),
    }
}
