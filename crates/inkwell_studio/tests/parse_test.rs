// Structured response parsing and storyboard validation tests.

use inkwell_core::{Character, Location, MangaProject, PageLayout, StoryboardPage};
use inkwell_error::StudioErrorKind;
use inkwell_studio::{
    ParsePolicy, ParsedResponse, ReferenceIssue, parse_structured, strip_code_fence,
    validate_storyboard,
};

#[derive(Debug, Default, PartialEq, serde::Deserialize)]
struct Pair {
    left: String,
    right: u32,
}

#[test]
fn test_strip_code_fence_accepts_whole_blocks_only() {
    assert_eq!(strip_code_fence("```\n[1, 2]\n```"), Some("[1, 2]"));
    assert_eq!(strip_code_fence("  ```json\n[1, 2]\n```\n"), Some("[1, 2]"));
    assert_eq!(strip_code_fence("Notes\n```json\n[1, 2]\n```"), None);
    assert_eq!(strip_code_fence("```json\n[1, 2]\n```\ntrailing"), None);
    assert_eq!(strip_code_fence("```json\n[1, 2]"), None);
}

#[test]
fn test_raw_json_with_backticks_in_strings_parses() {
    let response = r#"{"left": "run ```ls``` first", "right": 4}"#;
    assert_eq!(
        parse_structured::<Pair>(response),
        ParsedResponse::Valid(Pair {
            left: "run ```ls``` first".to_string(),
            right: 4
        })
    );
}

#[test]
fn test_fenced_json_with_backticks_in_strings_parses() {
    let response = "```json\n{\"left\": \"a ``` b\", \"right\": 5}\n```";
    assert!(matches!(
        parse_structured::<Pair>(response),
        ParsedResponse::Valid(Pair { right: 5, .. })
    ));
}

#[test]
fn test_json_surrounded_by_prose_is_malformed() {
    let wrapped = "Sure! {\"left\": \"a\", \"right\": 1} Hope that helps.";
    assert!(matches!(
        parse_structured::<Pair>(wrapped),
        ParsedResponse::MalformedJson(_)
    ));

    let fenced_with_preamble = "Here you go:\n```json\n{\"left\": \"a\", \"right\": 1}\n```";
    assert!(matches!(
        parse_structured::<Pair>(fenced_with_preamble),
        ParsedResponse::MalformedJson(_)
    ));

    assert!(matches!(
        parse_structured::<Vec<u32>>("[1] [2]"),
        ParsedResponse::MalformedJson(_)
    ));
}

#[test]
fn test_parse_outcomes_are_distinguished() {
    assert_eq!(
        parse_structured::<Pair>("{\"left\": \"x\", \"right\": 3}"),
        ParsedResponse::Valid(Pair {
            left: "x".to_string(),
            right: 3
        })
    );
    assert!(matches!(
        parse_structured::<Pair>("{\"left\": \"x\", "),
        ParsedResponse::MalformedJson(_)
    ));
    assert!(matches!(
        parse_structured::<Pair>("{\"left\": \"x\", \"right\": \"three\"}"),
        ParsedResponse::SchemaViolation(_)
    ));
    assert!(matches!(parse_structured::<Pair>(""), ParsedResponse::MalformedJson(_)));
}

#[test]
fn test_policy_resolution() -> anyhow::Result<()> {
    let degraded = parse_structured::<Pair>("garbage").resolve(ParsePolicy::Degrade)?;
    assert_eq!(degraded, Pair::default());

    let err = parse_structured::<Pair>("{\"left\": 1, \"right\": 2}")
        .resolve(ParsePolicy::Fail)
        .expect_err("schema violation must fail");
    assert!(matches!(
        err.studio_kind(),
        Some(StudioErrorKind::SchemaViolation(_))
    ));

    let valid = parse_structured::<Pair>("{\"left\": \"y\", \"right\": 9}");
    assert!(valid.is_valid());
    assert_eq!(valid.into_result()?.right, 9);
    Ok(())
}

fn storyboard_page(number: u32, cast: &[&str], location_id: Option<&str>) -> StoryboardPage {
    StoryboardPage {
        page_number: number,
        layout_type: PageLayout::ClimaxSpread,
        layout_description: String::new(),
        narrative_text: String::new(),
        visual_prompt: String::new(),
        characters_in_page: cast.iter().map(|name| name.to_string()).collect(),
        location_id: location_id.map(str::to_string),
        generated_image_url: None,
        status: Default::default(),
    }
}

#[test]
fn test_validate_storyboard_reports_unresolved_references() -> anyhow::Result<()> {
    let mut project = MangaProject::builder().title("T").story("S").build()?;
    project.set_assets(
        vec![Character {
            id: "char-0".to_string(),
            name: "Kai".to_string(),
            description: String::new(),
            visual_prompt: String::new(),
            visual_anchor: String::new(),
            image_url: None,
        }],
        vec![Location {
            id: "loc-1".to_string(),
            name: "Dock".to_string(),
            description: String::new(),
            image_url: None,
        }],
    );
    project.storyboard = vec![
        storyboard_page(1, &["Kai"], Some("loc-1")),
        storyboard_page(2, &["Kai", "Mira"], Some("loc-9")),
        storyboard_page(3, &[], None),
    ];

    let issues = validate_storyboard(&project);

    assert_eq!(
        issues,
        vec![
            ReferenceIssue::UnknownLocation {
                page_number: 2,
                location_id: "loc-9".to_string()
            },
            ReferenceIssue::UnknownCharacter {
                page_number: 2,
                name: "Mira".to_string()
            },
        ]
    );
    assert_eq!(
        issues[0].to_string(),
        "Page 2: location 'loc-9' is not in the project"
    );
    Ok(())
}
