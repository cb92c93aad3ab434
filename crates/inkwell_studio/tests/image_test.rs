// Image operation tests: plates, portraits, cover and pages.

mod test_utils;

use inkwell_core::{AspectRatio, ColorMode, Input, MediaSource, VisualMedium};
use inkwell_error::GeminiErrorKind;
use strum::IntoEnumIterator;
use test_utils::{IMAGE_MODEL, MockReply, character, location, page, project, studio};

fn image_payload(input: &Input) -> Option<&str> {
    match input {
        Input::Image {
            source: MediaSource::Base64(data),
            ..
        } => Some(data),
        _ => None,
    }
}

#[tokio::test]
async fn test_portrait_returns_data_uri() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("iVBORw0KGgo".to_string())]);
    let kai = character("char-0", "Kai", None);

    let uri = studio
        .generate_character_portrait(&kai, ColorMode::BlackAndWhite, VisualMedium::Manga)
        .await?;

    assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo");
    let request = studio.driver().last_request();
    assert_eq!(request.aspect_ratio, Some(AspectRatio::Square));
    assert_eq!(request.model.as_deref(), Some(IMAGE_MODEL));
    assert!(request.response_schema.is_none());

    let prompt = request.prompt_text();
    assert!(prompt.starts_with("CHARACTER MODEL SHEET: Kai. DNA: Kai anchor."));
    assert!(prompt.contains("STRICT PURE BLACK AND WHITE INK ONLY."));
    assert!(prompt.contains("ART STYLE: Professional Japanese Manga (Seinen)."));
    assert!(prompt.ends_with("Front-facing neutral pose. NO TEXT."));
    Ok(())
}

#[tokio::test]
async fn test_location_plate_is_widescreen() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("TE9D".to_string())]);
    let dock = location("loc-0", "Dock", None);

    let uri = studio
        .generate_location_plate(&dock, ColorMode::Color, VisualMedium::DetailedComic)
        .await?;

    assert_eq!(uri, "data:image/png;base64,TE9D");
    let request = studio.driver().last_request();
    assert_eq!(request.aspect_ratio, Some(AspectRatio::Widescreen));
    let prompt = request.prompt_text();
    assert!(prompt.starts_with("ENVIRONMENT PLATE: Dock. Dock description. FULL DIGITAL COLOR."));
    assert!(prompt.contains("High-Detail Digital Graphic Novel"));
    assert!(prompt.ends_with("Cinematic composition. NO TEXT."));
    Ok(())
}

#[tokio::test]
async fn test_missing_inline_image_yields_empty_string() -> anyhow::Result<()> {
    let studio = studio(vec![
        MockReply::Text("I cannot draw that.".to_string()),
        MockReply::Empty,
        MockReply::Empty,
        MockReply::Empty,
    ]);
    let project = project(ColorMode::BlackAndWhite, VisualMedium::Manga);
    let kai = character("char-0", "Kai", None);
    let dock = location("loc-0", "Dock", None);

    let portrait = studio
        .generate_character_portrait(&kai, project.color_mode, project.visual_medium)
        .await?;
    let plate = studio
        .generate_location_plate(&dock, project.color_mode, project.visual_medium)
        .await?;
    let cover = studio.generate_cover(&project).await?;
    let rendered = studio.generate_page(&page(1, &[], None), &project).await?;

    assert_eq!(portrait, "");
    assert_eq!(plate, "");
    assert_eq!(cover, "");
    assert_eq!(rendered, "");
    Ok(())
}

#[tokio::test]
async fn test_black_and_white_never_uses_color_directives() -> anyhow::Result<()> {
    for medium in VisualMedium::iter() {
        let studio = studio(vec![MockReply::Empty, MockReply::Empty]);
        let project = project(ColorMode::BlackAndWhite, medium);

        studio
            .generate_character_portrait(&character("char-0", "Kai", None), ColorMode::BlackAndWhite, medium)
            .await?;
        studio.generate_page(&page(1, &[], None), &project).await?;

        let requests = studio.driver().requests();
        let portrait_prompt = requests[0].prompt_text();
        let page_prompt = requests[1].prompt_text();

        assert!(portrait_prompt.contains("STRICT PURE BLACK AND WHITE INK ONLY."));
        assert!(!portrait_prompt.contains("FULL DIGITAL COLOR"));
        assert!(page_prompt.contains("STRICT PURE BLACK AND WHITE INK ONLY. NO COLORS."));
        assert!(!page_prompt.contains("FULL DIGITAL COLOR RENDERING."));
    }
    Ok(())
}

#[tokio::test]
async fn test_style_block_is_independent_of_color_mode() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Empty, MockReply::Empty]);
    let kai = character("char-0", "Kai", None);

    studio
        .generate_character_portrait(&kai, ColorMode::BlackAndWhite, VisualMedium::DcComic)
        .await?;
    studio
        .generate_character_portrait(&kai, ColorMode::Color, VisualMedium::DcComic)
        .await?;

    let requests = studio.driver().requests();
    let bw = requests[0].prompt_text();
    let color = requests[1].prompt_text();
    let style = studio
        .catalog()
        .descriptor(VisualMedium::DcComic, ColorMode::Color)
        .style_block;

    assert!(bw.contains(style));
    assert!(color.contains(style));
    Ok(())
}

#[tokio::test]
async fn test_cover_without_characters_uses_placeholders() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("Q09WRVI=".to_string())]);
    let project = project(ColorMode::Color, VisualMedium::DcComic);

    let uri = studio.generate_cover(&project).await?;

    assert_eq!(uri, "data:image/png;base64,Q09WRVI=");
    let request = studio.driver().last_request();
    assert_eq!(request.aspect_ratio, Some(AspectRatio::Portrait));
    assert_eq!(request.image_count(), 0);
    let prompt = request.prompt_text();
    assert!(prompt.contains("OFFICIAL COMIC COVER: \"Dune Riders\"."));
    assert!(prompt.contains("FEATURING: UNNAMED PROTAGONIST. DNA Lock: UNSPECIFIED."));
    assert!(prompt.contains("Render the title \"Dune Riders\" in clear, stylized English font."));
    Ok(())
}

#[tokio::test]
async fn test_cover_attaches_lead_portrait() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("Q09WRVI=".to_string())]);
    let mut project = project(ColorMode::BlackAndWhite, VisualMedium::Manga);
    project.characters = vec![
        character("char-0", "Kai", Some("S0FJ")),
        character("char-1", "Mira", Some("TUlSQQ==")),
    ];

    studio.generate_cover(&project).await?;

    let request = studio.driver().last_request();
    assert_eq!(request.image_count(), 1);
    assert_eq!(
        request.contents[0].as_text(),
        Some("REFERENCE PROTAGONIST DNA:")
    );
    assert_eq!(image_payload(&request.contents[1]), Some("S0FJ"));
    let prompt = request.prompt_text();
    assert!(prompt.contains("FEATURING: Kai. DNA Lock: Kai anchor."));
    assert!(!prompt.contains("Mira"));
    Ok(())
}

#[tokio::test]
async fn test_cover_lead_without_portrait_sends_text_only() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Empty]);
    let mut project = project(ColorMode::BlackAndWhite, VisualMedium::Manga);
    project.characters = vec![character("char-0", "Kai", None)];

    studio.generate_cover(&project).await?;

    let request = studio.driver().last_request();
    assert_eq!(request.image_count(), 0);
    assert_eq!(request.contents.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_page_attaches_location_then_cast_references() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("UEFHRQ==".to_string())]);
    let mut project = project(ColorMode::BlackAndWhite, VisualMedium::Manga);
    project.set_assets(
        vec![
            character("char-0", "Kai", Some("S0FJ")),
            character("char-1", "Mira", Some("TUlSQQ==")),
            character("char-2", "Oren", Some("T1JFTg==")),
        ],
        vec![location("loc-3", "Salt Flats", Some("U0FMVA=="))],
    );
    let page = page(4, &["Mira", "Kai"], Some("loc-3"));

    let uri = studio.generate_page(&page, &project).await?;

    assert_eq!(uri, "data:image/png;base64,UEFHRQ==");
    let request = studio.driver().last_request();
    assert_eq!(request.aspect_ratio, Some(AspectRatio::Portrait));
    assert_eq!(request.image_count(), 3);

    let contents = &request.contents;
    assert_eq!(contents[0].as_text(), Some("ENVIRONMENT CONTEXT:"));
    assert_eq!(image_payload(&contents[1]), Some("U0FMVA=="));
    // Cast follows project order, not page order
    assert_eq!(contents[2].as_text(), Some("CHARACTER DNA LOCK (Kai):"));
    assert_eq!(image_payload(&contents[3]), Some("S0FJ"));
    assert_eq!(contents[4].as_text(), Some("CHARACTER DNA LOCK (Mira):"));
    assert_eq!(image_payload(&contents[5]), Some("TUlSQQ=="));

    let prompt = contents[6].as_text().expect("prompt is last");
    assert!(prompt.starts_with("ACT AS A WORLD-CLASS COMIC ARTIST AND DIRECTOR."));
    assert!(prompt.contains("GENERATING PAGE 4."));
    assert!(prompt.contains("SCENE DESCRIPTION: Two riders crest a dune"));
    assert!(prompt.contains("DIALOGUE TO RENDER: \"We ride at dawn!\""));
    assert!(prompt.contains(
        "MANDATORY: PUT \"We ride at dawn!\" IN A WHITE SPEECH BUBBLE WITH BOLD BLACK TEXT."
    ));
    assert!(prompt.ends_with("MAINTAIN CHARACTER IDENTITY FROM REFERENCES PERFECTLY."));

    let directive = prompt.find("GENERATING PAGE 4.").expect("page line");
    let scene = prompt.find("SCENE DESCRIPTION").expect("scene line");
    assert!(directive < scene);
    Ok(())
}

#[tokio::test]
async fn test_page_with_unknown_location_skips_reference() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("UEFHRQ==".to_string())]);
    let mut project = project(ColorMode::BlackAndWhite, VisualMedium::Manga);
    project.set_assets(vec![], vec![location("loc-0", "Dock", Some("RE9DSw=="))]);

    let uri = studio
        .generate_page(&page(1, &[], Some("loc-99")), &project)
        .await?;

    assert_eq!(uri, "data:image/png;base64,UEFHRQ==");
    let request = studio.driver().last_request();
    assert_eq!(request.image_count(), 0);
    assert_eq!(request.contents.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_page_with_unknown_character_skips_reference() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Empty]);
    let mut project = project(ColorMode::BlackAndWhite, VisualMedium::Manga);
    project.set_assets(vec![character("char-0", "Kai", Some("S0FJ"))], vec![]);

    studio
        .generate_page(&page(1, &["kai", "Ghost"], None), &project)
        .await?;

    // Names match exactly, so "kai" does not resolve to Kai
    assert_eq!(studio.driver().last_request().image_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_page_does_not_touch_status() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Image("UEFHRQ==".to_string())]);
    let project = project(ColorMode::Color, VisualMedium::Manga);
    let page = page(1, &[], None);

    studio.generate_page(&page, &project).await?;

    assert_eq!(page.status, Default::default());
    assert!(page.generated_image_url.is_none());
    Ok(())
}

#[tokio::test]
async fn test_image_call_retries_then_succeeds() -> anyhow::Result<()> {
    let studio = studio(vec![
        MockReply::Error(GeminiErrorKind::HttpError {
            status_code: 503,
            message: "Model is overloaded".to_string(),
        }),
        MockReply::Image("T0s=".to_string()),
    ]);

    let uri = studio
        .generate_location_plate(
            &location("loc-0", "Dock", None),
            ColorMode::Color,
            VisualMedium::Manga,
        )
        .await?;

    assert_eq!(uri, "data:image/png;base64,T0s=");
    assert_eq!(studio.driver().call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_image_call_propagates_permanent_error() -> anyhow::Result<()> {
    let studio = studio(vec![MockReply::Error(GeminiErrorKind::HttpError {
        status_code: 400,
        message: "Invalid argument".to_string(),
    })]);

    let result = studio
        .generate_character_portrait(
            &character("char-0", "Kai", None),
            ColorMode::Color,
            VisualMedium::Manga,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(studio.driver().call_count(), 1);
    Ok(())
}
