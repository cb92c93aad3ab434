//! The manga generation facade.
//!
//! [`MangaStudio`] turns project records into instructions, sends each one
//! through its driver exactly once (plus retries), and parses the answer. It
//! holds only immutable configuration and never touches generation status;
//! moving pages and covers through their lifecycle is the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use inkwell_config::InkwellConfig;
//! use inkwell_models::GeminiClient;
//! use inkwell_studio::MangaStudio;
//! use inkwell_core::MangaProject;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = InkwellConfig::load()?;
//! let studio = MangaStudio::from_config(GeminiClient::new(&config.gemini)?, &config)?;
//!
//! let mut project = MangaProject::builder()
//!     .title("Tidewater")
//!     .story("Two rivals race a storm across the bay.")
//!     .build()?;
//!
//! let assets = studio
//!     .extract_assets(&project.story, project.style_references.as_deref(), &mut project.ids)
//!     .await?;
//! let (characters, locations) = assets.dissolve();
//! project.set_assets(characters, locations);
//!
//! project.storyboard = studio.create_storyboard(&project).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use inkwell_config::{InkwellConfig, RetryPolicy, StyleCatalog};
use inkwell_core::{
    AspectRatio, Character, ColorMode, GenerateRequest, IdAllocator, Input, Location,
    MangaProject, StoryboardPage, VisualMedium, data_uri,
};
use inkwell_error::{InkwellResult, StudioError, StudioErrorKind};
use inkwell_interface::InkwellDriver;
use inkwell_models::RetryingDriver;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};

use crate::assets::{ExtractedAssets, ExtractionPayload};
use crate::parse::{ParsePolicy, ParsedResponse, parse_structured};
use crate::{prompts, schema};

/// User-facing message carried by a storyboard parse failure.
pub const STORYBOARD_PARSE_MESSAGE: &str =
    "Manga engine failed to parse storyboard. Please refine your script and try again.";

/// Raw storyboard page as the service returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPage {
    page_number: u32,
    layout_type: inkwell_core::PageLayout,
    layout_description: String,
    narrative_text: String,
    visual_prompt: String,
    characters_in_page: Vec<String>,
    #[serde(default)]
    location_id: Option<String>,
}

impl From<RawPage> for StoryboardPage {
    fn from(raw: RawPage) -> Self {
        Self {
            page_number: raw.page_number,
            layout_type: raw.layout_type,
            layout_description: raw.layout_description,
            narrative_text: raw.narrative_text,
            visual_prompt: raw.visual_prompt,
            characters_in_page: raw.characters_in_page,
            location_id: raw.location_id.filter(|id| !id.trim().is_empty()),
            generated_image_url: None,
            status: Default::default(),
        }
    }
}

/// Generation facade over any [`InkwellDriver`].
///
/// Every call goes through a [`RetryingDriver`] built from the supplied
/// [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct MangaStudio<D> {
    driver: RetryingDriver<D>,
    catalog: Arc<StyleCatalog>,
    text_model: Option<String>,
    image_model: Option<String>,
}

impl<D: InkwellDriver> MangaStudio<D> {
    /// Create a studio that leaves model choice to the driver.
    pub fn new(driver: D, catalog: Arc<StyleCatalog>, retry: RetryPolicy) -> Self {
        Self {
            driver: RetryingDriver::new(driver, retry),
            catalog,
            text_model: None,
            image_model: None,
        }
    }

    /// Create a studio from loaded configuration: style catalog, retry
    /// policy and both model names.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the style catalog is incomplete.
    pub fn from_config(driver: D, config: &InkwellConfig) -> InkwellResult<Self> {
        let catalog = Arc::new(StyleCatalog::from_config(config)?);
        Ok(Self::new(driver, catalog, config.retry).with_models(
            config.gemini.text_model.clone(),
            config.gemini.image_model.clone(),
        ))
    }

    /// Name the models used for structured text and for images.
    pub fn with_models(mut self, text_model: impl Into<String>, image_model: impl Into<String>) -> Self {
        self.text_model = Some(text_model.into());
        self.image_model = Some(image_model.into());
        self
    }

    /// The style catalog prompts are built from.
    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &D {
        self.driver.inner()
    }

    /// Extract characters and locations from a script.
    ///
    /// Malformed or off-schema responses degrade to empty collections; see
    /// [`Self::extract_assets_with_policy`] to fail instead.
    pub async fn extract_assets(
        &self,
        story: &str,
        style_ref: Option<&str>,
        ids: &mut IdAllocator,
    ) -> InkwellResult<ExtractedAssets> {
        self.extract_assets_with_policy(story, style_ref, ids, ParsePolicy::Degrade)
            .await
    }

    /// Extract characters and locations, resolving parse failures under
    /// `policy`.
    ///
    /// Each extracted record gets a fresh id from `ids`, in service order.
    /// Nothing is minted when the response does not parse.
    #[instrument(skip(self, story, style_ref, ids), fields(story_len = story.len(), policy = %policy))]
    pub async fn extract_assets_with_policy(
        &self,
        story: &str,
        style_ref: Option<&str>,
        ids: &mut IdAllocator,
        policy: ParsePolicy,
    ) -> InkwellResult<ExtractedAssets> {
        let context = style_ref
            .map(str::trim)
            .filter(|context| !context.is_empty())
            .unwrap_or(self.catalog.default_context());

        let request = self.build_request(
            self.text_model.as_deref(),
            vec![Input::Text(prompts::extraction_prompt(story, context))],
            Some(schema::extraction_schema()),
            None,
        )?;
        let text = self.driver.generate(&request).await?.text();

        let payload: ExtractionPayload = parse_structured(&text).resolve(policy)?;
        let assets = payload.into_assets(ids);

        debug!(
            characters = assets.characters().len(),
            locations = assets.locations().len(),
            "Assets extracted"
        );
        Ok(assets)
    }

    /// Render an environment plate (16:9).
    ///
    /// Returns a PNG data URI, or an empty string if the response carried no
    /// image.
    #[instrument(skip(self, location), fields(location = %location.id))]
    pub async fn generate_location_plate(
        &self,
        location: &Location,
        color_mode: ColorMode,
        medium: VisualMedium,
    ) -> InkwellResult<String> {
        let style = self.catalog.descriptor(medium, color_mode);
        let prompt = prompts::location_plate_prompt(location, &style);
        self.render_image(vec![Input::Text(prompt)], AspectRatio::Widescreen)
            .await
    }

    /// Render a character model sheet (1:1).
    ///
    /// Returns a PNG data URI, or an empty string if the response carried no
    /// image.
    #[instrument(skip(self, character), fields(character = %character.id))]
    pub async fn generate_character_portrait(
        &self,
        character: &Character,
        color_mode: ColorMode,
        medium: VisualMedium,
    ) -> InkwellResult<String> {
        let style = self.catalog.descriptor(medium, color_mode);
        let prompt = prompts::portrait_prompt(character, &style);
        self.render_image(vec![Input::Text(prompt)], AspectRatio::Square)
            .await
    }

    /// Render the cover (3:4) featuring the lead character.
    ///
    /// The lead's portrait, when present, is attached as a reference image.
    #[instrument(skip(self, project), fields(title = %project.title))]
    pub async fn generate_cover(&self, project: &MangaProject) -> InkwellResult<String> {
        let style = self
            .catalog
            .descriptor(project.visual_medium, project.color_mode);

        let mut contents = Vec::new();
        match project.lead_character() {
            Some(lead) => {
                if let Some(payload) = lead.image_url.as_deref().and_then(data_uri::payload) {
                    contents.push(Input::Text(prompts::PROTAGONIST_REFERENCE_LABEL.to_string()));
                    contents.push(Input::png(payload));
                }
            }
            None => warn!("Project has no characters, cover has no lead"),
        }
        contents.push(Input::Text(prompts::cover_prompt(project, &style)));

        self.render_image(contents, AspectRatio::Portrait).await
    }

    /// Break the story into storyboard pages.
    ///
    /// Malformed or off-schema responses fail with
    /// [`StudioErrorKind::StoryboardParse`]; see
    /// [`Self::create_storyboard_with_policy`] to degrade instead.
    pub async fn create_storyboard(
        &self,
        project: &MangaProject,
    ) -> InkwellResult<Vec<StoryboardPage>> {
        self.create_storyboard_with_policy(project, ParsePolicy::Fail)
            .await
    }

    /// Break the story into storyboard pages, resolving parse failures under
    /// `policy`.
    ///
    /// Every returned page is pending with no image, whatever the response
    /// said about those fields.
    #[instrument(skip(self, project), fields(title = %project.title, pages = project.page_count, policy = %policy))]
    pub async fn create_storyboard_with_policy(
        &self,
        project: &MangaProject,
        policy: ParsePolicy,
    ) -> InkwellResult<Vec<StoryboardPage>> {
        let request = self.build_request(
            self.text_model.as_deref(),
            vec![Input::Text(prompts::storyboard_prompt(project))],
            Some(schema::storyboard_schema()),
            None,
        )?;
        let text = self.driver.generate(&request).await?.text();

        if text.trim().is_empty() {
            warn!("Storyboard response was empty");
            return Ok(Vec::new());
        }

        let raw_pages: Vec<RawPage> = match (parse_structured(&text), policy) {
            (ParsedResponse::Valid(pages), _) => pages,
            (outcome, ParsePolicy::Degrade) => outcome.resolve(ParsePolicy::Degrade)?,
            (ParsedResponse::MalformedJson(reason) | ParsedResponse::SchemaViolation(reason), ParsePolicy::Fail) => {
                error!(error = %reason, raw = %text, "Storyboard parse error");
                return Err(StudioError::new(StudioErrorKind::StoryboardParse(
                    STORYBOARD_PARSE_MESSAGE.to_string(),
                ))
                .into());
            }
        };

        let pages: Vec<StoryboardPage> = raw_pages.into_iter().map(StoryboardPage::from).collect();
        debug!(pages = pages.len(), "Storyboard created");
        Ok(pages)
    }

    /// Render one storyboard page (3:4).
    ///
    /// Attaches the page's location plate and the portraits of its cast as
    /// references. References that do not resolve, or that have no image yet,
    /// are skipped.
    #[instrument(skip(self, page, project), fields(page = page.page_number))]
    pub async fn generate_page(
        &self,
        page: &StoryboardPage,
        project: &MangaProject,
    ) -> InkwellResult<String> {
        let mut contents = Vec::new();

        match (page.location_id.as_deref(), project.location_for(page)) {
            (_, Some(location)) => {
                match location.image_url.as_deref().and_then(data_uri::payload) {
                    Some(payload) => {
                        contents.push(Input::Text(prompts::ENVIRONMENT_REFERENCE_LABEL.to_string()));
                        contents.push(Input::png(payload));
                    }
                    None => debug!(location = %location.id, "Location has no plate yet"),
                }
            }
            (Some(id), None) => debug!(location = id, "Page location not in project, skipping reference"),
            (None, None) => {}
        }

        let cast = project.cast_for(page);
        for name in &page.characters_in_page {
            if !cast.iter().any(|character| &character.name == name) {
                debug!(character = %name, "Page character not in project, skipping reference");
            }
        }
        for character in cast {
            match character.image_url.as_deref().and_then(data_uri::payload) {
                Some(payload) => {
                    contents.push(Input::Text(prompts::character_reference_label(&character.name)));
                    contents.push(Input::png(payload));
                }
                None => debug!(character = %character.id, "Character has no portrait yet"),
            }
        }

        let style = self
            .catalog
            .descriptor(project.visual_medium, project.color_mode);
        contents.push(Input::Text(prompts::page_prompt(
            page,
            self.catalog.continuity(),
            &style,
        )));

        self.render_image(contents, AspectRatio::Portrait).await
    }

    /// Send an image request and wrap the first inline image as a data URI.
    async fn render_image(&self, contents: Vec<Input>, aspect_ratio: AspectRatio) -> InkwellResult<String> {
        let request = self.build_request(self.image_model.as_deref(), contents, None, Some(aspect_ratio))?;
        let response = self.driver.generate(&request).await?;

        match response.first_image() {
            Some(data) => Ok(data_uri::png(data)),
            None => {
                warn!(aspect_ratio = %aspect_ratio, "Response carried no image");
                Ok(String::new())
            }
        }
    }

    fn build_request(
        &self,
        model: Option<&str>,
        contents: Vec<Input>,
        response_schema: Option<Value>,
        aspect_ratio: Option<AspectRatio>,
    ) -> InkwellResult<GenerateRequest> {
        let mut builder = GenerateRequest::builder();
        builder.contents(contents);
        if let Some(model) = model {
            builder.model(model);
        }
        if let Some(schema) = response_schema {
            builder.response_schema(schema);
        }
        if let Some(ratio) = aspect_ratio {
            builder.aspect_ratio(ratio);
        }
        builder.build().map_err(|e| {
            StudioError::new(StudioErrorKind::RequestBuild(e.to_string())).into()
        })
    }
}
