//! Driving a project through its generation stages.
//!
//! [`MangaStudio`] only produces content; the functions here write that
//! content back into a [`MangaProject`] and move each image slot through its
//! [`GenerationStatus`] lifecycle. A slot is marked generating before its
//! call starts and settles to completed or failed once the call returns, so
//! a project saved mid-run shows exactly which slots were in flight.

use futures::{StreamExt, stream};
use inkwell_core::{GenerationStatus, MangaProject};
use inkwell_error::{InkwellError, InkwellResult, StudioError, StudioErrorKind};
use inkwell_interface::InkwellDriver;
use inkwell_studio::{MangaStudio, ParsePolicy};
use tracing::{debug, error, info, instrument, warn};

/// Tally of one rendering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct RenderSummary {
    /// Slots that received an image
    completed: usize,
    /// Slots whose call errored or returned no image
    failed: usize,
    /// Slots left alone because they already had an image
    skipped: usize,
}

impl RenderSummary {
    fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.completed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Whether every attempted slot produced an image.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl std::fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} completed, {} failed, {} skipped",
            self.completed, self.failed, self.skipped
        )
    }
}

/// Extract characters and locations into the project.
///
/// `None` uses the facade's default policy, which degrades a garbled
/// response to nothing. An empty extraction leaves existing assets in place.
/// Returns the number of assets stored.
#[instrument(skip(studio, project), fields(title = %project.title))]
pub async fn extract_assets<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    project: &mut MangaProject,
    policy: Option<ParsePolicy>,
) -> InkwellResult<usize> {
    let style_ref = project.style_references.as_deref();
    let assets = match policy {
        Some(policy) => {
            studio
                .extract_assets_with_policy(
                    &project.story,
                    style_ref,
                    &mut project.ids,
                    policy,
                )
                .await?
        }
        None => {
            studio
                .extract_assets(&project.story, style_ref, &mut project.ids)
                .await?
        }
    };

    if assets.is_empty() {
        warn!("Extraction found no assets, keeping existing ones");
        return Ok(0);
    }

    let (characters, locations) = assets.dissolve();
    let count = characters.len() + locations.len();
    project.set_assets(characters, locations);
    info!(
        characters = project.characters.len(),
        locations = project.locations.len(),
        "Assets stored"
    );
    Ok(count)
}

/// Render character portraits and location plates.
///
/// Assets that already have an image are skipped unless `force` is set.
/// Calls run one at a time; a failed asset is logged and left without an
/// image.
#[instrument(skip(studio, project), fields(title = %project.title))]
pub async fn render_references<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    project: &mut MangaProject,
    force: bool,
) -> InkwellResult<RenderSummary> {
    let mut summary = RenderSummary::default();
    let (color_mode, medium) = (project.color_mode, project.visual_medium);

    for index in 0..project.characters.len() {
        if project.characters[index].image_url.is_some() && !force {
            summary.skipped += 1;
            continue;
        }
        let outcome = studio
            .generate_character_portrait(&project.characters[index], color_mode, medium)
            .await;
        let character = &mut project.characters[index];
        let label = format!("portrait of {}", character.name);
        summary.record(store_reference(&mut character.image_url, outcome, &label));
    }

    for index in 0..project.locations.len() {
        if project.locations[index].image_url.is_some() && !force {
            summary.skipped += 1;
            continue;
        }
        let outcome = studio
            .generate_location_plate(&project.locations[index], color_mode, medium)
            .await;
        let location = &mut project.locations[index];
        let label = format!("plate of {}", location.name);
        summary.record(store_reference(&mut location.image_url, outcome, &label));
    }

    info!(%summary, "References rendered");
    Ok(summary)
}

/// Replace the project's storyboard.
///
/// `None` uses the facade's default policy, which fails on a garbled
/// response. The existing storyboard is kept when the call fails or returns
/// no pages. Returns the number of pages stored.
#[instrument(skip(studio, project), fields(title = %project.title))]
pub async fn create_storyboard<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    project: &mut MangaProject,
    policy: Option<ParsePolicy>,
) -> InkwellResult<usize> {
    let pages = match policy {
        Some(policy) => studio.create_storyboard_with_policy(project, policy).await?,
        None => studio.create_storyboard(project).await?,
    };

    if pages.is_empty() {
        warn!("Storyboard came back empty, keeping existing pages");
        return Ok(0);
    }
    if pages.len() != project.page_count as usize {
        warn!(
            requested = project.page_count,
            received = pages.len(),
            "Storyboard page count differs from request"
        );
    }

    project.storyboard = pages;
    Ok(project.storyboard.len())
}

/// Render the cover if it still needs one.
///
/// Returns the cover's status afterwards.
#[instrument(skip(studio, project), fields(title = %project.title))]
pub async fn render_cover<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    project: &mut MangaProject,
) -> InkwellResult<GenerationStatus> {
    if !project.cover_status.needs_render() {
        debug!(status = %project.cover_status, "Cover already rendered");
        return Ok(project.cover_status);
    }

    project.cover_status.begin()?;
    let outcome = studio.generate_cover(project).await;
    settle(
        &mut project.cover_status,
        &mut project.cover_image_url,
        outcome,
        "cover",
    )?;
    Ok(project.cover_status)
}

/// Render every page that is pending or failed.
///
/// Up to `concurrency` pages are in flight at once (at least one). Every
/// target page is marked generating before the first call starts, and each
/// settles independently: one failed page never stops the others.
#[instrument(skip(studio, project), fields(title = %project.title))]
pub async fn render_pages<D: InkwellDriver>(
    studio: &MangaStudio<D>,
    project: &mut MangaProject,
    concurrency: usize,
) -> InkwellResult<RenderSummary> {
    let targets: Vec<usize> = project
        .storyboard
        .iter()
        .enumerate()
        .filter(|(_, page)| page.status.needs_render())
        .map(|(index, _)| index)
        .collect();

    let mut summary = RenderSummary {
        skipped: project.storyboard.len() - targets.len(),
        ..RenderSummary::default()
    };
    if targets.is_empty() {
        debug!("No pages need rendering");
        return Ok(summary);
    }

    for &index in &targets {
        project.storyboard[index].status.begin()?;
    }

    let snapshot = project.clone();
    let outcomes: Vec<(usize, InkwellResult<String>)> = stream::iter(targets)
        .map(|index| {
            let snapshot = &snapshot;
            async move {
                let outcome = studio
                    .generate_page(&snapshot.storyboard[index], snapshot)
                    .await;
                (index, outcome)
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    for (index, outcome) in outcomes {
        let page = &mut project.storyboard[index];
        let label = format!("page {}", page.page_number);
        let succeeded = settle(
            &mut page.status,
            &mut page.generated_image_url,
            outcome,
            &label,
        )?;
        summary.record(succeeded);
    }

    info!(%summary, "Pages rendered");
    Ok(summary)
}

/// Mark slots left generating by an interrupted run as failed.
///
/// A loaded project can only be generating if the process that saved it
/// died mid-call. Failed slots are picked up again by the next render.
/// Returns the number of slots reset.
pub fn recover_interrupted(project: &mut MangaProject) -> InkwellResult<usize> {
    let mut recovered = 0;

    if project.cover_status == GenerationStatus::Generating {
        project.cover_status.fail()?;
        recovered += 1;
    }
    for page in &mut project.storyboard {
        if page.status == GenerationStatus::Generating {
            page.status.fail()?;
            recovered += 1;
        }
    }

    if recovered > 0 {
        warn!(slots = recovered, "Recovered interrupted generations");
    }
    Ok(recovered)
}

/// Store a reference image, logging why there is none.
fn store_reference(slot: &mut Option<String>, outcome: InkwellResult<String>, label: &str) -> bool {
    match outcome {
        Ok(uri) if !uri.is_empty() => {
            *slot = Some(uri);
            true
        }
        Ok(_) => {
            let err = empty_result(label);
            warn!(error = %err, "No image returned");
            false
        }
        Err(e) => {
            error!(error = %e, slot = label, "Reference render failed");
            false
        }
    }
}

/// Settle an in-flight slot from its call's outcome.
fn settle(
    status: &mut GenerationStatus,
    slot: &mut Option<String>,
    outcome: InkwellResult<String>,
    label: &str,
) -> InkwellResult<bool> {
    match outcome {
        Ok(uri) if !uri.is_empty() => {
            *slot = Some(uri);
            status.complete()?;
            Ok(true)
        }
        Ok(_) => {
            let err = empty_result(label);
            warn!(error = %err, "No image returned");
            status.fail()?;
            Ok(false)
        }
        Err(e) => {
            error!(error = %e, slot = label, "Render failed");
            status.fail()?;
            Ok(false)
        }
    }
}

fn empty_result(label: &str) -> InkwellError {
    StudioError::new(StudioErrorKind::EmptyResult(label.to_string())).into()
}
