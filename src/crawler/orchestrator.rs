//! Crawl orchestration - the fixed phase sequence
//!
//! Phases run strictly in order, each completing before the next starts:
//!
//! 1. Ensure the track listing artifact exists (scrape it only if absent)
//! 2. Crawl every track url in the listing
//! 3. Crawl every course url listed by the persisted tracks
//! 4. Crawl prerequisite courses, repeating until a pass persists nothing new
//!
//! One url fails alone: its error is logged with the url and the loop moves
//! on. There is no retry; a rerun of the whole pipeline overwrites successful
//! artifacts with fresh data and picks up what failed last time.

use crate::crawler::{RenderedPage, Renderer};
use crate::frontier::{FrontierManager, FrontierSource};
use crate::model::TrackSummary;
use crate::parser::{parse_course, parse_track, parse_track_listing};
use crate::store::{course_key, track_key, ArtifactStore, TRACK_LIST_KEY};
use crate::url::{validate, ArtifactKind};
use crate::{CoursemapError, Result};
use serde::Serialize;

/// Per-batch crawl counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Urls the batch tried to crawl
    pub attempted: usize,
    /// Urls whose artifact was parsed and persisted
    pub persisted: usize,
}

/// Sequences the crawl phases over a renderer and an artifact store
pub struct Orchestrator<R, S> {
    renderer: R,
    store: S,
    listing_url: String,
}

impl<R: Renderer, S: ArtifactStore> Orchestrator<R, S> {
    pub fn new(renderer: R, store: S, listing_url: impl Into<String>) -> Self {
        Self {
            renderer,
            store,
            listing_url: listing_url.into(),
        }
    }

    /// Runs the full pipeline in its fixed phase order.
    ///
    /// The prerequisite phase repeats until it persists nothing new, which
    /// also bounds it when the same urls keep failing: a pass that makes no
    /// progress ends the loop.
    pub async fn run(&self) -> Result<()> {
        self.ensure_track_listing().await?;
        self.crawl_tracks().await?;
        self.crawl_courses(FrontierSource::Track).await?;

        loop {
            let outcome = self.crawl_courses(FrontierSource::Course).await?;
            if outcome.persisted == 0 {
                break;
            }
        }

        tracing::info!("Crawl complete");
        Ok(())
    }

    /// Scrapes and persists the track listing if it is not already on disk.
    /// The listing is never incrementally updated: it is either fully present
    /// or fully (re)scraped.
    pub async fn ensure_track_listing(&self) -> Result<()> {
        if self.store.exists(TRACK_LIST_KEY) {
            tracing::info!("Track listing already persisted, skipping");
            return Ok(());
        }

        tracing::info!("Get track list from {}", self.listing_url);
        let page = self.render_or_fail(&self.listing_url).await?;
        let listing = parse_track_listing(&page.html)?;
        self.persist(TRACK_LIST_KEY.to_string(), &listing)
    }

    /// Crawls every track url in the persisted listing, isolating per-url
    /// failures.
    pub async fn crawl_tracks(&self) -> Result<BatchOutcome> {
        let bytes = self
            .store
            .read(TRACK_LIST_KEY)?
            .ok_or(CoursemapError::MissingListing)?;
        let listing: Vec<TrackSummary> =
            serde_json::from_slice(&bytes).map_err(|source| CoursemapError::ArtifactDecode {
                key: TRACK_LIST_KEY.to_string(),
                source,
            })?;

        let urls: Vec<String> = listing.into_iter().map(|entry| entry.url).collect();
        tracing::info!("Track url count: {}", urls.len());

        let mut outcome = BatchOutcome::default();
        for url in urls {
            outcome.attempted += 1;
            match self.scrape_track(&url).await {
                Ok(()) => outcome.persisted += 1,
                Err(e) => tracing::error!("Failed {}: {}", url, e),
            }
        }
        Ok(outcome)
    }

    /// Computes the course frontier for a source and crawls it, isolating
    /// per-url failures. An invalid source is fatal to the call and is raised
    /// before any frontier or network work.
    pub async fn crawl_courses(&self, source: FrontierSource) -> Result<BatchOutcome> {
        let frontier = FrontierManager::new(&self.store);
        let urls = frontier.course_urls(source)?;
        tracing::info!("Course url count from {}: {}", source, urls.len());

        let mut outcome = BatchOutcome::default();
        for url in urls {
            outcome.attempted += 1;
            match self.scrape_course(&url).await {
                Ok(()) => outcome.persisted += 1,
                Err(e) => tracing::error!("Failed {}: {}", url, e),
            }
        }
        Ok(outcome)
    }

    async fn scrape_track(&self, url: &str) -> Result<()> {
        validate(url, ArtifactKind::Track)?;
        let key = track_key(url)?;
        let page = self.render_or_fail(url).await?;
        let track = parse_track(&page.html, url)?;
        self.persist(key, &track)
    }

    async fn scrape_course(&self, url: &str) -> Result<()> {
        validate(url, ArtifactKind::Course)?;
        let key = course_key(url)?;
        let page = self.render_or_fail(url).await?;
        let course = parse_course(&page.html, url)?;
        self.persist(key, &course)
    }

    async fn render_or_fail(&self, url: &str) -> Result<RenderedPage> {
        self.renderer
            .render(url)
            .await
            .ok_or_else(|| CoursemapError::Render {
                url: url.to_string(),
            })
    }

    fn persist<T: Serialize>(&self, key: String, record: &T) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(record).map_err(crate::store::StoreError::from)?;
        self.store.write(&key, &bytes)?;
        tracing::info!("Data saved to {}", key);
        Ok(())
    }
}
