//! Crawling: page rendering and phase orchestration
//!
//! The renderer turns a url into final page content or nothing; the
//! orchestrator sequences the fixed crawl phases over a renderer and an
//! artifact store, isolating per-url failures.

mod orchestrator;
mod renderer;

pub use orchestrator::{BatchOutcome, Orchestrator};
pub use renderer::{HttpRenderer, RenderedPage, Renderer};
