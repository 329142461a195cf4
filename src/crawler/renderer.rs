//! Page rendering behind a narrow interface
//!
//! The renderer owns the network: it takes a url and either returns the final
//! page content or nothing. Failures never cross this boundary as errors; a
//! failed render is an absent page, logged here, and the caller skips the url.
//! The production implementation is a plain HTTP adapter; interactive
//! rendering (expander clicking, script execution) belongs to an external
//! collaborator behind the same contract.

use crate::config::RendererConfig;
use crate::Result;
use reqwest::Client;
use std::time::Duration;

/// Final content of a rendered page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// The url that was rendered
    pub url: String,
    /// Full page markup after rendering settled
    pub html: String,
}

/// Contract every page renderer satisfies
#[allow(async_fn_in_trait)]
pub trait Renderer {
    /// Renders a url to its final content, or None on any network failure.
    /// Never panics past this boundary.
    async fn render(&self, url: &str) -> Option<RenderedPage>;
}

/// HTTP-backed renderer
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    /// Builds the renderer's HTTP client from configuration
    pub fn new(config: &RendererConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self { client })
    }
}

impl Renderer for HttpRenderer {
    async fn render(&self, url: &str) -> Option<RenderedPage> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() {
                    tracing::warn!("Render timed out for {}", url);
                } else {
                    tracing::warn!("Render failed for {}: {}", url, e);
                }
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Render failed for {}: HTTP {}", url, status.as_u16());
            return None;
        }

        match response.text().await {
            Ok(html) => Some(RenderedPage {
                url: url.to_string(),
                html,
            }),
            Err(e) => {
                tracing::warn!("Render failed reading body for {}: {}", url, e);
                None
            }
        }
    }
}
