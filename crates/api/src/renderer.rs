//! Client for the external document renderer.
//!
//! The renderer is a separate service that turns a frozen statement snapshot
//! into a printable PDF. The API never builds documents itself; it posts the
//! snapshot and streams the bytes back. Renderer failures are retryable and
//! never affect statement state.

use std::time::Duration;

use rano_core::export::{ExportError, StatementSnapshot};
use rano_shared::config::RendererConfig;

/// HTTP client wrapper for the renderer service.
#[derive(Debug, Clone)]
pub struct RendererClient {
    http: reqwest::Client,
    base_url: String,
}

impl RendererClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &RendererConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    /// Renders a statement snapshot into PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::RendererUnavailable` on any transport or
    /// non-success response; the caller may retry.
    pub async fn render_statement(
        &self,
        snapshot: &StatementSnapshot,
    ) -> Result<Vec<u8>, ExportError> {
        let url = format!("{}/render/statement", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(snapshot)
            .send()
            .await
            .map_err(|e| ExportError::RendererUnavailable(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| ExportError::RendererUnavailable(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExportError::RendererUnavailable(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
