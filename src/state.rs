//! Shared application state handed to every handler.

use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::judgment::{CompletionClient, JudgmentService, OpenAiClient};
use crate::page::PageRenderer;

#[derive(Clone)]
pub struct AppState {
    pub judgments: JudgmentService,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Build the state with the OpenAI client described by `config`.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = OpenAiClient::new(&config.completion).context("failed to create completion client")?;
        log::info!(
            "Completion client ready (model {}, timeout {:?})",
            client.model(),
            config.completion.timeout
        );
        Self::with_client(Arc::new(client), config)
    }

    /// Build the state around any completion client.
    pub fn with_client(client: Arc<dyn CompletionClient>, config: &AppConfig) -> anyhow::Result<Self> {
        let pages = PageRenderer::new().context("failed to load page template")?;
        Ok(Self {
            judgments: JudgmentService::new(client, config.template_path.clone()),
            pages: Arc::new(pages),
        })
    }
}
