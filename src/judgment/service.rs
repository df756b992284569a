//! Runs one judgment submission through the pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use super::client::{CompletionClient, CompletionError};
use super::export::{export_document, ExportBuffer};
use super::prompt::compose_prompt;
use super::template::{load_template, Template, TemplateError};

/// Outcome of a single completion call.
#[derive(Debug)]
pub enum Generation {
    Document(String),
    Failed(CompletionError),
}

impl Generation {
    /// Text to render and to offer for download.
    ///
    /// A failed call still yields text (`"Error: <details>"`), so the page
    /// keeps working the same way for both outcomes.
    pub fn display_text(&self) -> String {
        match self {
            Self::Document(text) => text.clone(),
            Self::Failed(err) => err.user_message(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn export(&self) -> ExportBuffer {
        export_document(&self.display_text())
    }
}

/// Result of pressing the submit control.
#[derive(Debug)]
pub enum Submission {
    /// Nothing was entered; the completion service is not contacted.
    EmptyInput,
    Generated(Generation),
}

#[derive(Clone)]
pub struct JudgmentService {
    client: Arc<dyn CompletionClient>,
    template_path: PathBuf,
}

impl JudgmentService {
    pub fn new(client: Arc<dyn CompletionClient>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            client,
            template_path: template_path.into(),
        }
    }

    /// Read the template fresh from disk.
    pub fn load_template(&self) -> Result<Template, TemplateError> {
        load_template(&self.template_path).inspect_err(|e| {
            log::error!("Template unavailable: {}", e);
        })
    }

    pub async fn submit(&self, template: &Template, user_input: &str) -> Submission {
        if user_input.is_empty() {
            log::info!("Submission rejected: empty situation");
            return Submission::EmptyInput;
        }
        Submission::Generated(self.generate(template, user_input).await)
    }

    /// Compose the prompt and make exactly one completion call.
    pub async fn generate(&self, template: &Template, user_input: &str) -> Generation {
        let generation_id = Uuid::new_v4();
        let prompt = compose_prompt(template.as_str(), user_input);
        log::info!(
            "Generating judgment {} (situation {} chars, prompt {} chars)",
            generation_id,
            user_input.chars().count(),
            prompt.chars().count()
        );

        match self.client.complete(&prompt, user_input).await {
            Ok(text) => {
                log::info!("Judgment {} generated ({} chars)", generation_id, text.chars().count());
                Generation::Document(text)
            }
            Err(e) => {
                log::error!("Judgment {} failed: {}", generation_id, e);
                Generation::Failed(e)
            }
        }
    }
}
