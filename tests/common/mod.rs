#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use judgment_drafter_server::judgment::{CompletionClient, CompletionError};
use judgment_drafter_server::{AppConfig, AppState};

pub const SAMPLE_TEMPLATE: &str = "FORMAT: {case}";
pub const SAMPLE_SITUATION: &str = "John and Jane, married 5 years, no children";
pub const SAMPLE_JUDGMENT: &str = "주 문\n1. 원고와 피고는 이혼한다.";

/// In-memory completion client that answers with a fixed result.
pub struct StubCompletionClient {
    reply: Result<String, (u16, String)>,
    calls: AtomicUsize,
}

impl StubCompletionClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err((status, message.to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for StubCompletionClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err((status, message)) => Err(CompletionError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn template_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp template");
    file.write_all(content.as_bytes()).expect("write temp template");
    file
}

pub fn test_config(template_path: &Path) -> AppConfig {
    config_with(template_path, &[])
}

pub fn config_with(template_path: &Path, extra: &[(&str, &str)]) -> AppConfig {
    let template_path = template_path.to_string_lossy().to_string();
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    AppConfig::from_lookup(move |name| match name {
        "OPENAI_API_KEY" => Some("sk-test".to_string()),
        "TEMPLATE_PATH" => Some(template_path.clone()),
        other => extra
            .iter()
            .find(|(k, _)| k == other)
            .map(|(_, v)| v.clone()),
    })
    .expect("valid test config")
}

pub fn state_with(client: Arc<dyn CompletionClient>, template_path: &Path) -> AppState {
    AppState::with_client(client, &test_config(template_path)).expect("build app state")
}
