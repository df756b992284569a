//! Judgment module - drafting divorce judgments with a hosted completion model.
//!
//! The pipeline is split into one submodule per step:
//! - `template` - loads the judgment-format template from disk
//! - `prompt` - wraps template and situation into the instruction text
//! - `client` - sends the instruction to the chat-completion endpoint
//! - `export` - encodes the generated text for download
//! - `service` - runs the steps in order for one submission
//! - `handlers` - JSON API over the same pipeline

pub mod client;
pub mod export;
pub mod handlers;
pub mod prompt;
pub mod service;
pub mod template;

pub use client::{CompletionClient, CompletionError, OpenAiClient};
pub use export::{export_document, ExportBuffer};
pub use prompt::compose_prompt;
pub use service::{Generation, JudgmentService, Submission};
pub use template::{load_template, Template, TemplateError};
