//! Drafting page: form, progress indicator, result and download.

pub mod handlers;
pub mod view;

pub use handlers::config;
pub use view::{PageRenderer, PageView};
