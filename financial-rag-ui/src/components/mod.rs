//! Leptos UI components for the financial RAG front end

pub mod app;
pub mod query_form;
pub mod result_display;

pub use app::App;
pub use query_form::{QueryDraft, QueryForm};
pub use result_display::ResultDisplay;
