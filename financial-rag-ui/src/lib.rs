//! # Financial RAG UI
//!
//! Browser front end for querying financial reports. The crate ships two
//! leaf components and a small shell that wires them together:
//!
//! - `<QueryForm/>`: text input whose value is handed to a callback on submit
//! - `<ResultDisplay/>`: heading plus the result text supplied by the parent
//! - `<App/>`: composes both and forwards queries to an optional resolver
//!
//! Retrieval, ranking and answer generation live in the backend and are not
//! part of this crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use financial_rag_ui::{QueryForm, ResultDisplay};
//! use leptos::prelude::*;
//!
//! let (result, set_result) = signal(None::<String>);
//! view! {
//!     <QueryForm on_submit=Callback::new(move |q: String| set_result.set(Some(q))) />
//!     <ResultDisplay result=Signal::derive(move || result.get()) />
//! };
//! ```

pub mod components;
pub mod settings;

pub use components::{App, QueryDraft, QueryForm, ResultDisplay};
pub use settings::{SettingsError, UiSettings, SETTINGS_ELEMENT_ID};

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init() {
    console_error_panic_hook::set_once();
    // a second wasm_logger::init reports an error to the console
    if log::max_level() == log::LevelFilter::Off {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("Financial RAG UI initialized");
}

/// Settings from the page, or the defaults when the page has none
pub fn load_settings() -> UiSettings {
    match UiSettings::load_from_document(SETTINGS_ELEMENT_ID) {
        Ok(settings) => settings,
        Err(SettingsError::NotFound(id)) => {
            log::info!("no #{} element, using default settings", id);
            UiSettings::default()
        },
        Err(e) => {
            log::warn!("{}; using default settings", e);
            UiSettings::default()
        },
    }
}
