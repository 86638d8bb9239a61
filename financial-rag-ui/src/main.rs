//! Financial RAG UI application
//!
//! Mounts the application shell to `<body>`. Bundle with `trunk serve`.

use financial_rag_ui::{init, load_settings, App};

fn main() {
    init();
    let settings = load_settings();
    leptos::mount::mount_to_body(move || leptos::view! { <App settings=settings /> });
}
