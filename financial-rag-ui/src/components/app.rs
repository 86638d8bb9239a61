//! Application shell wiring the query form to the result panel

use leptos::prelude::*;

use super::{QueryForm, ResultDisplay};
use crate::settings::UiSettings;

/// Top-level component
///
/// Owns the last submitted query and the displayed result. Submitted queries
/// go to `on_query` when one is given; its return value becomes the result.
/// Without a resolver the result is left as it is.
///
/// # Props
/// - `settings` - Labels and form behaviour, provided to children as context
/// - `on_query` - Optional resolver from query to result text
#[component]
pub fn App(
    /// Settings shared with the form and result panel
    #[prop(optional)]
    settings: Option<UiSettings>,
    /// Resolver producing the result for a query
    #[prop(optional)]
    on_query: Option<Callback<String, Option<String>>>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let title = settings.title.clone();
    provide_context(settings);

    let (last_query, set_last_query) = signal(None::<String>);
    let (result, set_result) = signal(None::<String>);

    let handle_query = Callback::new(move |query: String| {
        log::info!("query received: {:?}", query);
        set_last_query.set(Some(query.clone()));

        match on_query {
            Some(resolver) => set_result.set(resolver.run(query)),
            None => log::debug!("no query resolver attached; result unchanged"),
        }
    });

    view! {
        <main class="financial-rag">
            <h1>{title}</h1>
            <QueryForm on_submit=handle_query />
            {move || last_query.get().map(|query| view! {
                <p class="last-query">{format!("Last query: {}", query)}</p>
            })}
            <ResultDisplay result=Signal::derive(move || result.get()) />
        </main>
    }
}
