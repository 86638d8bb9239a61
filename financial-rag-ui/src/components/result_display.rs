//! Result panel

use leptos::prelude::*;

/// Result display component
///
/// Shows a fixed "Result:" heading and the given result as plain text. An
/// absent result and an empty one render the same empty paragraph.
///
/// # Props
/// - `result` - Text to display, optional and reactive
#[component]
pub fn ResultDisplay(
    /// Result text supplied by the parent
    #[prop(optional, into)]
    result: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="result-display">
            <h2>"Result:"</h2>
            <p>{move || result.get().unwrap_or_default()}</p>
        </div>
    }
}
